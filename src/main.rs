//! cv-profiler: keyword frequency profiles for PDF resumes

use clap::Parser;
use cv_profiler::catalog::KeywordCatalog;
use cv_profiler::cli::{self, Cli, Commands, ConfigAction};
use cv_profiler::config::Config;
use cv_profiler::error::{ProfilerError, Result};
use cv_profiler::input::file_lister::list_pdf_files;
use cv_profiler::output::formatter::{save_report_to_file, suggest_filename};
use cv_profiler::output::{ProfileReport, ReportGenerator};
use cv_profiler::pipeline::ProfilePipeline;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(_) if matches!(cli.command, Commands::Config { action: Some(ConfigAction::Reset) }) => {
            Config::default()
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config.as_deref()) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Profile {
            dir,
            file,
            keywords,
            output,
            save,
            fail_fast,
        } => {
            let format = match output {
                Some(output) => cli::parse_output_format(&output).map_err(ProfilerError::InvalidInput)?,
                None => config.output.format,
            };
            let catalog_path = resolve_catalog_path(keywords, &config)?;
            let catalog = KeywordCatalog::from_csv_path(&catalog_path)?;
            if catalog.is_empty() {
                warn!("Keyword catalog {} has no phrases", catalog_path.display());
            }

            let pipeline = ProfilePipeline::from_config(&config, &catalog)?;
            let mut report = ProfileReport::new(Some(catalog_path), catalog.len());

            let (files, base_name) = match (dir, file) {
                (_, Some(file)) => {
                    cli::validate_file_extension(&file, &["pdf"])
                        .map_err(|e| ProfilerError::InvalidInput(format!("CV file: {}", e)))?;
                    let base = stem_or(&file, "cv");
                    (vec![file], base)
                }
                (Some(dir), None) => {
                    let base = stem_or(&dir, "cvs");
                    (list_pdf_files(&dir)?, base)
                }
                (None, None) => {
                    return Err(ProfilerError::InvalidInput(
                        "Either --dir or --file is required".to_string(),
                    ))
                }
            };

            info!("Profiling {} file(s) against {} phrases", files.len(), catalog.len());
            let progress = ProgressBar::new(files.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            let mut outcomes = pipeline.profile_files_with(&files, |path, outcome| {
                progress.set_message(path.display().to_string());
                progress.inc(1);
                !(fail_fast && outcome.is_err())
            });

            if fail_fast && matches!(outcomes.last(), Some((_, Err(_)))) {
                if let Some((path, Err(e))) = outcomes.pop() {
                    progress.abandon();
                    error!("Aborting at {}", path.display());
                    return Err(e);
                }
            }
            progress.finish_and_clear();
            report.extend_outcomes(outcomes);

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, config.output.show_domain_totals);
            let rendered = generator.generate_report(&report, &format)?;

            match save {
                Some(target) => {
                    let target = if target.is_dir() {
                        target.join(suggest_filename(&format, &base_name, true))
                    } else {
                        target
                    };
                    save_report_to_file(&rendered, &target)?;
                    println!("✅ Saved {} profile(s) to {}", report.profiles.len(), target.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Catalog { keywords } => {
            let catalog_path = resolve_catalog_path(keywords, &config)?;
            let catalog = KeywordCatalog::from_csv_path(&catalog_path)?;

            println!("📚 Keyword catalog: {}\n", catalog_path.display());
            for (category, phrases) in catalog.iter() {
                println!("  • {:<18} {:>4} phrases", category.as_str(), phrases.len());
            }
            println!("\nTotal: {} phrases", catalog.len());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                match &config.catalog.default_path {
                    Some(path) => println!("Default catalog: {}", path.display()),
                    None => println!("Default catalog: (none)"),
                }
                println!("Lowercase phrases: {}", config.catalog.lowercase_phrases);
                println!("Noise tokens: {:?}", config.extraction.noise_tokens);
                println!("Output format: {:?}", config.output.format);
                println!("Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Path) => {
                let path = config_path.map(Path::to_path_buf).unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let path = Config::default().save(config_path)?;
                println!("✅ Configuration written to {}", path.display());
            }
        },
    }

    Ok(())
}

fn resolve_catalog_path(keywords: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    let path = keywords
        .or_else(|| config.catalog.default_path.clone())
        .ok_or_else(|| {
            ProfilerError::InvalidInput(
                "No keyword catalog given; pass --keywords or set catalog.default_path".to_string(),
            )
        })?;

    cli::validate_file_extension(&path, &["csv"])
        .map_err(|e| ProfilerError::InvalidInput(format!("Keyword catalog: {}", e)))?;
    Ok(path)
}

fn stem_or(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
