//! Output formatters for candidate profile reports

use crate::config::OutputFormat;
use crate::error::{ProfilerError, Result};
use crate::output::report::ProfileReport;
use crate::processing::profile::CandidateProfile;
use colored::{Color, Colorize};
use std::path::Path;

/// Column names shared by tabular formats.
pub const TABLE_HEADERS: [&str; 4] = ["company", "domain", "buzzword", "count"];

/// Trait for formatting profile reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console table with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    show_domain_totals: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

/// Flat CSV with one line per profile row
pub struct CsvFormatter;

/// Markdown tables, one per candidate
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that dispatches to the right formatter
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    csv_formatter: CsvFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, show_domain_totals: bool) -> Self {
        Self {
            use_colors,
            show_domain_totals,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_profile(&self, profile: &CandidateProfile) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header(&format!(
            "{} ({} mentions)",
            profile.identifier,
            profile.total_mentions()
        )));

        let domain_width = profile
            .rows
            .iter()
            .map(|r| r.domain.as_str().len())
            .chain(std::iter::once(TABLE_HEADERS[1].len()))
            .max()
            .unwrap_or(0);
        let buzzword_width = profile
            .rows
            .iter()
            .map(|r| r.buzzword.chars().count())
            .chain(std::iter::once(TABLE_HEADERS[2].len()))
            .max()
            .unwrap_or(0);

        let header = format!(
            "  {:<dw$}  {:<bw$}  {:>5}",
            TABLE_HEADERS[1],
            TABLE_HEADERS[2],
            TABLE_HEADERS[3],
            dw = domain_width,
            bw = buzzword_width
        );
        output.push_str(&self.colorize(&header, Color::White));
        output.push('\n');

        for row in &profile.rows {
            let domain = format!("{:<dw$}", row.domain.as_str(), dw = domain_width);
            output.push_str(&format!(
                "  {}  {:<bw$}  {:>5}\n",
                self.colorize(&domain, Color::Cyan),
                row.buzzword,
                row.count,
                bw = buzzword_width
            ));
        }

        if self.show_domain_totals {
            let totals: Vec<String> = profile
                .domain_totals()
                .into_iter()
                .map(|(domain, total)| format!("{}={}", domain, total))
                .collect();
            output.push_str(&format!("  {} {}\n", self.colorize("Domains:", Color::Green), totals.join(", ")));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 CANDIDATE KEYWORD PROFILES"));
        output.push_str(&format!(
            "Generated: {} | Files: {} | Catalog phrases: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.files_processed,
            report.metadata.catalog_phrases
        ));

        for profile in &report.profiles {
            output.push_str(&self.format_profile(profile));
        }

        if self.show_domain_totals && report.profiles.len() > 1 {
            output.push_str(&self.format_header("All candidates"));
            for (domain, total) in report.domain_totals() {
                output.push_str(&format!("  {:<18} {:>5}\n", domain.as_str(), total));
            }
        }

        if !report.skipped.is_empty() {
            output.push_str(&self.format_header("Skipped"));
            for skipped in &report.skipped {
                let marker = if skipped.no_keywords {
                    self.colorize("[no keywords]", Color::Yellow)
                } else {
                    self.colorize("[error]", Color::Red)
                };
                output.push_str(&format!("  {} {}: {}\n", marker, skipped.path.display(), skipped.reason));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(TABLE_HEADERS)?;

        for row in report.rows() {
            writer.write_record([
                row.company.as_str(),
                row.domain.as_str(),
                row.buzzword.as_str(),
                row.count.to_string().as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ProfilerError::OutputFormatting(format!("Failed to flush CSV: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ProfilerError::OutputFormatting(format!("CSV output is not UTF-8: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Csv
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        let mut output = String::from("# Candidate Keyword Profiles\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "_Generated {} from {} files against {} catalog phrases._\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.files_processed,
                report.metadata.catalog_phrases
            ));
        }

        for profile in &report.profiles {
            output.push_str(&format!("## {}\n\n", Self::escape_cell(&profile.identifier)));
            output.push_str(&format!("| {} |\n", TABLE_HEADERS.join(" | ")));
            output.push_str("|---|---|---|---:|\n");
            for row in &profile.rows {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    Self::escape_cell(&row.company),
                    row.domain,
                    Self::escape_cell(&row.buzzword),
                    row.count
                ));
            }
            output.push('\n');
        }

        if !report.skipped.is_empty() {
            output.push_str("## Skipped\n\n");
            for skipped in &report.skipped {
                output.push_str(&format!("- `{}`: {}\n", skipped.path.display(), skipped.reason));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true)
    }

    pub fn with_options(use_colors: bool, show_domain_totals: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, show_domain_totals),
            json_formatter: JsonFormatter::new(true),
            csv_formatter: CsvFormatter,
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &ProfileReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Csv => self.csv_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, base_name: &str, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Markdown => "md",
    };
    format!("{}_profile{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::error::ProfilerError;
    use crate::processing::profile::ProfileRow;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_report() -> ProfileReport {
        let rows = vec![
            ProfileRow {
                company: "acme".to_string(),
                domain: Category::Python,
                buzzword: "python".to_string(),
                count: 2,
            },
            ProfileRow {
                company: "acme".to_string(),
                domain: Category::MachineLearning,
                buzzword: "random forest".to_string(),
                count: 1,
            },
        ];
        let mut report = ProfileReport::new(Some(PathBuf::from("keywords.csv")), 10);
        report.extend_outcomes(vec![
            (
                PathBuf::from("cvs/acme.pdf"),
                Ok(CandidateProfile {
                    identifier: "acme".to_string(),
                    source: PathBuf::from("cvs/acme.pdf"),
                    rows,
                }),
            ),
            (PathBuf::from("cvs/chef.pdf"), Err(ProfilerError::NoMatches("cvs/chef.pdf".into()))),
        ]);
        report
    }

    #[test]
    fn test_csv_output() {
        let output = CsvFormatter.format_report(&sample_report()).unwrap();
        assert_eq!(
            output,
            "company,domain,buzzword,count\nacme,python,python,2\nacme,machine_learning,random forest,1\n"
        );
    }

    #[test]
    fn test_json_output() {
        let output = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["profiles"][0]["identifier"], "acme");
        assert_eq!(value["profiles"][0]["rows"][1]["domain"], "machine_learning");
        assert_eq!(value["skipped"][0]["no_keywords"], true);
    }

    #[test]
    fn test_console_output_without_colors() {
        let output = ConsoleFormatter::new(false, true).format_report(&sample_report()).unwrap();
        assert!(output.contains("acme (3 mentions)"));
        assert!(output.contains("random forest"));
        assert!(output.contains("Domains: machine_learning=1, python=2"));
        assert!(output.contains("[no keywords] cvs/chef.pdf"));
    }

    #[test]
    fn test_markdown_output() {
        let output = MarkdownFormatter::new(false).format_report(&sample_report()).unwrap();
        assert!(output.starts_with("# Candidate Keyword Profiles\n\n## acme\n"));
        assert!(output.contains("| acme | python | python | 2 |"));
        assert!(output.contains("## Skipped"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false);
        let report = sample_report();
        for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Csv, OutputFormat::Markdown] {
            assert!(!generator.generate_report(&report, &format).unwrap().is_empty());
        }
    }

    #[test]
    fn test_suggest_filename_and_save() {
        assert_eq!(suggest_filename(&OutputFormat::Csv, "cvs", false), "cvs_profile.csv");
        assert!(suggest_filename(&OutputFormat::Json, "cvs", true).ends_with(".json"));

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("report.md");
        save_report_to_file("# hi\n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# hi\n");
    }
}
