//! Tokenization, phrase matching and profile tabulation

pub mod phrase_matcher;
pub mod profile;
pub mod tokenizer;
