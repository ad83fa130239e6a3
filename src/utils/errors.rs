use crate::language::Language;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input not found: {0}")]
    InputNotFound(String),

    #[error("DeepL quota exceeded")]
    QuotaExceeded,

    #[error("API returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("failed translation for {source_lang}->{target_lang} after {attempts} attempts: {text} ({last_error})")]
    TranslationFailed {
        text: String,
        source_lang: Language,
        target_lang: Language,
        attempts: u32,
        last_error: String,
    },
}

pub type Result<T> = std::result::Result<T, VocabError>;
