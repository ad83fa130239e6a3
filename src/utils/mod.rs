pub mod config;
pub mod errors;

pub use config::{AppConfig, LoggingConfig, TranslationConfig, DEEPL_FREE_ENDPOINT};
pub use errors::{Result, VocabError};

/// Trimmed, non-empty first two fields of a record, or `None` if the row is unusable.
pub fn word_pair(record: &csv::StringRecord) -> Option<(&str, &str)> {
    if record.len() < 2 {
        return None;
    }
    let left = record.get(0)?.trim();
    let right = record.get(1)?.trim();
    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left, right))
}
