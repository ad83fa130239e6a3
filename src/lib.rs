pub mod csv_processor;
pub mod language;
pub mod merge;
pub mod translation;
pub mod utils;

pub use csv_processor::{CsvStreamReader, CsvStreamWriter};
pub use language::{Language, LanguagePair, LANGUAGES};
pub use merge::{merge_directory, MergeOutcome, MergeReport, VocabularyTable};
pub use translation::{
    translate_batch, BatchReport, HttpTransport, PairWriters, RetryPolicy, TranslationCache, Transport,
    Translator,
};
pub use utils::{AppConfig, Result, VocabError};
