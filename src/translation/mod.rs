pub mod cache;
pub mod client;
pub mod outputs;
pub mod retry;

pub use cache::TranslationCache;
pub use client::{HttpTransport, TranslateRequest, Transport, TransportResponse, Translator};
pub use outputs::{OutputPair, PairWriters, RowTranslations, DERIVATIONS, OUTPUT_PAIRS};
pub use retry::{backoff_delay, retry_with_backoff, AttemptError, RetryError, RetryPolicy};

use crate::csv_processor::CsvStreamReader;
use crate::utils::{word_pair, Result};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub rows_read: usize,
    pub rows_translated: usize,
    pub outputs: Vec<PathBuf>,
}

/// Issues every derived translation for one `(source, pivot)` input row.
pub async fn translate_row<T: Transport>(
    translator: &mut Translator<T>,
    source: &str,
    pivot: &str,
) -> Result<RowTranslations> {
    let mut row = RowTranslations::new(source, pivot);
    for (origin, target) in DERIVATIONS {
        let text = row.origin_text(origin).to_string();
        let translated = translator
            .translate(&text, origin.language(), target)
            .await?;
        row.derived.push(((origin, target), translated));
    }
    Ok(row)
}

/// Translates every usable row of `input` into the derived-pair files under `output_dir`.
///
/// Stops at the first fatal translation error. Files written so far are left in place.
pub async fn translate_batch<T: Transport>(
    input: &Path,
    output_dir: &Path,
    translator: &mut Translator<T>,
    progress_every: usize,
) -> Result<BatchReport> {
    let records = CsvStreamReader::new(input).iter_records()?;
    let mut writers = PairWriters::create(output_dir)?;
    let outputs = writers.paths();

    let mut rows_read = 0;
    let mut rows_translated = 0;

    for result in records {
        let (index, record) = result?;
        rows_read += 1;
        let line = index + 1;

        let Some((source, pivot)) = word_pair(&record) else {
            continue;
        };

        let row = translate_row(translator, source, pivot).await?;
        writers.write_row(&row)?;
        rows_translated += 1;

        if progress_every > 0 && line % progress_every == 0 {
            writers.flush()?;
            info!(rows = line, "translated {} rows", line);
        }
    }

    writers.finish()?;
    info!(
        rows_read,
        rows_translated,
        cached = translator.cache().len(),
        output_dir = %output_dir.display(),
        "done"
    );

    Ok(BatchReport {
        rows_read,
        rows_translated,
        outputs,
    })
}
