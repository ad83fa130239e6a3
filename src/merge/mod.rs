pub mod table;

pub use table::{header, VocabularyTable, PIVOT, TARGETS};

use crate::csv_processor::{ensure_parent_dir, list_csv_files, CsvStreamReader, CsvStreamWriter};
use crate::language::{Language, LanguagePair};
use crate::utils::Result;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub rows_written: usize,
    pub files_merged: usize,
    /// Per target language, only languages with at least one empty cell.
    pub missing: Vec<(Language, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Written(MergeReport),
    /// No pivot-keyed rows were found; nothing was written.
    NoPivotInput,
}

/// Reads every resolvable pivot-keyed file in `input_dir` into a table.
/// Returns the table and the number of files that contributed to it.
pub fn collect(input_dir: &Path) -> Result<(VocabularyTable, usize)> {
    let mut table = VocabularyTable::new();
    let mut files_merged = 0;

    for path in list_csv_files(input_dir)? {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let Some(pair) = LanguagePair::parse_file_name(&file_name) else {
            debug!(file = %file_name, "Skipping file with unresolvable language pair");
            continue;
        };
        if !pair.involves(PIVOT) {
            debug!(file = %file_name, "Skipping file without pivot language");
            continue;
        }

        let before = table.len();
        CsvStreamReader::new(&path).for_each_pair(|_, left, right| {
            table.insert(pair, left, right);
            Ok(())
        })?;
        files_merged += 1;

        debug!(
            file = %file_name,
            new_words = table.len() - before,
            "Merged vocabulary file"
        );
    }

    Ok((table, files_merged))
}

/// Writes the merged table with its header, overwriting `output`.
pub fn write_table(table: &VocabularyTable, output: &Path) -> Result<usize> {
    ensure_parent_dir(output)?;

    let header = header();
    let mut writer = CsvStreamWriter::new(output);
    writer.initialize(Some(header.as_slice()))?;
    for row in table.rows() {
        writer.write_row(row)?;
    }
    writer.finish()
}

pub fn merge_directory(input_dir: &Path, output: &Path) -> Result<MergeOutcome> {
    let (table, files_merged) = collect(input_dir)?;

    if table.is_empty() {
        info!(input_dir = %input_dir.display(), "No English-keyed vocabularies found");
        return Ok(MergeOutcome::NoPivotInput);
    }

    let rows_written = write_table(&table, output)?;

    let missing: Vec<_> = table
        .missing_counts()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    for (lang, count) in &missing {
        info!(lang = lang.code(), count = *count, "missing {}: {}", lang.code(), count);
    }

    info!(
        output = %output.display(),
        rows_written,
        files_merged,
        "Merged vocabulary written"
    );

    Ok(MergeOutcome::Written(MergeReport {
        rows_written,
        files_merged,
        missing,
    }))
}
