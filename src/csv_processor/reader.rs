use crate::utils::{word_pair, Result, VocabError};
use csv::StringRecord;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Headerless reader over two-column vocabulary files. Records of any width are accepted.
pub struct CsvStreamReader {
    path: PathBuf,
}

impl CsvStreamReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn iter_records(&self) -> Result<CsvRecordIterator> {
        let file = File::open(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VocabError::InputNotFound(self.path.display().to_string())
            } else {
                VocabError::IoError(e)
            }
        })?;
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);
        Ok(CsvRecordIterator {
            reader,
            current_index: 0,
        })
    }

    /// Visits every usable `(left, right)` pair with its 1-based record index.
    pub fn for_each_pair<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(usize, &str, &str) -> Result<()>,
    {
        for result in self.iter_records()? {
            let (index, record) = result?;
            if let Some((left, right)) = word_pair(&record) {
                visit(index + 1, left, right)?;
            }
        }
        Ok(())
    }
}

/// Yields each record with its 0-based index. Blank lines are not records and do not
/// advance the index.
pub struct CsvRecordIterator {
    reader: csv::Reader<File>,
    current_index: usize,
}

impl Iterator for CsvRecordIterator {
    type Item = Result<(usize, StringRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.records().next() {
            Some(Ok(record)) => {
                let index = self.current_index;
                self.current_index += 1;
                Some(Ok((index, record)))
            }
            Some(Err(e)) => Some(Err(VocabError::CsvError(e))),
            None => None,
        }
    }
}

/// Lists `*.csv` regular files directly inside `dir`, sorted by file name.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(VocabError::InputNotFound(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path.extension().map(|ext| ext == "csv").unwrap_or(false);
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
