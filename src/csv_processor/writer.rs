use crate::utils::{Result, VocabError};
use csv::Writer;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Owns one output CSV for the duration of a run. The file is flushed and closed when dropped.
pub struct CsvStreamWriter {
    path: PathBuf,
    writer: Option<Writer<File>>,
    rows_written: usize,
}

impl CsvStreamWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: None,
            rows_written: 0,
        }
    }

    /// Creates (or truncates) the file and optionally writes a header row.
    pub fn initialize(&mut self, headers: Option<&[&str]>) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = Writer::from_writer(file);
        if let Some(headers) = headers {
            writer.write_record(headers)?;
        }
        self.writer = Some(writer);
        Ok(())
    }

    pub fn write_row<I, T>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let writer = self.writer.as_mut().ok_or_else(|| {
            VocabError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "Writer not initialized",
            ))
        })?;

        writer.write_record(row)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(self.rows_written)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Creates the parent directory of `path` if it has one and it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
