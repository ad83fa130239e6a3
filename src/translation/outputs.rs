use crate::csv_processor::CsvStreamWriter;
use crate::language::{Language, LanguagePair};
use crate::utils::Result;
use std::path::{Path, PathBuf};

/// Language of the first input column.
pub const SOURCE_LANG: Language = Language::Dutch;
/// Language of the second input column.
pub const PIVOT_LANG: Language = Language::English;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Source,
    Pivot,
}

impl Origin {
    pub fn language(self) -> Language {
        match self {
            Origin::Source => SOURCE_LANG,
            Origin::Pivot => PIVOT_LANG,
        }
    }
}

/// Translations requested for every input row, in request order.
pub const DERIVATIONS: [(Origin, Language); 5] = [
    (Origin::Source, Language::Russian),
    (Origin::Pivot, Language::Russian),
    (Origin::Pivot, Language::Spanish),
    (Origin::Pivot, Language::German),
    (Origin::Pivot, Language::French),
];

/// One word of a translated row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Source,
    Pivot,
    Translated { from: Origin, to: Language },
}

impl Cell {
    pub fn language(self) -> Language {
        match self {
            Cell::Source => SOURCE_LANG,
            Cell::Pivot => PIVOT_LANG,
            Cell::Translated { to, .. } => to,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPair {
    pub left: Cell,
    pub right: Cell,
}

impl OutputPair {
    const fn new(left: Cell, right: Cell) -> Self {
        Self { left, right }
    }

    pub fn languages(&self) -> LanguagePair {
        LanguagePair::new(self.left.language(), self.right.language())
    }

    pub fn file_name(&self) -> String {
        self.languages().file_name()
    }
}

const RU_FROM_SOURCE: Cell = Cell::Translated {
    from: Origin::Source,
    to: Language::Russian,
};
const RU: Cell = Cell::Translated {
    from: Origin::Pivot,
    to: Language::Russian,
};
const ES: Cell = Cell::Translated {
    from: Origin::Pivot,
    to: Language::Spanish,
};
const DE: Cell = Cell::Translated {
    from: Origin::Pivot,
    to: Language::German,
};
const FR: Cell = Cell::Translated {
    from: Origin::Pivot,
    to: Language::French,
};

pub const OUTPUT_PAIRS: [OutputPair; 8] = [
    OutputPair::new(Cell::Source, RU_FROM_SOURCE),
    OutputPair::new(Cell::Pivot, RU),
    OutputPair::new(ES, Cell::Pivot),
    OutputPair::new(ES, RU),
    OutputPair::new(DE, Cell::Pivot),
    OutputPair::new(DE, RU),
    OutputPair::new(FR, Cell::Pivot),
    OutputPair::new(FR, RU),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTranslations {
    pub source: String,
    pub pivot: String,
    pub derived: Vec<((Origin, Language), String)>,
}

impl RowTranslations {
    pub fn new(source: impl Into<String>, pivot: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            pivot: pivot.into(),
            derived: Vec::with_capacity(DERIVATIONS.len()),
        }
    }

    pub fn origin_text(&self, origin: Origin) -> &str {
        match origin {
            Origin::Source => &self.source,
            Origin::Pivot => &self.pivot,
        }
    }

    pub fn cell(&self, cell: Cell) -> &str {
        match cell {
            Cell::Source => &self.source,
            Cell::Pivot => &self.pivot,
            Cell::Translated { from, to } => self
                .derived
                .iter()
                .find(|(key, _)| *key == (from, to))
                .map(|(_, text)| text.as_str())
                .unwrap_or(""),
        }
    }
}

/// All derived-pair output files, opened together and closed together on drop.
pub struct PairWriters {
    writers: Vec<(OutputPair, CsvStreamWriter)>,
}

impl PairWriters {
    pub fn create(output_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(output_dir)?;

        let mut writers = Vec::with_capacity(OUTPUT_PAIRS.len());
        for pair in OUTPUT_PAIRS {
            let mut writer = CsvStreamWriter::new(output_dir.join(pair.file_name()));
            writer.initialize(None)?;
            writers.push((pair, writer));
        }
        Ok(Self { writers })
    }

    pub fn write_row(&mut self, row: &RowTranslations) -> Result<()> {
        for (pair, writer) in &mut self.writers {
            writer.write_row([row.cell(pair.left), row.cell(pair.right)])?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        for (_, writer) in &mut self.writers {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.writers
            .iter()
            .map(|(_, writer)| writer.path().to_path_buf())
            .collect()
    }

    /// Flushes every file and returns the number of rows written to each.
    pub fn finish(self) -> Result<usize> {
        let mut rows = 0;
        for (_, writer) in self.writers {
            rows = writer.finish()?;
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_file_names_follow_pair_naming() {
        let names: Vec<_> = OUTPUT_PAIRS.iter().map(OutputPair::file_name).collect();
        assert_eq!(
            names,
            vec![
                "dutch-russian.csv",
                "english-russian.csv",
                "spanish-english.csv",
                "spanish-russian.csv",
                "german-english.csv",
                "german-russian.csv",
                "french-english.csv",
                "french-russian.csv",
            ]
        );
    }

    #[test]
    fn every_translated_cell_has_a_derivation() {
        for pair in OUTPUT_PAIRS {
            for cell in [pair.left, pair.right] {
                if let Cell::Translated { from, to } = cell {
                    assert!(DERIVATIONS.contains(&(from, to)));
                }
            }
        }
    }

    #[test]
    fn russian_from_source_and_pivot_are_distinct_cells() {
        let mut row = RowTranslations::new("hallo", "hello");
        row.derived.push(((Origin::Source, Language::Russian), "алло".into()));
        row.derived.push(((Origin::Pivot, Language::Russian), "привет".into()));

        assert_eq!(row.cell(RU_FROM_SOURCE), "алло");
        assert_eq!(row.cell(RU), "привет");
        assert_eq!(row.cell(Cell::Pivot), "hello");
    }
}
