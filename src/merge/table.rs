use crate::language::{Language, LanguagePair};
use std::collections::{HashMap, HashSet};

pub const PIVOT: Language = Language::English;

/// Merged column order after the pivot column.
pub const TARGETS: [Language; 5] = [
    Language::Russian,
    Language::Dutch,
    Language::Spanish,
    Language::German,
    Language::French,
];

pub fn header() -> Vec<&'static str> {
    std::iter::once(PIVOT.code())
        .chain(TARGETS.iter().map(|lang| lang.code()))
        .collect()
}

/// Pivot-keyed vocabulary accumulated across files, in first-seen order.
#[derive(Debug, Default)]
pub struct VocabularyTable {
    order: Vec<String>,
    seen: HashSet<String>,
    translations: HashMap<Language, HashMap<String, String>>,
}

impl VocabularyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one trimmed, non-empty word pair read from a file oriented as `pair`.
    /// Pairs without the pivot language are ignored.
    pub fn insert(&mut self, pair: LanguagePair, left_word: &str, right_word: &str) {
        let (pivot_word, other_lang, other_word) = if pair.left == PIVOT {
            (left_word, pair.right, right_word)
        } else if pair.right == PIVOT {
            (right_word, pair.left, left_word)
        } else {
            return;
        };

        if self.seen.insert(pivot_word.to_string()) {
            self.order.push(pivot_word.to_string());
        }

        if TARGETS.contains(&other_lang) {
            // later files overwrite earlier translations
            self.translations
                .entry(other_lang)
                .or_default()
                .insert(pivot_word.to_string(), other_word.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn translation(&self, pivot_word: &str, lang: Language) -> Option<&str> {
        self.translations
            .get(&lang)
            .and_then(|words| words.get(pivot_word))
            .map(String::as_str)
    }

    /// Rows in output column order; untranslated cells are empty.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.order.iter().map(move |pivot_word| {
            std::iter::once(pivot_word.as_str())
                .chain(
                    TARGETS
                        .iter()
                        .map(|lang| self.translation(pivot_word, *lang).unwrap_or("")),
                )
                .collect()
        })
    }

    /// Number of empty cells per target language, in column order.
    pub fn missing_counts(&self) -> Vec<(Language, usize)> {
        TARGETS
            .iter()
            .map(|lang| {
                let missing = self
                    .order
                    .iter()
                    .filter(|word| self.translation(word, *lang).is_none())
                    .count();
                (*lang, missing)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(left: Language, right: Language) -> LanguagePair {
        LanguagePair::new(left, right)
    }

    #[test]
    fn keeps_first_seen_order_without_duplicates() {
        let mut table = VocabularyTable::new();
        table.insert(pair(Language::English, Language::Russian), "hello", "привет");
        table.insert(pair(Language::German, Language::English), "Katze", "cat");
        table.insert(pair(Language::English, Language::Dutch), "hello", "hallo");

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["hello", "привет", "hallo", "", "", ""]);
        assert_eq!(rows[1], vec!["cat", "", "", "", "Katze", ""]);
    }

    #[test]
    fn later_translation_replaces_earlier_one() {
        let mut table = VocabularyTable::new();
        table.insert(pair(Language::English, Language::Russian), "cat", "кошка");
        table.insert(pair(Language::Russian, Language::English), "кот", "cat");

        assert_eq!(table.translation("cat", Language::Russian), Some("кот"));
    }

    #[test]
    fn ignores_pairs_without_pivot() {
        let mut table = VocabularyTable::new();
        table.insert(pair(Language::Dutch, Language::Spanish), "hallo", "hola");
        assert!(table.is_empty());
    }

    #[test]
    fn pivot_to_pivot_pair_adds_keys_only() {
        let mut table = VocabularyTable::new();
        table.insert(pair(Language::English, Language::English), "dog", "hound");

        assert_eq!(table.len(), 1);
        assert!(table.missing_counts().iter().all(|(_, missing)| *missing == 1));
    }

    #[test]
    fn counts_missing_cells_per_language() {
        let mut table = VocabularyTable::new();
        table.insert(pair(Language::English, Language::Russian), "one", "один");
        table.insert(pair(Language::English, Language::French), "two", "deux");

        let missing: HashMap<_, _> = table.missing_counts().into_iter().collect();
        assert_eq!(missing[&Language::Russian], 1);
        assert_eq!(missing[&Language::French], 1);
        assert_eq!(missing[&Language::Dutch], 2);
    }

    #[test]
    fn header_starts_with_pivot() {
        assert_eq!(header(), vec!["en", "ru", "nl", "es", "de", "fr"]);
    }
}
