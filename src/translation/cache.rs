use crate::language::Language;
use std::collections::HashMap;

/// Per-run translations, keyed by language pair and then by source text.
#[derive(Debug, Clone, Default)]
pub struct TranslationCache {
    pairs: HashMap<(Language, Language), HashMap<String, String>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, text: &str, source: Language, target: Language) -> Option<&str> {
        self.pairs
            .get(&(source, target))
            .and_then(|terms| terms.get(text))
            .map(String::as_str)
    }

    pub fn insert(&mut self, text: String, source: Language, target: Language, translated: String) {
        self.pairs
            .entry((source, target))
            .or_default()
            .insert(text, translated);
    }

    pub fn len(&self) -> usize {
        self.pairs.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_scoped_by_language_pair() {
        let mut cache = TranslationCache::new();
        cache.insert("cat".into(), Language::English, Language::German, "Katze".into());

        assert_eq!(cache.get("cat", Language::English, Language::German), Some("Katze"));
        assert_eq!(cache.get("cat", Language::English, Language::French), None);
        assert_eq!(cache.len(), 1);
    }
}
