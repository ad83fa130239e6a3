use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Russian,
    Dutch,
    Spanish,
    German,
    French,
}

/// File-name form of every supported language, in table order.
pub const LANGUAGES: [(&str, Language); 6] = [
    ("english", Language::English),
    ("russian", Language::Russian),
    ("dutch", Language::Dutch),
    ("spanish", Language::Spanish),
    ("german", Language::German),
    ("french", Language::French),
];

impl Language {
    pub fn from_name(name: &str) -> Option<Self> {
        LANGUAGES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, lang)| *lang)
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Russian => "russian",
            Language::Dutch => "dutch",
            Language::Spanish => "spanish",
            Language::German => "german",
            Language::French => "french",
        }
    }

    /// Two-letter lowercase code used in merged table headers.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Dutch => "nl",
            Language::Spanish => "es",
            Language::German => "de",
            Language::French => "fr",
        }
    }

    /// Upper-case code expected by the DeepL `source_lang`/`target_lang` fields.
    pub fn api_code(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Russian => "RU",
            Language::Dutch => "NL",
            Language::Spanish => "ES",
            Language::German => "DE",
            Language::French => "FR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_code())
    }
}

/// A `<left>-<right>` vocabulary file orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    pub left: Language,
    pub right: Language,
}

impl LanguagePair {
    pub fn new(left: Language, right: Language) -> Self {
        Self { left, right }
    }

    /// Parses a file name such as `english-russian.csv`. The `.csv` suffix is optional.
    pub fn parse_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".csv").unwrap_or(name);
        let mut parts = stem.split('-');
        let left = Language::from_name(parts.next()?)?;
        let right = Language::from_name(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { left, right })
    }

    pub fn file_name(&self) -> String {
        format!("{}-{}.csv", self.left.name(), self.right.name())
    }

    pub fn involves(&self, lang: Language) -> bool {
        self.left == lang || self.right == lang
    }
}
