use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LanguageError {
    #[error("language catalog cannot be empty")]
    Empty,

    #[error("language code cannot be empty")]
    EmptyCode,

    #[error("duplicate language code {0}")]
    DuplicateCode(String),
}

/// A selectable display language.
///
/// Selection is cosmetic: no text is translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    code: String,
    display_name: String,
    flag: String,
}

impl Language {
    /// # Errors
    ///
    /// Returns `LanguageError::EmptyCode` for a blank code.
    pub fn new(
        code: impl Into<String>,
        display_name: impl Into<String>,
        flag: impl Into<String>,
    ) -> Result<Self, LanguageError> {
        let code = code.into().trim().to_owned();
        if code.is_empty() {
            return Err(LanguageError::EmptyCode);
        }
        let display_name = display_name.into().trim().to_owned();
        let display_name = if display_name.is_empty() {
            code.clone()
        } else {
            display_name
        };

        Ok(Self {
            code,
            display_name,
            flag: flag.into(),
        })
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn flag(&self) -> &str {
        &self.flag
    }
}

/// Ordered list of languages offered by the selector. The first entry is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl LanguageCatalog {
    /// # Errors
    ///
    /// Returns `LanguageError::Empty` or `LanguageError::DuplicateCode`.
    pub fn new(languages: Vec<Language>) -> Result<Self, LanguageError> {
        if languages.is_empty() {
            return Err(LanguageError::Empty);
        }
        let mut seen = HashSet::with_capacity(languages.len());
        for language in &languages {
            if !seen.insert(language.code()) {
                return Err(LanguageError::DuplicateCode(language.code().to_owned()));
            }
        }
        Ok(Self { languages })
    }

    /// # Errors
    ///
    /// Only fails if the built-in table itself is malformed.
    pub fn builtin() -> Result<Self, LanguageError> {
        const BUILTIN: [(&str, &str); 6] = [
            ("English", "🇺🇸"),
            ("Español", "🇪🇸"),
            ("Français", "🇫🇷"),
            ("Deutsch", "🇩🇪"),
            ("中文", "🇨🇳"),
            ("हिंदी", "🇮🇳"),
        ];

        let languages = BUILTIN
            .into_iter()
            .map(|(name, flag)| Language::new(name, name, flag))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(languages)
    }

    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Language> {
        let code = code.trim();
        self.languages.iter().find(|language| language.code() == code)
    }

    #[must_use]
    pub fn default_language(&self) -> &Language {
        // Non-empty by construction.
        &self.languages[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_languages_start_with_english() {
        let catalog = LanguageCatalog::builtin().unwrap();
        assert_eq!(catalog.languages().len(), 6);
        assert_eq!(catalog.default_language().code(), "English");
        assert_eq!(catalog.find("中文").map(Language::flag), Some("🇨🇳"));
    }

    #[test]
    fn find_trims_and_misses_unknown() {
        let catalog = LanguageCatalog::builtin().unwrap();
        assert!(catalog.find(" Deutsch ").is_some());
        assert!(catalog.find("Klingon").is_none());
    }

    #[test]
    fn language_falls_back_to_code_for_name() {
        let language = Language::new("pt", "  ", "🇵🇹").unwrap();
        assert_eq!(language.display_name(), "pt");
        assert_eq!(Language::new(" ", "x", ""), Err(LanguageError::EmptyCode));
    }

    #[test]
    fn catalog_rejects_duplicates_and_empty() {
        let en = Language::new("English", "English", "🇺🇸").unwrap();
        assert_eq!(
            LanguageCatalog::new(vec![en.clone(), en]),
            Err(LanguageError::DuplicateCode("English".into()))
        );
        assert_eq!(LanguageCatalog::new(Vec::new()), Err(LanguageError::Empty));
    }
}
