use boarder_core::model::LanguageCatalog;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageOptionVm {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub active: bool,
}

impl LanguageOptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.active {
            "language-option active"
        } else {
            "language-option"
        }
    }
}

#[must_use]
pub fn map_language_options(catalog: &LanguageCatalog, selected: &str) -> Vec<LanguageOptionVm> {
    catalog
        .languages()
        .iter()
        .map(|language| LanguageOptionVm {
            code: language.code().to_owned(),
            name: language.display_name().to_owned(),
            flag: language.flag().to_owned(),
            active: language.code() == selected,
        })
        .collect()
}

/// Display name for the "currently learning in" label; unknown codes show as-is.
#[must_use]
pub fn current_language_label(catalog: &LanguageCatalog, selected: &str) -> String {
    catalog
        .find(selected)
        .map_or_else(|| selected.to_owned(), |language| language.display_name().to_owned())
}
