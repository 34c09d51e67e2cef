//! UI string lookup. The engine only needs one string (the label of the
//! synthetic "All" facet) but the catalog is loaded as a whole.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Key of the label shown on the facet that clears the category filter.
pub const ALL_FACET_KEY: &str = "products_screen_all_text";

/// Errors from loading a locale file.
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Failed to read locale file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse locale file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Lookup-by-key capability supplied by the host application.
pub trait Localizer: Send + Sync {
    fn lookup(&self, key: &str) -> Option<String>;

    /// Like [`Localizer::lookup`] but never fails: an unknown key renders as itself.
    fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }
}

#[derive(Deserialize)]
struct LocaleFile {
    locale: Option<String>,
    #[serde(default)]
    strings: HashMap<String, String>,
}

/// Key/value string table with English defaults.
#[derive(Clone, Debug)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Catalog {
    pub fn english() -> Self {
        let mut entries = HashMap::new();
        entries.insert(ALL_FACET_KEY.to_string(), "All".to_string());
        Self {
            locale: "en".to_string(),
            entries,
        }
    }

    /// Parses a locale file of the form
    ///
    /// ```toml
    /// locale = "ar"
    /// [strings]
    /// products_screen_all_text = "الكل"
    /// ```
    ///
    /// Keys the file does not define keep their English value.
    pub fn from_toml_str(input: &str) -> Result<Self, LocaleError> {
        let file: LocaleFile = toml::from_str(input)?;
        let mut catalog = Self::english();
        if let Some(locale) = file.locale {
            catalog.locale = locale;
        }
        catalog.entries.extend(file.strings);
        Ok(catalog)
    }

    pub fn from_file(path: &Path) -> Result<Self, LocaleError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Localizer for Catalog {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_all_label() {
        let catalog = Catalog::english();
        assert_eq!(catalog.lookup(ALL_FACET_KEY).as_deref(), Some("All"));
        assert_eq!(catalog.locale(), "en");
    }

    #[test]
    fn unknown_key_translates_to_itself() {
        let catalog = Catalog::english();
        assert_eq!(catalog.lookup("missing_key"), None);
        assert_eq!(catalog.translate("missing_key"), "missing_key");
    }

    #[test]
    fn toml_overrides_defaults() {
        let catalog = Catalog::from_toml_str(
            "locale = \"ar\"\n[strings]\nproducts_screen_all_text = \"الكل\"\ngreeting = \"أهلا\"\n",
        )
        .unwrap();
        assert_eq!(catalog.locale(), "ar");
        assert_eq!(catalog.translate(ALL_FACET_KEY), "الكل");
        assert_eq!(catalog.translate("greeting"), "أهلا");
    }

    #[test]
    fn toml_without_strings_keeps_english() {
        let catalog = Catalog::from_toml_str("locale = \"fr\"\n").unwrap();
        assert_eq!(catalog.translate(ALL_FACET_KEY), "All");
    }

    #[test]
    fn invalid_toml_is_error() {
        assert!(matches!(
            Catalog::from_toml_str("strings = ["),
            Err(LocaleError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Catalog::from_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(LocaleError::Io(_))));
    }
}
