use crate::error::{StyleError, StyleResult};
use crate::lookup::{NamedStyleLookup, PaletteLookup, TranslationLookup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Project-wide style configuration, loaded by the host and read-only here
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// name -> CSS text
    #[serde(default)]
    pub named_styles: BTreeMap<String, String>,

    /// name -> real color value
    #[serde(default)]
    pub named_colors: BTreeMap<String, String>,

    /// key -> display text
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

impl ProjectConfig {
    pub fn from_json(source: &str) -> StyleResult<Self> {
        serde_json::from_str(source).map_err(|e| StyleError::InvalidConfig(e.to_string()))
    }

    pub fn with_named_style(mut self, name: impl Into<String>, css: impl Into<String>) -> Self {
        self.named_styles.insert(name.into(), css.into());
        self
    }

    pub fn with_named_color(mut self, name: impl Into<String>, color: impl Into<String>) -> Self {
        self.named_colors.insert(name.into(), color.into());
        self
    }

    pub fn with_translation(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(key.into(), text.into());
        self
    }

    /// Entries of `other` replace entries with the same name
    pub fn merge(&mut self, other: ProjectConfig) {
        self.named_styles.extend(other.named_styles);
        self.named_colors.extend(other.named_colors);
        self.translations.extend(other.translations);
    }
}

impl PaletteLookup for ProjectConfig {
    fn color(&self, name: &str) -> Option<&str> {
        self.named_colors.get(name).map(String::as_str)
    }

    fn name_for(&self, value: &str) -> Option<&str> {
        self.named_colors
            .iter()
            .find(|(_, color)| color.eq_ignore_ascii_case(value))
            .map(|(name, _)| name.as_str())
    }
}

impl NamedStyleLookup for ProjectConfig {
    fn named_style(&self, name: &str) -> Option<&str> {
        self.named_styles.get(name).map(String::as_str)
    }
}

impl TranslationLookup for ProjectConfig {
    fn translate(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let config = ProjectConfig::from_json(
            r##"{
                "namedStyles": { "card": "padding: 16px; border-radius: 8px" },
                "namedColors": { "primary": "#3366FF" }
            }"##,
        )
        .unwrap();

        assert_eq!(config.color("primary"), Some("#3366FF"));
        assert_eq!(config.color("Primary"), None);
        assert_eq!(config.name_for("#3366ff"), Some("primary"));
        assert!(config.named_style("card").is_some());
        assert!(config.translations.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = ProjectConfig::from_json("{ namedColors: 1 }").unwrap_err();
        assert!(matches!(err, StyleError::InvalidConfig(_)));
    }

    #[test]
    fn test_merge_overrides() {
        let mut config = ProjectConfig::default().with_named_color("primary", "#000");
        config.merge(
            ProjectConfig::default()
                .with_named_color("primary", "#fff")
                .with_translation("save", "Save"),
        );
        assert_eq!(config.color("primary"), Some("#fff"));
        assert_eq!(config.translate("save"), Some("Save"));
    }
}
