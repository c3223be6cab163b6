use crate::store::FileStore;
use anyhow::{anyhow, Result};
use atelier_preview::{
    DesignStore, ElementKind, ElementRegistry, PreviewOptions, DEFAULT_PLACEHOLDER_BASE_URL,
};
use atelier_styles::ProjectConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "atelier.config.json";

/// Atelier configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding components, drafts and project configs
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Acting user; their drafts shadow committed components
    #[serde(default = "default_user")]
    pub user: String,

    /// Project whose stored config is loaded before the inline overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub named_styles: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub named_colors: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_base_url: Option<String>,

    /// Plugin element kinds and their typed fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub plugins: BTreeMap<String, ElementKind>,
}

fn default_store_dir() -> String {
    ".atelier".to_string()
}

fn default_user() -> String {
    "designer".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| anyhow!("Invalid {}: {}", config_path.display(), e))?;
            Ok(config)
        } else {
            debug!("No {} found, using defaults", DEFAULT_CONFIG_NAME);
            Ok(Config::default())
        }
    }

    pub fn store_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.store_dir)
    }

    /// Inline style/palette/translation entries
    pub fn inline_project(&self) -> ProjectConfig {
        ProjectConfig {
            named_styles: self.named_styles.clone(),
            named_colors: self.named_colors.clone(),
            translations: self.translations.clone(),
        }
    }

    /// Stored project config (when `project` is set) with inline entries
    /// layered on top
    pub async fn project_config(&self, store: &FileStore) -> Result<ProjectConfig> {
        let mut project = match &self.project {
            Some(id) => store
                .load_project_config(id)
                .await?
                .ok_or_else(|| anyhow!("Project '{}' not found in {}", id, store.root().display()))?,
            None => ProjectConfig::default(),
        };
        project.merge(self.inline_project());
        Ok(project)
    }

    pub fn registry(&self) -> ElementRegistry {
        let mut registry = ElementRegistry::html();
        registry.extend(self.plugins.clone());
        registry
    }

    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            placeholder_base_url: self
                .placeholder_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_BASE_URL.to_string()),
            ..PreviewOptions::for_user(self.user.clone())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            user: default_user(),
            project: None,
            named_styles: BTreeMap::new(),
            named_colors: BTreeMap::new(),
            translations: BTreeMap::new(),
            placeholder_base_url: None,
            plugins: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_preview::FieldType;

    #[test]
    fn test_parse_config() {
        let json = r##"{
            "storeDir": "design",
            "user": "ana",
            "project": "web",
            "namedColors": { "primary": "#3366FF" },
            "placeholderBaseUrl": "https://img.test",
            "plugins": {
                "BButton": { "text": "text", "onClick": "handler" }
            }
        }"##;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.store_dir, "design");
        assert_eq!(config.user, "ana");
        assert_eq!(config.project.as_deref(), Some("web"));
        assert_eq!(config.named_colors["primary"], "#3366FF");

        let registry = config.registry();
        assert_eq!(
            registry.get("BButton").and_then(|k| k.field_type("onClick")),
            Some(&FieldType::Handler)
        );
        assert!(registry.is_known("div"));

        let options = config.preview_options();
        assert_eq!(options.user, "ana");
        assert_eq!(options.placeholder_base_url, "https://img.test");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store_dir, ".atelier");
        assert_eq!(config.user, "designer");
        assert!(config.project.is_none());
        assert_eq!(
            config.preview_options().placeholder_base_url,
            DEFAULT_PLACEHOLDER_BASE_URL
        );

        let written = serde_json::to_string(&config).unwrap();
        assert_eq!(written, r#"{"storeDir":".atelier","user":"designer"}"#);
    }

    #[tokio::test]
    async fn test_inline_entries_override_stored_project() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store
            .save_project(
                "web",
                &ProjectConfig::default()
                    .with_named_color("primary", "#000")
                    .with_named_color("muted", "#888"),
            )
            .await
            .unwrap();

        let config = Config {
            project: Some("web".to_string()),
            named_colors: BTreeMap::from([("primary".to_string(), "#3366FF".to_string())]),
            ..Config::default()
        };
        let project = config.project_config(&store).await.unwrap();
        assert_eq!(project.named_colors["primary"], "#3366FF");
        assert_eq!(project.named_colors["muted"], "#888");

        let missing = Config {
            project: Some("mobile".to_string()),
            ..Config::default()
        };
        assert!(missing.project_config(&store).await.is_err());
    }
}
