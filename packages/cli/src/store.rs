//! File-backed component store.
//!
//! ```text
//! <store>/components/<id>.tree        committed trees
//! <store>/drafts/<user>/<id>.tree     in-progress drafts
//! <store>/projects/<id>.json          project configs
//! ```

use async_trait::async_trait;
use atelier_model::{parse, serialize, ComponentId, NodeRef, VisualElementModel};
use atelier_preview::{DesignStore, PreviewError, PreviewResult};
use atelier_styles::ProjectConfig;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn component_path(&self, id: ComponentId) -> PathBuf {
        self.root.join("components").join(format!("{}.tree", id))
    }

    pub fn draft_path(&self, user: &str, id: ComponentId) -> PathBuf {
        self.root
            .join("drafts")
            .join(user)
            .join(format!("{}.tree", id))
    }

    pub fn project_path(&self, project_id: &str) -> PathBuf {
        self.root.join("projects").join(format!("{}.json", project_id))
    }

    pub async fn save_component(&self, id: ComponentId, tree: &VisualElementModel) -> PreviewResult<()> {
        write(&self.component_path(id), &serialize(tree)).await
    }

    pub async fn save_draft(
        &self,
        user: &str,
        id: ComponentId,
        tree: &VisualElementModel,
    ) -> PreviewResult<()> {
        write(&self.draft_path(user, id), &serialize(tree)).await
    }

    pub async fn save_project(&self, project_id: &str, config: &ProjectConfig) -> PreviewResult<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| PreviewError::store(e.to_string()))?;
        write(&self.project_path(project_id), &json).await
    }

    async fn load_tree(&self, path: &Path) -> PreviewResult<Option<NodeRef>> {
        match read(path).await? {
            Some(source) => Ok(Some(Arc::new(parse(&source)?))),
            None => Ok(None),
        }
    }
}

/// File contents, `None` when the file does not exist
async fn read(path: &Path) -> PreviewResult<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(source) => Ok(Some(source)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PreviewError::store(format!("{}: {}", path.display(), e))),
    }
}

async fn write(path: &Path, contents: &str) -> PreviewResult<()> {
    let io_error = |e: std::io::Error| PreviewError::store(format!("{}: {}", path.display(), e));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(io_error)?;
    }
    fs::write(path, contents).await.map_err(io_error)
}

#[async_trait]
impl DesignStore for FileStore {
    async fn load_component_tree(
        &self,
        id: ComponentId,
        user: &str,
    ) -> PreviewResult<Option<NodeRef>> {
        if let Some(draft) = self.load_tree(&self.draft_path(user, id)).await? {
            debug!(component = id, user, "Loaded draft");
            return Ok(Some(draft));
        }
        self.load_tree(&self.component_path(id)).await
    }

    async fn load_project_config(&self, project_id: &str) -> PreviewResult<Option<ProjectConfig>> {
        match read(&self.project_path(project_id)).await? {
            Some(json) => Ok(Some(ProjectConfig::from_json(&json)?)),
            None => Ok(None),
        }
    }
}
