//! Component store accessor used by the interpreter to load sub-component
//! trees and project configuration.

use crate::error::PreviewResult;
use async_trait::async_trait;
use atelier_model::{ComponentId, NodeRef};
use atelier_styles::ProjectConfig;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[async_trait]
pub trait DesignStore: Send + Sync {
    /// Editable tree of a component: the user's draft when one exists,
    /// otherwise the committed version
    async fn load_component_tree(
        &self,
        id: ComponentId,
        user: &str,
    ) -> PreviewResult<Option<NodeRef>>;

    async fn load_project_config(&self, project_id: &str) -> PreviewResult<Option<ProjectConfig>>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    committed: RwLock<HashMap<ComponentId, NodeRef>>,
    drafts: RwLock<HashMap<(String, ComponentId), NodeRef>>,
    projects: RwLock<HashMap<String, ProjectConfig>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn commit(&self, id: ComponentId, tree: NodeRef) {
        self.committed.write().await.insert(id, tree);
    }

    pub async fn save_draft(&self, user: &str, id: ComponentId, tree: NodeRef) {
        self.drafts
            .write()
            .await
            .insert((user.to_string(), id), tree);
    }

    pub async fn discard_draft(&self, user: &str, id: ComponentId) -> Option<NodeRef> {
        self.drafts.write().await.remove(&(user.to_string(), id))
    }

    pub async fn put_project(&self, project_id: &str, config: ProjectConfig) {
        self.projects
            .write()
            .await
            .insert(project_id.to_string(), config);
    }
}

#[async_trait]
impl DesignStore for MemoryStore {
    async fn load_component_tree(
        &self,
        id: ComponentId,
        user: &str,
    ) -> PreviewResult<Option<NodeRef>> {
        if let Some(draft) = self.drafts.read().await.get(&(user.to_string(), id)) {
            return Ok(Some(draft.clone()));
        }
        Ok(self.committed.read().await.get(&id).cloned())
    }

    async fn load_project_config(&self, project_id: &str) -> PreviewResult<Option<ProjectConfig>> {
        Ok(self.projects.read().await.get(project_id).cloned())
    }
}
