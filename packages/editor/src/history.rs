//! # Undo/Redo History
//!
//! Trees are persistent, so history keeps whole snapshots instead of inverse
//! operations. A snapshot shares every subtree with its neighbours, which
//! keeps deep histories cheap.
//!
//! - Applying a mutation records the tree it replaced
//! - Undo swaps the current tree for the last snapshot and keeps the current
//!   one for redo
//! - New edits clear the redo stack
//! - Batches group several mutations into one undo step

use crate::errors::EditResult;
use crate::mutations::Mutation;
use crate::structural::EditOutcome;
use atelier_model::NodeRef;
use tracing::debug;

#[derive(Debug, Clone)]
struct Snapshot {
    root: NodeRef,
    description: Option<String>,
}

#[derive(Debug, Default)]
struct Batch {
    start: Option<NodeRef>,
    description: Option<String>,
}

#[derive(Debug)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
    current_batch: Option<Batch>,
}

impl History {
    /// Create a history with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation to `current` and record the replaced tree
    pub fn apply(&mut self, mutation: &Mutation, current: &NodeRef) -> EditResult<EditOutcome> {
        let outcome = mutation.apply(current)?;
        debug!(mutation = mutation.name(), "Recording history entry");
        self.record(current.clone(), Some(mutation.name().to_string()));
        Ok(outcome)
    }

    /// Record `previous` as an undo step (for edits made outside `apply`)
    pub fn record(&mut self, previous: NodeRef, description: Option<String>) {
        if let Some(batch) = &mut self.current_batch {
            if batch.start.is_none() {
                batch.start = Some(previous);
            }
            return;
        }

        self.push(Snapshot {
            root: previous,
            description,
        });
    }

    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.current_batch = Some(Batch {
            start: None,
            description: Some(description.into()),
        });
    }

    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if let Some(start) = batch.start {
                self.push(Snapshot {
                    root: start,
                    description: batch.description,
                });
            }
        }
    }

    fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        self.redo_stack.clear();
    }

    /// Tree to show after undoing, or `None` when there is nothing to undo
    pub fn undo(&mut self, current: &NodeRef) -> Option<NodeRef> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(Snapshot {
            root: current.clone(),
            description: snapshot.description.clone(),
        });
        Some(snapshot.root)
    }

    pub fn redo(&mut self, current: &NodeRef) -> Option<NodeRef> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(Snapshot {
            root: current.clone(),
            description: snapshot.description.clone(),
        });
        Some(snapshot.root)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().and_then(|s| s.description.as_deref())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_model::{Path, VisualElementModel};

    fn tree() -> NodeRef {
        VisualElementModel::new("div")
            .with_child(VisualElementModel::new("h1"))
            .with_child(VisualElementModel::new("p"))
            .into_ref()
    }

    fn delete_first() -> Mutation {
        Mutation::Delete {
            path: Path::parse("0,0").unwrap(),
        }
    }

    #[test]
    fn test_history_creation() {
        let history = History::new();
        assert_eq!(history.undo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_apply_undo_redo() {
        let original = tree();
        let mut history = History::new();

        let edited = history.apply(&delete_first(), &original).unwrap().root;
        assert_eq!(edited.children.len(), 1);
        assert_eq!(history.undo_description(), Some("delete"));

        let undone = history.undo(&edited).unwrap();
        assert_eq!(undone, original);
        assert!(history.can_redo());

        let redone = history.redo(&undone).unwrap();
        assert_eq!(redone, edited);
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let original = tree();
        let mut history = History::new();

        let edited = history.apply(&delete_first(), &original).unwrap().root;
        let undone = history.undo(&edited).unwrap();
        assert_eq!(history.redo_levels(), 1);

        history.apply(&delete_first(), &undone).unwrap();
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_batch_is_one_step() {
        let original = tree();
        let mut history = History::new();

        history.begin_batch("clear children");
        let once = history.apply(&delete_first(), &original).unwrap().root;
        let twice = history.apply(&delete_first(), &once).unwrap().root;
        history.end_batch();

        assert_eq!(twice.children.len(), 0);
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.undo_description(), Some("clear children"));
        assert_eq!(history.undo(&twice).unwrap(), original);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = History::with_max_levels(2);
        let mut current = tree();
        for i in 0..3 {
            let mutation = Mutation::SetProperty {
                path: Path::root(),
                name: "data-step".into(),
                value: i.to_string(),
            };
            current = history.apply(&mutation, &current).unwrap().root;
        }
        assert_eq!(history.undo_levels(), 2);
    }

    #[test]
    fn test_failed_mutation_records_nothing() {
        let mut history = History::new();
        let result = history.apply(
            &Mutation::Delete {
                path: Path::root(),
            },
            &tree(),
        );
        assert!(result.is_err());
        assert!(!history.can_undo());
    }
}
