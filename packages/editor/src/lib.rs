//! # Atelier Editor
//!
//! Structural edit engine for design trees.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ editing UI: drag handles, property panel    │
//! └─────────────────────────────────────────────┘
//!                     ↓ Mutation
//! ┌─────────────────────────────────────────────┐
//! │ editor: path-keyed copy-on-write edits      │
//! │  - move / insert / delete / replace         │
//! │  - property, style and visibility edits     │
//! │  - snapshot history for undo/redo           │
//! └─────────────────────────────────────────────┘
//!                     ↓ new tree + selection
//! ┌─────────────────────────────────────────────┐
//! │ preview: tree → render tree                 │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Paths are the only identity**: selections are recomputed after edits
//! 2. **Persistent trees**: edits return a new root and share untouched subtrees
//! 3. **Explicit failures**: invalid drops return a [`StructuralError`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use atelier_editor::{move_node, DropPosition};
//! use atelier_model::Path;
//!
//! let outcome = move_node(&root, &Path::parse("0,2")?, &Path::parse("0,0")?, DropPosition::Before)?;
//! let selected = outcome.selection;
//! ```

pub mod attributes;
mod errors;
mod history;
mod mutations;
mod spine;
pub mod structural;

pub use errors::{EditResult, StructuralError};
pub use history::History;
pub use mutations::Mutation;
pub use structural::{
    delete, insert, insert_as_root, move_node, renumber_after_removal, replace, DropPosition,
    EditOutcome,
};
