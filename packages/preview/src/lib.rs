//! # Atelier Preview
//!
//! Design-time interpreter turning a component tree into a render tree for
//! the design surface. Nothing is executed: caller-bound values (`props.X`)
//! are looked up through the [`Scope`] chain, lists are materialized from
//! sample data, and images fall back to placeholders.
//!
//! ```text
//! VisualElementModel ──► Interpreter::resolve_preview ──► PreviewDocument
//!                          │            │
//!                          │            └─ StyleEngine::resolve (CSS)
//!                          └─ DesignStore::load_component_tree (sub-components)
//! ```

pub mod error;
pub mod interpreter;
pub mod items;
pub mod registry;
pub mod render;
pub mod scope;
pub mod store;

pub use error::{PreviewError, PreviewResult};
pub use interpreter::{
    HighlightSink, Interpreter, PreviewOptions, DEFAULT_MAX_DEPTH, DEFAULT_PLACEHOLDER_BASE_URL,
};
pub use registry::{ElementKind, ElementRegistry, FieldType};
pub use render::{AttributeValue, PreviewDocument, RenderElement, RenderNode};
pub use scope::{Invocation, Scope};
pub use store::{DesignStore, MemoryStore};
