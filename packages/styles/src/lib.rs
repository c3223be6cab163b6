//! # Atelier Styles
//!
//! Converts style declarations attached to design nodes into CSS (for the
//! live preview) and into utility classes (for exported source), and
//! converts imported inline CSS or class lists back into declarations.
//!
//! ## Pipeline
//!
//! ```text
//! "hover:padding-top: 8"
//!        ↓ Declaration::parse
//! pseudos [hover], name padding-top, value 8
//!        ↓ token → palette → named style → property table
//! CSS:     padding-top: 8px             (StyleEngine::resolve)
//! Classes: hover:pt-[8px]               (StyleEngine::convert_declaration)
//!        ↓ merge_symmetric over a node's style list
//! hover:py-[8px]
//! ```
//!
//! Project data (palette, named styles, translations) is injected through the
//! lookup traits in [`lookup`]; the engine never performs I/O.

pub mod config;
mod convert;
pub mod declaration;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod merge;
pub mod properties;
mod reverse;
pub mod tokens;

#[cfg(test)]
mod tests_conversion;
#[cfg(test)]
mod tests_reverse;

pub use config::ProjectConfig;
pub use declaration::{Conditional, Declaration, PSEUDO_PREFIXES};
pub use engine::{parse_css_text, CssProperty, ResolvedStyle, StyleEngine};
pub use error::{StyleError, StyleResult};
pub use lookup::{NamedStyleLookup, NoLookup, PaletteLookup, TranslationLookup};
pub use merge::merge_symmetric;
