//! Project lookups injected into the engine. Implementations are in-memory;
//! the engine itself never performs I/O.

pub trait PaletteLookup: Send + Sync {
    /// Real color for a palette key (exact, case-sensitive match)
    fn color(&self, name: &str) -> Option<&str>;

    /// Palette key for a real color, used by reverse conversion
    fn name_for(&self, _value: &str) -> Option<&str> {
        None
    }
}

pub trait NamedStyleLookup: Send + Sync {
    /// CSS text (`prop: value; prop: value`) of a named style
    fn named_style(&self, name: &str) -> Option<&str>;
}

pub trait TranslationLookup: Send + Sync {
    fn translate(&self, key: &str) -> Option<&str>;
}

/// Lookup with no entries
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl PaletteLookup for NoLookup {
    fn color(&self, _name: &str) -> Option<&str> {
        None
    }
}

impl NamedStyleLookup for NoLookup {
    fn named_style(&self, _name: &str) -> Option<&str> {
        None
    }
}

impl TranslationLookup for NoLookup {
    fn translate(&self, _key: &str) -> Option<&str> {
        None
    }
}
