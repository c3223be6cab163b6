//! Built-in utility tokens.
//!
//! A token is a bare style entry with a fixed expansion. Most are canonical
//! utility classes and convert to themselves; a few are editor shortcuts
//! (`row`, `column`, `center`) that expand to several classes.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug)]
pub struct BuiltinToken {
    pub name: &'static str,
    /// Space-separated utility classes emitted for the token
    pub classes: &'static str,
    pub css: &'static [(&'static str, &'static str)],
}

const fn token(
    name: &'static str,
    classes: &'static str,
    css: &'static [(&'static str, &'static str)],
) -> BuiltinToken {
    BuiltinToken { name, classes, css }
}

pub static BUILTIN_TOKENS: &[BuiltinToken] = &[
    // Display
    token("flex", "flex", &[("display", "flex")]),
    token("inline-flex", "inline-flex", &[("display", "inline-flex")]),
    token("block", "block", &[("display", "block")]),
    token("inline-block", "inline-block", &[("display", "inline-block")]),
    token("grid", "grid", &[("display", "grid")]),
    token("hidden", "hidden", &[("display", "none")]),
    // Flex layout
    token("flex-row", "flex-row", &[("flex-direction", "row")]),
    token("flex-col", "flex-col", &[("flex-direction", "column")]),
    token("flex-wrap", "flex-wrap", &[("flex-wrap", "wrap")]),
    token(
        "row",
        "flex flex-row",
        &[("display", "flex"), ("flex-direction", "row")],
    ),
    token(
        "column",
        "flex flex-col",
        &[("display", "flex"), ("flex-direction", "column")],
    ),
    token(
        "center",
        "flex items-center justify-center",
        &[
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
        ],
    ),
    token("items-center", "items-center", &[("align-items", "center")]),
    token("items-start", "items-start", &[("align-items", "flex-start")]),
    token("items-end", "items-end", &[("align-items", "flex-end")]),
    token("items-stretch", "items-stretch", &[("align-items", "stretch")]),
    token("justify-center", "justify-center", &[("justify-content", "center")]),
    token(
        "justify-between",
        "justify-between",
        &[("justify-content", "space-between")],
    ),
    token("justify-start", "justify-start", &[("justify-content", "flex-start")]),
    token("justify-end", "justify-end", &[("justify-content", "flex-end")]),
    token("flex-1", "flex-1", &[("flex", "1 1 0%")]),
    token("grow", "grow", &[("flex-grow", "1")]),
    token("shrink-0", "shrink-0", &[("flex-shrink", "0")]),
    // Sizing
    token("w-full", "w-full", &[("width", "100%")]),
    token("h-full", "h-full", &[("height", "100%")]),
    token(
        "size-full",
        "size-full",
        &[("width", "100%"), ("height", "100%")],
    ),
    token("w-fit", "w-fit", &[("width", "fit-content")]),
    token("h-fit", "h-fit", &[("height", "fit-content")]),
    // Borders
    token(
        "border",
        "border",
        &[("border-width", "1px"), ("border-style", "solid")],
    ),
    // Positioning
    token("relative", "relative", &[("position", "relative")]),
    token("absolute", "absolute", &[("position", "absolute")]),
    token("fixed", "fixed", &[("position", "fixed")]),
    token("sticky", "sticky", &[("position", "sticky")]),
    token("overflow-hidden", "overflow-hidden", &[("overflow", "hidden")]),
    // Typography
    token(
        "truncate",
        "truncate",
        &[
            ("overflow", "hidden"),
            ("text-overflow", "ellipsis"),
            ("white-space", "nowrap"),
        ],
    ),
    token("italic", "italic", &[("font-style", "italic")]),
    token("underline", "underline", &[("text-decoration", "underline")]),
    token("uppercase", "uppercase", &[("text-transform", "uppercase")]),
    token("font-bold", "font-bold", &[("font-weight", "700")]),
    token("cursor-pointer", "cursor-pointer", &[("cursor", "pointer")]),
];

static INDEX: Lazy<HashMap<&'static str, &'static BuiltinToken>> =
    Lazy::new(|| BUILTIN_TOKENS.iter().map(|t| (t.name, t)).collect());

/// Tokens ordered by number of CSS pairs, largest first, so composite tokens
/// are recognized before the single-property tokens they contain
static BY_SPECIFICITY: Lazy<Vec<&'static BuiltinToken>> = Lazy::new(|| {
    let mut tokens: Vec<_> = BUILTIN_TOKENS.iter().collect();
    tokens.sort_by(|a, b| b.css.len().cmp(&a.css.len()));
    tokens
});

pub fn lookup(name: &str) -> Option<&'static BuiltinToken> {
    INDEX.get(name).copied()
}

pub fn by_specificity() -> &'static [&'static BuiltinToken] {
    &BY_SPECIFICITY
}
