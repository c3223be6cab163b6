//! The closed vocabulary of style properties and their utility mappings.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Length; a bare number means pixels
    Pixel { prefix: &'static str },
    /// 1-4 value box shorthand (`margin`, `padding`)
    Shorthand { prefix: &'static str },
    /// Color; palette keys are substituted
    Color { prefix: &'static str },
    /// `width style color` shorthand
    Edge { prefix: &'static str },
    /// Keyword values with fixed utility classes
    Keyword,
    /// Emitted verbatim as `prefix-[value]`
    Arbitrary { prefix: &'static str },
}

use PropertyKind::*;

static PROPERTIES: &[(&str, PropertyKind)] = &[
    // Sizing
    ("width", Pixel { prefix: "w" }),
    ("height", Pixel { prefix: "h" }),
    ("min-width", Pixel { prefix: "min-w" }),
    ("max-width", Pixel { prefix: "max-w" }),
    ("min-height", Pixel { prefix: "min-h" }),
    ("max-height", Pixel { prefix: "max-h" }),
    // Spacing
    ("margin", Shorthand { prefix: "m" }),
    ("margin-top", Pixel { prefix: "mt" }),
    ("margin-right", Pixel { prefix: "mr" }),
    ("margin-bottom", Pixel { prefix: "mb" }),
    ("margin-left", Pixel { prefix: "ml" }),
    ("padding", Shorthand { prefix: "p" }),
    ("padding-top", Pixel { prefix: "pt" }),
    ("padding-right", Pixel { prefix: "pr" }),
    ("padding-bottom", Pixel { prefix: "pb" }),
    ("padding-left", Pixel { prefix: "pl" }),
    ("gap", Pixel { prefix: "gap" }),
    ("row-gap", Pixel { prefix: "gap-y" }),
    ("column-gap", Pixel { prefix: "gap-x" }),
    // Offsets
    ("top", Pixel { prefix: "top" }),
    ("right", Pixel { prefix: "right" }),
    ("bottom", Pixel { prefix: "bottom" }),
    ("left", Pixel { prefix: "left" }),
    ("inset", Pixel { prefix: "inset" }),
    // Borders
    ("border-radius", Pixel { prefix: "rounded" }),
    ("border-width", Pixel { prefix: "border" }),
    ("outline-offset", Pixel { prefix: "outline-offset" }),
    ("border", Edge { prefix: "border" }),
    ("border-top", Edge { prefix: "border-t" }),
    ("border-right", Edge { prefix: "border-r" }),
    ("border-bottom", Edge { prefix: "border-b" }),
    ("border-left", Edge { prefix: "border-l" }),
    ("outline", Edge { prefix: "outline" }),
    // Typography
    ("font-size", Pixel { prefix: "text" }),
    ("letter-spacing", Pixel { prefix: "tracking" }),
    ("line-height", Arbitrary { prefix: "leading" }),
    // Colors
    ("color", Color { prefix: "text" }),
    ("background-color", Color { prefix: "bg" }),
    ("background", Color { prefix: "bg" }),
    ("border-color", Color { prefix: "border" }),
    ("outline-color", Color { prefix: "outline" }),
    ("text-decoration-color", Color { prefix: "decoration" }),
    ("fill", Color { prefix: "fill" }),
    ("stroke", Color { prefix: "stroke" }),
    // Misc
    ("opacity", Arbitrary { prefix: "opacity" }),
    ("z-index", Arbitrary { prefix: "z" }),
    ("flex", Arbitrary { prefix: "flex" }),
    ("flex-grow", Arbitrary { prefix: "grow" }),
    ("flex-shrink", Arbitrary { prefix: "shrink" }),
    ("flex-basis", Arbitrary { prefix: "basis" }),
    ("box-shadow", Arbitrary { prefix: "shadow" }),
    ("aspect-ratio", Arbitrary { prefix: "aspect" }),
    ("grid-template-columns", Arbitrary { prefix: "grid-cols" }),
    // Keywords
    ("display", Keyword),
    ("flex-direction", Keyword),
    ("flex-wrap", Keyword),
    ("justify-content", Keyword),
    ("align-items", Keyword),
    ("align-self", Keyword),
    ("align-content", Keyword),
    ("position", Keyword),
    ("text-align", Keyword),
    ("overflow", Keyword),
    ("overflow-x", Keyword),
    ("overflow-y", Keyword),
    ("cursor", Keyword),
    ("font-weight", Keyword),
    ("font-style", Keyword),
    ("text-decoration", Keyword),
    ("text-transform", Keyword),
    ("text-overflow", Keyword),
    ("white-space", Keyword),
    ("object-fit", Keyword),
    ("visibility", Keyword),
    ("border-style", Keyword),
    ("pointer-events", Keyword),
    ("user-select", Keyword),
];

/// (property, value, class) pairs with a fixed utility class
static KEYWORD_CLASSES: &[(&str, &str, &str)] = &[
    ("display", "flex", "flex"),
    ("display", "inline-flex", "inline-flex"),
    ("display", "block", "block"),
    ("display", "inline-block", "inline-block"),
    ("display", "inline", "inline"),
    ("display", "grid", "grid"),
    ("display", "contents", "contents"),
    ("display", "none", "hidden"),
    ("flex-direction", "row", "flex-row"),
    ("flex-direction", "column", "flex-col"),
    ("flex-direction", "row-reverse", "flex-row-reverse"),
    ("flex-direction", "column-reverse", "flex-col-reverse"),
    ("flex-wrap", "wrap", "flex-wrap"),
    ("flex-wrap", "nowrap", "flex-nowrap"),
    ("flex-wrap", "wrap-reverse", "flex-wrap-reverse"),
    ("position", "static", "static"),
    ("position", "relative", "relative"),
    ("position", "absolute", "absolute"),
    ("position", "fixed", "fixed"),
    ("position", "sticky", "sticky"),
    ("text-align", "left", "text-left"),
    ("text-align", "center", "text-center"),
    ("text-align", "right", "text-right"),
    ("text-align", "justify", "text-justify"),
    ("overflow", "auto", "overflow-auto"),
    ("overflow", "hidden", "overflow-hidden"),
    ("overflow", "visible", "overflow-visible"),
    ("overflow", "scroll", "overflow-scroll"),
    ("overflow-x", "auto", "overflow-x-auto"),
    ("overflow-x", "hidden", "overflow-x-hidden"),
    ("overflow-y", "auto", "overflow-y-auto"),
    ("overflow-y", "hidden", "overflow-y-hidden"),
    ("cursor", "pointer", "cursor-pointer"),
    ("cursor", "default", "cursor-default"),
    ("cursor", "text", "cursor-text"),
    ("cursor", "move", "cursor-move"),
    ("cursor", "not-allowed", "cursor-not-allowed"),
    ("cursor", "grab", "cursor-grab"),
    ("font-weight", "100", "font-thin"),
    ("font-weight", "200", "font-extralight"),
    ("font-weight", "300", "font-light"),
    ("font-weight", "400", "font-normal"),
    ("font-weight", "500", "font-medium"),
    ("font-weight", "600", "font-semibold"),
    ("font-weight", "700", "font-bold"),
    ("font-weight", "800", "font-extrabold"),
    ("font-weight", "900", "font-black"),
    ("font-weight", "normal", "font-normal"),
    ("font-weight", "bold", "font-bold"),
    ("font-style", "italic", "italic"),
    ("font-style", "normal", "not-italic"),
    ("text-decoration", "underline", "underline"),
    ("text-decoration", "overline", "overline"),
    ("text-decoration", "line-through", "line-through"),
    ("text-decoration", "none", "no-underline"),
    ("text-transform", "uppercase", "uppercase"),
    ("text-transform", "lowercase", "lowercase"),
    ("text-transform", "capitalize", "capitalize"),
    ("text-transform", "none", "normal-case"),
    ("text-overflow", "ellipsis", "text-ellipsis"),
    ("text-overflow", "clip", "text-clip"),
    ("white-space", "normal", "whitespace-normal"),
    ("white-space", "nowrap", "whitespace-nowrap"),
    ("white-space", "pre", "whitespace-pre"),
    ("white-space", "pre-line", "whitespace-pre-line"),
    ("white-space", "pre-wrap", "whitespace-pre-wrap"),
    ("object-fit", "contain", "object-contain"),
    ("object-fit", "cover", "object-cover"),
    ("object-fit", "fill", "object-fill"),
    ("object-fit", "none", "object-none"),
    ("visibility", "visible", "visible"),
    ("visibility", "hidden", "invisible"),
    ("border-style", "solid", "border-solid"),
    ("border-style", "dashed", "border-dashed"),
    ("border-style", "dotted", "border-dotted"),
    ("border-style", "double", "border-double"),
    ("border-style", "none", "border-none"),
    ("pointer-events", "none", "pointer-events-none"),
    ("pointer-events", "auto", "pointer-events-auto"),
    ("user-select", "none", "select-none"),
    ("user-select", "text", "select-text"),
    ("user-select", "all", "select-all"),
];

/// Alignment properties whose class is derived from the value's last
/// hyphen-separated segment (`space-between` -> `justify-between`)
static ALIGNMENT_FAMILIES: &[(&str, &str)] = &[
    ("justify-content", "justify"),
    ("align-items", "items"),
    ("align-self", "self"),
    ("align-content", "content"),
];

/// Alignment class suffix -> CSS value
static ALIGNMENT_VALUES: &[(&str, &str)] = &[
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("between", "space-between"),
    ("around", "space-around"),
    ("evenly", "space-evenly"),
    ("stretch", "stretch"),
    ("baseline", "baseline"),
    ("auto", "auto"),
];

/// Prefixes accepting `-full` / `-fit`
const EXTENT_PREFIXES: &[&str] = &["w", "h", "min-w", "max-w", "min-h", "max-h", "size"];

/// Prefixes accepting `-auto`
const AUTO_PREFIXES: &[&str] = &[
    "w", "h", "m", "mt", "mr", "mb", "ml", "mx", "my", "top", "right", "bottom", "left", "inset",
];

static INDEX: Lazy<HashMap<&'static str, PropertyKind>> =
    Lazy::new(|| PROPERTIES.iter().copied().collect());

/// Utility prefix -> properties emitting it, in table order
static BY_PREFIX: Lazy<HashMap<&'static str, Vec<(&'static str, PropertyKind)>>> =
    Lazy::new(|| {
        let mut map: HashMap<&'static str, Vec<(&'static str, PropertyKind)>> = HashMap::new();
        for (name, kind) in PROPERTIES {
            let prefix = match kind {
                Pixel { prefix } | Shorthand { prefix } | Color { prefix } | Arbitrary { prefix } => {
                    *prefix
                }
                Edge { .. } | Keyword => continue,
            };
            map.entry(prefix).or_default().push((*name, *kind));
        }
        map
    });

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(\d+(\.\d+)?|\.\d+)$").expect("number pattern is valid"));

static PIXELS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?(\d+(\.\d+)?|\.\d+))px$").expect("pixel pattern is valid"));

static LENGTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(\d+(\.\d+)?|\.\d+)(px|rem|em|%|vh|vw|pt|ch)?$").expect("length pattern is valid")
});

pub fn classify(name: &str) -> Option<PropertyKind> {
    INDEX.get(name).copied()
}

/// Properties that emit `prefix`, for reverse conversion
pub fn properties_for_prefix(prefix: &str) -> &'static [(&'static str, PropertyKind)] {
    BY_PREFIX.get(prefix).map(Vec::as_slice).unwrap_or(&[])
}

pub fn keyword_class(name: &str, value: &str) -> Option<String> {
    if let Some((_, _, class)) = KEYWORD_CLASSES
        .iter()
        .find(|(n, v, _)| *n == name && *v == value)
    {
        return Some(class.to_string());
    }

    let (_, family) = ALIGNMENT_FAMILIES.iter().find(|(n, _)| *n == name)?;
    let suffix = value.rsplit('-').next()?;
    ALIGNMENT_VALUES
        .iter()
        .any(|(s, _)| *s == suffix)
        .then(|| format!("{}-{}", family, suffix))
}

/// `(property, value)` for a fixed keyword class
pub fn keyword_declaration(class: &str) -> Option<(&'static str, String)> {
    if let Some((name, value, _)) = KEYWORD_CLASSES.iter().find(|(_, _, c)| *c == class) {
        return Some((*name, value.to_string()));
    }

    ALIGNMENT_FAMILIES.iter().find_map(|(name, family)| {
        let suffix = class.strip_prefix(family)?.strip_prefix('-')?;
        ALIGNMENT_VALUES
            .iter()
            .find(|(s, _)| *s == suffix)
            .map(|(_, value)| (*name, value.to_string()))
    })
}

pub fn accepts_extent(prefix: &str) -> bool {
    EXTENT_PREFIXES.contains(&prefix)
}

pub fn accepts_auto(prefix: &str) -> bool {
    AUTO_PREFIXES.contains(&prefix)
}

pub fn is_number(value: &str) -> bool {
    NUMBER.is_match(value)
}

/// Number with an optional unit
pub fn is_length(value: &str) -> bool {
    LENGTH.is_match(value)
}

/// `8` -> `8px`; anything else unchanged
pub fn with_px(value: &str) -> String {
    if is_number(value) {
        format!("{}px", value)
    } else {
        value.to_string()
    }
}

/// `8px` -> `8`; anything else unchanged
pub fn strip_px(value: &str) -> String {
    match PIXELS.captures(value) {
        Some(caps) => caps[1].to_string(),
        None => value.to_string(),
    }
}

/// Apply `f` to every whitespace-separated part of a value
pub fn map_parts<F>(value: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    value
        .split_whitespace()
        .map(f)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `prefix-[value]` with spaces written as underscores
pub fn arbitrary_class(prefix: &str, value: &str) -> String {
    format!("{}-[{}]", prefix, escape(value))
}

/// `[name:value]` arbitrary property class
pub fn arbitrary_property(name: &str, value: &str) -> String {
    format!("[{}:{}]", name, escape(value))
}

/// Arbitrary-value escaping: literal `_` becomes `\_`, spaces become `_`
pub fn escape(value: &str) -> String {
    value.trim().replace('_', "\\_").replace(' ', "_")
}

pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'_') => {
                out.push('_');
                chars.next();
            }
            '_' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}
