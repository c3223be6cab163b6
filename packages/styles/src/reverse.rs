//! Reverse conversion used by the import path: HTML inline CSS or utility
//! class lists back to style declarations.

use crate::engine::{parse_css_text, CssProperty, StyleEngine};
use crate::merge::split_variants;
use crate::properties::{
    self, is_length, keyword_declaration, map_parts, strip_px, unescape, PropertyKind,
};
use crate::tokens::{self, BuiltinToken};
use tracing::{debug, instrument};

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

enum Entry {
    Token(&'static str),
    Property(CssProperty),
}

impl<'a> StyleEngine<'a> {
    /// CSS text (`style="..."` contents) to declarations
    pub fn convert_css_text(&self, css: &str) -> Vec<String> {
        self.convert_html_style(&parse_css_text(css))
    }

    /// Inline CSS properties to declarations, recombining shorthands and
    /// recognizing built-in tokens
    #[instrument(skip_all, fields(properties = css.len()))]
    pub fn convert_html_style(&self, css: &[CssProperty]) -> Vec<String> {
        let mut properties = dedupe(css);
        collapse_outline(&mut properties);
        collapse_box(&mut properties, "padding");
        collapse_box(&mut properties, "margin");

        let mut entries: Vec<Entry> = properties.into_iter().map(Entry::Property).collect();
        for token in tokens::by_specificity() {
            replace_with_token(&mut entries, token);
        }

        let declarations: Vec<String> = entries
            .into_iter()
            .map(|entry| match entry {
                Entry::Token(name) => name.to_string(),
                Entry::Property(p) => {
                    format!("{}: {}", p.name, self.declaration_value(&p.name, &p.value))
                }
            })
            .collect();

        debug!(declarations = declarations.len(), "Imported inline style");
        declarations
    }

    /// Utility class list to declarations. Unrecognized classes pass through
    /// as bare tokens.
    #[instrument(skip(self))]
    pub fn convert_class_list(&self, classes: &str) -> Vec<String> {
        let mut declarations = Vec::new();

        for class in classes.split_whitespace() {
            let (variants, utility) = split_variants(class);
            match self.utility_declarations(utility) {
                Some(found) => declarations.extend(
                    found
                        .into_iter()
                        .map(|declaration| format!("{}{}", variants, declaration)),
                ),
                None => declarations.push(class.to_string()),
            }
        }

        declarations
    }

    fn utility_declarations(&self, utility: &str) -> Option<Vec<String>> {
        if tokens::lookup(utility).is_some() {
            return Some(vec![utility.to_string()]);
        }

        if let Some((name, value)) = keyword_declaration(utility) {
            return Some(vec![format!("{}: {}", name, value)]);
        }

        // [name:value]
        if let Some(inner) = utility.strip_prefix('[').and_then(|u| u.strip_suffix(']')) {
            let (name, value) = inner.split_once(':')?;
            return Some(vec![format!("{}: {}", name, unescape(value))]);
        }

        // prefix-[value]
        let (prefix, rest) = utility.split_once("-[")?;
        let value = unescape(rest.strip_suffix(']')?);

        let names: Vec<&str> = match prefix {
            "px" => vec!["padding-left", "padding-right"],
            "py" => vec!["padding-top", "padding-bottom"],
            "mx" => vec!["margin-left", "margin-right"],
            "my" => vec!["margin-top", "margin-bottom"],
            "size" => vec!["width", "height"],
            prefix => vec![self.property_for_prefix(prefix, &value)?],
        };

        Some(
            names
                .into_iter()
                .map(|name| format!("{}: {}", name, self.declaration_value(name, &value)))
                .collect(),
        )
    }

    /// Property emitting `prefix`. Shared prefixes (`text`, `border`) are
    /// told apart by whether the value is a length.
    fn property_for_prefix(&self, prefix: &str, value: &str) -> Option<&'static str> {
        let candidates = properties::properties_for_prefix(prefix);
        if candidates.len() > 1 {
            let wants_length = is_length(value);
            if let Some((name, _)) = candidates.iter().find(|(_, kind)| {
                matches!(kind, PropertyKind::Color { .. }) != wants_length
            }) {
                return Some(*name);
            }
        }
        candidates.first().map(|(name, _)| *name)
    }

    /// Declaration value for an imported CSS value: pixels stripped, palette
    /// colors named
    fn declaration_value(&self, name: &str, value: &str) -> String {
        match properties::classify(name) {
            Some(PropertyKind::Pixel { .. }) | Some(PropertyKind::Shorthand { .. }) => {
                map_parts(value, strip_px)
            }
            Some(PropertyKind::Color { .. }) => self.palette_name(value),
            Some(PropertyKind::Edge { .. }) => map_parts(value, |part| {
                if is_length(part) {
                    strip_px(part)
                } else {
                    self.palette_name(part)
                }
            }),
            _ => value.to_string(),
        }
    }

    fn palette_name(&self, value: &str) -> String {
        self.palette.name_for(value).unwrap_or(value).to_string()
    }
}

/// Later duplicates replace the value but keep the first position
fn dedupe(css: &[CssProperty]) -> Vec<CssProperty> {
    let mut properties: Vec<CssProperty> = Vec::new();
    for property in css {
        let name = property.name.trim().to_ascii_lowercase();
        let value = property.value.trim().to_string();
        match properties.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value,
            None => properties.push(CssProperty::new(name, value)),
        }
    }
    properties
}

fn position(properties: &[CssProperty], name: &str) -> Option<usize> {
    properties.iter().position(|p| p.name == name)
}

/// `outline: X` + `outline-offset: -1px` without a border becomes `border: X`
fn collapse_outline(properties: &mut Vec<CssProperty>) {
    if position(properties, "border").is_some() {
        return;
    }
    let (Some(outline), Some(offset)) = (
        position(properties, "outline"),
        position(properties, "outline-offset"),
    ) else {
        return;
    };
    if properties[offset].value != "-1px" {
        return;
    }

    properties[outline] = CssProperty::new("border", properties[outline].value.clone());
    properties.remove(offset);
}

/// Four agreeing sides collapse to one value; matching top/bottom and
/// left/right pairs collapse to the two-value form
fn collapse_box(properties: &mut Vec<CssProperty>, name: &str) {
    let names: Vec<String> = SIDES.iter().map(|side| format!("{}-{}", name, side)).collect();
    let Some(indices) = names
        .iter()
        .map(|side| position(properties, side))
        .collect::<Option<Vec<usize>>>()
    else {
        return;
    };

    let values: Vec<&str> = indices.iter().map(|&i| properties[i].value.as_str()).collect();
    let (top, right, bottom, left) = (values[0], values[1], values[2], values[3]);

    let collapsed = if top == right && top == bottom && top == left {
        top.to_string()
    } else if top == bottom && left == right {
        format!("{} {}", top, right)
    } else {
        return;
    };

    let first = indices.iter().copied().min().unwrap_or(0);
    properties[first] = CssProperty::new(name, collapsed);

    let mut rest: Vec<usize> = indices.into_iter().filter(|&i| i != first).collect();
    rest.sort_unstable_by(|a, b| b.cmp(a));
    for index in rest {
        properties.remove(index);
    }
}

fn replace_with_token(entries: &mut Vec<Entry>, token: &'static BuiltinToken) {
    let found: Option<Vec<usize>> = token
        .css
        .iter()
        .map(|(name, value)| {
            entries.iter().position(|entry| match entry {
                Entry::Property(p) => p.name == *name && p.value.eq_ignore_ascii_case(value),
                Entry::Token(_) => false,
            })
        })
        .collect();

    let Some(mut indices) = found else {
        return;
    };

    indices.sort_unstable();
    entries[indices[0]] = Entry::Token(token.name);
    for index in indices.into_iter().skip(1).rev() {
        entries.remove(index);
    }
}
