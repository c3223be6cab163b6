//! Forward conversion: style declarations -> utility classes.

use crate::declaration::{Conditional, Declaration};
use crate::engine::{parse_css_text, StyleEngine};
use crate::error::{StyleError, StyleResult};
use crate::merge::merge_symmetric;
use crate::properties::{
    self, accepts_auto, accepts_extent, arbitrary_class, arbitrary_property, keyword_class,
    with_px, PropertyKind,
};
use crate::tokens;
use tracing::{debug, instrument};

impl<'a> StyleEngine<'a> {
    /// Convert one declaration to a space-separated class string
    pub fn convert_declaration(&self, raw: &str) -> StyleResult<String> {
        Ok(self.declaration_classes(raw)?.join(" "))
    }

    /// Classes for one declaration. A conditional value yields a single
    /// `${cond ? '...' : '...'}` entry.
    pub fn declaration_classes(&self, raw: &str) -> StyleResult<Vec<String>> {
        self.convert_parsed(&Declaration::parse(raw))
    }

    /// Convert a node's style list and run the symmetry merge
    #[instrument(skip_all, fields(declarations = styles.len()))]
    pub fn convert_declarations<S: AsRef<str>>(&self, styles: &[S]) -> StyleResult<Vec<String>> {
        let mut classes = Vec::new();
        for style in styles {
            classes.extend(self.declaration_classes(style.as_ref())?);
        }

        let merged = merge_symmetric(classes);
        debug!(classes = merged.len(), "Converted declarations");
        Ok(merged)
    }

    /// Exported class attribute value: `"a b"`, or ``{`a ${...}`}`` when any
    /// class is conditional
    pub fn class_attribute<S: AsRef<str>>(&self, styles: &[S]) -> StyleResult<String> {
        let classes = self.convert_declarations(styles)?;
        let joined = classes.join(" ");

        if classes.iter().any(|c| c.starts_with("${")) {
            Ok(format!("{{`{}`}}", joined))
        } else {
            Ok(format!("\"{}\"", joined))
        }
    }

    fn convert_parsed(&self, declaration: &Declaration) -> StyleResult<Vec<String>> {
        if !declaration.is_token() {
            if let Some(conditional) = Conditional::parse(&declaration.value) {
                let left = self.branch_classes(declaration, &conditional.left)?;
                let right = self.branch_classes(declaration, &conditional.right)?;
                return Ok(vec![format!(
                    "${{{} ? '{}' : '{}'}}",
                    conditional.condition, left, right
                )]);
            }
        }

        let classes = self.plain_classes(declaration)?;
        Ok(classes
            .iter()
            .map(|class| declaration.apply_variants(class))
            .collect())
    }

    fn branch_classes(&self, declaration: &Declaration, value: &str) -> StyleResult<String> {
        if value.is_empty() {
            return Ok(String::new());
        }
        Ok(self.convert_parsed(&declaration.with_value(value))?.join(" "))
    }

    fn plain_classes(&self, declaration: &Declaration) -> StyleResult<Vec<String>> {
        if declaration.is_token() {
            if let Some(token) = tokens::lookup(&declaration.name) {
                return Ok(token.classes.split_whitespace().map(String::from).collect());
            }
            return match self.named_styles.named_style(&declaration.name) {
                Some(css) => self.named_style_classes(css),
                None => Err(declaration.unsupported()),
            };
        }

        let palette_color =
            declaration.name == "color" && self.palette.color(&declaration.value).is_some();
        if !palette_color {
            if let Some(css) = self.named_styles.named_style(&declaration.key()) {
                return self.named_style_classes(css);
            }
        }

        self.property_classes(&declaration.name, &declaration.value)
    }

    fn named_style_classes(&self, css: &str) -> StyleResult<Vec<String>> {
        let mut classes = Vec::new();
        for property in parse_css_text(css) {
            classes.extend(self.property_classes(&property.name, &property.value)?);
        }
        Ok(classes)
    }

    /// Classes for one CSS property
    pub fn property_classes(&self, name: &str, value: &str) -> StyleResult<Vec<String>> {
        let kind =
            properties::classify(name).ok_or_else(|| StyleError::unsupported(name, value))?;

        let classes = match kind {
            PropertyKind::Pixel { prefix } => vec![pixel_class(prefix, value)],
            PropertyKind::Shorthand { prefix } => shorthand_classes(name, prefix, value)?,
            PropertyKind::Color { prefix } => {
                vec![arbitrary_class(prefix, &self.color_value(value))]
            }
            PropertyKind::Edge { prefix } => self.edge_classes(name, prefix, value),
            PropertyKind::Keyword => {
                vec![keyword_class(name, value).unwrap_or_else(|| arbitrary_property(name, value))]
            }
            PropertyKind::Arbitrary { prefix } => vec![arbitrary_class(prefix, value)],
        };

        Ok(classes)
    }

    /// `width style color` shorthands. `1px solid <color>` collapses to the
    /// plain edge class plus a color class.
    fn edge_classes(&self, name: &str, prefix: &str, value: &str) -> Vec<String> {
        let parts: Vec<&str> = value.split_whitespace().collect();

        match parts[..] {
            ["none"] | ["0"] => vec![format!("{}-0", prefix)],
            [width] if properties::is_number(width) || properties::is_length(width) => {
                vec![arbitrary_class(prefix, &with_px(width))]
            }
            [width, style, color] => {
                let width = with_px(width);
                let color = self.color_value(color);
                if width == "1px" && style == "solid" {
                    vec![prefix.to_string(), arbitrary_class(prefix, &color)]
                } else {
                    vec![
                        arbitrary_class(prefix, &width),
                        arbitrary_property(&format!("{}-style", name), style),
                        arbitrary_class(prefix, &color),
                    ]
                }
            }
            _ => vec![arbitrary_property(name, value)],
        }
    }
}

/// Class for a pixel property: extent keywords, `auto`, or `prefix-[value]`
fn pixel_class(prefix: &str, value: &str) -> String {
    match value {
        "100%" if accepts_extent(prefix) => format!("{}-full", prefix),
        "fit-content" if accepts_extent(prefix) => format!("{}-fit", prefix),
        "auto" if accepts_auto(prefix) => format!("{}-auto", prefix),
        _ => arbitrary_class(prefix, &properties::map_parts(value, with_px)),
    }
}

/// 1-4 value margin/padding shorthands
fn shorthand_classes(name: &str, prefix: &str, value: &str) -> StyleResult<Vec<String>> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let side = |suffix: &str, part: &str| pixel_class(&format!("{}{}", prefix, suffix), part);

    let classes = match parts[..] {
        [all] => vec![side("", all)],
        [vertical, horizontal] => vec![side("y", vertical), side("x", horizontal)],
        [top, horizontal, bottom] => vec![side("t", top), side("x", horizontal), side("b", bottom)],
        [top, right, bottom, left] => vec![
            side("t", top),
            side("r", right),
            side("b", bottom),
            side("l", left),
        ],
        _ => return Err(StyleError::unsupported(name, value)),
    };

    Ok(classes)
}
