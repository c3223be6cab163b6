//! Style engine and CSS resolution.
//!
//! Resolution order for one declaration (first match wins):
//! 1. built-in utility token
//! 2. `color` whose value is a palette key
//! 3. project named style (`name` or `name: value`)
//! 4. the property table in [`crate::properties`]
//!
//! Anything else is an [`StyleError::UnsupportedDeclaration`].

use crate::config::ProjectConfig;
use crate::declaration::{Conditional, Declaration};
use crate::error::StyleResult;
use crate::lookup::{NamedStyleLookup, NoLookup, PaletteLookup};
use crate::properties::{self, map_parts, with_px, PropertyKind};
use crate::tokens;
use atelier_model::split_declaration;
use serde::{Deserialize, Serialize};
use std::fmt;

static NO_LOOKUP: NoLookup = NoLookup;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CssProperty {
    pub name: String,
    pub value: String,
}

impl CssProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for CssProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// CSS produced by one style entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    /// Pseudo/breakpoint prefixes the properties apply under
    pub pseudos: Vec<String>,
    pub properties: Vec<CssProperty>,
}

impl ResolvedStyle {
    pub fn is_variant(&self) -> bool {
        !self.pseudos.is_empty()
    }
}

/// Split `prop: value; prop: value` CSS text. Names are lowercased; empty
/// entries are skipped.
pub fn parse_css_text(text: &str) -> Vec<CssProperty> {
    text.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let (name, value) = split_declaration(entry);
            (!name.is_empty() && !value.is_empty())
                .then(|| CssProperty::new(name.to_ascii_lowercase(), value))
        })
        .collect()
}

/// Pure style conversion engine over injected project lookups
#[derive(Clone, Copy)]
pub struct StyleEngine<'a> {
    pub(crate) palette: &'a dyn PaletteLookup,
    pub(crate) named_styles: &'a dyn NamedStyleLookup,
}

impl<'a> StyleEngine<'a> {
    pub fn new(palette: &'a dyn PaletteLookup, named_styles: &'a dyn NamedStyleLookup) -> Self {
        Self {
            palette,
            named_styles,
        }
    }

    pub fn from_config(config: &'a ProjectConfig) -> Self {
        Self::new(config, config)
    }

    /// Resolve one style entry to CSS.
    ///
    /// `condition` decides conditional values (`cond ? a : b`); `None` means
    /// the condition cannot be evaluated at design time and the first branch
    /// is used.
    pub fn resolve<F>(&self, raw: &str, condition: F) -> StyleResult<ResolvedStyle>
    where
        F: Fn(&str) -> Option<bool>,
    {
        let declaration = Declaration::parse(raw);
        let properties = self.resolve_declaration(&declaration, &condition)?;
        Ok(ResolvedStyle {
            pseudos: declaration.pseudos,
            properties,
        })
    }

    fn resolve_declaration(
        &self,
        declaration: &Declaration,
        condition: &dyn Fn(&str) -> Option<bool>,
    ) -> StyleResult<Vec<CssProperty>> {
        if declaration.is_token() {
            if let Some(token) = tokens::lookup(&declaration.name) {
                return Ok(token
                    .css
                    .iter()
                    .map(|(name, value)| CssProperty::new(*name, *value))
                    .collect());
            }
            return match self.named_styles.named_style(&declaration.name) {
                Some(css) => Ok(self.expand_named_style(css)),
                None => Err(declaration.unsupported()),
            };
        }

        if let Some(conditional) = Conditional::parse(&declaration.value) {
            let branch = match condition(conditional.condition.as_str()) {
                Some(false) => &conditional.right,
                _ => &conditional.left,
            };
            if branch.is_empty() {
                return Ok(Vec::new());
            }
            return self.resolve_declaration(&declaration.with_value(branch), condition);
        }

        if declaration.name == "color" {
            if let Some(color) = self.palette.color(&declaration.value) {
                return Ok(vec![CssProperty::new("color", color)]);
            }
        }

        if let Some(css) = self.named_styles.named_style(&declaration.key()) {
            return Ok(self.expand_named_style(css));
        }

        let kind = properties::classify(&declaration.name).ok_or_else(|| declaration.unsupported())?;
        Ok(vec![CssProperty::new(
            declaration.name.clone(),
            self.css_value(kind, &declaration.value),
        )])
    }

    fn expand_named_style(&self, css: &str) -> Vec<CssProperty> {
        parse_css_text(css)
            .into_iter()
            .map(|property| match properties::classify(&property.name) {
                Some(kind) => {
                    let value = self.css_value(kind, &property.value);
                    CssProperty::new(property.name, value)
                }
                None => property,
            })
            .collect()
    }

    /// Normalized CSS value: pixels for bare numbers, palette colors
    pub(crate) fn css_value(&self, kind: PropertyKind, value: &str) -> String {
        match kind {
            PropertyKind::Pixel { .. } | PropertyKind::Shorthand { .. } => map_parts(value, with_px),
            PropertyKind::Color { .. } => self.color_value(value),
            PropertyKind::Edge { .. } => map_parts(value, |part| {
                if properties::is_number(part) {
                    with_px(part)
                } else {
                    self.color_value(part)
                }
            }),
            PropertyKind::Keyword | PropertyKind::Arbitrary { .. } => value.to_string(),
        }
    }

    /// Palette color for `value`, or `value` itself
    pub fn color_value(&self, value: &str) -> String {
        self.palette.color(value).unwrap_or(value).to_string()
    }
}

impl StyleEngine<'static> {
    /// Engine with an empty palette and no named styles
    pub fn standalone() -> Self {
        Self::new(&NO_LOOKUP, &NO_LOOKUP)
    }
}

impl Default for StyleEngine<'static> {
    fn default() -> Self {
        Self::standalone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;

    fn config() -> ProjectConfig {
        ProjectConfig::default()
            .with_named_color("primary", "#3366FF")
            .with_named_style("card", "padding: 16; border-radius: 8px; color: primary")
            .with_named_style("display: stack", "display: flex; flex-direction: column")
    }

    fn props(resolved: &ResolvedStyle) -> Vec<String> {
        resolved.properties.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_resolve_builtin_token() {
        let engine = StyleEngine::standalone();
        let resolved = engine.resolve("row", |_| None).unwrap();
        assert_eq!(props(&resolved), vec!["display: flex", "flex-direction: row"]);
    }

    #[test]
    fn test_resolve_palette_color() {
        let config = config();
        let engine = StyleEngine::from_config(&config);
        let resolved = engine.resolve("hover:color: primary", |_| None).unwrap();
        assert_eq!(resolved.pseudos, vec!["hover"]);
        assert!(resolved.is_variant());
        assert_eq!(props(&resolved), vec!["color: #3366FF"]);

        let resolved = engine.resolve("color: Primary", |_| None).unwrap();
        assert_eq!(props(&resolved), vec!["color: Primary"]);
    }

    #[test]
    fn test_resolve_named_styles() {
        let config = config();
        let engine = StyleEngine::from_config(&config);

        let resolved = engine.resolve("card", |_| None).unwrap();
        assert_eq!(
            props(&resolved),
            vec!["padding: 16px", "border-radius: 8px", "color: #3366FF"]
        );

        let resolved = engine.resolve("display: stack", |_| None).unwrap();
        assert_eq!(props(&resolved), vec!["display: flex", "flex-direction: column"]);
    }

    #[test]
    fn test_resolve_pixels_and_passthrough() {
        let engine = StyleEngine::standalone();
        let resolved = engine.resolve("padding: 8 16", |_| None).unwrap();
        assert_eq!(props(&resolved), vec!["padding: 8px 16px"]);

        let resolved = engine.resolve("width: 50%", |_| None).unwrap();
        assert_eq!(props(&resolved), vec!["width: 50%"]);

        let resolved = engine.resolve("border: 1 solid red", |_| None).unwrap();
        assert_eq!(props(&resolved), vec!["border: 1px solid red"]);
    }

    #[test]
    fn test_resolve_conditional() {
        let engine = StyleEngine::standalone();
        let raw = "color: {props.active} ? red : blue";

        let on = engine.resolve(raw, |c| Some(c == "props.active")).unwrap();
        assert_eq!(props(&on), vec!["color: red"]);

        let off = engine.resolve(raw, |_| Some(false)).unwrap();
        assert_eq!(props(&off), vec!["color: blue"]);

        let unknown = engine.resolve(raw, |_| None).unwrap();
        assert_eq!(props(&unknown), vec!["color: red"]);

        let missing = engine.resolve("display: open ? flex", |_| Some(false)).unwrap();
        assert!(missing.properties.is_empty());
    }

    #[test]
    fn test_resolve_unsupported() {
        let engine = StyleEngine::standalone();
        assert_eq!(
            engine.resolve("grid-area: main", |_| None).unwrap_err(),
            StyleError::unsupported("grid-area", "main")
        );
        assert_eq!(
            engine.resolve("mystery-token", |_| None).unwrap_err(),
            StyleError::unsupported("mystery-token", "")
        );
    }

    #[test]
    fn test_parse_css_text() {
        let css = parse_css_text("Color: red; ; background: url(a.png);padding:");
        assert_eq!(
            css,
            vec![
                CssProperty::new("color", "red"),
                CssProperty::new("background", "url(a.png)"),
            ]
        );
    }
}
