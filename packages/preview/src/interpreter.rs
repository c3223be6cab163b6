//! Preview interpreter: resolves a design tree into a [`RenderNode`] tree
//! without executing any code.
//!
//! Resolution is a sequential, asynchronous descent. Sub-component trees are
//! loaded from the [`DesignStore`] and rendered in a child [`Scope`] whose
//! invocation node supplies `props.X` values. Each element's properties run
//! through a fixed chain; the first rule that claims a property wins:
//!
//! 1. children passthrough (`children: {props.children}`)
//! 2. list materialization (`-items-source`, `-items-source-design-time-count`)
//! 3. `class` / `className`
//! 4. image dimensions and source (`img` only)
//! 5. input `type`
//! 6. typed fields from the [`ElementRegistry`]
//!
//! Unclaimed properties fail with [`PreviewError::UnprocessedProperty`] unless
//! they are intentionally ignored.

use crate::error::{PreviewError, PreviewResult};
use crate::items::substitute_item;
use crate::registry::{ElementKind, ElementRegistry, FieldType, FORM_INPUTS};
use crate::render::{AttributeValue, PreviewDocument, RenderElement, RenderNode};
use crate::scope::{display, is_truthy, Invocation, Scope};
use crate::store::DesignStore;
use atelier_model::{markers, ComponentId, Path, PropertyValue, Tag, VisualElementModel, TEXT_TAG};
use atelier_styles::{ProjectConfig, StyleEngine, TranslationLookup};
use futures::future::{BoxFuture, FutureExt};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

pub const DEFAULT_PLACEHOLDER_BASE_URL: &str = "https://placehold.co";
pub const DEFAULT_PLACEHOLDER_SIZE: (u32, u32) = (600, 400);
pub const DEFAULT_MAX_DEPTH: usize = 32;
/// Upper bound for `-items-source-design-time-count`
pub const MAX_DESIGN_TIME_COUNT: usize = 1000;

/// Properties accepted without effect
const IGNORED_PROPERTIES: &[&str] = &[
    "ref",
    "key",
    "size",
    "onMouseEnter",
    "onMouseLeave",
    "onMouseDown",
    "onMouseUp",
    "onMouseMove",
    "onMouseOver",
    "onMouseOut",
    "onInput",
    "onChange",
    "onFocus",
    "onBlur",
    "onKeyDown",
    "onKeyUp",
];

static TRANSLATION_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^t\(\s*['"]([^'"]+)['"]\s*\)$"#).expect("translation pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewOptions {
    /// Acting user; their drafts shadow committed component trees
    pub user: String,
    pub highlight: Option<Path>,
    pub placeholder_base_url: String,
    /// Maximum component nesting
    pub max_depth: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            user: String::new(),
            highlight: None,
            placeholder_base_url: DEFAULT_PLACEHOLDER_BASE_URL.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PreviewOptions {
    pub fn for_user(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..Self::default()
        }
    }

    pub fn with_highlight(mut self, path: Path) -> Self {
        self.highlight = Some(path);
        self
    }
}

/// Host callback receiving the identity of the highlighted node
pub type HighlightSink<'a> = &'a (dyn Fn(&str) + Send + Sync);

enum Template {
    Items(Vec<Value>),
    Count(usize),
}

#[derive(Default)]
struct ImageSource {
    src: Option<String>,
    design_time_src: Option<String>,
    width: Option<String>,
    height: Option<String>,
    size: Option<String>,
}

impl ImageSource {
    /// Explicit source, then design-time source, then a sized placeholder
    fn resolve(self, base_url: &str) -> String {
        if let Some(src) = self.src.or(self.design_time_src) {
            return src;
        }

        let dimension = |value: Option<&String>| {
            value.and_then(|v| v.trim_end_matches("px").parse::<f64>().ok())
        };
        let (width, height) = match (dimension(self.width.as_ref()), dimension(self.height.as_ref())) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => match dimension(self.size.as_ref()) {
                Some(s) => (s, s),
                None => {
                    let (w, h) = DEFAULT_PLACEHOLDER_SIZE;
                    (f64::from(w), f64::from(h))
                }
            },
        };
        format!("{}/{}x{}", base_url.trim_end_matches('/'), width, height)
    }
}

struct ElementState {
    element: RenderElement,
    splice: bool,
    template: Option<Template>,
    image: ImageSource,
    content: Option<String>,
}

pub struct Interpreter<'a> {
    store: &'a dyn DesignStore,
    registry: &'a ElementRegistry,
    styles: StyleEngine<'a>,
    translations: &'a dyn TranslationLookup,
    options: PreviewOptions,
    highlight_sink: Option<HighlightSink<'a>>,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        store: &'a dyn DesignStore,
        registry: &'a ElementRegistry,
        config: &'a ProjectConfig,
        options: PreviewOptions,
    ) -> Self {
        Self {
            store,
            registry,
            styles: StyleEngine::from_config(config),
            translations: config,
            options,
            highlight_sink: None,
        }
    }

    pub fn on_highlight(mut self, sink: HighlightSink<'a>) -> Self {
        self.highlight_sink = Some(sink);
        self
    }

    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    /// Load a stored component for the acting user and resolve it
    #[instrument(skip_all, fields(component = id, user = %self.options.user))]
    pub async fn resolve_component(&self, id: ComponentId) -> PreviewResult<PreviewDocument> {
        let tree = self
            .store
            .load_component_tree(id, &self.options.user)
            .await?
            .ok_or_else(|| PreviewError::ComponentNotFound {
                id,
                path: Path::root().to_string(),
            })?;
        self.resolve_preview(&tree, &Scope::root_of(id)).await
    }

    /// Resolve `tree` in `scope` (usually [`Scope::root`])
    #[instrument(skip_all, fields(tag = %tree.tag, depth = scope.depth()))]
    pub async fn resolve_preview(
        &self,
        tree: &VisualElementModel,
        scope: &Scope<'_>,
    ) -> PreviewResult<PreviewDocument> {
        let root = self.render_node(tree, Path::root(), scope).await?;
        let document = PreviewDocument { root };
        info!(nodes = document.node_count(), "Preview resolved");
        Ok(document)
    }

    fn render_node<'s>(
        &'s self,
        node: &'s VisualElementModel,
        path: Path,
        scope: &'s Scope<'s>,
    ) -> BoxFuture<'s, PreviewResult<Option<RenderNode>>> {
        async move {
            if node.hide_in_designer || !self.is_visible(node, scope) {
                debug!(path = %path, "Node hidden in preview");
                return Ok(None);
            }

            let rendered = match &node.tag {
                Tag::Component(id) => self.render_component(*id, node, &path, scope).await?,
                Tag::Html(name) => match self.registry.get(name) {
                    Some(kind) => Some(self.render_element(name, kind, node, &path, scope).await?),
                    None => Some(self.render_text(name, node, &path, scope)?),
                },
                Tag::Text => Some(self.render_text(TEXT_TAG, node, &path, scope)?),
            };

            if scope.is_root() && self.options.highlight.as_ref() == Some(&path) {
                self.highlight(&path);
            }
            Ok(rendered)
        }
        .boxed()
    }

    async fn render_component(
        &self,
        id: ComponentId,
        node: &VisualElementModel,
        path: &Path,
        scope: &Scope<'_>,
    ) -> PreviewResult<Option<RenderNode>> {
        if scope.contains_component(id) {
            let mut chain = scope.component_chain();
            chain.push(id);
            error!(component = id, ?chain, "Recursive component detected");
            return Err(PreviewError::RecursiveComponent { id, chain });
        }
        if scope.depth() >= self.options.max_depth {
            return Err(PreviewError::MaxDepth {
                limit: self.options.max_depth,
                path: path.to_string(),
            });
        }

        let tree = self
            .store
            .load_component_tree(id, &self.options.user)
            .await?
            .ok_or_else(|| PreviewError::ComponentNotFound {
                id,
                path: path.to_string(),
            })?;
        debug!(component = id, path = %path, "Entering component");

        let child = scope.child(Invocation {
            node,
            path,
            component: id,
        });
        let mut rendered = self.render_node(&tree, Path::root(), &child).await?;

        // Styles on the invocation land on the component's root element
        if let Some(RenderNode::Element(root)) = rendered.as_mut() {
            self.apply_styles(root, node, scope)?;
        }
        Ok(rendered)
    }

    async fn render_element(
        &self,
        name: &str,
        kind: &ElementKind,
        node: &VisualElementModel,
        path: &Path,
        scope: &Scope<'_>,
    ) -> PreviewResult<RenderNode> {
        let mut state = ElementState {
            element: RenderElement::new(name, self.identity(path, scope)),
            splice: false,
            template: None,
            image: ImageSource::default(),
            content: None,
        };

        for (property, raw) in node.property_pairs() {
            if self.apply_property(&mut state, kind, property, raw, path, scope)? {
                continue;
            }
            if !is_ignored(property, raw) {
                return Err(unprocessed(name, property, raw, path));
            }
        }

        let ElementState {
            mut element,
            splice,
            template,
            image,
            content,
        } = state;
        let content = content.or_else(|| {
            node.property(markers::TEXT_PREVIEW)
                .map(|raw| self.display_text(raw, scope))
        });

        if name == "img" {
            let src = image.resolve(&self.options.placeholder_base_url);
            element
                .attributes
                .insert("src".to_string(), AttributeValue::Text(src));
        }
        self.apply_styles(&mut element, node, scope)?;

        if let Some(text) = content {
            let id = element.id.clone();
            element.children.push(RenderNode::text(id, text));
        }
        if splice {
            self.splice_children(&mut element, scope).await?;
        }

        let own = match (&template, node.children.first()) {
            (Some(Template::Items(items)), Some(first)) => {
                for item in items {
                    let clone = substitute_item(first, item);
                    if let Some(child) = self.render_node(&clone, path.child(0), scope).await? {
                        element.children.push(child);
                    }
                }
                1
            }
            (Some(Template::Count(count)), Some(first)) => {
                for _ in 0..*count {
                    if let Some(child) = self.render_node(first, path.child(0), scope).await? {
                        element.children.push(child);
                    }
                }
                1
            }
            _ => 0,
        };
        for (i, child) in node.children.iter().enumerate().skip(own) {
            if let Some(child) = self.render_node(child, path.child(i), scope).await? {
                element.children.push(child);
            }
        }

        Ok(element.into())
    }

    /// Run one property through the chain. `false` when no rule claims it.
    fn apply_property(
        &self,
        state: &mut ElementState,
        kind: &ElementKind,
        property: &str,
        raw: &str,
        path: &Path,
        scope: &Scope<'_>,
    ) -> PreviewResult<bool> {
        if property == "children"
            && PropertyValue::parse(raw).caller_binding() == Some("children")
            && !scope.is_root()
        {
            state.splice = true;
            return Ok(true);
        }

        if property == markers::ITEMS_SOURCE {
            if let Some(Value::Array(items)) = scope.resolve_value(raw) {
                state.template = Some(Template::Items(items));
                return Ok(true);
            }
        }
        if property == markers::ITEMS_SOURCE_DESIGN_TIME_COUNT {
            let count = scope
                .resolve_value(raw)
                .and_then(|v| v.as_f64())
                .filter(|n| *n >= 0.0);
            if let Some(count) = count {
                if count > MAX_DESIGN_TIME_COUNT as f64 {
                    return Err(PreviewError::InvalidPropertyValue {
                        tag: state.element.kind.clone(),
                        property: property.to_string(),
                        value: raw.to_string(),
                        expected: format!("a count up to {}", MAX_DESIGN_TIME_COUNT),
                        path: path.to_string(),
                    });
                }
                if state.template.is_none() {
                    state.template = Some(Template::Count(count as usize));
                }
                return Ok(true);
            }
        }

        if property == "class" || property == "className" {
            let classes = self.display_text(raw, scope);
            state
                .element
                .classes
                .extend(classes.split_whitespace().map(str::to_string));
            return Ok(true);
        }

        if state.element.kind == "img" {
            match property {
                "w" | "width" | "h" | "height" => {
                    let value = self.display_text(raw, scope);
                    let attribute = if property.starts_with('w') { "width" } else { "height" };
                    state
                        .element
                        .attributes
                        .insert(attribute.to_string(), dimension(&value));
                    if attribute == "width" {
                        state.image.width = Some(value);
                    } else {
                        state.image.height = Some(value);
                    }
                    return Ok(true);
                }
                "src" => {
                    state.image.src = scope
                        .resolve_value(raw)
                        .map(|v| display(&v))
                        .filter(|s| !s.is_empty());
                    return Ok(true);
                }
                markers::DESIGN_TIME_SRC => {
                    let src = self.display_text(raw, scope);
                    state.image.design_time_src = Some(src).filter(|s| !s.is_empty());
                    return Ok(true);
                }
                "size" => {
                    state.image.size = Some(self.display_text(raw, scope));
                    return Ok(true);
                }
                _ => {}
            }
        }

        if property == "type" && FORM_INPUTS.contains(&state.element.kind.as_str()) {
            let value = AttributeValue::Text(self.display_text(raw, scope));
            state.element.attributes.insert("type".to_string(), value);
            return Ok(true);
        }

        if let Some(field) = kind.field_type(property) {
            self.assign_field(state, field, property, raw, path, scope)?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Typed assignment of a registry field. Values that only exist at
    /// runtime are left unset.
    fn assign_field(
        &self,
        state: &mut ElementState,
        field: &FieldType,
        property: &str,
        raw: &str,
        path: &Path,
        scope: &Scope<'_>,
    ) -> PreviewResult<()> {
        let parsed = PropertyValue::parse(raw);
        let resolved = scope.resolve_value(raw);
        if resolved.is_none() && parsed.caller_binding().is_some() {
            debug!(property, path = %path, "Caller binding has no design-time value");
            return Ok(());
        }

        let invalid = || PreviewError::InvalidPropertyValue {
            tag: state.element.kind.clone(),
            property: property.to_string(),
            value: raw.to_string(),
            expected: field.describe(),
            path: path.to_string(),
        };

        let value = match field {
            FieldType::Content => {
                state.content = Some(self.display_text(raw, scope));
                return Ok(());
            }
            FieldType::Text => AttributeValue::Text(self.display_text(raw, scope)),
            FieldType::Handler => AttributeValue::handler(match &resolved {
                Some(value) => display(value),
                None => parsed.text().to_string(),
            }),
            _ if resolved.is_none() && parsed.is_bound() => return Ok(()),
            FieldType::Bool => match &resolved {
                None if raw.trim().is_empty() => AttributeValue::Bool(true),
                Some(Value::Bool(b)) => AttributeValue::Bool(*b),
                Some(Value::String(s)) if s == "true" || s == "false" => {
                    AttributeValue::Bool(s == "true")
                }
                _ => return Err(invalid()),
            },
            FieldType::Number => match resolved.as_ref().and_then(as_number) {
                Some(n) => AttributeValue::Number(n),
                None => return Err(invalid()),
            },
            FieldType::Enum(options) => {
                let text = self.display_text(raw, scope);
                if !options.contains(&text) {
                    return Err(invalid());
                }
                AttributeValue::Text(text)
            }
        };

        state.element.attributes.insert(property.to_string(), value);
        Ok(())
    }

    /// Render the caller's children in the caller's scope and re-home them
    /// onto the invocation
    async fn splice_children(
        &self,
        element: &mut RenderElement,
        scope: &Scope<'_>,
    ) -> PreviewResult<()> {
        let (Some(invocation), Some(parent)) = (scope.invocation(), scope.parent()) else {
            return Ok(());
        };
        let owner = scope
            .boundary()
            .map(str::to_string)
            .unwrap_or_else(|| invocation.path.to_string());

        for (i, child) in invocation.node.children.iter().enumerate() {
            if let Some(mut rendered) = self
                .render_node(child, invocation.path.child(i), parent)
                .await?
            {
                rendered.mark_imported(&owner);
                element.children.push(rendered);
            }
        }
        debug!(owner = %owner, count = invocation.node.children.len(), "Spliced caller children");
        Ok(())
    }

    fn render_text(
        &self,
        tag: &str,
        node: &VisualElementModel,
        path: &Path,
        scope: &Scope<'_>,
    ) -> PreviewResult<RenderNode> {
        let Some(raw) = preview_text(node, scope) else {
            return Err(PreviewError::UnresolvedTag {
                tag: tag.to_string(),
                path: path.to_string(),
            });
        };
        if let Some((property, value)) = node
            .property_pairs()
            .find(|(property, value)| *property != "text" && !is_ignored(property, value))
        {
            return Err(unprocessed(tag, property, value, path));
        }

        let id = self.identity(path, scope);
        let leaf = RenderNode::text(id.clone(), self.display_text(raw, scope));
        if node.styles.is_empty() {
            return Ok(leaf);
        }

        let mut span = RenderElement::new("span", id);
        self.apply_styles(&mut span, node, scope)?;
        span.children.push(leaf);
        Ok(span.into())
    }

    fn apply_styles(
        &self,
        element: &mut RenderElement,
        node: &VisualElementModel,
        scope: &Scope<'_>,
    ) -> PreviewResult<()> {
        for raw in &node.styles {
            let resolved = self
                .styles
                .resolve(raw, |condition| self.condition(condition, scope))?;
            if resolved.is_variant() {
                element.variant_styles.push(resolved);
            } else {
                element.styles.extend(resolved.properties);
            }
        }
        Ok(())
    }

    /// Display text of a value: translations, literals, caller bindings, or
    /// the expression as written
    fn display_text(&self, raw: &str, scope: &Scope<'_>) -> String {
        if let PropertyValue::Bound(expression) = PropertyValue::parse(raw) {
            if let Some(key) = TRANSLATION_CALL.captures(&expression).and_then(|c| c.get(1)) {
                let key = key.as_str();
                return self.translations.translate(key).unwrap_or(key).to_string();
            }
        }

        match scope.resolve_value(raw) {
            Some(value) => display(&value),
            None => raw.trim().to_string(),
        }
    }

    /// Design-time value of a condition. Only literals and caller bindings
    /// are decidable.
    fn condition(&self, text: &str, scope: &Scope<'_>) -> Option<bool> {
        let value = PropertyValue::parse(text);
        if value.caller_binding().is_some() || matches!(value.text(), "true" | "false") {
            return scope.resolve_value(text).map(|v| is_truthy(&v));
        }
        None
    }

    fn is_visible(&self, node: &VisualElementModel, scope: &Scope<'_>) -> bool {
        let marker = |name: &str| {
            node.property(name)
                .and_then(|raw| self.condition(raw, scope))
        };
        marker(markers::HIDE_IF) != Some(true) && marker(markers::SHOW_IF) != Some(false)
    }

    fn identity(&self, path: &Path, scope: &Scope<'_>) -> String {
        scope
            .boundary()
            .map(str::to_string)
            .unwrap_or_else(|| path.to_string())
    }

    fn highlight(&self, path: &Path) {
        debug!(path = %path, "Highlighting node");
        if let Some(sink) = self.highlight_sink {
            sink(&path.to_string());
        }
    }
}

fn is_ignored(property: &str, raw: &str) -> bool {
    IGNORED_PROPERTIES.contains(&property)
        || markers::is_design_marker(property)
        || PropertyValue::parse(raw).caller_binding().is_some()
}

/// Text of a leaf. `-text` stands in for a caller binding with no
/// design-time value.
fn preview_text<'n>(node: &'n VisualElementModel, scope: &Scope<'_>) -> Option<&'n str> {
    let preview = node.property(markers::TEXT_PREVIEW);
    match node.property("text") {
        Some(text)
            if preview.is_some()
                && PropertyValue::parse(text).caller_binding().is_some()
                && scope.resolve_value(text).is_none() =>
        {
            preview
        }
        Some(text) => Some(text),
        None => preview,
    }
}

fn unprocessed(tag: &str, property: &str, raw: &str, path: &Path) -> PreviewError {
    PreviewError::UnprocessedProperty {
        tag: tag.to_string(),
        property: property.to_string(),
        value: raw.to_string(),
        path: path.to_string(),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Pixel dimension as a number, anything else (`50%`, `auto`) as text
fn dimension(value: &str) -> AttributeValue {
    match value.trim_end_matches("px").parse::<f64>() {
        Ok(n) => AttributeValue::Number(n),
        Err(_) => AttributeValue::Text(value.to_string()),
    }
}
