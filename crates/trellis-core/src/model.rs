//! The visual component data model and its lifecycle operations.
//!
//! Components form a tree only through `parent_id` back-references; the
//! `children` list is bookkeeping for the editor and is never authoritative.
//! Every lifecycle operation returns a new value and leaves its input alone.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::templates::get_component_template;

/// Smallest width or height a resize may produce.
pub const MIN_COMPONENT_DIMENSION: f64 = 10.0;

/// Offset applied to a clone when none is given.
pub const DEFAULT_CLONE_OFFSET: (f64, f64) = (20.0, 20.0);

/// Component-specific attributes, in insertion order.
pub type PropMap = IndexMap<String, Value>;

/// CSS-like properties keyed by camelCase name.
pub type StyleMap = IndexMap<String, StyleValue>;

/// A single style value as authored in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl StyleValue {
    /// Whether the value counts as set.
    ///
    /// Null, `false`, the empty string and zero are all unset.
    pub fn is_set(&self) -> bool {
        match self {
            StyleValue::Number(n) => *n != 0.0 && !n.is_nan(),
            StyleValue::Text(s) => !s.is_empty(),
            StyleValue::Bool(b) => *b,
            StyleValue::Null => false,
        }
    }

    /// Whether the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, StyleValue::Null)
    }

    /// Get as string if it's a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", format_number(*n)),
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Null => Ok(()),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

/// Render a number the way the editor prints it (`16`, not `16.0`).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Canvas position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "default_version")]
    pub version: u32,
}

impl Default for ComponentMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: default_version(),
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_visible() -> bool {
    true
}

/// A node in the UI component tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualComponent {
    /// Opaque unique identifier.
    pub id: String,
    /// Component kind, keys into the template registry.
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub props: PropMap,
    #[serde(default)]
    pub styles: StyleMap,
    /// Per-breakpoint style overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive_styles: Option<IndexMap<String, StyleMap>>,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub size: Size,
    /// Parent back-reference; `None` marks a root.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Editor bookkeeping only; structure is derived from `parent_id`.
    #[serde(default)]
    pub children: Vec<String>,
    /// Literal text for text-bearing leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub metadata: ComponentMetadata,
}

impl VisualComponent {
    /// Create a bare component with no template defaults applied.
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            id: generate_component_id(),
            component_type: component_type.into(),
            props: PropMap::new(),
            styles: StyleMap::new(),
            responsive_styles: None,
            position: Position::default(),
            size: Size::default(),
            parent_id: None,
            children: Vec::new(),
            content: None,
            locked: false,
            visible: true,
            metadata: ComponentMetadata::default(),
        }
    }

    /// Overlay props on top of the current ones.
    pub fn with_props(mut self, props: PropMap) -> Self {
        self.props.extend(props);
        self
    }

    /// Set a single prop.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Overlay styles on top of the current ones.
    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles.extend(styles);
        self
    }

    /// Set a single style property.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }

    /// Add a style override for a breakpoint.
    pub fn with_responsive_style(
        mut self,
        breakpoint: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.responsive_styles
            .get_or_insert_with(IndexMap::new)
            .entry(breakpoint.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Whether this component is a tree root.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Refresh `updated_at`.
    fn touch(&mut self) {
        self.metadata.updated_at = Utc::now();
    }
}

/// Generate a fresh component identifier.
pub fn generate_component_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a component of the given type, seeded from its template.
///
/// Chain the `with_*` builders to override props, styles, position or size.
pub fn create_component(component_type: &str) -> VisualComponent {
    let template = get_component_template(component_type);
    let mut component = VisualComponent::new(component_type);
    component.props = template.default_props.clone();
    component.styles = template.default_styles.clone();
    component.size = template.default_size;
    component
}

/// Move a component by a delta.
pub fn move_component(component: &VisualComponent, dx: f64, dy: f64) -> VisualComponent {
    let mut moved = component.clone();
    moved.position.x += dx;
    moved.position.y += dy;
    moved.touch();
    moved
}

/// Resize a component, clamping each dimension to [`MIN_COMPONENT_DIMENSION`].
pub fn resize_component(component: &VisualComponent, width: f64, height: f64) -> VisualComponent {
    let mut resized = component.clone();
    resized.size = Size::new(
        width.max(MIN_COMPONENT_DIMENSION),
        height.max(MIN_COMPONENT_DIMENSION),
    );
    resized.touch();
    resized
}

/// Clone a component at the default offset.
pub fn clone_component(component: &VisualComponent) -> VisualComponent {
    let (dx, dy) = DEFAULT_CLONE_OFFSET;
    clone_component_with_offset(component, dx, dy)
}

/// Clone a component with a fresh id, detached from any parent.
pub fn clone_component_with_offset(
    component: &VisualComponent,
    offset_x: f64,
    offset_y: f64,
) -> VisualComponent {
    let mut cloned = component.clone();
    cloned.id = generate_component_id();
    cloned.parent_id = None;
    cloned.children.clear();
    cloned.position.x += offset_x;
    cloned.position.y += offset_y;
    cloned.metadata = ComponentMetadata {
        version: component.metadata.version,
        ..ComponentMetadata::default()
    };
    cloned
}

/// Merge styles into a component.
pub fn update_component_styles(component: &VisualComponent, styles: &StyleMap) -> VisualComponent {
    let mut updated = component.clone();
    for (key, value) in styles {
        updated.styles.insert(key.clone(), value.clone());
    }
    updated.touch();
    updated
}

/// Merge props into a component.
pub fn update_component_props(component: &VisualComponent, props: &PropMap) -> VisualComponent {
    let mut updated = component.clone();
    for (key, value) in props {
        updated.props.insert(key.clone(), value.clone());
    }
    updated.touch();
    updated
}

/// Base styles overlaid with the overrides for `breakpoint`, if any.
pub fn resolve_styles(component: &VisualComponent, breakpoint: &str) -> StyleMap {
    let mut resolved = component.styles.clone();
    if let Some(overrides) = component
        .responsive_styles
        .as_ref()
        .and_then(|r| r.get(breakpoint))
    {
        for (key, value) in overrides {
            resolved.insert(key.clone(), value.clone());
        }
    }
    resolved
}
