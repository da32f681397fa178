//! Built-in component templates.
//!
//! Each component type maps to a static template carrying its defaults and
//! validation rules. Unknown types resolve to the Container template so an
//! editor tree that references a newer type still renders as a plain box.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;
use serde_json::{json, Value};

use crate::model::{PropMap, Size, StyleMap, StyleValue};

/// Type used when a lookup misses.
pub const FALLBACK_COMPONENT_TYPE: &str = "Container";

/// Child types a template accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedChildren {
    /// Any type (`"*"`).
    Any,
    Only(Vec<String>),
}

impl Serialize for AllowedChildren {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AllowedChildren::Any => serializer.serialize_str("*"),
            AllowedChildren::Only(types) => types.serialize(serializer),
        }
    }
}

impl AllowedChildren {
    pub fn none() -> Self {
        AllowedChildren::Only(Vec::new())
    }

    /// Whether a child of `component_type` is accepted.
    pub fn allows(&self, component_type: &str) -> bool {
        match self {
            AllowedChildren::Any => true,
            AllowedChildren::Only(types) => types.iter().any(|t| t == component_type),
        }
    }
}

/// Kind of check a validation rule performs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    Range {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Pattern { pattern: String },
}

impl RuleKind {
    /// Name reported in validation errors.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Range { .. } => "range",
            RuleKind::Pattern { .. } => "pattern",
        }
    }
}

/// A single field-level validation rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationRule {
    pub field: String,
    #[serde(flatten)]
    pub kind: RuleKind,
    pub message: String,
}

/// Rule set evaluated by the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationSchema {
    pub rules: Vec<ValidationRule>,
}

/// Static catalog entry for a component type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTemplate {
    pub name: String,
    pub category: String,
    pub description: String,
    pub icon: String,
    pub default_props: PropMap,
    pub default_styles: StyleMap,
    pub default_size: Size,
    pub allowed_children: AllowedChildren,
    pub required_props: Vec<String>,
    pub validation: ValidationSchema,
}

/// Builder for component templates.
pub struct TemplateBuilder {
    template: ComponentTemplate,
}

impl TemplateBuilder {
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            template: ComponentTemplate {
                name: name.to_string(),
                category: category.to_string(),
                description: String::new(),
                icon: String::new(),
                default_props: PropMap::new(),
                default_styles: StyleMap::new(),
                default_size: Size::new(100.0, 100.0),
                allowed_children: AllowedChildren::none(),
                required_props: Vec::new(),
                validation: ValidationSchema::default(),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.template.description = description.to_string();
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.template.icon = icon.to_string();
        self
    }

    pub fn prop(mut self, key: &str, value: Value) -> Self {
        self.template.default_props.insert(key.to_string(), value);
        self
    }

    pub fn style(mut self, key: &str, value: impl Into<StyleValue>) -> Self {
        self.template
            .default_styles
            .insert(key.to_string(), value.into());
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.template.default_size = Size::new(width, height);
        self
    }

    /// Accept children of any type.
    pub fn any_children(mut self) -> Self {
        self.template.allowed_children = AllowedChildren::Any;
        self
    }

    pub fn children(mut self, types: &[&str]) -> Self {
        self.template.allowed_children =
            AllowedChildren::Only(types.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn required_prop(mut self, name: &str) -> Self {
        self.template.required_props.push(name.to_string());
        self
    }

    pub fn rule_required(self, field: &str, message: &str) -> Self {
        self.rule(field, RuleKind::Required, message)
    }

    pub fn rule_range(self, field: &str, min: Option<f64>, max: Option<f64>, message: &str) -> Self {
        self.rule(field, RuleKind::Range { min, max }, message)
    }

    pub fn rule_pattern(self, field: &str, pattern: &str, message: &str) -> Self {
        self.rule(
            field,
            RuleKind::Pattern {
                pattern: pattern.to_string(),
            },
            message,
        )
    }

    fn rule(mut self, field: &str, kind: RuleKind, message: &str) -> Self {
        self.template.validation.rules.push(ValidationRule {
            field: field.to_string(),
            kind,
            message: message.to_string(),
        });
        self
    }

    pub fn build(self) -> ComponentTemplate {
        self.template
    }
}

/// A registry of component templates keyed by type.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, ComponentTemplate>,
}

impl TemplateRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// The process-wide registry of built-in templates.
    pub fn builtin() -> &'static TemplateRegistry {
        static BUILTIN: OnceLock<TemplateRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut registry = TemplateRegistry::new();
            for template in builtin_templates() {
                registry.register(template);
            }
            registry
        })
    }

    /// Register a template under its name.
    pub fn register(&mut self, template: ComponentTemplate) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Exact lookup, `None` for unknown types.
    pub fn lookup(&self, component_type: &str) -> Option<&ComponentTemplate> {
        self.templates.get(component_type)
    }

    /// Lookup with fallback to the Container template.
    ///
    /// Returns `None` only if the registry lacks a Container template.
    pub fn get(&self, component_type: &str) -> Option<&ComponentTemplate> {
        self.lookup(component_type)
            .or_else(|| self.lookup(FALLBACK_COMPONENT_TYPE))
    }

    pub fn contains(&self, component_type: &str) -> bool {
        self.templates.contains_key(component_type)
    }

    /// All registered type names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Template for a component type, falling back to Container.
pub fn get_component_template(component_type: &str) -> &'static ComponentTemplate {
    let registry = TemplateRegistry::builtin();
    match registry.get(component_type) {
        Some(template) => template,
        None => fallback_template(),
    }
}

fn fallback_template() -> &'static ComponentTemplate {
    static FALLBACK: OnceLock<ComponentTemplate> = OnceLock::new();
    FALLBACK.get_or_init(container_template)
}

/// Markup tag for a component type; unmapped types render as `div`.
pub fn html_tag(component_type: &str) -> &'static str {
    match component_type {
        "Container" => "div",
        "Text" => "span",
        "Heading" => "h1",
        "Button" => "button",
        "Input" => "input",
        "Image" => "img",
        "Link" => "a",
        "List" => "ul",
        "ListItem" => "li",
        _ => "div",
    }
}

fn container_template() -> ComponentTemplate {
    TemplateBuilder::new("Container", "layout")
        .description("Generic box that groups other components")
        .icon("square")
        .style("display", "flex")
        .style("flexDirection", "column")
        .style("padding", "16px")
        .size(300.0, 200.0)
        .any_children()
        .build()
}

fn builtin_templates() -> Vec<ComponentTemplate> {
    vec![
        container_template(),
        TemplateBuilder::new("Button", "basic")
            .description("Clickable button")
            .icon("mouse-pointer")
            .prop("children", json!("Button"))
            .prop("variant", json!("primary"))
            .prop("size", json!("medium"))
            .prop("disabled", json!(false))
            .style("padding", "8px 16px")
            .style("backgroundColor", "#3b82f6")
            .style("color", "#ffffff")
            .style("border", "none")
            .style("borderRadius", "4px")
            .style("cursor", "pointer")
            .size(120.0, 40.0)
            .required_prop("children")
            .rule_required("children", "Button text is required")
            .build(),
        TemplateBuilder::new("Input", "form")
            .description("Single-line text field")
            .icon("type")
            .prop("placeholder", json!("Enter text..."))
            .prop("type", json!("text"))
            .prop("required", json!(false))
            .style("padding", "8px")
            .style("border", "1px solid #d1d5db")
            .style("borderRadius", "4px")
            .size(200.0, 40.0)
            .rule_pattern(
                "type",
                "^(text|email|password|number|tel|url|search|date)$",
                "Input type must be a valid HTML input type",
            )
            .build(),
        TemplateBuilder::new("Text", "basic")
            .description("Inline run of text")
            .icon("align-left")
            .prop("children", json!("Text content"))
            .style("fontSize", "16px")
            .style("color", "#000000")
            .size(200.0, 24.0)
            .required_prop("children")
            .rule_required("children", "Text content is required")
            .build(),
        TemplateBuilder::new("Heading", "basic")
            .description("Section heading")
            .icon("heading")
            .prop("children", json!("Heading"))
            .prop("level", json!(1))
            .style("fontSize", "24px")
            .style("fontWeight", "700")
            .size(300.0, 40.0)
            .required_prop("children")
            .rule_required("children", "Heading text is required")
            .rule_range("level", Some(1.0), Some(6.0), "Heading level must be between 1 and 6")
            .build(),
        TemplateBuilder::new("Image", "media")
            .description("Image from a URL")
            .icon("image")
            .prop("src", json!("https://via.placeholder.com/300x200"))
            .prop("alt", json!("Image"))
            .size(300.0, 200.0)
            .required_prop("src")
            .required_prop("alt")
            .rule_required("src", "Image source is required")
            .rule_pattern("src", "^(https?://|/|data:)", "Image source must be a URL or path")
            .build(),
        TemplateBuilder::new("Link", "basic")
            .description("Hyperlink")
            .icon("link")
            .prop("href", json!("#"))
            .prop("children", json!("Link"))
            .style("color", "#3b82f6")
            .size(100.0, 24.0)
            .required_prop("href")
            .rule_required("href", "Link destination is required")
            .build(),
        TemplateBuilder::new("Card", "layout")
            .description("Raised surface for grouped content")
            .icon("credit-card")
            .style("padding", "16px")
            .style("backgroundColor", "#ffffff")
            .style("border", "1px solid #e5e7eb")
            .style("borderRadius", "8px")
            .size(300.0, 200.0)
            .any_children()
            .build(),
        TemplateBuilder::new("Grid", "layout")
            .description("CSS grid with a fixed column count")
            .icon("grid")
            .prop("columns", json!(3))
            .prop("gap", json!(16))
            .style("display", "grid")
            .style("gap", "16px")
            .size(400.0, 300.0)
            .any_children()
            .rule_range("columns", Some(1.0), Some(12.0), "Grid columns must be between 1 and 12")
            .build(),
        TemplateBuilder::new("Flex", "layout")
            .description("Flexbox row or column")
            .icon("columns")
            .prop("direction", json!("row"))
            .prop("gap", json!(8))
            .style("display", "flex")
            .style("gap", "8px")
            .size(400.0, 100.0)
            .any_children()
            .rule_pattern(
                "direction",
                "^(row|column|row-reverse|column-reverse)$",
                "Flex direction must be row or column",
            )
            .build(),
        TemplateBuilder::new("List", "basic")
            .description("Bulleted list")
            .icon("list")
            .prop("ordered", json!(false))
            .size(200.0, 120.0)
            .children(&["ListItem"])
            .build(),
        TemplateBuilder::new("ListItem", "basic")
            .description("Entry in a list")
            .icon("minus")
            .prop("children", json!("List item"))
            .size(200.0, 24.0)
            .any_children()
            .build(),
        TemplateBuilder::new("Row", "layout")
            .description("Horizontal grid row")
            .icon("rows")
            .style("display", "flex")
            .size(400.0, 100.0)
            .children(&["Column"])
            .build(),
        TemplateBuilder::new("Column", "layout")
            .description("Column inside a row")
            .icon("columns")
            .size(120.0, 100.0)
            .any_children()
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_has_core_types() {
        let registry = TemplateRegistry::builtin();
        for name in ["Button", "Input", "Container", "Text", "Heading", "Image", "Card", "Grid", "Flex"] {
            assert!(registry.contains(name), "missing template {}", name);
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_container() {
        let template = get_component_template("Carousel");
        assert_eq!(template.name, "Container");
        assert!(TemplateRegistry::builtin().lookup("Carousel").is_none());
    }

    #[test]
    fn test_heading_rules() {
        let heading = get_component_template("Heading");
        assert_eq!(heading.required_props, vec!["children".to_string()]);
        assert!(heading
            .validation
            .rules
            .iter()
            .any(|r| r.field == "level" && matches!(r.kind, RuleKind::Range { .. })));
    }

    #[test]
    fn test_allowed_children() {
        assert!(get_component_template("Container").allowed_children.allows("Button"));
        assert!(get_component_template("List").allowed_children.allows("ListItem"));
        assert!(!get_component_template("List").allowed_children.allows("Button"));
        assert!(!get_component_template("Button").allowed_children.allows("Text"));
    }

    #[test]
    fn test_html_tag() {
        assert_eq!(html_tag("Button"), "button");
        assert_eq!(html_tag("ListItem"), "li");
        assert_eq!(html_tag("Card"), "div");
        assert_eq!(html_tag("Unknown"), "div");
    }

    #[test]
    fn test_registry_register() {
        let mut registry = TemplateRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("Button").is_none());

        registry.register(TemplateBuilder::new("Badge", "basic").build());
        registry.register(container_template());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("Badge").map(|t| t.name.as_str()), Some("Badge"));
        assert_eq!(registry.get("Chip").map(|t| t.name.as_str()), Some("Container"));
    }

    #[test]
    fn test_template_serializes_any_children_as_star() {
        let value = serde_json::to_value(get_component_template("Container")).unwrap();
        assert_eq!(value["allowedChildren"], serde_json::json!("*"));
        let rule = serde_json::to_value(&get_component_template("Heading").validation.rules[1]).unwrap();
        assert_eq!(rule["type"], serde_json::json!("range"));
        assert_eq!(rule["min"], serde_json::json!(1.0));
    }
}
