//! Template-driven validation of components.
//!
//! Validation is advisory: nothing here blocks code generation.

use log::warn;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::model::VisualComponent;
use crate::templates::{get_component_template, RuleKind, ValidationRule};
use crate::tree::find_component_by_id;

/// A single field-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    /// Rule kind that failed (`required`, `range`, `pattern`, `allowedChildren`).
    #[serde(rename = "type")]
    pub error_type: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>, error_type: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            error_type: error_type.to_string(),
        }
    }
}

/// Outcome of validating one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a component against its template.
pub fn validate_component(component: &VisualComponent) -> ValidationResult {
    let template = get_component_template(&component.component_type);
    let mut errors = Vec::new();

    let has_content = component.content.as_deref().is_some_and(|c| !c.is_empty());
    for name in &template.required_props {
        let present = component.props.get(name).is_some_and(is_truthy);
        if !present && !has_content {
            errors.push(ValidationError::new(
                name,
                format!("{} is required", name),
                "required",
            ));
        }
    }

    for rule in &template.validation.rules {
        let value = rule_value(component, &rule.field);
        if !rule_passes(rule, value.as_ref()) {
            errors.push(ValidationError::new(&rule.field, &rule.message, rule.kind.name()));
        }
    }

    ValidationResult::from_errors(errors)
}

/// A failure tied to the component it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentValidationError {
    pub component_id: String,
    #[serde(flatten)]
    pub error: ValidationError,
}

/// Outcome of validating a whole component list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ComponentValidationError>,
}

/// Validate every component and each parent's allowed child types.
pub fn validate_tree(components: &[VisualComponent]) -> TreeValidationResult {
    let mut errors = Vec::new();

    for component in components {
        for error in validate_component(component).errors {
            errors.push(ComponentValidationError {
                component_id: component.id.clone(),
                error,
            });
        }

        let Some(parent) = component
            .parent_id
            .as_deref()
            .and_then(|id| find_component_by_id(components, id))
        else {
            continue;
        };

        let parent_template = get_component_template(&parent.component_type);
        if !parent_template
            .allowed_children
            .allows(&component.component_type)
        {
            errors.push(ComponentValidationError {
                component_id: component.id.clone(),
                error: ValidationError::new(
                    "parentId",
                    format!(
                        "{} is not allowed inside {}",
                        component.component_type, parent.component_type
                    ),
                    "allowedChildren",
                ),
            });
        }
    }

    TreeValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// The prop a rule targets, falling back to the text content.
fn rule_value(component: &VisualComponent, field: &str) -> Option<Value> {
    match component.props.get(field) {
        Some(value) if !value.is_null() => Some(value.clone()),
        _ => component.content.clone().map(Value::String),
    }
}

fn rule_passes(rule: &ValidationRule, value: Option<&Value>) -> bool {
    match &rule.kind {
        RuleKind::Required => value.is_some_and(is_truthy),
        RuleKind::Range { min, max } => {
            let Some(n) = value.and_then(as_number) else {
                return true;
            };
            let below = min.is_some_and(|min| n < min);
            let above = max.is_some_and(|max| n > max);
            !below && !above
        }
        RuleKind::Pattern { pattern } => match Regex::new(pattern) {
            Ok(re) => {
                let text = value.map(value_as_text).unwrap_or_default();
                re.is_match(&text)
            }
            Err(e) => {
                warn!("Skipping invalid pattern for field '{}': {}", rule.field, e);
                true
            }
        },
    }
}

/// Editor truthiness: null, false, zero and the empty string are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
