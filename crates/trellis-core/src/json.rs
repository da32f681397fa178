//! JSON import and export of component lists.

use chrono::Utc;
use log::error;
use serde_json::Value;

use crate::errors::{ModelError, Result};
use crate::model::VisualComponent;

/// Pretty-printed JSON of a component list.
pub fn export_components_as_json(components: &[VisualComponent]) -> Result<String> {
    Ok(serde_json::to_string_pretty(components)?)
}

/// Parse a component list, stamping `updated_at` on every node.
pub fn try_import_components_from_json(json: &str) -> Result<Vec<VisualComponent>> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(ModelError::NotAnArray);
    }

    let mut components: Vec<VisualComponent> = serde_json::from_value(value)?;
    let now = Utc::now();
    for component in &mut components {
        component.metadata.updated_at = now;
    }
    Ok(components)
}

/// Lenient import: logs any failure and returns an empty list.
///
/// An empty result is ambiguous; use [`try_import_components_from_json`]
/// when the caller needs to know whether parsing failed.
pub fn import_components_from_json(json: &str) -> Vec<VisualComponent> {
    match try_import_components_from_json(json) {
        Ok(components) => components,
        Err(e) => {
            error!("Failed to import components: {}", e);
            Vec::new()
        }
    }
}
