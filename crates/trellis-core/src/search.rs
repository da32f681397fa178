//! Search, filtering and statistics over component lists.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::model::VisualComponent;
use crate::tree::ComponentIndex;

/// Case-insensitive substring search over type, content and prop values.
///
/// Hidden components never match.
pub fn search_components<'a>(
    components: &'a [VisualComponent],
    query: &str,
) -> Vec<&'a VisualComponent> {
    let needle = query.to_lowercase();
    components
        .iter()
        .filter(|c| c.visible && matches_query(c, &needle))
        .collect()
}

fn matches_query(component: &VisualComponent, needle: &str) -> bool {
    if component.component_type.to_lowercase().contains(needle) {
        return true;
    }
    if let Some(content) = &component.content {
        if content.to_lowercase().contains(needle) {
            return true;
        }
    }
    component
        .props
        .values()
        .any(|value| stringify_prop(value).to_lowercase().contains(needle))
}

/// Prop value as text: strings verbatim, everything else as JSON.
pub fn stringify_prop(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn filter_components_by_type<'a>(
    components: &'a [VisualComponent],
    component_type: &str,
) -> Vec<&'a VisualComponent> {
    components
        .iter()
        .filter(|c| c.component_type == component_type)
        .collect()
}

pub fn filter_visible_components(components: &[VisualComponent]) -> Vec<&VisualComponent> {
    components.iter().filter(|c| c.visible).collect()
}

pub fn filter_unlocked_components(components: &[VisualComponent]) -> Vec<&VisualComponent> {
    components.iter().filter(|c| !c.locked).collect()
}

/// Summary counts for a component list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStats {
    pub total: usize,
    /// Count per component type, in first-seen order.
    pub by_type: IndexMap<String, usize>,
    pub visible: usize,
    pub locked: usize,
    /// Components with at least one child.
    pub with_children: usize,
}

/// Compute [`ComponentStats`] in one pass over the list.
pub fn get_component_stats(components: &[VisualComponent]) -> ComponentStats {
    let index = ComponentIndex::new(components);
    let mut stats = ComponentStats {
        total: components.len(),
        ..ComponentStats::default()
    };

    for component in components {
        *stats
            .by_type
            .entry(component.component_type.clone())
            .or_insert(0) += 1;
        if component.visible {
            stats.visible += 1;
        }
        if component.locked {
            stats.locked += 1;
        }
        if index.has_children(&component.id) {
            stats.with_children += 1;
        }
    }

    stats
}
