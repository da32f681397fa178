//! Tree queries and geometry over a flat component list.
//!
//! The list is an arena: structure is recovered by matching `parent_id`
//! against `id`. None of these functions mutate their input.

use std::collections::{HashMap, HashSet};

use crate::errors::{ModelError, Result};
use crate::model::VisualComponent;

/// Find a component by id.
pub fn find_component_by_id<'a>(
    components: &'a [VisualComponent],
    id: &str,
) -> Option<&'a VisualComponent> {
    components.iter().find(|c| c.id == id)
}

/// Direct children of `parent_id`, in list order.
pub fn get_component_children<'a>(
    components: &'a [VisualComponent],
    parent_id: &str,
) -> Vec<&'a VisualComponent> {
    components
        .iter()
        .filter(|c| c.parent_id.as_deref() == Some(parent_id))
        .collect()
}

/// Parent of the component with the given id.
pub fn get_component_parent<'a>(
    components: &'a [VisualComponent],
    id: &str,
) -> Option<&'a VisualComponent> {
    let component = find_component_by_id(components, id)?;
    let parent_id = component.parent_id.as_deref()?;
    find_component_by_id(components, parent_id)
}

/// All ancestors of a component, root first.
///
/// The walk stops at a dangling reference or at a component already seen.
pub fn get_component_ancestors<'a>(
    components: &'a [VisualComponent],
    id: &str,
) -> Vec<&'a VisualComponent> {
    let mut ancestors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(id);

    let mut current = get_component_parent(components, id);
    while let Some(parent) = current {
        if !seen.insert(parent.id.as_str()) {
            break;
        }
        ancestors.push(parent);
        current = get_component_parent(components, &parent.id);
    }

    ancestors.reverse();
    ancestors
}

/// All transitive children of a component, depth-first pre-order.
pub fn get_component_descendants<'a>(
    components: &'a [VisualComponent],
    id: &str,
) -> Vec<&'a VisualComponent> {
    let mut descendants = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(id);
    collect_descendants(components, id, &mut seen, &mut descendants);
    descendants
}

fn collect_descendants<'a: 's, 's>(
    components: &'a [VisualComponent],
    id: &str,
    seen: &mut HashSet<&'s str>,
    out: &mut Vec<&'a VisualComponent>,
) {
    for child in get_component_children(components, id) {
        if !seen.insert(child.id.as_str()) {
            continue;
        }
        out.push(child);
        collect_descendants(components, &child.id, seen, out);
    }
}

/// Find a component that sits on a `parent_id` cycle.
///
/// Returns the id where the cycle was closed, or `None` if every chain
/// ends at a root or a dangling reference.
pub fn find_cycle(components: &[VisualComponent]) -> Option<String> {
    let mut by_id: HashMap<&str, &VisualComponent> = HashMap::new();
    for component in components {
        by_id.entry(component.id.as_str()).or_insert(component);
    }

    let mut acyclic: HashSet<&str> = HashSet::new();
    for component in components {
        let mut path: HashSet<&str> = HashSet::new();
        let mut current = Some(component);

        while let Some(node) = current {
            let id = node.id.as_str();
            if acyclic.contains(id) {
                break;
            }
            if !path.insert(id) {
                return Some(id.to_string());
            }
            current = node
                .parent_id
                .as_deref()
                .and_then(|parent| by_id.get(parent).copied());
        }

        acyclic.extend(path);
    }

    None
}

/// Fail with [`ModelError::CyclicStructure`] if the list contains a cycle.
pub fn ensure_acyclic(components: &[VisualComponent]) -> Result<()> {
    match find_cycle(components) {
        Some(id) => Err(ModelError::CyclicStructure { id }),
        None => Ok(()),
    }
}

/// Parent-to-children index over a component list.
///
/// Built once per traversal so emitters do not rescan the list per node.
#[derive(Debug)]
pub struct ComponentIndex<'a> {
    components: &'a [VisualComponent],
    children: HashMap<&'a str, Vec<usize>>,
    roots: Vec<usize>,
}

impl<'a> ComponentIndex<'a> {
    pub fn new(components: &'a [VisualComponent]) -> Self {
        let mut children: HashMap<&'a str, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();

        for (idx, component) in components.iter().enumerate() {
            match component.parent_id.as_deref() {
                Some(parent) => children.entry(parent).or_default().push(idx),
                None => roots.push(idx),
            }
        }

        Self {
            components,
            children,
            roots,
        }
    }

    /// Component at a list position.
    pub fn get(&self, idx: usize) -> &'a VisualComponent {
        &self.components[idx]
    }

    /// Positions of root components, in list order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Positions of the direct children of `id`, in list order.
    pub fn children_of(&self, id: &str) -> &[usize] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_children(&self, id: &str) -> bool {
        !self.children_of(id).is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Axis-aligned bounding box on the design canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `other` lies entirely within these bounds.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two boxes share any point, edges included.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        !(self.right() < other.x
            || other.right() < self.x
            || self.bottom() < other.y
            || other.bottom() < self.y)
    }
}

/// Canvas bounds of a component.
pub fn get_component_bounds(component: &VisualComponent) -> Bounds {
    Bounds::new(
        component.position.x,
        component.position.y,
        component.size.width,
        component.size.height,
    )
}

/// Whether `inner` lies entirely within `outer`.
pub fn is_component_inside(inner: &VisualComponent, outer: &VisualComponent) -> bool {
    get_component_bounds(outer).contains_bounds(&get_component_bounds(inner))
}

/// Whether two components overlap on the canvas.
pub fn do_components_overlap(a: &VisualComponent, b: &VisualComponent) -> bool {
    get_component_bounds(a).overlaps(&get_component_bounds(b))
}
