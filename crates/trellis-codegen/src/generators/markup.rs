//! Recursive element emission shared by the tree-driven targets.

use log::trace;
use trellis_core::{find_cycle, html_tag, ComponentIndex, VisualComponent};

use crate::error::{CodegenError, Result};

/// One level of indentation.
pub(crate) const INDENT: &str = "  ";

/// Attribute rendering for one markup flavor (JSX or HTML).
pub(crate) trait AttributeWriter {
    /// Attributes for a component's opening tag, each preceded by a space.
    fn attributes(&self, component: &VisualComponent) -> String;
}

/// Walks a component list from its roots and emits nested elements.
pub(crate) struct MarkupEmitter<'a, W> {
    index: ComponentIndex<'a>,
    writer: &'a W,
}

impl<'a, W: AttributeWriter> MarkupEmitter<'a, W> {
    /// Build an emitter, rejecting lists with a `parent_id` cycle.
    pub fn new(components: &'a [VisualComponent], writer: &'a W) -> Result<Self> {
        if let Some(id) = find_cycle(components) {
            return Err(CodegenError::CyclicStructure { id });
        }
        Ok(Self {
            index: ComponentIndex::new(components),
            writer,
        })
    }

    /// Number of root components.
    pub fn root_count(&self) -> usize {
        self.index.roots().len()
    }

    /// Emit every root at `depth`, one element per line group.
    pub fn emit_roots(&self, depth: usize) -> Result<Vec<String>> {
        let mut path = Vec::new();
        self.index
            .roots()
            .iter()
            .map(|&idx| self.emit_node(idx, depth, &mut path))
            .collect()
    }

    fn emit_node(&self, idx: usize, depth: usize, path: &mut Vec<usize>) -> Result<String> {
        let component = self.index.get(idx);
        if path.contains(&idx) {
            return Err(CodegenError::CyclicStructure {
                id: component.id.clone(),
            });
        }
        trace!("emitting {} ({}) at depth {}", component.component_type, component.id, depth);

        let pad = INDENT.repeat(depth);
        let tag = html_tag(&component.component_type);
        let attributes = self.writer.attributes(component);
        let children = self.index.children_of(&component.id);
        let content = component.content.as_deref().filter(|c| !c.is_empty());

        if children.is_empty() && content.is_none() {
            return Ok(format!("{}<{}{} />", pad, tag, attributes));
        }

        let mut lines = vec![format!("{}<{}{}>", pad, tag, attributes)];
        if children.is_empty() {
            if let Some(text) = content {
                lines.push(format!("{}{}{}", pad, INDENT, text));
            }
        } else {
            path.push(idx);
            for &child in children {
                lines.push(self.emit_node(child, depth + 1, path)?);
            }
            path.pop();
        }
        lines.push(format!("{}</{}>", pad, tag));

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IdWriter;

    impl AttributeWriter for IdWriter {
        fn attributes(&self, component: &VisualComponent) -> String {
            format!(" data-id=\"{}\"", component.id)
        }
    }

    fn node(id: &str, ty: &str, parent: Option<&str>) -> VisualComponent {
        let mut c = VisualComponent::new(ty);
        c.id = id.to_string();
        c.parent_id = parent.map(str::to_string);
        c
    }

    #[test]
    fn test_emits_nested_elements() {
        let list = vec![
            node("root", "Container", None),
            node("title", "Heading", Some("root")).with_content("Hi"),
            node("cta", "Button", Some("root")),
        ];
        let emitter = MarkupEmitter::new(&list, &IdWriter).unwrap();
        let out = emitter.emit_roots(0).unwrap();
        assert_eq!(
            out,
            vec![[
                "<div data-id=\"root\">",
                "  <h1 data-id=\"title\">",
                "    Hi",
                "  </h1>",
                "  <button data-id=\"cta\" />",
                "</div>",
            ]
            .join("\n")]
        );
    }

    #[test]
    fn test_children_take_precedence_over_content() {
        let list = vec![
            node("root", "Container", None).with_content("ignored"),
            node("child", "Text", Some("root")),
        ];
        let out = MarkupEmitter::new(&list, &IdWriter).unwrap().emit_roots(1).unwrap();
        assert!(!out[0].contains("ignored"));
        assert!(out[0].starts_with("  <div"));
        assert!(out[0].contains("\n    <span data-id=\"child\" />"));
    }

    #[test]
    fn test_dangling_parent_is_dropped() {
        let list = vec![node("root", "Container", None), node("lost", "Text", Some("ghost"))];
        let emitter = MarkupEmitter::new(&list, &IdWriter).unwrap();
        assert_eq!(emitter.root_count(), 1);
        let out = emitter.emit_roots(0).unwrap();
        assert!(!out.join("\n").contains("lost"));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let list = vec![node("a", "Container", Some("b")), node("b", "Container", Some("a"))];
        assert!(matches!(
            MarkupEmitter::new(&list, &IdWriter),
            Err(CodegenError::CyclicStructure { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_do_not_recurse_forever() {
        // The second "root" hangs under "child", so walking from the first
        // root would revisit it through the shared id.
        let list = vec![
            node("root", "Container", None),
            node("child", "Container", Some("root")),
            node("root", "Container", Some("child")),
        ];
        let result = MarkupEmitter::new(&list, &IdWriter).and_then(|e| e.emit_roots(0));
        assert!(matches!(result, Err(CodegenError::CyclicStructure { .. })));
    }
}
