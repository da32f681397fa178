//! Static HTML document generator.

use trellis_core::VisualComponent;

use super::markup::{AttributeWriter, MarkupEmitter, INDENT};
use super::{FrameworkGenerator, GenerationContext};
use crate::config::{CssFramework, Framework};
use crate::error::Result;
use crate::style;

const RESERVED_PROPS: &[&str] = &["className", "style"];

const BOOTSTRAP_CDN: &str =
    "<link href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css\" rel=\"stylesheet\">";
const TAILWIND_CDN: &str = "<script src=\"https://cdn.tailwindcss.com\"></script>";
const MATERIAL_FONTS: &str =
    "<link href=\"https://fonts.googleapis.com/icon?family=Material+Icons\" rel=\"stylesheet\">";

/// HTML generator.
pub struct HtmlGenerator;

impl HtmlGenerator {
    pub fn new() -> Self {
        Self
    }

    fn stylesheet(&self, css: CssFramework) -> Option<&'static str> {
        match css {
            CssFramework::Bootstrap => Some(BOOTSTRAP_CDN),
            CssFramework::Tailwind => Some(TAILWIND_CDN),
            CssFramework::Material => Some(MATERIAL_FONTS),
            CssFramework::Custom => None,
        }
    }
}

impl Default for HtmlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameworkGenerator for HtmlGenerator {
    fn framework(&self) -> Framework {
        Framework::Html
    }

    fn framework_name(&self) -> &'static str {
        "HTML"
    }

    fn generate(&self, components: &[VisualComponent], ctx: &GenerationContext) -> Result<String> {
        let config = ctx.config;
        let writer = HtmlAttributes {
            css: config.css_framework,
        };
        let emitter = MarkupEmitter::new(components, &writer)?;

        let mut lines = vec!["<!DOCTYPE html>".to_string()];
        if config.include_comments {
            lines.push(format!(
                "<!-- {} - generated by Trellis on {} -->",
                ctx.component_name,
                ctx.timestamp()
            ));
        }
        lines.push("<html lang=\"en\">".to_string());
        lines.push("<head>".to_string());
        lines.push(format!("{}<meta charset=\"UTF-8\">", INDENT));
        lines.push(format!(
            "{}<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
            INDENT
        ));
        lines.push(format!("{}<title>{}</title>", INDENT, ctx.component_name));
        if let Some(tag) = self.stylesheet(config.css_framework) {
            lines.push(format!("{}{}", INDENT, tag));
        }
        lines.push("</head>".to_string());
        lines.push("<body>".to_string());
        lines.extend(emitter.emit_roots(1)?);
        lines.push("</body>".to_string());
        lines.push("</html>".to_string());

        Ok(lines.join("\n"))
    }
}

/// HTML attributes: `class`, every prop as a quoted literal, and inline `style`.
struct HtmlAttributes {
    css: CssFramework,
}

impl AttributeWriter for HtmlAttributes {
    fn attributes(&self, component: &VisualComponent) -> String {
        let mut attrs = String::new();

        let classes = style::class_names(component, self.css);
        if !classes.is_empty() {
            attrs.push_str(&format!(" class=\"{}\"", classes));
        }

        for (key, value) in &component.props {
            if RESERVED_PROPS.contains(&key.as_str()) {
                continue;
            }
            attrs.push_str(&format!(" {}=\"{}\"", key, trellis_core::stringify_prop(value)));
        }

        if self.css == CssFramework::Custom {
            if let Some(declarations) = style::css_declarations(&component.styles) {
                attrs.push_str(&format!(" style=\"{}\"", declarations));
            }
        }

        attrs
    }
}
