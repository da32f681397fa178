//! React code generator emitting a function component with JSX.

use trellis_core::VisualComponent;

use super::markup::{AttributeWriter, MarkupEmitter, INDENT};
use super::{FrameworkGenerator, GenerationContext};
use crate::config::{CssFramework, ExportStyle, Framework};
use crate::error::Result;
use crate::style;

/// Props the generator renders itself rather than passing through.
const RESERVED_PROPS: &[&str] = &["className", "style"];

/// Depth of the JSX root inside `return ( ... )`.
const JSX_ROOT_DEPTH: usize = 2;

/// React code generator.
pub struct ReactGenerator;

impl ReactGenerator {
    /// Create a new React generator.
    pub fn new() -> Self {
        Self
    }

    fn imports(&self, css: CssFramework) -> Vec<String> {
        let mut lines = vec!["import React from 'react';".to_string()];
        match css {
            CssFramework::Material => {
                lines.push(
                    "import { ThemeProvider, createTheme } from '@mui/material/styles';".to_string(),
                );
                lines.push("import CssBaseline from '@mui/material/CssBaseline';".to_string());
            }
            CssFramework::Bootstrap => {
                lines.push("import 'bootstrap/dist/css/bootstrap.min.css';".to_string());
            }
            // Tailwind ships as a global stylesheet.
            CssFramework::Tailwind | CssFramework::Custom => {}
        }
        lines
    }

    fn jsx_body(&self, components: &[VisualComponent], css: CssFramework) -> Result<String> {
        let writer = JsxAttributes { css };
        let emitter = MarkupEmitter::new(components, &writer)?;
        let outer = INDENT.repeat(JSX_ROOT_DEPTH);

        match emitter.root_count() {
            0 => Ok(format!("{}<></>", outer)),
            1 => Ok(emitter.emit_roots(JSX_ROOT_DEPTH)?.join("\n")),
            _ => {
                let mut lines = vec![format!("{}<>", outer)];
                lines.extend(emitter.emit_roots(JSX_ROOT_DEPTH + 1)?);
                lines.push(format!("{}</>", outer));
                Ok(lines.join("\n"))
            }
        }
    }
}

impl Default for ReactGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameworkGenerator for ReactGenerator {
    fn framework(&self) -> Framework {
        Framework::React
    }

    fn framework_name(&self) -> &'static str {
        "React"
    }

    fn generate(&self, components: &[VisualComponent], ctx: &GenerationContext) -> Result<String> {
        let config = ctx.config;
        let name = &ctx.component_name;
        let mut lines = self.imports(config.css_framework);
        lines.push(String::new());

        if config.include_comments {
            lines.push("/**".to_string());
            lines.push(format!(" * {}", name));
            lines.push(format!(" * Generated by Trellis on {}", ctx.timestamp()));
            lines.push(" */".to_string());
        }

        let signature = if config.typescript {
            format!("const {}: React.FC = () => {{", name)
        } else {
            format!("const {} = () => {{", name)
        };
        lines.push(signature);
        lines.push(format!("{}return (", INDENT));
        lines.push(self.jsx_body(components, config.css_framework)?);
        lines.push(format!("{});", INDENT));
        lines.push("};".to_string());
        lines.push(String::new());

        lines.push(match ctx.export_style {
            ExportStyle::Default => format!("export default {};", name),
            ExportStyle::Named => format!("export {{ {} }};", name),
        });

        Ok(lines.join("\n"))
    }
}

/// JSX attributes: `className`, passthrough props, and the custom `style` object.
struct JsxAttributes {
    css: CssFramework,
}

impl AttributeWriter for JsxAttributes {
    fn attributes(&self, component: &VisualComponent) -> String {
        let mut attrs = String::new();

        let classes = style::class_names(component, self.css);
        if !classes.is_empty() {
            attrs.push_str(&format!(" className=\"{}\"", classes));
        }

        for (key, value) in &component.props {
            if RESERVED_PROPS.contains(&key.as_str()) {
                continue;
            }
            match value {
                serde_json::Value::String(s) => attrs.push_str(&format!(" {}=\"{}\"", key, s)),
                other => attrs.push_str(&format!(" {}={{{}}}", key, other)),
            }
        }

        if self.css == CssFramework::Custom {
            if let Some(object) = style::jsx_style_object(&component.styles) {
                attrs.push_str(&format!(" style={}", object));
            }
        }

        attrs
    }
}
