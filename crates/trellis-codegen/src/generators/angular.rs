//! Angular component skeleton.
//!
//! The skeleton does not walk the component tree.

use serde_json::json;
use trellis_core::VisualComponent;

use super::templates::TemplateEngine;
use super::{FrameworkGenerator, GenerationContext};
use crate::config::Framework;
use crate::error::Result;

const TEMPLATE_NAME: &str = "angular";

const ANGULAR_TEMPLATE: &str = r#"{{#if comments}}// {{name}} - generated by Trellis on {{timestamp}}
{{/if}}import { Component } from '@angular/core';

@Component({
  selector: 'app-{{kebab_case name}}',
  template: `
    <div class="{{kebab_case name}}">
      <!-- Component content -->
    </div>
  `,
})
export class {{name}}Component {}"#;

/// Angular generator.
pub struct AngularGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> AngularGenerator<'a> {
    pub fn new() -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(TEMPLATE_NAME, ANGULAR_TEMPLATE)?;
        Ok(Self { engine })
    }
}

impl<'a> FrameworkGenerator for AngularGenerator<'a> {
    fn framework(&self) -> Framework {
        Framework::Angular
    }

    fn framework_name(&self) -> &'static str {
        "Angular"
    }

    fn generate(&self, _components: &[VisualComponent], ctx: &GenerationContext) -> Result<String> {
        self.engine.render(
            TEMPLATE_NAME,
            &json!({
                "name": ctx.component_name,
                "comments": ctx.config.include_comments,
                "timestamp": ctx.timestamp(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CodeGeneratorConfig, CssFramework, GenerationOptions};

    #[test]
    fn test_angular_skeleton() {
        let config = CodeGeneratorConfig::new(Framework::Angular, CssFramework::Bootstrap)
            .with_comments(false);
        let options = GenerationOptions::new().with_component_name("UserCard");
        let ctx = GenerationContext::new(&config, &options);

        let code = AngularGenerator::new()
            .unwrap()
            .generate(&[VisualComponent::new("Container")], &ctx)
            .unwrap();
        assert!(code.starts_with("import { Component } from '@angular/core';"));
        assert!(code.contains("selector: 'app-user-card',"));
        assert!(code.contains("@Component({"));
        assert!(code.ends_with("export class UserCardComponent {}"));
    }
}
