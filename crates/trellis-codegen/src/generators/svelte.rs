//! Svelte component skeleton.
//!
//! The skeleton does not walk the component tree.

use serde_json::json;
use trellis_core::VisualComponent;

use super::templates::TemplateEngine;
use super::{FrameworkGenerator, GenerationContext};
use crate::config::Framework;
use crate::error::Result;

const TEMPLATE_NAME: &str = "svelte";

const SVELTE_TEMPLATE: &str = r#"{{#if comments}}<!-- {{name}} - generated by Trellis on {{timestamp}} -->
{{/if}}<script{{#if typescript}} lang="ts"{{/if}}>
  // {{name}}
</script>

<div class="{{kebab_case name}}">
  <!-- Component content -->
</div>

<style>
</style>"#;

/// Svelte generator.
pub struct SvelteGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> SvelteGenerator<'a> {
    pub fn new() -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(TEMPLATE_NAME, SVELTE_TEMPLATE)?;
        Ok(Self { engine })
    }
}

impl<'a> FrameworkGenerator for SvelteGenerator<'a> {
    fn framework(&self) -> Framework {
        Framework::Svelte
    }

    fn framework_name(&self) -> &'static str {
        "Svelte"
    }

    fn generate(&self, _components: &[VisualComponent], ctx: &GenerationContext) -> Result<String> {
        self.engine.render(
            TEMPLATE_NAME,
            &json!({
                "name": ctx.component_name,
                "typescript": ctx.config.typescript,
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
    fn test_svelte_skeleton() {
        let config = CodeGeneratorConfig::new(Framework::Svelte, CssFramework::Custom)
            .with_comments(false)
            .with_typescript(false);
        let options = GenerationOptions::new();
        let ctx = GenerationContext::new(&config, &options);

        let code = SvelteGenerator::new().unwrap().generate(&[], &ctx).unwrap();
        assert!(code.starts_with("<script>\n  // GeneratedComponent\n</script>"));
        assert!(code.contains("<div class=\"generated-component\">"));
        assert!(code.ends_with("<style>\n</style>"));
    }
}
