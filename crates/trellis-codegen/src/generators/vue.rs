//! Vue single-file component skeleton.
//!
//! The skeleton does not walk the component tree.

use serde_json::json;
use trellis_core::VisualComponent;

use super::templates::TemplateEngine;
use super::{FrameworkGenerator, GenerationContext};
use crate::config::Framework;
use crate::error::Result;

const TEMPLATE_NAME: &str = "vue";

const VUE_TEMPLATE: &str = r#"{{#if comments}}<!-- {{name}} - generated by Trellis on {{timestamp}} -->
{{/if}}<template>
  <div class="{{kebab_case name}}">
    <!-- Component content -->
  </div>
</template>

<script{{#if typescript}} lang="ts"{{/if}}>
export default {
  name: '{{name}}',
};
</script>"#;

/// Vue generator.
pub struct VueGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> VueGenerator<'a> {
    pub fn new() -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(TEMPLATE_NAME, VUE_TEMPLATE)?;
        Ok(Self { engine })
    }
}

impl<'a> FrameworkGenerator for VueGenerator<'a> {
    fn framework(&self) -> Framework {
        Framework::Vue
    }

    fn framework_name(&self) -> &'static str {
        "Vue"
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
