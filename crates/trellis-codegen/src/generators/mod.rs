//! Code generators for the supported web frameworks.

#[cfg(feature = "react")]
mod react;
#[cfg(feature = "html")]
mod html;
#[cfg(feature = "vue")]
mod vue;
#[cfg(feature = "angular")]
mod angular;
#[cfg(feature = "svelte")]
mod svelte;

#[cfg(any(feature = "react", feature = "html"))]
mod markup;
mod templates;

#[cfg(feature = "react")]
pub use react::ReactGenerator;
#[cfg(feature = "html")]
pub use html::HtmlGenerator;
#[cfg(feature = "vue")]
pub use vue::VueGenerator;
#[cfg(feature = "angular")]
pub use angular::AngularGenerator;
#[cfg(feature = "svelte")]
pub use svelte::SvelteGenerator;

pub use templates::TemplateEngine;

use chrono::{DateTime, SecondsFormat, Utc};
use trellis_core::VisualComponent;

use crate::config::{CodeGeneratorConfig, ExportStyle, Framework, GenerationOptions};
use crate::error::Result;

/// Common trait for framework generators.
pub trait FrameworkGenerator {
    /// Framework this generator targets.
    fn framework(&self) -> Framework;

    /// Human-readable framework name.
    fn framework_name(&self) -> &'static str;

    /// Generate source text for a flat component list.
    fn generate(&self, components: &[VisualComponent], ctx: &GenerationContext) -> Result<String>;
}

/// Everything a generator needs besides the components themselves.
#[derive(Debug, Clone)]
pub struct GenerationContext<'a> {
    pub config: &'a CodeGeneratorConfig,
    /// Component name, defaulted when blank.
    pub component_name: String,
    pub export_style: ExportStyle,
    /// Generation time, fixed once per call.
    pub generated_at: DateTime<Utc>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(config: &'a CodeGeneratorConfig, options: &GenerationOptions) -> Self {
        Self {
            config,
            component_name: options.resolved_component_name(),
            export_style: options.export_style,
            generated_at: Utc::now(),
        }
    }

    /// Generation time as RFC 3339 in whole seconds, e.g. `2024-05-01T12:00:00Z`.
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// A generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}
