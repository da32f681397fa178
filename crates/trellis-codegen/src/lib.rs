//! Code generation from Trellis component trees to web UI frameworks.
//!
//! The editor hands over a flat list of [`VisualComponent`]s linked by
//! `parent_id`. React and plain HTML output walk that tree from its roots;
//! Vue, Angular and Svelte output are fixed skeletons.
//!
//! # Features
//!
//! - `react` - React function components (TSX or JSX)
//! - `html` - Standalone HTML documents
//! - `vue` - Vue single-file component skeletons
//! - `angular` - Angular component skeletons
//! - `svelte` - Svelte component skeletons
//!
//! # Example
//!
//! ```ignore
//! use trellis_codegen::{CodeGenerator, CodeGeneratorConfig, GenerationOptions};
//!
//! let generator = CodeGenerator::new(CodeGeneratorConfig::default());
//! let code = generator.generate_code(&components, &GenerationOptions::new())?;
//! println!("{}", code);
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod style;

use convert_case::{Case, Casing};
use log::debug;
use trellis_core::VisualComponent;

pub use config::{
    CodeGeneratorConfig, CssFramework, ExportStyle, ExportType, Framework, GenerationOptions,
    DEFAULT_COMPONENT_NAME,
};
pub use error::{CodegenError, Result};
pub use generators::{FrameworkGenerator, GeneratedFile, GenerationContext, TemplateEngine};

#[cfg(feature = "react")]
pub use generators::ReactGenerator;

#[cfg(feature = "html")]
pub use generators::HtmlGenerator;

#[cfg(feature = "vue")]
pub use generators::VueGenerator;

#[cfg(feature = "angular")]
pub use generators::AngularGenerator;

#[cfg(feature = "svelte")]
pub use generators::SvelteGenerator;

/// Entry point dispatching on [`CodeGeneratorConfig::framework`].
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    config: CodeGeneratorConfig,
}

impl CodeGenerator {
    pub fn new(config: CodeGeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodeGeneratorConfig {
        &self.config
    }

    /// Generator for the configured framework.
    pub fn generator(&self) -> Result<Box<dyn FrameworkGenerator>> {
        #[allow(unreachable_patterns)]
        let generator: Box<dyn FrameworkGenerator> = match self.config.framework {
            #[cfg(feature = "react")]
            Framework::React => Box::new(ReactGenerator::new()),
            #[cfg(feature = "html")]
            Framework::Html => Box::new(HtmlGenerator::new()),
            #[cfg(feature = "vue")]
            Framework::Vue => Box::new(VueGenerator::new()?),
            #[cfg(feature = "angular")]
            Framework::Angular => Box::new(AngularGenerator::new()?),
            #[cfg(feature = "svelte")]
            Framework::Svelte => Box::new(SvelteGenerator::new()?),
            other => return Err(CodegenError::FrameworkDisabled(other.to_string())),
        };
        Ok(generator)
    }

    /// Generate a complete source file for the configured framework.
    pub fn generate_code(
        &self,
        components: &[VisualComponent],
        options: &GenerationOptions,
    ) -> Result<String> {
        let generator = self.generator()?;
        let ctx = GenerationContext::new(&self.config, options);
        debug!(
            "generating {} ({}) for {} components as {}",
            generator.framework_name(),
            self.config.css_framework,
            components.len(),
            ctx.component_name
        );
        generator.generate(components, &ctx)
    }

    /// Generate code and name the file it belongs in.
    pub fn generate_file(
        &self,
        components: &[VisualComponent],
        options: &GenerationOptions,
    ) -> Result<GeneratedFile> {
        let generator = self.generator()?;
        let ctx = GenerationContext::new(&self.config, options);
        let content = generator.generate(components, &ctx)?;

        let framework = generator.framework();
        let extension = framework.file_extension(self.config.typescript);
        let path = match framework {
            Framework::Angular => format!("{}.{}", ctx.component_name.to_case(Case::Kebab), extension),
            _ => format!("{}.{}", ctx.component_name, extension),
        };
        Ok(GeneratedFile { path, content })
    }
}

fn generate_for(
    framework: Framework,
    components: &[VisualComponent],
    config: &CodeGeneratorConfig,
    options: &GenerationOptions,
) -> Result<String> {
    let config = CodeGeneratorConfig {
        framework,
        ..config.clone()
    };
    CodeGenerator::new(config).generate_code(components, options)
}

/// Generate React code regardless of `config.framework`.
pub fn generate_react_code(
    components: &[VisualComponent],
    config: &CodeGeneratorConfig,
    options: &GenerationOptions,
) -> Result<String> {
    generate_for(Framework::React, components, config, options)
}

/// Generate a Vue skeleton regardless of `config.framework`.
pub fn generate_vue_code(
    components: &[VisualComponent],
    config: &CodeGeneratorConfig,
    options: &GenerationOptions,
) -> Result<String> {
    generate_for(Framework::Vue, components, config, options)
}

/// Generate an Angular skeleton regardless of `config.framework`.
pub fn generate_angular_code(
    components: &[VisualComponent],
    config: &CodeGeneratorConfig,
    options: &GenerationOptions,
) -> Result<String> {
    generate_for(Framework::Angular, components, config, options)
}

/// Generate a Svelte skeleton regardless of `config.framework`.
pub fn generate_svelte_code(
    components: &[VisualComponent],
    config: &CodeGeneratorConfig,
    options: &GenerationOptions,
) -> Result<String> {
    generate_for(Framework::Svelte, components, config, options)
}

/// Generate an HTML document regardless of `config.framework`.
pub fn generate_html_code(
    components: &[VisualComponent],
    config: &CodeGeneratorConfig,
    options: &GenerationOptions,
) -> Result<String> {
    generate_for(Framework::Html, components, config, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_follows_config() {
        let generator = CodeGenerator::new(
            CodeGeneratorConfig::new(Framework::Html, CssFramework::Custom).with_comments(false),
        );
        let code = generator.generate_code(&[], &GenerationOptions::new()).unwrap();
        assert!(code.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_wrapper_forces_framework() {
        let config = CodeGeneratorConfig::default().with_comments(false);
        let code = generate_svelte_code(&[], &config, &GenerationOptions::new()).unwrap();
        assert!(code.contains("<div class=\"generated-component\">"));
        assert!(!code.contains("React"));
    }

    #[test]
    fn test_generator_matches_config() {
        let names = ["React", "Vue", "Angular", "Svelte", "HTML"];
        for (framework, name) in Framework::ALL.into_iter().zip(names) {
            let generator = CodeGenerator::new(CodeGeneratorConfig::new(framework, CssFramework::Tailwind))
                .generator()
                .unwrap();
            assert_eq!(generator.framework(), framework);
            assert_eq!(generator.framework_name(), name);
        }
    }

    #[test]
    fn test_generated_file_paths() {
        let options = GenerationOptions::new().with_component_name("LoginForm");
        let cases = [
            (Framework::React, true, "LoginForm.tsx"),
            (Framework::React, false, "LoginForm.jsx"),
            (Framework::Html, true, "LoginForm.html"),
            (Framework::Vue, true, "LoginForm.vue"),
            (Framework::Angular, true, "login-form.component.ts"),
            (Framework::Svelte, false, "LoginForm.svelte"),
        ];
        for (framework, typescript, expected) in cases {
            let config = CodeGeneratorConfig::new(framework, CssFramework::Tailwind)
                .with_typescript(typescript);
            let file = CodeGenerator::new(config).generate_file(&[], &options).unwrap();
            assert_eq!(file.path, expected);
        }
    }
}
