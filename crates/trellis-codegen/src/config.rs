//! Generator configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CodegenError, Result};

/// Name used when the caller supplies none.
pub const DEFAULT_COMPONENT_NAME: &str = "GeneratedComponent";

/// Target UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    React,
    Vue,
    Angular,
    Svelte,
    Html,
}

impl Framework {
    pub const ALL: [Framework; 5] = [
        Framework::React,
        Framework::Vue,
        Framework::Angular,
        Framework::Svelte,
        Framework::Html,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Svelte => "svelte",
            Self::Html => "html",
        }
    }

    /// File extension for generated sources.
    pub fn file_extension(&self, typescript: bool) -> &'static str {
        match self {
            Self::React if typescript => "tsx",
            Self::React => "jsx",
            Self::Vue => "vue",
            Self::Angular if typescript => "component.ts",
            Self::Angular => "component.js",
            Self::Svelte => "svelte",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self> {
        Framework::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CodegenError::UnknownFramework(s.to_string()))
    }
}

/// Target styling idiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssFramework {
    #[default]
    Tailwind,
    Bootstrap,
    Material,
    Custom,
}

impl CssFramework {
    pub const ALL: [CssFramework; 4] = [
        CssFramework::Tailwind,
        CssFramework::Bootstrap,
        CssFramework::Material,
        CssFramework::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Bootstrap => "bootstrap",
            Self::Material => "material",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for CssFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CssFramework {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self> {
        CssFramework::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CodegenError::UnknownCssFramework(s.to_string()))
    }
}

/// What the generated source is meant to be used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    #[default]
    Component,
    Page,
    Snippet,
}

impl ExportType {
    pub const ALL: [ExportType; 3] = [ExportType::Component, ExportType::Page, ExportType::Snippet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Page => "page",
            Self::Snippet => "snippet",
        }
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportType {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self> {
        ExportType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CodegenError::UnknownExportType(s.to_string()))
    }
}

/// Per-call generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeGeneratorConfig {
    pub framework: Framework,
    pub css_framework: CssFramework,
    pub typescript: bool,
    pub include_comments: bool,
    /// Accepted but not acted on.
    pub format_code: bool,
    /// Accepted but not acted on.
    pub export_type: ExportType,
}

impl Default for CodeGeneratorConfig {
    fn default() -> Self {
        Self {
            framework: Framework::React,
            css_framework: CssFramework::Tailwind,
            typescript: true,
            include_comments: true,
            format_code: true,
            export_type: ExportType::Component,
        }
    }
}

impl CodeGeneratorConfig {
    pub fn new(framework: Framework, css_framework: CssFramework) -> Self {
        Self {
            framework,
            css_framework,
            ..Self::default()
        }
    }

    pub fn with_typescript(mut self, typescript: bool) -> Self {
        self.typescript = typescript;
        self
    }

    pub fn with_comments(mut self, include_comments: bool) -> Self {
        self.include_comments = include_comments;
        self
    }

    pub fn with_export_type(mut self, export_type: ExportType) -> Self {
        self.export_type = export_type;
        self
    }

    /// Parse a config from the editor's JSON.
    ///
    /// Unknown enum names are reported as the matching `Unknown*` error
    /// rather than a generic JSON error. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        if let Some(name) = value.get("framework").and_then(Value::as_str) {
            name.parse::<Framework>()?;
        }
        if let Some(name) = value.get("cssFramework").and_then(Value::as_str) {
            name.parse::<CssFramework>()?;
        }
        if let Some(name) = value.get("exportType").and_then(Value::as_str) {
            name.parse::<ExportType>()?;
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// How the generated component is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStyle {
    /// `export default Name;`
    #[default]
    Default,
    /// `export { Name };`
    Named,
}

/// Optional per-call settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub component_name: Option<String>,
    pub export_style: ExportStyle,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    pub fn with_export_style(mut self, export_style: ExportStyle) -> Self {
        self.export_style = export_style;
        self
    }

    /// Component name as given, defaulting to [`DEFAULT_COMPONENT_NAME`] when blank.
    pub fn resolved_component_name(&self) -> String {
        match self.component_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_COMPONENT_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_from_str() {
        assert_eq!("react".parse::<Framework>().unwrap(), Framework::React);
        assert_eq!("html".parse::<Framework>().unwrap(), Framework::Html);
        assert!(matches!(
            "flutter".parse::<Framework>(),
            Err(CodegenError::UnknownFramework(ref name)) if name == "flutter"
        ));
    }

    #[test]
    fn test_css_framework_round_trips_display() {
        for css in CssFramework::ALL {
            assert_eq!(css.to_string().parse::<CssFramework>().unwrap(), css);
        }
        assert!("sass".parse::<CssFramework>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = CodeGeneratorConfig::default();
        assert_eq!(config.framework, Framework::React);
        assert_eq!(config.css_framework, CssFramework::Tailwind);
        assert!(config.typescript);
        assert!(config.include_comments);
        assert_eq!(config.export_type, ExportType::Component);
    }

    #[test]
    fn test_config_from_json() {
        let config = CodeGeneratorConfig::from_json(
            r#"{"framework": "html", "cssFramework": "bootstrap", "typescript": false}"#,
        )
        .unwrap();
        assert_eq!(config.framework, Framework::Html);
        assert_eq!(config.css_framework, CssFramework::Bootstrap);
        assert!(!config.typescript);
        assert!(config.include_comments);
    }

    #[test]
    fn test_config_from_json_rejects_unknown_names() {
        assert!(matches!(
            CodeGeneratorConfig::from_json(r#"{"framework": "flutter"}"#),
            Err(CodegenError::UnknownFramework(_))
        ));
        assert!(matches!(
            CodeGeneratorConfig::from_json(r#"{"cssFramework": "bulma"}"#),
            Err(CodegenError::UnknownCssFramework(_))
        ));
        assert!(matches!(
            CodeGeneratorConfig::from_json(r#"{"exportType": "module"}"#),
            Err(CodegenError::UnknownExportType(_))
        ));
    }

    #[test]
    fn test_resolved_component_name() {
        assert_eq!(GenerationOptions::new().resolved_component_name(), "GeneratedComponent");
        assert_eq!(
            GenerationOptions::new()
                .with_component_name(" HeroSection ")
                .resolved_component_name(),
            "HeroSection"
        );
        for name in ["HTMLPage", "my_widget", "Card_v2"] {
            assert_eq!(
                GenerationOptions::new()
                    .with_component_name(name)
                    .resolved_component_name(),
                name
            );
        }
        assert_eq!(
            GenerationOptions::new()
                .with_component_name("  ")
                .resolved_component_name(),
            "GeneratedComponent"
        );
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(Framework::React.file_extension(true), "tsx");
        assert_eq!(Framework::React.file_extension(false), "jsx");
        assert_eq!(Framework::Angular.file_extension(true), "component.ts");
        assert_eq!(Framework::Html.file_extension(true), "html");
    }
}
