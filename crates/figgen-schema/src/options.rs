//! Generation options and custom code inputs.
//!
//! Supplied once per generation run and never mutated by the core; every
//! synthesis stage receives them as shared references.

use serde::{Deserialize, Serialize};

/// Target UI framework. Only the React family is emitted with a full
/// component shell; the other values are accepted and produce the bare
/// element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Nextjs,
    Vue,
    Svelte,
    Html,
}

/// Styling strategy. `Tailwind` selects utility-class derivation; every
/// other value falls back to explicit CSS rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Styling {
    Tailwind,
    StyledComponents,
    CssModules,
    Emotion,
    Sass,
    Vanilla,
}

/// Build tooling, informational only — recorded in the report, never
/// consulted during synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Vite,
    Webpack,
    Rollup,
    Parcel,
}

/// Per-run generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub framework: Framework,
    pub styling: Styling,
    pub build_tool: BuildTool,
    pub typescript: bool,
    pub accessibility: bool,
    pub responsive: bool,
    pub image_optimization: bool,
    pub performance_optimization: bool,
    pub unit_tests: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            framework: Framework::React,
            styling: Styling::Tailwind,
            build_tool: BuildTool::Vite,
            typescript: true,
            accessibility: true,
            responsive: true,
            image_optimization: false,
            performance_optimization: false,
            unit_tests: false,
        }
    }
}

/// Free-text code blocks injected verbatim into the artifacts, fenced by
/// generated marker comments. Empty blocks are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomCode {
    pub script: String,
    pub styles: String,
    pub animations: String,
}

impl CustomCode {
    pub fn is_empty(&self) -> bool {
        self.script.is_empty() && self.styles.is_empty() && self.animations.is_empty()
    }
}
