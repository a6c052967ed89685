//! Generated-component output records.
//!
//! One [`GeneratedComponent`] per processed top-level node, constructed
//! once by the generator and immutable thereafter. Everything serializes
//! so the CLI can dump a JSON report.

use crate::classify::{ComponentCategory, Complexity};
use serde::{Deserialize, Serialize};

/// The full output for one top-level design node: five text artifacts
/// plus the analysis records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedComponent {
    /// Source node id.
    pub id: String,
    /// Sanitized component name.
    pub name: String,
    /// Component body (TSX/JSX).
    pub markup: String,
    /// Stylesheet.
    pub stylesheet: String,
    /// Type declarations, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typescript: Option<String>,
    /// Test suite, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<String>,
    /// Story/catalog file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<String>,
    pub accessibility: AccessibilityReport,
    pub responsive: ResponsiveBreakpoints,
    pub metadata: ComponentMetadata,
}

/// WCAG compliance tier derived from the accessibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "Non-compliant")]
    NonCompliant,
}

impl WcagLevel {
    /// Tier thresholds: ≥90 AAA, ≥80 AA, ≥60 A, else Non-compliant.
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Self::Aaa
        } else if score >= 80 {
            Self::Aa
        } else if score >= 60 {
            Self::A
        } else {
            Self::NonCompliant
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    High,
    Medium,
    Low,
}

/// One accessibility finding against a specific element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityIssue {
    pub kind: IssueKind,
    pub message: String,
    /// Display name of the offending node.
    pub element: String,
    pub fix: String,
    pub severity: IssueSeverity,
}

/// Accessibility analysis for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    /// Score in `[0, 100]`.
    pub score: u32,
    pub wcag_compliance: WcagLevel,
    pub issues: Vec<AccessibilityIssue>,
    pub suggestions: Vec<String>,
}

/// Per-breakpoint style stubs plus the responsiveness verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveBreakpoints {
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
    pub has_responsive_design: bool,
}

/// Render-performance tier banded on generated line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTier {
    Excellent,
    Good,
    Moderate,
    Poor,
}

/// Low/moderate/high tier used for memory and bundle impact estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageTier {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Estimated bundle contribution, e.g. `"3KB"`.
    pub bundle_size: String,
    pub lines_of_code: usize,
    pub render_performance: RenderTier,
    pub memory_usage: UsageTier,
    pub bundle_impact: UsageTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    /// Originating design node id.
    pub node_id: String,
    pub category: ComponentCategory,
    pub complexity: Complexity,
    /// Estimated generation accuracy, `70..=100`.
    pub estimated_accuracy: u32,
    /// Elapsed synthesis wall time in milliseconds. Lives only here so
    /// the artifacts themselves stay byte-deterministic.
    pub generation_time_ms: u64,
    pub dependencies: Vec<String>,
    pub performance: PerformanceMetrics,
}

/// Aggregate quality numbers for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub overall: u32,
    pub accuracy: u32,
    pub performance: u32,
    pub accessibility: u32,
    pub responsiveness: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    Performance,
    Design,
    Accessibility,
    CodeQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    High,
    Medium,
    Low,
}

/// A ranked improvement suggestion for a generated component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub priority: SuggestionPriority,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wcag_thresholds() {
        assert_eq!(WcagLevel::from_score(100), WcagLevel::Aaa);
        assert_eq!(WcagLevel::from_score(90), WcagLevel::Aaa);
        assert_eq!(WcagLevel::from_score(89), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_score(80), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_score(79), WcagLevel::A);
        assert_eq!(WcagLevel::from_score(60), WcagLevel::A);
        assert_eq!(WcagLevel::from_score(59), WcagLevel::NonCompliant);
        assert_eq!(WcagLevel::from_score(0), WcagLevel::NonCompliant);
    }

    #[test]
    fn test_wcag_serializes_to_display_names() {
        assert_eq!(serde_json::to_string(&WcagLevel::Aaa).unwrap(), "\"AAA\"");
        assert_eq!(
            serde_json::to_string(&WcagLevel::NonCompliant).unwrap(),
            "\"Non-compliant\""
        );
    }

    #[test]
    fn test_suggestion_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&SuggestionKind::CodeQuality).unwrap(),
            "\"code-quality\""
        );
    }
}
