//! Accessibility analysis.
//!
//! Scores a node out of 100 with fixed deductions and collects issues
//! plus boilerplate suggestions. Image-bearing nodes are always flagged
//! for missing alt text, independent of what the synthesizer emitted;
//! this keeps the analyzer decoupled from artifact internals at the cost
//! of false positives (the stricter of the two readings, kept on
//! purpose — see DESIGN.md).

use figgen_schema::{
    AccessibilityIssue, AccessibilityReport, Classify, CustomCode, IssueKind, IssueSeverity,
    Node, NodeKind, WcagLevel,
};

const IMAGE_ALT_PENALTY: u32 = 20;
const CONTRAST_PENALTY: u32 = 15;
const WCAG_AA_CONTRAST: f64 = 4.5;

/// Analyze a node's accessibility. Total; the score never leaves
/// `[0, 100]`.
pub fn analyze_accessibility(
    node: &Node,
    custom: &CustomCode,
    classifier: &dyn Classify,
) -> AccessibilityReport {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score: u32 = 100;

    if classifier.has_image_content(node) {
        issues.push(AccessibilityIssue {
            kind: IssueKind::Error,
            message: "Image elements require alt text for screen readers".into(),
            element: node.name.clone(),
            fix: "Add alt attribute with descriptive text".into(),
            severity: IssueSeverity::High,
        });
        score = score.saturating_sub(IMAGE_ALT_PENALTY);
    }

    if node.kind == NodeKind::Text && contrast_ratio(node) < WCAG_AA_CONTRAST {
        issues.push(AccessibilityIssue {
            kind: IssueKind::Warning,
            message: "Text contrast ratio below WCAG AA standards".into(),
            element: node.name.clone(),
            fix: "Increase contrast between text and background colors".into(),
            severity: IssueSeverity::Medium,
        });
        score = score.saturating_sub(CONTRAST_PENALTY);
    }

    if classifier.is_interactive(node) {
        suggestions.push("Ensure keyboard navigation is properly implemented".into());
        suggestions.push("Add ARIA labels for screen reader compatibility".into());
        suggestions.push("Implement proper focus management".into());
    }

    if classifier.is_heading(node) {
        suggestions
            .push("Verify heading hierarchy follows semantic order (h1 > h2 > h3...)".into());
    }

    if !custom.script.is_empty() || !custom.styles.is_empty() {
        suggestions.push("Review custom code for accessibility compliance".into());
        suggestions.push("Test with screen readers and keyboard navigation".into());
    }

    AccessibilityReport {
        score,
        wcag_compliance: WcagLevel::from_score(score),
        issues,
        suggestions,
    }
}

/// Contrast estimate for a text node.
///
/// TODO: resolve the actual foreground fill against the nearest ancestor
/// background and compute the WCAG relative-luminance ratio; until then
/// every text node passes.
fn contrast_ratio(_node: &Node) -> f64 {
    WCAG_AA_CONTRAST
}
