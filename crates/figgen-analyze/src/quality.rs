//! Aggregate quality score and improvement suggestions.

use figgen_schema::{
    Complexity, GeneratedComponent, QualityMetrics, RenderTier, Suggestion, SuggestionKind,
    SuggestionPriority, UsageTier,
};

/// Map a render tier onto the 0–100 quality scale.
fn render_tier_score(tier: RenderTier) -> u32 {
    match tier {
        RenderTier::Excellent => 95,
        RenderTier::Good => 80,
        RenderTier::Moderate | RenderTier::Poor => 65,
    }
}

fn responsiveness_score(has_responsive_design: bool) -> u32 {
    if has_responsive_design {
        90
    } else {
        70
    }
}

/// Aggregate quality numbers: the overall score is the rounded mean of
/// accuracy, accessibility, render performance, and responsiveness.
pub fn quality_metrics(component: &GeneratedComponent) -> QualityMetrics {
    let accuracy = component.metadata.estimated_accuracy;
    let accessibility = component.accessibility.score;
    let performance = render_tier_score(component.metadata.performance.render_performance);
    let responsiveness = responsiveness_score(component.responsive.has_responsive_design);

    let sum = accuracy + accessibility + performance + responsiveness;
    // Rounded mean of the four signals.
    let overall = (sum as f64 / 4.0).round() as u32;

    QualityMetrics {
        overall,
        accuracy,
        performance,
        accessibility,
        responsiveness,
    }
}

/// Ranked improvement suggestions for one generated component.
pub fn suggestions(component: &GeneratedComponent) -> Vec<Suggestion> {
    let mut out = Vec::new();

    if component.metadata.performance.bundle_impact == UsageTier::High {
        out.push(Suggestion {
            kind: SuggestionKind::Performance,
            title: "Bundle Size Optimization".into(),
            description: "Consider lazy loading and code splitting to reduce bundle impact"
                .into(),
            priority: SuggestionPriority::High,
        });
    }

    if component.accessibility.score < 90 {
        out.push(Suggestion {
            kind: SuggestionKind::Accessibility,
            title: "Accessibility Enhancement".into(),
            description: "Improve WCAG compliance by addressing identified accessibility issues"
                .into(),
            priority: SuggestionPriority::High,
        });
    }

    if component.metadata.complexity == Complexity::Complex {
        out.push(Suggestion {
            kind: SuggestionKind::Design,
            title: "Component Simplification".into(),
            description:
                "Consider breaking down complex components into smaller, reusable parts".into(),
            priority: SuggestionPriority::Medium,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use figgen_schema::{
        AccessibilityReport, ComponentCategory, ComponentMetadata, PerformanceMetrics,
        ResponsiveBreakpoints, WcagLevel,
    };
    use pretty_assertions::assert_eq;

    fn component(
        accuracy: u32,
        a11y_score: u32,
        render: RenderTier,
        responsive: bool,
    ) -> GeneratedComponent {
        GeneratedComponent {
            id: "1:1".into(),
            name: "Hero".into(),
            markup: String::new(),
            stylesheet: String::new(),
            typescript: None,
            tests: None,
            stories: None,
            accessibility: AccessibilityReport {
                score: a11y_score,
                wcag_compliance: WcagLevel::from_score(a11y_score),
                issues: Vec::new(),
                suggestions: Vec::new(),
            },
            responsive: ResponsiveBreakpoints {
                mobile: String::new(),
                tablet: String::new(),
                desktop: String::new(),
                has_responsive_design: responsive,
            },
            metadata: ComponentMetadata {
                node_id: "1:1".into(),
                category: ComponentCategory::Complex,
                complexity: Complexity::Simple,
                estimated_accuracy: accuracy,
                generation_time_ms: 0,
                dependencies: vec!["react".into()],
                performance: PerformanceMetrics {
                    bundle_size: "1KB".into(),
                    lines_of_code: 10,
                    render_performance: render,
                    memory_usage: UsageTier::Low,
                    bundle_impact: UsageTier::Low,
                },
            },
        }
    }

    #[test]
    fn test_overall_is_rounded_mean() {
        let c = component(95, 100, RenderTier::Excellent, true);
        let q = quality_metrics(&c);
        // (95 + 100 + 95 + 90) / 4 = 95
        assert_eq!(q.overall, 95);
        assert_eq!(q.performance, 95);
        assert_eq!(q.responsiveness, 90);
    }

    #[test]
    fn test_moderate_and_poor_share_a_band() {
        let moderate = component(85, 80, RenderTier::Moderate, false);
        let poor = component(85, 80, RenderTier::Poor, false);
        assert_eq!(quality_metrics(&moderate).performance, 65);
        assert_eq!(quality_metrics(&poor).performance, 65);
    }

    #[test]
    fn test_no_suggestions_for_clean_component() {
        let c = component(90, 95, RenderTier::Excellent, true);
        assert!(suggestions(&c).is_empty());
    }

    #[test]
    fn test_accessibility_suggestion_below_90() {
        let c = component(90, 89, RenderTier::Excellent, true);
        let s = suggestions(&c);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].kind, SuggestionKind::Accessibility);
        assert_eq!(s[0].priority, SuggestionPriority::High);
    }

    #[test]
    fn test_bundle_and_complexity_suggestions() {
        let mut c = component(90, 95, RenderTier::Excellent, true);
        c.metadata.performance.bundle_impact = UsageTier::High;
        c.metadata.complexity = Complexity::Complex;
        let s = suggestions(&c);
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].kind, SuggestionKind::Performance);
        assert_eq!(s[1].kind, SuggestionKind::Design);
        assert_eq!(s[1].priority, SuggestionPriority::Medium);
    }
}
