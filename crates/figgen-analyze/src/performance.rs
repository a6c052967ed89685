//! Performance estimation from synthesized artifact text.
//!
//! All numbers are estimates: bundle size is the raw artifact byte count
//! rounded up to kilobytes, and the tiers band on that and on the total
//! line count.

use figgen_schema::{PerformanceMetrics, RenderTier, UsageTier};

/// Estimate performance from the markup and stylesheet artifacts.
pub fn analyze_performance(markup: &str, stylesheet: &str) -> PerformanceMetrics {
    let bundle_kb = bundle_size_kb(markup, stylesheet);
    let lines_of_code = markup.lines().count() + stylesheet.lines().count();

    let render_performance = if lines_of_code < 100 {
        RenderTier::Excellent
    } else if lines_of_code < 200 {
        RenderTier::Good
    } else if lines_of_code < 400 {
        RenderTier::Moderate
    } else {
        RenderTier::Poor
    };

    let memory_usage = if bundle_kb < 5 {
        UsageTier::Low
    } else if bundle_kb < 15 {
        UsageTier::Moderate
    } else {
        UsageTier::High
    };

    let bundle_impact = if bundle_kb < 10 {
        UsageTier::Low
    } else if bundle_kb < 25 {
        UsageTier::Moderate
    } else {
        UsageTier::High
    };

    PerformanceMetrics {
        bundle_size: format!("{bundle_kb}KB"),
        lines_of_code,
        render_performance,
        memory_usage,
        bundle_impact,
    }
}

/// ceil((markup + stylesheet bytes) / 1024)
fn bundle_size_kb(markup: &str, stylesheet: &str) -> usize {
    (markup.len() + stylesheet.len()).div_ceil(1024)
}
