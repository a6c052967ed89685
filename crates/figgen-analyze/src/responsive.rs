//! Responsive-design analysis.
//!
//! A node counts as responsive when it uses auto-layout or anchors away
//! from the default top-left constraints. The per-breakpoint strings are
//! placeholder comments; real per-breakpoint rule synthesis has no
//! backing signal in the node model yet.

use figgen_schema::{LayoutMode, Node, ResponsiveBreakpoints};

/// Analyze a node's responsiveness.
pub fn analyze_responsive(node: &Node) -> ResponsiveBreakpoints {
    let has_flex_layout = matches!(
        node.layout_mode,
        Some(LayoutMode::Horizontal) | Some(LayoutMode::Vertical)
    );
    // Absent constraints mean the default top-left anchor.
    let has_constraints = node
        .constraints
        .as_ref()
        .is_some_and(|c| c.deviates_from_default());

    ResponsiveBreakpoints {
        mobile: breakpoint_stub(node, "mobile"),
        tablet: breakpoint_stub(node, "tablet"),
        desktop: breakpoint_stub(node, "desktop"),
        has_responsive_design: has_flex_layout || has_constraints,
    }
}

fn breakpoint_stub(node: &Node, breakpoint: &str) -> String {
    format!("/* {breakpoint} styles for {} */", node.name)
}
