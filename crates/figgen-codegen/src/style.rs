//! Style derivation from node geometry, paint, and typography.
//!
//! Two modes, selected by the styling option: utility-class tokens
//! (ordered, space-joined) or an explicit CSS declaration list. Token
//! order is significant — golden-output tests depend on it.

use figgen_schema::{Classify, Color, LayoutMode, Node, NodeKind};

/// Ordered utility-class tokens for a node.
///
/// Order: position, flex direction, gap, paddings, width, height,
/// background, radius, text size/weight, then interactive state tokens.
pub fn utility_classes(node: &Node, classifier: &dyn Classify) -> Vec<String> {
    let mut classes: Vec<String> = vec!["relative".into()];

    match node.layout_mode {
        Some(LayoutMode::Horizontal) => {
            classes.push("flex".into());
            classes.push("flex-row".into());
        }
        Some(LayoutMode::Vertical) => {
            classes.push("flex".into());
            classes.push("flex-col".into());
        }
        _ => {}
    }

    if let Some(spacing) = nonzero(node.item_spacing) {
        classes.push(format!("gap-{}", quarter(spacing)));
    }

    if let Some(p) = nonzero(node.padding_left) {
        classes.push(format!("pl-{}", quarter(p)));
    }
    if let Some(p) = nonzero(node.padding_right) {
        classes.push(format!("pr-{}", quarter(p)));
    }
    if let Some(p) = nonzero(node.padding_top) {
        classes.push(format!("pt-{}", quarter(p)));
    }
    if let Some(p) = nonzero(node.padding_bottom) {
        classes.push(format!("pb-{}", quarter(p)));
    }

    if let Some(bb) = &node.absolute_bounding_box {
        if bb.width < 100.0 {
            classes.push("w-auto".into());
        } else if bb.width < 300.0 {
            classes.push("w-full".into());
            classes.push("max-w-sm".into());
        } else {
            classes.push("w-full".into());
        }

        if bb.height < 50.0 {
            classes.push("h-auto".into());
        } else {
            classes.push(format!("min-h-[{}px]", format_px(bb.height)));
        }
    }

    if let Some(color) = &node.background_color {
        classes.push(color_token(color).into());
    }

    if let Some(radius) = nonzero(node.corner_radius) {
        if radius <= 4.0 {
            classes.push("rounded".into());
        } else if radius <= 8.0 {
            classes.push("rounded-lg".into());
        } else {
            classes.push("rounded-xl".into());
        }
    }

    if node.kind == NodeKind::Text {
        if let Some(style) = &node.style {
            let size = style.font_size;
            let token = if size <= 12.0 {
                "text-xs"
            } else if size <= 14.0 {
                "text-sm"
            } else if size <= 16.0 {
                "text-base"
            } else if size <= 18.0 {
                "text-lg"
            } else if size <= 24.0 {
                "text-xl"
            } else {
                "text-2xl"
            };
            classes.push(token.into());

            if style.font_weight >= 600.0 {
                classes.push("font-semibold".into());
            } else if style.font_weight >= 500.0 {
                classes.push("font-medium".into());
            }
        }
    }

    if classifier.is_interactive(node) {
        for token in [
            "cursor-pointer",
            "transition-all",
            "duration-300",
            "hover:scale-105",
            "hover:shadow-lg",
            "focus:outline-none",
            "focus:ring-2",
            "focus:ring-blue-500",
        ] {
            classes.push(token.into());
        }
    }

    classes
}

/// Explicit CSS declarations: size, background, radius. A small,
/// non-lossy subset of the utility-class signals.
pub fn css_declarations(node: &Node) -> Vec<(String, String)> {
    let mut decls = Vec::new();

    if let Some(bb) = &node.absolute_bounding_box {
        decls.push(("width".into(), format!("{}px", format_px(bb.width))));
        decls.push(("height".into(), format!("{}px", format_px(bb.height))));
    }

    if let Some(color) = &node.background_color {
        decls.push(("background-color".into(), css_color(color)));
    }

    if let Some(radius) = nonzero(node.corner_radius) {
        decls.push(("border-radius".into(), format!("{}px", format_px(radius))));
    }

    decls
}

/// Bucket a background color into a fixed utility palette.
/// Near-white and near-black first, then primary hues, gray fallback.
fn color_token(color: &Color) -> &'static str {
    let (r, g, b) = (color.r, color.g, color.b);

    if r > 0.9 && g > 0.9 && b > 0.9 {
        "bg-white"
    } else if r < 0.1 && g < 0.1 && b < 0.1 {
        "bg-black"
    } else if r > 0.8 && g < 0.3 && b < 0.3 {
        "bg-red-500"
    } else if r < 0.3 && g > 0.8 && b < 0.3 {
        "bg-green-500"
    } else if r < 0.3 && g < 0.3 && b > 0.8 {
        "bg-blue-500"
    } else if r > 0.5 && g > 0.5 && b < 0.3 {
        "bg-yellow-500"
    } else if r > 0.5 && g < 0.3 && b > 0.5 {
        "bg-purple-500"
    } else {
        "bg-gray-500"
    }
}

/// `rgba()` string with channels scaled to 0–255; alpha passes through.
pub fn css_color(color: &Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color.r * 255.0).round() as i64,
        (color.g * 255.0).round() as i64,
        (color.b * 255.0).round() as i64,
        format_px(color.alpha()),
    )
}

/// Spacing values divide by four and round to the nearest step.
fn quarter(value: f64) -> i64 {
    (value / 4.0).round() as i64
}

/// Absent and zero-valued dimensions both mean "no token".
fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Format a pixel count, dropping `.0` for whole numbers.
pub fn format_px(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figgen_schema::{BoundingBox, NameClassifier, TextStyle};
    use pretty_assertions::assert_eq;

    fn classes(node: &Node) -> String {
        utility_classes(node, &NameClassifier).join(" ")
    }

    fn frame(name: &str) -> Node {
        Node::new("1:1", name, NodeKind::Frame)
    }

    // =========================================================================
    // Utility-class mode
    // =========================================================================

    #[test]
    fn test_bare_node_is_relative_only() {
        assert_eq!(classes(&frame("Box")), "relative");
    }

    #[test]
    fn test_layout_tokens() {
        let mut n = frame("Row");
        n.layout_mode = Some(LayoutMode::Horizontal);
        assert_eq!(classes(&n), "relative flex flex-row");

        n.layout_mode = Some(LayoutMode::Vertical);
        assert_eq!(classes(&n), "relative flex flex-col");

        n.layout_mode = Some(LayoutMode::None);
        assert_eq!(classes(&n), "relative");
    }

    #[test]
    fn test_spacing_and_padding_quartered() {
        let mut n = frame("Stack");
        n.item_spacing = Some(16.0);
        n.padding_left = Some(10.0);
        n.padding_top = Some(0.0);
        // 16/4 = 4; 10/4 = 2.5 rounds to 3; zero padding emits nothing
        assert_eq!(classes(&n), "relative gap-4 pl-3");
    }

    #[test]
    fn test_width_bands() {
        let mut n = frame("Box");
        n.absolute_bounding_box = Some(BoundingBox { x: 0.0, y: 0.0, width: 80.0, height: 40.0 });
        assert_eq!(classes(&n), "relative w-auto h-auto");

        n.absolute_bounding_box = Some(BoundingBox { x: 0.0, y: 0.0, width: 200.0, height: 40.0 });
        assert_eq!(classes(&n), "relative w-full max-w-sm h-auto");

        n.absolute_bounding_box = Some(BoundingBox { x: 0.0, y: 0.0, width: 640.0, height: 120.0 });
        assert_eq!(classes(&n), "relative w-full min-h-[120px]");
    }

    #[test]
    fn test_radius_bands() {
        let mut n = frame("Box");
        n.corner_radius = Some(4.0);
        assert_eq!(classes(&n), "relative rounded");
        n.corner_radius = Some(8.0);
        assert_eq!(classes(&n), "relative rounded-lg");
        n.corner_radius = Some(12.0);
        assert_eq!(classes(&n), "relative rounded-xl");
        n.corner_radius = Some(0.0);
        assert_eq!(classes(&n), "relative");
    }

    #[test]
    fn test_text_size_and_weight_tokens() {
        let mut n = Node::new("1:1", "Product Title", NodeKind::Text);
        n.style = Some(TextStyle {
            font_family: "Inter".into(),
            font_size: 18.0,
            font_weight: 600.0,
            line_height_px: None,
            letter_spacing: None,
        });
        assert_eq!(classes(&n), "relative text-lg font-semibold");

        n.style.as_mut().unwrap().font_weight = 500.0;
        assert_eq!(classes(&n), "relative text-lg font-medium");

        n.style.as_mut().unwrap().font_weight = 400.0;
        n.style.as_mut().unwrap().font_size = 28.0;
        assert_eq!(classes(&n), "relative text-2xl");
    }

    #[test]
    fn test_text_tokens_require_text_kind() {
        let mut n = frame("Label text");
        n.style = Some(TextStyle {
            font_family: "Inter".into(),
            font_size: 18.0,
            font_weight: 600.0,
            line_height_px: None,
            letter_spacing: None,
        });
        assert_eq!(classes(&n), "relative");
    }

    #[test]
    fn test_interactive_suffix_tokens() {
        let n = frame("Submit Button");
        assert_eq!(
            classes(&n),
            "relative cursor-pointer transition-all duration-300 hover:scale-105 \
             hover:shadow-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
        );
    }

    // =========================================================================
    // Color bucketing
    // =========================================================================

    #[test]
    fn test_color_buckets() {
        assert_eq!(color_token(&Color::rgb(1.0, 1.0, 1.0)), "bg-white");
        assert_eq!(color_token(&Color::rgb(0.05, 0.05, 0.05)), "bg-black");
        assert_eq!(color_token(&Color::rgb(0.9, 0.1, 0.1)), "bg-red-500");
        assert_eq!(color_token(&Color::rgb(0.1, 0.9, 0.1)), "bg-green-500");
        assert_eq!(color_token(&Color::rgb(0.1, 0.1, 0.9)), "bg-blue-500");
        assert_eq!(color_token(&Color::rgb(0.8, 0.8, 0.1)), "bg-yellow-500");
        assert_eq!(color_token(&Color::rgb(0.7, 0.1, 0.7)), "bg-purple-500");
        assert_eq!(color_token(&Color::rgb(0.5, 0.5, 0.5)), "bg-gray-500");
    }

    // =========================================================================
    // Declaration mode
    // =========================================================================

    #[test]
    fn test_css_declarations() {
        let mut n = frame("Card");
        n.absolute_bounding_box = Some(BoundingBox { x: 0.0, y: 0.0, width: 320.0, height: 200.0 });
        n.background_color = Some(Color::rgb(1.0, 1.0, 1.0));
        n.corner_radius = Some(8.0);

        assert_eq!(
            css_declarations(&n),
            vec![
                ("width".to_string(), "320px".to_string()),
                ("height".to_string(), "200px".to_string()),
                ("background-color".to_string(), "rgba(255, 255, 255, 1)".to_string()),
                ("border-radius".to_string(), "8px".to_string()),
            ]
        );
    }

    #[test]
    fn test_css_declarations_degrade_on_missing_fields() {
        assert!(css_declarations(&frame("Empty")).is_empty());
    }

    #[test]
    fn test_css_color_alpha() {
        let mut c = Color::rgb(0.0, 0.0, 0.0);
        c.a = Some(0.5);
        assert_eq!(css_color(&c), "rgba(0, 0, 0, 0.5)");
        assert_eq!(css_color(&Color::rgb(1.0, 0.0, 0.0)), "rgba(255, 0, 0, 1)");
    }

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(120.0), "120");
        assert_eq!(format_px(200.5), "200.5");
    }
}
