//! Node classification.
//!
//! Decides, per node: interactivity, heading-ness, image content, the
//! semantic component category, and a complexity tier. Classification is
//! a strategy behind the [`Classify`] trait so the name-keyword heuristic
//! can later be swapped for a structural classifier without touching the
//! synthesis code. [`NameClassifier`] is the default: it keys entirely on
//! the human-authored layer name, which is exactly as fragile as it
//! sounds but matches how designers actually label interactive layers.

use crate::node::{FillKind, Node, NodeKind};
use serde::{Deserialize, Serialize};

/// Semantic category of a generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Button,
    Card,
    Text,
    Input,
    Layout,
    Complex,
}

/// Structural complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

/// Classification strategy over a single node. All methods are pure and
/// total; they never traverse beyond the node's immediate children.
pub trait Classify {
    /// True when the node should receive click/keyboard behavior.
    fn is_interactive(&self, node: &Node) -> bool;

    /// True when a text node should render as a heading element.
    fn is_heading(&self, node: &Node) -> bool;

    /// True when the node carries image content.
    fn has_image_content(&self, node: &Node) -> bool;

    /// Semantic category; first matching rule wins.
    fn category(&self, node: &Node) -> ComponentCategory;

    /// Complexity tier from child count, effects, and fill count.
    fn complexity(&self, node: &Node) -> Complexity;
}

/// Default classifier keyed on layer-name keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameClassifier;

impl NameClassifier {
    fn name_contains(node: &Node, keywords: &[&str]) -> bool {
        let name = node.name.to_lowercase();
        keywords.iter().any(|k| name.contains(k))
    }

    /// `h1`..`h6` anywhere in the name.
    fn has_heading_level(name: &str) -> bool {
        let bytes = name.as_bytes();
        bytes.windows(2).any(|w| w[0] == b'h' && (b'1'..=b'6').contains(&w[1]))
    }
}

impl Classify for NameClassifier {
    fn is_interactive(&self, node: &Node) -> bool {
        Self::name_contains(node, &["button", "link", "click", "action"])
    }

    fn is_heading(&self, node: &Node) -> bool {
        node.kind == NodeKind::Text
            && (Self::name_contains(node, &["title", "heading", "header"])
                || Self::has_heading_level(&node.name.to_lowercase()))
    }

    fn has_image_content(&self, node: &Node) -> bool {
        let image_fill = node
            .fills
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .any(|f| f.kind == FillKind::Image);
        image_fill || Self::name_contains(node, &["image", "photo", "avatar"])
    }

    fn category(&self, node: &Node) -> ComponentCategory {
        // Priority order matters for output parity.
        if Self::name_contains(node, &["button"]) {
            ComponentCategory::Button
        } else if Self::name_contains(node, &["card"]) {
            ComponentCategory::Card
        } else if Self::name_contains(node, &["text"]) || node.kind == NodeKind::Text {
            ComponentCategory::Text
        } else if Self::name_contains(node, &["input", "field"]) {
            ComponentCategory::Input
        } else if node.child_nodes().len() > 3 {
            ComponentCategory::Layout
        } else {
            ComponentCategory::Complex
        }
    }

    fn complexity(&self, node: &Node) -> Complexity {
        // Counts all children, visible or not; visibility only filters
        // markup emission (see figgen-codegen).
        let mut score = node.child_nodes().len();
        if node.effects.as_deref().is_some_and(|e| !e.is_empty()) {
            score += 2;
        }
        if node.fills.as_deref().is_some_and(|f| f.len() > 1) {
            score += 1;
        }

        if score <= 3 {
            Complexity::Simple
        } else if score <= 8 {
            Complexity::Medium
        } else {
            Complexity::Complex
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Effect, EffectKind, Fill};
    use pretty_assertions::assert_eq;

    fn node(name: &str, kind: NodeKind) -> Node {
        Node::new("1:1", name, kind)
    }

    fn image_fill() -> Fill {
        Fill {
            kind: FillKind::Image,
            color: None,
            opacity: None,
            image_ref: Some("ref".into()),
        }
    }

    fn solid_fill() -> Fill {
        Fill {
            kind: FillKind::Solid,
            color: None,
            opacity: None,
            image_ref: None,
        }
    }

    // =========================================================================
    // Interactivity and heading detection
    // =========================================================================

    #[test]
    fn test_interactive_keywords() {
        let c = NameClassifier;
        assert!(c.is_interactive(&node("Primary Button", NodeKind::Frame)));
        assert!(c.is_interactive(&node("nav-LINK", NodeKind::Frame)));
        assert!(c.is_interactive(&node("Click Area", NodeKind::Rectangle)));
        assert!(c.is_interactive(&node("CallToAction", NodeKind::Frame)));
        assert!(!c.is_interactive(&node("Hero", NodeKind::Frame)));
    }

    #[test]
    fn test_heading_requires_text_kind() {
        let c = NameClassifier;
        assert!(c.is_heading(&node("Page Title", NodeKind::Text)));
        assert!(c.is_heading(&node("h2 subtitle", NodeKind::Text)));
        assert!(!c.is_heading(&node("Page Title", NodeKind::Frame)));
        assert!(!c.is_heading(&node("Body copy", NodeKind::Text)));
    }

    #[test]
    fn test_heading_level_pattern() {
        let c = NameClassifier;
        assert!(c.is_heading(&node("H1", NodeKind::Text)));
        assert!(c.is_heading(&node("hero-h3", NodeKind::Text)));
        assert!(!c.is_heading(&node("h7", NodeKind::Text)));
        assert!(!c.is_heading(&node("hx", NodeKind::Text)));
    }

    #[test]
    fn test_image_content() {
        let c = NameClassifier;
        assert!(c.has_image_content(&node("User Avatar", NodeKind::Rectangle)));
        assert!(c.has_image_content(&node("photo strip", NodeKind::Frame)));

        let mut filled = node("Box", NodeKind::Rectangle);
        filled.fills = Some(vec![image_fill()]);
        assert!(c.has_image_content(&filled));

        let mut plain = node("Box", NodeKind::Rectangle);
        plain.fills = Some(vec![solid_fill()]);
        assert!(!c.has_image_content(&plain));
    }

    // =========================================================================
    // Category priority order
    // =========================================================================

    #[test]
    fn test_category_priority() {
        let c = NameClassifier;
        // "button" wins even when "card" also matches
        assert_eq!(
            c.category(&node("Card Button", NodeKind::Frame)),
            ComponentCategory::Button
        );
        assert_eq!(c.category(&node("Product Card", NodeKind::Frame)), ComponentCategory::Card);
        assert_eq!(c.category(&node("Body", NodeKind::Text)), ComponentCategory::Text);
        assert_eq!(c.category(&node("Email Field", NodeKind::Frame)), ComponentCategory::Input);
    }

    #[test]
    fn test_category_layout_needs_four_children() {
        let c = NameClassifier;
        let mut n = node("Section", NodeKind::Frame);
        n.children = Some((0..4).map(|i| Node::new(format!("2:{i}"), "x", NodeKind::Frame)).collect());
        assert_eq!(c.category(&n), ComponentCategory::Layout);

        n.children = Some((0..3).map(|i| Node::new(format!("2:{i}"), "x", NodeKind::Frame)).collect());
        assert_eq!(c.category(&n), ComponentCategory::Complex);
    }

    // =========================================================================
    // Complexity
    // =========================================================================

    #[test]
    fn test_complexity_bands() {
        let c = NameClassifier;
        let mut n = node("Box", NodeKind::Frame);
        assert_eq!(c.complexity(&n), Complexity::Simple);

        n.children = Some((0..4).map(|i| Node::new(format!("2:{i}"), "x", NodeKind::Frame)).collect());
        assert_eq!(c.complexity(&n), Complexity::Medium);

        n.children = Some((0..9).map(|i| Node::new(format!("2:{i}"), "x", NodeKind::Frame)).collect());
        assert_eq!(c.complexity(&n), Complexity::Complex);
    }

    #[test]
    fn test_complexity_effects_and_fills() {
        let c = NameClassifier;
        let mut n = node("Box", NodeKind::Frame);
        n.children = Some((0..2).map(|i| Node::new(format!("2:{i}"), "x", NodeKind::Frame)).collect());
        n.effects = Some(vec![Effect {
            kind: EffectKind::DropShadow,
            visible: None,
            color: None,
            radius: Some(4.0),
        }]);
        // 2 children + 2 for effects = 4 → medium
        assert_eq!(c.complexity(&n), Complexity::Medium);

        n.fills = Some(vec![solid_fill(), solid_fill()]);
        // +1 for multiple fills = 5 → still medium
        assert_eq!(c.complexity(&n), Complexity::Medium);
    }

    #[test]
    fn test_complexity_monotonic_in_child_count() {
        let c = NameClassifier;
        let mut last = Complexity::Simple;
        for count in 0..12 {
            let mut n = node("Box", NodeKind::Frame);
            n.children =
                Some((0..count).map(|i| Node::new(format!("2:{i}"), "x", NodeKind::Frame)).collect());
            let tier = c.complexity(&n);
            assert!(tier >= last, "tier regressed at child count {count}");
            last = tier;
        }
    }

    #[test]
    fn test_invisible_children_still_counted() {
        let c = NameClassifier;
        let mut n = node("Box", NodeKind::Frame);
        let mut hidden = Node::new("2:0", "x", NodeKind::Frame);
        hidden.visible = Some(false);
        let mut children = vec![hidden];
        children.extend((1..4).map(|i| Node::new(format!("2:{i}"), "x", NodeKind::Frame)));
        n.children = Some(children);
        assert_eq!(c.complexity(&n), Complexity::Medium);
    }
}
