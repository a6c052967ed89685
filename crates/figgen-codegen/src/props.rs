//! Shared prop extraction.
//!
//! One prop list feeds all five artifacts so signatures, interfaces, and
//! stories never drift apart. Extraction order is fixed: text, image,
//! interactive.

use figgen_schema::{Classify, Node, NodeKind};

/// A derived component prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prop {
    pub name: &'static str,
    pub ty: &'static str,
    pub optional: bool,
}

/// Derive the prop list for a node.
pub fn extract_props(node: &Node, classifier: &dyn Classify) -> Vec<Prop> {
    let mut props = Vec::new();

    if node.kind == NodeKind::Text && node.characters.is_some() {
        props.push(Prop { name: "text", ty: "string", optional: true });
    }

    if classifier.has_image_content(node) {
        props.push(Prop { name: "src", ty: "string", optional: false });
        props.push(Prop { name: "alt", ty: "string", optional: false });
    }

    if classifier.is_interactive(node) {
        props.push(Prop {
            name: "onClick",
            ty: "(event: React.MouseEvent) => void",
            optional: true,
        });
        props.push(Prop { name: "disabled", ty: "boolean", optional: true });
    }

    props
}

/// Render the `interface <Name>Props { .. }` block shared by the
/// component body and the type-declaration artifact.
pub fn render_props_interface(props: &[Prop], component_name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("interface {component_name}Props {{\n"));
    for prop in props {
        out.push_str(&format!("  /** {} property */\n", prop.name));
        let marker = if prop.optional { "?" } else { "" };
        out.push_str(&format!("  {}{marker}: {};\n", prop.name, prop.ty));
    }
    out.push_str("  /** Custom styling */\n  className?: string;\n");
    out.push_str("  /** Component children */\n  children?: React.ReactNode;\n");
    out.push_str("}");
    out
}

/// Destructured prop names for the component signature.
pub fn prop_names(props: &[Prop]) -> String {
    props.iter().map(|p| p.name).collect::<Vec<_>>().join(", ")
}
