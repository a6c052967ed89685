//! Stylesheet generator.
//!
//! Utility-class mode wraps the derived token string in a
//! component-scoped `@layer` rule plus two fixed responsive overrides.
//! Every other styling option emits an explicit rule block from the
//! declaration list. Custom style and animation blocks are appended
//! verbatim inside marker comments.

use crate::style::{css_declarations, utility_classes};
use figgen_schema::{Classify, CustomCode, GenerationOptions, Node, Styling};

/// Generate the stylesheet artifact for one root node.
pub fn generate(
    node: &Node,
    component_name: &str,
    options: &GenerationOptions,
    custom: &CustomCode,
    classifier: &dyn Classify,
) -> String {
    let base = match options.styling {
        Styling::Tailwind => tailwind_rules(node, component_name, classifier),
        _ => plain_rules(node, component_name),
    };

    let mut out = base;
    if !custom.styles.is_empty() {
        out.push_str(&format!(
            "\n\n/* === CUSTOM CSS STYLES === */\n{}\n/* === END CUSTOM STYLES === */",
            custom.styles
        ));
    }
    if !custom.animations.is_empty() {
        out.push_str(&format!(
            "\n\n/* === CUSTOM ANIMATIONS === */\n{}\n/* === END ANIMATIONS === */",
            custom.animations
        ));
    }
    out
}

fn tailwind_rules(node: &Node, component_name: &str, classifier: &dyn Classify) -> String {
    let classes = utility_classes(node, classifier).join(" ");
    let scope = component_name.to_lowercase();

    format!(
        "/* Generated Tailwind CSS for {component_name} */\n\
         @layer components {{\n  .{scope} {{\n    @apply {classes};\n  }}\n}}\n\n\
         /* Responsive breakpoints */\n\
         @media (max-width: 768px) {{\n  .{scope} {{\n    @apply text-sm p-2;\n  }}\n}}\n\n\
         @media (min-width: 1024px) {{\n  .{scope} {{\n    @apply text-lg p-6;\n  }}\n}}"
    )
}

fn plain_rules(node: &Node, component_name: &str) -> String {
    let scope = component_name.to_lowercase();
    let body = css_declarations(node)
        .iter()
        .map(|(property, value)| format!("  {property}: {value};"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(".{scope} {{\n{body}\n}}")
}
