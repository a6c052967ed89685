//! Component body generator.
//!
//! Walks the node tree and emits the React/Next component source: imports,
//! optional typed props interface, state hooks, event handlers, the custom
//! script block, and the recursively emitted element tree. Other target
//! frameworks receive only the element tree.
//!
//! Traversal tracks visited node ids and fails with a structural error if
//! one repeats; the wire format guarantees nothing about id uniqueness.

use crate::props::{extract_props, prop_names, render_props_interface};
use crate::style::utility_classes;
use crate::GeneratorError;
use figgen_schema::{Classify, CustomCode, Framework, GenerationOptions, Node, NodeKind, Styling};
use std::collections::HashSet;

/// Generate the component body artifact for one root node.
pub fn generate(
    node: &Node,
    component_name: &str,
    options: &GenerationOptions,
    custom: &CustomCode,
    classifier: &dyn Classify,
) -> Result<String, GeneratorError> {
    let mut visited = HashSet::new();
    let body = emit_element(node, 2, options.styling, classifier, &mut visited)?;

    // Only the React family gets a full component shell.
    if !matches!(options.framework, Framework::React | Framework::Nextjs) {
        return Ok(body);
    }

    let props = extract_props(node, classifier);
    let imports = imports(options, custom);
    let props_interface = if options.typescript {
        format!("\n{}\n", render_props_interface(&props, component_name))
    } else {
        String::new()
    };

    let signature = if options.typescript {
        format!(
            "export const {component_name}: React.FC<{component_name}Props> = ({{ {} }})",
            prop_names(&props)
        )
    } else {
        format!("export const {component_name} = ({{ {} }})", prop_names(&props))
    };

    let hooks = hooks(node, classifier);
    let handlers = handlers(node, classifier);
    let custom_logic = if custom.script.is_empty() {
        String::new()
    } else {
        format!(
            "\n  // === CUSTOM JAVASCRIPT CODE ===\n  {}\n  // === END CUSTOM CODE ===\n",
            custom.script
        )
    };

    Ok(format!(
        "{imports}\n{props_interface}\n{signature} => {{{hooks}{handlers}{custom_logic}\n  \
         return (\n{body}\n  );\n}};\n\nexport default {component_name};\n"
    ))
}

/// ARIA role derived from classification; parameterizes the generated
/// markup, tests, and stories identically.
pub fn aria_role(node: &Node, classifier: &dyn Classify) -> &'static str {
    if classifier.is_interactive(node) {
        "button"
    } else if classifier.is_heading(node) {
        "heading"
    } else {
        "generic"
    }
}

fn imports(options: &GenerationOptions, custom: &CustomCode) -> String {
    let mut imports =
        vec!["import React, { useState, useCallback, useMemo } from 'react';".to_string()];

    if options.framework == Framework::Nextjs {
        imports.push("import Image from 'next/image';".into());
    }
    if options.styling == Styling::StyledComponents {
        imports.push("import styled from 'styled-components';".into());
    }
    if !custom.animations.is_empty() {
        imports.push("import { motion, AnimatePresence } from 'framer-motion';".into());
    }
    imports.push("import clsx from 'clsx';".into());

    imports.join("\n")
}

fn hooks(node: &Node, classifier: &dyn Classify) -> String {
    let mut lines: Vec<&str> = Vec::new();

    if classifier.is_interactive(node) {
        lines.push("  const [isHovered, setIsHovered] = useState(false);");
        lines.push("  const [isPressed, setIsPressed] = useState(false);");
    }
    if classifier.has_image_content(node) {
        lines.push("  const [imageLoaded, setImageLoaded] = useState(false);");
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("\n{}\n", lines.join("\n"))
    }
}

fn handlers(node: &Node, classifier: &dyn Classify) -> String {
    if !classifier.is_interactive(node) {
        return String::new();
    }

    let label = node.name.replace('\\', "\\\\").replace('\'', "\\'");
    let click = format!(
        "  const handleClick = useCallback((event: React.MouseEvent) => {{\n    \
         console.log('{label} clicked');\n  }}, []);"
    );
    let keydown = "  const handleKeyDown = useCallback((event: React.KeyboardEvent) => {\n    \
                   if (event.key === 'Enter' || event.key === ' ') {\n      \
                   handleClick(event as any);\n    }\n  }, [handleClick]);";

    format!("\n{click}\n\n{keydown}\n")
}

/// Emit one element and its visible children, two spaces per depth level.
fn emit_element(
    node: &Node,
    depth: usize,
    styling: Styling,
    classifier: &dyn Classify,
    visited: &mut HashSet<String>,
) -> Result<String, GeneratorError> {
    if !visited.insert(node.id.clone()) {
        return Err(GeneratorError::Cycle {
            id: node.id.clone(),
            name: node.name.clone(),
        });
    }

    let indent = "  ".repeat(depth);
    let tag = html_tag(node, classifier);
    let class_attr = class_attribute(node, styling, classifier);
    let attributes = interactive_attributes(node, classifier);

    if node.kind == NodeKind::Text {
        if let Some(text) = &node.characters {
            return Ok(format!(
                "{indent}<{tag}{class_attr}{attributes}>\n{indent}  {{{}}}\n{indent}</{tag}>",
                json_string(text)
            ));
        }
    }

    let children: Vec<String> = node
        .child_nodes()
        .iter()
        .filter(|child| child.is_visible())
        .map(|child| emit_element(child, depth + 1, styling, classifier, visited))
        .collect::<Result<_, _>>()?;

    if children.is_empty() {
        Ok(format!("{indent}<{tag}{class_attr}{attributes} />"))
    } else {
        Ok(format!(
            "{indent}<{tag}{class_attr}{attributes}>\n{}\n{indent}</{tag}>",
            children.join("\n")
        ))
    }
}

fn html_tag(node: &Node, classifier: &dyn Classify) -> &'static str {
    match node.kind {
        NodeKind::Text => {
            if classifier.is_heading(node) {
                "h2"
            } else {
                "span"
            }
        }
        NodeKind::Rectangle => {
            if classifier.has_image_content(node) {
                "img"
            } else {
                "div"
            }
        }
        _ => "div",
    }
}

fn class_attribute(node: &Node, styling: Styling, classifier: &dyn Classify) -> String {
    let classes = match styling {
        Styling::Tailwind => utility_classes(node, classifier).join(" "),
        _ => node
            .name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-"),
    };

    if classes.is_empty() {
        String::new()
    } else {
        format!(" className=\"{classes}\"")
    }
}

fn interactive_attributes(node: &Node, classifier: &dyn Classify) -> String {
    if !classifier.is_interactive(node) {
        return String::new();
    }

    format!(
        " onClick={{handleClick}} onKeyDown={{handleKeyDown}} tabIndex={{0}} role=\"{}\" \
         aria-label=\"{}\"",
        aria_role(node, classifier),
        node.name.replace('"', "&quot;")
    )
}

/// JSON string encoding for text expressions inside markup.
fn json_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
