//! Type-declaration generator.
//!
//! Restates the shared prop list as a typed contract plus the fixed
//! interaction-state shape and event-handler signatures.

use crate::props::{extract_props, render_props_interface};
use figgen_schema::{Classify, Node};

/// Generate the `.d.ts` artifact for one root node.
pub fn generate(node: &Node, component_name: &str, classifier: &dyn Classify) -> String {
    let props = extract_props(node, classifier);
    let props_interface = render_props_interface(&props, component_name);

    format!(
        "// Type definitions for {component_name}\n\
         export {props_interface}\n\n\
         // Component state types\n\
         export interface {component_name}State {{\n  \
         isHovered: boolean;\n  isPressed: boolean;\n  imageLoaded: boolean;\n}}\n\n\
         // Event handler types\n\
         export type {component_name}ClickHandler = (event: React.MouseEvent<HTMLElement>) => void;\n\
         export type {component_name}KeyHandler = (event: React.KeyboardEvent<HTMLElement>) => void;\n"
    )
}
