//! Test-suite generator.
//!
//! Emits a fixed testing-library suite: render and custom-className
//! cases always, click and keyboard cases only for interactive nodes.
//! Queries are parameterized by the derived ARIA role so the suite stays
//! consistent with the markup artifact.

use crate::component::aria_role;
use figgen_schema::{Classify, Node};

/// Generate the test artifact for one root node.
pub fn generate(node: &Node, component_name: &str, classifier: &dyn Classify) -> String {
    let role = aria_role(node, classifier);

    let mut out = format!(
        "import {{ render, screen, fireEvent }} from '@testing-library/react';\n\
         import {{ {component_name} }} from './{component_name}';\n\n\
         describe('{component_name}', () => {{\n  \
         it('renders without crashing', () => {{\n    \
         render(<{component_name} />);\n    \
         expect(screen.getByRole('{role}')).toBeInTheDocument();\n  }});\n\n  \
         it('applies custom className', () => {{\n    \
         const customClass = 'custom-test-class';\n    \
         render(<{component_name} className={{customClass}} />);\n    \
         expect(screen.getByRole('{role}')).toHaveClass(customClass);\n  }});\n"
    );

    if classifier.is_interactive(node) {
        out.push_str(&format!(
            "\n  it('handles click events', () => {{\n    \
             const handleClick = jest.fn();\n    \
             render(<{component_name} onClick={{handleClick}} />);\n    \
             fireEvent.click(screen.getByRole('{role}'));\n    \
             expect(handleClick).toHaveBeenCalledTimes(1);\n  }});\n\n  \
             it('handles keyboard navigation', () => {{\n    \
             const handleClick = jest.fn();\n    \
             render(<{component_name} onClick={{handleClick}} />);\n    \
             const element = screen.getByRole('{role}');\n    \
             fireEvent.keyDown(element, {{ key: 'Enter' }});\n    \
             expect(handleClick).toHaveBeenCalledTimes(1);\n  }});\n"
        ));
    }

    out.push_str("});\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use figgen_schema::{NameClassifier, NodeKind};

    #[test]
    fn test_static_node_has_two_cases() {
        let node = Node::new("1:1", "Hero", NodeKind::Frame);
        let suite = generate(&node, "Hero", &NameClassifier);
        assert_eq!(suite.matches("it('").count(), 2);
        assert!(suite.contains("getByRole('generic')"));
        assert!(!suite.contains("handles click events"));
        assert!(!suite.contains("handles keyboard navigation"));
    }

    #[test]
    fn test_interactive_node_adds_click_and_keyboard_cases() {
        let node = Node::new("1:1", "Buy Button", NodeKind::Frame);
        let suite = generate(&node, "BuyButton", &NameClassifier);
        assert_eq!(suite.matches("it('").count(), 4);
        assert!(suite.contains("handles click events"));
        assert!(suite.contains("handles keyboard navigation"));
        assert!(suite.contains("getByRole('button')"));
        assert!(suite.contains("fireEvent.keyDown(element, { key: 'Enter' });"));
    }

    #[test]
    fn test_heading_role_parameterizes_queries() {
        let node = Node::new("1:1", "Page Title", NodeKind::Text);
        let suite = generate(&node, "PageTitle", &NameClassifier);
        assert!(suite.contains("getByRole('heading')"));
    }
}
