//! Story-catalog generator.
//!
//! Emits a fixed Storybook CSF file: meta block, Default and CustomStyle
//! variants, plus an Interactive variant for interactive nodes.

use figgen_schema::{Classify, Node};

/// Generate the stories artifact for one root node.
pub fn generate(node: &Node, component_name: &str, classifier: &dyn Classify) -> String {
    let mut out = format!(
        "import type {{ Meta, StoryObj }} from '@storybook/react';\n\
         import {{ {component_name} }} from './{component_name}';\n\n\
         const meta: Meta<typeof {component_name}> = {{\n  \
         title: 'Components/{component_name}',\n  \
         component: {component_name},\n  \
         parameters: {{\n    layout: 'centered',\n    docs: {{\n      description: {{\n        \
         component: 'Generated from design node: {}',\n      }},\n    }},\n  }},\n  \
         tags: ['autodocs'],\n  \
         argTypes: {{\n    className: {{\n      control: 'text',\n      \
         description: 'Custom CSS classes',\n    }},\n  }},\n}};\n\n\
         export default meta;\n\
         type Story = StoryObj<typeof meta>;\n\n\
         export const Default: Story = {{\n  args: {{}},\n}};\n\n\
         export const CustomStyle: Story = {{\n  args: {{\n    \
         className: 'border-2 border-blue-500',\n  }},\n}};\n",
        node.name.replace('\\', "\\\\").replace('\'', "\\'")
    );

    if classifier.is_interactive(node) {
        out.push_str(
            "\nexport const Interactive: Story = {\n  args: {},\n  \
             play: async ({ canvasElement }) => {\n    \
             // Add interaction tests here\n  },\n};\n",
        );
    }

    out
}
