//! Figgen Code Generator
//!
//! Turns one design-document tree into per-component artifact bundles:
//! a component body, a stylesheet, optional type declarations, an
//! optional test suite, and a story file, plus the analysis records from
//! `figgen-analyze`.
//!
//! ```text
//! FileDocument → Generator::generate() → GenerationReport { components, failures }
//! ```
//!
//! The generator is the only stage that selects nodes; everything below
//! it is a pure transformation. Artifacts are deterministic for a given
//! (node, options, custom code) — wall-clock time appears only in
//! component metadata.

pub mod component;
pub mod props;
pub mod stories;
pub mod style;
pub mod stylesheet;
pub mod testgen;
pub mod typescript;

use figgen_analyze::{analyze_accessibility, analyze_performance, analyze_responsive};
use figgen_schema::{
    Classify, ComponentCategory, ComponentMetadata, Complexity, CustomCode, FileDocument,
    Framework, GeneratedComponent, GenerationOptions, NameClassifier, Node, NodeKind,
    PerformanceMetrics, Styling,
};

/// Generation error for a single node.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// The same node id was reached twice while walking one tree; the
    /// source graph is cyclic or carries duplicate ids.
    #[error("structural error: node {id} ({name}) visited twice during traversal")]
    Cycle { id: String, name: String },
}

/// A per-node failure, isolated so sibling nodes still generate.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeFailure {
    pub node_id: String,
    pub node_name: String,
    pub error: GeneratorError,
}

/// The outcome of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Successfully generated components, in selection order.
    pub components: Vec<GeneratedComponent>,
    /// Nodes that failed, with enough context to locate the input.
    pub failures: Vec<NodeFailure>,
}

/// Incremental progress, reported before each node is processed.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    pub index: usize,
    pub total: usize,
    pub node_name: &'a str,
}

/// Drives one synthesis + analysis pass per selected top-level node.
///
/// Holds the source document, options, and custom code immutably; the
/// classifier is a swappable strategy defaulting to the name-keyword
/// heuristic.
pub struct Generator<'a> {
    file: &'a FileDocument,
    options: GenerationOptions,
    custom: CustomCode,
    classifier: Box<dyn Classify>,
}

impl<'a> Generator<'a> {
    pub fn new(file: &'a FileDocument, options: GenerationOptions) -> Self {
        Self {
            file,
            options,
            custom: CustomCode::default(),
            classifier: Box::new(NameClassifier),
        }
    }

    pub fn with_custom_code(mut self, custom: CustomCode) -> Self {
        self.custom = custom;
        self
    }

    pub fn with_classifier(mut self, classifier: Box<dyn Classify>) -> Self {
        self.classifier = classifier;
        self
    }

    /// The top-level nodes one generation pass will process: declared
    /// components resolved by id, else every frame whose name does not
    /// start with the private-naming marker `_`.
    pub fn component_nodes(&self) -> Vec<&'a Node> {
        let mut nodes = Vec::new();

        if let Some(components) = &self.file.components {
            for comp in components.values() {
                if let Some(node) = self.file.document.find_by_id(&comp.key) {
                    nodes.push(node);
                }
            }
        }

        if nodes.is_empty() {
            collect_frames(&self.file.document, &mut nodes);
        }

        nodes
    }

    /// Generate all components. One failing node never blocks siblings.
    pub fn generate(&self) -> GenerationReport {
        self.generate_with_progress(|_| {})
    }

    /// Like [`Self::generate`], reporting progress before each node.
    pub fn generate_with_progress(
        &self,
        mut progress: impl FnMut(Progress<'_>),
    ) -> GenerationReport {
        let nodes = self.component_nodes();
        let total = nodes.len();

        let mut components = Vec::new();
        let mut failures = Vec::new();

        for (index, node) in nodes.into_iter().enumerate() {
            progress(Progress { index, total, node_name: &node.name });
            match self.generate_component(node) {
                Ok(component) => components.push(component),
                Err(error) => failures.push(NodeFailure {
                    node_id: node.id.clone(),
                    node_name: node.name.clone(),
                    error,
                }),
            }
        }

        GenerationReport { components, failures }
    }

    /// One full synthesis + analysis pass for a single root node.
    pub fn generate_component(
        &self,
        node: &Node,
    ) -> Result<GeneratedComponent, GeneratorError> {
        #[cfg(not(target_arch = "wasm32"))]
        let start = std::time::Instant::now();

        let classifier = self.classifier.as_ref();
        let name = sanitize_component_name(&node.name);

        let markup = component::generate(node, &name, &self.options, &self.custom, classifier)?;
        let css = stylesheet::generate(node, &name, &self.options, &self.custom, classifier);
        let ts = self
            .options
            .typescript
            .then(|| typescript::generate(node, &name, classifier));
        let tests = self
            .options
            .unit_tests
            .then(|| testgen::generate(node, &name, classifier));
        let stories = stories::generate(node, &name, classifier);

        let accessibility = analyze_accessibility(node, &self.custom, classifier);
        let responsive = analyze_responsive(node);
        let performance = analyze_performance(&markup, &css);

        // Wall-clock timing is unavailable on wasm targets.
        #[cfg(not(target_arch = "wasm32"))]
        let generation_time_ms = start.elapsed().as_millis() as u64;
        #[cfg(target_arch = "wasm32")]
        let generation_time_ms = 0;

        let metadata = self.metadata(node, generation_time_ms, performance);

        Ok(GeneratedComponent {
            id: node.id.clone(),
            name,
            markup,
            stylesheet: css,
            typescript: ts,
            tests,
            stories: Some(stories),
            accessibility,
            responsive,
            metadata,
        })
    }

    fn metadata(
        &self,
        node: &Node,
        generation_time_ms: u64,
        performance: PerformanceMetrics,
    ) -> ComponentMetadata {
        let classifier = self.classifier.as_ref();
        ComponentMetadata {
            node_id: node.id.clone(),
            category: classifier.category(node),
            complexity: classifier.complexity(node),
            estimated_accuracy: self.estimate_accuracy(node),
            generation_time_ms,
            dependencies: self.dependencies(node),
            performance,
        }
    }

    /// 85 base, +10 simple, −5 when more than five children, +5 for the
    /// well-understood categories, clamped to `70..=100`.
    fn estimate_accuracy(&self, node: &Node) -> u32 {
        let classifier = self.classifier.as_ref();
        let mut accuracy: i64 = 85;

        if classifier.complexity(node) == Complexity::Simple {
            accuracy += 10;
        }
        if node.child_nodes().len() > 5 {
            accuracy -= 5;
        }
        if matches!(
            classifier.category(node),
            ComponentCategory::Button | ComponentCategory::Text | ComponentCategory::Card
        ) {
            accuracy += 5;
        }

        accuracy.clamp(70, 100) as u32
    }

    fn dependencies(&self, node: &Node) -> Vec<String> {
        let mut deps = vec!["react".to_string()];

        if self.options.typescript {
            deps.push("@types/react".into());
        }
        if self.classifier.has_image_content(node) && self.options.framework == Framework::Nextjs
        {
            deps.push("next/image".into());
        }
        if !self.custom.animations.is_empty() {
            deps.push("framer-motion".into());
        }
        if self.options.styling == Styling::StyledComponents {
            deps.push("styled-components".into());
        }

        deps
    }
}

/// Sanitize a layer name into a component identifier: strip everything
/// non-alphanumeric, prefix `Component` when the result starts with a
/// digit, upper-case the first character. Idempotent; an empty result
/// falls back to `Component`.
pub fn sanitize_component_name(name: &str) -> String {
    let stripped: String = name.chars().filter(char::is_ascii_alphanumeric).collect();

    if stripped.is_empty() {
        return "Component".into();
    }

    let prefixed = if stripped.as_bytes()[0].is_ascii_digit() {
        format!("Component{stripped}")
    } else {
        stripped
    };

    let mut chars = prefixed.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => prefixed,
    }
}

fn collect_frames<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    if node.kind == NodeKind::Frame && !node.name.is_empty() && !node.name.starts_with('_') {
        out.push(node);
    }
    for child in node.child_nodes() {
        collect_frames(child, out);
    }
}
