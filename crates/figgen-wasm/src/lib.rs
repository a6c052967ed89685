//! WASM bindings for the figgen generator.
//!
//! Exposes `generate()` to JavaScript via wasm-bindgen. Inputs and the
//! result cross the boundary as plain JS objects through
//! serde-wasm-bindgen; errors surface as thrown JS errors.

use figgen_analyze::{quality_metrics, suggestions};
use figgen_codegen::Generator;
use figgen_schema::{
    CustomCode, FileDocument, GeneratedComponent, GenerationOptions, QualityMetrics, Suggestion,
};
use wasm_bindgen::prelude::*;

/// One generated component plus its derived quality records.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentResult {
    #[serde(flatten)]
    component: GeneratedComponent,
    quality: QualityMetrics,
    suggestions: Vec<Suggestion>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FailureResult {
    node_id: String,
    node_name: String,
    error: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResult {
    components: Vec<ComponentResult>,
    failures: Vec<FailureResult>,
}

/// Generate components from a design-document file response.
///
/// `file`, `options`, and `custom` are plain JS objects in the wire
/// shapes of `FileDocument`, `GenerationOptions`, and `CustomCode`.
/// Returns `{ components, failures }`; throws a JS error when the inputs
/// do not deserialize.
#[wasm_bindgen]
pub fn generate(file: JsValue, options: JsValue, custom: JsValue) -> Result<JsValue, JsError> {
    let file: FileDocument =
        serde_wasm_bindgen::from_value(file).map_err(|e| JsError::new(&e.to_string()))?;
    let options: GenerationOptions =
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?;
    let custom: CustomCode =
        serde_wasm_bindgen::from_value(custom).map_err(|e| JsError::new(&e.to_string()))?;

    let report = Generator::new(&file, options).with_custom_code(custom).generate();

    let result = GenerateResult {
        components: report
            .components
            .into_iter()
            .map(|component| {
                let quality = quality_metrics(&component);
                let suggestions = suggestions(&component);
                ComponentResult { component, quality, suggestions }
            })
            .collect(),
        failures: report
            .failures
            .into_iter()
            .map(|f| FailureResult {
                node_id: f.node_id,
                node_name: f.node_name,
                error: f.error.to_string(),
            })
            .collect(),
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figgen_schema::{Node, NodeKind};
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM) — verify the generate pipeline works
    // =========================================================================

    fn fixture() -> FileDocument {
        let mut root = Node::new("0:0", "Document", NodeKind::Document);
        let mut page = Node::new("0:1", "Page 1", NodeKind::Canvas);
        let mut hero = Node::new("1:0", "Hero", NodeKind::Frame);
        let mut title = Node::new("1:1", "Page Title", NodeKind::Text);
        title.characters = Some("Welcome".into());
        hero.children = Some(vec![title]);
        page.children = Some(vec![hero, Node::new("2:0", "Buy Button", NodeKind::Frame)]);
        root.children = Some(vec![page]);

        FileDocument {
            document: root,
            components: None,
            name: "Fixture".into(),
            version: "1".into(),
            last_modified: "2024-11-02T10:00:00Z".into(),
        }
    }

    #[test]
    fn test_pipeline_generates_both_frames() {
        let file = fixture();
        let report = Generator::new(&file, GenerationOptions::default()).generate();
        assert!(report.failures.is_empty());
        let names: Vec<_> = report.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Hero", "BuyButton"]);
    }

    #[test]
    fn test_interactive_component_gets_full_treatment() {
        let file = fixture();
        let report = Generator::new(&file, GenerationOptions::default()).generate();
        let button = &report.components[1];
        assert!(button.markup.contains("role=\"button\""));
        assert!(button.stylesheet.contains("cursor-pointer"));
        assert!(button
            .stories
            .as_deref()
            .unwrap()
            .contains("export const Interactive: Story"));
    }

    #[test]
    fn test_quality_records_attach_per_component() {
        let file = fixture();
        let report = Generator::new(&file, GenerationOptions::default()).generate();
        for component in &report.components {
            let quality = quality_metrics(component);
            assert!(quality.overall <= 100);
            assert!(quality.accuracy >= 70);
        }
    }

    #[test]
    fn test_no_state_leaks_between_runs() {
        let file = fixture();
        let generator = Generator::new(&file, GenerationOptions::default());
        let first = generator.generate();
        let second = generator.generate();
        assert_eq!(first.components.len(), second.components.len());
        for (a, b) in first.components.iter().zip(&second.components) {
            assert_eq!(a.markup, b.markup);
            assert_eq!(a.stylesheet, b.stylesheet);
        }
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }
}
