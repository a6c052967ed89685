//! Figgen Schema
//!
//! The design-document data model shared by every figgen crate.
//! Contains the node tree as delivered by the design-tool API (camelCase
//! JSON, SCREAMING_SNAKE enum tags), the generation options and custom
//! code inputs, the generated-component output records, and the node
//! classifier.
//!
//! # Example
//!
//! ```
//! use figgen_schema::{Node, NodeKind};
//!
//! let node = Node::new("1:2", "Submit Button", NodeKind::Frame);
//! assert!(node.is_visible());
//! assert!(node.child_nodes().is_empty());
//! ```

pub mod classify;
pub mod node;
pub mod options;
pub mod output;

pub use classify::{Classify, ComponentCategory, Complexity, NameClassifier};
pub use node::{
    BoundingBox, Color, ComponentRef, Constraints, Effect, EffectKind, FileDocument, Fill,
    FillKind, LayoutMode, Node, NodeKind, Stroke, TextStyle,
};
pub use options::{BuildTool, CustomCode, Framework, GenerationOptions, Styling};
pub use output::{
    AccessibilityIssue, AccessibilityReport, ComponentMetadata, GeneratedComponent,
    IssueKind, IssueSeverity, PerformanceMetrics, QualityMetrics, RenderTier,
    ResponsiveBreakpoints, Suggestion, SuggestionKind, SuggestionPriority, UsageTier,
    WcagLevel,
};
