//! Figgen Quality Analyzers
//!
//! Heuristic scoring over a design node and its synthesized artifacts:
//! accessibility, responsiveness, performance, an aggregate quality
//! score, and ranked improvement suggestions. Every analyzer is a pure
//! function of its inputs; none of them fail.
//!
//! ```text
//! (Node, artifacts) → accessibility / responsive / performance
//! GeneratedComponent → quality_metrics / suggestions
//! ```

pub mod a11y;
pub mod performance;
pub mod quality;
pub mod responsive;

pub use a11y::analyze_accessibility;
pub use performance::analyze_performance;
pub use quality::{quality_metrics, suggestions};
pub use responsive::analyze_responsive;
