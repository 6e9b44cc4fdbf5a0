//! # axial_core - Axial Column Capacity Engine
//!
//! `axial_core` evaluates whether structural columns can safely carry their
//! applied axial loads, checking two failure modes: direct material crushing
//! and Euler (slenderness) buckling. All inputs and outputs are
//! JSON-serializable, so the engine drops straight behind any form or table
//! shell.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Isolated Failures**: One bad column never aborts a batch
//!
//! ## Quick Start
//!
//! ```rust
//! use axial_core::calculations::evaluate_batch;
//! use axial_core::materials::{MaterialRegistry, DEFAULT_K_FACTOR, DEFAULT_SAFETY_FACTOR};
//! use axial_core::scenario;
//!
//! let (outcomes, summary) = evaluate_batch(
//!     &scenario::demo_columns(),
//!     MaterialRegistry::builtin(),
//!     DEFAULT_SAFETY_FACTOR,
//!     DEFAULT_K_FACTOR,
//! );
//!
//! for outcome in &outcomes {
//!     println!("{}: {}", outcome.id(), outcome.verdict_label());
//! }
//! println!("spare capacity: {:.1} kN", summary.total_spare_kn);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Admissible-load formulas, column evaluator, batch runner
//! - [`materials`] - Material registry and evaluation constants
//! - [`section`] - Cross-section specification and normalization
//! - [`validation`] - Numeric input validation
//! - [`errors`] - Structured error types
//! - [`scenario`] - Fixed illustrative column set

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod scenario;
pub mod section;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    evaluate_batch, evaluate_column, BatchSummary, ColumnOutcome, ColumnRecord, ErrorResult,
    EvaluationResult, GoverningMode, Verdict,
};
pub use errors::{CalcError, CalcResult};
pub use materials::{MaterialProperties, MaterialRegistry};
pub use section::{Section, SectionSpec};
