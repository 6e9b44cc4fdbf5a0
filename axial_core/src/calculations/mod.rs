//! # Column Capacity Calculations
//!
//! The calculation modules follow one pattern:
//!
//! - Input structs are plain JSON-serializable records
//! - `evaluate_*` / `*_admissible` are pure functions over their inputs
//! - Failures are structured [`CalcError`](crate::errors::CalcError) values
//!
//! ## Available Calculations
//!
//! - [`admissible`] - Material-strength and Euler-buckling admissible loads
//! - [`column`] - Single-column evaluation (mode selection, margin, verdict)
//! - [`batch`] - Ordered batch evaluation with per-column error isolation

pub mod admissible;
pub mod batch;
pub mod column;

// Re-export commonly used types
pub use admissible::{euler_admissible, material_admissible};
pub use batch::{evaluate_batch, BatchSummary, ColumnOutcome, ErrorResult};
pub use column::{evaluate_column, ColumnRecord, EvaluationResult, GoverningMode, Verdict};
