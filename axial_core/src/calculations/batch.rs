//! # Batch Evaluation
//!
//! Runs the column evaluator over a collection of records. Each column
//! either evaluates fully or fails in isolation; a bad record becomes an
//! error entry in the output and the batch keeps going. Output order is
//! input order, so callers can display results positionally matched to
//! what they entered.

use serde::{Deserialize, Serialize};

use crate::calculations::column::{evaluate_column, ColumnRecord, EvaluationResult};
use crate::materials::MaterialRegistry;

/// Failure entry for one column that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    /// Column identifier, echoed from the input
    pub id: String,
    /// Human-readable failure description
    pub error: String,
}

/// Per-column outcome: either a full evaluation or an isolated failure.
///
/// ## JSON Serialization
///
/// ```json
/// { "outcome": "evaluated", "id": "C1", "verdict": "available margin", ... }
/// { "outcome": "error", "id": "C4", "error": "Material 'granito_90' is not registered" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ColumnOutcome {
    /// The column evaluated successfully
    Evaluated(EvaluationResult),
    /// Validation or lookup failed for this column
    Error(ErrorResult),
}

impl ColumnOutcome {
    /// Get the column identifier for this outcome
    pub fn id(&self) -> &str {
        match self {
            ColumnOutcome::Evaluated(result) => &result.id,
            ColumnOutcome::Error(err) => &err.id,
        }
    }

    /// Verdict text for tabular display; failures show the `ERROR` sentinel
    pub fn verdict_label(&self) -> String {
        match self {
            ColumnOutcome::Evaluated(result) => result.verdict.to_string(),
            ColumnOutcome::Error(_) => "ERROR".to_string(),
        }
    }

    /// Get the evaluation result, if this column evaluated
    pub fn as_evaluated(&self) -> Option<&EvaluationResult> {
        match self {
            ColumnOutcome::Evaluated(result) => Some(result),
            ColumnOutcome::Error(_) => None,
        }
    }
}

/// Running totals over the successfully evaluated columns of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Sum of all positive margins (kN): aggregate overload
    pub total_overload_kn: f64,
    /// Sum of |margin| over non-positive margins (kN): aggregate spare capacity
    pub total_spare_kn: f64,
}

impl BatchSummary {
    fn fold(&mut self, margin_kn: f64) {
        if margin_kn > 0.0 {
            self.total_overload_kn += margin_kn;
        } else {
            self.total_spare_kn += margin_kn.abs();
        }
    }
}

/// Evaluate a collection of columns, preserving input order.
///
/// Each record is evaluated independently; a failure is converted into a
/// [`ColumnOutcome::Error`] carrying the record's id and the error message,
/// and never aborts the rest of the batch. Totals are folded only from
/// successful evaluations.
///
/// # Example
///
/// ```rust
/// use axial_core::calculations::batch::evaluate_batch;
/// use axial_core::materials::{MaterialRegistry, DEFAULT_K_FACTOR, DEFAULT_SAFETY_FACTOR};
/// use axial_core::scenario;
///
/// let (outcomes, summary) = evaluate_batch(
///     &scenario::demo_columns(),
///     MaterialRegistry::builtin(),
///     DEFAULT_SAFETY_FACTOR,
///     DEFAULT_K_FACTOR,
/// );
/// assert_eq!(outcomes.len(), 3);
/// assert!(summary.total_spare_kn > 0.0);
/// ```
pub fn evaluate_batch(
    records: &[ColumnRecord],
    registry: &MaterialRegistry,
    safety_factor: f64,
    k_factor: f64,
) -> (Vec<ColumnOutcome>, BatchSummary) {
    let mut outcomes = Vec::with_capacity(records.len());
    let mut summary = BatchSummary::default();

    for record in records {
        match evaluate_column(record, registry, safety_factor, k_factor) {
            Ok(result) => {
                summary.fold(result.margin_kn);
                outcomes.push(ColumnOutcome::Evaluated(result));
            }
            Err(err) => {
                outcomes.push(ColumnOutcome::Error(ErrorResult {
                    id: record.id.clone(),
                    error: err.to_string(),
                }));
            }
        }
    }

    (outcomes, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{DEFAULT_K_FACTOR, DEFAULT_SAFETY_FACTOR};
    use crate::section::SectionSpec;

    fn record(id: &str, height_m: f64, section: SectionSpec, key: &str, load: f64) -> ColumnRecord {
        ColumnRecord {
            id: id.to_string(),
            height_m,
            section,
            material_key: key.to_string(),
            applied_load_kn: load,
        }
    }

    fn run(records: &[ColumnRecord]) -> (Vec<ColumnOutcome>, BatchSummary) {
        evaluate_batch(
            records,
            MaterialRegistry::builtin(),
            DEFAULT_SAFETY_FACTOR,
            DEFAULT_K_FACTOR,
        )
    }

    #[test]
    fn test_all_success_totals() {
        let records = vec![
            record("C1", 3.0, SectionSpec::Area(0.04), "concreto_25", 200.0),
            record("C2", 6.0, SectionSpec::AreaAndRadius(0.02, 0.01), "concreto_25", 50.0),
            record("C3", 3.0, SectionSpec::Area(0.02), "acero_250", 150.0),
        ];
        let (outcomes, summary) = run(&records);

        assert_eq!(outcomes.len(), 3);
        let margins: Vec<f64> = outcomes
            .iter()
            .map(|o| o.as_evaluated().unwrap().margin_kn)
            .collect();

        let expected_overload: f64 = margins.iter().filter(|m| **m > 0.0).sum();
        let expected_spare: f64 = margins.iter().filter(|m| **m <= 0.0).map(|m| m.abs()).sum();

        assert_eq!(summary.total_overload_kn, expected_overload);
        assert_eq!(summary.total_spare_kn, expected_spare);

        // Only C2 is overloaded: margin = 50 - 18.277 ≈ 31.723 kN
        assert!((summary.total_overload_kn - 31.722955).abs() < 1e-5);
        // C1 and C3 spare: 133.33 + 1516.67 = 1650 kN
        assert!((summary.total_spare_kn - 1650.0).abs() < 1e-9);
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let records = vec![
            record("Z", 3.0, SectionSpec::Area(0.04), "concreto_25", 200.0),
            record("A", 3.0, SectionSpec::Area(0.02), "acero_250", 150.0),
            record("M", 6.0, SectionSpec::Area(0.03), "concreto_20", 80.0),
        ];
        let (outcomes, _) = run(&records);
        let ids: Vec<&str> = outcomes.iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_malformed_record_is_isolated() {
        let records = vec![
            record("C1", 3.0, SectionSpec::Area(0.04), "concreto_25", 200.0),
            record("C4", 3.0, SectionSpec::Area(0.04), "granito_90", 100.0),
            record("C3", 3.0, SectionSpec::Area(0.02), "acero_250", 150.0),
        ];
        let (outcomes, summary) = run(&records);

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].as_evaluated().is_some());
        assert!(outcomes[2].as_evaluated().is_some());

        match &outcomes[1] {
            ColumnOutcome::Error(err) => {
                assert_eq!(err.id, "C4");
                assert!(err.error.contains("granito_90"));
            }
            other => panic!("expected error outcome, got {other:?}"),
        }
        assert_eq!(outcomes[1].verdict_label(), "ERROR");

        // Totals reflect only the two valid columns (both with spare capacity)
        assert_eq!(summary.total_overload_kn, 0.0);
        assert!((summary.total_spare_kn - 1650.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_number_also_isolated() {
        let records = vec![
            record("bad-height", -1.0, SectionSpec::Area(0.04), "concreto_25", 100.0),
            record("ok", 3.0, SectionSpec::Area(0.04), "concreto_25", 200.0),
        ];
        let (outcomes, summary) = run(&records);

        assert!(matches!(outcomes[0], ColumnOutcome::Error(_)));
        assert!(outcomes[1].as_evaluated().is_some());
        assert!(summary.total_spare_kn > 0.0);
    }

    #[test]
    fn test_empty_batch() {
        let (outcomes, summary) = run(&[]);
        assert!(outcomes.is_empty());
        assert_eq!(summary, BatchSummary::default());
    }

    #[test]
    fn test_outcome_serialization() {
        let records = vec![
            record("C1", 3.0, SectionSpec::Area(0.04), "concreto_25", 200.0),
            record("C4", 3.0, SectionSpec::Area(0.04), "granito_90", 100.0),
        ];
        let (outcomes, _) = run(&records);

        let json = serde_json::to_string(&outcomes).unwrap();
        assert!(json.contains("\"outcome\":\"evaluated\""));
        assert!(json.contains("\"outcome\":\"error\""));

        let roundtrip: Vec<ColumnOutcome> = serde_json::from_str(&json).unwrap();
        assert_eq!(outcomes, roundtrip);
    }
}
