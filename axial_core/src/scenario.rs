//! Fixed illustrative scenario.
//!
//! Three hard-coded columns exercising both governing modes and multiple
//! verdicts: a concrete column with spare capacity, a very slender concrete
//! column that fails by buckling, and a steel column. The CLI shell and the
//! sanity tests drive the pipeline with this same set.

use crate::calculations::column::ColumnRecord;
use crate::section::SectionSpec;

/// The three demo columns, in display order.
pub fn demo_columns() -> Vec<ColumnRecord> {
    vec![
        ColumnRecord {
            id: "C1".to_string(),
            height_m: 3.0,
            section: SectionSpec::Area(0.04),
            material_key: "concreto_25".to_string(),
            applied_load_kn: 200.0,
        },
        ColumnRecord {
            id: "C2".to_string(),
            height_m: 6.0,
            section: SectionSpec::AreaAndRadius(0.02, 0.01),
            material_key: "concreto_25".to_string(),
            applied_load_kn: 50.0,
        },
        ColumnRecord {
            id: "C3".to_string(),
            height_m: 3.0,
            section: SectionSpec::Area(0.02),
            material_key: "acero_250".to_string(),
            applied_load_kn: 150.0,
        },
    ]
}
