//! # Column Evaluation
//!
//! Evaluates one concentrically loaded column against two failure modes:
//! direct material crushing, always, and Euler buckling when the column is
//! slender enough for it to matter. The governing (lower) admissible load
//! sets the margin and the verdict.
//!
//! ## Example
//!
//! ```rust
//! use axial_core::calculations::column::{evaluate_column, ColumnRecord};
//! use axial_core::materials::{MaterialRegistry, DEFAULT_K_FACTOR, DEFAULT_SAFETY_FACTOR};
//! use axial_core::section::SectionSpec;
//!
//! let record = ColumnRecord {
//!     id: "C1".to_string(),
//!     height_m: 3.0,
//!     section: SectionSpec::Area(0.04),
//!     material_key: "concreto_25".to_string(),
//!     applied_load_kn: 200.0,
//! };
//!
//! let result = evaluate_column(
//!     &record,
//!     MaterialRegistry::builtin(),
//!     DEFAULT_SAFETY_FACTOR,
//!     DEFAULT_K_FACTOR,
//! )
//! .unwrap();
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::admissible::{euler_admissible, material_admissible};
use crate::errors::CalcResult;
use crate::materials::{MaterialRegistry, SLENDERNESS_THRESHOLD};
use crate::section::SectionSpec;
use crate::validation::validate_number;

/// Input parameters for one column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "C1",
///   "height_m": 3.0,
///   "section": 0.04,
///   "material_key": "concreto_25",
///   "applied_load_kn": 200.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRecord {
    /// User identifier for this column (e.g., "C1")
    pub id: String,

    /// Column height in meters
    pub height_m: f64,

    /// Cross-section: bare area in m², or [area, radius_of_gyration]
    pub section: SectionSpec,

    /// Key into the material registry
    pub material_key: String,

    /// Applied axial load in kN
    pub applied_load_kn: f64,
}

/// Which failure mode set the final admissible load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoverningMode {
    /// Material crushing governs (also the tie case)
    #[serde(rename = "material")]
    Material,
    /// Euler buckling governs
    #[serde(rename = "Euler")]
    Euler,
}

impl std::fmt::Display for GoverningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoverningMode::Material => write!(f, "material"),
            GoverningMode::Euler => write!(f, "Euler"),
        }
    }
}

/// Pass/fail verdict, derived purely from the sign of the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Applied load exceeds the admissible load (margin > 0)
    #[serde(rename = "overload failure")]
    OverloadFailure,
    /// Spare capacity remains (margin < 0)
    #[serde(rename = "available margin")]
    AvailableMargin,
    /// Applied load equals the admissible load exactly (margin == 0)
    #[serde(rename = "equilibrium")]
    Equilibrium,
}

impl Verdict {
    /// Derive the verdict from a signed margin.
    ///
    /// Exact floating-point zero maps to equilibrium. In practice that case
    /// is nearly unreachable, but it is part of the contract and is not
    /// approximated with a tolerance.
    pub fn from_margin(margin_kn: f64) -> Self {
        if margin_kn > 0.0 {
            Verdict::OverloadFailure
        } else if margin_kn < 0.0 {
            Verdict::AvailableMargin
        } else {
            Verdict::Equilibrium
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::OverloadFailure => write!(f, "overload failure"),
            Verdict::AvailableMargin => write!(f, "available margin"),
            Verdict::Equilibrium => write!(f, "equilibrium"),
        }
    }
}

/// Results for one evaluated column.
///
/// Echoes the resolved inputs alongside the computed loads so each result
/// maps directly onto one display row without further lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Column identifier, echoed from the input
    pub id: String,

    /// Column height (m)
    pub height_m: f64,

    /// Cross-sectional area (m²)
    pub area_m2: f64,

    /// Radius of gyration (m), explicit or derived
    pub r_m: f64,

    /// Material key, echoed from the input
    pub material_key: String,

    /// Characteristic strength f_c (MPa)
    pub f_c_mpa: f64,

    /// Elastic modulus E (GPa)
    pub e_gpa: f64,

    /// Applied axial load (kN)
    pub applied_load_kn: f64,

    /// Admissible load from material strength (kN)
    pub material_admissible_kn: f64,

    /// Admissible load from Euler buckling (kN); absent when the
    /// slenderness ratio did not exceed the critical threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub euler_admissible_kn: Option<f64>,

    /// Final admissible load (kN): the lesser of the two when both were
    /// computed, otherwise the material value
    pub final_admissible_kn: f64,

    /// Slenderness ratio (K * height) / r
    pub slenderness_ratio: f64,

    /// Failure mode that set the final admissible load
    pub governing_mode: GoverningMode,

    /// Applied load minus final admissible load (kN, signed)
    pub margin_kn: f64,

    /// Verdict derived from the sign of the margin
    pub verdict: Verdict,
}

impl EvaluationResult {
    /// Check if the column carries its load (margin <= 0)
    pub fn passes(&self) -> bool {
        self.margin_kn <= 0.0
    }
}

// Strict less-than: the tie goes to material.
fn governing(material_kn: f64, euler_kn: f64) -> GoverningMode {
    if euler_kn < material_kn {
        GoverningMode::Euler
    } else {
        GoverningMode::Material
    }
}

/// Evaluate one column against both failure modes.
///
/// # Arguments
///
/// * `record` - Column parameters
/// * `registry` - Material table, looked up by `record.material_key`
/// * `safety_factor` - Divides both failure loads
/// * `k_factor` - Effective-length factor K
///
/// # Returns
///
/// * `Ok(EvaluationResult)` - Full evaluation
/// * `Err(CalcError)` - `InvalidInput` for a bad numeric field,
///   `UnknownMaterial` for an unregistered material key
pub fn evaluate_column(
    record: &ColumnRecord,
    registry: &MaterialRegistry,
    safety_factor: f64,
    k_factor: f64,
) -> CalcResult<EvaluationResult> {
    let height_m = validate_number(record.height_m, "height_m", true)?;
    let section = record.section.parse()?;
    let applied_load_kn = validate_number(record.applied_load_kn, "applied_load_kn", true)?;

    let material = registry.lookup(&record.material_key)?;

    let material_kn = material_admissible(section.area_m2, material.f_c_mpa, safety_factor)?;

    let slenderness_ratio = (k_factor * height_m) / section.r_m;

    let mut euler_kn = None;
    let mut final_kn = material_kn;
    let mut mode = GoverningMode::Material;

    if slenderness_ratio > SLENDERNESS_THRESHOLD {
        let euler = euler_admissible(
            section.area_m2,
            section.r_m,
            height_m,
            material.e_gpa,
            k_factor,
            safety_factor,
        )?;
        final_kn = material_kn.min(euler);
        mode = governing(material_kn, euler);
        euler_kn = Some(euler);
    }

    let margin_kn = applied_load_kn - final_kn;

    Ok(EvaluationResult {
        id: record.id.clone(),
        height_m,
        area_m2: section.area_m2,
        r_m: section.r_m,
        material_key: record.material_key.clone(),
        f_c_mpa: material.f_c_mpa,
        e_gpa: material.e_gpa,
        applied_load_kn,
        material_admissible_kn: material_kn,
        euler_admissible_kn: euler_kn,
        final_admissible_kn: final_kn,
        slenderness_ratio,
        governing_mode: mode,
        margin_kn,
        verdict: Verdict::from_margin(margin_kn),
    })
}
