//! Admissible-load formulas.
//!
//! Two ways a concentrically loaded column can fail, two formulas:
//! direct material crushing and elastic (Euler) buckling. Both return the
//! failure load already divided by the safety factor, in kN.

use std::f64::consts::PI;

use crate::errors::CalcResult;
use crate::validation::validate_number;

/// Admissible load from simple material strength.
///
/// `load = area * f_c * 1000 / safety_factor`. The 1000 converts
/// MPa·m² (MN) to kN.
///
/// The safety factor is only required positive. A value below 1 inflates
/// the admissible load instead of reducing it; guarding against that is the
/// caller's business.
///
/// # Example
///
/// ```rust
/// use axial_core::calculations::material_admissible;
///
/// let load = material_admissible(0.04, 25.0, 3.0).unwrap();
/// assert!((load - 333.333).abs() < 0.001);
/// ```
pub fn material_admissible(area_m2: f64, f_c_mpa: f64, safety_factor: f64) -> CalcResult<f64> {
    let area = validate_number(area_m2, "area_m2", true)?;
    let f_c = validate_number(f_c_mpa, "f_c_mpa", true)?;
    let fs = validate_number(safety_factor, "safety_factor", true)?;

    Ok(area * f_c * 1000.0 / fs)
}

/// Admissible load from the Euler critical buckling load.
///
/// Moment of inertia is taken as `I = A * r²` (the relation `r = sqrt(I/A)`
/// inverted for an idealized section, not a general-shape computation).
/// Effective length `Le = K * height`; critical load
/// `Pcr = pi² * E * I / Le²`; result converted to kN and divided by the
/// safety factor.
///
/// `k_factor` is not range-checked beyond positivity. Physically it reflects
/// end-condition restraint, typically in [0.5, 2.0], but callers may supply
/// any positive value.
pub fn euler_admissible(
    area_m2: f64,
    r_m: f64,
    height_m: f64,
    e_gpa: f64,
    k_factor: f64,
    safety_factor: f64,
) -> CalcResult<f64> {
    let area = validate_number(area_m2, "area_m2", true)?;
    let r = validate_number(r_m, "r_m", true)?;
    let height = validate_number(height_m, "height_m", true)?;
    let e_gpa = validate_number(e_gpa, "e_gpa", true)?;
    let k = validate_number(k_factor, "k_factor", true)?;
    let fs = validate_number(safety_factor, "safety_factor", true)?;

    let inertia_m4 = area * r * r;
    let le_m = k * height;
    let e_pa = e_gpa * 1e9;

    let pcr_n = PI * PI * e_pa * inertia_m4 / (le_m * le_m);
    Ok(pcr_n / 1000.0 / fs)
}
