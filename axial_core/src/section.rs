//! # Cross-Section Handling
//!
//! Columns arrive with their cross-section given either as a bare area or as
//! an `[area, radius_of_gyration]` pair. [`SectionSpec`] captures those two
//! shapes as an explicit variant at the boundary, and [`SectionSpec::parse`]
//! normalizes them once into a canonical [`Section`] so the calculators never
//! have to re-check which shape they were handed.
//!
//! When no radius of gyration is supplied it is derived as `sqrt(area / 12)`,
//! the relation for a solid rectangular-ish section (`I = b*h^3/12`). It is
//! an approximation, not a general formula for arbitrary shapes.
//!
//! ## JSON Examples
//!
//! ```json
//! 0.04
//! [0.02, 0.01]
//! [0.02, null]
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::validation::validate_number;

/// Raw cross-section specification as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionSpec {
    /// Bare area in m²; radius of gyration derived as `sqrt(area / 12)`
    Area(f64),
    /// Explicit area (m²) and radius of gyration (m)
    AreaAndRadius(f64, f64),
}

impl SectionSpec {
    /// Validate and normalize into a canonical [`Section`].
    ///
    /// The area is required positive; an explicit radius of gyration is
    /// required positive as well. Failures surface as `InvalidInput` naming
    /// the offending field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use axial_core::section::SectionSpec;
    ///
    /// let section = SectionSpec::Area(0.04).parse().unwrap();
    /// assert!((section.r_m - (0.04f64 / 12.0).sqrt()).abs() < 1e-12);
    /// ```
    pub fn parse(&self) -> CalcResult<Section> {
        match *self {
            SectionSpec::Area(area) => {
                let area_m2 = validate_number(area, "section.area_m2", true)?;
                Ok(Section {
                    area_m2,
                    r_m: default_radius_of_gyration(area_m2),
                })
            }
            SectionSpec::AreaAndRadius(area, r) => {
                let area_m2 = validate_number(area, "section.area_m2", true)?;
                let r_m = validate_number(r, "section.radius_of_gyration_m", true)?;
                Ok(Section { area_m2, r_m })
            }
        }
    }
}

// Accepts the wire shapes `0.04`, `[0.02]`, `[0.02, null]`, and
// `[0.02, 0.01]`. A missing or null radius collapses to the bare-area
// variant so downstream code sees exactly two cases.
impl<'de> Deserialize<'de> for SectionSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Scalar(f64),
            Seq(Vec<Option<f64>>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Scalar(area) => Ok(SectionSpec::Area(area)),
            Raw::Seq(items) => {
                let area = items.first().copied().flatten().ok_or_else(|| {
                    de::Error::custom("section list requires an area as its first element")
                })?;
                match items.get(1).copied().flatten() {
                    Some(r) => Ok(SectionSpec::AreaAndRadius(area, r)),
                    None => Ok(SectionSpec::Area(area)),
                }
            }
        }
    }
}

/// Canonical cross-section used by all calculators.
///
/// Invariant: both fields are strictly positive (enforced by
/// [`SectionSpec::parse`], the only constructor on the evaluation path).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area (m²)
    pub area_m2: f64,
    /// Radius of gyration (m)
    pub r_m: f64,
}

/// Default radius of gyration for a section known only by area.
///
/// `r = sqrt(A / 12)`, the solid rectangular-section approximation.
pub fn default_radius_of_gyration(area_m2: f64) -> f64 {
    (area_m2 / 12.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_area_derives_radius() {
        let section = SectionSpec::Area(0.04).parse().unwrap();
        assert_eq!(section.area_m2, 0.04);
        assert!((section.r_m - 0.057735026918962574).abs() < 1e-12);
    }

    #[test]
    fn test_parse_explicit_pair() {
        let section = SectionSpec::AreaAndRadius(0.02, 0.01).parse().unwrap();
        assert_eq!(section.area_m2, 0.02);
        assert_eq!(section.r_m, 0.01);
    }

    #[test]
    fn test_parse_rejects_nonpositive_area() {
        assert!(SectionSpec::Area(0.0).parse().is_err());
        assert!(SectionSpec::Area(-0.04).parse().is_err());
    }

    #[test]
    fn test_parse_rejects_nonpositive_radius() {
        assert!(SectionSpec::AreaAndRadius(0.02, 0.0).parse().is_err());
        assert!(SectionSpec::AreaAndRadius(0.02, -0.01).parse().is_err());
    }

    #[test]
    fn test_deserialize_scalar() {
        let spec: SectionSpec = serde_json::from_str("0.04").unwrap();
        assert_eq!(spec, SectionSpec::Area(0.04));
    }

    #[test]
    fn test_deserialize_pair() {
        let spec: SectionSpec = serde_json::from_str("[0.02, 0.01]").unwrap();
        assert_eq!(spec, SectionSpec::AreaAndRadius(0.02, 0.01));
    }

    #[test]
    fn test_deserialize_null_radius_matches_scalar() {
        let with_null: SectionSpec = serde_json::from_str("[0.02, null]").unwrap();
        let single: SectionSpec = serde_json::from_str("[0.02]").unwrap();
        assert_eq!(with_null, SectionSpec::Area(0.02));
        assert_eq!(single, SectionSpec::Area(0.02));
        assert_eq!(with_null.parse().unwrap(), single.parse().unwrap());
    }

    #[test]
    fn test_serialize_shapes() {
        assert_eq!(
            serde_json::to_string(&SectionSpec::Area(0.04)).unwrap(),
            "0.04"
        );
        assert_eq!(
            serde_json::to_string(&SectionSpec::AreaAndRadius(0.02, 0.01)).unwrap(),
            "[0.02,0.01]"
        );
    }

    #[test]
    fn test_default_radius_formula() {
        let r = default_radius_of_gyration(0.02);
        assert!((r - (0.02f64 / 12.0).sqrt()).abs() < 1e-15);
    }
}
