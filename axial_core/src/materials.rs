//! # Materials Registry
//!
//! Material definitions and the registry they are looked up in. The registry
//! is an explicit immutable value passed into every evaluation call; callers
//! wanting custom materials build their own registry rather than mutating a
//! shared table. The built-in table carries two concrete grades and one
//! steel grade.
//!
//! ## Example
//!
//! ```rust
//! use axial_core::materials::MaterialRegistry;
//!
//! let registry = MaterialRegistry::builtin();
//! let concrete = registry.lookup("concreto_25").unwrap();
//! assert_eq!(concrete.f_c_mpa, 25.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default safety factor applied to both failure loads
pub const DEFAULT_SAFETY_FACTOR: f64 = 3.0;

/// Default effective-length factor K
pub const DEFAULT_K_FACTOR: f64 = 0.5;

/// Slenderness ratio above which Euler buckling is evaluated
pub const SLENDERNESS_THRESHOLD: f64 = 12.0;

/// Strength and stiffness values for one material.
///
/// `name` is a display label only; no calculation reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Display name (e.g., "Concreto f'c=25 MPa")
    pub name: String,
    /// Characteristic strength f_c (MPa)
    pub f_c_mpa: f64,
    /// Elastic modulus E (GPa)
    pub e_gpa: f64,
}

impl MaterialProperties {
    pub fn new(name: impl Into<String>, f_c_mpa: f64, e_gpa: f64) -> Self {
        Self {
            name: name.into(),
            f_c_mpa,
            e_gpa,
        }
    }
}

/// Immutable string-keyed material table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialRegistry {
    materials: HashMap<String, MaterialProperties>,
}

static BUILTIN: Lazy<MaterialRegistry> = Lazy::new(|| {
    MaterialRegistry::default()
        .with_material(
            "concreto_25",
            MaterialProperties::new("Concreto f'c=25 MPa", 25.0, 25.0),
        )
        .with_material(
            "concreto_20",
            MaterialProperties::new("Concreto f'c=20 MPa", 20.0, 25.0),
        )
        .with_material(
            "acero_250",
            MaterialProperties::new("Acero S250", 250.0, 200.0),
        )
});

impl MaterialRegistry {
    /// The built-in three-material table.
    pub fn builtin() -> &'static MaterialRegistry {
        &BUILTIN
    }

    /// Add a material, returning the extended registry (builder style).
    pub fn with_material(mut self, key: impl Into<String>, props: MaterialProperties) -> Self {
        self.materials.insert(key.into(), props);
        self
    }

    /// Look up a material by key.
    pub fn lookup(&self, key: &str) -> CalcResult<&MaterialProperties> {
        self.materials
            .get(key)
            .ok_or_else(|| CalcError::unknown_material(key))
    }

    /// Check whether a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.materials.contains_key(key)
    }

    /// Registered keys, in no particular order (for UI material lists)
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }
}
