//! High-Strength Bolts (ASTM)
//!
//! Nominal tensile and shear strengths for structural bolt grades, and the
//! discrete set of metric bolt diameters the calculators accept.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};

/// ASTM high-strength bolt grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoltGrade {
    /// ASTM A325 (Group A)
    A325,
    /// ASTM A490 (Group B)
    A490,
}

/// Nominal strengths for a bolt grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltProperties {
    /// Nominal tensile strength Fnt (MPa)
    pub fnt_mpa: f64,
    /// Nominal shear strength Fnv (MPa), threads not excluded
    pub fnv_mpa: f64,
}

static BOLT_CATALOG: Lazy<HashMap<&'static str, BoltGrade>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for grade in BoltGrade::ALL {
        m.insert(grade.code(), grade);
    }
    m
});

impl BoltGrade {
    /// All bolt grade variants for UI selection
    pub const ALL: [BoltGrade; 2] = [BoltGrade::A325, BoltGrade::A490];

    /// Get the code string for catalog lookup
    pub fn code(&self) -> &'static str {
        match self {
            BoltGrade::A325 => "A325",
            BoltGrade::A490 => "A490",
        }
    }

    /// Look up a grade by name. Fails with `UnknownGrade` if the name is not
    /// in the fixed catalog.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        BOLT_CATALOG
            .get(s.trim().to_uppercase().as_str())
            .copied()
            .ok_or_else(|| CalcError::unknown_grade(s))
    }

    /// Get the nominal strengths for this grade
    pub fn properties(&self) -> BoltProperties {
        match self {
            BoltGrade::A325 => BoltProperties {
                fnt_mpa: 620.0,
                fnv_mpa: 372.0,
            },
            BoltGrade::A490 => BoltProperties {
                fnt_mpa: 780.0,
                fnv_mpa: 468.0,
            },
        }
    }
}

impl std::fmt::Display for BoltGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Metric bolt diameters accepted by the calculators.
///
/// Connection design uses a fixed set of commercial sizes rather than an
/// arbitrary diameter, so this is an enum rather than a bare f64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoltDiameter {
    #[serde(rename = "M12")]
    M12,
    #[serde(rename = "M16")]
    M16,
    #[serde(rename = "M20")]
    M20,
    #[serde(rename = "M24")]
    M24,
    #[serde(rename = "M27")]
    M27,
    #[serde(rename = "M30")]
    M30,
}

impl BoltDiameter {
    /// All diameters for UI selection
    pub const ALL: [BoltDiameter; 6] = [
        BoltDiameter::M12,
        BoltDiameter::M16,
        BoltDiameter::M20,
        BoltDiameter::M24,
        BoltDiameter::M27,
        BoltDiameter::M30,
    ];

    /// Nominal diameter in millimeters
    pub fn mm(&self) -> f64 {
        match self {
            BoltDiameter::M12 => 12.0,
            BoltDiameter::M16 => 16.0,
            BoltDiameter::M20 => 20.0,
            BoltDiameter::M24 => 24.0,
            BoltDiameter::M27 => 27.0,
            BoltDiameter::M30 => 30.0,
        }
    }

    /// Look up a diameter by its millimeter value
    pub fn from_mm(mm: f64) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.mm() == mm)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "bolt_diameter_mm",
                    mm.to_string(),
                    "Not a standard bolt diameter (12, 16, 20, 24, 27, 30)",
                )
            })
    }

    /// Nominal cross-sectional area Ab = π(d/2)² (mm²)
    pub fn area_mm2(&self) -> f64 {
        let r = self.mm() / 2.0;
        PI * r * r
    }

    /// Standard hole diameter: nominal bolt diameter plus 2 mm oversize
    pub fn hole_diameter_mm(&self) -> f64 {
        self.mm() + 2.0
    }
}

impl std::fmt::Display for BoltDiameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M{:.0}", self.mm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bolt_properties() {
        let a325 = BoltGrade::A325.properties();
        assert_eq!(a325.fnt_mpa, 620.0);
        assert_eq!(a325.fnv_mpa, 372.0);

        let a490 = BoltGrade::A490.properties();
        assert_eq!(a490.fnt_mpa, 780.0);
        assert_eq!(a490.fnv_mpa, 468.0);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(
            BoltGrade::from_str_flexible("a325").unwrap(),
            BoltGrade::A325
        );
        assert!(BoltGrade::from_str_flexible("A563").is_err());
    }

    #[test]
    fn test_bolt_area() {
        // M20: π · 10² ≈ 314.16 mm²
        assert!((BoltDiameter::M20.area_mm2() - 314.159).abs() < 0.01);
    }

    #[test]
    fn test_hole_diameter() {
        assert_eq!(BoltDiameter::M20.hole_diameter_mm(), 22.0);
        assert_eq!(BoltDiameter::M12.hole_diameter_mm(), 14.0);
    }

    #[test]
    fn test_from_mm() {
        assert_eq!(BoltDiameter::from_mm(24.0).unwrap(), BoltDiameter::M24);
        let err = BoltDiameter::from_mm(21.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_area_increases_with_diameter() {
        for pair in BoltDiameter::ALL.windows(2) {
            assert!(pair[1].area_mm2() > pair[0].area_mm2());
        }
    }
}
