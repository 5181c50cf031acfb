//! Structural Steel Grades (ASTM)
//!
//! Reference strengths for the plate steels supported by the connection
//! calculators. Values are the specified minimum yield and ultimate tensile
//! strengths in MPa.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{CalcError, CalcResult};
use crate::units::Megapascals;

/// ASTM structural steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// ASTM A36 carbon steel
    #[serde(rename = "A36")]
    A36,
    /// ASTM A572 Grade 50 high-strength low-alloy steel
    #[serde(rename = "A572 Gr50")]
    A572Gr50,
    /// ASTM A992 wide-flange steel
    #[serde(rename = "A992")]
    A992,
}

/// Reference strengths for a steel grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelProperties {
    /// Specified minimum yield strength Fy (MPa)
    pub fy_mpa: f64,
    /// Specified minimum ultimate tensile strength Fu (MPa)
    pub fu_mpa: f64,
}

/// Process-wide name lookup table, built once
static STEEL_CATALOG: Lazy<HashMap<&'static str, SteelGrade>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for grade in SteelGrade::ALL {
        m.insert(grade.code(), grade);
    }
    // Common aliases
    m.insert("A572-GR50", SteelGrade::A572Gr50);
    m.insert("A572GR50", SteelGrade::A572Gr50);
    m
});

impl SteelGrade {
    /// All steel grade variants for UI selection
    pub const ALL: [SteelGrade; 3] = [SteelGrade::A36, SteelGrade::A572Gr50, SteelGrade::A992];

    /// Get the code string for catalog lookup
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::A36 => "A36",
            SteelGrade::A572Gr50 => "A572 GR50",
            SteelGrade::A992 => "A992",
        }
    }

    /// Look up a grade by name. Fails with `UnknownGrade` if the name is not
    /// in the fixed catalog.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        STEEL_CATALOG
            .get(s.trim().to_uppercase().as_str())
            .copied()
            .ok_or_else(|| CalcError::unknown_grade(s))
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::A36 => "A36",
            SteelGrade::A572Gr50 => "A572 Gr50",
            SteelGrade::A992 => "A992",
        }
    }

    /// Get the reference strengths for this grade
    pub fn properties(&self) -> SteelProperties {
        match self {
            SteelGrade::A36 => SteelProperties {
                fy_mpa: 250.0,
                fu_mpa: 400.0,
            },
            SteelGrade::A572Gr50 => SteelProperties {
                fy_mpa: 345.0,
                fu_mpa: 450.0,
            },
            SteelGrade::A992 => SteelProperties {
                fy_mpa: 345.0,
                fu_mpa: 450.0,
            },
        }
    }

    /// Yield strength as a typed stress
    pub fn fy(&self) -> Megapascals {
        Megapascals(self.properties().fy_mpa)
    }

    /// Ultimate strength as a typed stress
    pub fn fu(&self) -> Megapascals {
        Megapascals(self.properties().fu_mpa)
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
