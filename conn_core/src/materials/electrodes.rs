//! Weld Electrode Classifications (AWS)
//!
//! Nominal strengths FEXX for the supported electrode classifications.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{CalcError, CalcResult};
use crate::units::Megapascals;

/// AWS electrode classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Electrode {
    /// E70XX series, FEXX = 485 MPa
    E70XX,
    /// E80XX series, FEXX = 550 MPa
    E80XX,
}

static ELECTRODE_CATALOG: Lazy<HashMap<&'static str, Electrode>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for electrode in Electrode::ALL {
        m.insert(electrode.code(), electrode);
    }
    m
});

impl Electrode {
    /// All electrode variants for UI selection
    pub const ALL: [Electrode; 2] = [Electrode::E70XX, Electrode::E80XX];

    /// Get the code string for catalog lookup
    pub fn code(&self) -> &'static str {
        match self {
            Electrode::E70XX => "E70XX",
            Electrode::E80XX => "E80XX",
        }
    }

    /// Look up an electrode by name. Fails with `UnknownGrade` if the name
    /// is not in the fixed catalog.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        ELECTRODE_CATALOG
            .get(s.trim().to_uppercase().as_str())
            .copied()
            .ok_or_else(|| CalcError::unknown_grade(s))
    }

    /// Nominal electrode strength FEXX (MPa)
    pub fn fexx_mpa(&self) -> f64 {
        match self {
            Electrode::E70XX => 485.0,
            Electrode::E80XX => 550.0,
        }
    }

    /// Nominal strength as a typed stress
    pub fn fexx(&self) -> Megapascals {
        Megapascals(self.fexx_mpa())
    }

    /// Get display name (includes the nominal strength)
    pub fn display_name(&self) -> &'static str {
        match self {
            Electrode::E70XX => "E70XX (485 MPa)",
            Electrode::E80XX => "E80XX (550 MPa)",
        }
    }
}

impl std::fmt::Display for Electrode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_electrode_strengths() {
        assert_eq!(Electrode::E70XX.fexx_mpa(), 485.0);
        assert_eq!(Electrode::E80XX.fexx_mpa(), 550.0);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(
            Electrode::from_str_flexible("e70xx").unwrap(),
            Electrode::E70XX
        );
        let err = Electrode::from_str_flexible("E60XX").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GRADE");
    }

    #[test]
    fn test_display() {
        assert_eq!(Electrode::E80XX.to_string(), "E80XX (550 MPa)");
    }
}
