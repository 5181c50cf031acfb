//! # Connection Calculations
//!
//! The two connection calculators. Each follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, with `validate()`)
//! - `*Result` - Calculation results (JSON-serializable, with `passes()`)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! The calculators are structurally parallel (material lookup → capacity
//! formulas → utilization ratios → pass/fail) but differ in formulas, so they
//! hang off one tagged [`ConnectionItem`] enum instead of duplicating the
//! orchestration.
//!
//! ## Available Calculations
//!
//! - [`bolted`] - Bolted plate connection (bolt group + plate checks)
//! - [`welded`] - Welded connection (fillet or complete penetration)

pub mod bolted;
pub mod welded;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use bolted::{BoltedInput, BoltedResult};
pub use welded::{WeldType, WeldedInput, WeldedResult};

/// Resistance factor φ for bolts and welds (fracture-type limit states)
pub const PHI_FRACTURE: f64 = 0.75;

/// Resistance factor φ for gross-section yielding
pub const PHI_YIELD: f64 = 0.9;

/// Shear yield strength as a fraction of tensile yield (0.6·Fy)
pub const SHEAR_YIELD_FRACTION: f64 = 0.6;

/// A single design check: demand/capacity ratio and its verdict.
///
/// A ratio of exactly 1.0 passes (≤, not <).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilizationCheck {
    /// Demand divided by governing capacity
    pub ratio: f64,
    /// True iff ratio ≤ 1.0
    pub passes: bool,
}

impl UtilizationCheck {
    /// Build a check from its ratio
    pub fn new(ratio: f64) -> Self {
        UtilizationCheck {
            ratio,
            passes: ratio <= 1.0,
        }
    }
}

/// Square-root-of-sum-of-squares combination of two orthogonal ratios.
///
/// Treats the two demands as independent axes. This is a modeling
/// simplification, not a code-exact interaction equation.
pub fn combine_srss(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// A named scalar quantity exported for presentation (reports, charts)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NamedQuantity {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// A named design check exported for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NamedCheck {
    pub name: &'static str,
    pub check: UtilizationCheck,
}

/// Enum wrapper for all connection types.
///
/// This allows storing heterogeneous connections in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConnectionItem {
    /// Bolted plate connection
    Bolted(BoltedInput),
    /// Welded connection (fillet or complete penetration)
    Welded(WeldedInput),
}

impl ConnectionItem {
    /// Get the user-provided label for this connection
    pub fn label(&self) -> &str {
        match self {
            ConnectionItem::Bolted(b) => &b.label,
            ConnectionItem::Welded(w) => &w.label,
        }
    }

    /// Get the connection type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            ConnectionItem::Bolted(_) => "Bolted",
            ConnectionItem::Welded(_) => "Welded",
        }
    }

    /// Run the matching calculator
    pub fn evaluate(&self) -> CalcResult<ConnectionResult> {
        match self {
            ConnectionItem::Bolted(input) => bolted::calculate(input).map(ConnectionResult::Bolted),
            ConnectionItem::Welded(input) => welded::calculate(input).map(ConnectionResult::Welded),
        }
    }
}

/// Result of evaluating either connection type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConnectionResult {
    Bolted(BoltedResult),
    Welded(WeldedResult),
}

impl ConnectionResult {
    /// Check if all design checks pass
    pub fn passes(&self) -> bool {
        match self {
            ConnectionResult::Bolted(r) => r.passes(),
            ConnectionResult::Welded(r) => r.passes(),
        }
    }

    /// Largest utilization ratio across all checks
    pub fn max_utilization(&self) -> f64 {
        self.checks()
            .iter()
            .map(|c| c.check.ratio)
            .fold(0.0, f64::max)
    }

    /// All design checks, by name. Every defined check is always present,
    /// including the zero-moment case.
    pub fn checks(&self) -> Vec<NamedCheck> {
        match self {
            ConnectionResult::Bolted(r) => r.checks(),
            ConnectionResult::Welded(r) => r.checks(),
        }
    }

    /// All computed quantities, by name, for presentation
    pub fn quantities(&self) -> Vec<NamedQuantity> {
        match self {
            ConnectionResult::Bolted(r) => r.quantities(),
            ConnectionResult::Welded(r) => r.quantities(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{BoltDiameter, BoltGrade, SteelGrade};

    fn test_item() -> ConnectionItem {
        ConnectionItem::Bolted(BoltedInput {
            label: "B-1".to_string(),
            steel_grade: SteelGrade::A36,
            plate_thickness_mm: 12.0,
            plate_width_mm: 200.0,
            bolt_diameter: BoltDiameter::M20,
            bolt_grade: BoltGrade::A325,
            bolt_count: 4,
            edge_distance_mm: 40.0,
            bolt_spacing_mm: 80.0,
            tension_kn: 100.0,
            shear_kn: 50.0,
        })
    }

    #[test]
    fn test_check_boundary_is_inclusive() {
        assert!(UtilizationCheck::new(1.0).passes);
        assert!(!UtilizationCheck::new(1.0 + 1e-9).passes);
        assert!(UtilizationCheck::new(0.0).passes);
    }

    #[test]
    fn test_srss_dominates_components() {
        let combined = combine_srss(0.6, 0.3);
        assert!(combined >= 0.6);
        assert!((combined - (0.45_f64).sqrt()).abs() < 1e-12);
        assert_eq!(combine_srss(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_item_dispatch() {
        let item = test_item();
        assert_eq!(item.label(), "B-1");
        assert_eq!(item.calc_type(), "Bolted");

        let result = item.evaluate().unwrap();
        assert!(result.passes());
        assert_eq!(result.checks().len(), 3);
        assert!(result.max_utilization() > 0.0);
    }

    #[test]
    fn test_item_serialization() {
        let item = test_item();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Bolted\""));
        let roundtrip: ConnectionItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.label(), "B-1");
    }

    #[test]
    fn test_result_serialization() {
        let result = test_item().evaluate().unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: ConnectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
