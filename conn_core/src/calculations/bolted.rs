//! # Bolted Connection Calculation
//!
//! Capacity and utilization checks for a bolted plate connection under
//! combined tension and shear, LRFD-style.
//!
//! Checks performed:
//!
//! - Bolt group tension: n · φ·Fnt·Ab, φ = 0.75
//! - Bolt group shear: n · φ·Fnv·Ab
//! - Plate tension on the net section: φ·Fu·An (standard 2 mm hole oversize)
//! - Plate shear yield on the gross section: 0.6 · φy·Fy·Ag, φy = 0.9
//!
//! The governing capacity for each direction is the lesser of the bolt group
//! and the plate; tension and shear ratios are combined SRSS.
//!
//! ## Example
//!
//! ```rust
//! use conn_core::calculations::bolted::{calculate, BoltedInput};
//! use conn_core::materials::{BoltDiameter, BoltGrade, SteelGrade};
//!
//! let input = BoltedInput {
//!     label: "B-1".to_string(),
//!     steel_grade: SteelGrade::A36,
//!     plate_thickness_mm: 12.0,
//!     plate_width_mm: 200.0,
//!     bolt_diameter: BoltDiameter::M20,
//!     bolt_grade: BoltGrade::A325,
//!     bolt_count: 4,
//!     edge_distance_mm: 40.0,
//!     bolt_spacing_mm: 80.0,
//!     tension_kn: 100.0,
//!     shear_kn: 50.0,
//! };
//!
//! let result = calculate(&input)?;
//! assert!(result.passes());
//! # Ok::<(), conn_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use super::{
    combine_srss, NamedCheck, NamedQuantity, UtilizationCheck, PHI_FRACTURE, PHI_YIELD,
    SHEAR_YIELD_FRACTION,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BoltDiameter, BoltGrade, SteelGrade};
use crate::units::{Megapascals, Millimeters, SquareMillimeters};

/// Input parameters for a bolted plate connection.
///
/// All lengths in millimeters, loads in kilonewtons.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "steel_grade": "A36",
///   "plate_thickness_mm": 12.0,
///   "plate_width_mm": 200.0,
///   "bolt_diameter": "M20",
///   "bolt_grade": "A325",
///   "bolt_count": 4,
///   "edge_distance_mm": 40.0,
///   "bolt_spacing_mm": 80.0,
///   "tension_kn": 100.0,
///   "shear_kn": 50.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltedInput {
    /// User label for this connection (e.g., "B-1", "Brace Gusset")
    pub label: String,

    /// Plate steel grade
    pub steel_grade: SteelGrade,

    /// Plate thickness (mm)
    pub plate_thickness_mm: f64,

    /// Plate width (mm)
    pub plate_width_mm: f64,

    /// Bolt diameter (fixed commercial sizes)
    pub bolt_diameter: BoltDiameter,

    /// Bolt grade
    pub bolt_grade: BoltGrade,

    /// Number of bolts in the group (≥ 1)
    pub bolt_count: u32,

    /// Distance from the first bolt to the plate edge (mm)
    pub edge_distance_mm: f64,

    /// Center-to-center bolt spacing (mm)
    pub bolt_spacing_mm: f64,

    /// Applied tension load Pt (kN)
    pub tension_kn: f64,

    /// Applied shear load Pv (kN)
    pub shear_kn: f64,
}

impl BoltedInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.plate_thickness_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "plate_thickness_mm",
                self.plate_thickness_mm.to_string(),
                "Plate thickness must be positive",
            ));
        }
        if self.plate_width_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "plate_width_mm",
                self.plate_width_mm.to_string(),
                "Plate width must be positive",
            ));
        }
        if self.bolt_count < 1 {
            return Err(CalcError::invalid_input(
                "bolt_count",
                self.bolt_count.to_string(),
                "At least one bolt is required",
            ));
        }
        if self.edge_distance_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "edge_distance_mm",
                self.edge_distance_mm.to_string(),
                "Edge distance cannot be negative",
            ));
        }
        if self.bolt_spacing_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "bolt_spacing_mm",
                self.bolt_spacing_mm.to_string(),
                "Bolt spacing cannot be negative",
            ));
        }
        if self.tension_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "tension_kn",
                self.tension_kn.to_string(),
                "Load cannot be negative",
            ));
        }
        if self.shear_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "shear_kn",
                self.shear_kn.to_string(),
                "Load cannot be negative",
            ));
        }
        Ok(())
    }

    /// Bolt centerline positions along the plate (mm from the plate edge),
    /// for drawing the connection schematic. Bolts that would land inside
    /// the far edge distance are omitted, matching the drawn layout.
    pub fn bolt_positions_mm(&self) -> Vec<f64> {
        (0..self.bolt_count)
            .map(|i| self.edge_distance_mm + i as f64 * self.bolt_spacing_mm)
            .filter(|&x| x <= self.plate_width_mm - self.edge_distance_mm)
            .collect()
    }
}

/// Results from a bolted connection calculation.
///
/// Capacities in kN, areas in mm².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltedResult {
    /// Bolt cross-sectional area Ab = π(d/2)² (mm²)
    pub bolt_area_mm2: f64,

    /// Design tension capacity per bolt φ·Fnt·Ab (kN)
    pub bolt_tension_capacity_kn: f64,

    /// Design shear capacity per bolt φ·Fnv·Ab (kN)
    pub bolt_shear_capacity_kn: f64,

    /// Bolt group tension capacity (kN)
    pub group_tension_capacity_kn: f64,

    /// Bolt group shear capacity (kN)
    pub group_shear_capacity_kn: f64,

    /// Hole diameter with standard oversize (mm)
    pub hole_diameter_mm: f64,

    /// Plate net area through the bolt line (mm²)
    pub net_area_mm2: f64,

    /// Plate gross area (mm²)
    pub gross_area_mm2: f64,

    /// Plate net-section tension capacity φ·Fu·An (kN)
    pub plate_tension_capacity_kn: f64,

    /// Plate gross-section shear yield capacity 0.6·φy·Fy·Ag (kN)
    pub plate_shear_capacity_kn: f64,

    /// Governing tension capacity, min(bolt group, plate) (kN)
    pub governing_tension_capacity_kn: f64,

    /// Governing shear capacity, min(bolt group, plate) (kN)
    pub governing_shear_capacity_kn: f64,

    /// Tension utilization Pt / governing capacity
    pub tension_check: UtilizationCheck,

    /// Shear utilization Pv / governing capacity
    pub shear_check: UtilizationCheck,

    /// SRSS combination of tension and shear ratios
    pub combined_check: UtilizationCheck,
}

impl BoltedResult {
    /// Check if all design checks pass
    pub fn passes(&self) -> bool {
        self.tension_check.passes && self.shear_check.passes && self.combined_check.passes
    }

    /// Name of the check with the highest utilization
    pub fn governing_condition(&self) -> &'static str {
        let mut name = "tension";
        let mut max = self.tension_check.ratio;
        if self.shear_check.ratio > max {
            name = "shear";
            max = self.shear_check.ratio;
        }
        if self.combined_check.ratio > max {
            name = "combined";
        }
        name
    }

    /// All design checks, by name
    pub fn checks(&self) -> Vec<NamedCheck> {
        vec![
            NamedCheck {
                name: "tension",
                check: self.tension_check,
            },
            NamedCheck {
                name: "shear",
                check: self.shear_check,
            },
            NamedCheck {
                name: "combined",
                check: self.combined_check,
            },
        ]
    }

    /// All computed quantities, by name, for presentation
    pub fn quantities(&self) -> Vec<NamedQuantity> {
        vec![
            NamedQuantity {
                name: "bolt_area",
                value: self.bolt_area_mm2,
                unit: "mm²",
            },
            NamedQuantity {
                name: "bolt_tension_capacity",
                value: self.bolt_tension_capacity_kn,
                unit: "kN",
            },
            NamedQuantity {
                name: "bolt_shear_capacity",
                value: self.bolt_shear_capacity_kn,
                unit: "kN",
            },
            NamedQuantity {
                name: "group_tension_capacity",
                value: self.group_tension_capacity_kn,
                unit: "kN",
            },
            NamedQuantity {
                name: "group_shear_capacity",
                value: self.group_shear_capacity_kn,
                unit: "kN",
            },
            NamedQuantity {
                name: "net_area",
                value: self.net_area_mm2,
                unit: "mm²",
            },
            NamedQuantity {
                name: "gross_area",
                value: self.gross_area_mm2,
                unit: "mm²",
            },
            NamedQuantity {
                name: "plate_tension_capacity",
                value: self.plate_tension_capacity_kn,
                unit: "kN",
            },
            NamedQuantity {
                name: "plate_shear_capacity",
                value: self.plate_shear_capacity_kn,
                unit: "kN",
            },
            NamedQuantity {
                name: "governing_tension_capacity",
                value: self.governing_tension_capacity_kn,
                unit: "kN",
            },
            NamedQuantity {
                name: "governing_shear_capacity",
                value: self.governing_shear_capacity_kn,
                unit: "kN",
            },
        ]
    }
}

/// Calculate bolted connection capacity and utilization.
///
/// # Arguments
///
/// * `input` - Connection parameters
///
/// # Returns
///
/// * `Ok(BoltedResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid or the geometry leaves no
///   net section (e.g., holes wider than the plate)
pub fn calculate(input: &BoltedInput) -> CalcResult<BoltedResult> {
    input.validate()?;

    let steel = input.steel_grade.properties();
    let bolt = input.bolt_grade.properties();
    let n = input.bolt_count as f64;

    // Per-bolt design capacities, φ = 0.75
    let bolt_area = SquareMillimeters(input.bolt_diameter.area_mm2());
    let bolt_tension = Megapascals(PHI_FRACTURE * bolt.fnt_mpa) * bolt_area;
    let bolt_shear = Megapascals(PHI_FRACTURE * bolt.fnv_mpa) * bolt_area;

    let group_tension_kn = n * bolt_tension.0;
    let group_shear_kn = n * bolt_shear.0;

    // Plate net section through the bolt line
    let hole_diameter_mm = input.bolt_diameter.hole_diameter_mm();
    let net_width_mm = input.plate_width_mm - n * hole_diameter_mm;
    let net_area = Millimeters(input.plate_thickness_mm) * Millimeters(net_width_mm);
    if net_area.0 <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "net_area_mm2",
            net_area.0,
            "Bolt holes leave no net section; widen the plate or reduce the bolt group",
        ));
    }

    let gross_area = Millimeters(input.plate_thickness_mm) * Millimeters(input.plate_width_mm);
    let plate_tension = Megapascals(PHI_FRACTURE * steel.fu_mpa) * net_area;
    let plate_shear =
        Megapascals(SHEAR_YIELD_FRACTION * PHI_YIELD * steel.fy_mpa) * gross_area;

    let governing_tension_kn = group_tension_kn.min(plate_tension.0);
    let governing_shear_kn = group_shear_kn.min(plate_shear.0);
    if governing_tension_kn <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "governing_tension_capacity_kn",
            governing_tension_kn,
            "Tension capacity must be positive",
        ));
    }
    if governing_shear_kn <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "governing_shear_capacity_kn",
            governing_shear_kn,
            "Shear capacity must be positive",
        ));
    }

    let tension_ratio = input.tension_kn / governing_tension_kn;
    let shear_ratio = input.shear_kn / governing_shear_kn;

    Ok(BoltedResult {
        bolt_area_mm2: bolt_area.0,
        bolt_tension_capacity_kn: bolt_tension.0,
        bolt_shear_capacity_kn: bolt_shear.0,
        group_tension_capacity_kn: group_tension_kn,
        group_shear_capacity_kn: group_shear_kn,
        hole_diameter_mm,
        net_area_mm2: net_area.0,
        gross_area_mm2: gross_area.0,
        plate_tension_capacity_kn: plate_tension.0,
        plate_shear_capacity_kn: plate_shear.0,
        governing_tension_capacity_kn: governing_tension_kn,
        governing_shear_capacity_kn: governing_shear_kn,
        tension_check: UtilizationCheck::new(tension_ratio),
        shear_check: UtilizationCheck::new(shear_ratio),
        combined_check: UtilizationCheck::new(combine_srss(tension_ratio, shear_ratio)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_connection() -> BoltedInput {
        BoltedInput {
            label: "Test Connection".to_string(),
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
        }
    }

    #[test]
    fn test_reference_connection() {
        // 4 × M20 A325 in a 12×200 A36 plate, Pt = 100 kN, Pv = 50 kN
        let result = calculate(&test_connection()).unwrap();

        // Ab = π·10² ≈ 314.16 mm²
        assert!((result.bolt_area_mm2 - 314.16).abs() < 0.01);

        // Per bolt: 0.75·620·314.16/1000 ≈ 146.1 kN; group ≈ 584.4 kN
        assert!((result.bolt_tension_capacity_kn - 146.08).abs() < 0.05);
        assert!((result.group_tension_capacity_kn - 584.34).abs() < 0.2);

        // Net area = 12·(200 − 4·22) = 1344 mm²
        assert_eq!(result.hole_diameter_mm, 22.0);
        assert!((result.net_area_mm2 - 1344.0).abs() < 1e-9);

        // Plate tension = 0.75·400·1344/1000 = 403.2 kN governs
        assert!((result.plate_tension_capacity_kn - 403.2).abs() < 1e-9);
        assert!((result.governing_tension_capacity_kn - 403.2).abs() < 1e-9);

        // Plate shear = 0.6·0.9·250·2400/1000 = 324 kN
        assert!((result.plate_shear_capacity_kn - 324.0).abs() < 1e-9);

        // Tension ratio ≈ 100/403.2 = 0.248, passes
        assert!((result.tension_check.ratio - 0.248).abs() < 0.001);
        assert!(result.passes());
    }

    #[test]
    fn test_no_net_section_fails() {
        // 4 × M20 holes (88 mm) in an 80 mm plate: negative net area
        let mut input = test_connection();
        input.plate_width_mm = 80.0;

        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_deterministic() {
        let input = test_connection();
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bolt_capacity_monotonic_in_count() {
        let mut input = test_connection();
        input.plate_width_mm = 400.0; // keep the net section healthy
        let four = calculate(&input).unwrap();
        input.bolt_count = 6;
        let six = calculate(&input).unwrap();

        assert!(six.group_tension_capacity_kn > four.group_tension_capacity_kn);
        assert!(six.group_shear_capacity_kn > four.group_shear_capacity_kn);
    }

    #[test]
    fn test_bolt_capacity_monotonic_in_diameter() {
        let mut input = test_connection();
        let m20 = calculate(&input).unwrap();
        input.bolt_diameter = BoltDiameter::M24;
        let m24 = calculate(&input).unwrap();

        assert!(m24.group_tension_capacity_kn > m20.group_tension_capacity_kn);
        assert!(m24.group_shear_capacity_kn > m20.group_shear_capacity_kn);
    }

    #[test]
    fn test_utilization_monotonic_in_load() {
        let mut input = test_connection();
        let low = calculate(&input).unwrap();
        input.tension_kn = 200.0;
        let high = calculate(&input).unwrap();

        assert!(high.tension_check.ratio > low.tension_check.ratio);
        assert!(high.combined_check.ratio > low.combined_check.ratio);
        // Shear unchanged
        assert_eq!(high.shear_check.ratio, low.shear_check.ratio);
    }

    #[test]
    fn test_combined_dominates_components() {
        let result = calculate(&test_connection()).unwrap();
        assert!(
            result.combined_check.ratio
                >= result.tension_check.ratio.max(result.shear_check.ratio)
        );
    }

    #[test]
    fn test_unity_ratio_passes() {
        // Load the connection to exactly its governing tension capacity
        let mut input = test_connection();
        input.shear_kn = 0.0;
        let probe = calculate(&input).unwrap();
        input.tension_kn = probe.governing_tension_capacity_kn;

        let result = calculate(&input).unwrap();
        assert_eq!(result.tension_check.ratio, 1.0);
        assert!(result.tension_check.passes);
        assert!(result.combined_check.passes);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = test_connection();
        input.bolt_count = 0;
        assert!(calculate(&input).is_err());

        let mut input = test_connection();
        input.tension_kn = -10.0;
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "INVALID_INPUT"
        );

        let mut input = test_connection();
        input.plate_thickness_mm = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_bolt_positions() {
        let input = test_connection();
        // 40, 120 fit inside 200 − 40; 200 and 280 do not
        assert_eq!(input.bolt_positions_mm(), vec![40.0, 120.0]);

        let mut wide = test_connection();
        wide.plate_width_mm = 400.0;
        assert_eq!(wide.bolt_positions_mm(), vec![40.0, 120.0, 200.0, 280.0]);
    }

    #[test]
    fn test_serialization() {
        let input = test_connection();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: BoltedInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: BoltedResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
