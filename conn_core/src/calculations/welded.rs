//! # Welded Connection Calculation
//!
//! Capacity and utilization checks for a welded connection under a direct
//! force and an optional in-plane moment, LRFD-style.
//!
//! Two weld types share one calculation shape, with the branch chosen once
//! up front:
//!
//! - **Fillet**: effective throat 0.707·w, weld metal strength
//!   Fnw = 0.60·FEXX, φ = 0.75, with a load-angle adjustment.
//! - **Complete penetration**: effective area through the plate thickness,
//!   matched to the base metal at φy·Fy, φy = 0.9, no angle adjustment.
//!
//! ## Example
//!
//! ```rust
//! use conn_core::calculations::welded::{calculate, WeldType, WeldedInput};
//! use conn_core::materials::{Electrode, SteelGrade};
//!
//! let input = WeldedInput {
//!     label: "W-1".to_string(),
//!     steel_grade: SteelGrade::A36,
//!     weld_type: WeldType::Fillet,
//!     electrode: Electrode::E70XX,
//!     weld_size_mm: 6.0,
//!     weld_length_mm: 200.0,
//!     plate_thickness_mm: 12.0,
//!     load_angle_deg: 0.0,
//!     force_kn: 100.0,
//!     moment_knm: 0.0,
//! };
//!
//! let result = calculate(&input)?;
//! assert!(result.passes());
//! # Ok::<(), conn_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use super::{combine_srss, NamedCheck, NamedQuantity, UtilizationCheck, PHI_FRACTURE, PHI_YIELD};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{Electrode, SteelGrade};
use crate::units::{Degrees, KilonewtonMeters, Megapascals, Millimeters};

/// Fillet throat dimension as a fraction of the leg size (45° geometry)
const THROAT_FACTOR: f64 = 0.707;

/// Weld metal shear strength as a fraction of FEXX
const WELD_SHEAR_FRACTION: f64 = 0.60;

/// Weld type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeldType {
    /// Fillet weld; strength governed by the 45° throat
    Fillet,
    /// Complete-penetration groove weld; as strong as the base metal
    CompletePenetration,
}

impl WeldType {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WeldType::Fillet => "Fillet",
            WeldType::CompletePenetration => "Complete Penetration",
        }
    }
}

impl std::fmt::Display for WeldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for a welded connection.
///
/// Lengths in millimeters, force in kilonewtons, moment in kilonewton-meters.
/// The weld size is only meaningful for fillet welds; complete-penetration
/// welds take their effective thickness from the plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeldedInput {
    /// User label for this connection (e.g., "W-1", "Base Plate Weld")
    pub label: String,

    /// Base metal steel grade
    pub steel_grade: SteelGrade,

    /// Weld type (fillet or complete penetration)
    pub weld_type: WeldType,

    /// Weld electrode classification
    pub electrode: Electrode,

    /// Fillet leg size (mm); ignored for complete penetration
    pub weld_size_mm: f64,

    /// Weld length (mm)
    pub weld_length_mm: f64,

    /// Plate thickness (mm)
    pub plate_thickness_mm: f64,

    /// Load angle relative to the weld axis (degrees, 0–90)
    pub load_angle_deg: f64,

    /// Applied force P (kN)
    pub force_kn: f64,

    /// Applied moment M (kN·m, ≥ 0)
    pub moment_knm: f64,
}

impl WeldedInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.weld_type == WeldType::Fillet && self.weld_size_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "weld_size_mm",
                self.weld_size_mm.to_string(),
                "Fillet weld size must be positive",
            ));
        }
        if self.weld_length_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "weld_length_mm",
                self.weld_length_mm.to_string(),
                "Weld length must be positive",
            ));
        }
        if self.plate_thickness_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "plate_thickness_mm",
                self.plate_thickness_mm.to_string(),
                "Plate thickness must be positive",
            ));
        }
        if !(0.0..=90.0).contains(&self.load_angle_deg) {
            return Err(CalcError::invalid_input(
                "load_angle_deg",
                self.load_angle_deg.to_string(),
                "Load angle must be between 0 and 90 degrees",
            ));
        }
        if self.force_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "force_kn",
                self.force_kn.to_string(),
                "Load cannot be negative",
            ));
        }
        if self.moment_knm < 0.0 {
            return Err(CalcError::invalid_input(
                "moment_knm",
                self.moment_knm.to_string(),
                "Moment cannot be negative",
            ));
        }
        Ok(())
    }
}

/// One sampled point of the stress distribution along the weld
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressSample {
    /// Position along the weld (mm)
    pub x_mm: f64,
    /// Uniform direct stress P/A (MPa)
    pub direct_mpa: f64,
    /// Linear bending stress M·(x − L/2)/S (MPa)
    pub bending_mpa: f64,
    /// Sum of the two (MPa)
    pub total_mpa: f64,
}

/// Results from a welded connection calculation.
///
/// Capacities in kN, stresses in MPa, areas in mm², moduli in mm³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeldedResult {
    /// Weld type the calculation branched on
    pub weld_type: WeldType,

    /// Weld length (mm), carried for the stress profile
    pub weld_length_mm: f64,

    /// Effective throat 0.707·w (mm); fillet welds only
    pub throat_thickness_mm: Option<f64>,

    /// Effective weld area (mm²)
    pub effective_area_mm2: f64,

    /// Nominal strength basis (MPa): Fnw for fillet, Fy for complete penetration
    pub nominal_strength_mpa: f64,

    /// Design capacity before the angle adjustment (kN)
    pub base_capacity_kn: f64,

    /// Load-angle factor sqrt(sin²θ + (0.5·cosθ)²); 1.0 for complete penetration
    pub angle_factor: f64,

    /// Angle-adjusted design capacity (kN)
    pub adjusted_capacity_kn: f64,

    /// Elastic section modulus of the weld line (mm³)
    pub section_modulus_mm3: f64,

    /// Allowable stress for the moment check (MPa)
    pub allowable_stress_mpa: f64,

    /// Extreme-fiber bending stress from the applied moment (MPa)
    pub moment_stress_mpa: f64,

    /// Force utilization P / adjusted capacity
    pub force_check: UtilizationCheck,

    /// Moment utilization; exactly 0 when no moment is applied
    pub moment_check: UtilizationCheck,

    /// SRSS combination of force and moment ratios
    pub combined_check: UtilizationCheck,
}

impl WeldedResult {
    /// Check if all design checks pass
    pub fn passes(&self) -> bool {
        self.force_check.passes && self.moment_check.passes && self.combined_check.passes
    }

    /// Name of the check with the highest utilization
    pub fn governing_condition(&self) -> &'static str {
        let mut name = "force";
        let mut max = self.force_check.ratio;
        if self.moment_check.ratio > max {
            name = "moment";
            max = self.moment_check.ratio;
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
                name: "force",
                check: self.force_check,
            },
            NamedCheck {
                name: "moment",
                check: self.moment_check,
            },
            NamedCheck {
                name: "combined",
                check: self.combined_check,
            },
        ]
    }

    /// All computed quantities, by name, for presentation
    pub fn quantities(&self) -> Vec<NamedQuantity> {
        let mut q = Vec::new();
        if let Some(throat) = self.throat_thickness_mm {
            q.push(NamedQuantity {
                name: "throat_thickness",
                value: throat,
                unit: "mm",
            });
        }
        q.extend([
            NamedQuantity {
                name: "effective_area",
                value: self.effective_area_mm2,
                unit: "mm²",
            },
            NamedQuantity {
                name: "nominal_strength",
                value: self.nominal_strength_mpa,
                unit: "MPa",
            },
            NamedQuantity {
                name: "base_capacity",
                value: self.base_capacity_kn,
                unit: "kN",
            },
            NamedQuantity {
                name: "angle_factor",
                value: self.angle_factor,
                unit: "",
            },
            NamedQuantity {
                name: "adjusted_capacity",
                value: self.adjusted_capacity_kn,
                unit: "kN",
            },
            NamedQuantity {
                name: "section_modulus",
                value: self.section_modulus_mm3,
                unit: "mm³",
            },
            NamedQuantity {
                name: "allowable_stress",
                value: self.allowable_stress_mpa,
                unit: "MPa",
            },
            NamedQuantity {
                name: "moment_stress",
                value: self.moment_stress_mpa,
                unit: "MPa",
            },
        ]);
        q
    }

    /// Sample the stress distribution along the weld for the applied loads,
    /// for the presentation layer's distribution chart. Direct stress is
    /// uniform; bending stress varies linearly about mid-length.
    pub fn stress_profile(
        &self,
        force_kn: f64,
        moment_knm: f64,
        n_points: usize,
    ) -> Vec<StressSample> {
        let n = n_points.max(2);
        let length = self.weld_length_mm;
        let direct_mpa = force_kn * 1000.0 / self.effective_area_mm2;

        (0..n)
            .map(|i| {
                let x_mm = length * i as f64 / (n - 1) as f64;
                let bending_mpa = if moment_knm > 0.0 {
                    KilonewtonMeters(moment_knm).to_kn_mm() * (x_mm - length / 2.0)
                        / self.section_modulus_mm3
                } else {
                    0.0
                };
                StressSample {
                    x_mm,
                    direct_mpa,
                    bending_mpa,
                    total_mpa: direct_mpa + bending_mpa,
                }
            })
            .collect()
    }
}

/// Calculate welded connection capacity and utilization.
///
/// # Arguments
///
/// * `input` - Connection parameters
///
/// # Returns
///
/// * `Ok(WeldedResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid or a derived area or section
///   modulus is non-positive
pub fn calculate(input: &WeldedInput) -> CalcResult<WeldedResult> {
    input.validate()?;

    let steel = input.steel_grade.properties();

    // Branch once on the weld type; everything downstream uses these
    let (throat_thickness_mm, effective_area, nominal_strength_mpa, allowable_stress_mpa) =
        match input.weld_type {
            WeldType::Fillet => {
                let throat = THROAT_FACTOR * input.weld_size_mm;
                let area = Millimeters(throat) * Millimeters(input.weld_length_mm);
                let fnw = WELD_SHEAR_FRACTION * input.electrode.fexx_mpa();
                (Some(throat), area, fnw, PHI_FRACTURE * fnw)
            }
            WeldType::CompletePenetration => {
                let area =
                    Millimeters(input.plate_thickness_mm) * Millimeters(input.weld_length_mm);
                (None, area, steel.fy_mpa, PHI_YIELD * steel.fy_mpa)
            }
        };

    if effective_area.0 <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "effective_area_mm2",
            effective_area.0,
            "Effective weld area must be positive",
        ));
    }

    let (base_capacity, angle_factor, adjusted_capacity_kn) = match input.weld_type {
        WeldType::Fillet => {
            let base = Megapascals(PHI_FRACTURE * nominal_strength_mpa) * effective_area;
            let theta = Degrees(input.load_angle_deg).radians();
            let factor = combine_srss(theta.sin(), 0.5 * theta.cos());
            let adjusted = if factor > 0.0 { base.0 / factor } else { base.0 };
            (base, factor, adjusted)
        }
        WeldType::CompletePenetration => {
            // Matched to the base metal, isotropic: no angle adjustment
            let base = Megapascals(PHI_YIELD * steel.fy_mpa) * effective_area;
            (base, 1.0, base.0)
        }
    };

    if adjusted_capacity_kn <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "adjusted_capacity_kn",
            adjusted_capacity_kn,
            "Weld capacity must be positive",
        ));
    }

    // Elastic section modulus of the weld line, S = t·L²/6
    let thickness_mm = throat_thickness_mm.unwrap_or(input.plate_thickness_mm);
    let section_modulus_mm3 = thickness_mm * input.weld_length_mm * input.weld_length_mm / 6.0;

    let (moment_stress_mpa, moment_ratio) = if input.moment_knm > 0.0 {
        if section_modulus_mm3 <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "section_modulus_mm3",
                section_modulus_mm3,
                "Section modulus must be positive to check the applied moment",
            ));
        }
        let stress = KilonewtonMeters(input.moment_knm).to_kn_mm() / section_modulus_mm3;
        (stress, stress / allowable_stress_mpa)
    } else {
        (0.0, 0.0)
    };

    let force_ratio = input.force_kn / adjusted_capacity_kn;

    Ok(WeldedResult {
        weld_type: input.weld_type,
        weld_length_mm: input.weld_length_mm,
        throat_thickness_mm,
        effective_area_mm2: effective_area.0,
        nominal_strength_mpa,
        base_capacity_kn: base_capacity.0,
        angle_factor,
        adjusted_capacity_kn,
        section_modulus_mm3,
        allowable_stress_mpa,
        moment_stress_mpa,
        force_check: UtilizationCheck::new(force_ratio),
        moment_check: UtilizationCheck::new(moment_ratio),
        combined_check: UtilizationCheck::new(combine_srss(force_ratio, moment_ratio)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fillet_connection() -> WeldedInput {
        WeldedInput {
            label: "Test Fillet".to_string(),
            steel_grade: SteelGrade::A36,
            weld_type: WeldType::Fillet,
            electrode: Electrode::E70XX,
            weld_size_mm: 6.0,
            weld_length_mm: 200.0,
            plate_thickness_mm: 12.0,
            load_angle_deg: 0.0,
            force_kn: 100.0,
            moment_knm: 0.0,
        }
    }

    fn cp_connection() -> WeldedInput {
        WeldedInput {
            weld_type: WeldType::CompletePenetration,
            label: "Test CJP".to_string(),
            ..fillet_connection()
        }
    }

    #[test]
    fn test_reference_fillet() {
        // 6 mm fillet × 200 mm, E70XX, longitudinal load of 100 kN
        let result = calculate(&fillet_connection()).unwrap();

        // Throat = 0.707·6 = 4.242 mm; Aeff = 848.4 mm²
        assert!((result.throat_thickness_mm.unwrap() - 4.242).abs() < 1e-9);
        assert!((result.effective_area_mm2 - 848.4).abs() < 1e-9);

        // Fnw = 0.6·485 = 291 MPa; base = 0.75·291·848.4/1000 ≈ 185.2 kN
        assert_eq!(result.nominal_strength_mpa, 291.0);
        assert!((result.base_capacity_kn - 185.16).abs() < 0.05);

        // At 0°: factor = sqrt(0 + 0.25) = 0.5, adjusted ≈ 370.3 kN
        assert!((result.angle_factor - 0.5).abs() < 1e-12);
        assert!((result.adjusted_capacity_kn - 370.33).abs() < 0.05);

        // Force utilization ≈ 0.27, passes
        assert!((result.force_check.ratio - 0.270).abs() < 0.001);
        assert!(result.passes());
    }

    #[test]
    fn test_fillet_angle_factor_at_90() {
        let mut input = fillet_connection();
        input.load_angle_deg = 90.0;
        let result = calculate(&input).unwrap();

        // sqrt(1 + 0) = 1: adjusted equals base
        assert!((result.angle_factor - 1.0).abs() < 1e-12);
        assert!((result.adjusted_capacity_kn - result.base_capacity_kn).abs() < 1e-9);
    }

    #[test]
    fn test_complete_penetration_capacity() {
        // 12 mm plate × 200 mm, A36: 0.9·250·2400/1000 = 540 kN
        let result = calculate(&cp_connection()).unwrap();

        assert_eq!(result.throat_thickness_mm, None);
        assert!((result.effective_area_mm2 - 2400.0).abs() < 1e-9);
        assert!((result.base_capacity_kn - 540.0).abs() < 1e-9);
        assert_eq!(result.angle_factor, 1.0);
        assert_eq!(result.adjusted_capacity_kn, result.base_capacity_kn);
        assert_eq!(result.allowable_stress_mpa, 225.0);
    }

    #[test]
    fn test_zero_moment_has_zero_ratio() {
        // The moment check must still be reported, with ratio exactly 0
        let result = calculate(&cp_connection()).unwrap();

        assert_eq!(result.moment_check.ratio, 0.0);
        assert!(result.moment_check.passes);
        assert_eq!(result.moment_stress_mpa, 0.0);
        assert_eq!(result.checks().len(), 3);
    }

    #[test]
    fn test_moment_check() {
        let mut input = cp_connection();
        input.moment_knm = 20.0;
        let result = calculate(&input).unwrap();

        // S = 12·200²/6 = 80 000 mm³; stress = 20·1000/80 000 = 0.25
        assert!((result.section_modulus_mm3 - 80_000.0).abs() < 1e-9);
        assert!((result.moment_stress_mpa - 0.25).abs() < 1e-12);
        assert!(result.moment_check.ratio > 0.0);
        assert!(
            result.combined_check.ratio
                >= result.force_check.ratio.max(result.moment_check.ratio)
        );
    }

    #[test]
    fn test_deterministic() {
        let input = fillet_connection();
        assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = fillet_connection();
        input.weld_size_mm = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = fillet_connection();
        input.load_angle_deg = 120.0;
        assert!(calculate(&input).is_err());

        let mut input = fillet_connection();
        input.moment_knm = -1.0;
        assert!(calculate(&input).is_err());

        // CJP ignores the (irrelevant) weld size
        let mut input = cp_connection();
        input.weld_size_mm = 0.0;
        assert!(calculate(&input).is_ok());
    }

    #[test]
    fn test_stress_profile() {
        let mut input = cp_connection();
        input.moment_knm = 20.0;
        let result = calculate(&input).unwrap();
        let profile = result.stress_profile(input.force_kn, input.moment_knm, 5);

        assert_eq!(profile.len(), 5);
        assert_eq!(profile[0].x_mm, 0.0);
        assert_eq!(profile[4].x_mm, 200.0);

        // Direct stress uniform: 100·1000/2400 ≈ 41.67 MPa
        for sample in &profile {
            assert!((sample.direct_mpa - 41.6667).abs() < 0.001);
        }

        // Bending antisymmetric about mid-length
        assert!((profile[2].bending_mpa).abs() < 1e-9);
        assert!((profile[0].bending_mpa + profile[4].bending_mpa).abs() < 1e-9);
        assert!(profile[4].total_mpa > profile[0].total_mpa);
    }

    #[test]
    fn test_serialization() {
        let input = fillet_connection();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: WeldedInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: WeldedResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
