//! # Unit Types
//!
//! Type-safe wrappers for the engineering units used by the connection
//! calculators. These provide compile-time safety against unit confusion
//! while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The connection calculators use a small, fixed set of SI units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (fixed by contract)
//!
//! - Length: millimeters (mm); areas mm², section moduli mm³
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-meters (kN·m)
//! - Stress: megapascals (MPa = N/mm²)
//! - Angle: degrees (load angle relative to the weld axis)
//!
//! ## Example
//!
//! ```rust
//! use conn_core::units::{Megapascals, SquareMillimeters, Kilonewtons};
//!
//! // 1 MPa over 1000 mm² is 1 kN
//! let force: Kilonewtons = Megapascals(400.0) * SquareMillimeters(1344.0);
//! assert!((force.0 - 537.6).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

// ============================================================================
// Length and Area
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

impl Mul<Millimeters> for Millimeters {
    type Output = SquareMillimeters;

    fn mul(self, rhs: Millimeters) -> SquareMillimeters {
        SquareMillimeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Force and Moment
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

impl KilonewtonMeters {
    /// Convert to kilonewton-millimeters (for MPa/mm³ stress arithmetic)
    pub fn to_kn_mm(self) -> f64 {
        self.0 * 1000.0
    }
}

// ============================================================================
// Stress
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Stress times area gives force: MPa · mm² = N, scaled to kN
impl Mul<SquareMillimeters> for Megapascals {
    type Output = Kilonewtons;

    fn mul(self, area: SquareMillimeters) -> Kilonewtons {
        Kilonewtons(self.0 * area.0 / 1000.0)
    }
}

// ============================================================================
// Angle
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_from_lengths() {
        let area = Millimeters(12.0) * Millimeters(200.0);
        assert_eq!(area, SquareMillimeters(2400.0));
    }

    #[test]
    fn test_stress_times_area() {
        // 620 MPa over 314.16 mm² ≈ 194.8 kN
        let force = Megapascals(620.0) * SquareMillimeters(314.16);
        assert!((force.0 - 194.779).abs() < 0.01);
    }

    #[test]
    fn test_moment_conversion() {
        assert_eq!(KilonewtonMeters(2.5).to_kn_mm(), 2500.0);
    }

    #[test]
    fn test_degrees_to_radians() {
        assert!((Degrees(90.0).radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(Degrees(0.0).radians(), 0.0);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let json = serde_json::to_string(&Kilonewtons(100.0)).unwrap();
        assert_eq!(json, "100.0");
        let parsed: Kilonewtons = serde_json::from_str("42.5").unwrap();
        assert_eq!(parsed, Kilonewtons(42.5));
    }
}
