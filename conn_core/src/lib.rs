//! # conn_core - Steel Connection Capacity Engine
//!
//! `conn_core` computes the design capacity and utilization of bolted and
//! welded structural steel connections following resistance-factor (LRFD)
//! rules in the manner of AISC 360 and AWS D1.1. All inputs and outputs are
//! JSON-serializable, so results feed directly into terminal, GUI, or API
//! presentation layers.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Fixed Units**: millimeters, kilonewtons, kilonewton-meters, megapascals
//!
//! Resistance factors (φ = 0.75 for bolts and welds, 0.9 for gross-section
//! yielding) are engine constants, never user inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use conn_core::{evaluate_bolted_connection, BoltedInput};
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
//! let result = evaluate_bolted_connection(&input)?;
//! assert!(result.passes());
//! # Ok::<(), conn_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The bolted and welded connection calculators
//! - [`materials`] - Fixed catalogs for steel, bolt, and electrode grades
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    BoltedInput, BoltedResult, ConnectionItem, ConnectionResult, UtilizationCheck, WeldType,
    WeldedInput, WeldedResult,
};
pub use errors::{CalcError, CalcResult};

/// Evaluate a bolted connection. See [`calculations::bolted`] for the checks
/// performed.
pub fn evaluate_bolted_connection(input: &BoltedInput) -> CalcResult<BoltedResult> {
    calculations::bolted::calculate(input)
}

/// Evaluate a welded connection. See [`calculations::welded`] for the checks
/// performed.
pub fn evaluate_welded_connection(input: &WeldedInput) -> CalcResult<WeldedResult> {
    calculations::welded::calculate(input)
}
