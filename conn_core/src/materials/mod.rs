//! # Material Catalogs
//!
//! Fixed lookup tables for the materials the connection calculators know
//! about: plate steel grades, high-strength bolt grades and diameters, and
//! weld electrode classifications.
//!
//! Catalogs are closed sets modeled as enums; name resolution goes through
//! process-wide tables built once and fails with
//! [`CalcError::UnknownGrade`](crate::errors::CalcError) for anything
//! outside the set.
//!
//! ## Example
//!
//! ```rust
//! use conn_core::materials::{SteelGrade, BoltGrade, Electrode};
//!
//! let steel = SteelGrade::from_str_flexible("A36")?;
//! assert_eq!(steel.properties().fu_mpa, 400.0);
//!
//! let bolt = BoltGrade::from_str_flexible("A325")?;
//! assert_eq!(bolt.properties().fnt_mpa, 620.0);
//!
//! let electrode = Electrode::from_str_flexible("E70XX")?;
//! assert_eq!(electrode.fexx_mpa(), 485.0);
//! # Ok::<(), conn_core::errors::CalcError>(())
//! ```

pub mod bolts;
pub mod electrodes;
pub mod steel;

// Re-export catalog types
pub use bolts::{BoltDiameter, BoltGrade, BoltProperties};
pub use electrodes::Electrode;
pub use steel::{SteelGrade, SteelProperties};
