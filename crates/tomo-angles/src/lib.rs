//! `tomo-angles` — wave-plate angle tables for polarization tomography.
//!
//! Each measurement projection is realized by rotating a half-wave plate
//! (HWP) and a quarter-wave plate (QWP). This crate holds the fixed tables
//! of those rotations, in degrees, for downstream code that drives the
//! plates or builds measurement orderings from them.
//!
//! # Schemes
//!
//! | Scheme | Rows | Labels |
//! |--------|------|--------|
//! | [`Scheme::SixProjection`] (default) | 6 | H, V, D, A, R, L |
//! | [`Scheme::ThreeBasis`] | 3 | H/V, D/A, R/L |
//!
//! The tables are `const` data. [`AngleTable`] is a read-only `Copy` handle
//! over them; no API mutates a table.
//!
//! # Example
//!
//! ```rust
//! use tomo_angles::{get_table, get_table_by_name, Projection};
//!
//! let table = get_table();
//! assert_eq!(table.len(), 6);
//! assert_eq!(table.get(Projection::D.index()).unwrap().as_pair(), (22.5, 0.0));
//!
//! let bases = get_table_by_name("three-basis").unwrap();
//! assert_eq!(bases.to_rows(), vec![[0.0, 0.0], [22.5, 0.0], [0.0, 45.0]]);
//!
//! assert!(get_table_by_name("four-basis").is_err());
//! ```

pub mod angle;
pub mod config;
pub mod error;
pub mod projection;
pub mod scheme;
pub mod table;

pub use angle::WavePlateAngles;
pub use config::TomographyConfig;
pub use error::{AngleError, AngleResult};
pub use projection::{BasisPair, Projection};
pub use scheme::Scheme;
pub use table::{
    AngleTable, SIX_PROJECTION_ANGLES, THREE_BASIS_ANGLES, get_table, get_table_by_name,
    get_table_for,
};
