//! # chroma-lut
//!
//! Look-Up Table (LUT) types and Iridas .cube I/O for colour pipelines.
//!
//! This crate provides the in-memory data model for 1D, 3x1D and 3D LUTs,
//! composition into sequences, and reading/writing of the Iridas `.cube`
//! interchange format.
//!
//! # LUT Types
//!
//! - [`Lut1D`] - one curve shared by all channels
//! - [`Lut3x1D`] - independent per-channel curves
//! - [`Lut3D`] - full RGB cube
//! - [`LutSequence`] - ordered list of LUTs applied front to back
//! - [`Lut`] - the closed set of table kinds used at codec seams
//!
//! # Usage
//!
//! ```rust
//! use chroma_lut::{Lut1D, Lut3D};
//!
//! // Create a 1D gamma curve
//! let mut curve = Lut1D::identity(1024).unwrap();
//! curve.map(|v| v.powf(1.0 / 2.2));
//! let output = curve.apply(0.5);
//!
//! // Create a 3D identity cube
//! let cube = Lut3D::identity(33).unwrap();
//! let rgb = cube.apply([0.5, 0.3, 0.2]);
//! ```
//!
//! # File I/O
//!
//! The [`iridas_cube`] module reads and writes `.cube` files. 1D files
//! load as [`Lut3x1D`], 3D files as [`Lut3D`]; titles, comments and
//! non-default domains survive round-trips.
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Diagnostics
//!
//! # Used By
//!
//! - `chroma-cli` - LUT tooling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod domain;
mod error;
mod interp;
mod lut;
mod lut1d;
mod lut3d;
mod lut3x1d;
mod sequence;
pub mod iridas_cube;

pub use domain::{Domain1, Domain3};
pub use error::{LutError, LutResult};
pub use interp::Interpolation;
pub use lut::Lut;
pub use lut1d::Lut1D;
pub use lut3d::Lut3D;
pub use lut3x1d::Lut3x1D;
pub use sequence::LutSequence;
pub use iridas_cube::{read_cube, write_cube, write_cube_sequence, write_cube_with_decimals};
