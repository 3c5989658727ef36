//! # chroma-colorimetry
//!
//! Closed-form colorimetry formulas: blackbody radiation spectra and
//! lightness approximations.
//!
//! # Modules
//!
//! - [`blackbody`] - Planck's law, the Rayleigh-Jeans approximation and
//!   sampled spectral distributions
//! - [`lightness`] - lightness-from-luminance methods
//! - [`spectrum`] - spectral sampling shapes and distributions
//!
//! # Usage
//!
//! ```rust
//! use chroma_colorimetry::{blackbody, SpectralShape};
//!
//! // Spectral radiance of a 5500 K radiator at 500 nm
//! let radiance = blackbody::planck_law(500.0e-9, 5500.0);
//!
//! // Full visible-range distribution
//! let sd = blackbody::sd_blackbody(5500.0, SpectralShape::VISIBLE);
//! ```
//!
//! # Used By
//!
//! - `chroma-cli` - spectral printouts

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blackbody;
pub mod lightness;
pub mod spectrum;

pub use blackbody::{planck_law, rayleigh_jeans_law, sd_blackbody, sd_rayleigh_jeans};
pub use lightness::{lightness_cie1976, lightness_glasser1958, lightness_wyszecki1963};
pub use spectrum::{SpectralDistribution, SpectralShape};
