//! # chroma-notation
//!
//! Munsell Renotation System value conversions.
//!
//! Converts luminance `Y` (on a [0, 100] scale) to Munsell value using
//! the published approximations, selected through
//! [`MunsellValueMethod`] or called directly.
//!
//! # Usage
//!
//! ```rust
//! use chroma_notation::{munsell_value, MunsellValueMethod};
//!
//! let value = munsell_value(12.23634268, MunsellValueMethod::AstmD1535);
//! assert!((value - 4.08).abs() < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod munsell;

pub use munsell::{
    luminance_astm_d1535, munsell_value, munsell_value_astm_d1535, munsell_value_ladd1955,
    munsell_value_mccamy1987, munsell_value_moon1943, munsell_value_munsell1933,
    munsell_value_priest1920, munsell_value_saunderson1944, MunsellValueMethod,
};
