//! 1-dimensional lookup table.
//!
//! A 1D LUT stores a single discrete transfer function, applied identically
//! to every colour channel. Common uses include:
//! - Gamma correction
//! - Log-to-linear conversion
//! - Contrast curves

use crate::domain::{Domain1, Domain3};
use crate::interp::{position_explicit, position_in_range, sample_channel};
use crate::lut3x1d::Lut3x1D;
use crate::{LutError, LutResult};

/// A 1-dimensional lookup table.
///
/// Stores one discrete transfer function that maps input values to output
/// values. Sampling uses linear interpolation between entries; inputs are
/// normalized against the [`Domain1`] first.
///
/// # Example
///
/// ```rust
/// use chroma_lut::Lut1D;
///
/// let lut = Lut1D::identity(256).unwrap();
/// assert!((lut.apply(0.5) - 0.5).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut1D {
    /// Display name, written as the TITLE by text formats.
    pub name: String,
    /// LUT entries.
    pub table: Vec<f32>,
    /// Input domain.
    pub domain: Domain1,
    /// Free-text comments, preserved by format round-trips.
    pub comments: Vec<String>,
}

impl Lut1D {
    /// Creates an identity (pass-through) 1D LUT over the [0, 1] domain.
    pub fn identity(size: usize) -> LutResult<Self> {
        Self::linear_table(size, 0.0, 1.0)
    }

    /// Creates an evenly spaced identity table over the [min, max] domain.
    ///
    /// Entry `i` holds `min + i / (size - 1) * (max - min)`.
    pub fn linear_table(size: usize, min: f32, max: f32) -> LutResult<Self> {
        if size < 2 {
            return Err(LutError::InvalidSize(format!(
                "LUT size must be at least 2, got {size}"
            )));
        }
        let table = (0..size)
            .map(|i| min + i as f32 / (size - 1) as f32 * (max - min))
            .collect();
        Ok(Self {
            name: format!("Unity {size}"),
            table,
            domain: Domain1::Range { min, max },
            comments: Vec::new(),
        })
    }

    /// Creates a LUT from raw table entries.
    pub fn from_table(table: Vec<f32>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table,
            domain: Domain1::default(),
            comments: Vec::new(),
        }
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, domain: Domain1) -> Self {
        self.domain = domain;
        self
    }

    /// Sets the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Returns the number of entries in the LUT.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the domain is an explicit per-sample breakpoint list.
    #[inline]
    pub fn is_domain_explicit(&self) -> bool {
        self.domain.is_explicit()
    }

    /// Applies the LUT to a single value using linear interpolation.
    pub fn apply(&self, value: f32) -> f32 {
        let t = match &self.domain {
            Domain1::Range { min, max } => position_in_range(*min, *max, value),
            Domain1::Explicit(breakpoints) => position_explicit(breakpoints, value),
        };
        sample_channel(&self.table, t)
    }

    /// Applies a transfer function to every table entry in place.
    pub fn map<F: Fn(f32) -> f32>(&mut self, f: F) {
        for value in &mut self.table {
            *value = f(*value);
        }
    }

    /// Converts to a 3x1D LUT by replicating the curve across R, G and B.
    pub fn to_3x1d(&self) -> Lut3x1D {
        let table = self.table.iter().map(|&v| [v, v, v]).collect();
        let domain = match &self.domain {
            Domain1::Range { min, max } => Domain3::Range {
                min: [*min; 3],
                max: [*max; 3],
            },
            Domain1::Explicit(breakpoints) => {
                Domain3::Explicit(breakpoints.iter().map(|&v| [v, v, v]).collect())
            }
        };
        Lut3x1D {
            name: self.name.clone(),
            table,
            domain,
            comments: self.comments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_passthrough() {
        let lut = Lut1D::identity(256).unwrap();
        assert!((lut.apply(0.0) - 0.0).abs() < 0.01);
        assert!((lut.apply(0.5) - 0.5).abs() < 0.01);
        assert!((lut.apply(1.0) - 1.0).abs() < 0.01);
    }

    #[test]
    fn linear_table_spans_domain() {
        let lut = Lut1D::linear_table(3, -1.0, 1.0).unwrap();
        assert_eq!(lut.table, vec![-1.0, 0.0, 1.0]);
        assert_eq!(lut.domain, Domain1::Range { min: -1.0, max: 1.0 });
        // Identity over its own domain
        assert!((lut.apply(-1.0) - -1.0).abs() < 1e-6);
        assert!((lut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rejects_degenerate_size() {
        assert!(Lut1D::linear_table(1, 0.0, 1.0).is_err());
        assert!(Lut1D::identity(0).is_err());
    }

    #[test]
    fn map_applies_per_entry() {
        let mut lut = Lut1D::identity(3).unwrap();
        lut.map(|v| v * v);
        assert_eq!(lut.table, vec![0.0, 0.25, 1.0]);
    }

    #[test]
    fn conversion_replicates_channels() {
        let mut lut = Lut1D::identity(3).unwrap();
        lut.map(|v| v * 2.0);
        let rgb = lut.to_3x1d();
        assert_eq!(rgb.table, vec![[0.0; 3], [1.0; 3], [2.0; 3]]);
        assert_eq!(rgb.name, lut.name);
    }

    #[test]
    fn explicit_domain_lookup() {
        let lut = Lut1D::from_table(vec![0.0, 10.0, 20.0], "Shaper")
            .with_domain(Domain1::Explicit(vec![0.0, 0.1, 1.0]));
        assert!(lut.is_domain_explicit());
        // 0.1 sits on the middle breakpoint
        assert!((lut.apply(0.1) - 10.0).abs() < 1e-4);
        assert!((lut.apply(1.0) - 20.0).abs() < 1e-4);
    }
}
