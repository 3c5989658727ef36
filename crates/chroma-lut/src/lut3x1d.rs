//! 3x1D lookup table: three independent per-channel curves.

use crate::domain::Domain3;
use crate::interp::{position_explicit3, position_in_range, sample_column};
use crate::{LutError, LutResult};

/// A 3x1D lookup table.
///
/// Stores an independent transfer function per colour channel, sampled at
/// the same positions. This is the natural in-memory form of 1D `.cube`
/// files, whose data rows always carry three values.
///
/// # Example
///
/// ```rust
/// use chroma_lut::Lut3x1D;
///
/// let lut = Lut3x1D::identity(1024).unwrap();
/// let out = lut.apply([0.5, 0.3, 0.2]);
/// assert!((out[0] - 0.5).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3x1D {
    /// Display name, written as the TITLE by text formats.
    pub name: String,
    /// LUT entries, one row of R, G, B outputs per sample.
    pub table: Vec<[f32; 3]>,
    /// Input domain.
    pub domain: Domain3,
    /// Free-text comments, preserved by format round-trips.
    pub comments: Vec<String>,
}

impl Lut3x1D {
    /// Creates an identity (pass-through) 3x1D LUT over the unit domain.
    pub fn identity(size: usize) -> LutResult<Self> {
        Self::linear_table(size, &Domain3::default())
    }

    /// Creates an evenly spaced identity table over the given domain.
    ///
    /// With an implicit domain, row `i` holds
    /// `min + i / (size - 1) * (max - min)` per channel. With an explicit
    /// domain, the breakpoint rows themselves form the table and `size` is
    /// ignored.
    pub fn linear_table(size: usize, domain: &Domain3) -> LutResult<Self> {
        let (table, size) = match domain {
            Domain3::Range { min, max } => {
                if size < 2 {
                    return Err(LutError::InvalidSize(format!(
                        "LUT size must be at least 2, got {size}"
                    )));
                }
                let table = (0..size)
                    .map(|i| {
                        let t = i as f32 / (size - 1) as f32;
                        [
                            min[0] + t * (max[0] - min[0]),
                            min[1] + t * (max[1] - min[1]),
                            min[2] + t * (max[2] - min[2]),
                        ]
                    })
                    .collect();
                (table, size)
            }
            Domain3::Explicit(rows) => {
                if rows.len() < 2 {
                    return Err(LutError::InvalidSize(format!(
                        "explicit domain must have at least 2 rows, got {}",
                        rows.len()
                    )));
                }
                (rows.clone(), rows.len())
            }
        };
        Ok(Self {
            name: format!("Unity {size}"),
            table,
            domain: domain.clone(),
            comments: Vec::new(),
        })
    }

    /// Creates a LUT from raw table rows.
    pub fn from_table(table: Vec<[f32; 3]>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table,
            domain: Domain3::default(),
            comments: Vec::new(),
        }
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, domain: Domain3) -> Self {
        self.domain = domain;
        self
    }

    /// Sets the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Returns the number of rows in the LUT.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the domain is an explicit per-sample breakpoint list.
    #[inline]
    pub fn is_domain_explicit(&self) -> bool {
        self.domain.is_explicit()
    }

    /// Applies the LUT to an RGB triplet, one curve per channel.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for (channel, slot) in out.iter_mut().enumerate() {
            let t = match &self.domain {
                Domain3::Range { min, max } => {
                    position_in_range(min[channel], max[channel], rgb[channel])
                }
                Domain3::Explicit(rows) => position_explicit3(rows, channel, rgb[channel]),
            };
            *slot = sample_column(&self.table, channel, t);
        }
        out
    }

    /// Applies a transfer function to every table entry in place.
    pub fn map<F: Fn(f32) -> f32>(&mut self, f: F) {
        for row in &mut self.table {
            for value in row {
                *value = f(*value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_passthrough() {
        let lut = Lut3x1D::identity(256).unwrap();
        let out = lut.apply([0.5, 0.3, 0.8]);
        assert!((out[0] - 0.5).abs() < 0.01);
        assert!((out[1] - 0.3).abs() < 0.01);
        assert!((out[2] - 0.8).abs() < 0.01);
    }

    #[test]
    fn linear_table_per_channel_domain() {
        let domain = Domain3::Range {
            min: [0.0, 0.0, 0.0],
            max: [1.0, 2.0, 3.0],
        };
        let lut = Lut3x1D::linear_table(3, &domain).unwrap();
        assert_eq!(lut.table[1], [0.5, 1.0, 1.5]);
        assert_eq!(lut.table[2], [1.0, 2.0, 3.0]);
        // Identity over its own domain
        let out = lut.apply([0.5, 1.0, 1.5]);
        assert!((out[0] - 0.5).abs() < 1e-6);
        assert!((out[1] - 1.0).abs() < 1e-6);
        assert!((out[2] - 1.5).abs() < 1e-6);
    }

    #[test]
    fn linear_table_explicit_domain_uses_breakpoints() {
        let rows = vec![[0.0; 3], [0.25, 0.5, 0.75], [1.0; 3]];
        let domain = Domain3::Explicit(rows.clone());
        let lut = Lut3x1D::linear_table(16, &domain).unwrap();
        assert_eq!(lut.table, rows);
        assert_eq!(lut.size(), 3);
    }

    #[test]
    fn rejects_degenerate_size() {
        assert!(Lut3x1D::identity(1).is_err());
        assert!(Lut3x1D::linear_table(0, &Domain3::default()).is_err());
    }

    #[test]
    fn map_applies_to_all_channels() {
        let mut lut = Lut3x1D::identity(2).unwrap();
        lut.map(|v| v + 1.0);
        assert_eq!(lut.table, vec![[1.0; 3], [2.0; 3]]);
    }
}
