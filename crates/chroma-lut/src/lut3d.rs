//! 3-dimensional lookup table.
//!
//! A 3D LUT maps RGB input to RGB output through a cube of colour values.
//! Common uses include:
//! - Colour grading / look development
//! - Display calibration
//! - Colour space conversion

use crate::domain::Domain3;
use crate::interp::{position_explicit3, position_in_range, Interpolation};
use crate::{LutError, LutResult};

/// A 3-dimensional lookup table.
///
/// Stores a `size`^3 grid of RGB output values indexed by input RGB.
/// Standard sizes are 17, 33 or 65.
///
/// # Storage
///
/// The grid is kept flat in `(r, g, b)` row-major order: the blue index
/// varies fastest in memory (`index = (r * size + g) * size + b`). Text
/// formats like Iridas .cube serialize the opposite way, red fastest; the
/// [`from_rows`](Lut3D::from_rows) / [`to_rows`](Lut3D::to_rows) pair
/// performs that reordering and is tested as an exact inverse.
///
/// # Example
///
/// ```rust
/// use chroma_lut::Lut3D;
///
/// let lut = Lut3D::identity(33).unwrap();
/// let out = lut.apply([0.5, 0.3, 0.2]);
/// assert!((out[0] - 0.5).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    /// Display name, written as the TITLE by text formats.
    pub name: String,
    /// Grid values, blue index fastest.
    pub table: Vec<[f32; 3]>,
    /// Grid size per dimension.
    pub size: usize,
    /// Input domain.
    pub domain: Domain3,
    /// Free-text comments, preserved by format round-trips.
    pub comments: Vec<String>,
    /// Interpolation method used by [`apply`](Lut3D::apply).
    pub interpolation: Interpolation,
}

impl Lut3D {
    /// Creates an identity (pass-through) 3D LUT over the unit domain.
    pub fn identity(size: usize) -> LutResult<Self> {
        Self::linear_table(size, &Domain3::default())
    }

    /// Creates an evenly spaced identity grid over the given domain.
    ///
    /// With an implicit domain, grid point `(r, g, b)` holds the
    /// per-channel lerp of the domain range. With an explicit domain, the
    /// breakpoint rows supply the per-axis sample positions and `size` is
    /// ignored.
    pub fn linear_table(size: usize, domain: &Domain3) -> LutResult<Self> {
        let mut table;
        let size = match domain {
            Domain3::Range { min, max } => {
                if size < 2 {
                    return Err(LutError::InvalidSize(format!(
                        "LUT size must be at least 2, got {size}"
                    )));
                }
                let n = (size - 1) as f32;
                table = Vec::with_capacity(size * size * size);
                for r in 0..size {
                    for g in 0..size {
                        for b in 0..size {
                            table.push([
                                min[0] + r as f32 / n * (max[0] - min[0]),
                                min[1] + g as f32 / n * (max[1] - min[1]),
                                min[2] + b as f32 / n * (max[2] - min[2]),
                            ]);
                        }
                    }
                }
                size
            }
            Domain3::Explicit(rows) => {
                if rows.len() < 2 {
                    return Err(LutError::InvalidSize(format!(
                        "explicit domain must have at least 2 rows, got {}",
                        rows.len()
                    )));
                }
                let size = rows.len();
                table = Vec::with_capacity(size * size * size);
                for r in 0..size {
                    for g in 0..size {
                        for b in 0..size {
                            table.push([rows[r][0], rows[g][1], rows[b][2]]);
                        }
                    }
                }
                size
            }
        };

        Ok(Self {
            name: format!("Unity {size}"),
            table,
            size,
            domain: domain.clone(),
            comments: Vec::new(),
            interpolation: Interpolation::Linear,
        })
    }

    /// Builds a cube from flat rows in file order.
    ///
    /// File order is the Iridas .cube convention: the red index varies
    /// fastest and the blue index slowest (`row = r + size * (g + size * b)`).
    /// [`to_rows`](Lut3D::to_rows) is the exact inverse.
    pub fn from_rows(
        rows: Vec<[f32; 3]>,
        size: usize,
        name: impl Into<String>,
    ) -> LutResult<Self> {
        if size < 2 {
            return Err(LutError::InvalidSize(format!(
                "LUT size must be at least 2, got {size}"
            )));
        }
        let expected = size * size * size;
        if rows.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} rows for size {}, got {}",
                expected,
                size,
                rows.len()
            )));
        }

        let mut table = vec![[0.0f32; 3]; expected];
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    let row = r + size * (g + size * b);
                    table[(r * size + g) * size + b] = rows[row];
                }
            }
        }

        Ok(Self {
            name: name.into(),
            table,
            size,
            domain: Domain3::default(),
            comments: Vec::new(),
            interpolation: Interpolation::Linear,
        })
    }

    /// Flattens the cube to rows in file order, red index fastest.
    ///
    /// Exact inverse of [`from_rows`](Lut3D::from_rows).
    pub fn to_rows(&self) -> Vec<[f32; 3]> {
        let size = self.size;
        let mut rows = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    rows.push(self.at(r, g, b));
                }
            }
        }
        rows
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

    /// Sets the interpolation method.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Returns the grid size per dimension.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total number of grid entries.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Returns true if the domain is an explicit per-sample breakpoint list.
    #[inline]
    pub fn is_domain_explicit(&self) -> bool {
        self.domain.is_explicit()
    }

    /// Flat index of grid point `(r, g, b)`; blue varies fastest.
    #[inline]
    fn index(&self, r: usize, g: usize, b: usize) -> usize {
        (r * self.size + g) * self.size + b
    }

    /// Gets the value at grid position `(r, g, b)`.
    #[inline]
    pub fn at(&self, r: usize, g: usize, b: usize) -> [f32; 3] {
        self.table[self.index(r, g, b)]
    }

    /// Applies the LUT to an RGB triplet.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        match self.interpolation {
            Interpolation::Nearest => self.apply_nearest(rgb),
            Interpolation::Linear => self.apply_trilinear(rgb),
            Interpolation::Tetrahedral => self.apply_tetrahedral(rgb),
        }
    }

    /// Applies a transfer function to every grid entry in place.
    pub fn map<F: Fn(f32) -> f32>(&mut self, f: F) {
        for entry in &mut self.table {
            for value in entry {
                *value = f(*value);
            }
        }
    }

    /// Normalizes input RGB to [0, 1] grid coordinates based on the domain.
    fn normalize(&self, rgb: [f32; 3]) -> (f32, f32, f32) {
        let coord = |channel: usize| match &self.domain {
            Domain3::Range { min, max } => {
                position_in_range(min[channel], max[channel], rgb[channel])
            }
            Domain3::Explicit(rows) => position_explicit3(rows, channel, rgb[channel]),
        };
        (coord(0), coord(1), coord(2))
    }

    /// Nearest-neighbor lookup (no interpolation).
    fn apply_nearest(&self, rgb: [f32; 3]) -> [f32; 3] {
        let (r, g, b) = self.normalize(rgb);
        let n = (self.size - 1) as f32;
        let ri = ((r * n).round() as usize).min(self.size - 1);
        let gi = ((g * n).round() as usize).min(self.size - 1);
        let bi = ((b * n).round() as usize).min(self.size - 1);
        self.at(ri, gi, bi)
    }

    /// Trilinear interpolation.
    fn apply_trilinear(&self, rgb: [f32; 3]) -> [f32; 3] {
        let (r, g, b) = self.normalize(rgb);
        let n = (self.size - 1) as f32;

        let ri = ((r * n).floor() as usize).min(self.size - 2);
        let gi = ((g * n).floor() as usize).min(self.size - 2);
        let bi = ((b * n).floor() as usize).min(self.size - 2);

        let rf = r * n - ri as f32;
        let gf = g * n - gi as f32;
        let bf = b * n - bi as f32;

        let c000 = self.at(ri, gi, bi);
        let c100 = self.at(ri + 1, gi, bi);
        let c010 = self.at(ri, gi + 1, bi);
        let c110 = self.at(ri + 1, gi + 1, bi);
        let c001 = self.at(ri, gi, bi + 1);
        let c101 = self.at(ri + 1, gi, bi + 1);
        let c011 = self.at(ri, gi + 1, bi + 1);
        let c111 = self.at(ri + 1, gi + 1, bi + 1);

        let mut result = [0.0f32; 3];
        for i in 0..3 {
            let c00 = c000[i] * (1.0 - rf) + c100[i] * rf;
            let c01 = c001[i] * (1.0 - rf) + c101[i] * rf;
            let c10 = c010[i] * (1.0 - rf) + c110[i] * rf;
            let c11 = c011[i] * (1.0 - rf) + c111[i] * rf;

            let c0 = c00 * (1.0 - gf) + c10 * gf;
            let c1 = c01 * (1.0 - gf) + c11 * gf;

            result[i] = c0 * (1.0 - bf) + c1 * bf;
        }

        result
    }

    /// Tetrahedral interpolation (higher quality).
    fn apply_tetrahedral(&self, rgb: [f32; 3]) -> [f32; 3] {
        let (r, g, b) = self.normalize(rgb);
        let n = (self.size - 1) as f32;

        let ri = ((r * n).floor() as usize).min(self.size - 2);
        let gi = ((g * n).floor() as usize).min(self.size - 2);
        let bi = ((b * n).floor() as usize).min(self.size - 2);

        let rf = r * n - ri as f32;
        let gf = g * n - gi as f32;
        let bf = b * n - bi as f32;

        let c000 = self.at(ri, gi, bi);
        let c100 = self.at(ri + 1, gi, bi);
        let c010 = self.at(ri, gi + 1, bi);
        let c110 = self.at(ri + 1, gi + 1, bi);
        let c001 = self.at(ri, gi, bi + 1);
        let c101 = self.at(ri + 1, gi, bi + 1);
        let c011 = self.at(ri, gi + 1, bi + 1);
        let c111 = self.at(ri + 1, gi + 1, bi + 1);

        let mut result = [0.0f32; 3];
        for i in 0..3 {
            result[i] = if rf > gf {
                if gf > bf {
                    // rf > gf > bf
                    c000[i]
                        + rf * (c100[i] - c000[i])
                        + gf * (c110[i] - c100[i])
                        + bf * (c111[i] - c110[i])
                } else if rf > bf {
                    // rf > bf > gf
                    c000[i]
                        + rf * (c100[i] - c000[i])
                        + bf * (c101[i] - c100[i])
                        + gf * (c111[i] - c101[i])
                } else {
                    // bf > rf > gf
                    c000[i]
                        + bf * (c001[i] - c000[i])
                        + rf * (c101[i] - c001[i])
                        + gf * (c111[i] - c101[i])
                }
            } else if gf > bf {
                if rf > bf {
                    // gf > rf > bf
                    c000[i]
                        + gf * (c010[i] - c000[i])
                        + rf * (c110[i] - c010[i])
                        + bf * (c111[i] - c110[i])
                } else {
                    // gf > bf > rf
                    c000[i]
                        + gf * (c010[i] - c000[i])
                        + bf * (c011[i] - c010[i])
                        + rf * (c111[i] - c011[i])
                }
            } else {
                // bf > gf > rf
                c000[i]
                    + bf * (c001[i] - c000[i])
                    + gf * (c011[i] - c001[i])
                    + rf * (c111[i] - c011[i])
            };
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_passthrough() {
        let lut = Lut3D::identity(17).unwrap();
        let out = lut.apply([0.5, 0.3, 0.8]);
        assert!((out[0] - 0.5).abs() < 0.01);
        assert!((out[1] - 0.3).abs() < 0.01);
        assert!((out[2] - 0.8).abs() < 0.01);
    }

    #[test]
    fn identity_corners() {
        let lut = Lut3D::identity(33).unwrap();

        let black = lut.apply([0.0, 0.0, 0.0]);
        assert!(black[0].abs() < 0.01);

        let white = lut.apply([1.0, 1.0, 1.0]);
        assert!((white[0] - 1.0).abs() < 0.01);

        let red = lut.apply([1.0, 0.0, 0.0]);
        assert!((red[0] - 1.0).abs() < 0.01);
        assert!(red[1].abs() < 0.01);
    }

    #[test]
    fn tetrahedral_matches_identity() {
        let lut = Lut3D::identity(33)
            .unwrap()
            .with_interpolation(Interpolation::Tetrahedral);
        let out = lut.apply([0.5, 0.3, 0.8]);
        assert!((out[0] - 0.5).abs() < 0.01);
        assert!((out[1] - 0.3).abs() < 0.01);
        assert!((out[2] - 0.8).abs() < 0.01);
    }

    #[test]
    fn from_rows_red_fastest() {
        // Size-2 cube in file order: row = r + 2g + 4b.
        let rows: Vec<[f32; 3]> = (0..8)
            .map(|row| {
                let r = row % 2;
                let g = (row / 2) % 2;
                let b = row / 4;
                [r as f32, g as f32, b as f32]
            })
            .collect();
        let lut = Lut3D::from_rows(rows, 2, "Test").unwrap();

        assert_eq!(lut.at(0, 0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(lut.at(1, 0, 0), [1.0, 0.0, 0.0]);
        assert_eq!(lut.at(0, 1, 0), [0.0, 1.0, 0.0]);
        assert_eq!(lut.at(0, 0, 1), [0.0, 0.0, 1.0]);
        assert_eq!(lut.at(1, 1, 1), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn rows_round_trip_is_inverse() {
        for size in [2usize, 3, 5, 8] {
            let rows: Vec<[f32; 3]> = (0..size * size * size)
                .map(|i| {
                    let v = i as f32;
                    [v, v * 0.5, v * 0.25]
                })
                .collect();
            let lut = Lut3D::from_rows(rows.clone(), size, "Test").unwrap();
            assert_eq!(lut.to_rows(), rows, "size {size}");
        }
    }

    #[test]
    fn from_rows_validates() {
        assert!(Lut3D::from_rows(vec![[0.0; 3]; 7], 2, "Test").is_err());
        assert!(Lut3D::from_rows(vec![[0.0; 3]; 1], 1, "Test").is_err());
    }

    #[test]
    fn linear_table_over_domain() {
        let domain = Domain3::Range {
            min: [0.0, 0.0, 0.0],
            max: [1.0, 2.0, 4.0],
        };
        let lut = Lut3D::linear_table(3, &domain).unwrap();
        assert_eq!(lut.at(0, 0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(lut.at(2, 2, 2), [1.0, 2.0, 4.0]);
        assert_eq!(lut.at(1, 2, 0), [0.5, 2.0, 0.0]);
        // Identity over its own domain
        let out = lut.apply([0.5, 1.0, 2.0]);
        assert!((out[0] - 0.5).abs() < 1e-5);
        assert!((out[1] - 1.0).abs() < 1e-5);
        assert!((out[2] - 2.0).abs() < 1e-5);
    }
}
