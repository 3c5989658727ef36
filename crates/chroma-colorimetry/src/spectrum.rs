//! Spectral sampling shapes and distributions.

/// Sampling shape of a spectral distribution, in nanometres.
///
/// # Example
///
/// ```rust
/// use chroma_colorimetry::SpectralShape;
///
/// let shape = SpectralShape::VISIBLE;
/// assert_eq!(shape.len(), 421);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralShape {
    /// First sampled wavelength, nm.
    pub start: f64,
    /// Last sampled wavelength, nm.
    pub end: f64,
    /// Sampling interval, nm.
    pub interval: f64,
}

impl SpectralShape {
    /// The visible range, 360-780 nm at 1 nm.
    pub const VISIBLE: Self = Self {
        start: 360.0,
        end: 780.0,
        interval: 1.0,
    };

    /// Creates a shape from start/end/interval in nanometres.
    pub fn new(start: f64, end: f64, interval: f64) -> Self {
        Self {
            start,
            end,
            interval,
        }
    }

    /// Returns the number of samples in the shape.
    pub fn len(&self) -> usize {
        if self.interval <= 0.0 || self.end < self.start {
            return 0;
        }
        ((self.end - self.start) / self.interval).round() as usize + 1
    }

    /// Returns true if the shape holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the sampled wavelengths in nanometres.
    pub fn wavelengths(&self) -> impl Iterator<Item = f64> {
        let shape = *self;
        (0..shape.len()).map(move |i| shape.start + i as f64 * shape.interval)
    }
}

impl Default for SpectralShape {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// A spectral quantity sampled over a [`SpectralShape`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralDistribution {
    /// Display name.
    pub name: String,
    /// Sampling shape.
    pub shape: SpectralShape,
    /// One value per sampled wavelength.
    pub values: Vec<f64>,
}

impl SpectralDistribution {
    /// Creates a distribution from a name, shape and matching values.
    pub fn new(name: impl Into<String>, shape: SpectralShape, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            shape,
            values,
        }
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the distribution holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the (wavelength, value) pair of the largest sample.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.shape
            .wavelengths()
            .zip(self.values.iter().copied())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_shape() {
        let shape = SpectralShape::VISIBLE;
        assert_eq!(shape.len(), 421);
        let wavelengths: Vec<f64> = shape.wavelengths().collect();
        assert_eq!(wavelengths[0], 360.0);
        assert_eq!(*wavelengths.last().unwrap(), 780.0);
    }

    #[test]
    fn coarse_shape() {
        let shape = SpectralShape::new(400.0, 700.0, 10.0);
        assert_eq!(shape.len(), 31);
        assert_eq!(shape.wavelengths().nth(1), Some(410.0));
    }

    #[test]
    fn degenerate_shapes_are_empty() {
        assert!(SpectralShape::new(700.0, 400.0, 10.0).is_empty());
        assert!(SpectralShape::new(400.0, 700.0, 0.0).is_empty());
    }

    #[test]
    fn peak_lookup() {
        let shape = SpectralShape::new(400.0, 402.0, 1.0);
        let sd = SpectralDistribution::new("Test", shape, vec![1.0, 3.0, 2.0]);
        assert_eq!(sd.peak(), Some((401.0, 3.0)));
    }
}
