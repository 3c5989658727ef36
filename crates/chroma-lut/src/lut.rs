//! The closed set of LUT table kinds.

use crate::{Lut1D, Lut3D, Lut3x1D};

/// Any LUT table kind.
///
/// Codec seams accept and produce this enum so that kind dispatch is a
/// `match` over a closed set rather than downcasting. All variants share
/// the capability surface the codecs rely on: a name, a size, comments and
/// a domain-explicitness check.
#[derive(Debug, Clone, PartialEq)]
pub enum Lut {
    /// Single curve applied to every channel.
    OneD(Lut1D),
    /// Independent curve per channel.
    ThreeByOneD(Lut3x1D),
    /// Full RGB cube.
    ThreeD(Lut3D),
}

impl Lut {
    /// Returns the display name.
    pub fn name(&self) -> &str {
        match self {
            Self::OneD(lut) => &lut.name,
            Self::ThreeByOneD(lut) => &lut.name,
            Self::ThreeD(lut) => &lut.name,
        }
    }

    /// Returns the number of samples per dimension.
    pub fn size(&self) -> usize {
        match self {
            Self::OneD(lut) => lut.size(),
            Self::ThreeByOneD(lut) => lut.size(),
            Self::ThreeD(lut) => lut.size(),
        }
    }

    /// Replaces the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            Self::OneD(lut) => lut.name = name,
            Self::ThreeByOneD(lut) => lut.name = name,
            Self::ThreeD(lut) => lut.name = name,
        }
    }

    /// Returns the comments.
    pub fn comments(&self) -> &[String] {
        match self {
            Self::OneD(lut) => &lut.comments,
            Self::ThreeByOneD(lut) => &lut.comments,
            Self::ThreeD(lut) => &lut.comments,
        }
    }

    /// Returns true if the domain is an explicit per-sample breakpoint list.
    pub fn is_domain_explicit(&self) -> bool {
        match self {
            Self::OneD(lut) => lut.is_domain_explicit(),
            Self::ThreeByOneD(lut) => lut.is_domain_explicit(),
            Self::ThreeD(lut) => lut.is_domain_explicit(),
        }
    }

    /// Applies the LUT to an RGB triplet.
    ///
    /// A 1D LUT applies its single curve to each channel.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        match self {
            Self::OneD(lut) => [lut.apply(rgb[0]), lut.apply(rgb[1]), lut.apply(rgb[2])],
            Self::ThreeByOneD(lut) => lut.apply(rgb),
            Self::ThreeD(lut) => lut.apply(rgb),
        }
    }
}

impl From<Lut1D> for Lut {
    fn from(lut: Lut1D) -> Self {
        Self::OneD(lut)
    }
}

impl From<Lut3x1D> for Lut {
    fn from(lut: Lut3x1D) -> Self {
        Self::ThreeByOneD(lut)
    }
}

impl From<Lut3D> for Lut {
    fn from(lut: Lut3D) -> Self {
        Self::ThreeD(lut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_capabilities() {
        let lut: Lut = Lut3x1D::identity(16).unwrap().into();
        assert_eq!(lut.size(), 16);
        assert_eq!(lut.name(), "Unity 16");
        assert!(!lut.is_domain_explicit());
    }

    #[test]
    fn one_d_applies_per_channel() {
        let mut curve = Lut1D::identity(2).unwrap();
        curve.map(|v| v * 2.0);
        let lut: Lut = curve.into();
        let out = lut.apply([0.0, 0.25, 0.5]);
        assert!((out[0] - 0.0).abs() < 1e-6);
        assert!((out[1] - 0.5).abs() < 1e-6);
        assert!((out[2] - 1.0).abs() < 1e-6);
    }
}
