//! Blackbody (Planckian radiator) spectra.
//!
//! Planck's law gives the spectral radiance of an ideal thermal radiator
//! at a given temperature; the Rayleigh-Jeans law is its long-wavelength
//! classical approximation. Constants follow CODATA 2018.
//!
//! # Reference
//!
//! CIE 15:2004, Colorimetry, 3rd Edition

use crate::spectrum::{SpectralDistribution, SpectralShape};
use std::f64::consts::PI;

/// Speed of light in vacuum, m/s.
const LIGHT_SPEED: f64 = 299_792_458.0;

/// Boltzmann constant, J/K.
const BOLTZMANN: f64 = 1.380_649e-23;

/// First radiation constant 2*pi*h*c^2, W*m^2.
const C1: f64 = 3.741_771_852e-16;

/// Second radiation constant h*c/k, m*K.
const C2: f64 = 1.438_776_877e-2;

/// Planck's law: spectral radiance of a blackbody.
///
/// `wavelength` is in metres, `temperature` in kelvin; the result is in
/// W*sr^-1*m^-3. Non-positive wavelengths or temperatures yield 0, and
/// radiance underflows to 0 where the exponential overflows (very short
/// wavelengths at low temperatures).
///
/// # Example
///
/// ```rust
/// use chroma_colorimetry::blackbody::planck_law;
///
/// let radiance = planck_law(500.0e-9, 5500.0);
/// assert!(radiance > 0.0);
/// ```
pub fn planck_law(wavelength: f64, temperature: f64) -> f64 {
    if wavelength <= 0.0 || temperature <= 0.0 {
        return 0.0;
    }
    let exponent = C2 / (wavelength * temperature);
    (C1 * wavelength.powi(-5) / PI) / exponent.exp_m1()
}

/// Rayleigh-Jeans law: classical long-wavelength approximation.
///
/// `wavelength` is in metres, `temperature` in kelvin; the result is in
/// W*sr^-1*m^-3. Diverges from Planck's law at short wavelengths (the
/// ultraviolet catastrophe).
pub fn rayleigh_jeans_law(wavelength: f64, temperature: f64) -> f64 {
    if wavelength <= 0.0 || temperature <= 0.0 {
        return 0.0;
    }
    2.0 * LIGHT_SPEED * BOLTZMANN * temperature / wavelength.powi(4)
}

/// Samples the blackbody spectral distribution for a temperature.
///
/// The shape is in nanometres; values are spectral radiance per
/// nanometre, W*sr^-1*m^-2*nm^-1.
pub fn sd_blackbody(temperature: f64, shape: SpectralShape) -> SpectralDistribution {
    let values = shape
        .wavelengths()
        .map(|nm| planck_law(nm * 1e-9, temperature) * 1e-9)
        .collect();
    SpectralDistribution::new(format!("{temperature}K Blackbody"), shape, values)
}

/// Samples the Rayleigh-Jeans spectral distribution for a temperature.
///
/// Same shape and units as [`sd_blackbody`].
pub fn sd_rayleigh_jeans(temperature: f64, shape: SpectralShape) -> SpectralDistribution {
    let values = shape
        .wavelengths()
        .map(|nm| rayleigh_jeans_law(nm * 1e-9, temperature) * 1e-9)
        .collect();
    SpectralDistribution::new(format!("{temperature}K Rayleigh-Jeans"), shape, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planck_reference_value() {
        // 500 nm at 5000 K
        let radiance = planck_law(500.0e-9, 5000.0);
        let expected = 1.2103e13;
        assert!(
            (radiance - expected).abs() / expected < 1e-3,
            "radiance = {radiance}"
        );
    }

    #[test]
    fn planck_edge_cases() {
        assert_eq!(planck_law(0.0, 5000.0), 0.0);
        assert_eq!(planck_law(500.0e-9, 0.0), 0.0);
        assert_eq!(planck_law(-1.0, 5000.0), 0.0);
        // Deep overflow territory underflows to zero rather than NaN
        let tiny = planck_law(1.0e-9, 100.0);
        assert_eq!(tiny, 0.0);
    }

    #[test]
    fn peak_follows_wien_displacement() {
        // lambda_max = b / T with b = 2.8977719e-3 m*K
        for temperature in [4000.0, 5000.0, 6500.0] {
            let expected_nm = 2.8977719e-3 / temperature * 1e9;
            let shape = SpectralShape::new(200.0, 2000.0, 1.0);
            let sd = sd_blackbody(temperature, shape);
            let (peak_nm, _) = sd.peak().unwrap();
            assert!(
                (peak_nm - expected_nm).abs() < 2.0,
                "T = {temperature}: peak {peak_nm} nm, expected {expected_nm} nm"
            );
        }
    }

    #[test]
    fn rayleigh_jeans_matches_planck_at_long_wavelength() {
        let wavelength = 1.0e-2;
        let temperature = 6000.0;
        let planck = planck_law(wavelength, temperature);
        let classical = rayleigh_jeans_law(wavelength, temperature);
        assert!((classical - planck).abs() / planck < 1e-3);
    }

    #[test]
    fn rayleigh_jeans_diverges_at_short_wavelength() {
        let wavelength = 400.0e-9;
        let temperature = 5000.0;
        assert!(rayleigh_jeans_law(wavelength, temperature) > planck_law(wavelength, temperature));
    }

    #[test]
    fn sd_covers_shape() {
        let sd = sd_blackbody(5000.0, SpectralShape::VISIBLE);
        assert_eq!(sd.len(), 421);
        assert_eq!(sd.name, "5000K Blackbody");
        assert!(sd.values.iter().all(|&v| v > 0.0));
    }
}
