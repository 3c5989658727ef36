//! Munsell value from luminance.
//!
//! The Munsell value scale places a surface's lightness on a 0-10 axis.
//! Several published fits approximate value from the luminance `Y` on a
//! [0, 100] scale; they agree to within a few hundredths of a value step
//! over most of the range.

/// Munsell value computation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MunsellValueMethod {
    /// Priest, Gibson and MacNicholas (1920).
    Priest1920,
    /// Munsell, Sloan and Godlove (1933).
    Munsell1933,
    /// Moon and Spencer (1943).
    Moon1943,
    /// Saunderson and Milner (1944).
    Saunderson1944,
    /// Ladd and Pinney (1955).
    Ladd1955,
    /// McCamy (1987).
    McCamy1987,
    /// ASTM D1535-08e1, the renotation reference.
    #[default]
    AstmD1535,
}

/// Computes Munsell value with the given method.
pub fn munsell_value(y: f64, method: MunsellValueMethod) -> f64 {
    match method {
        MunsellValueMethod::Priest1920 => munsell_value_priest1920(y),
        MunsellValueMethod::Munsell1933 => munsell_value_munsell1933(y),
        MunsellValueMethod::Moon1943 => munsell_value_moon1943(y),
        MunsellValueMethod::Saunderson1944 => munsell_value_saunderson1944(y),
        MunsellValueMethod::Ladd1955 => munsell_value_ladd1955(y),
        MunsellValueMethod::McCamy1987 => munsell_value_mccamy1987(y),
        MunsellValueMethod::AstmD1535 => munsell_value_astm_d1535(y),
    }
}

/// Priest, Gibson and MacNicholas (1920).
pub fn munsell_value_priest1920(y: f64) -> f64 {
    10.0 * (y / 100.0).sqrt()
}

/// Munsell, Sloan and Godlove (1933).
pub fn munsell_value_munsell1933(y: f64) -> f64 {
    (1.4742 * y - 0.004743 * y * y).sqrt()
}

/// Moon and Spencer (1943).
pub fn munsell_value_moon1943(y: f64) -> f64 {
    1.4 * y.powf(0.426)
}

/// Saunderson and Milner (1944).
pub fn munsell_value_saunderson1944(y: f64) -> f64 {
    2.357 * y.powf(0.343) - 1.52
}

/// Ladd and Pinney (1955).
pub fn munsell_value_ladd1955(y: f64) -> f64 {
    2.468 * y.cbrt() - 1.636
}

/// McCamy (1987).
pub fn munsell_value_mccamy1987(y: f64) -> f64 {
    if y <= 0.9 {
        0.87445 * y.powf(0.9967)
    } else {
        2.49268 * y.cbrt() - 1.5614 - 0.985 / ((0.1073 * y - 3.084).powi(2) + 7.54)
            + 0.0133 / y.powf(2.3)
            + 0.0084 * (4.1 * y.cbrt() + 1.0).sin()
            + (0.0221 / y) * (0.39 * (y - 2.0)).sin()
            - (0.0037 / (0.44 * y)) * (1.28 * (y - 0.53)).sin()
    }
}

/// ASTM D1535-08e1 luminance from Munsell value.
///
/// The published quintic; `luminance_astm_d1535(10.0)` is exactly 100.
pub fn luminance_astm_d1535(v: f64) -> f64 {
    1.1914 * v - 0.22533 * v.powi(2) + 0.23352 * v.powi(3) - 0.020484 * v.powi(4)
        + 0.00081939 * v.powi(5)
}

/// ASTM D1535-08e1 Munsell value from luminance.
///
/// Numeric inversion of [`luminance_astm_d1535`] by bisection; the
/// quintic is monotone increasing on the value range [0, 10], so
/// luminances outside [0, 100] clamp to the scale ends.
pub fn munsell_value_astm_d1535(y: f64) -> f64 {
    let mut lo = 0.0f64;
    let mut hi = 10.0f64;
    for _ in 0..64 {
        let mid = 0.5 * (lo + hi);
        if luminance_astm_d1535(mid) < y {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}
