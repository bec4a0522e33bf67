use crate::spectrum::{Spectrum, D65, DELTA_LAMBDA, NUM_SAMPLES, X_BAR, Y_BAR, Z_BAR};
use crate::vector::Vector;

use itertools::izip;
use log::debug;
use std::sync::OnceLock;

static NORMALIZATION: OnceLock<f64> = OnceLock::new();

/// Integral of the Y color matching function weighted by the illuminant. A perfectly
/// transmitting sample divided by this has Y = 1.
pub fn normalization() -> f64 {
    *NORMALIZATION.get_or_init(|| {
        let n = Y_BAR
            .iter()
            .zip(D65.iter())
            .fold(0.0, |sum, (y, i)| sum + y * i * DELTA_LAMBDA);
        debug!("Tristimulus normalization constant: {}", n);
        n
    })
}

/// Integrates spectrum `s` against color matching function `cmf` under D65 over 5 nm bins,
/// divided by normalization constant `n`.
pub fn summate(n: f64, cmf: &[f64; NUM_SAMPLES], s: &Spectrum) -> f64 {
    let sum = izip!(cmf.iter(), s.iter(), D65.iter())
        .fold(0.0, |sum, (c, v, i)| sum + c * v * i * DELTA_LAMBDA);
    1.0 / n * sum
}

/// CIE XYZ tristimulus values of a transmission spectrum, returned as (X, Y, Z)
pub fn spectrum_to_xyz(s: &Spectrum) -> Vector {
    let n = normalization();
    Vector::new(
        summate(n, &X_BAR, s),
        summate(n, &Y_BAR, s),
        summate(n, &Z_BAR, s),
    )
}
