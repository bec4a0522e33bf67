use crate::spectrum::Spectrum;

/// Reference wavelength of the absorbance measurement, nm
pub const REFERENCE_LAMBDA: f64 = 430.0;

/// Relative absorption of beer at `lambda` nm compared to 430 nm.
///
/// Two-term exponential fit to the mean absorption spectrum of an ensemble of 99 beers
/// (A.J. deLange, Bamforth's Brewing Materials and Processes, DOI: 10.1016/B978-0-12-799954-8.00011-3).
pub fn absorption_shape(lambda: f64) -> f64 {
    let d = lambda - REFERENCE_LAMBDA;
    0.02465 * (-d / 17.591).exp() + 0.97535 * (-d / 82.122).exp()
}

/// Transmission spectrum of a beer with absorbance `a430` at 430 nm seen through
/// `path_cm` centimeters of liquid (Beer-Lambert law).
pub fn transmission_spectrum(a430: f64, path_cm: f64) -> Spectrum {
    Spectrum::from_fn(|lambda| 10.0_f64.powf(-a430 * absorption_shape(lambda) * path_cm))
}
