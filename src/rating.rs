use crate::{
    color::xyz_to_srgb, enums::RatingScale, hex::rgb_to_hex, transmission::transmission_spectrum,
    tristimulus::spectrum_to_xyz, vector::vector_format, vector::Vector,
};

use anyhow::{anyhow, Result};
use log::trace;
use serde::{Deserialize, Serialize};

/// Default transmission path in cm, a typical beer glass diameter as used by the BJCP color guide
pub const DEFAULT_PATH: f64 = 5.0;

pub const SRM_A430_DIVISOR: f64 = 12.7;
pub const EBC_A430_DIVISOR: f64 = 25.0;

/// Display sRGB color of a beer with absorbance `a430` at 430 nm, viewed through `path_cm` of
/// liquid under D65. Channels are gamma encoded and clipped to [0, 1].
pub fn beer_sd_to_srgb(a430: f64, path_cm: f64) -> Vector {
    let s = transmission_spectrum(a430, path_cm);
    let xyz = spectrum_to_xyz(&s);
    trace!("a430={} path={}cm -> XYZ {}", a430, path_cm, xyz);
    xyz_to_srgb(&xyz)
}

pub fn srm_to_srgb(srm: f64, path_cm: f64) -> Vector {
    beer_sd_to_srgb(srm / SRM_A430_DIVISOR, path_cm)
}

pub fn ebc_to_srgb(ebc: f64, path_cm: f64) -> Vector {
    beer_sd_to_srgb(ebc / EBC_A430_DIVISOR, path_cm)
}

pub fn srm_to_srgb_default(srm: f64) -> Vector {
    srm_to_srgb(srm, DEFAULT_PATH)
}

pub fn ebc_to_srgb_default(ebc: f64) -> Vector {
    ebc_to_srgb(ebc, DEFAULT_PATH)
}

/// EBC rating with the same 430 nm absorbance as `srm`
pub fn srm_to_ebc(srm: f64) -> f64 {
    srm / SRM_A430_DIVISOR * EBC_A430_DIVISOR
}

pub fn ebc_to_srm(ebc: f64) -> f64 {
    ebc / EBC_A430_DIVISOR * SRM_A430_DIVISOR
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub value: f64,
    pub scale: RatingScale,
}

impl Rating {
    /// Unvalidated; negative ratings are carried through and clip at display.
    pub fn new(value: f64, scale: RatingScale) -> Rating {
        Rating { value, scale }
    }

    pub fn srm(value: f64) -> Rating {
        Rating::new(value, RatingScale::SRM)
    }

    pub fn ebc(value: f64) -> Rating {
        Rating::new(value, RatingScale::EBC)
    }

    pub fn new_checked(value: f64, scale: RatingScale) -> Result<Rating> {
        if !value.is_finite() {
            Err(anyhow!("{:?} rating must be finite, got {}", scale, value))
        } else if value < 0.0 {
            Err(anyhow!("{:?} rating cannot be negative, got {}", scale, value))
        } else {
            Ok(Rating { value, scale })
        }
    }

    pub fn a430(&self) -> f64 {
        self.value / RatingScale::a430_divisor(self.scale)
    }

    pub fn to_scale(&self, scale: RatingScale) -> Rating {
        Rating {
            value: self.a430() * RatingScale::a430_divisor(scale),
            scale,
        }
    }

    pub fn to_srgb(&self, path_cm: f64) -> Vector {
        beer_sd_to_srgb(self.a430(), path_cm)
    }

    pub fn to_srgb_checked(&self, path_cm: f64) -> Result<Vector> {
        if !path_cm.is_finite() || path_cm <= 0.0 {
            return Err(anyhow!(
                "Path length must be a positive finite number of cm, got {}",
                path_cm
            ));
        }
        let checked = Rating::new_checked(self.value, self.scale)?;
        Ok(checked.to_srgb(path_cm))
    }
}

/// A rendered beer color, suitable for serializing alongside its inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerColor {
    pub rating: Rating,
    pub path_cm: f64,
    #[serde(with = "vector_format")]
    pub srgb: Vector,
    pub hex: String,
}

impl BeerColor {
    pub fn render(rating: Rating, path_cm: f64) -> BeerColor {
        let srgb = rating.to_srgb(path_cm);
        BeerColor {
            rating,
            path_cm,
            srgb,
            hex: rgb_to_hex(&srgb),
        }
    }
}
