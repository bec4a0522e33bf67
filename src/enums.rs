use crate::rating::{EBC_A430_DIVISOR, SRM_A430_DIVISOR};

use serde::{Deserialize, Serialize};

// Beer color rating scales. Both are linear in the absorbance
// measured at 430 nm, differing only in their divisor.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum RatingScale {
    SRM,
    EBC,
}

impl RatingScale {
    /// Rating units per unit of a430 absorbance
    pub fn a430_divisor(scale: RatingScale) -> f64 {
        match scale {
            RatingScale::SRM => SRM_A430_DIVISOR,
            RatingScale::EBC => EBC_A430_DIVISOR,
        }
    }
}
