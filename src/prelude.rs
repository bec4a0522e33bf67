pub use crate::color::{convert_color, get_converter, Color, ColorConverter, ColorSpaceType};
pub use crate::enums::RatingScale;
pub use crate::hex::{rgb_to_hex, rgb_to_u8};
pub use crate::rating::{
    ebc_to_srgb, ebc_to_srgb_default, srm_to_srgb, srm_to_srgb_default, BeerColor, Rating,
    DEFAULT_PATH,
};
pub use crate::vector::Vector;
