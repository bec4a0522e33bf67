pub mod color;
pub mod enums;
pub mod hex;
pub mod matrix;
pub mod prelude;
pub mod rating;
pub mod spectrum;
pub mod transmission;
pub mod tristimulus;
pub mod util;
pub mod vector;
