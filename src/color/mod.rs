use crate::matrix::Matrix;
use crate::vector::Vector;
use anyhow::{anyhow, Result};

#[allow(non_camel_case_types)]
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum ColorSpaceType {
    RGB, // Linear sRGB primaries, no transfer function
    sRGB,
    XYZ,
    xyY,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub value: Vector,
    pub space: ColorSpaceType,
}

impl Color {
    pub fn new(value: Vector, space: ColorSpaceType) -> Color {
        Color { value, space }
    }
}

pub trait ColorConverter {
    fn convert(&self, in_color: &Color) -> Result<Color>;
}

/// CIE XYZ to linear sRGB, D65 white
#[rustfmt::skip]
pub const XYZ_TO_RGB: Matrix = Matrix::new([
     3.2406, -1.5372, -0.4986,
    -0.9689,  1.8758,  0.0415,
     0.0557, -0.2040,  1.0570,
]);

/// sRGB transfer function applied to a linear value, clipped to [0, 1]
pub fn correct_gamma(l: f64) -> f64 {
    let v = if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    };
    v.clamp(0.0, 1.0)
}

/// Rec. 709 relative luminance of an RGB triplet
pub fn luminance(rgb: &Vector) -> f64 {
    0.2126 * rgb.x + 0.7152 * rgb.y + 0.0722 * rgb.z
}

pub fn xyz_to_linear_rgb(xyz: &Vector) -> Vector {
    XYZ_TO_RGB.multiply_vector(xyz)
}

pub fn xyz_to_srgb(xyz: &Vector) -> Vector {
    xyz_to_linear_rgb(xyz).map(correct_gamma)
}

fn check_space(in_color: &Color, expected: ColorSpaceType, target: ColorSpaceType) -> Result<()> {
    if in_color.space != expected {
        Err(anyhow!(
            "Cannot convert to {:?}, invalid input colorspace: {:?}",
            target,
            in_color.space
        ))
    } else {
        Ok(())
    }
}

///////////////////////////////
/// XYZ to RGB
///////////////////////////////

pub struct Xyz2RgbConverter {
    m: Matrix,
}

impl Xyz2RgbConverter {
    pub fn new() -> Self {
        Xyz2RgbConverter { m: XYZ_TO_RGB }
    }
}

impl Default for Xyz2RgbConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter for Xyz2RgbConverter {
    fn convert(&self, in_color: &Color) -> Result<Color> {
        check_space(in_color, ColorSpaceType::XYZ, ColorSpaceType::RGB)?;
        Ok(Color {
            value: self.m.multiply_vector(&in_color.value),
            space: ColorSpaceType::RGB,
        })
    }
}

///////////////////////////////
/// RGB to sRGB
///////////////////////////////

pub struct Rgb2sRgbConverter {}

impl Rgb2sRgbConverter {
    pub fn new() -> Self {
        Rgb2sRgbConverter {}
    }
}

impl Default for Rgb2sRgbConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter for Rgb2sRgbConverter {
    fn convert(&self, in_color: &Color) -> Result<Color> {
        check_space(in_color, ColorSpaceType::RGB, ColorSpaceType::sRGB)?;
        Ok(Color {
            value: in_color.value.map(correct_gamma),
            space: ColorSpaceType::sRGB,
        })
    }
}

///////////////////////////////
/// XYZ to sRGB
///////////////////////////////

pub struct Xyz2sRgbConverter {
    to_linear: Xyz2RgbConverter,
    encode: Rgb2sRgbConverter,
}

impl Xyz2sRgbConverter {
    pub fn new() -> Self {
        Xyz2sRgbConverter {
            to_linear: Xyz2RgbConverter::new(),
            encode: Rgb2sRgbConverter::new(),
        }
    }
}

impl Default for Xyz2sRgbConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter for Xyz2sRgbConverter {
    fn convert(&self, in_color: &Color) -> Result<Color> {
        check_space(in_color, ColorSpaceType::XYZ, ColorSpaceType::sRGB)?;
        let linear = self.to_linear.convert(in_color)?;
        self.encode.convert(&linear)
    }
}

///////////////////////////////
/// XYZ to xyY
///////////////////////////////

pub struct Xyz2xyYConverter {}

impl Xyz2xyYConverter {
    pub fn new() -> Self {
        Xyz2xyYConverter {}
    }
}

impl Default for Xyz2xyYConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter for Xyz2xyYConverter {
    fn convert(&self, in_color: &Color) -> Result<Color> {
        check_space(in_color, ColorSpaceType::XYZ, ColorSpaceType::xyY)?;
        let sum = in_color.value.sum();
        let (x, y) = if sum == 0.0 {
            (0.0, 0.0)
        } else {
            (in_color.value.x / sum, in_color.value.y / sum)
        };

        Ok(Color {
            value: Vector::new(x, y, in_color.value.y),
            space: ColorSpaceType::xyY,
        })
    }
}

pub type ColorConverterImpl = Box<dyn ColorConverter + 'static + Send + Sync>;

pub fn get_converter(
    from_colorspace: ColorSpaceType,
    to_colorspace: ColorSpaceType,
) -> Result<ColorConverterImpl> {
    match (from_colorspace, to_colorspace) {
        (ColorSpaceType::XYZ, ColorSpaceType::RGB) => Ok(Box::new(Xyz2RgbConverter::new())),
        (ColorSpaceType::XYZ, ColorSpaceType::sRGB) => Ok(Box::new(Xyz2sRgbConverter::new())),
        (ColorSpaceType::XYZ, ColorSpaceType::xyY) => Ok(Box::new(Xyz2xyYConverter::new())),
        (ColorSpaceType::RGB, ColorSpaceType::sRGB) => Ok(Box::new(Rgb2sRgbConverter::new())),
        _ => Err(anyhow!(
            "Colorspace conversion not supported: {:?} -> {:?}",
            from_colorspace,
            to_colorspace
        )),
    }
}

pub fn convert_color(from_color: &Color, to_colorspace: ColorSpaceType) -> Result<Color> {
    get_converter(from_color.space, to_colorspace)?.convert(from_color)
}
