mod common;

use beercolor::color::*;
use beercolor::vector::Vector;
use common::DEFAULT_DELTA;

const D65_WHITE: Vector = Vector {
    x: 0.9504296694021497,
    y: 1.0,
    z: 1.0888005470297513,
};

#[test]
fn test_gamma_branches() {
    assert_delta!(correct_gamma(0.002), 0.02584, DEFAULT_DELTA);
    assert_delta!(correct_gamma(0.18), 0.46135612950044164, DEFAULT_DELTA);
    assert_delta!(correct_gamma(0.5), 0.7353569830524495, DEFAULT_DELTA);
    assert_eq!(correct_gamma(0.0), 0.0);
    assert_delta!(correct_gamma(1.0), 1.0, DEFAULT_DELTA);
}

#[test]
fn test_gamma_clamps() {
    assert_eq!(correct_gamma(-0.1), 0.0);
    assert_eq!(correct_gamma(2.0), 1.0);
    assert_eq!(correct_gamma(-1000.0), 0.0);
}

#[test]
fn test_linear_rgb_of_white() {
    let rgb = xyz_to_linear_rgb(&D65_WHITE);
    assert_delta!(rgb.x, 0.9998864339155723, DEFAULT_DELTA);
    assert_delta!(rgb.y, 1.0001139160179917, DEFAULT_DELTA);
    assert_delta!(rgb.z, 0.9998011107961469, DEFAULT_DELTA);
}

#[test]
fn test_converter_chain_matches_free_functions() {
    let xyz = Color::new(Vector::new(0.3, 0.25, 0.1), ColorSpaceType::XYZ);
    let srgb = convert_color(&xyz, ColorSpaceType::sRGB).unwrap();
    assert_eq!(srgb.space, ColorSpaceType::sRGB);
    assert_eq!(srgb.value, xyz_to_srgb(&xyz.value));

    let linear = convert_color(&xyz, ColorSpaceType::RGB).unwrap();
    let encoded = convert_color(&linear, ColorSpaceType::sRGB).unwrap();
    assert_eq!(encoded.value, srgb.value);
}

#[test]
fn test_xyy_of_white() {
    let white = Color::new(D65_WHITE, ColorSpaceType::XYZ);
    let xyy = convert_color(&white, ColorSpaceType::xyY).unwrap();
    assert_delta!(xyy.value.x, 0.312720525172314, DEFAULT_DELTA);
    assert_delta!(xyy.value.y, 0.3290306850048412, DEFAULT_DELTA);
    assert_eq!(xyy.value.z, 1.0);

    let black = Color::new(Vector::default(), ColorSpaceType::XYZ);
    let xyy = convert_color(&black, ColorSpaceType::xyY).unwrap();
    assert_eq!(xyy.value, Vector::default());
}

#[test]
fn test_wrong_input_space() {
    let rgb = Color::new(Vector::uniform(0.5), ColorSpaceType::sRGB);
    assert!(Xyz2RgbConverter::new().convert(&rgb).is_err());
    assert!(Rgb2sRgbConverter::new().convert(&rgb).is_err());
}

#[test]
fn test_unsupported_conversion() {
    assert!(get_converter(ColorSpaceType::sRGB, ColorSpaceType::XYZ).is_err());
    assert!(get_converter(ColorSpaceType::XYZ, ColorSpaceType::sRGB).is_ok());
}

#[test]
fn test_luminance() {
    assert_delta!(luminance(&Vector::uniform(1.0)), 1.0, DEFAULT_DELTA);
    assert_eq!(luminance(&Vector::default()), 0.0);
}
