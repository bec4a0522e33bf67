use beercolor::hex::rgb_to_hex;
use beercolor::vector::Vector;

#[test]
fn test_extremes() {
    assert_eq!(rgb_to_hex(&Vector::uniform(0.0)), "#000000");
    assert_eq!(rgb_to_hex(&Vector::uniform(1.0)), "#ffffff");
}

#[test]
fn test_half_rounds_up() {
    assert_eq!(rgb_to_hex(&Vector::uniform(0.5)), "#808080");
}

#[test]
fn test_channels_are_independent() {
    assert_eq!(rgb_to_hex(&Vector::new(1.0, 0.0, 0.0)), "#ff0000");
    assert_eq!(rgb_to_hex(&Vector::new(0.0, 1.0, 0.0)), "#00ff00");
    assert_eq!(rgb_to_hex(&Vector::new(0.0, 0.0, 1.0)), "#0000ff");
    assert_eq!(rgb_to_hex(&Vector::new(0.04, 0.6, 0.2)), "#0a9933");
}
