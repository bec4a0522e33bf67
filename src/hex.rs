use crate::vector::Vector;

/// Scales relative intensities in [0, 1] to 8 bits, rounding half away from zero
pub fn rgb_to_u8(rgb: &Vector) -> [u8; 3] {
    rgb.to_array().map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
}

/// Formats a relative intensity RGB triplet as `#rrggbb`
pub fn rgb_to_hex(rgb: &Vector) -> String {
    let [r, g, b] = rgb_to_u8(rgb);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
