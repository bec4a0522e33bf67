#[macro_export]
macro_rules! assert_delta {
    ($x:expr, $y:expr, $d:expr) => {
        if ($x - $y).abs() > $d {
            panic!("{} differs from {} by more than {}", $x, $y, $d);
        }
    };
}

#[allow(dead_code)]
pub const DEFAULT_DELTA: f64 = 0.000001;

// Output of the reference tool for SRM 1..=40 at a 5 cm path
#[allow(dead_code)]
pub const SRM_HEX_TABLE: [&str; 40] = [
    "#fae8b6", "#f4d180", "#eebd55", "#e7aa31", "#e09a03", "#d98a00", "#d17d00", "#c97000",
    "#c26500", "#ba5b00", "#b35200", "#ac4900", "#a54100", "#9f3a00", "#993400", "#932e00",
    "#8d2800", "#872300", "#821e00", "#7d1900", "#781400", "#731000", "#6f0c00", "#6b0800",
    "#660400", "#630100", "#5f0000", "#5b0000", "#580000", "#540000", "#510000", "#4e0000",
    "#4b0000", "#480000", "#450000", "#430000", "#400000", "#3e0000", "#3c0000", "#390000",
];
