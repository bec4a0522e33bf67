//! Prints the sRGB hex color of each integer SRM rating as CSV.
//!
//! Usage: srm_table [path_cm] [max_srm]

use beercolor::prelude::*;
use beercolor::util::{string_is_valid_f64, string_is_valid_u32};

use anyhow::{anyhow, Result};
use log::info;

const DEFAULT_MAX_SRM: u32 = 40;

fn parse_args(args: &[String]) -> Result<(f64, u32)> {
    let path_cm = match args.first() {
        Some(s) if string_is_valid_f64(s) => s.parse::<f64>()?,
        Some(s) => return Err(anyhow!("Invalid path length: {}", s)),
        None => DEFAULT_PATH,
    };
    if !path_cm.is_finite() || path_cm <= 0.0 {
        return Err(anyhow!("Path length must be positive, got {}", path_cm));
    }

    let max_srm = match args.get(1) {
        Some(s) if string_is_valid_u32(s) => s.parse::<u32>()?,
        Some(s) => return Err(anyhow!("Invalid maximum SRM: {}", s)),
        None => DEFAULT_MAX_SRM,
    };

    Ok((path_cm, max_srm))
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path_cm, max_srm) = parse_args(&args)?;
    info!("Rendering SRM 1-{} at {} cm path", max_srm, path_cm);

    println!("SRM,sRGB");
    for srm in 1..=max_srm {
        let rgb = srm_to_srgb(srm as f64, path_cm);
        println!("{},{}", srm, rgb_to_hex(&rgb));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let (path_cm, max_srm) = parse_args(&[]).unwrap();
        assert_eq!(path_cm, DEFAULT_PATH);
        assert_eq!(max_srm, DEFAULT_MAX_SRM);
    }

    #[test]
    fn test_parse_args_values() {
        let (path_cm, max_srm) = parse_args(&args(&["2.5", "50"])).unwrap();
        assert_eq!(path_cm, 2.5);
        assert_eq!(max_srm, 50);
    }

    #[test]
    fn test_parse_args_rejects_bad_path() {
        assert!(parse_args(&args(&["0"])).is_err());
        assert!(parse_args(&args(&["-5.0"])).is_err());
        assert!(parse_args(&args(&["wide"])).is_err());
    }

    #[test]
    fn test_parse_args_rejects_bad_max_srm() {
        assert!(parse_args(&args(&["5.0", "forty"])).is_err());
        assert!(parse_args(&args(&["5.0", "-1"])).is_err());
    }
}
