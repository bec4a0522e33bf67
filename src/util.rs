use std::str::FromStr;
use string_builder::Builder;

pub fn string_is_valid_num<T: FromStr>(s: &str) -> bool {
    let num = s.parse::<T>();
    num.is_ok()
}

pub fn string_is_valid_f64(s: &str) -> bool {
    string_is_valid_num::<f64>(s)
}

pub fn string_is_valid_u32(s: &str) -> bool {
    string_is_valid_num::<u32>(s)
}

pub fn vec_to_str(v: &[f64]) -> String {
    let mut b = Builder::default();

    v.iter().for_each(|item| {
        b.append(format!("{},", item));
    });

    // Builder only holds what was appended via format!, always valid UTF-8
    let mut s = b.string().unwrap_or_default();
    if !s.is_empty() {
        s.remove(s.len() - 1);
    }

    format!("({})", s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_valid() {
        assert!(string_is_valid_f64("5.0"));
        assert!(string_is_valid_f64("-1e3"));
        assert!(!string_is_valid_f64("five"));
        assert!(string_is_valid_u32("40"));
        assert!(!string_is_valid_u32("-40"));
    }

    #[test]
    fn test_vec_to_str() {
        assert_eq!(vec_to_str(&[1.0, 2.5]), "(1,2.5)");
        assert_eq!(vec_to_str(&[]), "()");
    }
}
