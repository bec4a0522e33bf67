use crate::util::{string_is_valid_f64, vec_to_str};

use anyhow::{anyhow, Result};
use std::ops::{Index, IndexMut};

/// A color triplet. Holds X, Y, Z or R, G, B depending on the color space it is tagged with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Vector {
    fn default() -> Vector {
        Vector {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Vector {
        Vector { x, y, z }
    }

    pub fn uniform(v: f64) -> Vector {
        Vector { x: v, y: v, z: v }
    }

    pub fn from_vec(v: &[f64]) -> Result<Vector> {
        if v.len() != 3 {
            Err(anyhow!("Array size mismatch: expected 3, got {}", v.len()))
        } else {
            Ok(Vector {
                x: v[0],
                y: v[1],
                z: v[2],
            })
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn scale(&self, scalar: f64) -> Vector {
        Vector {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }

    pub fn subtract(&self, other: &Vector) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Applies `f` to each component
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Vector {
        Vector::new(f(self.x), f(self.y), f(self.z))
    }

    pub fn clamp(&self, min: f64, max: f64) -> Vector {
        self.map(|v| v.clamp(min, max))
    }

    pub fn sum(&self) -> f64 {
        self.x + self.y + self.z
    }

    pub fn max_abs_diff(&self, other: &Vector) -> f64 {
        let d = self.subtract(other);
        d.x.abs().max(d.y.abs()).max(d.z.abs())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector index out of bounds: {}", index),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector index out of bounds: {}", index),
        }
    }
}

fn str_to_vec(s: &str) -> Result<Vec<f64>> {
    let inner = s
        .trim()
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(|| anyhow!("Vector string not enclosed in parentheses: {}", s))?;

    inner
        .split(',')
        .map(|n| {
            let n_t = n.trim();
            if string_is_valid_f64(n_t) {
                Ok(n_t.parse::<f64>()?)
            } else {
                Err(anyhow!("Encountered invalid float value string: {}", n_t))
            }
        })
        .collect()
}

/// Serializes a `Vector` as a `(x,y,z)` string
pub mod vector_format {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::util::vec_to_str;
    use crate::vector::{str_to_vec, Vector};

    pub fn serialize<S>(vector: &Vector, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = vec_to_str(&vector.to_vec());
        serializer.serialize_str(s.as_ref())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vector, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        let tuple_vec = str_to_vec(&s).map_err(D::Error::custom)?;
        Vector::from_vec(&tuple_vec).map_err(D::Error::custom)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", vec_to_str(&self.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_to_vec() {
        let v = str_to_vec("(0.5, 1,-2.25)").unwrap();
        assert_eq!(v, vec![0.5, 1.0, -2.25]);
        assert!(str_to_vec("0.5,1,2").is_err());
        assert!(str_to_vec("(0.5,abc,2)").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::new(0.5, 1.0, 0.0).to_string(), "(0.5,1,0)");
    }
}
