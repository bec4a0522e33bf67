use crate::vector::Vector;

use anyhow::{anyhow, Result};

/// 3x3 matrix, row-major
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    m: [f64; 9],
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix { m: [0.0; 9] }
    }
}

impl Matrix {
    pub const fn new(m: [f64; 9]) -> Matrix {
        Matrix { m }
    }

    pub fn identity() -> Matrix {
        Matrix {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn new_from_vec(m: &[f64]) -> Result<Matrix> {
        if m.len() == 9 {
            let mut a = [0.0; 9];
            a.copy_from_slice(m);
            Ok(Matrix { m: a })
        } else {
            Err(anyhow!("Array size mismatch: expected 9, got {}", m.len()))
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * 3 + col
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, v: f64) {
        let i = self.index(row, col);
        self.m[i] = v;
    }

    pub fn multiply_vector(&self, other: &Vector) -> Vector {
        let x = self.m[0] * other.x + self.m[1] * other.y + self.m[2] * other.z;
        let y = self.m[3] * other.x + self.m[4] * other.y + self.m[5] * other.z;
        let z = self.m[6] * other.x + self.m[7] * other.y + self.m[8] * other.z;
        Vector::new(x, y, z)
    }

    pub fn multiply(&self, other: &Matrix) -> Matrix {
        let mut product = Matrix::default();
        for row in 0..3 {
            for col in 0..3 {
                let v = (0..3).map(|k| self.get(row, k) * other.get(k, col)).sum();
                product.set(row, col, v);
            }
        }
        product
    }
}
