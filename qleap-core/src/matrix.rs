//! Dense complex matrix storage shared by gates, noise channels, and states

use crate::error::QuantumError;
use crate::Result;
use num_complex::Complex64;

/// A dense square complex matrix in row-major order
///
/// All operators in QLeap (gate matrices, Kraus operators, full-system
/// operators, density matrices) are stored this way. The dimension is
/// 2^n for an n-qubit operator; heavy products go through the numeric
/// backend, only cheap element-wise operations live here.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    /// Matrix elements, row-major, length `dimension²`
    data: Vec<Complex64>,
    /// Size of the square matrix
    dimension: usize,
}

impl Matrix {
    /// Create a matrix from row-major data
    ///
    /// # Errors
    /// Returns [`QuantumError::DimensionMismatch`] if `data.len()` is not
    /// `dimension²`.
    pub fn new(data: Vec<Complex64>, dimension: usize) -> Result<Self> {
        if data.len() != dimension * dimension {
            return Err(QuantumError::dimension_mismatch(
                dimension * dimension,
                data.len(),
            ));
        }
        Ok(Self { data, dimension })
    }

    /// Create a zero matrix of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        Self {
            data: vec![Complex64::new(0.0, 0.0); dimension * dimension],
            dimension,
        }
    }

    /// Create an identity matrix of the given dimension
    pub fn identity(dimension: usize) -> Self {
        let mut m = Self::zeros(dimension);
        for i in 0..dimension {
            m.set(i, i, Complex64::new(1.0, 0.0));
        }
        m
    }

    /// Create a 2×2 matrix from a fixed gate table
    pub fn from_2x2(table: &[[Complex64; 2]; 2]) -> Self {
        Self {
            data: vec![table[0][0], table[0][1], table[1][0], table[1][1]],
            dimension: 2,
        }
    }

    /// Matrix dimension
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of qubits this matrix acts on (dimension = 2^n)
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.dimension.trailing_zeros() as usize
    }

    /// Row-major element slice
    #[inline]
    pub fn data(&self) -> &[Complex64] {
        &self.data
    }

    /// Mutable row-major element slice
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Complex64] {
        &mut self.data
    }

    /// Element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dimension + col]
    }

    /// Set element at (row, col)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self.data[row * self.dimension + col] = value;
    }

    /// Conjugate transpose
    pub fn adjoint(&self) -> Self {
        let mut adj = Self::zeros(self.dimension);
        for i in 0..self.dimension {
            for j in 0..self.dimension {
                adj.set(j, i, self.get(i, j).conj());
            }
        }
        adj
    }

    /// Element-wise sum
    ///
    /// # Errors
    /// Returns [`QuantumError::DimensionMismatch`] if dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.dimension != other.dimension {
            return Err(QuantumError::dimension_mismatch(
                self.dimension,
                other.dimension,
            ));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self {
            data,
            dimension: self.dimension,
        })
    }

    /// Scale every element by a complex factor
    pub fn scale(&self, factor: Complex64) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * factor).collect(),
            dimension: self.dimension,
        }
    }

    /// Check whether this matrix is the identity within `tolerance`
    pub fn is_identity(&self, tolerance: f64) -> bool {
        for i in 0..self.dimension {
            for j in 0..self.dimension {
                let expected = if i == j {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::new(0.0, 0.0)
                };
                if (self.get(i, j) - expected).norm() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}
