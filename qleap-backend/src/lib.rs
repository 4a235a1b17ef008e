//! Numeric backend abstraction for QLeap
//!
//! All heavy linear algebra (Kronecker products, matrix products,
//! matrix–vector products) goes through the [`LinalgBackend`] trait.
//! The backend is injected into the simulation engine at construction,
//! so the numeric implementation is explicit and swappable per instance
//! rather than a process-wide singleton resolved from the environment.
//!
//! [`CpuBackend`] is the reference implementation: dense, row-major,
//! parallelized across rows with rayon once matrices are large enough
//! for the fork overhead to pay off.

use num_complex::Complex64;
use qleap_core::{Matrix, QuantumError, Result};
use rayon::prelude::*;
use std::fmt;

/// Row count above which `CpuBackend` products run on the rayon pool
const PARALLEL_THRESHOLD: usize = 64;

/// Dense linear algebra operations over [`Matrix`]
///
/// Implementations must be stateless and thread-safe: one backend
/// instance may serve several concurrently running engines. The
/// contract is full-operator materialization; an implementation that
/// applies gates as localized contractions instead may be substituted
/// as long as observable results are identical.
pub trait LinalgBackend: Send + Sync + fmt::Debug {
    /// Kronecker (tensor) product `a ⊗ b`
    fn kron(&self, a: &Matrix, b: &Matrix) -> Matrix;

    /// Matrix product `a · b`
    ///
    /// # Errors
    /// Returns [`QuantumError::DimensionMismatch`] if dimensions differ.
    fn matmul(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;

    /// Matrix–vector product `a · v`
    ///
    /// # Errors
    /// Returns [`QuantumError::DimensionMismatch`] if `v.len()` differs
    /// from the matrix dimension.
    fn matvec(&self, a: &Matrix, v: &[Complex64]) -> Result<Vec<Complex64>>;

    /// Conjugation `op · rho · op†`, the density-matrix evolution step
    fn conjugate(&self, op: &Matrix, rho: &Matrix) -> Result<Matrix> {
        let right = self.matmul(rho, &op.adjoint())?;
        self.matmul(op, &right)
    }
}

/// Dense CPU backend
///
/// # Example
/// ```
/// use qleap_backend::{CpuBackend, LinalgBackend};
/// use qleap_core::Matrix;
///
/// let backend = CpuBackend::new();
/// let id = Matrix::identity(2);
/// let full = backend.kron(&id, &id);
/// assert_eq!(full.dimension(), 4);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuBackend;

impl CpuBackend {
    /// Create a new CPU backend
    pub fn new() -> Self {
        Self
    }
}

impl LinalgBackend for CpuBackend {
    fn kron(&self, a: &Matrix, b: &Matrix) -> Matrix {
        let an = a.dimension();
        let bn = b.dimension();
        let n = an * bn;
        let mut out = Matrix::zeros(n);

        for ai in 0..an {
            for aj in 0..an {
                let factor = a.get(ai, aj);
                if factor == Complex64::new(0.0, 0.0) {
                    continue;
                }
                for bi in 0..bn {
                    for bj in 0..bn {
                        out.set(ai * bn + bi, aj * bn + bj, factor * b.get(bi, bj));
                    }
                }
            }
        }
        out
    }

    fn matmul(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = a.dimension();
        if b.dimension() != n {
            return Err(QuantumError::dimension_mismatch(n, b.dimension()));
        }

        let mut out = Matrix::zeros(n);
        let a_data = a.data();
        let b_data = b.data();

        let row_product = |i: usize, row: &mut [Complex64]| {
            for k in 0..n {
                let aik = a_data[i * n + k];
                if aik == Complex64::new(0.0, 0.0) {
                    continue;
                }
                for (j, out_ij) in row.iter_mut().enumerate() {
                    *out_ij += aik * b_data[k * n + j];
                }
            }
        };

        if n >= PARALLEL_THRESHOLD {
            out.data_mut()
                .par_chunks_mut(n)
                .enumerate()
                .for_each(|(i, row)| row_product(i, row));
        } else {
            out.data_mut()
                .chunks_mut(n)
                .enumerate()
                .for_each(|(i, row)| row_product(i, row));
        }

        Ok(out)
    }

    fn matvec(&self, a: &Matrix, v: &[Complex64]) -> Result<Vec<Complex64>> {
        let n = a.dimension();
        if v.len() != n {
            return Err(QuantumError::dimension_mismatch(n, v.len()));
        }

        let a_data = a.data();
        let row_dot = |i: usize| -> Complex64 {
            let mut acc = Complex64::new(0.0, 0.0);
            for (k, &vk) in v.iter().enumerate() {
                acc += a_data[i * n + k] * vk;
            }
            acc
        };

        let out = if n >= PARALLEL_THRESHOLD {
            (0..n).into_par_iter().map(row_dot).collect()
        } else {
            (0..n).map(row_dot).collect()
        };

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ZERO: Complex64 = Complex64::new(0.0, 0.0);
    const ONE: Complex64 = Complex64::new(1.0, 0.0);

    fn pauli_x() -> Matrix {
        Matrix::from_2x2(&[[ZERO, ONE], [ONE, ZERO]])
    }

    #[test]
    fn test_kron_identity_grows_dimension() {
        let backend = CpuBackend::new();
        let id2 = Matrix::identity(2);
        let id4 = backend.kron(&id2, &id2);
        assert_eq!(id4.dimension(), 4);
        assert!(id4.is_identity(1e-12));
    }

    #[test]
    fn test_kron_x_with_identity() {
        // X ⊗ I swaps the upper and lower halves of a 2-qubit system
        let backend = CpuBackend::new();
        let op = backend.kron(&pauli_x(), &Matrix::identity(2));

        assert_eq!(op.get(0, 2), ONE);
        assert_eq!(op.get(1, 3), ONE);
        assert_eq!(op.get(2, 0), ONE);
        assert_eq!(op.get(3, 1), ONE);
        assert_eq!(op.get(0, 0), ZERO);
    }

    #[test]
    fn test_kron_scalar_seed() {
        // A 1×1 identity is the neutral element of the kron chain
        let backend = CpuBackend::new();
        let seed = Matrix::identity(1);
        let x = pauli_x();
        assert_eq!(backend.kron(&seed, &x), x);
    }

    #[test]
    fn test_matmul_x_squared_is_identity() {
        let backend = CpuBackend::new();
        let x = pauli_x();
        let product = backend.matmul(&x, &x).unwrap();
        assert!(product.is_identity(1e-12));
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let backend = CpuBackend::new();
        let a = Matrix::identity(2);
        let b = Matrix::identity(4);
        assert!(backend.matmul(&a, &b).is_err());
    }

    #[test]
    fn test_matvec_applies_bit_flip() {
        let backend = CpuBackend::new();
        let v = vec![ONE, ZERO];
        let flipped = backend.matvec(&pauli_x(), &v).unwrap();
        assert_eq!(flipped, vec![ZERO, ONE]);
    }

    #[test]
    fn test_matvec_dimension_mismatch() {
        let backend = CpuBackend::new();
        let v = vec![ONE; 3];
        assert!(backend.matvec(&Matrix::identity(2), &v).is_err());
    }

    #[test]
    fn test_conjugate_preserves_trace() {
        // H · |0⟩⟨0| · H† keeps unit trace
        let backend = CpuBackend::new();
        let inv_sqrt2 = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        let h = Matrix::from_2x2(&[[inv_sqrt2, inv_sqrt2], [inv_sqrt2, -inv_sqrt2]]);

        let mut rho = Matrix::zeros(2);
        rho.set(0, 0, ONE);

        let evolved = backend.conjugate(&h, &rho).unwrap();
        let trace = evolved.get(0, 0).re + evolved.get(1, 1).re;
        assert_relative_eq!(trace, 1.0, epsilon = 1e-12);

        // Superposition: every element is 1/2
        assert_relative_eq!(evolved.get(0, 1).re, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_path_matches_serial() {
        // A permutation matrix large enough to cross PARALLEL_THRESHOLD
        let backend = CpuBackend::new();
        let n = 128;
        let mut perm = Matrix::zeros(n);
        for i in 0..n {
            perm.set(i, (i + 1) % n, ONE);
        }

        let v: Vec<Complex64> = (0..n).map(|i| Complex64::new(i as f64, 0.0)).collect();
        let rotated = backend.matvec(&perm, &v).unwrap();
        assert_eq!(rotated[0], Complex64::new(1.0, 0.0));
        assert_eq!(rotated[n - 1], Complex64::new(0.0, 0.0));

        let squared = backend.matmul(&perm, &perm).unwrap();
        assert_eq!(squared.get(0, 2), ONE);
    }
}
