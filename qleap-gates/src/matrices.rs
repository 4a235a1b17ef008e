//! Fixed single-qubit gate matrices and rotation constructors

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Identity gate matrix
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: [[Complex64; 2]; 2] = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// S gate matrix (phase gate, √Z)
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, I]];

/// T gate matrix (π/8 gate, √S)
/// T = [[1, 0],
///      [0, e^(iπ/4)]]
pub const T_GATE: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)], // e^(iπ/4) = (1+i)/√2
];

/// Projector onto |0⟩: |0⟩⟨0|
pub const PROJECTOR_0: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, ZERO]];

/// Projector onto |1⟩: |1⟩⟨1|
pub const PROJECTOR_1: [[Complex64; 2]; 2] = [[ZERO, ZERO], [ZERO, ONE]];

/// X-axis rotation
/// RX(θ) = [[cos(θ/2), -i·sin(θ/2)],
///          [-i·sin(θ/2), cos(θ/2)]]
pub fn rotation_x(theta: f64) -> [[Complex64; 2]; 2] {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new(0.0, -(theta / 2.0).sin());
    [[c, s], [s, c]]
}

/// Y-axis rotation
/// RY(θ) = [[cos(θ/2), -sin(θ/2)],
///          [sin(θ/2),  cos(θ/2)]]
pub fn rotation_y(theta: f64) -> [[Complex64; 2]; 2] {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new((theta / 2.0).sin(), 0.0);
    [[c, -s], [s, c]]
}

/// Z-axis rotation
/// RZ(φ) = [[e^(-iφ/2), 0],
///          [0, e^(iφ/2)]]
pub fn rotation_z(phi: f64) -> [[Complex64; 2]; 2] {
    let phase = Complex64::from_polar(1.0, -phi / 2.0);
    [[phase, ZERO], [ZERO, phase.conj()]]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn mult_2x2(a: &[[Complex64; 2]; 2], b: &[[Complex64; 2]; 2]) -> [[Complex64; 2]; 2] {
        let mut result = [[ZERO; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    result[i][j] += a[i][k] * b[k][j];
                }
            }
        }
        result
    }

    fn adjoint_2x2(m: &[[Complex64; 2]; 2]) -> [[Complex64; 2]; 2] {
        [
            [m[0][0].conj(), m[1][0].conj()],
            [m[0][1].conj(), m[1][1].conj()],
        ]
    }

    fn is_identity_2x2(m: &[[Complex64; 2]; 2]) -> bool {
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { ONE } else { ZERO };
                if (m[i][j] - expected).norm() > EPSILON {
                    return false;
                }
            }
        }
        true
    }

    fn is_unitary_2x2(m: &[[Complex64; 2]; 2]) -> bool {
        is_identity_2x2(&mult_2x2(&adjoint_2x2(m), m))
    }

    #[test]
    fn test_fixed_gates_are_unitary() {
        for gate in [IDENTITY, PAULI_X, PAULI_Y, PAULI_Z, HADAMARD, S_GATE, T_GATE] {
            assert!(is_unitary_2x2(&gate));
        }
    }

    #[test]
    fn test_pauli_gates_are_involutions() {
        for gate in [PAULI_X, PAULI_Y, PAULI_Z, HADAMARD] {
            assert!(is_identity_2x2(&mult_2x2(&gate, &gate)));
        }
    }

    #[test]
    fn test_s_squared_is_z() {
        let s2 = mult_2x2(&S_GATE, &S_GATE);
        for i in 0..2 {
            for j in 0..2 {
                assert!((s2[i][j] - PAULI_Z[i][j]).norm() < EPSILON);
            }
        }
    }

    #[test]
    fn test_t_squared_is_s() {
        let t2 = mult_2x2(&T_GATE, &T_GATE);
        for i in 0..2 {
            for j in 0..2 {
                assert!((t2[i][j] - S_GATE[i][j]).norm() < EPSILON);
            }
        }
    }

    #[test]
    fn test_rotations_are_unitary_for_arbitrary_angles() {
        let angles = [
            -7.3,
            -std::f64::consts::PI,
            -0.1,
            0.0,
            0.001,
            std::f64::consts::FRAC_PI_4,
            std::f64::consts::PI,
            12.9,
        ];
        for theta in angles {
            assert!(is_unitary_2x2(&rotation_x(theta)), "RX({}) not unitary", theta);
            assert!(is_unitary_2x2(&rotation_y(theta)), "RY({}) not unitary", theta);
            assert!(is_unitary_2x2(&rotation_z(theta)), "RZ({}) not unitary", theta);
        }
    }

    #[test]
    fn test_rotation_x_pi_is_x_up_to_phase() {
        // RX(π) = -i·X
        let rx = rotation_x(std::f64::consts::PI);
        for i in 0..2 {
            for j in 0..2 {
                assert!((rx[i][j] - NEG_I * PAULI_X[i][j]).norm() < EPSILON);
            }
        }
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        assert!(is_identity_2x2(&rotation_x(0.0)));
        assert!(is_identity_2x2(&rotation_y(0.0)));
        assert!(is_identity_2x2(&rotation_z(0.0)));
    }

    #[test]
    fn test_projectors_sum_to_identity() {
        let mut sum = [[ZERO; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                sum[i][j] = PROJECTOR_0[i][j] + PROJECTOR_1[i][j];
            }
        }
        assert!(is_identity_2x2(&sum));
    }
}
