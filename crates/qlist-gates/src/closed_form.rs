//! Closed-form gate formulas.
//!
//! These are the reference definitions of every gate in the algebra. The
//! [`GateAlgebra`](crate::GateAlgebra) dispatches here under
//! [`Strategy::ClosedForm`](crate::Strategy::ClosedForm).

use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::GateError;
use crate::matrix::{GateMatrix, Matrix2, RealMatrix2, ScalarKind};

/// Below this norm a rotation vector is treated as no rotation at all.
pub const DEGENERATE_NORM: f64 = 1e-8;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Rotation axis for [`rotation_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The x axis (sigma_x).
    X,
    /// The y axis (sigma_y).
    Y,
    /// The z axis (sigma_z).
    Z,
}

impl Axis {
    /// All axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Zero-based component index into an `(x, y, z)` vector.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Lowercase single-letter name.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Unit vector along this axis scaled by `length`.
    pub fn scaled(self, length: f64) -> [f64; 3] {
        let mut v = [0.0; 3];
        v[self.index()] = length;
        v
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "1" => Ok(Axis::X),
            "y" | "2" => Ok(Axis::Y),
            "z" | "3" => Ok(Axis::Z),
            _ => Err(GateError::InvalidAxis(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = GateError;

    /// Numeric selectors follow the 1 = x, 2 = y, 3 = z convention.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Axis::X),
            2 => Ok(Axis::Y),
            3 => Ok(Axis::Z),
            other => Err(GateError::InvalidAxis(other.to_string())),
        }
    }
}

fn real_or_complex(kind: ScalarKind, m: RealMatrix2) -> GateMatrix {
    match kind {
        ScalarKind::Real => GateMatrix::Real(m),
        ScalarKind::Complex => GateMatrix::Complex(m.to_complex()),
    }
}

/// Hadamard `(sigma_x + sigma_z) / sqrt(2)`.
pub fn hadamard(kind: ScalarKind) -> GateMatrix {
    let x = FRAC_1_SQRT_2;
    real_or_complex(kind, RealMatrix2::new(x, x, x, -x))
}

/// Projector `|0><0|`.
pub fn proj0(kind: ScalarKind) -> GateMatrix {
    real_or_complex(kind, RealMatrix2::new(1.0, 0.0, 0.0, 0.0))
}

/// Projector `|1><1|`.
pub fn proj1(kind: ScalarKind) -> GateMatrix {
    real_or_complex(kind, RealMatrix2::new(0.0, 0.0, 0.0, 1.0))
}

/// `exp(i*theta*P_0) = diag(e^{i theta}, 1)`.
pub fn phase0(theta: f64) -> Matrix2 {
    Matrix2::diagonal(Complex64::from_polar(1.0, theta), ONE)
}

/// `exp(i*theta*P_1) = diag(1, e^{i theta})`.
pub fn phase1(theta: f64) -> Matrix2 {
    Matrix2::diagonal(ONE, Complex64::from_polar(1.0, theta))
}

/// Global phase `e^{i theta} * I`.
pub fn phase(theta: f64) -> Matrix2 {
    let x = Complex64::from_polar(1.0, theta);
    Matrix2::diagonal(x, x)
}

/// `exp(i*(ax*sigma_x + ay*sigma_y + az*sigma_z))` by Rodrigues' formula.
///
/// A vector with norm below [`DEGENERATE_NORM`] yields the identity exactly.
#[allow(clippy::many_single_char_names)]
pub fn rotation_vector(ax: f64, ay: f64, az: f64) -> Matrix2 {
    let n = (ax * ax + ay * ay + az * az).sqrt();
    if n < DEGENERATE_NORM {
        return Matrix2::identity();
    }
    let (nx, ny, nz) = (ax / n, ay / n, az / n);
    let (s, c) = n.sin_cos();
    Matrix2::new(
        Complex64::new(c, s * nz),
        Complex64::new(s * ny, s * nx),
        Complex64::new(-s * ny, s * nx),
        Complex64::new(c, -s * nz),
    )
}

/// `exp(i*theta*sigma_axis)` without going through the 3-vector path.
pub fn rotation_axis(theta: f64, axis: Axis) -> Matrix2 {
    let (s, c) = theta.sin_cos();
    match axis {
        Axis::X => Matrix2::new(
            Complex64::new(c, 0.0),
            Complex64::new(0.0, s),
            Complex64::new(0.0, s),
            Complex64::new(c, 0.0),
        ),
        Axis::Y => Matrix2::new(
            Complex64::new(c, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(-s, 0.0),
            Complex64::new(c, 0.0),
        ),
        Axis::Z => Matrix2::diagonal(Complex64::new(c, s), Complex64::new(c, -s)),
    }
}

/// Pauli X.
pub fn pauli_x(kind: ScalarKind) -> GateMatrix {
    real_or_complex(kind, RealMatrix2::new(0.0, 1.0, 1.0, 0.0))
}

/// Pauli Y. Always complex.
pub fn pauli_y() -> Matrix2 {
    Matrix2::new(ZERO, Complex64::new(0.0, -1.0), Complex64::new(0.0, 1.0), ZERO)
}

/// Pauli Z.
pub fn pauli_z(kind: ScalarKind) -> GateMatrix {
    real_or_complex(kind, RealMatrix2::new(1.0, 0.0, 0.0, -1.0))
}

/// General U(2) element `e^{i r0} * rotation_vector(r1, r2, r3)`.
pub fn unitary2(r0: f64, r1: f64, r2: f64, r3: f64) -> Matrix2 {
    rotation_vector(r1, r2, r3).scale(Complex64::from_polar(1.0, r0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::UNITARITY_TOLERANCE;
    use std::f64::consts::PI;

    #[test]
    fn test_axis_parsing() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!("3".parse::<Axis>().unwrap(), Axis::Z);
        assert_eq!(Axis::try_from(2).unwrap(), Axis::Y);
        assert!(matches!("w".parse::<Axis>(), Err(GateError::InvalidAxis(_))));
        assert!(matches!(Axis::try_from(4), Err(GateError::InvalidAxis(_))));
    }

    #[test]
    fn test_degenerate_rotation_is_exact_identity() {
        assert_eq!(rotation_vector(0.0, 0.0, 0.0), Matrix2::identity());
        assert_eq!(rotation_vector(1e-9, 0.0, 0.0), Matrix2::identity());
    }

    #[test]
    fn test_rotation_axis_matches_vector() {
        for theta in [0.3, -1.2, PI / 3.0, 2.5] {
            for axis in Axis::ALL {
                let [x, y, z] = axis.scaled(theta);
                let general = rotation_vector(x, y, z);
                assert!(
                    rotation_axis(theta, axis).approx_eq(&general, 1e-12),
                    "axis {axis} theta {theta}"
                );
            }
        }
    }

    #[test]
    fn test_hadamard_entries() {
        let h = hadamard(ScalarKind::Real);
        let r = h.as_real().unwrap();
        assert!((r.get(0, 0) - FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((r.get(1, 1) + FRAC_1_SQRT_2).abs() < 1e-15);
        assert!(hadamard(ScalarKind::Complex).to_complex().is_unitary(UNITARITY_TOLERANCE));
    }

    #[test]
    fn test_projectors() {
        let p0 = proj0(ScalarKind::Complex).to_complex();
        let p1 = proj1(ScalarKind::Complex).to_complex();
        assert_eq!(p0.mul(&p0), p0);
        assert_eq!(p0.mul(&p1), Matrix2::zeros());
        assert_eq!(p0.get(0, 0) + p1.get(1, 1), Complex64::new(2.0, 0.0));
    }

    #[test]
    fn test_phase_gates() {
        let theta = 0.7;
        let p0 = phase0(theta);
        let p1 = phase1(theta);
        assert_eq!(p0.get(1, 1), ONE);
        assert_eq!(p1.get(0, 0), ONE);
        assert!((p0.get(0, 0) - Complex64::from_polar(1.0, theta)).norm() < 1e-15);
        // P_0 and P_1 phases combine into a global phase
        assert!(p0.mul(&p1).approx_eq(&phase(theta), 1e-12));
    }

    #[test]
    fn test_pauli_y_is_i_x_z() {
        let x = pauli_x(ScalarKind::Complex).to_complex();
        let z = pauli_z(ScalarKind::Complex).to_complex();
        let ixz = x.mul(&z).scale(Complex64::new(0.0, 1.0));
        assert!(ixz.approx_eq(&pauli_y(), 1e-12));
    }

    #[test]
    fn test_unitary2_global_phase() {
        let u = unitary2(0.4, 0.0, 0.0, 0.0);
        assert!(u.approx_eq(&phase(0.4), 1e-12));
    }
}
