//! 2x2 matrix types returned by the gate algebra.

use std::fmt;
use std::ops::{Index, Mul};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Default tolerance used by [`Matrix2::is_unitary`] callers in this crate.
pub const UNITARITY_TOLERANCE: f64 = 1e-9;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Whether a gate with all-real entries should be returned as a real or a
/// complex matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// `f64` entries.
    Real,
    /// `Complex64` entries.
    #[default]
    Complex,
}

/// A complex 2x2 matrix in row-major order: `[[a, b], [c, d]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix2 {
    /// The matrix elements in row-major order.
    pub data: [Complex64; 4],
}

impl Matrix2 {
    /// Create a matrix from its four entries.
    pub const fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Create a diagonal matrix.
    pub const fn diagonal(a: Complex64, d: Complex64) -> Self {
        Self::new(a, ZERO, ZERO, d)
    }

    /// The 2x2 identity.
    pub const fn identity() -> Self {
        Self::diagonal(ONE, ONE)
    }

    /// The 2x2 zero matrix.
    pub const fn zeros() -> Self {
        Self::diagonal(ZERO, ZERO)
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[2 * row + col]
    }

    /// Matrix product `self * other`.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Multiply every entry by a scalar.
    #[must_use]
    pub fn scale(&self, factor: Complex64) -> Self {
        Self {
            data: self.data.map(|z| z * factor),
        }
    }

    /// Conjugate transpose.
    #[must_use]
    pub fn adjoint(&self) -> Self {
        Self::new(
            self.data[0].conj(),
            self.data[2].conj(),
            self.data[1].conj(),
            self.data[3].conj(),
        )
    }

    /// Largest entry-wise distance to `other`.
    pub fn max_distance(&self, other: &Self) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max)
    }

    /// Entry-wise comparison within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.max_distance(other) <= tol
    }

    /// Check `U * U^H = I` within `tol`.
    pub fn is_unitary(&self, tol: f64) -> bool {
        self.mul(&self.adjoint()).approx_eq(&Self::identity(), tol)
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix2 {
    type Output = Self;

    #[allow(clippy::needless_pass_by_value)]
    fn mul(self, rhs: Self) -> Self::Output {
        Matrix2::mul(&self, &rhs)
    }
}

impl Index<(usize, usize)> for Matrix2 {
    type Output = Complex64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[2 * row + col]
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.data;
        write!(f, "[[{a}, {b}], [{c}, {d}]]")
    }
}

/// A real 2x2 matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealMatrix2 {
    /// The matrix elements in row-major order.
    pub data: [f64; 4],
}

impl RealMatrix2 {
    /// Create a matrix from its four entries.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[2 * row + col]
    }

    /// Promote to a complex matrix.
    pub fn to_complex(&self) -> Matrix2 {
        let [a, b, c, d] = self.data.map(|x| Complex64::new(x, 0.0));
        Matrix2::new(a, b, c, d)
    }
}

impl Index<(usize, usize)> for RealMatrix2 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[2 * row + col]
    }
}

/// A gate matrix whose entry type was chosen by a [`ScalarKind`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateMatrix {
    /// Real-valued entries.
    Real(RealMatrix2),
    /// Complex-valued entries.
    Complex(Matrix2),
}

impl GateMatrix {
    /// The scalar kind of this matrix.
    pub fn kind(&self) -> ScalarKind {
        match self {
            GateMatrix::Real(_) => ScalarKind::Real,
            GateMatrix::Complex(_) => ScalarKind::Complex,
        }
    }

    /// View as a complex matrix, promoting real entries.
    pub fn to_complex(&self) -> Matrix2 {
        match self {
            GateMatrix::Real(m) => m.to_complex(),
            GateMatrix::Complex(m) => *m,
        }
    }

    /// Get the real matrix, if this is one.
    pub fn as_real(&self) -> Option<&RealMatrix2> {
        match self {
            GateMatrix::Real(m) => Some(m),
            GateMatrix::Complex(_) => None,
        }
    }
}

impl From<Matrix2> for GateMatrix {
    fn from(m: Matrix2) -> Self {
        GateMatrix::Complex(m)
    }
}

impl From<RealMatrix2> for GateMatrix {
    fn from(m: RealMatrix2) -> Self {
        GateMatrix::Real(m)
    }
}
