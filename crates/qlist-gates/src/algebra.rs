//! Strategy-aware gate algebra.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

use tracing::trace;

use crate::closed_form::{self, Axis};
use crate::matrix::{GateMatrix, Matrix2, ScalarKind};
use crate::strategy::{ParametrizationKind, Strategy, UnitaryKernel};

/// Single-qubit gate library parametrized by a [`Strategy`].
///
/// With [`Strategy::ClosedForm`] every method returns the formula from
/// [`closed_form`]. With [`Strategy::Uniform`] every unitary with complex
/// entries is produced by the kernel's `u2`, using:
///
/// | Gate | `u2(r0, r1, r2, r3)` |
/// |------|----------------------|
/// | `phase0(t)` | `(t/2, 0, 0, t/2)` |
/// | `phase1(t)` | `(t/2, 0, 0, -t/2)` |
/// | `phase(t)` | `(t, 0, 0, 0)` |
/// | `rotation_vector(x, y, z)` | `(0, x, y, z)` |
/// | Pauli `sigma_k` | `(-pi/2, pi/2 * e_k)` |
/// | Hadamard | `(-pi/2, pi/(2 sqrt 2), 0, pi/(2 sqrt 2))` |
///
/// Real-valued requests and the projectors are constants and always use the
/// closed form.
#[derive(Debug, Clone, Default)]
pub struct GateAlgebra {
    strategy: Strategy,
}

impl GateAlgebra {
    /// Closed-form algebra.
    pub fn new() -> Self {
        Self::default()
    }

    /// Algebra with an explicit strategy.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Algebra routing every unitary through `kernel`.
    pub fn with_kernel(kernel: impl UnitaryKernel + 'static) -> Self {
        Self::with_strategy(Strategy::uniform(kernel))
    }

    /// Algebra for a configuration-level selector.
    pub fn from_kind(kind: ParametrizationKind) -> Self {
        Self::with_strategy(kind.into())
    }

    /// The active strategy.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    #[inline]
    fn kernel(&self) -> Option<&dyn UnitaryKernel> {
        match &self.strategy {
            Strategy::ClosedForm => None,
            Strategy::Uniform(kernel) => Some(kernel.as_ref()),
        }
    }

    fn via_kernel(
        &self,
        gate: &str,
        params: [f64; 4],
        closed: impl FnOnce() -> Matrix2,
    ) -> Matrix2 {
        match self.kernel() {
            Some(kernel) => {
                trace!(gate, kernel = kernel.name(), ?params, "u2 dispatch");
                let [r0, r1, r2, r3] = params;
                kernel.u2(r0, r1, r2, r3)
            }
            None => closed(),
        }
    }

    fn constant(
        &self,
        gate: &str,
        kind: ScalarKind,
        params: [f64; 4],
        closed: impl FnOnce(ScalarKind) -> GateMatrix,
    ) -> GateMatrix {
        match (kind, self.kernel()) {
            (ScalarKind::Complex, Some(_)) => {
                GateMatrix::Complex(self.via_kernel(gate, params, || closed(kind).to_complex()))
            }
            _ => closed(kind),
        }
    }

    /// Hadamard `(sigma_x + sigma_z) / sqrt(2)`.
    pub fn hadamard(&self, kind: ScalarKind) -> GateMatrix {
        let a = FRAC_PI_2 / SQRT_2;
        self.constant("hadamard", kind, [-FRAC_PI_2, a, 0.0, a], closed_form::hadamard)
    }

    /// Projector onto `|0>`. Not unitary.
    pub fn proj0(&self, kind: ScalarKind) -> GateMatrix {
        closed_form::proj0(kind)
    }

    /// Projector onto `|1>`. Not unitary.
    pub fn proj1(&self, kind: ScalarKind) -> GateMatrix {
        closed_form::proj1(kind)
    }

    /// `diag(e^{i theta}, 1)`.
    pub fn phase0(&self, theta: f64) -> Matrix2 {
        let h = theta / 2.0;
        self.via_kernel("phase0", [h, 0.0, 0.0, h], || closed_form::phase0(theta))
    }

    /// `diag(1, e^{i theta})`.
    pub fn phase1(&self, theta: f64) -> Matrix2 {
        let h = theta / 2.0;
        self.via_kernel("phase1", [h, 0.0, 0.0, -h], || closed_form::phase1(theta))
    }

    /// `e^{i theta} * I`.
    pub fn phase(&self, theta: f64) -> Matrix2 {
        self.via_kernel("phase", [theta, 0.0, 0.0, 0.0], || closed_form::phase(theta))
    }

    /// `exp(i*(ax*sigma_x + ay*sigma_y + az*sigma_z))`.
    pub fn rotation_vector(&self, ax: f64, ay: f64, az: f64) -> Matrix2 {
        self.via_kernel("rotation_vector", [0.0, ax, ay, az], || {
            closed_form::rotation_vector(ax, ay, az)
        })
    }

    /// `exp(i*theta*sigma_axis)`.
    pub fn rotation_axis(&self, theta: f64, axis: Axis) -> Matrix2 {
        let [x, y, z] = axis.scaled(theta);
        self.via_kernel("rotation_axis", [0.0, x, y, z], || {
            closed_form::rotation_axis(theta, axis)
        })
    }

    /// Pauli X.
    pub fn pauli_x(&self, kind: ScalarKind) -> GateMatrix {
        self.constant("pauli_x", kind, [-FRAC_PI_2, FRAC_PI_2, 0.0, 0.0], closed_form::pauli_x)
    }

    /// Pauli Y. Always complex.
    pub fn pauli_y(&self) -> Matrix2 {
        self.via_kernel("pauli_y", [-FRAC_PI_2, 0.0, FRAC_PI_2, 0.0], closed_form::pauli_y)
    }

    /// Pauli Z.
    pub fn pauli_z(&self, kind: ScalarKind) -> GateMatrix {
        self.constant("pauli_z", kind, [-FRAC_PI_2, 0.0, 0.0, FRAC_PI_2], closed_form::pauli_z)
    }

    /// S gate, `phase1(pi/2)`; the dagger negates the angle.
    pub fn gate_s(&self, dagger: bool) -> Matrix2 {
        self.phase1(signed(FRAC_PI_2, dagger))
    }

    /// T gate, `phase1(pi/4)`; the dagger negates the angle.
    pub fn gate_t(&self, dagger: bool) -> Matrix2 {
        self.phase1(signed(FRAC_PI_4, dagger))
    }

    /// General `U(2)` element `e^{i r0} * rotation_vector(r1, r2, r3)`.
    pub fn unitary2(&self, r0: f64, r1: f64, r2: f64, r3: f64) -> Matrix2 {
        self.via_kernel("unitary2", [r0, r1, r2, r3], || {
            closed_form::unitary2(r0, r1, r2, r3)
        })
    }
}

#[inline]
fn signed(angle: f64, dagger: bool) -> f64 {
    if dagger { -angle } else { angle }
}
