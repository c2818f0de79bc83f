//! Unitary parametrization strategies.
//!
//! A [`GateAlgebra`](crate::GateAlgebra) either evaluates every gate from its
//! own closed form, or routes every unitary through one general `U(2)`
//! parametrization supplied by a [`UnitaryKernel`]. The second mode exists so
//! that an automatic-differentiation backend only has to implement a single
//! entry point; the kernel is passed in explicitly when the algebra is built.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::closed_form;
use crate::matrix::Matrix2;

/// A single general `U(2)` parametrization.
///
/// `u2(r0, r1, r2, r3)` must equal `exp(i*(r0 + r1*sigma_x + r2*sigma_y + r3*sigma_z))`.
pub trait UnitaryKernel: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Evaluate the parametrization.
    fn u2(&self, r0: f64, r1: f64, r2: f64, r3: f64) -> Matrix2;
}

/// The built-in kernel: a global phase times Rodrigues' rotation formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct RodriguesKernel;

impl UnitaryKernel for RodriguesKernel {
    fn name(&self) -> &str {
        "rodrigues"
    }

    fn u2(&self, r0: f64, r1: f64, r2: f64, r3: f64) -> Matrix2 {
        closed_form::unitary2(r0, r1, r2, r3)
    }
}

/// How a [`GateAlgebra`](crate::GateAlgebra) computes its matrices.
#[derive(Clone, Default)]
pub enum Strategy {
    /// Dedicated closed-form formula per gate.
    #[default]
    ClosedForm,
    /// Every unitary goes through the kernel's `u2`.
    Uniform(Arc<dyn UnitaryKernel>),
}

impl Strategy {
    /// Uniform strategy over the given kernel.
    pub fn uniform(kernel: impl UnitaryKernel + 'static) -> Self {
        Strategy::Uniform(Arc::new(kernel))
    }

    /// The serializable kind of this strategy.
    pub fn kind(&self) -> ParametrizationKind {
        match self {
            Strategy::ClosedForm => ParametrizationKind::ClosedForm,
            Strategy::Uniform(_) => ParametrizationKind::GeneralU2,
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::ClosedForm => f.write_str("ClosedForm"),
            Strategy::Uniform(kernel) => f.debug_tuple("Uniform").field(&kernel.name()).finish(),
        }
    }
}

/// Configuration-level selector for a [`Strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParametrizationKind {
    /// Closed-form formulas.
    #[default]
    ClosedForm,
    /// Everything through the built-in general `U(2)` kernel.
    GeneralU2,
}

impl From<ParametrizationKind> for Strategy {
    fn from(kind: ParametrizationKind) -> Self {
        match kind {
            ParametrizationKind::ClosedForm => Strategy::ClosedForm,
            ParametrizationKind::GeneralU2 => Strategy::uniform(RodriguesKernel),
        }
    }
}
