//! qlist single-qubit gate algebra
//!
//! Pure functions from physical parameters (angles, axes) to 2x2 matrices.
//! Every parametrized gate reduces to two primitives, a diagonal phase and a
//! three-parameter rotation, which is what lets the circuit IR invert a gate
//! by negating its angle arguments.
//!
//! # Core Components
//!
//! - **Matrices**: [`Matrix2`] (complex), [`RealMatrix2`] and [`GateMatrix`]
//!   for gates that honour the real/complex [`ScalarKind`] toggle
//! - **Closed forms**: the [`closed_form`] module, one free function per gate
//! - **Strategies**: [`GateAlgebra`] built with a [`Strategy`], either the
//!   closed forms or a single injected [`UnitaryKernel`]
//!
//! # Example
//!
//! ```rust
//! use qlist_gates::{Axis, GateAlgebra, ParametrizationKind, UNITARITY_TOLERANCE};
//!
//! let closed = GateAlgebra::new();
//! let uniform = GateAlgebra::from_kind(ParametrizationKind::GeneralU2);
//!
//! let a = closed.rotation_axis(0.25, Axis::X);
//! let b = uniform.rotation_vector(0.25, 0.0, 0.0);
//! assert!(a.approx_eq(&b, 1e-12));
//! assert!(a.is_unitary(UNITARITY_TOLERANCE));
//! ```
//!
//! # Gates
//!
//! | Method | Matrix |
//! |--------|--------|
//! | `hadamard` | `(sigma_x + sigma_z)/sqrt(2)` |
//! | `proj0`, `proj1` | `diag(1, 0)`, `diag(0, 1)` |
//! | `phase0(t)`, `phase1(t)` | `diag(e^{it}, 1)`, `diag(1, e^{it})` |
//! | `phase(t)` | `e^{it} I` |
//! | `rotation_vector(x, y, z)` | `exp(i(x sigma_x + y sigma_y + z sigma_z))` |
//! | `rotation_axis(t, axis)` | `exp(i t sigma_axis)` |
//! | `pauli_x`, `pauli_y`, `pauli_z` | Pauli matrices |
//! | `gate_s`, `gate_t` | `phase1(pi/2)`, `phase1(pi/4)` |
//! | `unitary2(r0, r1, r2, r3)` | `e^{i r0} rotation_vector(r1, r2, r3)` |

pub mod algebra;
pub mod closed_form;
pub mod error;
pub mod matrix;
pub mod strategy;

pub use algebra::GateAlgebra;
pub use closed_form::Axis;
pub use error::{GateError, GateResult};
pub use matrix::{GateMatrix, Matrix2, RealMatrix2, ScalarKind, UNITARITY_TOLERANCE};
pub use strategy::{ParametrizationKind, RodriguesKernel, Strategy, UnitaryKernel};
