//! Circuit list IR
//!
//! A circuit is stored as an ordered list of English lines, one
//! tab-separated instruction per line, on a fixed number of qubits. This
//! crate parses those lines into typed [`Instruction`]s and supports the
//! operations needed to assemble and invert circuits without ever building
//! their matrices.
//!
//! # Core Components
//!
//! - **Instructions**: [`Instruction`] with its [`Opcode`], [`Control`] fields
//!   and [`AngleExpr`] operands
//! - **Placeholders**: [`PlaceholderResolver`] and the default
//!   [`HashPlaceholders`] grammar (`#2`, `-#1*3`, `my_fun#2#1`)
//! - **Building**: [`BuildOp`] names, [`Param`] values and the [`SeoWriter`]
//!   sink
//! - **Circuit**: [`CircuitList`] with append, concatenation, slicing,
//!   queries and [`herm`](CircuitList::herm)
//! - **Collaborators**: [`DiagramReader`] and [`Simulator`], which consume a
//!   circuit's English form
//!
//! # Example
//!
//! ```rust
//! use qlist_ir::{params, CircuitList};
//!
//! let mut circuit = CircuitList::new(3);
//! circuit.append("write_H", &params![0]).unwrap();
//! circuit.append("write_cnot", &params![0, 1]).unwrap();
//! circuit.append("write_Rz", &params![2, "my_fun#1#2"]).unwrap();
//!
//! let (vars, funs) = circuit.collect_variables_and_functions();
//! assert_eq!(vars, vec![1, 2]);
//! assert_eq!(funs, vec!["my_fun".to_string()]);
//!
//! // Reversed, with angles negated
//! let inverse = circuit.herm().unwrap();
//! assert_eq!(inverse.lines()[0], "ROTZ\t-my_fun#1#2\tAT\t2");
//! ```
//!
//! # Conjugation Rules
//!
//! | Opcode | Conjugate |
//! |--------|-----------|
//! | `PHAS`, `P0PH`, `P1PH`, `ROTX`, `ROTY`, `ROTZ` | angle negated |
//! | `ROTN` | all three angles negated |
//! | `DIAG`, `MP_Y` | every coefficient after `BY` negated |
//! | `HAD2`, `SIGX`, `SIGY`, `SIGZ`, `SWAP` | unchanged |
//! | `NOTA`, `PRINT`, `MEAS`, `LOOP`, `NEXT`, `IF_M(`, `}IF_M` | unchanged |
//! | anything else | [`IrError::UnsupportedInstructionKind`] |

pub mod angle;
pub mod collaborators;
mod conjugate;
pub mod control;
pub mod error;
pub mod instruction;
pub mod list;
pub mod persist;
pub mod placeholder;
pub mod writer;

pub use angle::AngleExpr;
pub use collaborators::{DiagramReader, Simulator, StagedCircuit};
pub use control::{Control, ControlKind};
pub use error::{IrError, IrResult, MaterializeError};
pub use instruction::{Instruction, Opcode, PhaseKind};
pub use list::CircuitList;
pub use placeholder::{HashPlaceholders, Placeholder, PlaceholderResolver};
pub use writer::{BuildOp, EnglishWriter, Param, SeoWriter};
