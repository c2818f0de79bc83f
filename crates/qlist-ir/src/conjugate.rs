//! Per-instruction Hermitian conjugation.

use crate::angle::AngleExpr;
use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;

fn negate_all(angles: &[AngleExpr]) -> Vec<AngleExpr> {
    angles.iter().map(AngleExpr::negated).collect()
}

impl Instruction {
    /// The conjugate transpose of this instruction as a single line.
    ///
    /// Angle-carrying gates get their angles negated. `DIAG` is
    /// `diag(e^{iθ_k})` and `MP_Y` is block diagonal in `Ry(θ_k)`, so each
    /// block inverts by negating its own coefficient. Self-inverse gates and
    /// non-gate lines are returned unchanged.
    ///
    /// # Errors
    ///
    /// [`IrError::UnsupportedInstructionKind`] for opaque lines.
    pub fn conjugate(&self) -> IrResult<Instruction> {
        let inst = match self {
            Instruction::Phase {
                kind,
                angle,
                target,
                controls,
            } => Instruction::Phase {
                kind: *kind,
                angle: angle.negated(),
                target: *target,
                controls: controls.clone(),
            },
            Instruction::Rotation {
                axis,
                angle,
                target,
                controls,
            } => Instruction::Rotation {
                axis: *axis,
                angle: angle.negated(),
                target: *target,
                controls: controls.clone(),
            },
            Instruction::RotationN {
                angles,
                target,
                controls,
            } => Instruction::RotationN {
                angles: [angles[0].negated(), angles[1].negated(), angles[2].negated()],
                target: *target,
                controls: controls.clone(),
            },
            Instruction::Diag {
                controls,
                coefficients,
            } => Instruction::Diag {
                controls: controls.clone(),
                coefficients: negate_all(coefficients),
            },
            Instruction::MultiplexorY {
                target,
                controls,
                coefficients,
            } => Instruction::MultiplexorY {
                target: *target,
                controls: controls.clone(),
                coefficients: negate_all(coefficients),
            },
            Instruction::Had2 { .. }
            | Instruction::Pauli { .. }
            | Instruction::Swap { .. }
            | Instruction::Measure { .. }
            | Instruction::Note(_)
            | Instruction::Print(_)
            | Instruction::LoopBegin { .. }
            | Instruction::LoopEnd { .. }
            | Instruction::IfMeasuredBegin { .. }
            | Instruction::IfMeasuredEnd => self.clone(),
            Instruction::Opaque { opcode, .. } => {
                return Err(IrError::UnsupportedInstructionKind(opcode.clone()));
            }
        };
        Ok(inst)
    }
}
