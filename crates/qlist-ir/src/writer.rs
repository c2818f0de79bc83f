//! Circuit-building primitives and the English line writer.
//!
//! [`CircuitList::append`](crate::CircuitList::append) takes an operation name
//! such as `"write_Rx"` and a parameter list. The name is resolved through the
//! closed [`BuildOp`] set, the parameters are checked against that operation's
//! signature, and the matching [`SeoWriter`] method emits exactly one line.
//!
//! Angles passed as numbers are in radians and are written in degrees.
//! Angles passed as strings must be placeholders (or numeric text) and are
//! written verbatim.

use std::fmt;
use std::str::FromStr;

use qlist_gates::Axis;

use crate::angle::AngleExpr;
use crate::control::Control;
use crate::error::{IrError, IrResult};
use crate::instruction::{Instruction, PhaseKind};

/// A parameter of a building operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Integer (qubit positions, ids, counts, angles in radians).
    Int(i64),
    /// Real number (angles in radians).
    Float(f64),
    /// Flag.
    Bool(bool),
    /// Text (placeholders, control tokens, notes).
    Str(String),
    /// Nested list (angle vectors, control lists).
    List(Vec<Param>),
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Int(v)
    }
}

impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::Int(i64::from(v))
    }
}

impl From<usize> for Param {
    fn from(v: usize) -> Self {
        Param::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::Float(v)
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Bool(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Str(v.to_string())
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Str(v)
    }
}

impl<T: Into<Param>> From<Vec<T>> for Param {
    fn from(v: Vec<T>) -> Self {
        Param::List(v.into_iter().map(Into::into).collect())
    }
}

/// Builds a `Vec<Param>` from heterogeneous values.
///
/// ```
/// use qlist_ir::params;
/// let p = params![2, vec![0.5, -0.5, 1.0]];
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    ($($p:expr),* $(,)?) => {
        vec![$($crate::Param::from($p)),*]
    };
}

/// The closed set of building operations accepted by `append`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildOp {
    /// `write_H(target)`
    Hadamard,
    /// `write_X(target)`
    PauliX,
    /// `write_Y(target)`
    PauliY,
    /// `write_Z(target)`
    PauliZ,
    /// `write_cnot(control, target)`
    Cnot,
    /// `write_cz(control, target)`
    Cz,
    /// `write_Rx(target, angle)`
    Rx,
    /// `write_Ry(target, angle)`
    Ry,
    /// `write_Rz(target, angle)`
    Rz,
    /// `write_Rn(target, [ax, ay, az])`
    Rn,
    /// `write_global_phase(target, angle)`
    GlobalPhase,
    /// `write_P0_phase(target, angle)`
    P0Phase,
    /// `write_P1_phase(target, angle)`
    P1Phase,
    /// `write_S(target[, dagger])`
    S,
    /// `write_T(target[, dagger])`
    T,
    /// `write_swap(b1, b0)`
    Swap,
    /// `write_MEAS(target, kind)`
    Measure,
    /// `write_NOTA(text)`
    Note,
    /// `write_PRINT(style)`
    Print,
    /// `write_LOOP(id, reps)`
    Loop,
    /// `write_NEXT(id)`
    Next,
    /// `write_IF_M_beg([conditions])`
    IfMeasuredBegin,
    /// `write_IF_M_end()`
    IfMeasuredEnd,
    /// `write_diag([controls], [angles])`
    Diag,
    /// `write_mp_y(target, [controls], [angles])`
    MultiplexorY,
}

impl BuildOp {
    /// Every operation with its registered name.
    pub const REGISTRY: [(&'static str, BuildOp); 25] = [
        ("write_H", BuildOp::Hadamard),
        ("write_X", BuildOp::PauliX),
        ("write_Y", BuildOp::PauliY),
        ("write_Z", BuildOp::PauliZ),
        ("write_cnot", BuildOp::Cnot),
        ("write_cz", BuildOp::Cz),
        ("write_Rx", BuildOp::Rx),
        ("write_Ry", BuildOp::Ry),
        ("write_Rz", BuildOp::Rz),
        ("write_Rn", BuildOp::Rn),
        ("write_global_phase", BuildOp::GlobalPhase),
        ("write_P0_phase", BuildOp::P0Phase),
        ("write_P1_phase", BuildOp::P1Phase),
        ("write_S", BuildOp::S),
        ("write_T", BuildOp::T),
        ("write_swap", BuildOp::Swap),
        ("write_MEAS", BuildOp::Measure),
        ("write_NOTA", BuildOp::Note),
        ("write_PRINT", BuildOp::Print),
        ("write_LOOP", BuildOp::Loop),
        ("write_NEXT", BuildOp::Next),
        ("write_IF_M_beg", BuildOp::IfMeasuredBegin),
        ("write_IF_M_end", BuildOp::IfMeasuredEnd),
        ("write_diag", BuildOp::Diag),
        ("write_mp_y", BuildOp::MultiplexorY),
    ];

    /// The registered name.
    pub fn name(self) -> &'static str {
        Self::REGISTRY
            .iter()
            .find(|(_, op)| *op == self)
            .map_or("", |(name, _)| *name)
    }

    /// Decode `params` against this operation's signature and call the
    /// matching writer method.
    pub fn invoke(self, writer: &mut dyn SeoWriter, params: &[Param]) -> IrResult<()> {
        let mut args = Args::new(self, params);
        match self {
            BuildOp::Hadamard => {
                let target = args.bit()?;
                args.finish()?;
                writer.write_h(target)
            }
            BuildOp::PauliX | BuildOp::PauliY | BuildOp::PauliZ => {
                let axis = match self {
                    BuildOp::PauliX => Axis::X,
                    BuildOp::PauliY => Axis::Y,
                    _ => Axis::Z,
                };
                let target = args.bit()?;
                args.finish()?;
                writer.write_pauli(axis, target)
            }
            BuildOp::Cnot | BuildOp::Cz => {
                let control = args.bit()?;
                let target = args.bit()?;
                args.finish()?;
                if self == BuildOp::Cnot {
                    writer.write_cnot(control, target)
                } else {
                    writer.write_cz(control, target)
                }
            }
            BuildOp::Rx | BuildOp::Ry | BuildOp::Rz => {
                let axis = match self {
                    BuildOp::Rx => Axis::X,
                    BuildOp::Ry => Axis::Y,
                    _ => Axis::Z,
                };
                let target = args.bit()?;
                let angle = args.angle()?;
                args.finish()?;
                writer.write_rotation(axis, target, angle)
            }
            BuildOp::Rn => {
                let target = args.bit()?;
                let angles = args.angle_triple()?;
                args.finish()?;
                writer.write_rn(target, angles)
            }
            BuildOp::GlobalPhase | BuildOp::P0Phase | BuildOp::P1Phase => {
                let kind = match self {
                    BuildOp::GlobalPhase => PhaseKind::Global,
                    BuildOp::P0Phase => PhaseKind::Zero,
                    _ => PhaseKind::One,
                };
                let target = args.bit()?;
                let angle = args.angle()?;
                args.finish()?;
                writer.write_phase(kind, target, angle)
            }
            BuildOp::S | BuildOp::T => {
                let target = args.bit()?;
                let dagger = args.optional_flag()?;
                args.finish()?;
                if self == BuildOp::S {
                    writer.write_s(target, dagger)
                } else {
                    writer.write_t(target, dagger)
                }
            }
            BuildOp::Swap => {
                let b1 = args.bit()?;
                let b0 = args.bit()?;
                args.finish()?;
                writer.write_swap(b1, b0)
            }
            BuildOp::Measure => {
                let target = args.bit()?;
                let kind = args.int()?;
                let kind = u8::try_from(kind)
                    .ok()
                    .filter(|k| *k <= 2)
                    .ok_or_else(|| args.err(format!("measurement kind {kind} not in 0..=2")))?;
                args.finish()?;
                writer.write_meas(target, kind)
            }
            BuildOp::Note => {
                let text = args.text()?;
                args.finish()?;
                writer.write_nota(&text)
            }
            BuildOp::Print => {
                let style = args.text()?;
                args.finish()?;
                writer.write_print(&style)
            }
            BuildOp::Loop => {
                let id = args.count("loop id")?;
                let reps = args.count("repetition count")?;
                args.finish()?;
                writer.write_loop(id, reps)
            }
            BuildOp::Next => {
                let id = args.count("loop id")?;
                args.finish()?;
                writer.write_next(id)
            }
            BuildOp::IfMeasuredBegin => {
                let conditions = args.controls()?;
                args.finish()?;
                if conditions.is_empty() || conditions.iter().any(Control::is_multiplex) {
                    return Err(args.err("expected one or more T/F conditions"));
                }
                writer.write_if_m_beg(conditions)
            }
            BuildOp::IfMeasuredEnd => {
                args.finish()?;
                writer.write_if_m_end()
            }
            BuildOp::Diag => {
                let controls = args.controls()?;
                let coefficients = args.angle_list()?;
                args.finish()?;
                writer.write_diag(controls, coefficients)
            }
            BuildOp::MultiplexorY => {
                let target = args.bit()?;
                let controls = args.controls()?;
                let coefficients = args.angle_list()?;
                args.finish()?;
                if controls.is_empty() {
                    return Err(args.err("multiplexor needs controls"));
                }
                writer.write_mp_y(target, controls, coefficients)
            }
        }
    }
}

impl FromStr for BuildOp {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::REGISTRY
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, op)| *op)
            .ok_or_else(|| IrError::InvalidOperationName(s.to_string()))
    }
}

impl fmt::Display for BuildOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positional parameter decoder for one operation.
struct Args<'p> {
    op: BuildOp,
    params: &'p [Param],
    pos: usize,
}

impl<'p> Args<'p> {
    fn new(op: BuildOp, params: &'p [Param]) -> Self {
        Self { op, params, pos: 0 }
    }

    fn err(&self, reason: impl Into<String>) -> IrError {
        IrError::malformed(self.op.name(), reason)
    }

    fn next(&mut self, what: &str) -> IrResult<&'p Param> {
        let params = self.params;
        let param = params
            .get(self.pos)
            .ok_or_else(|| self.err(format!("missing {what} (parameter {})", self.pos + 1)))?;
        self.pos += 1;
        Ok(param)
    }

    fn int(&mut self) -> IrResult<i64> {
        match self.next("integer")? {
            Param::Int(v) => Ok(*v),
            other => Err(self.err(format!("expected an integer, got {other:?}"))),
        }
    }

    fn bit(&mut self) -> IrResult<usize> {
        match self.next("qubit")? {
            Param::Int(v) => {
                usize::try_from(*v).map_err(|_| self.err(format!("negative qubit {v}")))
            }
            other => Err(self.err(format!("expected a qubit position, got {other:?}"))),
        }
    }

    fn count(&mut self, what: &str) -> IrResult<u32> {
        match self.next(what)? {
            Param::Int(v) => {
                u32::try_from(*v).map_err(|_| self.err(format!("invalid {what} {v}")))
            }
            other => Err(self.err(format!("expected {what}, got {other:?}"))),
        }
    }

    /// Free text for a single line.
    fn text(&mut self) -> IrResult<String> {
        match self.next("text")? {
            Param::Str(s) if s.contains(['\n', '\r']) => {
                Err(self.err(format!("text {s:?} spans more than one line")))
            }
            Param::Str(s) => Ok(s.clone()),
            other => Err(self.err(format!("expected text, got {other:?}"))),
        }
    }

    fn optional_flag(&mut self) -> IrResult<bool> {
        if self.pos >= self.params.len() {
            return Ok(false);
        }
        match self.next("flag")? {
            Param::Bool(b) => Ok(*b),
            other => Err(self.err(format!("expected a flag, got {other:?}"))),
        }
    }

    fn decode_angle(&self, param: &Param) -> IrResult<AngleExpr> {
        match param {
            #[allow(clippy::cast_precision_loss)]
            Param::Int(v) => Ok(AngleExpr::from_radians(*v as f64)),
            Param::Float(v) if v.is_finite() => Ok(AngleExpr::from_radians(*v)),
            Param::Str(s) => AngleExpr::parse(s)
                .map_err(|_| self.err(format!("'{s}' is neither a number nor a placeholder"))),
            other => Err(self.err(format!("expected an angle, got {other:?}"))),
        }
    }

    fn angle(&mut self) -> IrResult<AngleExpr> {
        let param = self.next("angle")?;
        self.decode_angle(param)
    }

    fn list(&mut self, what: &str) -> IrResult<&'p [Param]> {
        match self.next(what)? {
            Param::List(items) => Ok(items),
            other => Err(self.err(format!("expected a list of {what}, got {other:?}"))),
        }
    }

    fn angle_list(&mut self) -> IrResult<Vec<AngleExpr>> {
        let items = self.list("angles")?;
        if items.is_empty() {
            return Err(self.err("empty angle list"));
        }
        items.iter().map(|p| self.decode_angle(p)).collect()
    }

    fn angle_triple(&mut self) -> IrResult<[AngleExpr; 3]> {
        let angles = self.angle_list()?;
        <[AngleExpr; 3]>::try_from(angles)
            .map_err(|v| self.err(format!("expected 3 angles, got {}", v.len())))
    }

    fn controls(&mut self) -> IrResult<Vec<Control>> {
        let items = self.list("controls")?;
        items
            .iter()
            .map(|p| match p {
                Param::Int(v) => usize::try_from(*v)
                    .map(Control::on_true)
                    .map_err(|_| self.err(format!("negative control {v}"))),
                Param::Str(s) => s
                    .parse::<Control>()
                    .map_err(|_| self.err(format!("invalid control token '{s}'"))),
                other => Err(self.err(format!("expected a control, got {other:?}"))),
            })
            .collect()
    }

    fn finish(&self) -> IrResult<()> {
        if self.pos == self.params.len() {
            Ok(())
        } else {
            Err(self.err(format!(
                "expected {} parameters, got {}",
                self.pos,
                self.params.len()
            )))
        }
    }
}

/// Sink for circuit-building primitives.
///
/// Implementors provide [`write_line`](SeoWriter::write_line); every primitive
/// has a default that formats its canonical line and forwards it there.
pub trait SeoWriter {
    /// Accept one finished IR line (no trailing newline).
    fn write_line(&mut self, line: &str) -> IrResult<()>;

    /// Emit a typed instruction.
    fn emit(&mut self, inst: &Instruction) -> IrResult<()> {
        self.write_line(&inst.to_string())
    }

    /// Hadamard on `target`.
    fn write_h(&mut self, target: usize) -> IrResult<()> {
        self.emit(&Instruction::Had2 {
            target,
            controls: vec![],
        })
    }

    /// Pauli gate on `target`.
    fn write_pauli(&mut self, axis: Axis, target: usize) -> IrResult<()> {
        self.emit(&Instruction::Pauli {
            axis,
            target,
            controls: vec![],
        })
    }

    /// X on `target` controlled by `control` being `|1>`.
    fn write_cnot(&mut self, control: usize, target: usize) -> IrResult<()> {
        self.emit(&Instruction::Pauli {
            axis: Axis::X,
            target,
            controls: vec![Control::on_true(control)],
        })
    }

    /// Z on `target` controlled by `control` being `|1>`.
    fn write_cz(&mut self, control: usize, target: usize) -> IrResult<()> {
        self.emit(&Instruction::Pauli {
            axis: Axis::Z,
            target,
            controls: vec![Control::on_true(control)],
        })
    }

    /// Single-axis rotation.
    fn write_rotation(&mut self, axis: Axis, target: usize, angle: AngleExpr) -> IrResult<()> {
        self.emit(&Instruction::Rotation {
            axis,
            angle,
            target,
            controls: vec![],
        })
    }

    /// General rotation.
    fn write_rn(&mut self, target: usize, angles: [AngleExpr; 3]) -> IrResult<()> {
        self.emit(&Instruction::RotationN {
            angles,
            target,
            controls: vec![],
        })
    }

    /// Phase gate.
    fn write_phase(&mut self, kind: PhaseKind, target: usize, angle: AngleExpr) -> IrResult<()> {
        self.emit(&Instruction::Phase {
            kind,
            angle,
            target,
            controls: vec![],
        })
    }

    /// `S` (or `S†`) as a `P1PH` of ±90 degrees.
    fn write_s(&mut self, target: usize, dagger: bool) -> IrResult<()> {
        let degs = if dagger { -90.0 } else { 90.0 };
        self.write_phase(PhaseKind::One, target, AngleExpr::literal(degs))
    }

    /// `T` (or `T†`) as a `P1PH` of ±45 degrees.
    fn write_t(&mut self, target: usize, dagger: bool) -> IrResult<()> {
        let degs = if dagger { -45.0 } else { 45.0 };
        self.write_phase(PhaseKind::One, target, AngleExpr::literal(degs))
    }

    /// Swap two qubits.
    fn write_swap(&mut self, b1: usize, b0: usize) -> IrResult<()> {
        self.emit(&Instruction::Swap {
            bits: [b1, b0],
            controls: vec![],
        })
    }

    /// Measurement.
    fn write_meas(&mut self, target: usize, kind: u8) -> IrResult<()> {
        self.emit(&Instruction::Measure { kind, target })
    }

    /// Comment line.
    fn write_nota(&mut self, text: &str) -> IrResult<()> {
        self.emit(&Instruction::Note(text.to_string()))
    }

    /// State print request.
    fn write_print(&mut self, style: &str) -> IrResult<()> {
        self.emit(&Instruction::Print(style.to_string()))
    }

    /// Loop start.
    fn write_loop(&mut self, id: u32, reps: u32) -> IrResult<()> {
        self.emit(&Instruction::LoopBegin { id, reps })
    }

    /// Loop end.
    fn write_next(&mut self, id: u32) -> IrResult<()> {
        self.emit(&Instruction::LoopEnd { id })
    }

    /// Start of a measured-condition block.
    fn write_if_m_beg(&mut self, conditions: Vec<Control>) -> IrResult<()> {
        self.emit(&Instruction::IfMeasuredBegin { conditions })
    }

    /// End of a measured-condition block.
    fn write_if_m_end(&mut self) -> IrResult<()> {
        self.emit(&Instruction::IfMeasuredEnd)
    }

    /// Diagonal unitary.
    fn write_diag(&mut self, controls: Vec<Control>, coefficients: Vec<AngleExpr>) -> IrResult<()> {
        self.emit(&Instruction::Diag {
            controls,
            coefficients,
        })
    }

    /// Y-rotation multiplexor.
    fn write_mp_y(
        &mut self,
        target: usize,
        controls: Vec<Control>,
        coefficients: Vec<AngleExpr>,
    ) -> IrResult<()> {
        self.emit(&Instruction::MultiplexorY {
            target,
            controls,
            coefficients,
        })
    }
}

/// Writes English lines into an in-memory buffer.
#[derive(Debug, Default, Clone)]
pub struct EnglishWriter {
    buf: String,
}

impl EnglishWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written so far, one line per primitive.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the writer and return its text.
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl SeoWriter for EnglishWriter {
    fn write_line(&mut self, line: &str) -> IrResult<()> {
        self.buf.push_str(line);
        self.buf.push('\n');
        Ok(())
    }
}
