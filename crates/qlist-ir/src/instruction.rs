//! Typed IR instructions and their tab-separated line form.
//!
//! Each line starts with an opcode followed by opcode-specific fields:
//!
//! | Opcode | Fields |
//! |--------|--------|
//! | `HAD2` | `AT t [IF c...]` |
//! | `SIGX`, `SIGY`, `SIGZ` | `AT t [IF c...]` |
//! | `PHAS`, `P0PH`, `P1PH` | `angle AT t [IF c...]` |
//! | `ROTX`, `ROTY`, `ROTZ` | `angle AT t [IF c...]` |
//! | `ROTN` | `ax ay az AT t [IF c...]` |
//! | `SWAP` | `b1 b0 [IF c...]` |
//! | `DIAG` | `[IF c...] BY angle...` |
//! | `MP_Y` | `AT t IF c... BY angle...` |
//! | `MEAS` | `kind AT t` |
//! | `NOTA` | free text |
//! | `PRINT` | `style` |
//! | `LOOP` | `id NREPS= reps` |
//! | `NEXT` | `id` |
//! | `IF_M(` | `c... )` |
//! | `}IF_M` | |
//!
//! Lines with any other opcode parse as [`Instruction::Opaque`].

use std::fmt;
use std::str::FromStr;

use qlist_gates::Axis;
use serde::{Deserialize, Serialize};

use crate::angle::AngleExpr;
use crate::control::Control;
use crate::error::{IrError, IrResult};
use crate::placeholder::{HashPlaceholders, PlaceholderResolver};

/// Field separator of the line form.
pub const SEPARATOR: char = '\t';

/// Which diagonal phase a phase instruction applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    /// `PHAS`: global phase `e^{i angle}`.
    Global,
    /// `P0PH`: phase on `|0>`.
    Zero,
    /// `P1PH`: phase on `|1>`.
    One,
}

/// The closed set of opcodes understood by the IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// `HAD2`
    Had2,
    /// `SIGX`
    SigX,
    /// `SIGY`
    SigY,
    /// `SIGZ`
    SigZ,
    /// `PHAS`
    Phas,
    /// `P0PH`
    P0Ph,
    /// `P1PH`
    P1Ph,
    /// `ROTX`
    RotX,
    /// `ROTY`
    RotY,
    /// `ROTZ`
    RotZ,
    /// `ROTN`
    RotN,
    /// `SWAP`
    Swap,
    /// `DIAG`
    Diag,
    /// `MP_Y`
    MpY,
    /// `MEAS`
    Meas,
    /// `NOTA`
    Nota,
    /// `PRINT`
    Print,
    /// `LOOP`
    Loop,
    /// `NEXT`
    Next,
    /// `IF_M(`
    IfMBegin,
    /// `}IF_M`
    IfMEnd,
}

impl Opcode {
    /// Every opcode, in table order.
    pub const ALL: [Opcode; 21] = [
        Opcode::Had2,
        Opcode::SigX,
        Opcode::SigY,
        Opcode::SigZ,
        Opcode::Phas,
        Opcode::P0Ph,
        Opcode::P1Ph,
        Opcode::RotX,
        Opcode::RotY,
        Opcode::RotZ,
        Opcode::RotN,
        Opcode::Swap,
        Opcode::Diag,
        Opcode::MpY,
        Opcode::Meas,
        Opcode::Nota,
        Opcode::Print,
        Opcode::Loop,
        Opcode::Next,
        Opcode::IfMBegin,
        Opcode::IfMEnd,
    ];

    /// The opcode as written in a line.
    pub fn name(self) -> &'static str {
        match self {
            Opcode::Had2 => "HAD2",
            Opcode::SigX => "SIGX",
            Opcode::SigY => "SIGY",
            Opcode::SigZ => "SIGZ",
            Opcode::Phas => "PHAS",
            Opcode::P0Ph => "P0PH",
            Opcode::P1Ph => "P1PH",
            Opcode::RotX => "ROTX",
            Opcode::RotY => "ROTY",
            Opcode::RotZ => "ROTZ",
            Opcode::RotN => "ROTN",
            Opcode::Swap => "SWAP",
            Opcode::Diag => "DIAG",
            Opcode::MpY => "MP_Y",
            Opcode::Meas => "MEAS",
            Opcode::Nota => "NOTA",
            Opcode::Print => "PRINT",
            Opcode::Loop => "LOOP",
            Opcode::Next => "NEXT",
            Opcode::IfMBegin => "IF_M(",
            Opcode::IfMEnd => "}IF_M",
        }
    }

    /// Look up an opcode by its line name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One IR line as a typed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Hadamard.
    Had2 {
        /// Target qubit.
        target: usize,
        /// Controls.
        controls: Vec<Control>,
    },
    /// Pauli X, Y or Z.
    Pauli {
        /// Which Pauli.
        axis: Axis,
        /// Target qubit.
        target: usize,
        /// Controls.
        controls: Vec<Control>,
    },
    /// Diagonal phase (`PHAS`, `P0PH`, `P1PH`).
    Phase {
        /// Which phase.
        kind: PhaseKind,
        /// Phase angle.
        angle: AngleExpr,
        /// Target qubit.
        target: usize,
        /// Controls.
        controls: Vec<Control>,
    },
    /// Rotation about a coordinate axis (`ROTX`, `ROTY`, `ROTZ`).
    Rotation {
        /// Rotation axis.
        axis: Axis,
        /// Rotation angle.
        angle: AngleExpr,
        /// Target qubit.
        target: usize,
        /// Controls.
        controls: Vec<Control>,
    },
    /// General rotation `ROTN` with an `(x, y, z)` angle vector.
    RotationN {
        /// Angle vector.
        angles: [AngleExpr; 3],
        /// Target qubit.
        target: usize,
        /// Controls.
        controls: Vec<Control>,
    },
    /// Exchange of two qubits.
    Swap {
        /// The two qubits, as written.
        bits: [usize; 2],
        /// Controls.
        controls: Vec<Control>,
    },
    /// Diagonal unitary with one phase per multiplexor branch.
    Diag {
        /// Controls, including multiplexor bits.
        controls: Vec<Control>,
        /// Phases after `BY`.
        coefficients: Vec<AngleExpr>,
    },
    /// Multiplexor of y rotations.
    MultiplexorY {
        /// Target qubit.
        target: usize,
        /// Controls, including multiplexor bits.
        controls: Vec<Control>,
        /// Rotation angles after `BY`.
        coefficients: Vec<AngleExpr>,
    },
    /// Measurement of one qubit.
    Measure {
        /// Measurement kind (0, 1 or 2).
        kind: u8,
        /// Measured qubit.
        target: usize,
    },
    /// Comment line.
    Note(String),
    /// Request to print the state.
    Print(String),
    /// Start of a loop body.
    LoopBegin {
        /// Loop identifier.
        id: u32,
        /// Number of repetitions.
        reps: u32,
    },
    /// End of the loop body with the same id.
    LoopEnd {
        /// Loop identifier.
        id: u32,
    },
    /// Start of a block conditioned on measured qubits.
    IfMeasuredBegin {
        /// Measured-qubit conditions.
        conditions: Vec<Control>,
    },
    /// End of an `IF_M(` block.
    IfMeasuredEnd,
    /// A line whose opcode is outside the closed set.
    Opaque {
        /// The opcode field.
        opcode: String,
        /// Remaining fields, verbatim.
        fields: Vec<String>,
    },
}

impl Instruction {
    /// Parse a line using a custom placeholder resolver.
    pub fn parse_with(line: &str, resolver: &dyn PlaceholderResolver) -> IrResult<Self> {
        let fields: Vec<&str> = line.split(SEPARATOR).collect();
        let (&head, rest) = fields
            .split_first()
            .filter(|(head, _)| !head.is_empty())
            .ok_or_else(|| IrError::malformed("", "empty line").with_line(line))?;

        let Some(op) = Opcode::from_name(head) else {
            return Ok(Instruction::Opaque {
                opcode: head.to_string(),
                fields: rest.iter().map(|s| (*s).to_string()).collect(),
            });
        };

        let mut cur = Cursor {
            op,
            fields: rest,
            pos: 0,
            resolver,
        };
        parse_fields(&mut cur)
            .and_then(|inst| cur.finish().map(|()| inst))
            .and_then(|inst| inst.check_distinct_bits().map(|()| inst))
            .map_err(|e| e.with_line(line))
    }

    /// The opcode field of this instruction.
    pub fn opcode(&self) -> &str {
        match self {
            Instruction::Opaque { opcode, .. } => opcode,
            _ => self.known_opcode().map_or("", Opcode::name),
        }
    }

    /// The opcode, unless this is an opaque line.
    pub fn known_opcode(&self) -> Option<Opcode> {
        Some(match self {
            Instruction::Had2 { .. } => Opcode::Had2,
            Instruction::Pauli { axis, .. } => match axis {
                Axis::X => Opcode::SigX,
                Axis::Y => Opcode::SigY,
                Axis::Z => Opcode::SigZ,
            },
            Instruction::Phase { kind, .. } => match kind {
                PhaseKind::Global => Opcode::Phas,
                PhaseKind::Zero => Opcode::P0Ph,
                PhaseKind::One => Opcode::P1Ph,
            },
            Instruction::Rotation { axis, .. } => match axis {
                Axis::X => Opcode::RotX,
                Axis::Y => Opcode::RotY,
                Axis::Z => Opcode::RotZ,
            },
            Instruction::RotationN { .. } => Opcode::RotN,
            Instruction::Swap { .. } => Opcode::Swap,
            Instruction::Diag { .. } => Opcode::Diag,
            Instruction::MultiplexorY { .. } => Opcode::MpY,
            Instruction::Measure { .. } => Opcode::Meas,
            Instruction::Note(_) => Opcode::Nota,
            Instruction::Print(_) => Opcode::Print,
            Instruction::LoopBegin { .. } => Opcode::Loop,
            Instruction::LoopEnd { .. } => Opcode::Next,
            Instruction::IfMeasuredBegin { .. } => Opcode::IfMBegin,
            Instruction::IfMeasuredEnd => Opcode::IfMEnd,
            Instruction::Opaque { .. } => return None,
        })
    }

    /// Is this a line outside the closed opcode set?
    pub fn is_opaque(&self) -> bool {
        matches!(self, Instruction::Opaque { .. })
    }

    /// Controls of this instruction (empty if it takes none).
    pub fn controls(&self) -> &[Control] {
        match self {
            Instruction::Had2 { controls, .. }
            | Instruction::Pauli { controls, .. }
            | Instruction::Phase { controls, .. }
            | Instruction::Rotation { controls, .. }
            | Instruction::RotationN { controls, .. }
            | Instruction::Swap { controls, .. }
            | Instruction::Diag { controls, .. }
            | Instruction::MultiplexorY { controls, .. } => controls,
            Instruction::IfMeasuredBegin { conditions } => conditions,
            _ => &[],
        }
    }

    /// Every qubit position this instruction refers to.
    pub fn qubits(&self) -> Vec<usize> {
        let mut bits = match self {
            Instruction::Had2 { target, .. }
            | Instruction::Pauli { target, .. }
            | Instruction::Phase { target, .. }
            | Instruction::Rotation { target, .. }
            | Instruction::RotationN { target, .. }
            | Instruction::MultiplexorY { target, .. }
            | Instruction::Measure { target, .. } => vec![*target],
            Instruction::Swap { bits, .. } => bits.to_vec(),
            _ => vec![],
        };
        bits.extend(self.controls().iter().map(|c| c.bit));
        bits
    }

    /// Every angle field, in line order.
    pub fn angles(&self) -> Vec<&AngleExpr> {
        match self {
            Instruction::Phase { angle, .. } | Instruction::Rotation { angle, .. } => vec![angle],
            Instruction::RotationN { angles, .. } => angles.iter().collect(),
            Instruction::Diag { coefficients, .. }
            | Instruction::MultiplexorY { coefficients, .. } => coefficients.iter().collect(),
            _ => vec![],
        }
    }

    /// Raw text of every field after the opcode.
    pub fn fields(&self) -> Vec<String> {
        self.to_string()
            .split(SEPARATOR)
            .skip(1)
            .map(str::to_string)
            .collect()
    }

    fn check_distinct_bits(&self) -> IrResult<()> {
        let bits = self.qubits();
        for (i, bit) in bits.iter().enumerate() {
            if bits[..i].contains(bit) {
                return Err(IrError::malformed(
                    self.opcode(),
                    format!("qubit {bit} used more than once"),
                ));
            }
        }
        Ok(())
    }
}

impl FromStr for Instruction {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instruction::parse_with(s, &HashPlaceholders)
    }
}

/// Reads the fields after the opcode.
struct Cursor<'a> {
    op: Opcode,
    fields: &'a [&'a str],
    pos: usize,
    resolver: &'a dyn PlaceholderResolver,
}

impl<'a> Cursor<'a> {
    fn err(&self, reason: impl Into<String>) -> IrError {
        IrError::malformed(self.op.name(), reason)
    }

    fn peek(&self) -> Option<&'a str> {
        let fields = self.fields;
        fields.get(self.pos).copied()
    }

    fn next(&mut self, what: &str) -> IrResult<&'a str> {
        let field = self
            .peek()
            .ok_or_else(|| self.err(format!("missing {what} at field {}", self.pos + 1)))?;
        self.pos += 1;
        Ok(field)
    }

    fn keyword(&mut self, word: &str) -> IrResult<()> {
        let field = self.next(word)?;
        if field == word {
            Ok(())
        } else {
            Err(self.err(format!("expected '{word}', found '{field}'")))
        }
    }

    fn number<T: FromStr>(&mut self, what: &str) -> IrResult<T> {
        let field = self.next(what)?;
        field
            .parse()
            .map_err(|_| self.err(format!("invalid {what} '{field}'")))
    }

    fn qubit(&mut self) -> IrResult<usize> {
        self.number("qubit")
    }

    fn angle(&mut self) -> IrResult<AngleExpr> {
        let field = self.next("angle")?;
        AngleExpr::parse_with(field, self.resolver).map_err(|_| {
            self.err(format!("'{field}' is neither a number nor a placeholder"))
        })
    }

    /// `AT t`
    fn target(&mut self) -> IrResult<usize> {
        self.keyword("AT")?;
        self.qubit()
    }

    /// Control tokens up to `stop` (or the end of the line).
    fn control_list(&mut self, stop: Option<&str>) -> IrResult<Vec<Control>> {
        let mut controls = Vec::new();
        while let Some(field) = self.peek() {
            if Some(field) == stop {
                break;
            }
            let control = field.parse::<Control>().map_err(|_| {
                self.err(format!("invalid control token '{field}'"))
            })?;
            controls.push(control);
            self.pos += 1;
        }
        Ok(controls)
    }

    /// Optional `IF c...` tail.
    fn optional_controls(&mut self, stop: Option<&str>) -> IrResult<Vec<Control>> {
        if self.peek() != Some("IF") {
            return Ok(vec![]);
        }
        self.pos += 1;
        let controls = self.control_list(stop)?;
        if controls.is_empty() {
            return Err(self.err("'IF' without controls"));
        }
        Ok(controls)
    }

    /// `BY angle...` tail.
    fn coefficients(&mut self) -> IrResult<Vec<AngleExpr>> {
        self.keyword("BY")?;
        let mut out = Vec::new();
        while self.peek().is_some() {
            out.push(self.angle()?);
        }
        if out.is_empty() {
            return Err(self.err("no coefficients after 'BY'"));
        }
        Ok(out)
    }

    /// Coefficients after `BY`, one per branch of the multiplexor controls.
    fn branch_coefficients(&mut self, controls: &[Control]) -> IrResult<Vec<AngleExpr>> {
        let multiplexed = controls.iter().filter(|c| c.is_multiplex()).count();
        let coefficients = self.coefficients()?;
        let expected = u32::try_from(multiplexed)
            .ok()
            .and_then(|n| 1_usize.checked_shl(n));
        if expected != Some(coefficients.len()) {
            return Err(self.err(format!(
                "{multiplexed} multiplexor controls need 2^{multiplexed} coefficients, got {}",
                coefficients.len()
            )));
        }
        Ok(coefficients)
    }

    fn rest(&mut self) -> String {
        let text = self.fields[self.pos..].join("\t");
        self.pos = self.fields.len();
        text
    }

    fn finish(&self) -> IrResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(extra) => Err(self.err(format!(
                "unexpected trailing field '{extra}' (expected {} fields, got {})",
                self.pos,
                self.fields.len()
            ))),
        }
    }
}

fn parse_fields(cur: &mut Cursor<'_>) -> IrResult<Instruction> {
    let inst = match cur.op {
        Opcode::Had2 => {
            let target = cur.target()?;
            Instruction::Had2 {
                target,
                controls: cur.optional_controls(None)?,
            }
        }
        Opcode::SigX | Opcode::SigY | Opcode::SigZ => {
            let axis = match cur.op {
                Opcode::SigX => Axis::X,
                Opcode::SigY => Axis::Y,
                _ => Axis::Z,
            };
            let target = cur.target()?;
            Instruction::Pauli {
                axis,
                target,
                controls: cur.optional_controls(None)?,
            }
        }
        Opcode::Phas | Opcode::P0Ph | Opcode::P1Ph => {
            let kind = match cur.op {
                Opcode::Phas => PhaseKind::Global,
                Opcode::P0Ph => PhaseKind::Zero,
                _ => PhaseKind::One,
            };
            let angle = cur.angle()?;
            let target = cur.target()?;
            Instruction::Phase {
                kind,
                angle,
                target,
                controls: cur.optional_controls(None)?,
            }
        }
        Opcode::RotX | Opcode::RotY | Opcode::RotZ => {
            let axis = match cur.op {
                Opcode::RotX => Axis::X,
                Opcode::RotY => Axis::Y,
                _ => Axis::Z,
            };
            let angle = cur.angle()?;
            let target = cur.target()?;
            Instruction::Rotation {
                axis,
                angle,
                target,
                controls: cur.optional_controls(None)?,
            }
        }
        Opcode::RotN => {
            let angles = [cur.angle()?, cur.angle()?, cur.angle()?];
            let target = cur.target()?;
            Instruction::RotationN {
                angles,
                target,
                controls: cur.optional_controls(None)?,
            }
        }
        Opcode::Swap => {
            let bits = [cur.qubit()?, cur.qubit()?];
            Instruction::Swap {
                bits,
                controls: cur.optional_controls(None)?,
            }
        }
        Opcode::Diag => {
            let controls = cur.optional_controls(Some("BY"))?;
            let coefficients = cur.branch_coefficients(&controls)?;
            Instruction::Diag {
                controls,
                coefficients,
            }
        }
        Opcode::MpY => {
            let target = cur.target()?;
            let controls = cur.optional_controls(Some("BY"))?;
            if controls.is_empty() {
                return Err(cur.err("multiplexor needs controls"));
            }
            let coefficients = cur.branch_coefficients(&controls)?;
            Instruction::MultiplexorY {
                target,
                controls,
                coefficients,
            }
        }
        Opcode::Meas => {
            let kind: u8 = cur.number("measurement kind")?;
            if kind > 2 {
                return Err(cur.err(format!("measurement kind {kind} not in 0..=2")));
            }
            Instruction::Measure {
                kind,
                target: cur.target()?,
            }
        }
        Opcode::Nota => Instruction::Note(cur.rest()),
        Opcode::Print => Instruction::Print(cur.next("print style")?.to_string()),
        Opcode::Loop => {
            let id = cur.number("loop id")?;
            cur.keyword("NREPS=")?;
            Instruction::LoopBegin {
                id,
                reps: cur.number("repetition count")?,
            }
        }
        Opcode::Next => Instruction::LoopEnd {
            id: cur.number("loop id")?,
        },
        Opcode::IfMBegin => {
            let conditions = cur.control_list(Some(")"))?;
            cur.keyword(")")?;
            if conditions.is_empty() || conditions.iter().any(Control::is_multiplex) {
                return Err(cur.err("expected one or more T/F conditions"));
            }
            Instruction::IfMeasuredBegin { conditions }
        }
        Opcode::IfMEnd => Instruction::IfMeasuredEnd,
    };
    Ok(inst)
}

fn write_controls(f: &mut fmt::Formatter<'_>, controls: &[Control]) -> fmt::Result {
    if controls.is_empty() {
        return Ok(());
    }
    f.write_str("\tIF")?;
    for c in controls {
        write!(f, "\t{c}")?;
    }
    Ok(())
}

fn write_coefficients(f: &mut fmt::Formatter<'_>, coefficients: &[AngleExpr]) -> fmt::Result {
    f.write_str("\tBY")?;
    for a in coefficients {
        write!(f, "\t{a}")?;
    }
    Ok(())
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.opcode())?;
        match self {
            Instruction::Had2 { target, controls } | Instruction::Pauli { target, controls, .. } => {
                write!(f, "\tAT\t{target}")?;
                write_controls(f, controls)
            }
            Instruction::Phase {
                angle,
                target,
                controls,
                ..
            }
            | Instruction::Rotation {
                angle,
                target,
                controls,
                ..
            } => {
                write!(f, "\t{angle}\tAT\t{target}")?;
                write_controls(f, controls)
            }
            Instruction::RotationN {
                angles: [x, y, z],
                target,
                controls,
            } => {
                write!(f, "\t{x}\t{y}\t{z}\tAT\t{target}")?;
                write_controls(f, controls)
            }
            Instruction::Swap {
                bits: [b1, b0],
                controls,
            } => {
                write!(f, "\t{b1}\t{b0}")?;
                write_controls(f, controls)
            }
            Instruction::Diag {
                controls,
                coefficients,
            } => {
                write_controls(f, controls)?;
                write_coefficients(f, coefficients)
            }
            Instruction::MultiplexorY {
                target,
                controls,
                coefficients,
            } => {
                write!(f, "\tAT\t{target}")?;
                write_controls(f, controls)?;
                write_coefficients(f, coefficients)
            }
            Instruction::Measure { kind, target } => write!(f, "\t{kind}\tAT\t{target}"),
            Instruction::Note(text) if text.is_empty() => Ok(()),
            Instruction::Note(text) => write!(f, "\t{text}"),
            Instruction::Print(style) => write!(f, "\t{style}"),
            Instruction::LoopBegin { id, reps } => write!(f, "\t{id}\tNREPS=\t{reps}"),
            Instruction::LoopEnd { id } => write!(f, "\t{id}"),
            Instruction::IfMeasuredBegin { conditions } => {
                for c in conditions {
                    write!(f, "\t{c}")?;
                }
                f.write_str("\t)")
            }
            Instruction::IfMeasuredEnd => Ok(()),
            Instruction::Opaque { fields, .. } => {
                for field in fields {
                    write!(f, "\t{field}")?;
                }
                Ok(())
            }
        }
    }
}
