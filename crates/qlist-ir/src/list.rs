//! The circuit list: an ordered sequence of IR instructions on a fixed
//! number of qubits.

use std::fmt;
use std::ops::{Add, AddAssign, Bound, RangeBounds};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::angle::AngleExpr;
use crate::collaborators::{DiagramReader, Simulator, StagedCircuit};
use crate::error::{IrError, IrResult, MaterializeError};
use crate::instruction::Instruction;
use crate::persist;
use crate::placeholder::{HashPlaceholders, PlaceholderResolver};
use crate::writer::{BuildOp, EnglishWriter, Param, SeoWriter};

/// A circuit as a list of instructions.
///
/// The qubit count is fixed at construction; every qubit field of every
/// instruction is checked against it on insertion.
///
/// # Example
///
/// ```
/// use qlist_ir::{params, CircuitList};
/// use std::f64::consts::PI;
///
/// let mut c = CircuitList::new(4);
/// c.append("write_cnot", &params![0, 1]).unwrap();
/// c.append("write_Rn", &params![2, vec![PI / 2.0, -PI / 2.0, PI / 3.0]]).unwrap();
///
/// let h = c.herm().unwrap();
/// assert_eq!(h.lines(), vec!["ROTN\t-90\t90\t-60\tAT\t2", "SIGX\tAT\t1\tIF\t0T"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitList {
    num_bits: usize,
    instructions: Vec<Instruction>,
}

impl CircuitList {
    /// An empty circuit on `num_bits` qubits.
    pub fn new(num_bits: usize) -> Self {
        Self {
            num_bits,
            instructions: Vec::new(),
        }
    }

    /// A circuit from already-typed instructions.
    pub fn from_instructions(
        num_bits: usize,
        instructions: impl IntoIterator<Item = Instruction>,
    ) -> IrResult<Self> {
        let mut list = Self::new(num_bits);
        for inst in instructions {
            list.push(inst)?;
        }
        Ok(list)
    }

    /// Parse a circuit from English lines.
    pub fn from_lines<I, S>(num_bits: usize, lines: I) -> IrResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with(num_bits, lines, &HashPlaceholders)
    }

    /// Parse a circuit from English lines with a custom placeholder grammar.
    pub fn from_lines_with<I, S>(
        num_bits: usize,
        lines: I,
        resolver: &dyn PlaceholderResolver,
    ) -> IrResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new(num_bits);
        for line in lines {
            let line = line.as_ref();
            let inst = Instruction::parse_with(line, resolver)?;
            list.push(inst).map_err(|e| e.with_line(line))?;
        }
        Ok(list)
    }

    /// Load `<prefix>_<num_bits>_eng.txt` from `dir`.
    pub fn read_english_file(dir: impl AsRef<Path>, prefix: &str, num_bits: usize) -> IrResult<Self> {
        let lines = persist::read_english_lines(dir.as_ref(), prefix, num_bits)?;
        Self::from_lines(num_bits, lines)
    }

    /// Number of qubits.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instruction at `index`.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Iterate over the instructions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// The instructions as a slice.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Each instruction as an English line.
    pub fn lines(&self) -> Vec<String> {
        self.instructions.iter().map(ToString::to_string).collect()
    }

    /// English file content: one line per instruction, each ending in `\n`.
    pub fn to_english(&self) -> String {
        let mut out = String::new();
        for inst in &self.instructions {
            out.push_str(&inst.to_string());
            out.push('\n');
        }
        out
    }

    /// Add one instruction at the end.
    pub fn push(&mut self, inst: Instruction) -> IrResult<()> {
        if let Some(&qubit) = inst.qubits().iter().find(|&&q| q >= self.num_bits) {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_bits: self.num_bits,
                line: Some(inst.to_string()),
            });
        }
        self.instructions.push(inst);
        Ok(())
    }

    /// Append the line produced by a named building operation.
    ///
    /// `operation_name` must be one of the [`BuildOp`] names (`write_H`,
    /// `write_cnot`, `write_Rn`, ...).
    ///
    /// # Errors
    ///
    /// [`IrError::InvalidOperationName`] for unknown names, and
    /// [`IrError::MalformedInstruction`] when `params` does not match the
    /// operation's signature. The circuit is unchanged on error.
    #[instrument(skip(self, params), fields(num_bits = self.num_bits))]
    pub fn append(&mut self, operation_name: &str, params: &[Param]) -> IrResult<()> {
        let built = self.build(operation_name, params)?;
        self.instructions.extend(built);
        Ok(())
    }

    /// Like [`append`](Self::append), and also sends the new line to
    /// `writer`.
    #[instrument(skip(self, writer, params), fields(num_bits = self.num_bits))]
    pub fn append_with<W: SeoWriter + ?Sized>(
        &mut self,
        writer: &mut W,
        operation_name: &str,
        params: &[Param],
    ) -> IrResult<()> {
        let built = self.build(operation_name, params)?;
        for inst in &built {
            writer.emit(inst)?;
        }
        self.instructions.extend(built);
        Ok(())
    }

    /// Run a building operation into a scratch buffer and parse the single
    /// line it writes back into a checked instruction.
    fn build(&self, operation_name: &str, params: &[Param]) -> IrResult<Vec<Instruction>> {
        let op: BuildOp = operation_name.parse()?;
        let mut scratch = EnglishWriter::new();
        op.invoke(&mut scratch, params)?;

        let mut lines = scratch.as_str().lines();
        let line = match (lines.next(), lines.next()) {
            (Some(line), None) => line,
            _ => {
                return Err(IrError::malformed(
                    op.name(),
                    format!("expected one line, got {:?}", scratch.as_str()),
                ));
            }
        };
        let mut checked = Self::new(self.num_bits);
        checked.push(line.parse()?)?;
        debug!(op = %op, "Built instruction");
        Ok(checked.instructions)
    }

    /// `self` followed by `other`.
    ///
    /// # Errors
    ///
    /// [`IrError::QubitCountMismatch`] if the qubit counts differ.
    pub fn concat(&self, other: &CircuitList) -> IrResult<CircuitList> {
        let mut out = self.clone();
        out.extend_from(other)?;
        Ok(out)
    }

    /// Append every instruction of `other`.
    ///
    /// # Errors
    ///
    /// [`IrError::QubitCountMismatch`] if the qubit counts differ.
    pub fn extend_from(&mut self, other: &CircuitList) -> IrResult<()> {
        self.check_same_width(other)?;
        self.instructions.extend_from_slice(&other.instructions);
        Ok(())
    }

    fn check_same_width(&self, other: &CircuitList) -> IrResult<()> {
        if self.num_bits == other.num_bits {
            Ok(())
        } else {
            Err(IrError::QubitCountMismatch {
                left: self.num_bits,
                right: other.num_bits,
            })
        }
    }

    /// A new circuit holding the instructions in `range`.
    ///
    /// Bounds past the end are clamped; an inverted range gives an empty
    /// circuit.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> CircuitList {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);
        CircuitList {
            num_bits: self.num_bits,
            instructions: self.instructions[start..end.max(start)].to_vec(),
        }
    }

    /// Extended slicing with optional, possibly negative, bounds and a
    /// non-zero step, following sequence slicing conventions
    /// (`c[start:stop:step]`).
    ///
    /// # Errors
    ///
    /// [`IrError::InvalidSlice`] if `step` is zero.
    pub fn slice_step(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    ) -> IrResult<CircuitList> {
        if step == 0 {
            return Err(IrError::InvalidSlice);
        }
        let len = isize::try_from(self.len()).map_err(|_| IrError::InvalidSlice)?;
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
        let clamp = |idx: isize| {
            let idx = if idx < 0 { idx + len } else { idx };
            idx.clamp(lower, upper)
        };
        let start = start.map_or(if step > 0 { lower } else { upper }, clamp);
        let stop = stop.map_or(if step > 0 { upper } else { lower }, clamp);

        let mut instructions = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            // i is within [0, len) here
            if let Some(inst) = usize::try_from(i).ok().and_then(|i| self.instructions.get(i)) {
                instructions.push(inst.clone());
            }
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
        Ok(CircuitList {
            num_bits: self.num_bits,
            instructions,
        })
    }

    /// Distinct variable numbers and function names referenced by
    /// placeholders, in order of first appearance.
    pub fn collect_variables_and_functions(&self) -> (Vec<u32>, Vec<String>) {
        self.collect_with(&HashPlaceholders)
    }

    /// [`collect_variables_and_functions`](Self::collect_variables_and_functions)
    /// with a custom placeholder grammar.
    ///
    /// Angle fields are scanned for typed instructions and every field for
    /// opaque ones. Unlike a whole-line token scan, the free text of `NOTA`
    /// and `PRINT` lines is never read, so `#3` in a comment is not a
    /// variable.
    pub fn collect_with(&self, resolver: &dyn PlaceholderResolver) -> (Vec<u32>, Vec<String>) {
        let mut var_nums = Vec::new();
        let mut fun_names = Vec::new();
        let mut seen_vars = FxHashSet::default();
        let mut seen_funs = FxHashSet::default();

        for inst in &self.instructions {
            let tokens: Vec<&str> = match inst {
                Instruction::Opaque { fields, .. } => fields.iter().map(String::as_str).collect(),
                _ => inst.angles().into_iter().map(AngleExpr::as_str).collect(),
            };
            for token in tokens.into_iter().filter(|t| resolver.is_legal(t)) {
                for n in resolver.var_nums(token) {
                    if seen_vars.insert(n) {
                        var_nums.push(n);
                    }
                }
                if let Some(name) = resolver.fun_name(token) {
                    if seen_funs.insert(name.clone()) {
                        fun_names.push(name);
                    }
                }
            }
        }
        (var_nums, fun_names)
    }

    /// The Hermitian conjugate: instructions reversed, each conjugated.
    ///
    /// # Errors
    ///
    /// [`IrError::UnsupportedInstructionKind`] if the circuit contains an
    /// opaque instruction. The receiver is never modified.
    #[instrument(skip(self), fields(num_bits = self.num_bits, len = self.len()))]
    pub fn herm(&self) -> IrResult<CircuitList> {
        let instructions = self
            .instructions
            .iter()
            .rev()
            .map(Instruction::conjugate)
            .collect::<IrResult<Vec<_>>>()?;
        debug!("Conjugated circuit");
        Ok(CircuitList {
            num_bits: self.num_bits,
            instructions,
        })
    }

    /// Ask `reader` for the diagram of this circuit.
    pub fn render<R: DiagramReader>(
        &self,
        reader: &mut R,
    ) -> Result<String, MaterializeError<R::Error>> {
        reader
            .render(self.num_bits, &self.to_english())
            .map_err(MaterializeError::Collaborator)
    }

    /// Write only the English file into `dir`.
    pub fn write_english_file(&self, dir: impl AsRef<Path>, prefix: &str) -> IrResult<PathBuf> {
        persist::write_english(dir.as_ref(), prefix, self)
    }

    /// Write the English file and its diagram into `dir`.
    ///
    /// Returns the paths of the English and picture files.
    #[instrument(skip(self, dir, reader), fields(num_bits = self.num_bits))]
    pub fn write_files<R: DiagramReader>(
        &self,
        dir: impl AsRef<Path>,
        prefix: &str,
        reader: &mut R,
    ) -> Result<(PathBuf, PathBuf), MaterializeError<R::Error>> {
        let dir = dir.as_ref();
        let english = persist::write_english(dir, prefix, self)?;
        let diagram = self.render(reader)?;
        let picture = persist::write_picture(dir, prefix, self.num_bits, &diagram)?;
        debug!(english = %english.display(), picture = %picture.display(), "Wrote circuit files");
        Ok((english, picture))
    }

    /// Run `simulator` on this circuit.
    ///
    /// The English file is staged in a temporary directory that is removed
    /// before this returns, whether the simulator succeeds or fails.
    #[instrument(skip_all, fields(num_bits = self.num_bits, len = self.len()))]
    pub fn simulate<S: Simulator>(
        &self,
        simulator: &mut S,
        init_state: Option<S::State>,
        options: S::Options,
    ) -> Result<S::Output, MaterializeError<S::Error>> {
        let staged = StagedCircuit::stage(self)?;
        let result = simulator
            .simulate(&staged, init_state, options)
            .map_err(MaterializeError::Collaborator);
        debug!(ok = result.is_ok(), "Simulation finished");
        result
    }
}

impl fmt::Display for CircuitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, inst) in self.instructions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{inst}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CircuitList {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// Concatenation.
///
/// # Panics
///
/// If the qubit counts differ. Use [`CircuitList::concat`] to get an error
/// instead.
impl Add for CircuitList {
    type Output = CircuitList;

    fn add(mut self, rhs: CircuitList) -> CircuitList {
        self += rhs;
        self
    }
}

/// Concatenation.
///
/// # Panics
///
/// If the qubit counts differ. Use [`CircuitList::concat`] to get an error
/// instead.
impl Add<&CircuitList> for &CircuitList {
    type Output = CircuitList;

    fn add(self, rhs: &CircuitList) -> CircuitList {
        match self.concat(rhs) {
            Ok(out) => out,
            Err(e) => panic!("{e}"),
        }
    }
}

/// In-place concatenation.
///
/// # Panics
///
/// If the qubit counts differ. Use [`CircuitList::extend_from`] to get an
/// error instead.
impl AddAssign for CircuitList {
    fn add_assign(&mut self, rhs: CircuitList) {
        if let Err(e) = self.check_same_width(&rhs) {
            panic!("{e}");
        }
        self.instructions.extend(rhs.instructions);
    }
}

/// In-place concatenation.
///
/// # Panics
///
/// If the qubit counts differ.
impl AddAssign<&CircuitList> for CircuitList {
    fn add_assign(&mut self, rhs: &CircuitList) {
        if let Err(e) = self.extend_from(rhs) {
            panic!("{e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use std::f64::consts::PI;

    fn circuit(num_bits: usize, lines: &[&str]) -> CircuitList {
        CircuitList::from_lines(num_bits, lines).unwrap()
    }

    #[test]
    fn test_append_and_herm() {
        let mut c = CircuitList::new(4);
        c.append("write_cnot", &params![0, 1]).unwrap();
        c.append("write_Rn", &params![2, vec![PI / 2.0, -PI / 2.0, PI / 3.0]])
            .unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.lines()[1], "ROTN\t90\t-90\t60\tAT\t2");

        let h = c.herm().unwrap();
        assert_eq!(
            h.lines(),
            vec!["ROTN\t-90\t90\t-60\tAT\t2", "SIGX\tAT\t1\tIF\t0T"]
        );
        assert_eq!(h.herm().unwrap(), c);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_append_failures_leave_list_unchanged() {
        let mut c = CircuitList::new(2);
        c.append("write_H", &params![0]).unwrap();

        assert!(matches!(
            c.append("write_Foo", &params![0]),
            Err(IrError::InvalidOperationName(_))
        ));
        assert!(matches!(
            c.append("write_H", &params![]),
            Err(IrError::MalformedInstruction { .. })
        ));
        assert!(matches!(
            c.append("write_H", &params![2]),
            Err(IrError::QubitOutOfRange { qubit: 2, num_bits: 2, .. })
        ));
        assert!(matches!(
            c.append("write_swap", &params![1, 1]),
            Err(IrError::MalformedInstruction { .. })
        ));
        assert!(matches!(
            c.append("write_diag", &params![vec!["1(0)"], vec![0.5]]),
            Err(IrError::MalformedInstruction { .. })
        ));
        assert_eq!(c.lines(), vec!["HAD2\tAT\t0"]);
    }

    #[test]
    fn test_append_rejects_multi_line_text() {
        let mut c = CircuitList::new(2);
        c.append("write_NOTA", &params!["fine"]).unwrap();
        for text in ["first\nSECRET\t1", "a\rb", "trailing\n"] {
            assert!(matches!(
                c.append("write_NOTA", &params![text]),
                Err(IrError::MalformedInstruction { .. })
            ));
            assert!(matches!(
                c.append("write_PRINT", &params![text]),
                Err(IrError::MalformedInstruction { .. })
            ));
        }
        assert_eq!(c.lines(), vec!["NOTA\tfine"]);
        assert!(c.herm().is_ok());
    }

    #[test]
    fn test_append_with_forwards_lines() {
        let mut c = CircuitList::new(3);
        let mut sink = EnglishWriter::new();
        c.append_with(&mut sink, "write_Rz", &params![1, "#4"]).unwrap();
        c.append_with(&mut sink, "write_NOTA", &params!["done"]).unwrap();
        assert_eq!(sink.as_str(), c.to_english());
        assert_eq!(sink.as_str(), "ROTZ\t#4\tAT\t1\nNOTA\tdone\n");
    }

    #[test]
    fn test_concat_and_operators() {
        let a = circuit(2, &["HAD2\tAT\t0"]);
        let b = circuit(2, &["SIGX\tAT\t1\tIF\t0T", "ROTZ\t30\tAT\t1"]);

        let ab = a.concat(&b).unwrap();
        assert_eq!(ab.len(), 3);
        assert_eq!(&a + &b, ab);
        assert_eq!(a.clone() + b.clone(), ab);

        let mut acc = a.clone();
        acc += &b;
        assert_eq!(acc, ab);

        let empty = CircuitList::new(2);
        assert_eq!(a.concat(&empty).unwrap(), a);
        assert_eq!(empty.concat(&a).unwrap(), a);
    }

    #[test]
    fn test_width_mismatch() {
        let a = circuit(2, &["HAD2\tAT\t0"]);
        let b = CircuitList::new(3);
        assert!(matches!(
            a.concat(&b),
            Err(IrError::QubitCountMismatch { left: 2, right: 3 })
        ));
        let mut c = a.clone();
        assert!(c.extend_from(&b).is_err());
        assert_eq!(c, a);
    }

    #[test]
    #[should_panic(expected = "Cannot combine circuits on 2 and 3 qubits")]
    fn test_add_mismatch_panics() {
        let _ = CircuitList::new(2) + CircuitList::new(3);
    }

    #[test]
    fn test_slice() {
        let c = circuit(2, &["HAD2\tAT\t0", "HAD2\tAT\t1", "SIGX\tAT\t0", "SIGZ\tAT\t1"]);
        assert_eq!(c.slice(1..3).lines(), vec!["HAD2\tAT\t1", "SIGX\tAT\t0"]);
        assert_eq!(c.slice(..), c);
        assert_eq!(c.slice(2..).len(), 2);
        assert_eq!(c.slice(..=0).len(), 1);
        assert!(c.slice(3..1).is_empty());
        assert!(c.slice(10..).is_empty());
        assert_eq!(c.slice(1..3).num_bits(), 2);
    }

    #[test]
    fn test_slice_step() {
        let c = circuit(
            1,
            &["ROTX\t0\tAT\t0", "ROTX\t1\tAT\t0", "ROTX\t2\tAT\t0", "ROTX\t3\tAT\t0"],
        );
        let angles = |c: &CircuitList| -> Vec<String> {
            c.iter().map(|i| i.angles()[0].as_str().to_string()).collect()
        };
        assert_eq!(angles(&c.slice_step(None, None, 2).unwrap()), ["0", "2"]);
        assert_eq!(angles(&c.slice_step(None, None, -1).unwrap()), ["3", "2", "1", "0"]);
        assert_eq!(angles(&c.slice_step(Some(-2), None, 1).unwrap()), ["2", "3"]);
        assert_eq!(angles(&c.slice_step(Some(2), Some(0), -1).unwrap()), ["2", "1"]);
        assert_eq!(angles(&c.slice_step(Some(1), Some(-1), 1).unwrap()), ["1", "2"]);
        assert!(c.slice_step(Some(3), Some(1), 1).unwrap().is_empty());
        assert!(matches!(c.slice_step(None, None, 0), Err(IrError::InvalidSlice)));
        assert_eq!(c.slice_step(None, None, 1).unwrap(), c);
    }

    #[test]
    fn test_slice_step_huge_steps() {
        let c = circuit(1, &["ROTX\t0\tAT\t0", "ROTX\t1\tAT\t0"]);
        let one = c.slice_step(Some(1), None, isize::MAX).unwrap();
        assert_eq!(one.lines(), vec!["ROTX\t1\tAT\t0"]);
        let first = c.slice_step(None, None, isize::MAX).unwrap();
        assert_eq!(first.lines(), vec!["ROTX\t0\tAT\t0"]);
        let last = c.slice_step(None, None, isize::MIN).unwrap();
        assert_eq!(last.lines(), vec!["ROTX\t1\tAT\t0"]);
    }

    #[test]
    fn test_collect_variables_and_functions() {
        let c = circuit(
            4,
            &[
                "ROTX\t25.714285714285715\tAT\t2",
                "ROTX\t#2*.5\tAT\t1",
                "ROTX\tmy_fun1#2\tAT\t1",
                "ROTN\t#1\t-#1*3\t#3\tAT\t3",
                "ROTX\t-my_fun2#2#1\tAT\t1",
                "SIGX\tAT\t3\tIF\t2T",
                "NOTA\t#9 in a comment",
            ],
        );
        let (vars, funs) = c.collect_variables_and_functions();
        assert_eq!(vars, vec![2, 1, 3]);
        assert_eq!(funs, vec!["my_fun1".to_string(), "my_fun2".to_string()]);
    }

    #[test]
    fn test_collect_scans_opaque_fields() {
        let c = circuit(1, &["CUSTOM\tf#7\tAT\t0"]);
        let (vars, funs) = c.collect_variables_and_functions();
        assert_eq!(vars, vec![7]);
        assert_eq!(funs, vec!["f".to_string()]);
    }

    #[test]
    fn test_herm_rejects_opaque() {
        let c = circuit(2, &["HAD2\tAT\t0", "CUSTOM\t1"]);
        assert!(matches!(
            c.herm(),
            Err(IrError::UnsupportedInstructionKind(op)) if op == "CUSTOM"
        ));
    }

    #[test]
    fn test_qubit_range_checked() {
        let err = CircuitList::from_lines(2, ["SWAP\t2\t0"]).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitOutOfRange { qubit: 2, num_bits: 2, line: Some(_) }
        ));
    }

    #[test]
    fn test_serialize_json() {
        let c = circuit(2, &["ROTZ\t#1\tAT\t1"]);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["num_bits"], 2);
        assert_eq!(json["instructions"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_display_and_english() {
        let c = circuit(2, &["HAD2\tAT\t0", "PRINT\tALL"]);
        assert_eq!(c.to_string(), "HAD2\tAT\t0\nPRINT\tALL");
        assert_eq!(c.to_english(), "HAD2\tAT\t0\nPRINT\tALL\n");
    }
}
