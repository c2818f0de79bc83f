//! Tests for delegated materialization: diagrams, files and simulation.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::fmt;
use std::path::PathBuf;

use qlist_ir::{
    CircuitList, DiagramReader, IrError, MaterializeError, Simulator, StagedCircuit, params,
    persist,
};

/// Draws one row per line with the target marked.
struct AsciiReader;

#[derive(Debug)]
struct ReaderError;

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("reader refused")
    }
}

impl std::error::Error for ReaderError {}

impl DiagramReader for AsciiReader {
    type Error = ReaderError;

    fn render(&mut self, num_bits: usize, english: &str) -> Result<String, Self::Error> {
        let mut out = String::new();
        for line in english.lines() {
            let opcode = line.split('\t').next().unwrap_or_default();
            out.push_str(&format!("{opcode:<6}{}\n", "|".repeat(num_bits)));
        }
        Ok(out)
    }
}

struct RefusingReader;

impl DiagramReader for RefusingReader {
    type Error = ReaderError;

    fn render(&mut self, _: usize, _: &str) -> Result<String, Self::Error> {
        Err(ReaderError)
    }
}

#[derive(Debug, PartialEq)]
struct SimError(String);

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "simulation failed: {}", self.0)
    }
}

impl std::error::Error for SimError {}

/// Records what it was handed and optionally fails.
#[derive(Default)]
struct RecordingSimulator {
    seen_dir: RefCell<Option<PathBuf>>,
    fail: bool,
}

impl Simulator for RecordingSimulator {
    type State = Vec<f64>;
    type Options = usize;
    type Output = (usize, Vec<String>, Option<Vec<f64>>);
    type Error = SimError;

    fn simulate(
        &mut self,
        circuit: &StagedCircuit,
        init_state: Option<Self::State>,
        options: Self::Options,
    ) -> Result<Self::Output, Self::Error> {
        *self.seen_dir.borrow_mut() = Some(circuit.dir().to_path_buf());
        assert!(circuit.english_path().exists());
        if self.fail {
            return Err(SimError("diverged".into()));
        }
        let text = std::fs::read_to_string(circuit.english_path())
            .map_err(|e| SimError(e.to_string()))?;
        let lines = text.lines().map(str::to_string).collect();
        Ok((options, lines, init_state))
    }
}

fn sample() -> CircuitList {
    let mut c = CircuitList::new(4);
    c.append("write_cnot", &params![0, 1]).unwrap();
    c.append("write_Rn", &params![2, vec![PI / 2.0, -PI / 2.0, PI / 3.0]])
        .unwrap();
    c
}

#[test]
fn end_to_end_herm_example() {
    let c = sample();
    assert_eq!(
        c.lines(),
        vec!["SIGX\tAT\t1\tIF\t0T", "ROTN\t90\t-90\t60\tAT\t2"]
    );
    let h = c.herm().unwrap();
    assert_eq!(
        h.lines(),
        vec!["ROTN\t-90\t90\t-60\tAT\t2", "SIGX\tAT\t1\tIF\t0T"]
    );
}

#[test]
fn render_uses_reader() {
    let diagram = sample().render(&mut AsciiReader).unwrap();
    assert_eq!(diagram, "SIGX  ||||\nROTN  ||||\n");
}

#[test]
fn reader_error_is_passed_through() {
    match sample().render(&mut RefusingReader) {
        Err(MaterializeError::Collaborator(ReaderError)) => {}
        other => panic!("expected collaborator error, got {other:?}"),
    }
}

#[test]
fn write_then_read_files() {
    let dir = tempfile::tempdir().unwrap();
    let c = sample();
    let (eng, pic) = c.write_files(dir.path(), "demo", &mut AsciiReader).unwrap();

    assert_eq!(eng, dir.path().join("demo_4_eng.txt"));
    assert_eq!(pic, dir.path().join(persist::picture_file_name("demo", 4)));
    assert_eq!(std::fs::read_to_string(&eng).unwrap(), c.to_english());
    assert_eq!(
        std::fs::read_to_string(&pic).unwrap(),
        "SIGX  ||||\nROTN  ||||\n"
    );

    let back = CircuitList::read_english_file(dir.path(), "demo", 4).unwrap();
    assert_eq!(back, c);
}

#[test]
fn read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CircuitList::read_english_file(dir.path(), "absent", 3).unwrap_err();
    assert!(matches!(err, IrError::Io(_)));
}

#[test]
fn simulate_success_removes_staging() {
    let mut sim = RecordingSimulator::default();
    let (opts, lines, init) = sample()
        .simulate(&mut sim, Some(vec![1.0, 0.0]), 7)
        .unwrap();
    assert_eq!(opts, 7);
    assert_eq!(lines, sample().lines());
    assert_eq!(init, Some(vec![1.0, 0.0]));

    let dir = sim.seen_dir.borrow().clone().unwrap();
    assert!(!dir.exists());
}

#[test]
fn simulate_failure_removes_staging() {
    let mut sim = RecordingSimulator {
        fail: true,
        ..Default::default()
    };
    let err = sample().simulate(&mut sim, None, 0).unwrap_err();
    match err {
        MaterializeError::Collaborator(e) => assert_eq!(e, SimError("diverged".into())),
        MaterializeError::Ir(e) => panic!("unexpected IR error {e}"),
    }

    let dir = sim.seen_dir.borrow().clone().unwrap();
    assert!(!dir.exists());
}
