//! External consumers of a circuit: diagram readers and simulators.
//!
//! Neither is implemented here. A [`CircuitList`](crate::CircuitList) hands
//! its English lines to a [`DiagramReader`] to obtain a picture, and stages
//! an English file in a temporary directory for a [`Simulator`].

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::error::IrResult;
use crate::persist;
use crate::CircuitList;

/// Turns English lines into a text diagram (the `_pic.txt` content).
pub trait DiagramReader {
    /// Failure reported by the reader.
    type Error: std::error::Error + 'static;

    /// Render the diagram of a `num_bits`-qubit circuit from its English
    /// text (one instruction per line).
    fn render(&mut self, num_bits: usize, english: &str) -> Result<String, Self::Error>;
}

/// Evolves a state through a staged circuit.
pub trait Simulator {
    /// Initial state vector type.
    type State;
    /// Simulator-specific knobs.
    type Options;
    /// Whatever the simulator returns (final state, measurement record, ...).
    type Output;
    /// Failure reported by the simulator.
    type Error: std::error::Error + 'static;

    /// Run the English file described by `circuit`.
    ///
    /// The staged files only live for the duration of this call.
    fn simulate(
        &mut self,
        circuit: &StagedCircuit,
        init_state: Option<Self::State>,
        options: Self::Options,
    ) -> Result<Self::Output, Self::Error>;
}

/// An English file written into a private temporary directory.
///
/// The directory and everything in it are removed when this value is
/// dropped.
#[derive(Debug)]
pub struct StagedCircuit {
    dir: TempDir,
    prefix: String,
    num_bits: usize,
    english_path: PathBuf,
}

impl StagedCircuit {
    /// File prefix used for staged circuits.
    pub const PREFIX: &'static str = "staged";

    /// Write `circuit` to a fresh temporary directory.
    pub fn stage(circuit: &CircuitList) -> IrResult<Self> {
        let dir = tempfile::Builder::new().prefix("qlist-").tempdir()?;
        let english_path = persist::write_english(dir.path(), Self::PREFIX, circuit)?;
        debug!(path = %english_path.display(), lines = circuit.len(), "Staged circuit");
        Ok(Self {
            dir,
            prefix: Self::PREFIX.to_string(),
            num_bits: circuit.num_bits(),
            english_path,
        })
    }

    /// The temporary directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// File prefix of the staged files.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Qubit count of the staged circuit.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Path of the English file.
    pub fn english_path(&self) -> &Path {
        &self.english_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_and_release() {
        let mut c = CircuitList::new(2);
        c.append("write_H", &crate::params![0]).unwrap();
        let staged = StagedCircuit::stage(&c).unwrap();
        let dir = staged.dir().to_path_buf();
        assert_eq!(
            staged.english_path().file_name().unwrap(),
            "staged_2_eng.txt"
        );
        assert_eq!(
            std::fs::read_to_string(staged.english_path()).unwrap(),
            "HAD2\tAT\t0\n"
        );
        drop(staged);
        assert!(!dir.exists());
    }
}
