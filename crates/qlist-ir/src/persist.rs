//! English and picture files on disk.
//!
//! A circuit on `n` qubits with prefix `p` lives in `p_n_eng.txt` (one
//! instruction per line) next to its diagram `p_n_pic.txt`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IrResult;
use crate::CircuitList;

/// `<prefix>_<num_bits>_eng.txt`
pub fn english_file_name(prefix: &str, num_bits: usize) -> String {
    format!("{prefix}_{num_bits}_eng.txt")
}

/// `<prefix>_<num_bits>_pic.txt`
pub fn picture_file_name(prefix: &str, num_bits: usize) -> String {
    format!("{prefix}_{num_bits}_pic.txt")
}

/// Write the English file of `circuit` into `dir` and return its path.
pub(crate) fn write_english(dir: &Path, prefix: &str, circuit: &CircuitList) -> IrResult<PathBuf> {
    let path = dir.join(english_file_name(prefix, circuit.num_bits()));
    fs::write(&path, circuit.to_english())?;
    Ok(path)
}

/// Write a rendered diagram next to the English file.
pub(crate) fn write_picture(
    dir: &Path,
    prefix: &str,
    num_bits: usize,
    diagram: &str,
) -> IrResult<PathBuf> {
    let path = dir.join(picture_file_name(prefix, num_bits));
    fs::write(&path, diagram)?;
    Ok(path)
}

/// Read the lines of an English file, dropping blank ones.
pub(crate) fn read_english_lines(dir: &Path, prefix: &str, num_bits: usize) -> IrResult<Vec<String>> {
    let text = fs::read_to_string(dir.join(english_file_name(prefix, num_bits)))?;
    Ok(text
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(english_file_name("demo", 4), "demo_4_eng.txt");
        assert_eq!(picture_file_name("demo", 4), "demo_4_pic.txt");
    }

    #[test]
    fn test_blank_lines_dropped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("x_2_eng.txt"),
            "HAD2\tAT\t0\r\n\nSIGX\tAT\t1\n  \n",
        )
        .unwrap();
        let lines = read_english_lines(dir.path(), "x", 2).unwrap();
        assert_eq!(lines, vec!["HAD2\tAT\t0", "SIGX\tAT\t1"]);
    }
}
