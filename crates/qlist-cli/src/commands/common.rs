//! Shared helpers for CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use qlist_ir::persist::english_file_name;
use qlist_ir::{CircuitList, Param};
use tracing::debug;

/// Load `<prefix>_<num_bits>_eng.txt` from `dir`.
pub fn load_circuit(dir: &Path, prefix: &str, num_bits: usize) -> Result<CircuitList> {
    let path = dir.join(english_file_name(prefix, num_bits));
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    let circuit = CircuitList::read_english_file(dir, prefix, num_bits)
        .with_context(|| format!("Failed to load circuit: {}", path.display()))?;
    debug!(path = %path.display(), lines = circuit.len(), "Loaded circuit");
    Ok(circuit)
}

/// Write the English file of `circuit` into `dir`.
pub fn save_circuit(circuit: &CircuitList, dir: &Path, prefix: &str) -> Result<PathBuf> {
    let path = circuit
        .write_english_file(dir, prefix)
        .with_context(|| format!("Failed to write circuit with prefix '{prefix}'"))?;
    debug!(path = %path.display(), lines = circuit.len(), "Saved circuit");
    Ok(path)
}

/// Interpret a command-line token as a building-operation parameter.
///
/// `[a,b,...]` is a list, `true`/`false` a flag, then integers, then reals;
/// anything else is text.
pub fn parse_param(text: &str) -> Param {
    let text = text.trim();
    if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        let items = inner
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_param)
            .collect();
        return Param::List(items);
    }
    match text {
        "true" => return Param::Bool(true),
        "false" => return Param::Bool(false),
        _ => {}
    }
    if let Ok(v) = text.parse::<i64>() {
        return Param::Int(v);
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Param::Float(v),
        _ => Param::Str(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("3"), Param::Int(3));
        assert_eq!(parse_param("-1.5"), Param::Float(-1.5));
        assert_eq!(parse_param("true"), Param::Bool(true));
        assert_eq!(parse_param("#2*.5"), Param::Str("#2*.5".into()));
        assert_eq!(parse_param("nan"), Param::Str("nan".into()));
        assert_eq!(
            parse_param("[0.5, #1, 2]"),
            Param::List(vec![Param::Float(0.5), Param::Str("#1".into()), Param::Int(2)])
        );
        assert_eq!(parse_param("[]"), Param::List(vec![]));
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_circuit(dir.path(), "none", 2).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let c = CircuitList::from_lines(2, ["HAD2\tAT\t1"]).unwrap();
        let path = save_circuit(&c, dir.path(), "c").unwrap();
        assert!(path.ends_with("c_2_eng.txt"));
        assert_eq!(load_circuit(dir.path(), "c", 2).unwrap(), c);
    }
}
