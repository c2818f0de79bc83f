//! Herm command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use super::common::{load_circuit, save_circuit};

/// Execute the herm command.
pub fn execute(dir: &Path, prefix: &str, num_bits: usize, output: Option<&str>) -> Result<()> {
    let circuit = load_circuit(dir, prefix, num_bits)?;
    println!(
        "{} Conjugating {} ({} instructions on {} qubits)",
        style("→").cyan().bold(),
        style(prefix).green(),
        circuit.len(),
        num_bits
    );

    let conjugate = circuit.herm()?;

    let out_prefix = output.map_or_else(|| format!("{prefix}_herm"), str::to_string);
    let path = save_circuit(&conjugate, dir, &out_prefix)?;
    println!("{} Conjugation complete", style("✓").green().bold());
    println!("  Output: {}", style(path.display()).green());
    Ok(())
}
