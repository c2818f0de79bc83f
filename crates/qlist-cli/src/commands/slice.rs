//! Slice command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use super::common::{load_circuit, save_circuit};

/// Execute the slice command.
pub fn execute(
    dir: &Path,
    prefix: &str,
    num_bits: usize,
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
    output: Option<&str>,
) -> Result<()> {
    let circuit = load_circuit(dir, prefix, num_bits)?;
    let sliced = circuit.slice_step(start, stop, step)?;

    let out_prefix = output.map_or_else(|| format!("{prefix}_slice"), str::to_string);
    let path = save_circuit(&sliced, dir, &out_prefix)?;
    println!(
        "{} Kept {} of {} instructions",
        style("✓").green().bold(),
        sliced.len(),
        circuit.len()
    );
    println!("  Output: {}", style(path.display()).green());
    Ok(())
}
