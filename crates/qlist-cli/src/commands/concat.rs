//! Concat command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use qlist_ir::CircuitList;

use super::common::{load_circuit, save_circuit};

/// Execute the concat command.
pub fn execute(dir: &Path, prefixes: &[String], num_bits: usize, output: &str) -> Result<()> {
    let mut combined = CircuitList::new(num_bits);
    for prefix in prefixes {
        let part = load_circuit(dir, prefix, num_bits)?;
        combined
            .extend_from(&part)
            .with_context(|| format!("Cannot append '{prefix}'"))?;
        println!("  + {} ({} instructions)", style(prefix).green(), part.len());
    }

    let path = save_circuit(&combined, dir, output)?;
    println!(
        "{} Concatenated {} circuits, {} instructions",
        style("✓").green().bold(),
        prefixes.len(),
        combined.len()
    );
    println!("  Output: {}", style(path.display()).green());
    Ok(())
}
