//! Show command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use super::common::load_circuit;

/// Execute the show command.
pub fn execute(dir: &Path, prefix: &str, num_bits: usize) -> Result<()> {
    let circuit = load_circuit(dir, prefix, num_bits)?;
    let width = circuit.len().to_string().len();
    for (i, inst) in circuit.iter().enumerate() {
        let line = inst.to_string().replace('\t', "  ");
        if inst.is_opaque() {
            println!("{:>width$}  {}", style(i).dim(), style(line).yellow());
        } else {
            println!("{:>width$}  {line}", style(i).dim());
        }
    }
    Ok(())
}
