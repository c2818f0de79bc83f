//! Append command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;
use qlist_ir::{CircuitList, Param};
use qlist_ir::persist::english_file_name;

use super::common::{load_circuit, parse_param, save_circuit};

/// Execute the append command.
///
/// Numeric angles are radians, as for [`CircuitList::append`].
pub fn execute(
    dir: &Path,
    prefix: &str,
    num_bits: usize,
    operation: &str,
    params: &[String],
    create: bool,
) -> Result<()> {
    let exists = dir.join(english_file_name(prefix, num_bits)).exists();
    let mut circuit = if create && !exists {
        CircuitList::new(num_bits)
    } else {
        load_circuit(dir, prefix, num_bits)?
    };

    let params: Vec<Param> = params.iter().map(|p| parse_param(p)).collect();
    circuit.append(operation, &params)?;

    let path = save_circuit(&circuit, dir, prefix)?;
    if let Some(line) = circuit.lines().last() {
        println!("{} {}", style("+").green().bold(), line.replace('\t', "  "));
    }
    println!("  Output: {}", style(path.display()).green());
    Ok(())
}
