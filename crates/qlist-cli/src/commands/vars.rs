//! Vars command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;
use serde::Serialize;

use super::common::load_circuit;

#[derive(Serialize)]
struct VarsReport {
    var_nums: Vec<u32>,
    fun_names: Vec<String>,
}

/// Execute the vars command.
pub fn execute(dir: &Path, prefix: &str, num_bits: usize, format: &str) -> Result<()> {
    let circuit = load_circuit(dir, prefix, num_bits)?;
    let (var_nums, fun_names) = circuit.collect_variables_and_functions();

    match format {
        "json" => {
            let report = VarsReport {
                var_nums,
                fun_names,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            let vars: Vec<String> = var_nums.iter().map(|n| format!("#{n}")).collect();
            println!("{:<12}{}", style("Variables").bold(), vars.join(", "));
            println!("{:<12}{}", style("Functions").bold(), fun_names.join(", "));
        }
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    }
    Ok(())
}
