//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - circuit lists and single-qubit gate algebra",
        style("qlist").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qlist-gates  Single-qubit gate algebra");
    println!("  qlist-ir     Circuit list IR and conjugation");
    println!("  qlist-cli    Command-line interface");
}
