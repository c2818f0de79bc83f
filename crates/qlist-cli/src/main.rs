//! qlist Command-Line Interface
//!
//! Works on English circuit files (`<prefix>_<num_bits>_eng.txt`) and prints
//! single-qubit gate matrices.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use qlist_gates::Axis;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::gate::{GateKind, GateOptions};
use commands::{append, concat, gate, herm, show, slice, vars, version};
use config::CliConfig;

/// qlist - circuit lists, conjugation and single-qubit gates
#[derive(Parser)]
#[command(name = "qlist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Location of one English file.
#[derive(clap::Args, Debug, Clone)]
struct CircuitArgs {
    /// Directory holding the English file
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// File prefix
    #[arg(short, long)]
    prefix: String,

    /// Number of qubits
    #[arg(short, long)]
    num_bits: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a circuit, one instruction per line
    Show {
        #[command(flatten)]
        circuit: CircuitArgs,
    },

    /// Write the Hermitian conjugate of a circuit
    Herm {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Output prefix (default: <prefix>_herm)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the placeholder variables and functions of a circuit
    Vars {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Write a slice of a circuit (start:stop:step, negative indices allowed)
    Slice {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// First index
        #[arg(long, allow_negative_numbers = true)]
        start: Option<isize>,

        /// Index to stop before
        #[arg(long, allow_negative_numbers = true)]
        stop: Option<isize>,

        /// Step (non-zero)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        step: isize,

        /// Output prefix (default: <prefix>_slice)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Concatenate circuits with the same qubit count
    Concat {
        /// Directory holding the English files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Number of qubits
        #[arg(short, long)]
        num_bits: usize,

        /// Output prefix
        #[arg(short, long)]
        output: String,

        /// Prefixes of the circuits, in order
        #[arg(required = true)]
        prefixes: Vec<String>,
    },

    /// Append one building operation (e.g. write_Rx 2 0.5) to a circuit
    Append {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Create the file if it does not exist
        #[arg(long)]
        create: bool,

        /// Operation name (write_H, write_cnot, write_Rn, ...)
        operation: String,

        /// Parameters; lists as [a,b,c]
        #[arg(allow_hyphen_values = true)]
        params: Vec<String>,
    },

    /// Print the matrix of a single-qubit gate
    Gate {
        /// Gate to print
        #[arg(value_enum)]
        gate: GateKind,

        /// Angles (radians unless the config sets degrees)
        #[arg(allow_negative_numbers = true)]
        angles: Vec<f64>,

        /// Axis for `rot` (x, y, z or 1, 2, 3); required for `rot`
        #[arg(short, long, required_if_eq("gate", "rot"))]
        axis: Option<Axis>,

        /// Request real entries where the gate allows them
        #[arg(long)]
        real: bool,

        /// Conjugate S or T
        #[arg(long)]
        dagger: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Show { circuit } => show::execute(&circuit.dir, &circuit.prefix, circuit.num_bits),

        Commands::Herm { circuit, output } => herm::execute(
            &circuit.dir,
            &circuit.prefix,
            circuit.num_bits,
            output.as_deref(),
        ),

        Commands::Vars { circuit, format } => {
            vars::execute(&circuit.dir, &circuit.prefix, circuit.num_bits, &format)
        }

        Commands::Slice {
            circuit,
            start,
            stop,
            step,
            output,
        } => slice::execute(
            &circuit.dir,
            &circuit.prefix,
            circuit.num_bits,
            start,
            stop,
            step,
            output.as_deref(),
        ),

        Commands::Concat {
            dir,
            num_bits,
            output,
            prefixes,
        } => concat::execute(&dir, &prefixes, num_bits, &output),

        Commands::Append {
            circuit,
            create,
            operation,
            params,
        } => append::execute(
            &circuit.dir,
            &circuit.prefix,
            circuit.num_bits,
            &operation,
            &params,
            create,
        ),

        Commands::Gate {
            gate: kind,
            angles,
            axis,
            real,
            dagger,
            json,
            config,
        } => {
            let config = CliConfig::load(config.as_deref())?;
            let options = GateOptions {
                axis,
                real,
                dagger,
                json,
            };
            gate::execute(kind, &angles, options, &config)
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Handle errors
    if let Err(e) = run(cli.command) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_herm() {
        let cli = Cli::try_parse_from(["qlist", "herm", "-p", "demo", "-n", "4"]).unwrap();
        match cli.command {
            Commands::Herm { circuit, output } => {
                assert_eq!(circuit.prefix, "demo");
                assert_eq!(circuit.num_bits, 4);
                assert_eq!(circuit.dir, PathBuf::from("."));
                assert!(output.is_none());
            }
            _ => panic!("expected herm"),
        }
    }

    #[test]
    fn test_parse_negative_slice_bounds() {
        let cli = Cli::try_parse_from([
            "qlist", "slice", "-p", "c", "-n", "2", "--start", "-2", "--step", "-1",
        ])
        .unwrap();
        match cli.command {
            Commands::Slice {
                start, stop, step, ..
            } => {
                assert_eq!(start, Some(-2));
                assert_eq!(stop, None);
                assert_eq!(step, -1);
            }
            _ => panic!("expected slice"),
        }
    }

    #[test]
    fn test_parse_gate() {
        let cli = Cli::try_parse_from(["qlist", "gate", "rot", "-1.5", "--axis", "y"]).unwrap();
        match cli.command {
            Commands::Gate {
                gate, angles, axis, ..
            } => {
                assert_eq!(gate, GateKind::Rot);
                assert_eq!(angles, vec![-1.5]);
                assert_eq!(axis, Some(Axis::Y));
            }
            _ => panic!("expected gate"),
        }
        assert!(Cli::try_parse_from(["qlist", "gate", "rot", "--axis", "w"]).is_err());
    }

    #[test]
    fn test_rot_requires_axis() {
        assert!(Cli::try_parse_from(["qlist", "gate", "rot", "0.5"]).is_err());
        assert!(Cli::try_parse_from(["qlist", "gate", "rot", "0.5", "-a", "x"]).is_ok());
        assert!(Cli::try_parse_from(["qlist", "gate", "hadamard"]).is_ok());
    }

    #[test]
    fn test_parse_append_with_list() {
        let cli = Cli::try_parse_from([
            "qlist", "append", "-p", "c", "-n", "3", "--create", "write_Rn", "2", "[0.5,-0.5,#1]",
        ])
        .unwrap();
        match cli.command {
            Commands::Append {
                create,
                operation,
                params,
                ..
            } => {
                assert!(create);
                assert_eq!(operation, "write_Rn");
                assert_eq!(params, vec!["2", "[0.5,-0.5,#1]"]);
            }
            _ => panic!("expected append"),
        }
    }

    #[test]
    fn test_concat_needs_prefixes() {
        assert!(Cli::try_parse_from(["qlist", "concat", "-n", "2", "-o", "out"]).is_err());
    }
}
