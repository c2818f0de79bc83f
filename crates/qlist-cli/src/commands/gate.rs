//! Gate command implementation.

use anyhow::Result;
use clap::ValueEnum;
use console::style;
use qlist_gates::{Axis, GateAlgebra, GateMatrix, ScalarKind, UNITARITY_TOLERANCE};

use crate::config::CliConfig;

/// Gates that can be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GateKind {
    /// Hadamard
    Hadamard,
    /// Projector onto |0>
    Proj0,
    /// Projector onto |1>
    Proj1,
    /// diag(e^{iθ}, 1)
    Phase0,
    /// diag(1, e^{iθ})
    Phase1,
    /// e^{iθ} I
    Phase,
    /// Rotation about one axis (see --axis)
    Rot,
    /// Rotation by an (x, y, z) angle vector
    Rotn,
    /// Pauli X
    X,
    /// Pauli Y
    Y,
    /// Pauli Z
    Z,
    /// S gate
    S,
    /// T gate
    T,
    /// e^{i r0} times a rotation by (r1, r2, r3)
    U2,
}

impl GateKind {
    /// Number of angle arguments the gate takes.
    pub fn arity(self) -> usize {
        match self {
            GateKind::Phase0 | GateKind::Phase1 | GateKind::Phase | GateKind::Rot => 1,
            GateKind::Rotn => 3,
            GateKind::U2 => 4,
            _ => 0,
        }
    }
}

/// Options of the gate command.
#[derive(Debug, Clone, Copy, Default)]
pub struct GateOptions {
    /// Axis for `rot`; z when unset.
    pub axis: Option<Axis>,
    /// Request real entries where the gate allows them.
    pub real: bool,
    /// Conjugate `s` and `t`.
    pub dagger: bool,
    /// Print JSON instead of a table.
    pub json: bool,
}

/// Build the matrix for `gate` with angles given on the command line.
pub fn build(
    gate: GateKind,
    angles: &[f64],
    options: GateOptions,
    config: &CliConfig,
) -> Result<GateMatrix> {
    if angles.len() != gate.arity() {
        anyhow::bail!(
            "Gate '{}' takes {} angle(s), got {}",
            gate.to_possible_value().map_or_else(String::new, |v| v.get_name().to_string()),
            gate.arity(),
            angles.len()
        );
    }
    let a: Vec<f64> = angles.iter().map(|&t| config.to_radians(t)).collect();
    let alg = GateAlgebra::from_kind(config.parametrization);
    let kind = if options.real {
        ScalarKind::Real
    } else {
        ScalarKind::Complex
    };

    let matrix = match gate {
        GateKind::Hadamard => alg.hadamard(kind),
        GateKind::Proj0 => alg.proj0(kind),
        GateKind::Proj1 => alg.proj1(kind),
        GateKind::Phase0 => alg.phase0(a[0]).into(),
        GateKind::Phase1 => alg.phase1(a[0]).into(),
        GateKind::Phase => alg.phase(a[0]).into(),
        GateKind::Rot => alg
            .rotation_axis(a[0], options.axis.unwrap_or(Axis::Z))
            .into(),
        GateKind::Rotn => alg.rotation_vector(a[0], a[1], a[2]).into(),
        GateKind::X => alg.pauli_x(kind),
        GateKind::Y => alg.pauli_y().into(),
        GateKind::Z => alg.pauli_z(kind),
        GateKind::S => alg.gate_s(options.dagger).into(),
        GateKind::T => alg.gate_t(options.dagger).into(),
        GateKind::U2 => alg.unitary2(a[0], a[1], a[2], a[3]).into(),
    };
    Ok(matrix)
}

/// Execute the gate command.
pub fn execute(
    gate: GateKind,
    angles: &[f64],
    options: GateOptions,
    config: &CliConfig,
) -> Result<()> {
    let matrix = build(gate, angles, options, config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    match &matrix {
        GateMatrix::Real(m) => {
            for row in 0..2 {
                println!("  [{:>10.6} {:>10.6}]", m.get(row, 0), m.get(row, 1));
            }
        }
        GateMatrix::Complex(m) => {
            for row in 0..2 {
                let cells: Vec<String> = (0..2)
                    .map(|col| {
                        let z = m.get(row, col);
                        format!("{:>9.6}{:+.6}i", z.re, z.im)
                    })
                    .collect();
                println!("  [{}]", cells.join("  "));
            }
        }
    }

    let unitary = matrix.to_complex().is_unitary(UNITARITY_TOLERANCE);
    println!(
        "  {} {}",
        style("unitary:").dim(),
        if unitary {
            style("yes").green()
        } else {
            style("no").yellow()
        }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlist_gates::ParametrizationKind;

    #[test]
    fn test_arity_checked() {
        let config = CliConfig::default();
        assert!(build(GateKind::Rotn, &[1.0], GateOptions::default(), &config).is_err());
        assert!(build(GateKind::Hadamard, &[1.0], GateOptions::default(), &config).is_err());
        assert!(build(GateKind::U2, &[0.1, 0.2, 0.3, 0.4], GateOptions::default(), &config).is_ok());
    }

    #[test]
    fn test_real_request() {
        let options = GateOptions {
            real: true,
            ..GateOptions::default()
        };
        let m = build(GateKind::X, &[], options, &CliConfig::default()).unwrap();
        assert_eq!(m.kind(), ScalarKind::Real);
    }

    #[test]
    fn test_degrees_match_radians() {
        let degrees = CliConfig {
            degrees: true,
            ..CliConfig::default()
        };
        let options = GateOptions {
            axis: Some(Axis::Y),
            ..GateOptions::default()
        };
        let a = build(GateKind::Rot, &[90.0], options, &degrees).unwrap();
        let b = build(
            GateKind::Rot,
            &[std::f64::consts::FRAC_PI_2],
            options,
            &CliConfig::default(),
        )
        .unwrap();
        assert!(a.to_complex().approx_eq(&b.to_complex(), 1e-12));
    }

    #[test]
    fn test_parametrizations_agree() {
        let uniform = CliConfig {
            parametrization: ParametrizationKind::GeneralU2,
            ..CliConfig::default()
        };
        for gate in [GateKind::Hadamard, GateKind::Y, GateKind::S, GateKind::T] {
            let a = build(gate, &[], GateOptions::default(), &uniform).unwrap();
            let b = build(gate, &[], GateOptions::default(), &CliConfig::default()).unwrap();
            assert!(a.to_complex().approx_eq(&b.to_complex(), 1e-12), "{gate:?}");
        }
    }
}
