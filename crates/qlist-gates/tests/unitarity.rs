//! Property-based tests for the gate algebra.
//!
//! Every unitary returned by either strategy must satisfy `U * U^H = I`, and
//! the uniform strategy must agree with the closed forms.

use proptest::prelude::*;
use qlist_gates::{
    Axis, GateAlgebra, Matrix2, ParametrizationKind, ScalarKind, UNITARITY_TOLERANCE,
};

fn arb_angle() -> impl Strategy<Value = f64> {
    -20.0_f64..20.0
}

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

fn arb_algebra() -> impl Strategy<Value = GateAlgebra> {
    prop_oneof![
        Just(ParametrizationKind::ClosedForm),
        Just(ParametrizationKind::GeneralU2),
    ]
    .prop_map(GateAlgebra::from_kind)
}

fn all_unitaries(alg: &GateAlgebra, t: f64, x: f64, y: f64, z: f64, axis: Axis) -> Vec<Matrix2> {
    vec![
        alg.hadamard(ScalarKind::Complex).to_complex(),
        alg.hadamard(ScalarKind::Real).to_complex(),
        alg.phase0(t),
        alg.phase1(t),
        alg.phase(t),
        alg.rotation_vector(x, y, z),
        alg.rotation_axis(t, axis),
        alg.pauli_x(ScalarKind::Complex).to_complex(),
        alg.pauli_y(),
        alg.pauli_z(ScalarKind::Real).to_complex(),
        alg.gate_s(false),
        alg.gate_s(true),
        alg.gate_t(false),
        alg.gate_t(true),
        alg.unitary2(t, x, y, z),
    ]
}

proptest! {
    #[test]
    fn every_gate_is_unitary(
        alg in arb_algebra(),
        t in arb_angle(),
        x in arb_angle(),
        y in arb_angle(),
        z in arb_angle(),
        axis in arb_axis(),
    ) {
        for (i, u) in all_unitaries(&alg, t, x, y, z, axis).iter().enumerate() {
            prop_assert!(u.is_unitary(UNITARITY_TOLERANCE), "gate {} not unitary: {}", i, u);
        }
    }

    #[test]
    fn axis_rotation_matches_general_rotation(t in arb_angle(), axis in arb_axis()) {
        let alg = GateAlgebra::new();
        let [x, y, z] = axis.scaled(t);
        prop_assert!(alg.rotation_axis(t, axis).approx_eq(&alg.rotation_vector(x, y, z), 1e-12));
    }

    #[test]
    fn uniform_strategy_agrees_with_closed_form(
        t in arb_angle(),
        x in 0.1_f64..5.0,
        y in 0.1_f64..5.0,
        z in 0.1_f64..5.0,
        axis in arb_axis(),
    ) {
        // phase0/phase1 map to a rotation of norm |t|/2, keep it clear of the
        // degenerate-norm cutoff
        prop_assume!(t.abs() > 1e-6);
        let closed = all_unitaries(&GateAlgebra::new(), t, x, y, z, axis);
        let uniform = all_unitaries(
            &GateAlgebra::from_kind(ParametrizationKind::GeneralU2), t, x, y, z, axis,
        );
        for (i, (a, b)) in closed.iter().zip(uniform.iter()).enumerate() {
            prop_assert!(a.approx_eq(b, 1e-9), "gate {}: {} vs {}", i, a, b);
        }
    }

    #[test]
    fn rotation_inverse_is_negated_angle(x in arb_angle(), y in arb_angle(), z in arb_angle()) {
        let alg = GateAlgebra::new();
        let u = alg.rotation_vector(x, y, z);
        prop_assert!(alg.rotation_vector(-x, -y, -z).approx_eq(&u.adjoint(), 1e-9));
    }
}

#[test]
fn degenerate_rotation_is_identity() {
    for alg in [GateAlgebra::new(), GateAlgebra::from_kind(ParametrizationKind::GeneralU2)] {
        assert_eq!(alg.rotation_vector(0.0, 0.0, 0.0), Matrix2::identity());
    }
}
