use slipgrid_core::{
    ActionId, EvalConfig, EvalError, Policy, StateId, TableBuilder, TableError, Transition,
    policy_evaluation,
};

/// Three-state corridor: s0 -> s1 -> s2 (terminal), one action, reward on the
/// final hop. Closed form: v(s1) = 1, v(s0) = gamma.
fn corridor() -> slipgrid_core::DynamicsTable {
    let mut builder = TableBuilder::new(3, 1);
    builder
        .push(
            StateId::from(0),
            ActionId::from(0),
            Transition {
                probability: 1.0,
                next: StateId::from(1),
                reward: 0.0,
                terminal: false,
            },
        )
        .expect("push should succeed");
    builder
        .push(
            StateId::from(1),
            ActionId::from(0),
            Transition {
                probability: 1.0,
                next: StateId::from(2),
                reward: 1.0,
                terminal: true,
            },
        )
        .expect("push should succeed");
    builder
        .push(
            StateId::from(2),
            ActionId::from(0),
            Transition {
                probability: 1.0,
                next: StateId::from(2),
                reward: 0.0,
                terminal: true,
            },
        )
        .expect("push should succeed");
    builder.finish().expect("table should build")
}

#[test]
fn public_evaluation_matches_closed_form() {
    let table = corridor();
    let policy = Policy::from_indices(&[0, 0, 0]);
    let config = EvalConfig {
        gamma: 0.9,
        ..EvalConfig::default()
    };

    let values = policy_evaluation(&policy, &table, &config, &[StateId::from(2)])
        .expect("evaluation should converge");

    assert!((values[1] - 1.0).abs() < 1e-12);
    assert!((values[0] - 0.9).abs() < 1e-12);
    assert_eq!(values[2], 0.0);
}

#[test]
fn public_builder_rejects_incomplete_tables() {
    let builder = TableBuilder::new(2, 1);
    let err = builder.finish().expect_err("empty cells should fail");
    assert!(matches!(err, TableError::EmptyOutcomes { .. }));
}

#[test]
fn public_malformed_policy_is_rejected_eagerly() {
    let table = corridor();
    let policy = Policy::from_indices(&[0, 0]);

    let err = policy_evaluation(&policy, &table, &EvalConfig::default(), &[])
        .expect_err("short policy should fail");
    assert!(matches!(err, EvalError::PolicyLengthMismatch { .. }));
}

#[test]
fn public_yaml_config_parses_and_validates() {
    let config = EvalConfig::from_yaml_str("gamma: 0.9\ntheta: 1.0e-8\nmax_sweeps: 500\n")
        .expect("yaml should parse");
    assert!((config.gamma - 0.9).abs() < f64::EPSILON);
    assert_eq!(config.max_sweeps, 500);

    let err = EvalConfig::from_yaml_str("gamma: 2.0\n").expect_err("bad gamma should fail");
    assert!(err.to_string().contains("gamma"));
}

#[test]
fn public_default_yaml_config_parses() {
    let config = EvalConfig::from_default_yaml().expect("default yaml should parse");
    assert!((config.gamma - 1.0).abs() < f64::EPSILON);
    assert!(config.max_sweeps > 0);
}
