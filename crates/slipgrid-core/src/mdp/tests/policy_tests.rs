use crate::{ActionId, DynamicsTable, Policy, StateId, TableBuilder, Transition};

fn single_action_table(num_states: usize) -> DynamicsTable {
    let mut builder = TableBuilder::new(num_states, 1);
    for s in 0..num_states {
        builder
            .push(
                StateId::from(s),
                ActionId::from(0),
                Transition {
                    probability: 1.0,
                    next: StateId::from(s),
                    reward: 0.0,
                    terminal: false,
                },
            )
            .expect("push should succeed");
    }
    builder.finish().expect("table should build")
}

#[test]
fn from_indices_preserves_order() {
    let policy = Policy::from_indices(&[2, 0, 1]);

    assert_eq!(policy.len(), 3);
    assert!(!policy.is_empty());
    assert_eq!(policy.action(StateId::from(0)), ActionId::from(2));
    assert_eq!(policy.action(StateId::from(1)), ActionId::from(0));
    assert_eq!(policy.action(StateId::from(2)), ActionId::from(1));
}

#[test]
fn from_actions_matches_from_indices() {
    let from_actions =
        Policy::from_actions(vec![ActionId::from(1), ActionId::from(0)]);
    let from_indices = Policy::from_indices(&[1, 0]);

    assert_eq!(from_actions, from_indices);
}

#[test]
fn terminal_entries_are_exempt_from_action_range_checks() {
    let table = single_action_table(2);

    // State 1 carries a nonsense action, but it is masked as terminal.
    let policy = Policy::from_indices(&[0, 99]);
    let terminal = [false, true];

    policy
        .validate(&table, &terminal)
        .expect("terminal entries should not be range-checked");
}

#[test]
fn non_terminal_entries_are_range_checked() {
    let table = single_action_table(2);
    let policy = Policy::from_indices(&[0, 99]);
    let terminal = [false, false];

    assert!(policy.validate(&table, &terminal).is_err());
}
