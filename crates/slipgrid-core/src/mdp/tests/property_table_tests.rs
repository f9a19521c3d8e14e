use proptest::prelude::*;

use crate::{ActionId, StateId, TableBuilder, TableError, Transition};

fn cell_weights(
    num_states: usize,
    num_actions: usize,
) -> impl Strategy<Value = Vec<Vec<f64>>> {
    let cells = num_states * num_actions;
    proptest::collection::vec(
        proptest::collection::vec(0.1f64..10.0, 1..4),
        cells..=cells,
    )
}

proptest! {
    #[test]
    fn normalized_cells_build_tables_whose_rows_sum_to_one(
        (num_states, num_actions, weights) in (1usize..5, 1usize..4)
            .prop_flat_map(|(s, a)| (Just(s), Just(a), cell_weights(s, a)))
    ) {
        let mut builder = TableBuilder::new(num_states, num_actions);

        for (idx, cell) in weights.iter().enumerate() {
            let state = StateId::from(idx / num_actions);
            let action = ActionId::from(idx % num_actions);
            let total: f64 = cell.iter().sum();

            for (k, weight) in cell.iter().enumerate() {
                let pushed = builder.push(
                    state,
                    action,
                    Transition {
                        probability: weight / total,
                        next: StateId::from(k % num_states),
                        reward: 0.0,
                        terminal: false,
                    },
                );
                prop_assert!(pushed.is_ok());
            }
        }

        let table = builder.finish();
        prop_assert!(table.is_ok());
        let table = table.unwrap();

        for s in 0..num_states {
            for a in 0..num_actions {
                let outcomes = table.outcomes(StateId::from(s), ActionId::from(a));
                prop_assert!(outcomes.is_some());
                let sum: f64 = outcomes.unwrap().iter().map(|t| t.probability).sum();
                prop_assert!((sum - 1.0).abs() <= 1e-9);
            }
        }
    }

    #[test]
    fn underweighted_cells_are_rejected_at_finish(
        weights in proptest::collection::vec(0.1f64..10.0, 1..4)
    ) {
        let mut builder = TableBuilder::new(1, 1);
        let total: f64 = weights.iter().sum();

        // Half the mass is missing, which must trip the sum check.
        for weight in &weights {
            let pushed = builder.push(
                StateId::from(0),
                ActionId::from(0),
                Transition {
                    probability: weight / (2.0 * total),
                    next: StateId::from(0),
                    reward: 0.0,
                    terminal: false,
                },
            );
            prop_assert!(pushed.is_ok());
        }

        let err = builder.finish();
        prop_assert!(
            matches!(err, Err(TableError::ProbabilitySum { .. })),
            "expected TableError::ProbabilitySum, got {:?}",
            err
        );
    }
}
