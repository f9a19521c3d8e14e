use slipgrid_core::{ActionId, DynamicsTable, StateId, TableBuilder, Transition};

use crate::{Action, LakeError, LakeLayout};

/// Per-branch probability of the three-way uniform slip model.
/// Fixed by the environment; not a configuration knob.
const SLIP_PROB: f64 = 1.0 / 3.0;

/// Build the full transition model of a lake layout.
///
/// Every non-terminal `(state, intended action)` cell gets one outcome per
/// member of the slip set, each at probability 1/3, with bounded motion and
/// the goal reward rule applied to the landing cell. Terminal states get a
/// single zero-reward self-loop per action so the table stays total.
pub fn build_dynamics(layout: &LakeLayout) -> Result<DynamicsTable, LakeError> {
    layout.validate()?;

    let num_states = layout.num_states();
    let mut builder = TableBuilder::new(num_states, Action::ALL.len());

    for s in 0..num_states {
        if layout.is_terminal(s) {
            for action in Action::ALL {
                builder.push(
                    StateId::from(s),
                    ActionId::from(action.index()),
                    Transition {
                        probability: 1.0,
                        next: StateId::from(s),
                        reward: 0.0,
                        terminal: true,
                    },
                )?;
            }
            continue;
        }

        let (row, col) = layout.row_col(s);
        for intended in Action::ALL {
            for actual in intended.slip_set() {
                let (next_row, next_col) = actual.apply(row, col, layout.grid_size);
                let next = layout.state_at(next_row, next_col);
                builder.push(
                    StateId::from(s),
                    ActionId::from(intended.index()),
                    Transition {
                        probability: SLIP_PROB,
                        next: StateId::from(next),
                        reward: if next == layout.goal { 1.0 } else { 0.0 },
                        terminal: layout.is_terminal(next),
                    },
                )?;
            }
        }
    }

    Ok(builder.finish()?)
}
