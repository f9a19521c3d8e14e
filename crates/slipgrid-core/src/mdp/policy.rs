use crate::mdp::{
    error::EvalError,
    ids::{ActionId, StateId},
    table::DynamicsTable,
};

/// A fixed deterministic policy: one action per state.
///
/// The mapping is total over the state space; entries for terminal states are
/// carried but never consulted by evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    actions: Vec<ActionId>,
}

impl Policy {
    /// Build a policy from one action per state, in state order.
    pub fn from_actions(actions: Vec<ActionId>) -> Self {
        Self { actions }
    }

    /// Build a policy from raw action indices, in state order.
    pub fn from_indices(indices: &[usize]) -> Self {
        Self {
            actions: indices.iter().copied().map(ActionId::from).collect(),
        }
    }

    /// Return the action this policy assigns to `state`.
    pub fn action(&self, state: StateId) -> ActionId {
        self.actions[state.index()]
    }

    /// Return the number of states this policy covers.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Return whether the policy covers no states at all.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Check the policy against a table and a terminal mask.
    ///
    /// Every state must have an entry, and every non-terminal entry must name
    /// an action the table covers. Terminal entries are exempt since
    /// evaluation short-circuits them.
    pub(crate) fn validate(
        &self,
        table: &DynamicsTable,
        terminal: &[bool],
    ) -> Result<(), EvalError> {
        if self.actions.len() != table.num_states() {
            return Err(EvalError::PolicyLengthMismatch {
                policy_len: self.actions.len(),
                num_states: table.num_states(),
            });
        }

        for (idx, action) in self.actions.iter().enumerate() {
            if terminal[idx] {
                continue;
            }
            if action.index() >= table.num_actions() {
                return Err(EvalError::PolicyActionOutOfRange {
                    state: StateId::from(idx),
                    action: *action,
                    num_actions: table.num_actions(),
                });
            }
        }

        Ok(())
    }
}
