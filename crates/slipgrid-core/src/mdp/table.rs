use crate::mdp::{
    error::TableError,
    ids::{ActionId, StateId},
};

/// Floating point tolerance used when validating probability sums.
pub(crate) const PROB_TOLERANCE: f64 = 1e-9;

/// One probabilistic outcome of taking an action in a state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub probability: f64,
    pub next: StateId,
    pub reward: f64,
    pub terminal: bool,
}

/// Immutable `state x action` table of transition outcomes.
///
/// Storage is a flat arena of outcome lists indexed by
/// `state * num_actions + action`; the small dense state and action spaces
/// make integer indexing the natural lookup.
#[derive(Debug, Clone)]
pub struct DynamicsTable {
    num_states: usize,
    num_actions: usize,
    cells: Vec<Vec<Transition>>,
}

impl DynamicsTable {
    /// Return the number of states covered by the table.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Return the number of actions covered by the table.
    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// Return the outcomes of one `(state, action)` cell.
    pub fn outcomes(&self, state: StateId, action: ActionId) -> Option<&[Transition]> {
        if state.index() >= self.num_states || action.index() >= self.num_actions {
            return None;
        }
        self.cells
            .get(state.index() * self.num_actions + action.index())
            .map(Vec::as_slice)
    }
}

/// Incremental builder producing a validated [`DynamicsTable`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    num_states: usize,
    num_actions: usize,
    cells: Vec<Vec<Transition>>,
}

impl TableBuilder {
    /// Create a builder for a `num_states x num_actions` table.
    pub fn new(num_states: usize, num_actions: usize) -> Self {
        Self {
            num_states,
            num_actions,
            cells: vec![Vec::new(); num_states * num_actions],
        }
    }

    /// Append one outcome to a `(state, action)` cell.
    ///
    /// Index ranges, probability bounds, and reward finiteness are checked
    /// immediately; probability sums are checked in [`TableBuilder::finish`]
    /// once a cell is complete.
    pub fn push(
        &mut self,
        state: StateId,
        action: ActionId,
        transition: Transition,
    ) -> Result<&mut Self, TableError> {
        if state.index() >= self.num_states {
            return Err(TableError::StateOutOfRange {
                state,
                num_states: self.num_states,
            });
        }
        if action.index() >= self.num_actions {
            return Err(TableError::ActionOutOfRange {
                action,
                num_actions: self.num_actions,
            });
        }
        if transition.next.index() >= self.num_states {
            return Err(TableError::UnknownNextState {
                state,
                action,
                next: transition.next,
                num_states: self.num_states,
            });
        }
        if !transition.probability.is_finite()
            || transition.probability < 0.0
            || transition.probability > 1.0
        {
            return Err(TableError::InvalidProbability {
                state,
                action,
                value: transition.probability,
            });
        }
        if !transition.reward.is_finite() {
            return Err(TableError::InvalidReward {
                state,
                action,
                value: transition.reward,
            });
        }

        self.cells[state.index() * self.num_actions + action.index()].push(transition);
        Ok(self)
    }

    /// Validate completeness and probability sums, then freeze the table.
    pub fn finish(self) -> Result<DynamicsTable, TableError> {
        for (idx, cell) in self.cells.iter().enumerate() {
            let state = StateId::from(idx / self.num_actions);
            let action = ActionId::from(idx % self.num_actions);

            if cell.is_empty() {
                return Err(TableError::EmptyOutcomes { state, action });
            }

            let sum: f64 = cell.iter().map(|t| t.probability).sum();
            if (sum - 1.0).abs() > PROB_TOLERANCE {
                return Err(TableError::ProbabilitySum {
                    state,
                    action,
                    sum,
                    tolerance: PROB_TOLERANCE,
                });
            }
        }

        Ok(DynamicsTable {
            num_states: self.num_states,
            num_actions: self.num_actions,
            cells: self.cells,
        })
    }
}
