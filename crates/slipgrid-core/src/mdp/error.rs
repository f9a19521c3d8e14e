use std::fmt;

use crate::mdp::ids::{ActionId, StateId};

/// Error type for dynamics-table construction.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// An outcome was pushed for a state outside `[0, num_states)`.
    StateOutOfRange { state: StateId, num_states: usize },
    /// An outcome was pushed for an action outside `[0, num_actions)`.
    ActionOutOfRange {
        action: ActionId,
        num_actions: usize,
    },
    /// An outcome referenced a next state outside `[0, num_states)`.
    UnknownNextState {
        state: StateId,
        action: ActionId,
        next: StateId,
        num_states: usize,
    },
    /// An outcome carried a probability that is not finite or not in `[0, 1]`.
    InvalidProbability {
        state: StateId,
        action: ActionId,
        value: f64,
    },
    /// An outcome carried a non-finite reward.
    InvalidReward {
        state: StateId,
        action: ActionId,
        value: f64,
    },
    /// A `(state, action)` cell was left without any outcome.
    EmptyOutcomes { state: StateId, action: ActionId },
    /// A `(state, action)` cell's probabilities do not sum to 1 within tolerance.
    ProbabilitySum {
        state: StateId,
        action: ActionId,
        sum: f64,
        tolerance: f64,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::StateOutOfRange { state, num_states } => write!(
                f,
                "state {} is outside the table's {} states",
                state.index(),
                num_states
            ),
            TableError::ActionOutOfRange {
                action,
                num_actions,
            } => write!(
                f,
                "action {} is outside the table's {} actions",
                action.index(),
                num_actions
            ),
            TableError::UnknownNextState {
                state,
                action,
                next,
                num_states,
            } => write!(
                f,
                "outcome for state {}, action {} references next state {} outside the table's {} states",
                state.index(),
                action.index(),
                next.index(),
                num_states
            ),
            TableError::InvalidProbability {
                state,
                action,
                value,
            } => write!(
                f,
                "invalid probability {} for state {}, action {}",
                value,
                state.index(),
                action.index()
            ),
            TableError::InvalidReward {
                state,
                action,
                value,
            } => write!(
                f,
                "invalid reward {} for state {}, action {}",
                value,
                state.index(),
                action.index()
            ),
            TableError::EmptyOutcomes { state, action } => write!(
                f,
                "state {}, action {} must contain at least one outcome",
                state.index(),
                action.index()
            ),
            TableError::ProbabilitySum {
                state,
                action,
                sum,
                tolerance,
            } => write!(
                f,
                "probability sum for state {}, action {} must be within {} of 1.0, got {}",
                state.index(),
                action.index(),
                tolerance,
                sum
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// Error type for policy evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Discount factor outside `[0, 1]` or not finite.
    InvalidGamma { value: f64 },
    /// Convergence threshold not finite or not strictly positive.
    InvalidTheta { value: f64 },
    /// The sweep cap must allow at least one sweep.
    ZeroSweepCap,
    /// The policy does not cover exactly the table's state space.
    PolicyLengthMismatch {
        policy_len: usize,
        num_states: usize,
    },
    /// The policy maps a non-terminal state to an action the table does not have.
    PolicyActionOutOfRange {
        state: StateId,
        action: ActionId,
        num_actions: usize,
    },
    /// A designated terminal state lies outside the table's state space.
    TerminalStateOutOfRange { state: StateId, num_states: usize },
    /// The sweep cap was exhausted before the max-norm delta dropped below theta.
    NonConvergence { sweeps: usize, max_delta: f64 },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidGamma { value } => {
                write!(f, "gamma must be finite and in [0, 1], got {value}")
            }
            EvalError::InvalidTheta { value } => {
                write!(f, "theta must be finite and greater than 0, got {value}")
            }
            EvalError::ZeroSweepCap => write!(f, "max_sweeps must be greater than 0"),
            EvalError::PolicyLengthMismatch {
                policy_len,
                num_states,
            } => write!(
                f,
                "policy covers {policy_len} states but the table has {num_states}"
            ),
            EvalError::PolicyActionOutOfRange {
                state,
                action,
                num_actions,
            } => write!(
                f,
                "policy maps state {} to action {} but the table has {} actions",
                state.index(),
                action.index(),
                num_actions
            ),
            EvalError::TerminalStateOutOfRange { state, num_states } => write!(
                f,
                "terminal state {} is outside the table's {} states",
                state.index(),
                num_states
            ),
            EvalError::NonConvergence { sweeps, max_delta } => write!(
                f,
                "evaluation did not converge within {sweeps} sweeps (last max delta {max_delta})"
            ),
        }
    }
}

impl std::error::Error for EvalError {}
