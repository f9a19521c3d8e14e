mod mdp;

pub use mdp::error::{EvalError, TableError};
pub use mdp::eval::{
    EvalConfig, EvalConfigError, EvalRun, SweepMetrics, policy_evaluation,
    policy_evaluation_with_hook,
};
pub use mdp::ids::{ActionId, StateId};
pub use mdp::policy::Policy;
pub use mdp::table::{DynamicsTable, TableBuilder, Transition};
