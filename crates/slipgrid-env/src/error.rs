use slipgrid_core::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for lake layout loading, validation, and simulation.
pub enum LakeError {
    #[error("failed to read layout file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse layout YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid action {action}: expected an index in [0, 4)")]
    InvalidAction { action: usize },

    #[error("invalid state {state}: expected an id in [0, {num_states})")]
    InvalidState { state: usize, num_states: usize },

    #[error("grid size {grid_size} is too small for a lake; need at least 2x2")]
    GridTooSmall { grid_size: usize },

    #[error("cell {cell} is outside the {num_states}-state grid")]
    CellOutOfRange { cell: usize, num_states: usize },

    #[error("goal cell {goal} is also listed as a hole")]
    GoalIsHole { goal: usize },

    #[error("start cell {start} must not be a hole or the goal")]
    StartIsTerminal { start: usize },

    #[error("failed to assemble dynamics table: {0}")]
    Table(#[from] TableError),
}
