use serde::{Deserialize, Serialize};
use slipgrid_core::StateId;

use crate::LakeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Serializable grid topology of a slippery lake.
pub struct LakeLayout {
    /// Side length of the square grid; states number `grid_size * grid_size`.
    pub grid_size: usize,
    /// Cells that end the episode with no reward.
    pub holes: Vec<usize>,
    /// Cell that ends the episode with reward 1.
    pub goal: usize,
    /// Cell an episode starts in unless a reset override is given.
    pub start: usize,
    /// Impassable decoration cells; empty by default and not terminal.
    pub obstacles: Vec<usize>,
}

impl Default for LakeLayout {
    /// The canonical 4x4 board.
    fn default() -> Self {
        LakeLayout {
            grid_size: 4,
            holes: vec![5, 7, 11, 12],
            goal: 15,
            start: 0,
            obstacles: Vec::new(),
        }
    }
}

impl LakeLayout {
    /// Return the number of states on this board.
    pub fn num_states(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Split a state id into `(row, col)`.
    pub fn row_col(&self, state: usize) -> (usize, usize) {
        (state / self.grid_size, state % self.grid_size)
    }

    /// Return the state id at `(row, col)`.
    pub fn state_at(&self, row: usize, col: usize) -> usize {
        row * self.grid_size + col
    }

    /// Return whether a state is a hole.
    pub fn is_hole(&self, state: usize) -> bool {
        self.holes.contains(&state)
    }

    /// Return whether a state ends the episode.
    pub fn is_terminal(&self, state: usize) -> bool {
        self.is_hole(state) || state == self.goal
    }

    /// All terminal states (holes then goal), ready for the evaluator.
    pub fn terminal_states(&self) -> Vec<StateId> {
        self.holes
            .iter()
            .copied()
            .chain(std::iter::once(self.goal))
            .map(StateId::from)
            .collect()
    }

    /// Validate grid bounds and cell roles.
    pub fn validate(&self) -> Result<(), LakeError> {
        if self.grid_size < 2 {
            return Err(LakeError::GridTooSmall {
                grid_size: self.grid_size,
            });
        }

        let num_states = self.num_states();
        for &cell in self
            .holes
            .iter()
            .chain(self.obstacles.iter())
            .chain([self.goal, self.start].iter())
        {
            if cell >= num_states {
                return Err(LakeError::CellOutOfRange { cell, num_states });
            }
        }

        if self.holes.contains(&self.goal) {
            return Err(LakeError::GoalIsHole { goal: self.goal });
        }

        if self.is_terminal(self.start) {
            return Err(LakeError::StartIsTerminal { start: self.start });
        }

        Ok(())
    }
}
