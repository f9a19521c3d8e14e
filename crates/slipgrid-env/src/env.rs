use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slipgrid_core::DynamicsTable;

use crate::{Action, LakeError, LakeLayout, build_dynamics};

/// Extra bookkeeping attached to each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Number of steps taken since the last reset, this one included.
    pub step_count: usize,
    /// The direction the lake actually realized after slip sampling.
    pub actual_action: Action,
}

/// Result of one environment step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub state: usize,
    pub reward: f64,
    pub done: bool,
    /// Always false; the lake has no truncation condition.
    pub truncated: bool,
    pub info: StepInfo,
}

/// Stateful slippery-lake simulator with a seeded RNG.
///
/// The dynamics table is built once at construction and served read-only;
/// stepping re-samples the same three-way slip law independently, so long-run
/// simulated frequencies match the table.
#[derive(Debug, Clone)]
pub struct LakeEnv {
    layout: LakeLayout,
    dynamics: DynamicsTable,
    state: usize,
    step_count: usize,
    rng: ChaCha8Rng,
}

impl LakeEnv {
    /// Create an environment with a deterministic RNG seed.
    pub fn new(layout: LakeLayout, seed: u64) -> Result<Self, LakeError> {
        let dynamics = build_dynamics(&layout)?;
        let state = layout.start;
        Ok(Self {
            layout,
            dynamics,
            state,
            step_count: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Borrow the precomputed transition model.
    pub fn dynamics(&self) -> &DynamicsTable {
        &self.dynamics
    }

    /// Borrow the grid topology.
    pub fn layout(&self) -> &LakeLayout {
        &self.layout
    }

    /// Return the current state.
    pub fn state(&self) -> usize {
        self.state
    }

    /// Return the number of steps taken since the last reset.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Start a new episode.
    ///
    /// A seed reseeds the slip RNG for reproducible episodes; a start
    /// override must be a legal state id. Returns the initial state.
    pub fn reset(&mut self, seed: Option<u64>, start: Option<usize>) -> Result<usize, LakeError> {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }

        let start = match start {
            Some(state) => {
                if state >= self.layout.num_states() {
                    return Err(LakeError::InvalidState {
                        state,
                        num_states: self.layout.num_states(),
                    });
                }
                state
            }
            None => self.layout.start,
        };

        self.state = start;
        self.step_count = 0;
        Ok(self.state)
    }

    /// Take one step with an intended action index.
    ///
    /// Fails with `InvalidAction` before touching any state if the index is
    /// not one of the four directions. Otherwise samples the actual direction
    /// uniformly from the slip set, applies bounded motion, and reports the
    /// reward and terminal flags for the landing cell.
    pub fn step(&mut self, action: usize) -> Result<Step, LakeError> {
        let intended = Action::try_from(action)?;

        let slip_set = intended.slip_set();
        let actual = slip_set[self.rng.gen_range(0..slip_set.len())];

        let (row, col) = self.layout.row_col(self.state);
        let (row, col) = actual.apply(row, col, self.layout.grid_size);
        let next = self.layout.state_at(row, col);

        self.state = next;
        self.step_count += 1;

        Ok(Step {
            state: next,
            reward: if next == self.layout.goal { 1.0 } else { 0.0 },
            done: self.layout.is_terminal(next),
            truncated: false,
            info: StepInfo {
                step_count: self.step_count,
                actual_action: actual,
            },
        })
    }

    /// Render the board as text: agent `A`, holes `H`, goal `G`,
    /// obstacles `O`, ice `.`.
    pub fn render_to_string(&self) -> String {
        let mut out = format!("steps: {}\n", self.step_count);
        for row in 0..self.layout.grid_size {
            for col in 0..self.layout.grid_size {
                let state = self.layout.state_at(row, col);
                let glyph = if state == self.state {
                    'A'
                } else if self.layout.is_hole(state) {
                    'H'
                } else if state == self.layout.goal {
                    'G'
                } else if self.layout.obstacles.contains(&state) {
                    'O'
                } else {
                    '.'
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }

    /// Release the environment. All resources are owned and dropped here;
    /// provided so episode drivers can end an environment's scope explicitly.
    pub fn close(self) {}
}
