use crate::LakeError;

/// One of the four intended directions of motion on the lake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left = 0,
    Down = 1,
    Right = 2,
    Up = 3,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; 4] = [Action::Left, Action::Down, Action::Right, Action::Up];

    /// Return the underlying action index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The three directions the lake may actually realize for this intent:
    /// the intended direction and its two perpendiculars, each equally likely.
    pub fn slip_set(self) -> [Action; 3] {
        match self {
            Action::Left => [Action::Left, Action::Down, Action::Up],
            Action::Down => [Action::Down, Action::Left, Action::Right],
            Action::Right => [Action::Right, Action::Down, Action::Up],
            Action::Up => [Action::Up, Action::Left, Action::Right],
        }
    }

    /// Move one step in this direction, clamped to the grid.
    /// Motion into a wall stays in place.
    pub fn apply(self, row: usize, col: usize, grid_size: usize) -> (usize, usize) {
        match self {
            Action::Left => (row, col.saturating_sub(1)),
            Action::Down => ((row + 1).min(grid_size - 1), col),
            Action::Right => (row, (col + 1).min(grid_size - 1)),
            Action::Up => (row.saturating_sub(1), col),
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = LakeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Left),
            1 => Ok(Action::Down),
            2 => Ok(Action::Right),
            3 => Ok(Action::Up),
            _ => Err(LakeError::InvalidAction { action: value }),
        }
    }
}
