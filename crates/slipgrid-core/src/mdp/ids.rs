/// Dense integer index identifying one state of a finite MDP.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StateId(usize);

impl StateId {
    /// Return the underlying state index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for StateId {
    /// Allow for explicit conversion from usize to StateId.
    fn from(value: usize) -> Self {
        StateId(value)
    }
}

/// Dense integer index identifying one action of a finite MDP.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ActionId(usize);

impl ActionId {
    /// Return the underlying action index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for ActionId {
    /// Allow for explicit conversion from usize to ActionId.
    fn from(value: usize) -> Self {
        ActionId(value)
    }
}
