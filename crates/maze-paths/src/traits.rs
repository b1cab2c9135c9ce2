use maze_core::State;

use crate::Cost;

/// A weighted transition to a successor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: State,
    pub cost: Cost,
}

impl Edge {
    #[inline]
    pub const fn new(to: State, cost: Cost) -> Self {
        Self { to, cost }
    }
}

/// Implicit graph over (position, facing) states with positive edge costs.
pub trait StateGraph {
    /// Append the successors of `state` into `buf`. The caller clears `buf`
    /// before calling. Every edge cost must be > 0.
    fn neighbors(&self, state: State, buf: &mut Vec<Edge>);
}
