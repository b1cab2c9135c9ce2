use maze_core::{Point, State};
use thiserror::Error;

use crate::Cost;
use crate::graph::MAX_MOVE_COST;

/// Errors produced by the search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The frontier emptied before any goal state was settled.
    #[error("no path from {start} to {goal} ({settled} states explored)")]
    NoPath {
        start: State,
        goal: Point,
        settled: usize,
    },
    /// A move cost was zero or above [`MAX_MOVE_COST`].
    #[error("move costs must be in 1..={max} (step {step}, turn {turn})", max = MAX_MOVE_COST)]
    InvalidCosts { step: Cost, turn: Cost },
}
