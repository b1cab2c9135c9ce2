//! Shortest paths over facing-aware mazes.
//!
//! The search runs over an implicit graph of [`State`](maze_core::State)s,
//! (position, facing) pairs, rather than over tiles:
//!
//! - [`MazeGraph`] turns a [`Grid`](maze_core::Grid) into a [`StateGraph`]
//!   where stepping forward and turning 90° carry separate [`MoveCosts`].
//! - [`solve`] runs Dijkstra over any [`StateGraph`], returning the minimum
//!   cost, one witness route, and the [`PathSet`] of every tile that lies on
//!   some minimum-cost route.
//!
//! | Item | Role |
//! |---|---|
//! | [`StateGraph`] | successor enumeration |
//! | [`MazeGraph`] | grid + costs as a [`StateGraph`] |
//! | [`solve`], [`solve_observed`] | the search |
//! | [`PathSet`] | union of optimal tiles |

mod distance;
mod error;
mod graph;
mod pathset;
mod solver;
mod traits;

/// Cumulative path cost.
pub type Cost = u64;

pub use distance::manhattan;
pub use error::PathError;
pub use graph::{MAX_MOVE_COST, MazeGraph, MoveCosts};
pub use pathset::PathSet;
pub use solver::{SearchStats, Solution, solve, solve_observed};
pub use traits::{Edge, StateGraph};
