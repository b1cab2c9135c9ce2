//! The reindeer-maze state graph: advance one tile, or turn 90° in place.

use maze_core::{Grid, Point, State};

use crate::error::PathError;
use crate::solver::{self, Solution};
use crate::traits::{Edge, StateGraph};
use crate::Cost;

/// Largest accepted step or turn weight.
///
/// A settled route never repeats a state, so its cost stays below
/// `states * MAX_MOVE_COST`, which fits in [`Cost`] for any maze with fewer
/// than 2^32 states.
pub const MAX_MOVE_COST: Cost = u32::MAX as Cost;

/// Weights for the two kinds of move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoveCosts {
    /// Cost of one step forward.
    pub step: Cost,
    /// Cost of one 90° turn.
    pub turn: Cost,
}

impl Default for MoveCosts {
    fn default() -> Self {
        Self {
            step: 1,
            turn: 1000,
        }
    }
}

impl MoveCosts {
    /// Create validated move costs. Both weights must lie in
    /// `1..=MAX_MOVE_COST`.
    pub fn new(step: Cost, turn: Cost) -> Result<Self, PathError> {
        let costs = Self { step, turn };
        costs.validate()?;
        Ok(costs)
    }

    /// Check that both weights lie in `1..=MAX_MOVE_COST`.
    pub fn validate(&self) -> Result<(), PathError> {
        let ok = |w: Cost| (1..=MAX_MOVE_COST).contains(&w);
        if !ok(self.step) || !ok(self.turn) {
            return Err(PathError::InvalidCosts {
                step: self.step,
                turn: self.turn,
            });
        }
        Ok(())
    }
}

/// A [`Grid`] viewed as a [`StateGraph`].
///
/// Each state has at most three successors: one step forward (if the target
/// tile is open) and a left and right turn in place. There is no 180° move.
#[derive(Debug, Clone, Copy)]
pub struct MazeGraph<'a> {
    grid: &'a Grid,
    costs: MoveCosts,
}

impl<'a> MazeGraph<'a> {
    /// Wrap `grid` with the given costs, rejecting weights outside
    /// `1..=MAX_MOVE_COST`.
    pub fn new(grid: &'a Grid, costs: MoveCosts) -> Result<Self, PathError> {
        costs.validate()?;
        Ok(Self { grid, costs })
    }

    /// Wrap `grid` with [`MoveCosts::default`].
    pub fn with_default_costs(grid: &'a Grid) -> Self {
        Self {
            grid,
            costs: MoveCosts::default(),
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn costs(&self) -> MoveCosts {
        self.costs
    }

    /// Search from the grid's start state to its end position.
    pub fn solve(&self) -> Result<Solution, PathError> {
        self.solve_from(self.grid.start(), self.grid.end())
    }

    /// Search between arbitrary endpoints on the same grid.
    pub fn solve_from(&self, start: State, goal: Point) -> Result<Solution, PathError> {
        solver::solve(self, start, goal)
    }
}

impl StateGraph for MazeGraph<'_> {
    fn neighbors(&self, state: State, buf: &mut Vec<Edge>) {
        let ahead = state.advance();
        if self.grid.is_open(ahead.pos) {
            buf.push(Edge::new(ahead, self.costs.step));
        }
        buf.push(Edge::new(state.turn_left(), self.costs.turn));
        buf.push(Edge::new(state.turn_right(), self.costs.turn));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Direction;

    const CORRIDOR: &str = "\
#####
#S.E#
#####";

    #[test]
    fn forward_and_turns() {
        let grid: Grid = CORRIDOR.parse().unwrap();
        let graph = MazeGraph::with_default_costs(&grid);
        let mut buf = Vec::new();
        graph.neighbors(grid.start(), &mut buf);
        assert_eq!(
            buf,
            vec![
                Edge::new(State::new(Point::new(2, 1), Direction::East), 1),
                Edge::new(State::new(Point::new(1, 1), Direction::North), 1000),
                Edge::new(State::new(Point::new(1, 1), Direction::South), 1000),
            ]
        );
    }

    #[test]
    fn wall_blocks_forward_only() {
        let grid: Grid = CORRIDOR.parse().unwrap();
        let graph = MazeGraph::with_default_costs(&grid);
        let mut buf = Vec::new();
        graph.neighbors(State::new(Point::new(1, 1), Direction::North), &mut buf);
        assert_eq!(buf.len(), 2);
        assert!(buf.iter().all(|e| e.to.pos == Point::new(1, 1)));
        assert!(buf.iter().all(|e| e.cost == 1000));
    }

    #[test]
    fn custom_costs_are_used() {
        let grid: Grid = CORRIDOR.parse().unwrap();
        let graph = MazeGraph::new(&grid, MoveCosts::new(3, 7).unwrap()).unwrap();
        let mut buf = Vec::new();
        graph.neighbors(grid.start(), &mut buf);
        assert_eq!(buf[0].cost, 3);
        assert_eq!(buf[1].cost, 7);
        assert_eq!(graph.costs(), MoveCosts { step: 3, turn: 7 });
    }

    #[test]
    fn zero_costs_rejected() {
        assert_eq!(
            MoveCosts::new(0, 1000),
            Err(PathError::InvalidCosts { step: 0, turn: 1000 })
        );
        let grid: Grid = CORRIDOR.parse().unwrap();
        let bad = MoveCosts { step: 1, turn: 0 };
        assert!(MazeGraph::new(&grid, bad).is_err());
    }

    #[test]
    fn oversized_costs_rejected() {
        assert_eq!(
            MoveCosts::new(1, Cost::MAX),
            Err(PathError::InvalidCosts {
                step: 1,
                turn: Cost::MAX
            })
        );
        assert!(MoveCosts::new(MAX_MOVE_COST + 1, 1).is_err());
        assert!(MoveCosts::new(MAX_MOVE_COST, MAX_MOVE_COST).is_ok());
    }

    #[test]
    fn largest_costs_solve_exactly() {
        let grid: Grid = "#E.S#".parse().unwrap();
        let costs = MoveCosts::new(MAX_MOVE_COST, MAX_MOVE_COST).unwrap();
        let sol = MazeGraph::new(&grid, costs).unwrap().solve().unwrap();
        assert_eq!(sol.cost, 4 * MAX_MOVE_COST);
        assert_eq!(sol.tile_count(), 3);
        assert_eq!(sol.stats.overflowed, 0);
    }
}
