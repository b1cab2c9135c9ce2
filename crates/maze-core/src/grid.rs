//! The [`Grid`] type: an immutable maze layout.

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Point, Range, State};
use crate::parse::{self, Glyphs};

/// Glyph used by [`Grid::render`] for marked tiles.
pub const MARK: char = 'O';

/// An immutable maze: a sparse wall set within a bounding rectangle, plus the
/// start state and the goal position.
///
/// Everything outside [`bounds`](Grid::bounds) counts as wall. The goal is a
/// position only; any facing on it is a goal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    walls: HashSet<Point>,
    bounds: Range,
    start: State,
    end: Point,
    /// Whether the start was written as an arrow rather than the start glyph.
    arrow_start: bool,
}

impl Grid {
    /// Create a grid from its parts. Most callers want [`parse`](crate::parse()).
    pub fn new(bounds: Range, walls: HashSet<Point>, start: State, end: Point) -> Self {
        Self {
            walls,
            bounds,
            start,
            end,
            arrow_start: false,
        }
    }

    pub(crate) fn with_arrow_start(mut self, arrow_start: bool) -> Self {
        self.arrow_start = arrow_start;
        self
    }

    /// The bounding range of the maze.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Start position and initial facing.
    #[inline]
    pub fn start(&self) -> State {
        self.start
    }

    /// Goal position.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` is a wall or lies outside the bounds.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        !self.bounds.contains(p) || self.walls.contains(&p)
    }

    /// Whether `p` can be stood on.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        !self.is_wall(p)
    }

    /// Number of wall cells inside the bounds.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Draw the maze as text, marking every position for which `mark`
    /// returns `true` with [`MARK`]. Start and end keep their own glyphs; a
    /// start parsed from an arrow is drawn as the arrow of its facing.
    pub fn render(&self, glyphs: &Glyphs, mark: impl Fn(Point) -> bool) -> String {
        let mut out = String::with_capacity(self.bounds.len() + self.height() as usize);
        for p in self.bounds.iter() {
            let ch = if p == self.start.pos && self.arrow_start {
                self.start.facing.arrow()
            } else if p == self.start.pos {
                glyphs.start
            } else if p == self.end {
                glyphs.end
            } else if self.walls.contains(&p) {
                glyphs.wall
            } else if mark(p) {
                MARK
            } else {
                glyphs.floor
            };
            out.push(ch);
            if p.x == self.bounds.max.x - 1 && p.y < self.bounds.max.y - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}
