//! Building a [`Grid`] from ASCII art.
//!
//! Each character maps to one cell. Rows are separated by `'\n'` (a trailing
//! `'\r'` is ignored) and may have different widths; a short row is padded
//! with walls up to the widest row. Blank rows before the first and after the
//! last maze row are dropped; a row is blank if it holds only whitespace that
//! is not itself a glyph.

use std::collections::HashSet;

use crate::error::GridError;
use crate::geom::{Direction, Point, Range, State};
use crate::grid::Grid;

/// The character codes used by the text format.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Glyphs {
    pub wall: char,
    pub floor: char,
    pub start: char,
    pub end: char,
    /// Facing given to a start marked with [`start`](Self::start).
    pub facing: Direction,
    /// Also accept `^ > v <` as start markers that carry their own facing.
    pub arrow_starts: bool,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            wall: '#',
            floor: '.',
            start: 'S',
            end: 'E',
            facing: Direction::East,
            arrow_starts: true,
        }
    }
}

enum Tile {
    Wall,
    Floor,
    Start(Direction),
    End,
}

impl Glyphs {
    /// Check that no character stands for two kinds of tile, counting the
    /// arrow start markers when they are enabled.
    pub fn validate(&self) -> Result<(), GridError> {
        let mut seen = HashSet::new();
        let arrows = Direction::ALL
            .into_iter()
            .filter(|_| self.arrow_starts)
            .map(Direction::arrow);
        for ch in [self.wall, self.floor, self.start, self.end]
            .into_iter()
            .chain(arrows)
        {
            if !seen.insert(ch) {
                return Err(GridError::GlyphConflict { ch });
            }
        }
        Ok(())
    }

    fn is_blank(&self, line: &str) -> bool {
        line.chars()
            .all(|ch| ch.is_whitespace() && self.classify(ch).is_none())
    }

    fn classify(&self, ch: char) -> Option<Tile> {
        if ch == self.wall {
            Some(Tile::Wall)
        } else if ch == self.floor {
            Some(Tile::Floor)
        } else if ch == self.start {
            Some(Tile::Start(self.facing))
        } else if ch == self.end {
            Some(Tile::End)
        } else if self.arrow_starts {
            Direction::from_arrow(ch).map(Tile::Start)
        } else {
            None
        }
    }
}

/// Parse a maze using the default [`Glyphs`].
pub fn parse(s: &str) -> Result<Grid, GridError> {
    parse_with(s, &Glyphs::default())
}

/// Parse a maze using the given glyph set.
///
/// Blank rows around the maze are dropped; rows themselves are never
/// trimmed, so a whitespace floor glyph keeps its column. Exactly one start
/// and one end marker must appear.
pub fn parse_with(s: &str, glyphs: &Glyphs) -> Result<Grid, GridError> {
    glyphs.validate()?;

    let lines: Vec<&str> = s
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let Some(top) = lines.iter().position(|l| !glyphs.is_blank(l)) else {
        return Err(GridError::Empty);
    };
    let bottom = lines
        .iter()
        .rposition(|l| !glyphs.is_blank(l))
        .unwrap_or(top);

    let mut walls = HashSet::new();
    let mut start: Option<State> = None;
    let mut arrow_start = false;
    let mut end: Option<Point> = None;
    let mut widths = Vec::new();

    for (y, line) in lines[top..=bottom].iter().enumerate() {
        let mut x: i32 = 0;
        for ch in line.chars() {
            let pos = Point::new(x, y as i32);
            match glyphs.classify(ch) {
                Some(Tile::Wall) => {
                    walls.insert(pos);
                }
                Some(Tile::Floor) => {}
                Some(Tile::Start(facing)) => {
                    if let Some(first) = start {
                        return Err(GridError::DuplicateStart {
                            first: first.pos,
                            second: pos,
                        });
                    }
                    start = Some(State::new(pos, facing));
                    arrow_start = ch != glyphs.start;
                }
                Some(Tile::End) => {
                    if let Some(first) = end {
                        return Err(GridError::DuplicateEnd { first, second: pos });
                    }
                    end = Some(pos);
                }
                None => return Err(GridError::InvalidGlyph { ch, pos }),
            }
            x += 1;
        }
        widths.push(x);
    }

    let start = start.ok_or(GridError::MissingStart)?;
    let end = end.ok_or(GridError::MissingEnd)?;

    let width = widths.iter().copied().max().unwrap_or(0);
    for (y, &w) in widths.iter().enumerate() {
        for x in w..width {
            walls.insert(Point::new(x, y as i32));
        }
    }

    let bounds = Range::new(0, 0, width, widths.len() as i32);
    log::debug!(
        "parsed maze {}x{}: {} walls, start {}, end {}",
        bounds.width(),
        bounds.height(),
        walls.len(),
        start,
        end
    );
    Ok(Grid::new(bounds, walls, start, end).with_arrow_start(arrow_start))
}
