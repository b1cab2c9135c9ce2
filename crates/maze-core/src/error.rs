use thiserror::Error;

use crate::geom::Point;

/// Errors that can occur when parsing a maze from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input had no non-blank rows.
    #[error("maze: input is empty")]
    Empty,
    /// No start marker was found.
    #[error("maze: no start marker")]
    MissingStart,
    /// No end marker was found.
    #[error("maze: no end marker")]
    MissingEnd,
    /// More than one start marker was found.
    #[error("maze: second start marker at {second} (first at {first})")]
    DuplicateStart { first: Point, second: Point },
    /// More than one end marker was found.
    #[error("maze: second end marker at {second} (first at {first})")]
    DuplicateEnd { first: Point, second: Point },
    /// The glyph set maps one character to two kinds of tile.
    #[error("maze: glyph \u{201c}{ch}\u{201d} is assigned to more than one tile kind")]
    GlyphConflict { ch: char },
    /// A character outside the configured glyph set was found.
    #[error("maze contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")]
    InvalidGlyph { ch: char, pos: Point },
}
