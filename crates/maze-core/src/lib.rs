//! **maze-core** — core types for weighted maze searches.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`],
//! [`Direction`], [`State`]), the immutable [`Grid`] maze layout, and the
//! text format that builds one.

pub mod error;
pub mod geom;
pub mod grid;
pub mod parse;

pub use error::GridError;
pub use geom::{Direction, Point, Range, RangeIter, State};
pub use grid::{Grid, MARK};
pub use parse::{Glyphs, parse, parse_with};
