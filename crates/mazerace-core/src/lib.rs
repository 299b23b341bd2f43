//! **mazerace-core**: core types for orthogonal grid mazes.
//!
//! Geometry primitives ([`Point`], [`Dir`], [`Range`]) and the [`Grid`] of
//! wall/open [`Tile`]s shared by the generator, the searches and the
//! renderer.

pub mod geom;
pub mod grid;

pub use geom::{Dir, Point, Range};
pub use grid::{Grid, GridParseError, Tile};
