//! Maze generation for mazerace.
//!
//! [`MazeGen`] carves a perfect maze with a randomized depth-first
//! backtracker, then opens a configurable share of dead ends so the maze
//! has a few alternative routes. The random source is always passed in, so
//! a seeded RNG reproduces a maze exactly.

mod config;
mod error;
pub mod maze;

pub use config::{MAX_SIDE, MIN_REQUEST, MIN_SIDE, MazeConfig};
pub use error::GenError;
pub use maze::{Maze, MazeGen, generate};
