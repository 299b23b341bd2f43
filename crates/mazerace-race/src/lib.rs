//! **mazerace-race**: Dijkstra and A* side by side.
//!
//! A [`Race`] runs both searches on one maze. A [`Playback`] turns the
//! results into an animation timeline: first the exploration orders are
//! revealed cell by cell, then a robot walks each path. [`ProgressStats`]
//! gives the numbers a stats card shows at any point of that timeline.

mod algorithm;
mod mode;
pub mod playback;
mod race;
mod stats;

pub use algorithm::{Algorithm, Run};
pub use mode::{ParseModeError, ViewMode};
pub use playback::{Phase, Playback};
pub use race::Race;
pub use stats::ProgressStats;
