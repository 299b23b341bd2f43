//! mazerace: Dijkstra and A* racing through random mazes in the terminal.

pub mod app;
pub mod config;
pub mod driver;
pub mod messages;
pub mod model;
pub mod print;
pub mod render;
pub mod screen;
pub mod theme;

pub use app::{App, Driver, Effect, Model};
pub use config::{ConfigError, Settings};
pub use driver::CrosstermDriver;
pub use model::Session;
