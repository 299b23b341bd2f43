//! Shortest-path search on orthogonal unit-cost grids.
//!
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **A\*** with the Manhattan heuristic ([`astar`])
//! - **BFS** distance maps and flood fill ([`bfs_map`], [`reachable`])
//!
//! Both shortest-path searches return a [`SearchResult`] carrying the path,
//! its cost and the order in which points were finalized, which is what a
//! renderer replays to animate the search. Every call is self-contained:
//! no caches, no shared state.

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod search;
mod traits;

pub use astar::astar;
pub use bfs::{PathNode, bfs_distance, bfs_map, reachable};
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use search::{SearchResult, UNREACHABLE};
pub use traits::Pather;
