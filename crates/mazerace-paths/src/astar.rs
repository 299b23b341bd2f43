use mazerace_core::Point;

use crate::distance::manhattan;
use crate::search::{SearchResult, best_first};
use crate::traits::Pather;

/// Shortest path from `start` to `goal` using A* with the Manhattan
/// heuristic.
///
/// Queue entries are ordered by `f = g + h`, then `g`, then row-major
/// position. The returned cost is `g(goal)`, the true path length. Early
/// exit, lazy skipping of closed points and the unreachable case behave as
/// in [`dijkstra`](crate::dijkstra).
pub fn astar<P: Pather + ?Sized>(pather: &P, start: Point, goal: Point) -> SearchResult {
    let result = best_first(pather, start, goal, |p| manhattan(p, goal));
    log::debug!(
        "astar {start} -> {goal}: cost {:?}, explored {}",
        result.cost(),
        result.explored.len()
    );
    result
}
