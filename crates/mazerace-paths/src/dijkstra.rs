use mazerace_core::Point;

use crate::search::{SearchResult, best_first};
use crate::traits::Pather;

/// Uniform-cost shortest path from `start` to `goal`.
///
/// Points are finalized in order of distance from `start`; the search stops
/// as soon as `goal` is finalized, so `explored` covers only the points
/// visited up to and including the goal. If the goal cannot be reached the
/// result has no path, an [`UNREACHABLE`](crate::UNREACHABLE) cost, and
/// `explored` lists every point reachable from `start`.
///
/// Equal distances are broken by row-major position.
pub fn dijkstra<P: Pather + ?Sized>(pather: &P, start: Point, goal: Point) -> SearchResult {
    let result = best_first(pather, start, goal, |_| 0);
    log::debug!(
        "dijkstra {start} -> {goal}: cost {:?}, explored {}",
        result.cost(),
        result.explored.len()
    );
    result
}
