use std::cmp::Ordering;
use std::collections::BinaryHeap;

use mazerace_core::{Point, Range};

use crate::traits::Pather;

/// Sentinel cost meaning "goal not reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// Outcome of a single search.
///
/// `explored` lists the points in the order the search finalized them. It
/// has no duplicates and, when a path exists, ends with the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Start to goal inclusive, or `None` if the goal is unreachable.
    pub path: Option<Vec<Point>>,
    /// Number of steps along `path`, or [`UNREACHABLE`].
    pub cost: i32,
    /// Finalization order.
    pub explored: Vec<Point>,
}

impl SearchResult {
    pub(crate) fn unreachable(explored: Vec<Point>) -> Self {
        Self {
            path: None,
            cost: UNREACHABLE,
            explored,
        }
    }

    /// Whether a path to the goal was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// The path cost, if the goal was reached.
    #[inline]
    pub fn cost(&self) -> Option<i32> {
        (self.cost != UNREACHABLE).then_some(self.cost)
    }

    /// The path as a slice, empty when none was found.
    #[inline]
    pub fn path(&self) -> &[Point] {
        self.path.as_deref().unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Internal node table
// ---------------------------------------------------------------------------

const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
struct Node {
    g: i32,
    parent: usize,
    closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
            closed: false,
        }
    }
}

/// Queue entry ordered by `(f, g, pos)` ascending.
///
/// `BinaryHeap` is a max-heap, so the comparison is reversed. Equal `f`
/// prefers lower `g`, then the row-major smaller position.
#[derive(Clone, Copy, Eq, PartialEq)]
struct QueueEntry {
    f: i32,
    g: i32,
    pos: Point,
    idx: usize,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.f, other.g, other.pos).cmp(&(self.f, self.g, self.pos))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search with lazy deletion, shared by Dijkstra and A*.
///
/// `estimate` is the heuristic; a constant zero gives uniform-cost search.
/// All state is local to the call.
pub(crate) fn best_first<P, H>(pather: &P, start: Point, goal: Point, estimate: H) -> SearchResult
where
    P: Pather + ?Sized,
    H: Fn(Point) -> i32,
{
    let rng: Range = pather.bounds();
    let Some(start_idx) = rng.index(start) else {
        return SearchResult::unreachable(Vec::new());
    };
    let goal_idx = rng.index(goal);

    let mut nodes = vec![Node::default(); rng.len()];
    let mut explored = Vec::new();
    let mut open = BinaryHeap::new();
    let mut nbuf = Vec::with_capacity(4);

    nodes[start_idx].g = 0;
    open.push(QueueEntry {
        f: estimate(start),
        g: 0,
        pos: start,
        idx: start_idx,
    });

    let mut reached = false;
    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Stale duplicate of an already finalized point.
        if nodes[ci].closed {
            continue;
        }
        nodes[ci].closed = true;
        explored.push(current.pos);

        if Some(ci) == goal_idx {
            reached = true;
            break;
        }

        let current_g = nodes[ci].g;
        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);
        for &np in &nbuf {
            let Some(ni) = rng.index(np) else {
                continue;
            };
            let tentative = current_g + 1;
            let n = &mut nodes[ni];
            if tentative >= n.g {
                continue;
            }
            n.g = tentative;
            n.parent = ci;
            open.push(QueueEntry {
                f: tentative + estimate(np),
                g: tentative,
                pos: np,
                idx: ni,
            });
        }
    }

    let Some(gi) = goal_idx.filter(|_| reached) else {
        return SearchResult::unreachable(explored);
    };

    let mut path = Vec::new();
    let mut ci = gi;
    loop {
        path.push(rng.point(ci));
        if ci == start_idx {
            break;
        }
        ci = nodes[ci].parent;
    }
    path.reverse();

    SearchResult {
        path: Some(path),
        cost: nodes[gi].g,
        explored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(f: i32, g: i32, row: i32, col: i32) -> QueueEntry {
        QueueEntry {
            f,
            g,
            pos: Point::new(row, col),
            idx: 0,
        }
    }

    #[test]
    fn heap_pops_lowest_f_then_g_then_position() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(5, 3, 0, 0));
        heap.push(entry(4, 4, 2, 2));
        heap.push(entry(4, 2, 3, 3));
        heap.push(entry(4, 2, 1, 9));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.f, e.g, e.pos))
            .collect();
        assert_eq!(
            order,
            vec![
                (4, 2, Point::new(1, 9)),
                (4, 2, Point::new(3, 3)),
                (4, 4, Point::new(2, 2)),
                (5, 3, Point::new(0, 0)),
            ]
        );
    }

    #[test]
    fn cost_accessor() {
        let r = SearchResult::unreachable(vec![Point::new(1, 1)]);
        assert!(!r.found());
        assert_eq!(r.cost(), None);
        assert!(r.path().is_empty());
    }
}
