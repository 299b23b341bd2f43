use mazerace_core::{Grid, Point, Range};

/// Minimal pathfinding interface: a bounded 4-connected graph with unit
/// edge costs.
pub trait Pather {
    /// The rectangle every reachable point lies in.
    fn bounds(&self) -> Range;

    /// Append the neighbors of `p` into `buf`. The caller clears `buf` before
    /// calling. The order of appended neighbors is the expansion order.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl Pather for Grid {
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Grid::neighbors(self, p));
    }
}
