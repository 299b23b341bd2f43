use std::collections::VecDeque;

use mazerace_core::Point;

use crate::traits::Pather;

/// A position with its breadth-first distance from the nearest source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Multi-source breadth-first distance map.
///
/// Every step costs 1. Returns each reached point once, in visiting order,
/// sources first. Sources outside the pather's bounds are ignored.
pub fn bfs_map<P: Pather + ?Sized>(pather: &P, sources: &[Point]) -> Vec<PathNode> {
    let rng = pather.bounds();
    let mut dist: Vec<Option<i32>> = vec![None; rng.len()];
    let mut results = Vec::new();
    let mut queue = VecDeque::new();

    for &src in sources {
        let Some(si) = rng.index(src) else {
            continue;
        };
        if dist[si].is_some() {
            continue;
        }
        dist[si] = Some(0);
        queue.push_back(src);
        results.push(PathNode { pos: src, cost: 0 });
    }

    let mut nbuf = Vec::with_capacity(4);
    while let Some(cp) = queue.pop_front() {
        let Some(current_dist) = rng.index(cp).and_then(|i| dist[i]) else {
            continue;
        };
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in &nbuf {
            let Some(ni) = rng.index(np) else {
                continue;
            };
            if dist[ni].is_some() {
                continue;
            }
            dist[ni] = Some(current_dist + 1);
            queue.push_back(np);
            results.push(PathNode {
                pos: np,
                cost: current_dist + 1,
            });
        }
    }

    results
}

/// Every point reachable from `from`, `from` included (flood fill).
pub fn reachable<P: Pather + ?Sized>(pather: &P, from: Point) -> Vec<Point> {
    bfs_map(pather, &[from]).into_iter().map(|n| n.pos).collect()
}

/// Breadth-first distance from `from` to `to`, if connected.
pub fn bfs_distance<P: Pather + ?Sized>(pather: &P, from: Point, to: Point) -> Option<i32> {
    bfs_map(pather, &[from])
        .into_iter()
        .find(|n| n.pos == to)
        .map(|n| n.cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerace_core::Grid;

    const TWO_ROOMS: &str = "\
1111111
1001001
1001001
1111111";

    #[test]
    fn flood_fill_stays_in_component() {
        let g: Grid = TWO_ROOMS.parse().unwrap();
        let left = reachable(&g, Point::new(1, 1));
        assert_eq!(left.len(), 4);
        assert!(left.iter().all(|p| p.col < 3));
        assert_eq!(bfs_distance(&g, Point::new(1, 1), Point::new(2, 2)), Some(2));
        assert_eq!(bfs_distance(&g, Point::new(1, 1), Point::new(1, 4)), None);
    }

    #[test]
    fn multi_source_distances() {
        let g: Grid = TWO_ROOMS.parse().unwrap();
        let nodes = bfs_map(&g, &[Point::new(1, 1), Point::new(2, 5), Point::new(1, 1)]);
        assert_eq!(nodes.len(), 8);
        assert_eq!(nodes[0], PathNode { pos: Point::new(1, 1), cost: 0 });
        assert_eq!(nodes[1], PathNode { pos: Point::new(2, 5), cost: 0 });
        let far = nodes.iter().find(|n| n.pos == Point::new(1, 4)).unwrap();
        assert_eq!(far.cost, 2);
    }

    #[test]
    fn out_of_range_source_is_ignored() {
        let g: Grid = TWO_ROOMS.parse().unwrap();
        assert!(bfs_map(&g, &[Point::new(9, 9)]).is_empty());
    }
}
