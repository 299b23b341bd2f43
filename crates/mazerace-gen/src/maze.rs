//! Randomized depth-first maze carving with dead-end reduction.
//!
//! 1. Every tile starts as a wall.
//! 2. A recursive backtracker walks the lattice of odd coordinates from
//!    (1, 1), opening each newly visited lattice point and the wall between
//!    it and the current one. The result is a spanning tree: every open tile
//!    is connected and there are no cycles.
//! 3. A share of the dead ends then gets one extra opening into an
//!    adjacent corridor, which only ever adds edges.

use mazerace_core::{Dir, Grid, Point, Tile};
use rand::{Rng, RngExt};

use crate::config::MazeConfig;
use crate::error::GenError;

/// A generated maze with its endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
}

impl Maze {
    /// The open 4-neighbours of `p` (Up, Down, Left, Right).
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        self.grid.neighbors(p)
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.grid.width()
    }
}

/// Maze generator owning its random source.
///
/// Each call to [`generate`](Self::generate) builds a brand new [`Maze`];
/// mazes returned earlier are never touched again.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    config: MazeConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator for `config` drawing from `rng`.
    pub fn new(config: MazeConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// The requested (not normalized) configuration.
    pub fn config(&self) -> MazeConfig {
        self.config
    }

    /// Replace the configuration used by later generations.
    pub fn set_config(&mut self, config: MazeConfig) {
        self.config = config;
    }

    /// Generate a fresh maze.
    pub fn generate(&mut self) -> Result<Maze, GenError> {
        build(self.config, &mut self.rng)
    }
}

/// Generate a `width × height` maze with the default dead-end share.
///
/// Sides are normalized as in [`MazeConfig::normalized`].
pub fn generate<R: Rng>(width: i32, height: i32, rng: &mut R) -> Result<Maze, GenError> {
    build(MazeConfig::with_size(width, height), rng)
}

fn build<R: Rng>(config: MazeConfig, rng: &mut R) -> Result<Maze, GenError> {
    let config = config.normalized()?;
    let mut grid = Grid::new(config.width, config.height, Tile::Wall);

    carve(&mut grid, rng);
    let (dead_ends, opened) = reduce_dead_ends(&mut grid, config.dead_end_percent);

    let start = Point::new(1, 1);
    let goal = Point::new(config.height - 2, config.width - 2);
    grid.set(goal, Tile::Open);

    log::debug!(
        "generated {}x{} maze: {} open tiles, {} dead ends, {} opened",
        config.width,
        config.height,
        grid.open_count(),
        dead_ends,
        opened
    );

    Ok(Maze { grid, start, goal })
}

/// Recursive backtracker over the odd-coordinate lattice, step 2.
fn carve<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let interior = grid.bounds().interior();
    let origin = Point::new(1, 1);
    grid.set(origin, Tile::Open);

    let mut stack = vec![origin];
    let mut candidates = Vec::with_capacity(4);
    while let Some(&current) = stack.last() {
        candidates.clear();
        for dir in Dir::ALL {
            let next = current.step(dir).step(dir);
            // Unvisited lattice points are exactly the ones still walled.
            if interior.contains(next) && grid.at(next) == Some(Tile::Wall) {
                candidates.push(next);
            }
        }

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let next = candidates[rng.random_range(0..candidates.len())];
        let between = Point::new((current.row + next.row) / 2, (current.col + next.col) / 2);
        grid.set(next, Tile::Open);
        grid.set(between, Tile::Open);
        stack.push(next);
    }
}

/// Open a path out of the first `percent`% of dead ends, in row-major
/// discovery order. Returns (dead ends found, openings made).
fn reduce_dead_ends(grid: &mut Grid, percent: u32) -> (usize, usize) {
    let interior = grid.bounds().interior();
    let dead_ends: Vec<Point> = interior
        .iter()
        .filter(|&p| grid.is_open(p) && grid.neighbors(p).len() == 1)
        .collect();

    let take = dead_ends.len() * percent as usize / 100;
    let opened = dead_ends[..take]
        .iter()
        .filter(|&&p| connect_dead_end(grid, p))
        .count();
    (dead_ends.len(), opened)
}

/// Open the first interior wall next to `p` that has an open tile behind
/// it, trying Up, Down, Left, Right.
fn connect_dead_end(grid: &mut Grid, p: Point) -> bool {
    let interior = grid.bounds().interior();
    for dir in Dir::ALL {
        let wall = p.step(dir);
        let beyond = wall.step(dir);
        if interior.contains(wall) && grid.at(wall) == Some(Tile::Wall) && grid.is_open(beyond) {
            grid.set(wall, Tile::Open);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn maze(seed: u64, config: MazeConfig) -> Maze {
        MazeGen::new(config, StdRng::seed_from_u64(seed))
            .generate()
            .unwrap()
    }

    fn dead_end_count(grid: &Grid) -> usize {
        grid.bounds()
            .interior()
            .iter()
            .filter(|&p| grid.is_open(p) && grid.neighbors(p).len() == 1)
            .count()
    }

    #[test]
    fn shape_invariants_hold() {
        for seed in 0..100 {
            let m = maze(seed, MazeConfig::with_size(20 + seed as i32 % 7, 12));
            let g = &m.grid;
            assert_eq!(g.width() % 2, 1);
            assert_eq!(g.height() % 2, 1);
            assert!(g.width() >= 9 && g.height() >= 9);
            let b = g.bounds();
            for p in b.iter().filter(|&p| b.on_border(p)) {
                assert_eq!(g.at(p), Some(Tile::Wall), "seed {seed}: border {p} open");
            }
            assert_eq!(m.start, Point::new(1, 1));
            assert_eq!(m.goal, Point::new(g.height() - 2, g.width() - 2));
            assert!(g.is_open(m.start));
            assert!(g.is_open(m.goal));
        }
    }

    #[test]
    fn open_tiles_form_one_region() {
        for seed in 0..200 {
            let size = 9 + (seed as i32 % 13) * 2;
            let m = maze(seed, MazeConfig::with_size(size, 31 - size / 2));
            let region = mazerace_paths::reachable(&m.grid, m.start);
            assert_eq!(region.len(), m.grid.open_count(), "seed {seed}: isolated tiles");
        }
    }

    #[test]
    fn every_lattice_point_is_carved() {
        let m = maze(7, MazeConfig::with_size(25, 15));
        for p in m.grid.bounds().interior().iter() {
            if p.row % 2 == 1 && p.col % 2 == 1 {
                assert!(m.grid.is_open(p), "{p} not carved");
            }
        }
    }

    #[test]
    fn pure_backtracker_is_a_spanning_tree() {
        let config = MazeConfig {
            dead_end_percent: 0,
            ..MazeConfig::with_size(21, 15)
        };
        let m = maze(3, config);
        let g = &m.grid;
        let lattice = ((g.width() / 2) * (g.height() / 2)) as usize;
        // Lattice points plus one passage per tree edge.
        assert_eq!(g.open_count(), 2 * lattice - 1);
    }

    #[test]
    fn dead_end_reduction_only_adds_openings() {
        for seed in 0..20 {
            let base = MazeConfig {
                dead_end_percent: 0,
                ..MazeConfig::with_size(31, 21)
            };
            let tree = maze(seed, base);
            let reduced = maze(
                seed,
                MazeConfig {
                    dead_end_percent: 50,
                    ..base
                },
            );
            for (p, t) in tree.grid.iter() {
                if t == Tile::Open {
                    assert!(reduced.grid.is_open(p));
                }
            }
            assert!(reduced.grid.open_count() >= tree.grid.open_count());
            assert!(dead_end_count(&reduced.grid) <= dead_end_count(&tree.grid));
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = maze(42, MazeConfig::default());
        let b = maze(42, MazeConfig::default());
        assert_eq!(a, b);
        let c = maze(43, MazeConfig::default());
        assert_ne!(a.grid, c.grid);
    }

    #[test]
    fn regenerating_leaves_old_maze_untouched() {
        let mut mg = MazeGen::new(MazeConfig::default(), StdRng::seed_from_u64(1));
        let first = mg.generate().unwrap();
        let snapshot = first.clone();
        let second = mg.generate().unwrap();
        assert_eq!(first, snapshot);
        assert_ne!(first.grid, second.grid);
    }

    #[test]
    fn connect_dead_end_tries_up_first() {
        let mut g: Grid = "\
1111111
1000001
1111101
1000001
1111111"
            .parse()
            .unwrap();
        // (3, 1) is a dead end; Up leads through (2, 1) to open (1, 1).
        assert!(connect_dead_end(&mut g, Point::new(3, 1)));
        assert!(g.is_open(Point::new(2, 1)));
        // A dead end with nothing open two steps away stays as it is.
        let mut g: Grid = "11111\n10001\n11111".parse().unwrap();
        assert!(!connect_dead_end(&mut g, Point::new(1, 1)));
    }

    #[test]
    fn free_function_normalizes() {
        let mut rng = StdRng::seed_from_u64(0);
        let m = generate(5, 6, &mut rng).unwrap();
        assert_eq!((m.width(), m.height()), (9, 9));
        assert!(generate(1, 9, &mut rng).is_err());
        assert_eq!(m.neighbors(Point::new(-5, -5)), Vec::new());
    }
}
