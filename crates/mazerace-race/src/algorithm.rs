use std::fmt;
use std::time::{Duration, Instant};

use mazerace_core::{Grid, Point};
use mazerace_gen::Maze;
use mazerace_paths::{SearchResult, astar, dijkstra};

/// One of the two racing search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Both algorithms, in display order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }

    /// Position in [`ALL`](Self::ALL).
    pub const fn index(self) -> usize {
        match self {
            Algorithm::Dijkstra => 0,
            Algorithm::AStar => 1,
        }
    }

    /// Run this algorithm on `grid`.
    pub fn search(self, grid: &Grid, start: Point, goal: Point) -> SearchResult {
        match self {
            Algorithm::Dijkstra => dijkstra(grid, start, goal),
            Algorithm::AStar => astar(grid, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finished search together with how long it took to compute.
#[derive(Debug, Clone)]
pub struct Run {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    pub elapsed: Duration,
}

impl Run {
    /// Search `maze` from its start to its goal, timing the call.
    pub fn execute(algorithm: Algorithm, maze: &Maze) -> Self {
        let t0 = Instant::now();
        let result = algorithm.search(&maze.grid, maze.start, maze.goal);
        let elapsed = t0.elapsed();
        Self {
            algorithm,
            result,
            elapsed,
        }
    }

    /// The path, empty if none was found.
    pub fn path(&self) -> &[Point] {
        self.result.path()
    }

    /// The exploration order.
    pub fn explored(&self) -> &[Point] {
        &self.result.explored
    }
}
