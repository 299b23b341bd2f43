use mazerace_gen::{GenError, Maze, MazeGen};
use rand::Rng;

use crate::algorithm::{Algorithm, Run};

/// One maze searched by both algorithms.
#[derive(Debug, Clone)]
pub struct Race {
    pub maze: Maze,
    runs: [Run; 2],
}

impl Race {
    /// Run both searches on `maze`, Dijkstra first.
    pub fn new(maze: Maze) -> Self {
        let runs = Algorithm::ALL.map(|a| Run::execute(a, &maze));
        for run in &runs {
            log::debug!(
                "{}: cost {:?}, explored {} in {:?}",
                run.algorithm,
                run.result.cost(),
                run.explored().len(),
                run.elapsed
            );
            if !run.result.found() {
                log::warn!(
                    "{} found no path from {} to {}",
                    run.algorithm,
                    maze.start,
                    maze.goal
                );
            }
        }
        Self { maze, runs }
    }

    /// Generate a fresh maze with `mg` and race on it.
    pub fn generate<R: Rng>(mg: &mut MazeGen<R>) -> Result<Self, GenError> {
        Ok(Self::new(mg.generate()?))
    }

    pub fn run(&self, algorithm: Algorithm) -> &Run {
        &self.runs[algorithm.index()]
    }

    pub fn runs(&self) -> &[Run; 2] {
        &self.runs
    }

    /// Whether both algorithms reached the goal.
    pub fn solved(&self) -> bool {
        self.runs.iter().all(|r| r.result.found())
    }
}
