//! Plain-text race report for `--print`.

use std::fmt::Write;

use mazerace_core::{Point, Tile};
use mazerace_race::{Algorithm, Race, Run, ViewMode};

/// The maze with `run` drawn over it: `#` wall, `.` explored, `*` path,
/// `S` start, `G` goal.
pub fn overlay(race: &Race, run: &Run) -> String {
    let maze = &race.maze;
    let width = maze.width() as usize;
    let mut rows: Vec<Vec<char>> = maze
        .grid
        .iter()
        .map(|(_, t)| if t == Tile::Wall { '#' } else { ' ' })
        .collect::<Vec<_>>()
        .chunks(width.max(1))
        .map(<[char]>::to_vec)
        .collect();

    let mut put = |p: Point, ch: char| {
        if let Some(cell) = rows
            .get_mut(p.row as usize)
            .and_then(|r| r.get_mut(p.col as usize))
        {
            *cell = ch;
        }
    };
    for &p in run.explored() {
        put(p, '.');
    }
    for &p in run.path() {
        put(p, '*');
    }
    put(maze.start, 'S');
    put(maze.goal, 'G');

    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One summary line: cost, explored count, search time.
pub fn summary(run: &Run) -> String {
    let cost = match run.result.cost() {
        Some(c) => c.to_string(),
        None => "unreachable".to_string(),
    };
    format!(
        "{}: cost {}, explored {}, {:.3} ms",
        run.algorithm,
        cost,
        run.explored().len(),
        run.elapsed.as_secs_f64() * 1000.0
    )
}

/// Full report for every algorithm `mode` shows.
pub fn report(race: &Race, seed: u64, mode: ViewMode) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "maze {}x{}, seed {}",
        race.maze.width(),
        race.maze.height(),
        seed
    );
    for algo in Algorithm::ALL.into_iter().filter(|&a| mode.shows(a)) {
        let run = race.run(algo);
        let _ = writeln!(out, "\n{}", summary(run));
        let _ = writeln!(out, "{}", overlay(race, run));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerace_core::Grid;
    use mazerace_gen::Maze;

    fn corridor() -> Race {
        let grid: Grid = "\
1111111
1000001
1111111"
            .parse()
            .unwrap();
        Race::new(Maze {
            grid,
            start: Point::new(1, 1),
            goal: Point::new(1, 5),
        })
    }

    #[test]
    fn overlay_marks_path_and_endpoints() {
        let race = corridor();
        let text = overlay(&race, race.run(Algorithm::AStar));
        assert_eq!(text, "#######\n#S***G#\n#######");
    }

    #[test]
    fn summary_line() {
        let race = corridor();
        let line = summary(race.run(Algorithm::Dijkstra));
        assert!(line.starts_with("Dijkstra: cost 4, explored 5, "));
        assert!(line.ends_with(" ms"));
    }

    #[test]
    fn report_follows_mode() {
        let race = corridor();
        let both = report(&race, 1, ViewMode::Compare);
        assert!(both.starts_with("maze 7x3, seed 1\n"));
        assert!(both.contains("Dijkstra: cost 4"));
        assert!(both.contains("A*: cost 4"));
        let one = report(&race, 1, ViewMode::AStar);
        assert!(!one.contains("Dijkstra"));
    }

    #[test]
    fn unreachable_goal() {
        let grid: Grid = "11111\n10101\n11111".parse().unwrap();
        let race = Race::new(Maze {
            grid,
            start: Point::new(1, 1),
            goal: Point::new(1, 3),
        });
        let run = race.run(Algorithm::Dijkstra);
        assert!(summary(run).contains("cost unreachable, explored 1"));
        assert_eq!(overlay(&race, run), "#####\n#S#G#\n#####");
    }
}
