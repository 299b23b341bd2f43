//! mazerace: watch Dijkstra and A* solve the same maze side by side.

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use mazerace_lib::print;
use mazerace_lib::{App, CrosstermDriver, Session, Settings};
use mazerace_race::ViewMode;

#[derive(Parser, Debug)]
#[command(name = "mazerace", version, about)]
struct Cli {
    /// Maze width in tiles (made odd, at least 9)
    #[arg(long)]
    width: Option<i32>,

    /// Maze height in tiles (made odd, at least 9)
    #[arg(long)]
    height: Option<i32>,

    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Real seconds per animation step (0.01 to 0.5)
    #[arg(long)]
    delay: Option<f64>,

    /// Panels to show: dijkstra, astar or compare
    #[arg(long)]
    mode: Option<ViewMode>,

    /// TOML settings file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print one race as text and exit
    #[arg(long)]
    print: bool,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// File settings with command-line values on top.
    fn settings(&self) -> Result<Settings, Box<dyn Error>> {
        let mut s = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(w) = self.width {
            s.maze.width = w;
        }
        if let Some(h) = self.height {
            s.maze.height = h;
        }
        if let Some(seed) = self.seed {
            s.seed = Some(seed);
        }
        if let Some(d) = self.delay {
            s.playback.move_delay = d;
        }
        if let Some(m) = self.mode {
            s.mode = m;
        }
        Ok(s)
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;
    let settings = cli.settings()?;
    let session = Session::new(&settings)?;

    if cli.print {
        print!("{}", print::report(session.race(), session.seed(), session.mode()));
        return Ok(());
    }

    let mut app = App::new(session, CrosstermDriver::new());
    app.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_defaults() {
        let cli = Cli::parse_from([
            "mazerace", "--width", "41", "--seed", "5", "--mode", "astar", "--delay", "0.2",
        ]);
        let s = cli.settings().unwrap();
        assert_eq!(s.maze.width, 41);
        assert_eq!(s.maze.height, 21);
        assert_eq!(s.seed, Some(5));
        assert_eq!(s.mode, ViewMode::AStar);
        assert_eq!(s.playback.move_delay, 0.2);
        assert!(!cli.print);
    }

    #[test]
    fn nan_delay_falls_back_to_default() {
        let cli = Cli::parse_from(["mazerace", "--delay", "NaN", "--seed", "1"]);
        let s = cli.settings().unwrap();
        assert!(s.playback.move_delay.is_nan());
        let session = Session::new(&s).unwrap();
        assert_eq!(
            session.playback().move_delay(),
            mazerace_race::playback::DEFAULT_MOVE_DELAY
        );
    }

    #[test]
    fn bad_mode_is_rejected() {
        assert!(Cli::try_parse_from(["mazerace", "--mode", "bfs"]).is_err());
    }
}
