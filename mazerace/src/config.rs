//! Settings file.
//!
//! ```toml
//! mode = "compare"
//! seed = 42
//!
//! [maze]
//! width = 31
//! height = 21
//! dead_end_percent = 50
//!
//! [playback]
//! move_delay = 0.05
//! ```
//!
//! Every key is optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mazerace_gen::MazeConfig;
use mazerace_race::ViewMode;
use mazerace_race::playback::DEFAULT_MOVE_DELAY;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Real seconds per animation step.
    pub move_delay: f64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            move_delay: DEFAULT_MOVE_DELAY,
        }
    }
}

/// Everything the app can be configured with.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub mode: ViewMode,
    /// Fixed seed for reproducible mazes. Drawn at random when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub maze: MazeConfig,
    pub playback: PlaybackSettings,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let s = Settings::from_toml("").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.maze, MazeConfig::default());
        assert_eq!(s.playback.move_delay, DEFAULT_MOVE_DELAY);
        assert_eq!(s.mode, ViewMode::Compare);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = Settings::from_toml(
            r#"
mode = "astar"
seed = 7

[maze]
width = 41
"#,
        )
        .unwrap();
        assert_eq!(s.mode, ViewMode::AStar);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.maze.width, 41);
        assert_eq!(s.maze.height, MazeConfig::default().height);
        assert_eq!(s.maze.dead_end_percent, 50);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(Settings::from_toml("mode = \"bfs\"").is_err());
        assert!(Settings::from_toml("[maze]\nwidth = \"wide\"").is_err());
    }

    #[test]
    fn round_trip() {
        let s = Settings {
            mode: ViewMode::Dijkstra,
            seed: Some(3),
            maze: MazeConfig::with_size(15, 11),
            playback: PlaybackSettings { move_delay: 0.25 },
        };
        let text = toml::to_string(&s).unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), s);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Settings::load(Path::new("/nonexistent/mazerace.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("mazerace.toml"));
    }
}
