use std::fmt;
use std::str::FromStr;

use crate::algorithm::Algorithm;

/// Which panels the visualizer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewMode {
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(rename = "astar", alias = "a*"))]
    AStar,
    #[default]
    Compare,
}

impl ViewMode {
    /// The next mode in the Dijkstra → A* → Compare cycle.
    pub const fn next(self) -> Self {
        match self {
            ViewMode::Dijkstra => ViewMode::AStar,
            ViewMode::AStar => ViewMode::Compare,
            ViewMode::Compare => ViewMode::Dijkstra,
        }
    }

    /// Whether `algorithm`'s panel is visible in this mode.
    pub const fn shows(self, algorithm: Algorithm) -> bool {
        matches!(
            (self, algorithm),
            (ViewMode::Compare, _)
                | (ViewMode::Dijkstra, Algorithm::Dijkstra)
                | (ViewMode::AStar, Algorithm::AStar)
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            ViewMode::Dijkstra => "Dijkstra",
            ViewMode::AStar => "A*",
            ViewMode::Compare => "Compare",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown view mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode {0:?} (expected dijkstra, astar or compare)")]
pub struct ParseModeError(pub String);

impl FromStr for ViewMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(ViewMode::Dijkstra),
            "astar" | "a*" => Ok(ViewMode::AStar),
            "compare" => Ok(ViewMode::Compare),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
