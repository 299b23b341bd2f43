//! Colour palette for a dark terminal.

use mazerace_race::Algorithm;

use crate::screen::Color;

// -- Background and maze --

pub const BG: Color = Color::from_rgb(0, 0, 10);
/// Wall blocks, a soft blue-violet.
pub const WALL: Color = Color::from_rgb(32, 36, 68);
/// Pellets on unexplored open tiles.
pub const PELLET: Color = Color::from_rgb(200, 200, 220);
pub const START: Color = Color::from_rgb(255, 230, 90);
pub const GOAL: Color = Color::from_rgb(130, 255, 130);

// -- Text --

pub const HUD: Color = Color::from_rgb(220, 220, 240);
pub const LABEL: Color = Color::from_rgb(230, 230, 255);
pub const CARD_BG: Color = Color::from_rgb(20, 20, 35);

// -- Per algorithm --

pub const DIJ_RADAR: Color = Color::from_rgb(120, 220, 255);
pub const AST_RADAR: Color = Color::from_rgb(255, 170, 230);
pub const DIJ_PATH: Color = Color::from_rgb(255, 230, 120);
pub const AST_PATH: Color = Color::from_rgb(120, 255, 170);
pub const DIJ_CARD: Color = Color::from_rgb(130, 150, 255);
pub const AST_CARD: Color = Color::from_rgb(255, 160, 255);

/// Share of the radar colour used to tint a scanned tile.
pub const RADAR_TINT_PCT: u32 = 35;

pub const fn radar(algo: Algorithm) -> Color {
    match algo {
        Algorithm::Dijkstra => DIJ_RADAR,
        Algorithm::AStar => AST_RADAR,
    }
}

pub const fn path(algo: Algorithm) -> Color {
    match algo {
        Algorithm::Dijkstra => DIJ_PATH,
        Algorithm::AStar => AST_PATH,
    }
}

pub const fn card(algo: Algorithm) -> Color {
    match algo {
        Algorithm::Dijkstra => DIJ_CARD,
        Algorithm::AStar => AST_CARD,
    }
}
