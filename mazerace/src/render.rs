//! Drawing a [`Session`] onto a [`Screen`].
//!
//! Layout, top to bottom: status line, one stats card per visible
//! algorithm, panel labels, the maze panels side by side, key help.

use mazerace_core::{Point, Tile};
use mazerace_race::{Algorithm, Playback, ProgressStats, Race};

use crate::model::{KEY_HELP, Session};
use crate::screen::{AttrMask, Cell, Color, Screen, Style};
use crate::theme;

pub const STATUS_ROW: i32 = 0;
pub const CARD_ROW: i32 = 1;
const CARD_HEIGHT: i32 = 3;
pub const LABEL_ROW: i32 = CARD_ROW + CARD_HEIGHT + 1;
pub const MAZE_ROW: i32 = LABEL_ROW + 1;
/// Columns between two panels.
pub const PANEL_GAP: i32 = 4;
/// Panels are never narrower than a stats card.
const CARD_WIDTH: i32 = 26;

pub const WALL_CH: char = '█';
pub const PELLET_CH: char = '·';
pub const PATH_CH: char = '•';
pub const ROBOT_CH: char = '@';

/// Where each visible panel goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    /// Visible algorithms with the first column of their panel.
    pub panels: Vec<(Algorithm, i32)>,
}

impl Layout {
    pub fn new(session: &Session) -> Self {
        let maze = &session.race().maze;
        let panel_width = maze.width().max(CARD_WIDTH);
        let panels: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|&a| session.mode().shows(a))
            .enumerate()
            .map(|(i, a)| (a, i as i32 * (panel_width + PANEL_GAP)))
            .collect();
        let panels_width = panels.len() as i32 * (panel_width + PANEL_GAP) - PANEL_GAP;
        let text_width = status_line(session).chars().count().max(KEY_HELP.chars().count());
        Self {
            width: panels_width.max(text_width as i32),
            height: MAZE_ROW + maze.height() + 2,
            panels,
        }
    }
}

fn status_line(session: &Session) -> String {
    let pb = session.playback();
    format!(
        "Speed: {:.2}s/step  •  State: {}  •  Mode: {}  •  Seed: {}",
        pb.move_delay(),
        if pb.is_paused() { "PAUSED" } else { "RUNNING" },
        session.mode(),
        session.seed()
    )
}

pub fn draw(session: &Session, screen: &mut Screen) {
    let layout = Layout::new(session);
    screen.resize(layout.width, layout.height);
    let blank = Cell::new(' ', Style::default().with_bg(theme::BG));
    for row in 0..layout.height {
        for col in 0..layout.width {
            screen.set(Point::new(row, col), blank);
        }
    }

    let hud = Style::fg(theme::HUD).with_bg(theme::BG);
    screen.text(
        Point::new(STATUS_ROW, 0),
        &status_line(session),
        hud.with_attrs(AttrMask::BOLD),
    );

    let race = session.race();
    let pb = session.playback();
    for &(algo, col) in &layout.panels {
        draw_card(screen, Point::new(CARD_ROW, col), algo, pb.stats(race, algo));
        screen.text(
            Point::new(LABEL_ROW, col),
            algo.name(),
            Style::fg(theme::LABEL)
                .with_bg(theme::BG)
                .with_attrs(AttrMask::BOLD),
        );
        draw_panel(screen, Point::new(MAZE_ROW, col), race, pb, algo);
    }

    screen.text(
        Point::new(layout.height - 1, 0),
        KEY_HELP,
        hud.with_attrs(AttrMask::DIM),
    );
}

fn draw_card(screen: &mut Screen, origin: Point, algo: Algorithm, stats: ProgressStats) {
    let bg = Style::fg(theme::HUD).with_bg(theme::CARD_BG);
    for row in 0..CARD_HEIGHT {
        for col in 0..CARD_WIDTH {
            screen.set(origin.shift(row, col), Cell::new(' ', bg));
        }
    }
    let title = Style::fg(theme::card(algo))
        .with_bg(theme::CARD_BG)
        .with_attrs(AttrMask::BOLD);
    screen.text(origin.shift(0, 1), algo.name(), title);
    screen.text(
        origin.shift(1, 1),
        &format!("Steps: {:<5} Nodes: {}", stats.steps, stats.scanned),
        bg,
    );
    screen.text(
        origin.shift(2, 1),
        &format!("Time: {:.1} ms", stats.time.as_secs_f64() * 1000.0),
        bg,
    );
}

fn draw_panel(screen: &mut Screen, origin: Point, race: &Race, pb: &Playback, algo: Algorithm) {
    let maze = &race.maze;
    let run = race.run(algo);
    let at = |p: Point| origin + p;

    for (p, tile) in maze.grid.iter() {
        let cell = match tile {
            Tile::Wall => Cell::new(WALL_CH, Style::fg(theme::WALL).with_bg(theme::BG)),
            Tile::Open => Cell::new(PELLET_CH, Style::fg(theme::PELLET).with_bg(theme::BG)),
        };
        screen.set(at(p), cell);
    }

    // Revealed part of the exploration order, head highlighted.
    let radar = theme::radar(algo);
    let scanned = &run.explored()[..pb.scan_index(algo).min(run.explored().len())];
    let tint = radar.scaled(theme::RADAR_TINT_PCT);
    for &p in scanned {
        screen.set(at(p), Cell::new(PELLET_CH, Style::fg(theme::PELLET).with_bg(tint)));
    }
    if let Some(&head) = scanned.last() {
        let style = Style::fg(theme::BG).with_bg(radar).with_attrs(AttrMask::BOLD);
        screen.set(at(head), Cell::new(PELLET_CH, style));
    }

    let path = run.path();
    let path_fg = theme::path(algo);
    if pb.scan_done() {
        for &p in path {
            overlay(screen, at(p), PATH_CH, path_fg, AttrMask::NONE);
        }
    }

    overlay(screen, at(maze.start), 'S', theme::START, AttrMask::BOLD);
    overlay(screen, at(maze.goal), 'G', theme::GOAL, AttrMask::BOLD);

    if pb.scan_done() {
        if let Some(&robot) = path.get(pb.robot_index(algo)) {
            overlay(screen, at(robot), ROBOT_CH, path_fg, AttrMask::BOLD);
        }
    }
}

/// Draw `ch` at `p`, keeping the background already there.
fn overlay(screen: &mut Screen, p: Point, ch: char, fg: Color, attrs: AttrMask) {
    let bg = screen.at(p).style.bg;
    screen.set(p, Cell::new(ch, Style::fg(fg).with_bg(bg).with_attrs(attrs)));
}
