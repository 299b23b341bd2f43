//! The interactive session: current race, playback and key bindings.

use std::time::Instant;

use mazerace_gen::{GenError, MazeGen};
use mazerace_race::{Playback, Race, ViewMode};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::app::{Effect, Model};
use crate::config::Settings;
use crate::messages::{Key, Msg};
use crate::render;
use crate::screen::Screen;

/// Side change applied by the `]` and `[` keys.
pub const RESIZE_STEP: i32 = 2;

pub const KEY_HELP: &str =
    "space pause  r replay  n new maze  +/- speed  ]/[ size  m mode  q quit";

pub struct Session {
    generator: MazeGen<StdRng>,
    race: Race,
    playback: Playback,
    mode: ViewMode,
    seed: u64,
    last_tick: Option<Instant>,
}

impl Session {
    /// Build the first race from `settings`. Without a configured seed one
    /// is drawn from the thread RNG.
    pub fn new(settings: &Settings) -> Result<Self, GenError> {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let mut generator = MazeGen::new(settings.maze, StdRng::seed_from_u64(seed));
        let race = Race::generate(&mut generator)?;
        let playback = Playback::new(&race, settings.playback.move_delay);
        log::info!(
            "session started: seed {seed}, {}x{} maze",
            race.maze.width(),
            race.maze.height()
        );
        Ok(Self {
            generator,
            race,
            playback,
            mode: settings.mode,
            seed,
            last_tick: None,
        })
    }

    pub fn race(&self) -> &Race {
        &self.race
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The seed the session's RNG started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a new maze and restart the playback on it.
    pub fn reload(&mut self) -> Result<(), GenError> {
        self.race = Race::generate(&mut self.generator)?;
        self.playback.load(&self.race);
        log::debug!(
            "reloaded {}x{} maze",
            self.race.maze.width(),
            self.race.maze.height()
        );
        Ok(())
    }

    /// Grow or shrink the maze by `delta` per side and reload. Nothing
    /// happens when the size cannot change.
    pub fn resize(&mut self, delta: i32) -> Result<(), GenError> {
        let config = self.generator.config();
        let current = config.normalized()?;
        let resized = current.resized(delta);
        if resized == current {
            log::debug!("maze stays {}x{}", current.width, current.height);
            return Ok(());
        }
        self.generator.set_config(resized);
        if let Err(e) = self.reload() {
            self.generator.set_config(config);
            return Err(e);
        }
        Ok(())
    }

    /// Switch to the next view mode, starting the playback over.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        self.playback.restart();
    }

    /// Advance the playback by the time since the previous tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_tick {
            let dt = now.saturating_duration_since(last).as_secs_f64();
            self.playback.tick(dt);
        }
        self.last_tick = Some(now);
    }

    fn handle_key(&mut self, key: Key) -> Option<Effect> {
        let result = match key {
            Key::Escape | Key::Char('q') => return Some(Effect::End),
            Key::Space | Key::Char('p') => {
                self.playback.toggle_pause();
                Ok(())
            }
            Key::Char('r') => {
                self.playback.skip_scan();
                Ok(())
            }
            Key::Char('n') => self.reload(),
            Key::Char('+') | Key::Char('=') => {
                self.playback.faster();
                Ok(())
            }
            Key::Char('-') => {
                self.playback.slower();
                Ok(())
            }
            Key::Char(']') => self.resize(RESIZE_STEP),
            Key::Char('[') => self.resize(-RESIZE_STEP),
            Key::Char('m') => {
                self.cycle_mode();
                Ok(())
            }
            _ => Ok(()),
        };
        if let Err(e) = result {
            log::error!("cannot build a new maze: {e}");
        }
        None
    }
}

impl Model for Session {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                self.last_tick = None;
                None
            }
            Msg::KeyDown { key, .. } => self.handle_key(key),
            Msg::Tick { time } => {
                self.tick(time);
                None
            }
            Msg::Screen { width, height } => {
                log::debug!("terminal resized to {width}x{height}");
                None
            }
            Msg::Quit => Some(Effect::End),
        }
    }

    fn draw(&self, screen: &mut Screen) {
        render::draw(self, screen);
    }
}
