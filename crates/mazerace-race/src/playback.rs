//! Playback timeline for a [`Race`]: the radar scan, then the robots.
//!
//! Time is measured in *scaled* seconds, real seconds divided by the move
//! delay, so a shorter delay speeds up both phases. Each tick advances a
//! scan or robot index by at most one step.

use crate::algorithm::Algorithm;
use crate::race::Race;
use crate::stats::ProgressStats;

/// Scaled time between two revealed scan cells.
pub const SCAN_DELAY: f64 = 0.8;
/// Scaled time between two robot steps.
pub const ROBOT_DELAY: f64 = 0.05;

pub const DEFAULT_MOVE_DELAY: f64 = 0.05;
pub const MIN_MOVE_DELAY: f64 = 0.01;
pub const MAX_MOVE_DELAY: f64 = 0.5;
/// Change applied by [`Playback::faster`] and [`Playback::slower`].
pub const MOVE_DELAY_STEP: f64 = 0.05;

/// Bring a configured delay into range. Non-finite values fall back to the
/// default.
fn clamp_delay(delay: f64) -> f64 {
    if delay.is_finite() {
        delay.clamp(MIN_MOVE_DELAY, MAX_MOVE_DELAY)
    } else {
        log::warn!("move delay {delay} is not a number, using {DEFAULT_MOVE_DELAY}");
        DEFAULT_MOVE_DELAY
    }
}

/// Where the playback currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Exploration orders are being revealed.
    Scanning,
    /// Both scans are complete; robots walk their paths.
    Moving,
    /// Every robot stands on its last path cell.
    Finished,
}

/// Per-algorithm playback position.
#[derive(Debug, Clone, Copy, Default)]
struct Track {
    scan: usize,
    scan_len: usize,
    robot: usize,
    path_len: usize,
    scan_timer: f64,
}

impl Track {
    fn scan_complete(&self) -> bool {
        self.scan >= self.scan_len
    }

    fn robot_arrived(&self) -> bool {
        self.robot + 1 >= self.path_len
    }
}

/// The animation state machine driven by a timer.
#[derive(Debug, Clone)]
pub struct Playback {
    tracks: [Track; 2],
    robot_timer: f64,
    move_delay: f64,
    paused: bool,
    scan_done: bool,
}

impl Playback {
    /// A playback for `race` at the start of its scan.
    pub fn new(race: &Race, move_delay: f64) -> Self {
        let mut pb = Self {
            tracks: [Track::default(); 2],
            robot_timer: 0.0,
            move_delay: clamp_delay(move_delay),
            paused: false,
            scan_done: false,
        };
        pb.load(race);
        pb
    }

    /// Switch to a new race and restart, keeping speed and pause state.
    pub fn load(&mut self, race: &Race) {
        for algo in Algorithm::ALL {
            let run = race.run(algo);
            self.tracks[algo.index()] = Track {
                scan_len: run.explored().len(),
                path_len: run.path().len(),
                ..Track::default()
            };
        }
        self.restart();
    }

    /// Rewind to the beginning of the scan.
    pub fn restart(&mut self) {
        for t in &mut self.tracks {
            t.scan = 0;
            t.robot = 0;
            t.scan_timer = 0.0;
        }
        self.robot_timer = 0.0;
        self.scan_done = false;
    }

    /// Reveal the whole scan at once and send the robots back to the start.
    pub fn skip_scan(&mut self) {
        for t in &mut self.tracks {
            t.scan = t.scan_len;
            t.robot = 0;
            t.scan_timer = 0.0;
        }
        self.robot_timer = 0.0;
        self.scan_done = true;
    }

    /// Advance by `dt` real seconds. Paused playback does not move.
    pub fn tick(&mut self, dt: f64) {
        if self.paused {
            return;
        }
        let scaled = dt.max(0.0) / self.move_delay;

        if !self.scan_done {
            for t in &mut self.tracks {
                t.scan_timer += scaled;
                if t.scan_timer >= SCAN_DELAY {
                    t.scan = (t.scan + 1).min(t.scan_len);
                    t.scan_timer = 0.0;
                }
            }
            self.scan_done = self.tracks.iter().all(Track::scan_complete);
            return;
        }

        self.robot_timer += scaled;
        if self.robot_timer >= ROBOT_DELAY {
            for t in &mut self.tracks {
                if !t.robot_arrived() {
                    t.robot += 1;
                }
            }
            self.robot_timer = 0.0;
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.scan_done {
            Phase::Scanning
        } else if self.tracks.iter().all(Track::robot_arrived) {
            Phase::Finished
        } else {
            Phase::Moving
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Seconds per step before scaling.
    pub fn move_delay(&self) -> f64 {
        self.move_delay
    }

    /// Shorten the move delay by one step.
    pub fn faster(&mut self) {
        self.move_delay = (self.move_delay - MOVE_DELAY_STEP).max(MIN_MOVE_DELAY);
    }

    /// Lengthen the move delay by one step.
    pub fn slower(&mut self) {
        self.move_delay = (self.move_delay + MOVE_DELAY_STEP).min(MAX_MOVE_DELAY);
    }

    /// Number of exploration cells revealed for `algo`.
    pub fn scan_index(&self, algo: Algorithm) -> usize {
        self.tracks[algo.index()].scan
    }

    /// Index into `algo`'s path where its robot stands.
    pub fn robot_index(&self, algo: Algorithm) -> usize {
        self.tracks[algo.index()].robot
    }

    /// Whether the scan phase is over.
    pub fn scan_done(&self) -> bool {
        self.scan_done
    }

    /// Stats card values for `algo` at the current position.
    pub fn stats(&self, race: &Race, algo: Algorithm) -> ProgressStats {
        let run = race.run(algo);
        let t = &self.tracks[algo.index()];
        ProgressStats::compute(run.path(), run.explored(), t.robot, t.scan, run.elapsed)
    }
}
