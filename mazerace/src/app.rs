//! The Model-View-Update loop: [`Model`], [`Driver`], [`Effect`], [`App`].

use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use crate::messages::Msg;
use crate::screen::{Frame, Screen, compute_frame};

/// A side effect returned by [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Stop the application loop.
    End,
}

/// The application state.
pub trait Model {
    /// Process a message, optionally returning a side effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state. The model may resize `screen`.
    fn draw(&self, screen: &mut Screen);
}

/// Back-end that reads input and puts frames on screen.
pub trait Driver {
    fn init(&mut self) -> Result<(), Box<dyn Error>>;

    /// Send any pending input through `tx`. Should not block for long.
    fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>>;

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>>;

    /// Restore the terminal. Must be safe to call after a failed `init`.
    fn close(&mut self);
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(model: M, driver: D) -> Self {
        Self { model, driver }
    }

    /// Run until the model returns [`Effect::End`] or the driver fails.
    ///
    /// The driver is closed on every exit path.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let result = self.driver.init().and_then(|()| self.event_loop());
        self.driver.close();
        result
    }

    /// Hand the model back, e.g. to inspect it after a run.
    pub fn into_model(self) -> M {
        self.model
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn Error>> {
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        let mut prev = Screen::new(0, 0);
        let mut curr = Screen::new(0, 0);

        loop {
            self.driver.poll_msgs(&tx)?;
            tx.send(Msg::Tick {
                time: Instant::now(),
            })
            .ok();

            let pending = self.process_pending(&rx);
            if pending.end {
                log::info!("application loop finished");
                return Ok(());
            }
            // The terminal may have reflowed or cleared itself.
            if pending.resized {
                prev = Screen::new(0, 0);
            }

            self.model.draw(&mut curr);
            let frame = compute_frame(&prev, &curr);
            if !frame.cells.is_empty() {
                self.driver.flush(frame)?;
            }
            std::mem::swap(&mut prev, &mut curr);
        }
    }

    /// Drain queued messages, stopping early on [`Effect::End`].
    fn process_pending(&mut self, rx: &Receiver<Msg>) -> Pending {
        let mut pending = Pending::default();
        while let Ok(msg) = rx.try_recv() {
            pending.resized |= matches!(msg, Msg::Screen { .. });
            if let Some(Effect::End) = self.model.update(msg) {
                pending.end = true;
                break;
            }
        }
        pending
    }
}

/// What a batch of messages asks of the loop.
#[derive(Debug, Default)]
struct Pending {
    end: bool,
    resized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Key;
    use crate::screen::{Cell, Style};
    use mazerace_core::Point;

    /// Counts ticks and quits on `q`.
    #[derive(Default)]
    struct Counter {
        ticks: usize,
    }

    impl Model for Counter {
        fn update(&mut self, msg: Msg) -> Option<Effect> {
            match msg {
                Msg::Tick { .. } => self.ticks += 1,
                Msg::KeyDown {
                    key: Key::Char('q'),
                    ..
                } => return Some(Effect::End),
                _ => {}
            }
            None
        }

        fn draw(&self, screen: &mut Screen) {
            screen.resize(3, 1);
            let ch = char::from_digit((self.ticks % 10) as u32, 10).unwrap_or('?');
            screen.set(Point::new(0, 0), Cell::new(ch, Style::default()));
        }
    }

    /// Replays scripted input, one batch per poll.
    struct Scripted {
        batches: Vec<Vec<Msg>>,
        frames: Vec<Frame>,
        closed: bool,
    }

    impl Driver for Scripted {
        fn init(&mut self) -> Result<(), Box<dyn Error>> {
            Ok(())
        }

        fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>> {
            if self.batches.is_empty() {
                return Err("script exhausted".into());
            }
            for m in self.batches.remove(0) {
                tx.send(m).ok();
            }
            Ok(())
        }

        fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>> {
            self.frames.push(frame);
            Ok(())
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    fn key(c: char) -> Msg {
        Msg::KeyDown {
            key: Key::Char(c),
            time: Instant::now(),
        }
    }

    #[test]
    fn runs_until_end_effect() {
        let driver = Scripted {
            batches: vec![vec![], vec![], vec![key('q')]],
            frames: Vec::new(),
            closed: false,
        };
        let mut app = App::new(Counter::default(), driver);
        app.run().unwrap();
        assert!(app.driver.closed);
        // Two drawn frames: the first is full, the second only changes one cell.
        assert_eq!(app.driver.frames.len(), 2);
        assert!(app.driver.frames[0].full);
        assert_eq!(app.driver.frames[1].cells.len(), 1);
        assert_eq!(app.into_model().ticks, 2);
    }

    #[test]
    fn terminal_resize_forces_full_frame() {
        let resize = Msg::Screen {
            width: 80,
            height: 24,
        };
        let driver = Scripted {
            batches: vec![vec![], vec![resize], vec![], vec![key('q')]],
            frames: Vec::new(),
            closed: false,
        };
        let mut app = App::new(Counter::default(), driver);
        app.run().unwrap();
        let frames = &app.driver.frames;
        assert_eq!(frames.len(), 3);
        // Same 3x1 layout throughout, yet the frame after the resize is full.
        assert!(frames[1].full);
        assert_eq!(frames[1].cells.len(), 3);
        assert!(!frames[2].full);
        assert_eq!(frames[2].cells.len(), 1);
    }

    #[test]
    fn driver_error_still_closes() {
        let driver = Scripted {
            batches: vec![],
            frames: Vec::new(),
            closed: false,
        };
        let mut app = App::new(Counter::default(), driver);
        assert!(app.run().is_err());
        assert!(app.driver.closed);
    }
}
