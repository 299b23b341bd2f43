//! Input events delivered to the model.

use std::time::Instant;

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    /// A printable character other than space.
    Char(char),
}

#[derive(Clone, Debug)]
pub enum Msg {
    /// First message, sent before any input.
    Init,
    KeyDown { key: Key, time: Instant },
    /// Sent once per loop iteration to drive animation.
    Tick { time: Instant },
    /// The terminal was resized.
    Screen { width: i32, height: i32 },
    /// The user asked to quit (Ctrl+C, window close).
    Quit,
}
