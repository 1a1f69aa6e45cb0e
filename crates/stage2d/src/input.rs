//! Per-frame keyboard polling
//!
//! Maps the small set of logical keys arcade games use onto the toolkit's
//! key codes. State refreshes when a frame is presented; games sample it
//! once per tick.

use macroquad::input::{is_key_down, is_key_pressed, KeyCode};

/// Logical keys consumed by games built on the stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Up arrow
    Up,

    /// Down arrow
    Down,

    /// Left arrow
    Left,

    /// Right arrow
    Right,

    /// Enter / Return (confirm)
    Enter,

    /// Escape (cancel)
    Escape,
}

impl Key {
    const fn code(self) -> KeyCode {
        match self {
            Self::Up => KeyCode::Up,
            Self::Down => KeyCode::Down,
            Self::Left => KeyCode::Left,
            Self::Right => KeyCode::Right,
            Self::Enter => KeyCode::Enter,
            Self::Escape => KeyCode::Escape,
        }
    }
}

/// Whether the key is currently held down
#[must_use]
pub fn key_down(key: Key) -> bool {
    is_key_down(key.code())
}

/// Whether the key went down during the current frame
#[must_use]
pub fn key_pressed(key: Key) -> bool {
    is_key_pressed(key.code())
}
