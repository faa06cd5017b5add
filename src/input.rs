//! Keyboard state collapsed into a movement intent
//!
//! Hosts forward raw key events; held keys are tracked as four booleans and
//! turned into an [`Intent`] once per frame.

use crate::sim::Intent;

/// Movement direction a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

impl MoveKey {
    /// Map a DOM-style key name (`"w"`, `"ArrowUp"`, ...). Letters are case-insensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(MoveKey::Up),
            "ArrowDown" => Some(MoveKey::Down),
            "ArrowLeft" => Some(MoveKey::Left),
            "ArrowRight" => Some(MoveKey::Right),
            _ => match key.to_ascii_lowercase().as_str() {
                "w" => Some(MoveKey::Up),
                "s" => Some(MoveKey::Down),
                "a" => Some(MoveKey::Left),
                "d" => Some(MoveKey::Right),
                _ => None,
            },
        }
    }
}

/// Currently held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Keys {
    /// Apply a key event. Auto-repeat presses are ignored so only real
    /// transitions change state. Returns true if the key is a movement key.
    pub fn handle(&mut self, key: &str, pressed: bool, repeat: bool) -> bool {
        let Some(key) = MoveKey::from_key(key) else {
            return false;
        };
        if pressed && repeat {
            return true;
        }
        self.set(key, pressed);
        true
    }

    pub fn set(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Up => self.up = pressed,
            MoveKey::Down => self.down = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
        }
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Collapse to per-axis intent: opposite keys cancel out
    pub fn intent(&self) -> Intent {
        Intent::new(
            self.right as i8 - self.left as i8,
            self.down as i8 - self.up as i8,
        )
    }
}
