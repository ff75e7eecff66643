//! Held-key snapshot fed by the host's key events

/// The four movement controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Player 1 up
    W,
    /// Player 1 down
    S,
    /// Player 2 up
    ArrowUp,
    /// Player 2 down
    ArrowDown,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name; anything else is not a control
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" => Some(Key::W),
            "s" => Some(Key::S),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => None,
        }
    }
}

/// Current pressed state of every control. Only key events change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub w: bool,
    pub s: bool,
    pub arrow_up: bool,
    pub arrow_down: bool,
}

impl InputSnapshot {
    pub fn press(&mut self, key: Key) {
        *self.slot(key) = true;
    }

    pub fn release(&mut self, key: Key) {
        *self.slot(key) = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::W => self.w,
            Key::S => self.s,
            Key::ArrowUp => self.arrow_up,
            Key::ArrowDown => self.arrow_down,
        }
    }

    /// Drop every held key (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::W => &mut self.w,
            Key::S => &mut self.s,
            Key::ArrowUp => &mut self.arrow_up,
            Key::ArrowDown => &mut self.arrow_down,
        }
    }
}
