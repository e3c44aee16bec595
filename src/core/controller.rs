use serde::{Deserialize, Serialize};

/// Logical movement key, decoupled from any windowing library key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalKey {
    Forward,
    Left,
    Back,
    Right,
    Ascend,
    Descend,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 6] = [
        LogicalKey::Forward,
        LogicalKey::Left,
        LogicalKey::Back,
        LogicalKey::Right,
        LogicalKey::Ascend,
        LogicalKey::Descend,
    ];
}

/// Modifier key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
}

/// Snapshot of the modifier keys as reported by the windowing layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };

    pub fn get(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Ctrl => self.ctrl,
            Modifier::Alt => self.alt,
            Modifier::Shift => self.shift,
        }
    }

    pub fn set(&mut self, modifier: Modifier, pressed: bool) {
        match modifier {
            Modifier::Ctrl => self.ctrl = pressed,
            Modifier::Alt => self.alt = pressed,
            Modifier::Shift => self.shift = pressed,
        }
    }
}

/// Key transition delivered with every key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    /// Auto-repeat while the key stays held
    Repeat,
    Release,
}

impl KeyAction {
    /// True for both the initial press and auto-repeats
    pub fn is_held(self) -> bool {
        !matches!(self, KeyAction::Release)
    }
}

/// Controller - read side of the held input state, sampled once per frame
pub trait Controller {
    /// Check if a logical key is currently down
    fn is_down(&self, key: LogicalKey) -> bool;

    /// Current modifier state
    fn modifiers(&self) -> Modifiers;
}
