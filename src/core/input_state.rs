use std::collections::HashSet;

use super::controller::{Controller, LogicalKey, Modifier, Modifiers};

/// Held movement keys and modifiers for one viewer session
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Currently held logical keys
    pressed_keys: HashSet<LogicalKey>,
    modifiers: Modifiers,
}

impl InputState {
    /// Create an input state with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Last write wins
    pub fn set_key(&mut self, key: LogicalKey, pressed: bool) {
        if pressed {
            self.pressed_keys.insert(key);
        } else {
            self.pressed_keys.remove(&key);
        }
    }

    pub fn set_modifier(&mut self, modifier: Modifier, pressed: bool) {
        self.modifiers.set(modifier, pressed);
    }

    /// Replace the whole modifier state
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Release every key and modifier (window lost focus)
    pub fn clear(&mut self) {
        self.pressed_keys.clear();
        self.modifiers = Modifiers::NONE;
    }

    /// Number of logical keys currently held
    pub fn held_count(&self) -> usize {
        self.pressed_keys.len()
    }
}

impl Controller for InputState {
    fn is_down(&self, key: LogicalKey) -> bool {
        self.pressed_keys.contains(&key)
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
