use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::controller::LogicalKey;
use super::view_params::RenderMode;

/// What a bound key does
///
/// Serializes as `{ "move": "forward" }`, `{ "render_mode": 3 }`,
/// `"toggle_flashlight"` or `"quit"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommand {
    /// Held movement key
    Move(LogicalKey),
    /// Edge-triggered render mode selection
    RenderMode(RenderMode),
    /// Edge-triggered flashlight toggle
    ToggleFlashlight,
    Quit,
}

/// Lookup table from key name to command.
///
/// Key names are the debug names of winit's `KeyCode` (`"KeyW"`, `"Digit3"`,
/// `"ShiftLeft"`), which keeps this table free of windowing types.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    bindings: HashMap<String, KeyCommand>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::from([
            ("KeyW".to_string(), KeyCommand::Move(LogicalKey::Forward)),
            ("KeyA".to_string(), KeyCommand::Move(LogicalKey::Left)),
            ("KeyS".to_string(), KeyCommand::Move(LogicalKey::Back)),
            ("KeyD".to_string(), KeyCommand::Move(LogicalKey::Right)),
            ("Space".to_string(), KeyCommand::Move(LogicalKey::Ascend)),
            ("ShiftLeft".to_string(), KeyCommand::Move(LogicalKey::Descend)),
            ("ShiftRight".to_string(), KeyCommand::Move(LogicalKey::Descend)),
            ("KeyF".to_string(), KeyCommand::ToggleFlashlight),
            ("Escape".to_string(), KeyCommand::Quit),
        ]);

        for index in 0..=RenderMode::MAX {
            if let Some(mode) = RenderMode::new(index) {
                bindings.insert(format!("Digit{index}"), KeyCommand::RenderMode(mode));
                bindings.insert(format!("Numpad{index}"), KeyCommand::RenderMode(mode));
            }
        }

        Self { bindings }
    }
}

impl KeyBindings {
    /// Default bindings with `overrides` layered on top
    pub fn with_overrides(overrides: &HashMap<String, KeyCommand>) -> Self {
        let mut bindings = Self::default();
        for (key, command) in overrides {
            bindings.bind(key.clone(), *command);
        }
        bindings
    }

    pub fn bind(&mut self, key: impl Into<String>, command: KeyCommand) {
        let key = key.into();
        log::debug!("Binding {key} -> {command:?}");
        self.bindings.insert(key, command);
    }

    /// Look up the command for a key name. Unknown keys yield `None`
    pub fn lookup(&self, key: &str) -> Option<KeyCommand> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_movement_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup("KeyW"), Some(KeyCommand::Move(LogicalKey::Forward)));
        assert_eq!(bindings.lookup("KeyA"), Some(KeyCommand::Move(LogicalKey::Left)));
        assert_eq!(bindings.lookup("KeyS"), Some(KeyCommand::Move(LogicalKey::Back)));
        assert_eq!(bindings.lookup("KeyD"), Some(KeyCommand::Move(LogicalKey::Right)));
        assert_eq!(bindings.lookup("Space"), Some(KeyCommand::Move(LogicalKey::Ascend)));
        assert_eq!(bindings.lookup("ShiftRight"), Some(KeyCommand::Move(LogicalKey::Descend)));
    }

    #[test]
    fn test_default_render_mode_bindings() {
        let bindings = KeyBindings::default();
        for index in 0..=4u8 {
            let expected = Some(KeyCommand::RenderMode(RenderMode::new(index).unwrap()));
            assert_eq!(bindings.lookup(&format!("Digit{index}")), expected);
            assert_eq!(bindings.lookup(&format!("Numpad{index}")), expected);
        }
        assert_eq!(bindings.lookup("Digit5"), None);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup("KeyZ"), None);
        assert_eq!(bindings.lookup(""), None);
    }

    #[test]
    fn test_overrides_layer_on_defaults() {
        let overrides = HashMap::from([
            ("KeyF".to_string(), KeyCommand::Move(LogicalKey::Forward)),
            ("KeyL".to_string(), KeyCommand::ToggleFlashlight),
        ]);
        let bindings = KeyBindings::with_overrides(&overrides);

        assert_eq!(bindings.lookup("KeyF"), Some(KeyCommand::Move(LogicalKey::Forward)));
        assert_eq!(bindings.lookup("KeyL"), Some(KeyCommand::ToggleFlashlight));
        assert_eq!(bindings.lookup("KeyW"), Some(KeyCommand::Move(LogicalKey::Forward)));
        assert_eq!(bindings.len(), KeyBindings::default().len() + 1);
    }

    #[test]
    fn test_command_json_shape() {
        let json = serde_json::to_string(&KeyCommand::RenderMode(RenderMode::UV)).unwrap();
        assert_eq!(json, r#"{"render_mode":0}"#);
        let json = serde_json::to_string(&KeyCommand::ToggleFlashlight).unwrap();
        assert_eq!(json, r#""toggle_flashlight""#);
    }
}
