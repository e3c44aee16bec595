use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use super::bindings::{KeyBindings, KeyCommand};
use super::controller::{KeyAction, Modifiers};
use super::session::Session;

/// Pixel scroll deltas (touchpads) are converted to wheel lines with this
pub const PIXELS_PER_LINE: f64 = 20.0;

/// What the caller should do after an event went through the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Handled,
    /// A quit binding was pressed
    Quit,
    Ignored,
}

/// Adapter that bridges winit events to the session
#[derive(Debug, Clone)]
pub struct WinitInputAdapter {
    bindings: KeyBindings,
    /// Last modifier state reported by the window
    modifiers: Modifiers,
}

impl WinitInputAdapter {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Process a winit WindowEvent and forward it to the session
    pub fn process_window_event(&mut self, event: &WindowEvent, session: &mut Session) -> InputOutcome {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_key(code, event.state, event.repeat, session)
                } else {
                    InputOutcome::Ignored
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.handle_modifiers(modifiers.state(), session);
                InputOutcome::Handled
            }
            WindowEvent::MouseWheel { delta, .. } => {
                session.on_scroll(scroll_lines(*delta));
                InputOutcome::Handled
            }
            WindowEvent::Focused(false) => {
                self.modifiers = Modifiers::NONE;
                session.on_focus_lost();
                InputOutcome::Handled
            }
            _ => InputOutcome::Ignored,
        }
    }

    /// Raw mouse motion, independent of cursor position and window edges
    pub fn process_device_event(&mut self, event: &DeviceEvent, session: &mut Session) -> InputOutcome {
        match event {
            DeviceEvent::MouseMotion { delta: (dx, dy) } => {
                session.on_mouse_move(*dx, *dy);
                InputOutcome::Handled
            }
            _ => InputOutcome::Ignored,
        }
    }

    /// Route a physical key through the bindings table
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        state: ElementState,
        repeat: bool,
        session: &mut Session,
    ) -> InputOutcome {
        let name = key_name(code);
        let Some(command) = self.bindings.lookup(&name) else {
            return InputOutcome::Ignored;
        };

        let action = key_action(state, repeat);
        if command == KeyCommand::Quit {
            return if action == KeyAction::Press {
                InputOutcome::Quit
            } else {
                InputOutcome::Handled
            };
        }

        session.on_bound_key(&name, command, action, self.modifiers);
        InputOutcome::Handled
    }

    pub fn handle_modifiers(&mut self, state: ModifiersState, session: &mut Session) {
        self.modifiers = modifiers_from_state(state);
        session.on_modifiers(self.modifiers);
    }
}

impl Default for WinitInputAdapter {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

/// Key name used by the bindings table, e.g. `"KeyW"`
pub fn key_name(code: KeyCode) -> String {
    format!("{code:?}")
}

pub fn key_action(state: ElementState, repeat: bool) -> KeyAction {
    match (state, repeat) {
        (ElementState::Released, _) => KeyAction::Release,
        (ElementState::Pressed, true) => KeyAction::Repeat,
        (ElementState::Pressed, false) => KeyAction::Press,
    }
}

pub fn modifiers_from_state(state: ModifiersState) -> Modifiers {
    Modifiers {
        ctrl: state.control_key(),
        alt: state.alt_key(),
        shift: state.shift_key(),
    }
}

/// Vertical scroll amount in lines
pub fn scroll_lines(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_LINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::{Controller, LogicalKey};
    use winit::dpi::PhysicalPosition;

    // Note: winit KeyEvent has private platform fields and cannot be built in
    // tests, so key handling is exercised through handle_key

    #[test]
    fn test_key_name_matches_bindings() {
        assert_eq!(key_name(KeyCode::KeyW), "KeyW");
        assert_eq!(key_name(KeyCode::Digit3), "Digit3");
        assert_eq!(key_name(KeyCode::ShiftLeft), "ShiftLeft");
    }

    #[test]
    fn test_key_action_mapping() {
        assert_eq!(key_action(ElementState::Pressed, false), KeyAction::Press);
        assert_eq!(key_action(ElementState::Pressed, true), KeyAction::Repeat);
        assert_eq!(key_action(ElementState::Released, false), KeyAction::Release);
    }

    #[test]
    fn test_modifiers_from_state() {
        let mods = modifiers_from_state(ModifiersState::CONTROL | ModifiersState::SHIFT);
        assert!(mods.ctrl);
        assert!(mods.shift);
        assert!(!mods.alt);
        assert_eq!(modifiers_from_state(ModifiersState::empty()), Modifiers::NONE);
    }

    #[test]
    fn test_scroll_lines() {
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
        let pixels = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -40.0));
        assert_eq!(scroll_lines(pixels), -2.0);
    }

    #[test]
    fn test_handle_key_routes_movement() {
        let mut adapter = WinitInputAdapter::default();
        let mut session = Session::default();

        let outcome = adapter.handle_key(KeyCode::KeyD, ElementState::Pressed, false, &mut session);
        assert_eq!(outcome, InputOutcome::Handled);
        assert!(session.input().is_down(LogicalKey::Right));

        adapter.handle_key(KeyCode::KeyD, ElementState::Released, false, &mut session);
        assert!(!session.input().is_down(LogicalKey::Right));
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut adapter = WinitInputAdapter::default();
        let mut session = Session::default();
        let outcome = adapter.handle_key(KeyCode::KeyZ, ElementState::Pressed, false, &mut session);
        assert_eq!(outcome, InputOutcome::Ignored);
        assert_eq!(session.input().held_count(), 0);
    }

    #[test]
    fn test_escape_requests_quit() {
        let mut adapter = WinitInputAdapter::default();
        let mut session = Session::default();
        let outcome = adapter.handle_key(KeyCode::Escape, ElementState::Pressed, false, &mut session);
        assert_eq!(outcome, InputOutcome::Quit);
        let outcome = adapter.handle_key(KeyCode::Escape, ElementState::Released, false, &mut session);
        assert_eq!(outcome, InputOutcome::Handled);
    }

    #[test]
    fn test_modifiers_forwarded_with_keys() {
        let mut adapter = WinitInputAdapter::default();
        let mut session = Session::default();

        adapter.handle_modifiers(ModifiersState::ALT, &mut session);
        assert!(session.input().modifiers().alt);

        adapter.handle_key(KeyCode::KeyW, ElementState::Pressed, false, &mut session);
        assert!(session.input().modifiers().alt);
        assert_eq!(adapter.modifiers(), session.input().modifiers());
    }

    #[test]
    fn test_releasing_one_shift_keeps_descending() {
        let mut adapter = WinitInputAdapter::default();
        let mut session = Session::default();

        adapter.handle_key(KeyCode::ShiftLeft, ElementState::Pressed, false, &mut session);
        adapter.handle_key(KeyCode::ShiftRight, ElementState::Pressed, false, &mut session);
        adapter.handle_key(KeyCode::ShiftRight, ElementState::Released, false, &mut session);
        assert!(session.input().is_down(LogicalKey::Descend));

        adapter.handle_key(KeyCode::ShiftLeft, ElementState::Released, false, &mut session);
        assert!(!session.input().is_down(LogicalKey::Descend));
    }

    #[test]
    fn test_numpad_digit_fires_while_row_digit_held() {
        let mut adapter = WinitInputAdapter::default();
        let mut session = Session::default();

        adapter.handle_key(KeyCode::Digit3, ElementState::Pressed, false, &mut session);
        adapter.handle_key(KeyCode::Digit2, ElementState::Pressed, false, &mut session);
        adapter.handle_key(KeyCode::Digit2, ElementState::Released, false, &mut session);
        adapter.handle_key(KeyCode::Numpad3, ElementState::Pressed, false, &mut session);
        assert_eq!(session.view().render_mode().index(), 3);
    }

    #[test]
    fn test_flashlight_repeat_from_os_does_not_toggle() {
        let mut adapter = WinitInputAdapter::default();
        let mut session = Session::default();

        adapter.handle_key(KeyCode::KeyF, ElementState::Pressed, false, &mut session);
        for _ in 0..5 {
            adapter.handle_key(KeyCode::KeyF, ElementState::Pressed, true, &mut session);
        }
        assert!(session.view().flashlight_on());
    }
}
