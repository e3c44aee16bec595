use std::collections::HashMap;

use crate::camera::CameraPose;
use crate::config::ViewerConfig;
use crate::frame::{self, FrameSnapshot};

use super::bindings::KeyCommand;
use super::controller::{KeyAction, Modifiers};
use super::input_state::InputState;
use super::motion::MotionIntegrator;
use super::view_params::ViewParameters;

/// One viewer session: exclusively owns camera, input and view state.
///
/// Events mutate state immediately, so everything delivered before a frame
/// is visible to that frame's `on_render_frame`. Single-threaded; the
/// windowing event loop drives both paths.
#[derive(Debug, Clone)]
pub struct Session {
    camera: CameraPose,
    input: InputState,
    view: ViewParameters,
    motion: MotionIntegrator,
    mouse_sensitivity: f64,
    /// Every key currently held and the command it is bound to
    held: HashMap<KeySource, KeyCommand>,
    frames: u64,
}

/// Whatever is holding a command down
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeySource {
    /// Physical key, by its bindings table name
    Key(String),
    /// Command delivered without a physical key
    Command(KeyCommand),
}

impl Session {
    /// Fresh session state built from `config`; nothing is shared between sessions
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            camera: CameraPose::from_config(&config.camera),
            input: InputState::new(),
            view: ViewParameters::from_config(&config.view),
            motion: MotionIntegrator::new(config.motion),
            mouse_sensitivity: config.camera.mouse_sensitivity,
            held: HashMap::new(),
            frames: 0,
        }
    }

    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn view(&self) -> &ViewParameters {
        &self.view
    }

    /// Frames produced so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Route a key event for `command`. Movement keys track held state;
    /// render mode and flashlight fire once per press and ignore repeats.
    pub fn on_key(&mut self, command: KeyCommand, action: KeyAction, modifiers: Modifiers) {
        self.route_key(KeySource::Command(command), command, action, modifiers);
    }

    /// Like `on_key`, for an event from the physical key `key_name`.
    ///
    /// Keys bound to the same command are held independently: a movement key
    /// stays down until every key bound to it is released, and each key's
    /// press is an edge of its own.
    pub fn on_bound_key(
        &mut self,
        key_name: &str,
        command: KeyCommand,
        action: KeyAction,
        modifiers: Modifiers,
    ) {
        self.route_key(KeySource::Key(key_name.to_string()), command, action, modifiers);
    }

    pub fn on_modifiers(&mut self, modifiers: Modifiers) {
        self.input.set_modifiers(modifiers);
    }

    /// Relative mouse motion in pixels
    pub fn on_mouse_move(&mut self, dx: f64, dy: f64) {
        self.camera.apply_mouse_delta(dx, dy, self.mouse_sensitivity);
    }

    /// Vertical scroll in lines
    pub fn on_scroll(&mut self, y_offset: f64) {
        self.view.on_scroll(y_offset);
    }

    /// Release everything held. Key-up events are not delivered to an
    /// unfocused window, so held keys would otherwise stick.
    pub fn on_focus_lost(&mut self) {
        if !self.held.is_empty() {
            log::debug!("Focus lost, releasing {} held keys", self.held.len());
        }
        self.input.clear();
        self.held.clear();
    }

    /// Advance motion by one frame, then snapshot the result
    pub fn on_render_frame(&mut self, time_seconds: f64) -> FrameSnapshot {
        self.motion.step(&self.input, &mut self.camera);
        let snapshot = frame::produce(&self.camera, &self.view, time_seconds, self.frames);
        self.frames += 1;
        snapshot
    }

    fn route_key(
        &mut self,
        source: KeySource,
        command: KeyCommand,
        action: KeyAction,
        modifiers: Modifiers,
    ) {
        self.input.set_modifiers(modifiers);
        if command == KeyCommand::Quit {
            return;
        }

        // A second press from a key already down is a lost release, not an edge
        let edge = match action {
            KeyAction::Press => self.held.insert(source, command).is_none(),
            KeyAction::Repeat => {
                if matches!(command, KeyCommand::Move(_)) {
                    self.held.entry(source).or_insert(command);
                }
                false
            }
            KeyAction::Release => {
                self.held.remove(&source);
                false
            }
        };

        match command {
            KeyCommand::Move(key) => {
                let down = self.held.values().any(|&held| held == command);
                self.input.set_key(key, down);
            }
            KeyCommand::RenderMode(mode) if edge => self.view.on_render_mode_key(mode),
            KeyCommand::ToggleFlashlight if edge => self.view.on_flashlight_key(),
            _ => {}
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}
