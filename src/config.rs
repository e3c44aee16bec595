//! Viewer configuration with JSON file support.
//!
//! Every section uses `#[serde(default)]`, so a partial file (for example one
//! that only overrides `motion.fast_speed`) is valid.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_PITCH_LIMIT, MAX_PITCH_LIMIT};
use crate::cli::Cli;
use crate::core::bindings::KeyCommand;
use crate::core::view_params::RenderMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    /// Lock and hide the cursor so mouse motion drives the camera
    pub grab_cursor: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "SDF Viewer".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            grab_cursor: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f64; 3],
    /// Degrees; 90 looks along +Z
    pub yaw: f64,
    /// Degrees
    pub pitch: f64,
    /// Symmetric pitch bound in degrees, capped below 90
    pub pitch_limit: f64,
    /// Degrees of rotation per pixel of mouse motion
    pub mouse_sensitivity: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 2.0, -4.0],
            yaw: 90.0,
            pitch: 0.0,
            pitch_limit: DEFAULT_PITCH_LIMIT,
            mouse_sensitivity: 0.25,
        }
    }
}

/// Movement speeds in world units per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub base_speed: f64,
    /// Used while ctrl is held
    pub fast_speed: f64,
    /// Used while alt is held (and ctrl is not)
    pub slow_speed: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.08,
            fast_speed: 0.3,
            slow_speed: 0.005,
        }
    }
}

impl MotionConfig {
    /// Non-finite speeds fall back to `defaults`; negative speeds become 0
    fn validated(self, defaults: MotionConfig) -> Self {
        let speed = |value: f64, default: f64| {
            if value.is_finite() {
                value.max(0.0)
            } else {
                default
            }
        };
        Self {
            base_speed: speed(self.base_speed, defaults.base_speed),
            fast_speed: speed(self.fast_speed, defaults.fast_speed),
            slow_speed: speed(self.slow_speed, defaults.slow_speed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub initial_render_mode: RenderMode,
    pub initial_scroll_zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_render_mode: RenderMode::default(),
            initial_scroll_zoom: 1.0,
        }
    }
}

/// Top-level configuration. A fresh session is built from this on every start.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub motion: MotionConfig,
    pub view: ViewConfig,
    /// Key name (winit `KeyCode` debug name, e.g. `"KeyW"`) to command.
    /// Entries are layered on top of the default bindings.
    pub keybindings: HashMap<String, KeyCommand>,
}

impl ViewerConfig {
    /// Load a configuration from a JSON file. Missing fields use defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: ViewerConfig = serde_json::from_str(content)?;
        Ok(config.validated())
    }

    /// Resolve the configuration for a run: optional file, then CLI overrides
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load(path)?
            }
            None => Self::default(),
        };

        if let Some(width) = cli.width {
            config.window.width = width;
        }
        if let Some(height) = cli.height {
            config.window.height = height;
        }
        if cli.fullscreen {
            config.window.fullscreen = true;
        }
        if cli.no_grab {
            config.window.grab_cursor = false;
        }

        Ok(config.validated())
    }

    /// Pull out-of-range values back into range instead of rejecting them
    pub fn validated(mut self) -> Self {
        let defaults = ViewerConfig::default();

        if !self.camera.pitch_limit.is_finite() {
            self.camera.pitch_limit = defaults.camera.pitch_limit;
        }
        self.camera.pitch_limit = self.camera.pitch_limit.abs().min(MAX_PITCH_LIMIT);

        if !self.camera.mouse_sensitivity.is_finite() {
            self.camera.mouse_sensitivity = defaults.camera.mouse_sensitivity;
        }
        if !self.view.initial_scroll_zoom.is_finite() {
            self.view.initial_scroll_zoom = defaults.view.initial_scroll_zoom;
        }
        self.view.initial_scroll_zoom = self.view.initial_scroll_zoom.max(1.0);

        self.motion = self.motion.validated(defaults.motion);

        self.window.width = self.window.width.max(1);
        self.window.height = self.window.height.max(1);
        self
    }
}
