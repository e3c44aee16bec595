use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;

/// Shader render mode. 0 shows the UV map, 1-4 select the anti-aliasing level
/// (samples per pixel axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RenderMode(u8);

impl RenderMode {
    pub const UV: RenderMode = RenderMode(0);
    pub const MAX: u8 = 4;

    pub fn new(index: u8) -> Option<Self> {
        (index <= Self::MAX).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn is_uv(self) -> bool {
        self == Self::UV
    }
}

impl Default for RenderMode {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for RenderMode {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
            .ok_or_else(|| format!("render mode {index} out of range 0..={}", Self::MAX))
    }
}

impl From<RenderMode> for u8 {
    fn from(mode: RenderMode) -> u8 {
        mode.0
    }
}

/// Discrete and scroll-driven view state consumed by the shader
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParameters {
    scroll_zoom: f64,
    render_mode: RenderMode,
    flashlight_on: bool,
}

impl ViewParameters {
    pub fn new() -> Self {
        Self::from_config(&ViewConfig::default())
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            scroll_zoom: config.initial_scroll_zoom.max(1.0),
            render_mode: config.initial_render_mode,
            flashlight_on: false,
        }
    }

    pub fn scroll_zoom(&self) -> f64 {
        self.scroll_zoom
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn flashlight_on(&self) -> bool {
        self.flashlight_on
    }

    /// Zoom never drops below 1.0 and has no ceiling
    pub fn on_scroll(&mut self, y_offset: f64) {
        if !y_offset.is_finite() {
            return;
        }
        self.scroll_zoom = (self.scroll_zoom + y_offset).max(1.0);
        log::debug!("Scroll zoom: {}", self.scroll_zoom);
    }

    /// Call on the press edge only
    pub fn on_render_mode_key(&mut self, mode: RenderMode) {
        if self.render_mode != mode {
            log::info!("Render mode {} -> {}", self.render_mode.index(), mode.index());
        }
        self.render_mode = mode;
    }

    /// Call on the press edge only; a held key must not toggle again
    pub fn on_flashlight_key(&mut self) {
        self.flashlight_on = !self.flashlight_on;
        log::info!("Flashlight {}", if self.flashlight_on { "on" } else { "off" });
    }
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self::new()
    }
}
