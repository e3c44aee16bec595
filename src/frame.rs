use std::time::Instant;

use glam::{DMat4, DVec3};

use crate::camera::CameraPose;
use crate::core::view_params::{RenderMode, ViewParameters};

/// Immutable per-frame copy of camera and view state handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub frame_number: u64,
    pub time_seconds: f64,
    pub camera_position: DVec3,
    pub camera_direction: DVec3,
    pub camera_up: DVec3,
    pub camera_right: DVec3,
    pub view_matrix: DMat4,
    pub scroll_zoom: f64,
    pub render_mode: RenderMode,
    pub flashlight_on: bool,
}

/// Assemble a snapshot. Pure read of `camera` and `view`
pub fn produce(
    camera: &CameraPose,
    view: &ViewParameters,
    time_seconds: f64,
    frame_number: u64,
) -> FrameSnapshot {
    FrameSnapshot {
        frame_number,
        time_seconds,
        camera_position: camera.position(),
        camera_direction: camera.front(),
        camera_up: camera.up(),
        camera_right: camera.right(),
        view_matrix: camera.view_matrix(),
        scroll_zoom: view.scroll_zoom(),
        render_mode: view.render_mode(),
        flashlight_on: view.flashlight_on(),
    }
}

/// Timing for one redraw, relative to when the clock started
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f64,
    /// Seconds since the previous tick
    pub delta: f64,
}

/// Wall clock for the redraw loop
#[derive(Debug)]
pub struct FrameClock {
    ticks: u64,
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            ticks: 0,
            start: now,
            last: now,
        }
    }

    /// Mark the start of a frame
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo {
            number: self.ticks,
            time: now.duration_since(self.start).as_secs_f64(),
            delta: now.duration_since(self.last).as_secs_f64(),
        };
        self.ticks += 1;
        self.last = now;
        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
