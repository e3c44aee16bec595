use glam::DVec3;

use crate::camera::{CameraPose, WORLD_UP};
use crate::config::MotionConfig;

use super::controller::{Controller, LogicalKey, Modifiers};

/// Integrates held movement keys into the camera position once per frame.
///
/// Speeds are in world units per frame. Every held key contributes its own
/// displacement and the sum is not normalized, so diagonal movement is
/// faster than straight movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionIntegrator {
    config: MotionConfig,
}

impl MotionIntegrator {
    pub fn new(config: MotionConfig) -> Self {
        Self { config }
    }

    /// Ctrl beats alt beats base; ctrl+alt resolves to the fast speed
    pub fn speed(&self, modifiers: Modifiers) -> f64 {
        if modifiers.ctrl {
            self.config.fast_speed
        } else if modifiers.alt {
            self.config.slow_speed
        } else {
            self.config.base_speed
        }
    }

    /// Unit direction a single key moves the camera in
    pub fn key_axis(key: LogicalKey, pose: &CameraPose) -> DVec3 {
        match key {
            LogicalKey::Forward => pose.horizontal_front(),
            LogicalKey::Back => -pose.horizontal_front(),
            LogicalKey::Right => pose.right(),
            LogicalKey::Left => -pose.right(),
            LogicalKey::Ascend => WORLD_UP,
            LogicalKey::Descend => -WORLD_UP,
        }
    }

    /// Displacement for one frame without applying it
    pub fn displacement<C: Controller>(&self, input: &C, pose: &CameraPose) -> DVec3 {
        let speed = self.speed(input.modifiers());
        LogicalKey::ALL
            .iter()
            .filter(|&&key| input.is_down(key))
            .map(|&key| Self::key_axis(key, pose) * speed)
            .sum()
    }

    /// Advance the camera by one frame. Returns the applied displacement
    pub fn step<C: Controller>(&self, input: &C, pose: &mut CameraPose) -> DVec3 {
        let displacement = self.displacement(input, pose);
        pose.position += displacement;
        displacement
    }
}

impl Default for MotionIntegrator {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}
