use glam::{DMat4, DVec3};

use crate::config::CameraConfig;

pub const WORLD_UP: DVec3 = DVec3::Y;

/// Default symmetric pitch bound in degrees
pub const DEFAULT_PITCH_LIMIT: f64 = 89.9;

/// Largest accepted pitch bound. Must stay below 90 so that
/// `front x WORLD_UP` never collapses to zero length.
pub const MAX_PITCH_LIMIT: f64 = 89.99;

/// First-person camera pose. Yaw and pitch are in degrees.
///
/// `front`, `right` and `up` are derived from yaw/pitch and are recomputed on
/// every orientation change, so they always form a right-handed orthonormal
/// basis. Pitch is kept inside `[-pitch_limit, pitch_limit]` with
/// `pitch_limit < 90`, which keeps `front` away from `WORLD_UP`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub(crate) position: DVec3,
    yaw: f64,
    pitch: f64,
    pitch_limit: f64,
    front: DVec3,
    right: DVec3,
    up: DVec3,
}

impl CameraPose {
    pub fn new(position: DVec3, yaw: f64, pitch: f64, pitch_limit: f64) -> Self {
        let pitch_limit = if pitch_limit.is_finite() {
            pitch_limit.abs().min(MAX_PITCH_LIMIT)
        } else {
            DEFAULT_PITCH_LIMIT
        };

        let mut pose = Self {
            position,
            yaw,
            pitch: pitch.clamp(-pitch_limit, pitch_limit),
            pitch_limit,
            front: DVec3::NEG_Z,
            right: DVec3::X,
            up: WORLD_UP,
        };
        pose.update_basis();
        pose
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(
            DVec3::from_array(config.position),
            config.yaw,
            config.pitch,
            config.pitch_limit,
        )
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn pitch_limit(&self) -> f64 {
        self.pitch_limit
    }

    pub fn front(&self) -> DVec3 {
        self.front
    }

    pub fn right(&self) -> DVec3 {
        self.right
    }

    pub fn up(&self) -> DVec3 {
        self.up
    }

    /// `front` projected onto the ground plane, so looking up or down does not
    /// change how fast the camera walks.
    pub fn horizontal_front(&self) -> DVec3 {
        DVec3::new(self.front.x, 0.0, self.front.z).normalize_or_zero()
    }

    /// Rotate by a mouse delta in pixels. Moving the mouse up (negative dy)
    /// looks up. Non-finite deltas are ignored.
    pub fn apply_mouse_delta(&mut self, dx: f64, dy: f64, sensitivity: f64) {
        let (yaw_delta, pitch_delta) = (dx * sensitivity, dy * sensitivity);
        if !yaw_delta.is_finite() || !pitch_delta.is_finite() {
            return;
        }

        self.yaw = (self.yaw + yaw_delta) % 360.0;
        self.pitch = (self.pitch - pitch_delta).clamp(-self.pitch_limit, self.pitch_limit);
        self.update_basis();
    }

    /// Right-handed look-at from `position` toward `position + front`
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = DVec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_pose_looks_toward_origin() {
        let pose = CameraPose::default();
        assert_eq!(pose.position(), DVec3::new(0.0, 2.0, -4.0));
        assert!((pose.front() - DVec3::Z).length() < EPS);
        assert!((pose.right() - DVec3::NEG_X).length() < EPS);
        assert!((pose.up() - DVec3::Y).length() < EPS);
    }

    #[test]
    fn test_mouse_right_turns_right() {
        let mut pose = CameraPose::default();
        let right_before = pose.right();
        pose.apply_mouse_delta(10.0, 0.0, 0.25);
        assert!((pose.yaw() - 92.5).abs() < EPS);
        // New front leans toward the old right vector
        assert!(pose.front().dot(right_before) > 0.0);
    }

    #[test]
    fn test_mouse_up_looks_up() {
        let mut pose = CameraPose::default();
        pose.apply_mouse_delta(0.0, -20.0, 0.25);
        assert!((pose.pitch() - 5.0).abs() < EPS);
        assert!(pose.front().y > 0.0);
    }

    #[test]
    fn test_pitch_clamped_at_limit() {
        let mut pose = CameraPose::default();
        for _ in 0..100 {
            pose.apply_mouse_delta(0.0, -100.0, 0.25);
        }
        assert_eq!(pose.pitch(), DEFAULT_PITCH_LIMIT);
        assert!(pose.right().length() > 0.999);
    }

    #[test]
    fn test_pitch_limit_capped_below_ninety() {
        let pose = CameraPose::new(DVec3::ZERO, 0.0, 90.0, 90.0);
        assert_eq!(pose.pitch_limit(), MAX_PITCH_LIMIT);
        assert_eq!(pose.pitch(), MAX_PITCH_LIMIT);
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let mut pose = CameraPose::default();
        let before = pose;
        pose.apply_mouse_delta(f64::NAN, 1.0, 0.25);
        pose.apply_mouse_delta(1.0, f64::INFINITY, 0.25);
        assert_eq!(pose, before);
    }

    #[test]
    fn test_horizontal_front_ignores_pitch() {
        let pose = CameraPose::new(DVec3::ZERO, 30.0, 60.0, DEFAULT_PITCH_LIMIT);
        let flat = pose.horizontal_front();
        assert_eq!(flat.y, 0.0);
        assert!((flat.length() - 1.0).abs() < EPS);
        let expected = DVec3::new(30f64.to_radians().cos(), 0.0, 30f64.to_radians().sin());
        assert!((flat - expected).length() < EPS);
    }

    #[test]
    fn test_view_matrix_maps_front_to_negative_z() {
        let pose = CameraPose::new(DVec3::new(1.0, 2.0, 3.0), 45.0, 20.0, DEFAULT_PITCH_LIMIT);
        let view = pose.view_matrix();

        let eye = view.transform_point3(pose.position());
        assert!(eye.length() < 1e-9);

        let ahead = view.transform_point3(pose.position() + pose.front());
        assert!((ahead - DVec3::NEG_Z).length() < 1e-9);

        let above = view.transform_vector3(pose.up());
        assert!((above - DVec3::Y).length() < 1e-9);
    }
}
