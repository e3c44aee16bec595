use glam::DVec3;
use sdf_viewer::camera::{CameraPose, DEFAULT_PITCH_LIMIT, MAX_PITCH_LIMIT};

const EPSILON: f64 = 1e-6;

fn assert_orthonormal(pose: &CameraPose) {
    let (front, right, up) = (pose.front(), pose.right(), pose.up());
    assert!((front.length() - 1.0).abs() < EPSILON, "front not unit: {:?}", front);
    assert!((right.length() - 1.0).abs() < EPSILON, "right not unit: {:?}", right);
    assert!((up.length() - 1.0).abs() < EPSILON, "up not unit: {:?}", up);
    assert!(front.dot(right).abs() < EPSILON);
    assert!(front.dot(up).abs() < EPSILON);
    assert!(right.dot(up).abs() < EPSILON);
}

#[cfg(test)]
mod basis_tests {
    use super::*;

    #[test]
    fn test_basis_orthonormal_across_orientations() {
        for yaw_step in 0..24 {
            for pitch_step in -8..=8 {
                let yaw = yaw_step as f64 * 15.0;
                let pitch = pitch_step as f64 * 11.2;
                let pose = CameraPose::new(DVec3::ZERO, yaw, pitch, DEFAULT_PITCH_LIMIT);
                assert_orthonormal(&pose);
            }
        }
    }

    #[test]
    fn test_basis_orthonormal_after_mouse_sweep() {
        let mut pose = CameraPose::default();
        for i in 0..500 {
            let dx = ((i * 37) % 101) as f64 - 50.0;
            let dy = ((i * 53) % 97) as f64 - 48.0;
            pose.apply_mouse_delta(dx, dy, 0.25);
            assert_orthonormal(&pose);
        }
    }

    #[test]
    fn test_up_has_non_negative_world_y() {
        let pose = CameraPose::new(DVec3::ZERO, 30.0, 60.0, DEFAULT_PITCH_LIMIT);
        assert!(pose.up().y > 0.0);
    }

    #[test]
    fn test_default_pose_looks_down_positive_z() {
        let pose = CameraPose::default();
        assert_eq!(pose.position(), DVec3::new(0.0, 2.0, -4.0));
        assert!((pose.front() - DVec3::Z).length() < EPSILON);
    }
}

#[cfg(test)]
mod pitch_tests {
    use super::*;

    #[test]
    fn test_large_upward_drag_clamps_pitch() {
        let mut pose = CameraPose::default();
        pose.apply_mouse_delta(0.0, -100_000.0, 0.25);
        assert_eq!(pose.pitch(), DEFAULT_PITCH_LIMIT);
        assert_orthonormal(&pose);
    }

    #[test]
    fn test_large_downward_drag_clamps_pitch() {
        let mut pose = CameraPose::default();
        pose.apply_mouse_delta(0.0, 100_000.0, 0.25);
        assert_eq!(pose.pitch(), -DEFAULT_PITCH_LIMIT);
        assert_orthonormal(&pose);
    }

    #[test]
    fn test_pitch_limit_capped_below_vertical() {
        let pose = CameraPose::new(DVec3::ZERO, 0.0, 90.0, 90.0);
        assert_eq!(pose.pitch_limit(), MAX_PITCH_LIMIT);
        assert!(pose.pitch() < 90.0);
        assert_orthonormal(&pose);
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let mut pose = CameraPose::default();
        let before = pose;
        pose.apply_mouse_delta(f64::NAN, 1.0, 0.25);
        pose.apply_mouse_delta(1.0, f64::INFINITY, 0.25);
        assert_eq!(pose.yaw(), before.yaw());
        assert_eq!(pose.pitch(), before.pitch());
    }
}
