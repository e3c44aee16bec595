use crate::frame::FrameSnapshot;

/// Per-frame uniform buffer data for the scene shader.
/// Layout matches `View` in `shaders/scene.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    pub position: [f32; 3],
    pub time: f32,
    pub forward: [f32; 3],
    pub scroll_zoom: f32,
    pub right: [f32; 3],
    pub flashlight: f32, // 1.0 = on, -1.0 = off
    pub up: [f32; 3],
    pub render_mode: u32,
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
}

impl ViewUniform {
    pub fn new(snapshot: &FrameSnapshot, resolution: (u32, u32)) -> Self {
        Self {
            position: snapshot.camera_position.as_vec3().to_array(),
            time: snapshot.time_seconds as f32,
            forward: snapshot.camera_direction.as_vec3().to_array(),
            scroll_zoom: snapshot.scroll_zoom as f32,
            right: snapshot.camera_right.as_vec3().to_array(),
            flashlight: if snapshot.flashlight_on { 1.0 } else { -1.0 },
            up: snapshot.camera_up.as_vec3().to_array(),
            render_mode: u32::from(snapshot.render_mode.index()),
            resolution: [resolution.0 as f32, resolution.1 as f32],
            _pad: [0.0; 2],
        }
    }
}
