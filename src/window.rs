use std::sync::Arc;

use winit::window::{CursorGrabMode, Window as WinitWindow};

use crate::frame::FrameSnapshot;
use crate::renderer::ShaderRenderer;
use crate::types::ViewUniform;

/// Wrapper around the winit window with an imperative draw API
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    /// Bind the snapshot as the view uniform and draw one frame
    pub fn draw(
        &self,
        renderer: &mut ShaderRenderer,
        snapshot: &FrameSnapshot,
    ) -> Result<(), wgpu::SurfaceError> {
        let size = renderer.size();
        let uniform = ViewUniform::new(snapshot, (size.width, size.height));
        renderer.render(&uniform)
    }

    /// Lock the cursor to the window and hide it, so relative mouse motion
    /// drives the camera. Falls back to confining when locking is unsupported.
    pub fn grab_cursor(&self, grab: bool) {
        if grab {
            let grabbed = self
                .inner
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.inner.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                log::warn!("Failed to grab cursor: {}", e);
            }
        } else if let Err(e) = self.inner.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Failed to release cursor: {}", e);
        }
        self.inner.set_cursor_visible(!grab);
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}
