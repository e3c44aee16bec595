use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Fullscreen, Window as WinitWindow, WindowId},
};

use sdf_viewer::cli::Cli;
use sdf_viewer::config::ViewerConfig;
use sdf_viewer::core::{InputOutcome, KeyBindings, Session, WinitInputAdapter};
use sdf_viewer::frame::FrameClock;
use sdf_viewer::renderer::ShaderRenderer;
use sdf_viewer::window::Window;

// === Constants ===

const FPS_UPDATE_INTERVAL: f64 = 1.0;

// === Application ===

struct App {
    config: ViewerConfig,
    show_fps: bool,
    window: Option<Window>,
    renderer: Option<ShaderRenderer>,
    session: Session,
    input: WinitInputAdapter,
    clock: FrameClock,
    frame_count: u32,
    fps: f64,
    fps_update_timer: f64,
}

impl App {
    fn new(config: ViewerConfig, show_fps: bool) -> Self {
        let session = Session::new(&config);
        let input = WinitInputAdapter::new(KeyBindings::with_overrides(&config.keybindings));
        Self {
            config,
            show_fps,
            window: None,
            renderer: None,
            session,
            input,
            clock: FrameClock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f64, frame_number: u64) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f64 / self.fps_update_timer;
            if self.show_fps {
                log::info!("FPS: {:.1} (frame {})", self.fps, frame_number);
            }
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.clock.tick();
        self.update_fps(frame.delta, frame.number);

        let snapshot = self.session.on_render_frame(frame.time);

        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            match window.draw(renderer, &snapshot) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {}", e),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_config = &self.config.window;
        let attributes = WinitWindow::default_attributes()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width,
                window_config.height,
            ))
            .with_fullscreen(
                window_config
                    .fullscreen
                    .then(|| Fullscreen::Borderless(None)),
            );

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(ShaderRenderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let window = Window::new(window);
        window.grab_cursor(self.config.window.grab_cursor);

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            WindowEvent::Focused(true) => {
                if let Some(window) = &self.window {
                    window.grab_cursor(self.config.window.grab_cursor);
                }
            }
            event => {
                if self.input.process_window_event(&event, &mut self.session) == InputOutcome::Quit {
                    log::info!("Quit requested");
                    event_loop.exit();
                }
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.input.process_device_event(&event, &mut self.session);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ViewerConfig::resolve(&cli)?;

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config, !cli.no_ui);

    println!(
        "SDF Viewer - Controls: WASD move, Space/Shift up/down, Ctrl fast, Alt slow, \
         mouse look, scroll zoom, 0-4 render mode, F flashlight, Escape to quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
