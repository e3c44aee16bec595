pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod renderer;
pub mod types;
pub mod window;

pub use camera::CameraPose;
pub use config::ViewerConfig;
pub use frame::FrameSnapshot;
