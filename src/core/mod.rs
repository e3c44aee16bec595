pub mod bindings;
pub mod controller;
pub mod input_adapter;
pub mod input_state;
pub mod motion;
pub mod session;
pub mod view_params;

pub use bindings::{KeyBindings, KeyCommand};
pub use controller::{Controller, KeyAction, LogicalKey, Modifier, Modifiers};
pub use input_adapter::{InputOutcome, WinitInputAdapter};
pub use input_state::InputState;
pub use motion::MotionIntegrator;
pub use session::Session;
pub use view_params::{RenderMode, ViewParameters};
