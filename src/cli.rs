// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "sdf-viewer")]
#[command(about = "Real-time SDF scene viewer with a first-person camera", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Start in borderless fullscreen
    #[arg(long, default_value = "false")]
    pub fullscreen: bool,

    /// Do not lock the cursor to the window
    #[arg(long = "no-grab", default_value = "false")]
    pub no_grab: bool,

    /// Disable periodic FPS output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
