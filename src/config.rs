use clap::Args;
use serde::{Deserialize, Serialize};

pub const DEFAULT_KEY_WIDTH: f32 = 15.0;
pub const DEFAULT_SPACE_WIDTH: f32 = 25.0 / 6.0;

/// Physical dimensions shared by every key on a keyboard.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryParams {
    /// Width of a basic key
    #[arg(long, default_value_t = DEFAULT_KEY_WIDTH)]
    pub key_width: f32,
    /// Gap between two adjacent keys
    #[arg(long, default_value_t = DEFAULT_SPACE_WIDTH)]
    pub space_width: f32,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            key_width: DEFAULT_KEY_WIDTH,
            space_width: DEFAULT_SPACE_WIDTH,
        }
    }
}
