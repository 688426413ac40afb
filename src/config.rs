use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::palette::{Background, PaletteColor};

/// Width of every rendered stroke unless configured otherwise
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;

/// Startup settings for the board.
///
/// Missing fields fall back to their defaults when deserializing, so a host
/// only has to spell out what it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub stroke_width: f32,
    pub initial_color: PaletteColor,
    pub initial_background: Background,
    /// Inner size of the native window, in points
    pub window_size: [f32; 2],
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            initial_color: PaletteColor::Black,
            initial_background: Background::Light,
            window_size: [400.0, 720.0],
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> BoardResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BoardResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(BoardError::InvalidStrokeWidth(self.stroke_width));
        }
        Ok(())
    }
}
