use crate::error::Error;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCREEN_WIDTH: f64 = 800.0;
pub const DEFAULT_SCREEN_HEIGHT: f64 = 600.0;
pub const DEFAULT_MAX_FPS: u32 = 60;

/// Screen dimensions and frame rate shared by every entity in a game.
///
/// Entities receive a copy at construction instead of reading globals, so
/// two simulations with different screens can coexist.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: f64,
    pub height: f64,
    pub max_fps: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
            max_fps: DEFAULT_MAX_FPS,
        }
    }
}

impl ScreenConfig {
    pub fn new(width: f64, height: f64) -> Result<Self, Error> {
        let config = Self {
            width,
            height,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: ScreenConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::new(format!(
                "Screen width must be positive and finite, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::new(format!(
                "Screen height must be positive and finite, got {}",
                self.height
            )));
        }
        if self.max_fps == 0 {
            return Err(Error::new("max_fps must be non-zero"));
        }
        Ok(())
    }

    /// Seconds per simulation tick.
    pub fn tick_length(&self) -> f64 {
        1.0 / self.max_fps as f64
    }
}
