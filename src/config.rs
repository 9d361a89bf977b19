use crate::grid::Board;
use crate::timing::TickRate;
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Startup settings. Every field is optional in the JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: u32,
    pub screen_height: u32,
    pub grid_size: u32,
    /// Initial ticks per second.
    pub speed: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { screen_width: 800, screen_height: 600, grid_size: 20, speed: TickRate::DEFAULT }
    }
}

impl Settings {
    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                Self::from_json(&text).with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size > 0, "grid_size must be positive");
        ensure!(
            self.screen_width % self.grid_size == 0 && self.screen_height % self.grid_size == 0,
            "screen {}x{} is not a multiple of grid_size {}",
            self.screen_width,
            self.screen_height,
            self.grid_size
        );
        ensure!(
            self.screen_width / self.grid_size >= 2 && self.screen_height / self.grid_size >= 2,
            "screen {}x{} holds fewer than 2x2 cells",
            self.screen_width,
            self.screen_height
        );
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.screen_width / self.grid_size, self.screen_height / self.grid_size, self.grid_size)
    }

    pub fn tick_rate(&self) -> TickRate {
        TickRate::new(self.speed)
    }
}
