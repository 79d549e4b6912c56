use std::num::ParseFloatError;
use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;

use crate::color::Color;
use crate::color::ColorError;
use crate::rule_set::RuleSet;
use crate::rule_set::RuleSetError;

pub const DEFAULT_GRID_SIZE: usize = 50;
pub const DEFAULT_CANVAS_SIZE: u32 = 600;
pub const DEFAULT_LIVE_COLOR: Color = Color::rgb(0x66, 0x66, 0x66);
pub const DEFAULT_DEAD_COLOR: Color = Color::rgb(0xee, 0xee, 0xee);
pub const DEFAULT_LINE_COLOR: Color = Color::rgb(0xcd, 0xcd, 0xcd);
pub const DEFAULT_INITIAL_LIFE_PROBABILITY: f64 = 0.5;
pub const DEFAULT_ANIMATION_RATE: Duration = Duration::from_millis(60);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Grid size must be at least 1")]
    EmptyGrid,

    #[error("Initial life probability {0} is outside [0, 1]")]
    Probability(f64),

    #[error("Unknown option \"{0}\"")]
    UnknownKey(String),

    #[error("Expected key=value, got \"{0}\"")]
    MissingValue(String),

    #[error("Invalid integer for {key}: {source}")]
    Int {
        key: String,
        source: ParseIntError,
    },

    #[error("Invalid number for {key}: {source}")]
    Float {
        key: String,
        source: ParseFloatError,
    },

    #[error("Invalid colour for {key}: {source}")]
    Color { key: String, source: ColorError },

    #[error("Invalid rule: {0}")]
    Rule(#[from] RuleSetError),
}

/// Engine and drawing parameters. Every field has a default; see [`Config::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Side length of the square grid, in cells
    pub grid_size: usize,

    /// Side length of the drawing surface, in pixels
    pub canvas_size: u32,

    pub live_color: Color,
    pub dead_color: Color,

    /// Colour of the lines between cells. Only used by surfaces that draw them.
    pub line_color: Color,

    /// Chance that any given cell starts alive, in `[0, 1]`
    pub initial_life_probability: f64,

    /// Delay between two generations of the tick loop
    pub animation_rate: Duration,

    pub rule: RuleSet,

    /// Seed for the initial grid. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            canvas_size: DEFAULT_CANVAS_SIZE,
            live_color: DEFAULT_LIVE_COLOR,
            dead_color: DEFAULT_DEAD_COLOR,
            line_color: DEFAULT_LINE_COLOR,
            initial_life_probability: DEFAULT_INITIAL_LIFE_PROBABILITY,
            animation_rate: DEFAULT_ANIMATION_RATE,
            rule: RuleSet::default(),
            seed: None,
        }
    }
}

impl Config {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_canvas_size(mut self, canvas_size: u32) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn with_initial_life_probability(mut self, p: f64) -> Self {
        self.initial_life_probability = p;
        self
    }

    pub fn with_animation_rate(mut self, rate: Duration) -> Self {
        self.animation_rate = rate;
        self
    }

    pub fn with_rule(mut self, rule: RuleSet) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pixel side length of one cell on the canvas. Never below 1, so a grid larger than
    /// the canvas spills past its edge instead of vanishing.
    pub fn cell_size(&self) -> u32 {
        let grid = u32::try_from(self.grid_size.max(1)).unwrap_or(u32::MAX);

        (self.canvas_size / grid).max(1)
    }

    /// Check the parameters an engine relies on. Drawing parameters and the animation
    /// rate are accepted as given; a zero rate runs generations back to back.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        let p = self.initial_life_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Probability(p));
        }

        Ok(())
    }

    /// Override a single option by name. Keys are the camelCase names (`gridSize`,
    /// `animationRate`, ...) or their snake_case equivalents. `animationRate` is in
    /// milliseconds.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();

        let int = |v: &str| -> Result<u64, ConfigError> {
            v.parse().map_err(|source| ConfigError::Int {
                key: key.to_string(),
                source,
            })
        };

        let color = |v: &str| -> Result<Color, ConfigError> {
            v.parse().map_err(|source| ConfigError::Color {
                key: key.to_string(),
                source,
            })
        };

        match key {
            "gridSize" | "grid_size" => {
                self.grid_size = value.parse().map_err(|source| ConfigError::Int {
                    key: key.to_string(),
                    source,
                })?;
            }
            "canvasSize" | "canvas_size" => {
                self.canvas_size = value.parse().map_err(|source| ConfigError::Int {
                    key: key.to_string(),
                    source,
                })?;
            }
            "liveColor" | "live_color" => self.live_color = color(value)?,
            "deadColor" | "dead_color" => self.dead_color = color(value)?,
            "lineColor" | "line_color" => self.line_color = color(value)?,
            "initialLifeProbability" | "initial_life_probability" => {
                self.initial_life_probability =
                    value.parse().map_err(|source| ConfigError::Float {
                        key: key.to_string(),
                        source,
                    })?;
            }
            "animationRate" | "animation_rate" => {
                self.animation_rate = Duration::from_millis(int(value)?);
            }
            "rule" => self.rule = value.parse()?,
            "seed" => self.seed = Some(int(value)?),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }

        Ok(())
    }

    /// Apply `key=value` overrides in order. Later keys win.
    pub fn apply_overrides<I, S>(&mut self, overrides: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = Vec::new();

        for arg in overrides {
            let arg = arg.as_ref();
            let Some((key, value)) = arg.split_once('=') else {
                return Err(ConfigError::MissingValue(arg.to_string()));
            };
            let key = key.trim();

            if seen.contains(&key.to_string()) {
                tracing::warn!("Option {key} given more than once. Using latest");
            }
            seen.push(key.to_string());

            self.set(key, value)?;
        }

        Ok(())
    }
}
