use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Gameplay tuning values
    pub(crate) tuning: Tuning,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("trailsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if its contents could not
    /// be deserialized, or if the tuning values are invalid.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config: Config = toml::from_str(&content)?;
        config.tuning.validate()?;
        Ok(config)
    }
}

/// Tunable gameplay constants.  Every field has a fixed default from
/// [`crate::consts`]; a `[tuning]` table in the configuration file overrides
/// them per run.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Tuning {
    /// Distance the head travels each tick
    pub(crate) speed: f64,

    /// Number of past positions a segment retains before relaying one to its
    /// child
    pub(crate) trail_capacity: usize,

    /// Number of segments appended per food consumed
    pub(crate) chunk_size: usize,

    /// Time between simulation ticks, in milliseconds
    pub(crate) tick_period_ms: u64,

    /// Width of the play area
    pub(crate) area_width: f64,

    /// Height of the play area
    pub(crate) area_height: f64,

    /// Diameter of the head and of each body segment
    pub(crate) snake_diameter: f64,

    /// Diameter of the food
    pub(crate) food_diameter: f64,
}

impl Tuning {
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Number of chain slots nearest the head excluded from the
    /// self-collision check.  Scales with the chunk size so that a freshly
    /// appended chunk, still stacked on the tail, can never register as a
    /// collision.
    pub(crate) fn self_skip(&self) -> usize {
        self.chunk_size * consts::SELF_SKIP_FACTOR
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::invalid("speed must be positive"));
        }
        if self.trail_capacity == 0 {
            return Err(ConfigError::invalid("trail-capacity must be at least 1"));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::invalid("chunk-size must be at least 1"));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::invalid("tick-period-ms must be at least 1"));
        }
        for (name, diameter) in [
            ("snake-diameter", self.snake_diameter),
            ("food-diameter", self.food_diameter),
        ] {
            if !(diameter.is_finite() && diameter > 0.0) {
                return Err(ConfigError::invalid(format!("{name} must be positive")));
            }
        }
        for (name, extent) in [
            ("area-width", self.area_width),
            ("area-height", self.area_height),
        ] {
            if !extent.is_finite() {
                return Err(ConfigError::invalid(format!("{name} must be finite")));
            }
            if extent <= self.food_diameter * 2.0 || extent <= self.snake_diameter * 2.0 {
                return Err(ConfigError::invalid(format!(
                    "{name} too small for the configured diameters"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Tuning {
    fn default() -> Tuning {
        Tuning {
            speed: consts::SPEED,
            trail_capacity: consts::TRAIL_CAPACITY,
            chunk_size: consts::CHUNK_SIZE,
            tick_period_ms: consts::TICK_PERIOD_MS,
            area_width: consts::AREA_WIDTH,
            area_height: consts::AREA_HEIGHT,
            snake_diameter: consts::SNAKE_DIAMETER,
            food_diameter: consts::FOOD_DIAMETER,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    fn invalid<S: Into<String>>(msg: S) -> ConfigError {
        ConfigError::Invalid(msg.into())
    }
}
