use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::draw::TileSize;
use super::error::ConfigError;
use super::matrix::Rotation;
use super::piece::Position;

// ============================================================================
// Defaults
// ============================================================================

pub const GRID_WIDTH: usize = 16;
pub const GRID_HEIGHT: usize = 16;
pub const SPAWN_X: i32 = 7;
pub const SPAWN_Y: i32 = 0;
pub const TICK_MS: u64 = 1000;

pub const ENV_WIDTH: &str = "STONES_WIDTH";
pub const ENV_HEIGHT: &str = "STONES_HEIGHT";
pub const ENV_TICK_MS: &str = "STONES_TICK_MS";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub spawn: Position,
    pub tick: Duration,
    pub tile: TileSize,
    /// Direction applied by the `turn` input.
    pub turn: Rotation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            spawn: Position::new(SPAWN_X, SPAWN_Y),
            tick: Duration::from_millis(TICK_MS),
            tile: TileSize::UNIT,
            turn: Rotation::Clockwise,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.spawn.x < 0 || self.spawn.x >= self.width as i32 {
            return Err(ConfigError::SpawnOutOfBounds {
                x: self.spawn.x,
                width: self.width,
            });
        }
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }

    /// Defaults overlaid with `STONES_WIDTH`, `STONES_HEIGHT` and
    /// `STONES_TICK_MS` where set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(width) = read_var(ENV_WIDTH)? {
            config.width = width;
        }
        if let Some(height) = read_var(ENV_HEIGHT)? {
            config.height = height;
        }
        if let Some(ms) = read_var::<u64>(ENV_TICK_MS)? {
            config.tick = Duration::from_millis(ms);
        }

        config.validate()?;
        Ok(config)
    }
}

fn read_var<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn spawn_outside_grid_is_rejected() {
        let config = Config {
            width: 4,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnOutOfBounds { x: 7, width: 4 })
        );
    }

    #[test]
    fn zero_tick_is_rejected() {
        let config = Config {
            tick: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTick));
    }
}
