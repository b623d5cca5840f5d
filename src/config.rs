use crate::consts;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Game configuration read from the JSON file named on the command line.
///
/// The file describes the playing field once per session; nothing in it can
/// change while the program runs.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub(crate) struct GameConfig {
    /// Field width in pixel units
    pub(crate) width: i32,

    /// Field height in pixel units
    pub(crate) height: i32,

    /// Fixed circular obstructions on the field
    pub(crate) obstacles: Vec<ObstacleConfig>,

    /// How many parties the session may run
    #[serde(default = "default_parties")]
    pub(crate) parties: u32,
}

/// One obstacle entry from the configuration file.  All three fields are
/// required; an entry missing any of them fails the whole load.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub(crate) struct ObstacleConfig {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) color: parse_style::Color,
}

fn default_parties() -> u32 {
    consts::DEFAULT_PARTY_BUDGET
}

impl GameConfig {
    /// Read a configuration from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if its contents could not
    /// be deserialized, or if the field dimensions cannot hold a single grid
    /// square.
    pub(crate) fn load(path: &Path) -> Result<GameConfig, ConfigError> {
        let content = fs_err::read_to_string(path).map_err(ConfigError::Read)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width < consts::BLOCK_SIZE || self.height < consts::BLOCK_SIZE {
            return Err(ConfigError::FieldTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.parties == 0 {
            return Err(ConfigError::NoParties);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read configuration file")]
    Read(#[source] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] serde_json::Error),
    #[error(
        "{width}x{height} field cannot fit a single {size}x{size} square",
        size = consts::BLOCK_SIZE
    )]
    FieldTooSmall { width: i32, height: i32 },
    #[error("\"parties\" must be at least 1")]
    NoParties,
}
