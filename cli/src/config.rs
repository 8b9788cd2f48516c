use pushbox_core::{Command, Direction};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_STAGE: &str = "stage.txt";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Key {0:?} is bound more than once")]
    DuplicateKey(char),
    #[error("Whitespace {0:?} cannot be bound, it is skipped when reading keys")]
    WhitespaceKey(char),
}

/// Settings read from the optional TOML config file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub stage: Option<PathBuf>,
    pub color: bool,
    pub keys: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stage: None,
            color: true,
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        config.keys.validate()?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

/// Characters mapped to commands. Anything unbound is a move without displacement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
    pub quit: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: 'w',
            down: 'z',
            left: 'a',
            right: 's',
            quit: 'q',
        }
    }
}

impl KeyBindings {
    pub fn command(&self, key: char) -> Command {
        match key {
            k if k == self.quit => Command::Quit,
            k if k == self.up => Direction::Up.into(),
            k if k == self.down => Direction::Down.into(),
            k if k == self.left => Direction::Left.into(),
            k if k == self.right => Direction::Right.into(),
            _ => Direction::None.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let keys = [self.up, self.down, self.left, self.right, self.quit];
        for (i, key) in keys.iter().enumerate() {
            if key.is_whitespace() {
                return Err(ConfigError::WhitespaceKey(*key));
            }
            if keys[i + 1..].contains(key) {
                return Err(ConfigError::DuplicateKey(*key));
            }
        }
        Ok(())
    }

    pub fn prompt(&self) -> String {
        format!(
            "{}:left {}:right {}:up {}:down {}:quit. command?",
            self.left, self.right, self.up, self.down, self.quit
        )
    }
}
