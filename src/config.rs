// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::board::{Board, LayoutParseError, SymbolStyle};

/// Settings for the console host, read from a JSON file. Every key is
/// optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How pieces are drawn.
    pub symbols: SymbolStyle,

    /// Print every reachable square after a piece is selected.
    pub show_destinations: bool,

    /// Layout to start new games from instead of the standard position.
    pub start_layout: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Json(serde_json::Error),
    Layout(LayoutParseError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config: {}", err),
            ConfigError::Json(err) => write!(f, "malformed config: {}", err),
            ConfigError::Layout(err) => write!(f, "bad start_layout: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}

impl From<LayoutParseError> for ConfigError {
    fn from(err: LayoutParseError) -> ConfigError {
        ConfigError::Layout(err)
    }
}

impl Config {
    pub fn from_reader<R: Read>(reader: R) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_reader(reader)?;
        // reject a bad layout up front rather than on the first new game.
        config.start_board()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        Config::from_reader(file)
    }

    /// Like `load`, but a missing file yields the defaults. A file that
    /// exists and cannot be read or parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        match Config::load(path) {
            Err(ConfigError::Io(ref err)) if err.kind() == io::ErrorKind::NotFound => {
                Ok(Config::default())
            }
            result => result,
        }
    }

    /// The position new games start from.
    pub fn start_board(&self) -> Result<Board, LayoutParseError> {
        match &self.start_layout {
            Some(layout) => Board::from_layout(layout),
            None => Ok(Board::initial_setup()),
        }
    }
}
