// sqlscan - context-sensitive scanning of interactive SQL input.
// Copyright (C) 2025 Free Software Foundation, Inc.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

use std::{
    fs::read_to_string,
    io::Error as IoError,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct Settings {
    /// Recognize `$tag$...$tag$` strings.  When false, `$` is an ordinary
    /// character.
    pub dollar_quoting: bool,

    /// Name shown before the prompt marker, as in `sqlscan=>`.
    pub prompt_name: String,

    /// Answer `help` typed at the start of a statement instead of treating it
    /// as statement text.
    pub help_on_empty_buffer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dollar_quoting: true,
            prompt_name: String::from("sqlscan"),
            help_on_empty_buffer: true,
        }
    }
}

#[derive(Debug, ThisError)]
pub enum SettingsError {
    #[error("{}: read failed ({source})", path.display())]
    Read { path: PathBuf, source: IoError },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Settings {
    /// Parses settings from TOML.  Keys that are absent keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads settings from the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let s = read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&s)?;
        log::debug!("{}: loaded {settings:?}", path.display());
        Ok(settings)
    }
}
