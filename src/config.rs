/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Huntgen.

Huntgen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Huntgen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Huntgen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Build constants and the optional settings file.
//!
//! The settings file is a JSON object with any of the following keys:
//!
//! ```json
//! {
//!     "layer_size": 5,
//!     "deadline": "31.08.2025",
//!     "finish_message": "You made it!",
//!     "footer": "Please leave this sheet in place until {deadline}.",
//!     "output_dir": "cards",
//!     "compile": true
//! }
//! ```
//!
//! Command-line options take precedence over the values from the file.

use log::debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use chrono::{Days, Local, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>"
);

/// Letters used in card codes.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest number of cards per layer.
pub const MIN_LAYER_SIZE: usize = 3;

/// Largest number of cards per layer.
pub const MAX_LAYER_SIZE: usize = 20;

pub const DEFAULT_LAYER_SIZE: usize = 5;

pub const DEFAULT_OUTPUT_DIR: &str = "output";

pub const DEFAULT_FINISH_MESSAGE: &str = "You have reached the finish. Congratulations! Go back to the base and report your return to an organizer so that your time can be recorded.";

/// Text printed at the bottom of question cards. `{deadline}` is replaced by the deadline.
pub const DEFAULT_FOOTER: &str = "This sheet is part of a treasure hunt game. Please do not remove it; it will be taken down by {deadline} at the latest.";

/// Number of days between today and the default deadline.
pub const DEFAULT_DEADLINE_DAYS: u64 = 14;

/// Format of the default deadline.
pub const DEADLINE_FORMAT: &str = "%d.%m.%Y";

/// LaTeX compiler used with the `--compile` option.
pub const TEX_COMPILER: &str = "pdflatex";

/// Max duration for compiling one card.
pub const COMPILE_TIMEOUT_SEC: u64 = 60;

/// Type of errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read the settings file {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid settings file {path:?}: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Values from the settings file. Missing keys are None.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub layer_size: Option<usize>,
    pub deadline: Option<String>,
    pub finish_message: Option<String>,
    pub footer: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub compile: Option<bool>,
}

impl Settings {
    /// Load the settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Settings file: {path:?}");
        let file: File = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader: BufReader<File> = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigError::Format {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Return the deadline printed on the cards when none is given: today plus
/// [`DEFAULT_DEADLINE_DAYS`] days.
pub fn default_deadline() -> String {
    deadline_from(Local::now().date_naive())
}

fn deadline_from(today: NaiveDate) -> String {
    today
        .checked_add_days(Days::new(DEFAULT_DEADLINE_DAYS))
        .unwrap_or(today)
        .format(DEADLINE_FORMAT)
        .to_string()
}
