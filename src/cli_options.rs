/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate the cards for the questions in `questions.txt`, five cards per layer, and compile them
//! into PDF files in the `output` directory:
//!
//! ```text
//! $ huntgen -l 5 -d 31.08.2025 --compile questions.txt
//! ```
//!
//! Print the scheme that a given seed produces, without writing any file:
//!
//! ```text
//! $ huntgen -l 4 -s 1234 --dry-run questions.txt
//! Layer 1 (4 cards)
//!   KD  -> TB | QW HA  Who wrote "The Hobbit"?
//!   ...
//! Finish
//!   VU  You have reached the finish. Congratulations! ...
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::error::Error;
use std::path::PathBuf;

use crate::application::{self, RunOptions};
use crate::config::{
    COPYRIGHT_NOTICE, DEFAULT_FINISH_MESSAGE, DEFAULT_FOOTER, DEFAULT_LAYER_SIZE,
    DEFAULT_OUTPUT_DIR, Settings, default_deadline,
};

/// Generate the printable cards of a treasure hunt from a list of questions.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Questions file: each question followed by its correct answer and two wrong answers
    input: PathBuf,

    /// Number of cards per layer (3 to 20)
    #[arg(short, long)]
    layer_size: Option<usize>,

    /// Date until which the cards stay up, printed at the bottom of each card
    #[arg(short, long)]
    deadline: Option<String>,

    /// Directory for the generated files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for the random generator, to reproduce a previous hunt
    #[arg(short, long)]
    seed: Option<u64>,

    /// Message printed on the finish card
    #[arg(short = 'm', long)]
    finish_message: Option<String>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Compile the cards into PDF files with pdflatex
    #[arg(long, default_value_t = false)]
    compile: bool,

    /// Print the scheme instead of writing the cards
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Merge the options with the settings file. Options win over the file, and the file wins
    /// over the built-in defaults.
    fn into_run_options(self, settings: Settings) -> RunOptions {
        RunOptions {
            input: self.input,
            layer_size: self
                .layer_size
                .or(settings.layer_size)
                .unwrap_or(DEFAULT_LAYER_SIZE),
            deadline: self
                .deadline
                .or(settings.deadline)
                .unwrap_or_else(default_deadline),
            finish_message: self
                .finish_message
                .or(settings.finish_message)
                .unwrap_or_else(|| DEFAULT_FINISH_MESSAGE.to_string()),
            footer: settings
                .footer
                .unwrap_or_else(|| DEFAULT_FOOTER.to_string()),
            output_dir: self
                .output
                .or(settings.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            seed: self.seed,
            compile: self.compile || settings.compile.unwrap_or(false),
            dry_run: self.dry_run,
        }
    }
}

/// Parse the command-line options, run the generation, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match run_args(args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Load the settings file, if any, and run the generation.
///
/// Settings and generation errors are both returned to [`parse`], which reports them.
fn run_args(args: Args) -> Result<(), Box<dyn Error>> {
    let settings: Settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let options: RunOptions = args.into_run_options(settings);
    debug!("Options: {options:?}");
    application::run(&options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::ffi::OsStr;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["huntgen", "questions.txt"]).unwrap();
        let options = args.into_run_options(Settings::default());

        assert_eq!(options.input, PathBuf::from("questions.txt"));
        assert_eq!(options.layer_size, DEFAULT_LAYER_SIZE);
        assert_eq!(options.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(options.finish_message, DEFAULT_FINISH_MESSAGE);
        assert_eq!(options.footer, DEFAULT_FOOTER);
        assert_eq!(options.deadline.len(), "01.01.2025".len());
        assert!(options.seed.is_none());
        assert!(!options.compile);
        assert!(!options.dry_run);
    }

    #[test]
    fn test_options_override_settings() {
        let args = Args::try_parse_from([
            "huntgen", "-l", "7", "-d", "today", "-s", "99", "--dry-run", "q.txt",
        ])
        .unwrap();
        let settings = Settings {
            layer_size: Some(4),
            deadline: Some("tomorrow".to_string()),
            finish_message: Some("Done".to_string()),
            footer: Some("Keep until {deadline}".to_string()),
            output_dir: Some(PathBuf::from("cards")),
            compile: Some(true),
        };
        let options = args.into_run_options(settings);

        assert_eq!(options.layer_size, 7);
        assert_eq!(options.deadline, "today");
        assert_eq!(options.finish_message, "Done");
        assert_eq!(options.footer, "Keep until {deadline}");
        assert_eq!(options.output_dir, PathBuf::from("cards"));
        assert_eq!(options.seed, Some(99));
        assert!(options.compile);
        assert!(options.dry_run);
    }

    #[test]
    fn test_settings_error_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("q.txt");
        std::fs::write(&input, "Q\nA\nB\nC\nQ\nA\nB\nC\nQ\nA\nB\nC\n").unwrap();
        let missing = dir.path().join("missing.json");

        let args = Args::try_parse_from([
            OsStr::new("huntgen"),
            OsStr::new("--dry-run"),
            OsStr::new("-c"),
            missing.as_os_str(),
            input.as_os_str(),
        ])
        .unwrap();
        let err = run_args(args).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["huntgen"]).is_err());
        assert!(Args::try_parse_from(["huntgen", "-l", "x", "q.txt"]).is_err());
    }
}
