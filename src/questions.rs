/*
questions.rs

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

//! Read the questions file.
//!
//! The file is plain text.
//! Each question is followed by its correct answer and then by two wrong answers, each on its own
//! line.
//! Blank lines are ignored, so questions can be separated by empty lines:
//!
//! ```text
//! What is the capital of France?
//! Paris
//! Lyon
//! Marseille
//!
//! How many legs does a spider have?
//! 8
//! 6
//! 10
//! ```
//!
//! The order of the questions matters: it decides in which layer each question ends up.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::generator::cards::QuestionRecord;

/// Number of non-blank lines per question: the question and its three answers.
const LINES_PER_RECORD: usize = 4;

/// Type of errors.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("cannot read the questions file {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    /// The last question does not have its three answers.
    #[error(
        "question {record} is incomplete: expected {expected} lines, found {line_count}",
        expected = LINES_PER_RECORD
    )]
    Incomplete { record: usize, line_count: usize },
}

/// Parse the content of a questions file.
pub fn parse(text: &str) -> Result<Vec<QuestionRecord>, ParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut records: Vec<QuestionRecord> = Vec::with_capacity(lines.len() / LINES_PER_RECORD);
    for (i, group) in lines.chunks(LINES_PER_RECORD).enumerate() {
        match group {
            [question, correct, wrong1, wrong2] => {
                records.push(QuestionRecord::new(question, correct, [*wrong1, *wrong2]));
            }
            _ => {
                return Err(ParseError::Incomplete {
                    record: i + 1,
                    line_count: group.len(),
                });
            }
        }
    }
    debug!("{} questions parsed", records.len());
    Ok(records)
}

/// Read and parse a questions file.
pub fn read_file(path: &Path) -> Result<Vec<QuestionRecord>, ParseError> {
    debug!("Questions file: {path:?}");
    let text: String = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}
