/*
cards.rs

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

//! Write the LaTeX source of the cards and compile them to PDF.
//!
//! Each card goes to its own `<CODE>.tex` file in the output directory.
//! Compiling runs [`TEX_COMPILER`] on each file, with the PDF written next to the source.

use log::{debug, info};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::{COMPILE_TIMEOUT_SEC, TEX_COMPILER};
use crate::generator::codes::Code;

/// Delay between two checks of the compiler process.
const POLL_INTERVAL_MS: u64 = 100;

/// Type of errors.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("cannot write {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("{compiler} is not installed or not in the PATH")]
    CompilerMissing { compiler: String },

    #[error("compiling {path:?} took more than {secs}s")]
    CompilerTimeout { path: PathBuf, secs: u64 },

    #[error("compiling {path:?} failed ({status}); see the .log file in the output directory")]
    CompilerFailed { path: PathBuf, status: ExitStatus },
}

/// Object to write and compile card files.
pub struct CardWriter {
    output_dir: PathBuf,
    compiler: String,
    timeout: Duration,
}

impl CardWriter {
    /// Create a [`CardWriter`] object. The output directory is created if it does not exist.
    pub fn new(output_dir: &Path) -> Result<Self, OutputError> {
        fs::create_dir_all(output_dir).map_err(|source| OutputError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;
        debug!("Output directory: {output_dir:?}");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            compiler: TEX_COMPILER.to_string(),
            timeout: Duration::from_secs(COMPILE_TIMEOUT_SEC),
        })
    }

    /// Use another compiler command and timeout.
    pub fn with_compiler(mut self, compiler: &str, timeout: Duration) -> Self {
        self.compiler = compiler.to_string();
        self.timeout = timeout;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the LaTeX source of a card and return the path of the file.
    pub fn write(&self, code: Code, tex: &str) -> Result<PathBuf, OutputError> {
        let path: PathBuf = self.output_dir.join(format!("{code}.tex"));
        fs::write(&path, tex).map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Card {code} written to {path:?}");
        Ok(path)
    }

    /// Compile a LaTeX file into a PDF file in the output directory.
    ///
    /// # Errors
    ///
    /// The method returns an error if the compiler cannot be started, exits with an error, or
    /// does not finish in time. In that last case the compiler process is killed.
    pub fn compile(&self, tex_file: &Path) -> Result<(), OutputError> {
        let mut child: Child = Command::new(&self.compiler)
            .arg("-interaction=nonstopmode")
            .arg(format!("-output-directory={}", self.output_dir.display()))
            .arg(tex_file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => OutputError::CompilerMissing {
                    compiler: self.compiler.clone(),
                },
                _ => OutputError::Io {
                    path: tex_file.to_path_buf(),
                    source,
                },
            })?;

        let start: Instant = Instant::now();
        loop {
            let status: Option<ExitStatus> = child.try_wait().map_err(|source| OutputError::Io {
                path: tex_file.to_path_buf(),
                source,
            })?;
            match status {
                Some(s) if s.success() => {
                    info!(
                        "Compiled {tex_file:?} in {:.1}s",
                        start.elapsed().as_secs_f32()
                    );
                    return Ok(());
                }
                Some(s) => {
                    return Err(OutputError::CompilerFailed {
                        path: tex_file.to_path_buf(),
                        status: s,
                    });
                }
                None => {
                    if start.elapsed() >= self.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(OutputError::CompilerTimeout {
                            path: tex_file.to_path_buf(),
                            secs: self.timeout.as_secs(),
                        });
                    }
                    thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cards").join("batch1");
        let writer = CardWriter::new(&out).unwrap();

        let path = writer.write(Code::parse("KM").unwrap(), "hello").unwrap();
        assert_eq!(path, out.join("KM.tex"));
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
        assert_eq!(writer.output_dir(), out.as_path());
    }

    #[test]
    fn test_missing_compiler() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CardWriter::new(dir.path())
            .unwrap()
            .with_compiler("huntgen-no-such-compiler", Duration::from_secs(1));
        let path = writer.write(Code::parse("AA").unwrap(), "").unwrap();

        assert!(matches!(
            writer.compile(&path),
            Err(OutputError::CompilerMissing { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_compiler_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AA.tex");

        let ok = CardWriter::new(dir.path())
            .unwrap()
            .with_compiler("true", Duration::from_secs(5));
        assert!(ok.compile(&path).is_ok());

        let failing = CardWriter::new(dir.path())
            .unwrap()
            .with_compiler("false", Duration::from_secs(5));
        assert!(matches!(
            failing.compile(&path),
            Err(OutputError::CompilerFailed { .. })
        ));
    }
}
