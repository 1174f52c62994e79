/*
application.rs

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

//! Run a complete generation: read the questions, build the scheme, and write the cards.

use log::{info, warn};
use std::error::Error;
use std::fmt::Write;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::generator::cards::{Card, QuestionRecord, Scheme};
use crate::generator::scheme::SchemeGenerator;
use crate::questions;
use crate::render::CardRenderer;
use crate::saver::cards::{CardWriter, OutputError};
use crate::saver::scheme::SchemeSaver;

/// Resolved parameters of a run, after merging the command line and the settings file.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Questions file.
    pub input: PathBuf,
    pub layer_size: usize,
    pub deadline: String,
    pub finish_message: String,

    /// Footer template for question cards.
    pub footer: String,
    pub output_dir: PathBuf,

    /// Seed for the random number generator. A random seed is used when None.
    pub seed: Option<u64>,

    /// Whether to compile the LaTeX files into PDF files.
    pub compile: bool,

    /// Print the scheme instead of writing files.
    pub dry_run: bool,
}

/// Run the generation.
///
/// The scheme overview is saved before the cards, so that it is available even when rendering
/// or compiling a card fails.
pub fn run(options: &RunOptions) -> Result<(), Box<dyn Error>> {
    let records: Vec<QuestionRecord> = questions::read_file(&options.input)?;
    info!("{} questions read from {:?}", records.len(), options.input);

    let mut rng: StdRng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let scheme: Scheme = SchemeGenerator::new(options.layer_size)?
        .with_finish_message(&options.finish_message)
        .generate(&records, &options.deadline, &mut rng)?;

    if options.dry_run {
        print!("{}", overview(&scheme));
        return Ok(());
    }

    let writer: CardWriter = CardWriter::new(&options.output_dir)?;
    let saver: SchemeSaver = SchemeSaver::new(writer.output_dir());
    saver.save_scheme(&scheme)?;

    let renderer: CardRenderer = CardRenderer::new(&options.footer);
    let mut compile: bool = options.compile;

    for card in scheme.cards() {
        let tex: String = renderer.render(card, &mut rng)?;
        let path: PathBuf = writer.write(card.code(), &tex)?;
        if !compile {
            continue;
        }
        match writer.compile(&path) {
            Ok(()) => (),
            Err(OutputError::CompilerMissing { compiler }) => {
                warn!("{compiler} not found: the cards are not compiled");
                compile = false;
            }
            Err(e) => return Err(Box::new(e)),
        }
    }

    info!(
        "{} cards written to {:?}; overview in {:?}",
        scheme.card_count(),
        options.output_dir,
        saver.path()
    );
    Ok(())
}

/// Return a text overview of the scheme, one block per layer.
pub fn overview(scheme: &Scheme) -> String {
    let mut s: String = String::new();
    let last: usize = scheme.layers().len().saturating_sub(1);

    for (i, layer) in scheme.layers().iter().enumerate() {
        if i == last {
            let _ = writeln!(s, "Finish");
        } else {
            let _ = writeln!(s, "Layer {} ({} cards)", i + 1, layer.len());
        }
        for card in layer.cards() {
            match card {
                Card::Standard(c) => {
                    let links: String = match c.links {
                        Some(l) => format!("{} | {} {}", l.correct, l.decoys[0], l.decoys[1]),
                        None => "-- | -- --".to_string(),
                    };
                    let _ = writeln!(s, "  {}  -> {links}  {}", c.code, c.content.question);
                }
                Card::Finish(c) => {
                    let _ = writeln!(s, "  {}  {}", c.code, c.message);
                }
            }
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const QUESTIONS: &str = "Q1\nA\nB\nC\n\nQ2\nA\nB\nC\n\nQ3\nA\nB\nC\n";

    fn options(dir: &std::path::Path, layer_size: usize) -> RunOptions {
        let input = dir.join("questions.txt");
        fs::write(&input, QUESTIONS).unwrap();
        RunOptions {
            input,
            layer_size,
            deadline: "01.01.2030".to_string(),
            finish_message: "The end".to_string(),
            footer: "Until {deadline}".to_string(),
            output_dir: dir.join("out"),
            seed: Some(12),
            compile: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_run_writes_cards_and_overview() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path(), 3);
        run(&opts).unwrap();

        let mut tex_files: Vec<String> = fs::read_dir(&opts.output_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .filter(|n| n.ends_with(".tex"))
            .collect();
        tex_files.sort();
        assert_eq!(tex_files.len(), 4);
        assert!(opts.output_dir.join("scheme.json").exists());
    }

    #[test]
    fn test_run_is_reproducible() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        run(&options(dir_a.path(), 3)).unwrap();
        run(&options(dir_b.path(), 3)).unwrap();

        let a = fs::read_to_string(dir_a.path().join("out/scheme.json")).unwrap();
        let b = fs::read_to_string(dir_b.path().join("out/scheme.json")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_rejects_bad_layer_size() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path(), 2);
        assert!(run(&opts).is_err());
        assert!(!opts.output_dir.exists());
    }

    #[test]
    fn test_overview_saved_when_a_card_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(dir.path(), 3);
        opts.footer = "Until {unknown}".to_string();

        assert!(run(&opts).is_err());
        assert!(opts.output_dir.join("scheme.json").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(dir.path(), 3);
        opts.dry_run = true;
        run(&opts).unwrap();
        assert!(!opts.output_dir.exists());
    }

    #[test]
    fn test_overview() {
        let records: Vec<QuestionRecord> = questions::parse(QUESTIONS).unwrap();
        let scheme = SchemeGenerator::new(3)
            .unwrap()
            .with_finish_message("The end")
            .generate(&records, "", &mut StdRng::seed_from_u64(1))
            .unwrap();
        let text = overview(&scheme);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Layer 1 (3 cards)");
        assert!(lines[1].ends_with("Q1"));
        assert_eq!(lines[4], "Finish");
        assert!(lines[5].ends_with("The end"));
    }
}
