/*
render.rs

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

//! Render cards as standalone LaTeX documents, one A4 page per card.

use formatx::formatx;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::generator::cards::{Card, FinishCard, StandardCard};
use crate::generator::codes::Code;

const PREAMBLE: &str = r"\documentclass[a4paper]{article}
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage[margin=2cm]{geometry}
\usepackage{fix-cm}

\begin{document}

\pagestyle{empty}
";

const POSTAMBLE: &str = r"
\end{document}
";

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("card {0} has no links")]
    Unwired(Code),

    #[error("invalid footer template: {0}")]
    Template(String),
}

/// Escape the characters that have a meaning in LaTeX.
pub fn escape(text: &str) -> String {
    let mut s: String = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => s.push_str(r"\textbackslash{}"),
            '{' | '}' | '$' | '&' | '#' | '_' | '%' => {
                s.push('\\');
                s.push(c);
            }
            '^' => s.push_str(r"\textasciicircum{}"),
            '~' => s.push_str(r"\textasciitilde{}"),
            _ => s.push(c),
        }
    }
    s
}

/// LaTeX renderer.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    /// Footer template for question cards. `{deadline}` is replaced by the card deadline.
    footer: String,
}

impl CardRenderer {
    /// Create a [`CardRenderer`] object.
    pub fn new(footer: &str) -> Self {
        Self {
            footer: footer.to_string(),
        }
    }

    /// Return the LaTeX source of the card.
    ///
    /// The order of the three answers is shuffled with `rng`, so that the correct answer is not
    /// always the first one on the sheet.
    pub fn render<R: Rng>(&self, card: &Card, rng: &mut R) -> Result<String, RenderError> {
        match card {
            Card::Standard(c) => self.render_standard(c, rng),
            Card::Finish(c) => Ok(self.render_finish(c)),
        }
    }

    fn render_standard<R: Rng>(
        &self,
        card: &StandardCard,
        rng: &mut R,
    ) -> Result<String, RenderError> {
        let links = card.links.ok_or(RenderError::Unwired(card.code))?;
        let footer: String = formatx!(self.footer.as_str(), deadline = card.deadline.as_str())
            .map_err(|e| RenderError::Template(e.to_string()))?;

        let mut answers: [(Code, &str); 3] = [
            (links.correct, card.content.correct_answer.as_str()),
            (links.decoys[0], card.content.distractors[0].as_str()),
            (links.decoys[1], card.content.distractors[1].as_str()),
        ];
        answers.shuffle(rng);
        debug!(
            "Card {}: answer order {} {} {}",
            card.code, answers[0].0, answers[1].0, answers[2].0
        );

        let lines: Vec<String> = answers
            .iter()
            .map(|(code, answer)| {
                format!(
                    r"    \textbf{{\fontsize{{1cm}}{{2cm}}\selectfont {code}: {}}}",
                    escape(answer)
                )
            })
            .collect();

        Ok(format!(
            r"{PREAMBLE}
\begin{{center}}
    \textbf{{\fontsize{{3cm}}{{4cm}}\selectfont {code}}}
    \vspace{{2cm}}
\end{{center}}

\begin{{center}}
    \textbf{{\fontsize{{1.5cm}}{{2cm}}\selectfont {question}}}
    \vspace{{0.5cm}}
\end{{center}}

\begin{{flushleft}}
{answers}
\end{{flushleft}}

\vfill

\begin{{center}}
{footer}
\end{{center}}
{POSTAMBLE}",
            code = card.code,
            question = escape(&card.content.question),
            answers = lines.join(" \\\\\n    \\vspace{0.5cm}\n"),
            footer = escape(&footer),
        ))
    }

    fn render_finish(&self, card: &FinishCard) -> String {
        format!(
            r"{PREAMBLE}
\begin{{center}}
    \textbf{{\fontsize{{3cm}}{{4cm}}\selectfont {code}}}
    \vspace{{2cm}}
\end{{center}}

\begin{{center}}
    \textbf{{\fontsize{{1.5cm}}{{2cm}}\selectfont {message}}}
    \vspace{{0.5cm}}
\end{{center}}
{POSTAMBLE}",
            code = card.code,
            message = escape(&card.message),
        )
    }
}
