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

//! Cards, layers, and schemes.
//!
//! A [`Scheme`] is an ordered list of [`Layer`] objects, from the start of the hunt to the finish.
//! Each layer groups [`Card`] objects that sit at the same depth.
//! The last layer only contains the [`FinishCard`].

use serde::Serialize;

use super::codes::Code;

/// A question and its three answers, as read from the input file.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question: String,
    pub correct_answer: String,
    pub distractors: [String; 2],
}

impl QuestionRecord {
    /// Create a [`QuestionRecord`] object.
    pub fn new(question: &str, correct_answer: &str, distractors: [&str; 2]) -> Self {
        Self {
            question: question.to_string(),
            correct_answer: correct_answer.to_string(),
            distractors: distractors.map(str::to_string),
        }
    }
}

/// Destinations of the three answers printed on a [`StandardCard`].
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Links {
    /// Card in the next layer, reached with the correct answer.
    pub correct: Code,

    /// Two other cards in the same layer, reached with the wrong answers.
    pub decoys: [Code; 2],
}

impl Links {
    /// Return the three destinations, correct one first.
    pub fn outgoing(&self) -> [Code; 3] {
        [self.correct, self.decoys[0], self.decoys[1]]
    }
}

/// Card with a question.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StandardCard {
    pub code: Code,
    pub content: QuestionRecord,

    /// Date until which the card stays up. Only used when printing the card.
    pub deadline: String,

    /// Set by [`super::links::wire`]. None until then.
    pub links: Option<Links>,
}

/// Last card of the hunt.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FinishCard {
    pub code: Code,
    pub message: String,
}

/// Card of a scheme.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Card {
    Standard(StandardCard),
    Finish(FinishCard),
}

impl Card {
    /// Code printed on the card.
    pub fn code(&self) -> Code {
        match self {
            Card::Standard(c) => c.code,
            Card::Finish(c) => c.code,
        }
    }

    /// Outgoing links of the card. Finish cards and unwired cards have none.
    pub fn outgoing(&self) -> Option<[Code; 3]> {
        match self {
            Card::Standard(c) => c.links.map(|l| l.outgoing()),
            Card::Finish(_) => None,
        }
    }
}

/// Cards at the same depth of the hunt.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Layer {
    cards: Vec<Card>,
}

impl Layer {
    /// Create a [`Layer`] object from a list of cards.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards in the layer.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Codes of the cards, in layer order.
    pub fn codes(&self) -> Vec<Code> {
        self.cards.iter().map(Card::code).collect()
    }

    /// Whether a card of the layer carries the given code.
    pub fn contains(&self, code: Code) -> bool {
        self.cards.iter().any(|c| c.code() == code)
    }
}

/// Complete, wired hunt.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    layers: Vec<Layer>,
}

impl Scheme {
    /// Create a [`Scheme`] object. The layers must already be wired.
    pub(super) fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Iterate over all the cards, from the first layer to the finish.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.layers.iter().flat_map(|l| l.cards().iter())
    }

    /// Total number of cards, finish card included.
    pub fn card_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Layer sizes in hunt order.
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::len).collect()
    }

    /// Return the card with the given code.
    pub fn find(&self, code: Code) -> Option<&Card> {
        self.cards().find(|c| c.code() == code)
    }

    /// Return the position of the layer holding the given code.
    pub fn layer_of(&self, code: Code) -> Option<usize> {
        self.layers.iter().position(|l| l.contains(code))
    }

    /// Return the finish card.
    pub fn finish(&self) -> Option<&FinishCard> {
        self.layers
            .last()
            .and_then(|l| l.cards().first())
            .and_then(|c| match c {
                Card::Finish(f) => Some(f),
                Card::Standard(_) => None,
            })
    }
}
