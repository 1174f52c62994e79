/*
layers.rs

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

//! Group the questions into layers.
//!
//! The questions are consumed in input order, `layer_size` at a time.
//! The last group may be smaller.
//! The groups are then reversed so that the smaller group opens the hunt and the first questions
//! of the input file are the last ones before the finish card.

use log::{Level, debug, log_enabled};
use rand::Rng;

use super::cards::{Card, FinishCard, Layer, QuestionRecord, StandardCard};
use super::codes::CodeAllocator;
use super::scheme::SchemeError;

/// Build the unwired layers of a scheme, finish layer included.
///
/// One code is drawn per record, in input order, then one for the finish card.
pub fn assign<R: Rng>(
    records: &[QuestionRecord],
    layer_size: usize,
    deadline: &str,
    finish_message: &str,
    codes: &mut CodeAllocator,
    rng: &mut R,
) -> Result<Vec<Layer>, SchemeError> {
    if layer_size == 0 {
        return Err(SchemeError::InvalidConfiguration(
            "the layer size cannot be zero".to_string(),
        ));
    }

    let mut layers: Vec<Layer> = Vec::with_capacity(records.len() / layer_size + 2);

    for group in records.chunks(layer_size) {
        let mut cards: Vec<Card> = Vec::with_capacity(group.len());
        for record in group {
            cards.push(Card::Standard(StandardCard {
                code: codes.next(rng)?,
                content: record.clone(),
                deadline: deadline.to_string(),
                links: None,
            }));
        }
        layers.push(Layer::new(cards));
    }

    // The possibly partial group opens the hunt
    layers.reverse();

    layers.push(Layer::new(vec![Card::Finish(FinishCard {
        code: codes.next(rng)?,
        message: finish_message.to_string(),
    })]));

    if log_enabled!(Level::Debug) {
        let sizes: Vec<usize> = layers.iter().map(Layer::len).collect();
        debug!(
            "{} records in layers of {layer_size}: layer sizes = {sizes:?}",
            records.len()
        );
    }
    Ok(layers)
}
