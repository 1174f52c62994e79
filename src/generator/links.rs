/*
links.rs

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

//! Wire the answers of each card.
//!
//! For a card in layer `i`:
//!
//! * the correct answer leads to a random card of layer `i + 1`,
//! * the two wrong answers lead to two other, distinct, cards of layer `i`.
//!
//! A wrong answer therefore never moves the player forward or backward; the player must find
//! the right answer to reach the next layer.

use log::debug;
use rand::Rng;
use rand::seq::{IndexedRandom, index};

use super::cards::{Card, Layer, Links};
use super::codes::Code;
use super::scheme::SchemeError;

/// Minimum number of cards in a layer that is the source of links: the card itself and its two
/// decoys.
pub const MIN_SOURCE_LAYER_SIZE: usize = 3;

/// Verify that every layer except the last one can hold two decoys per card.
pub fn validate(layers: &[Layer]) -> Result<(), SchemeError> {
    let sources: usize = layers.len().saturating_sub(1);
    match layers[..sources]
        .iter()
        .position(|l| l.len() < MIN_SOURCE_LAYER_SIZE)
    {
        Some(i) => Err(SchemeError::DegenerateLayer {
            layer: i,
            size: layers[i].len(),
        }),
        None => Ok(()),
    }
}

/// Set the links of all the cards, except for the last layer.
///
/// # Errors
///
/// The method returns [`SchemeError::DegenerateLayer`] before changing any card if a layer that
/// is not the last one has fewer than [`MIN_SOURCE_LAYER_SIZE`] cards.
pub fn wire<R: Rng>(layers: &mut [Layer], rng: &mut R) -> Result<(), SchemeError> {
    validate(layers)?;

    for i in 0..layers.len().saturating_sub(1) {
        let next_codes: Vec<Code> = layers[i + 1].codes();
        let same_codes: Vec<Code> = layers[i].codes();

        for (position, card) in layers[i].cards_mut().iter_mut().enumerate() {
            let card = match card {
                Card::Standard(c) => c,
                Card::Finish(c) => {
                    debug!("Finish card {} before the last layer: not wired", c.code);
                    continue;
                }
            };

            let correct: Code = *next_codes.choose(rng).ok_or(SchemeError::DegenerateLayer {
                layer: i + 1,
                size: 0,
            })?;
            let decoys: [Code; 2] = pick_decoys(&same_codes, position, rng);

            debug!(
                "Layer {i}: {} --> {correct} (correct), {} {} (decoys)",
                card.code, decoys[0], decoys[1]
            );
            card.links = Some(Links { correct, decoys });
        }
    }
    Ok(())
}

/// Draw two distinct codes from the layer, other than the one at `position`.
///
/// The layer must hold at least [`MIN_SOURCE_LAYER_SIZE`] codes.
fn pick_decoys<R: Rng>(codes: &[Code], position: usize, rng: &mut R) -> [Code; 2] {
    // Sample among the other positions, then shift past the card's own position
    let picked = index::sample(rng, codes.len() - 1, 2);
    let skip_self = |k: usize| if k >= position { k + 1 } else { k };
    [codes[skip_self(picked.index(0))], codes[skip_self(picked.index(1))]]
}
