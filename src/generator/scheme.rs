/*
scheme.rs

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

//! Build a complete, wired scheme from a list of questions.

use log::{Level, debug, info, log_enabled};
use rand::Rng;
use thiserror::Error;

use super::cards::{QuestionRecord, Scheme};
use super::codes::CodeAllocator;
use super::layers;
use super::links;
use crate::config::{DEFAULT_FINISH_MESSAGE, MAX_LAYER_SIZE, MIN_LAYER_SIZE};

/// Type of errors. All of them end the generation: no partial scheme is ever returned.
#[derive(Error, Debug, PartialEq)]
pub enum SchemeError {
    /// Wrong layer size or unusable settings.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A layer other than the last one is too small to get two decoys per card.
    #[error(
        "layer {layer} has {size} card(s); every layer before the finish needs at least {min} cards",
        min = links::MIN_SOURCE_LAYER_SIZE
    )]
    DegenerateLayer { layer: usize, size: usize },

    /// All the two-letter codes are in use.
    #[error("all the {capacity} card codes are already in use")]
    CapacityExhausted { capacity: usize },
}

/// Scheme generator for a given layer size.
#[derive(Debug, Clone)]
pub struct SchemeGenerator {
    layer_size: usize,
    finish_message: String,
}

impl SchemeGenerator {
    /// Create a [`SchemeGenerator`] object.
    ///
    /// # Errors
    ///
    /// The method returns [`SchemeError::InvalidConfiguration`] if the layer size is not between
    /// [`MIN_LAYER_SIZE`] and [`MAX_LAYER_SIZE`].
    pub fn new(layer_size: usize) -> Result<Self, SchemeError> {
        if !(MIN_LAYER_SIZE..=MAX_LAYER_SIZE).contains(&layer_size) {
            return Err(SchemeError::InvalidConfiguration(format!(
                "the layer size must be an integer between {MIN_LAYER_SIZE} and {MAX_LAYER_SIZE} (got {layer_size})"
            )));
        }
        Ok(Self {
            layer_size,
            finish_message: DEFAULT_FINISH_MESSAGE.to_string(),
        })
    }

    /// Replace the message printed on the finish card.
    pub fn with_finish_message(mut self, message: &str) -> Self {
        self.finish_message = message.to_string();
        self
    }

    pub fn layer_size(&self) -> usize {
        self.layer_size
    }

    /// Generate and return a wired scheme.
    ///
    /// The `deadline` is not interpreted; it is copied to every question card for printing.
    /// The code allocator is created for this call only, and all the randomness comes from `rng`.
    pub fn generate<R: Rng>(
        &self,
        records: &[QuestionRecord],
        deadline: &str,
        rng: &mut R,
    ) -> Result<Scheme, SchemeError> {
        let mut codes: CodeAllocator = CodeAllocator::new();

        let mut layers = layers::assign(
            records,
            self.layer_size,
            deadline,
            &self.finish_message,
            &mut codes,
            rng,
        )?;
        links::wire(&mut layers, rng)?;

        let scheme: Scheme = Scheme::new(layers);
        info!(
            "Generated {} cards in {} layers",
            scheme.card_count(),
            scheme.layers().len()
        );
        if log_enabled!(Level::Debug) {
            for (i, layer) in scheme.layers().iter().enumerate() {
                let codes: Vec<String> = layer.codes().iter().map(|c| c.to_string()).collect();
                debug!("    layer {i}: {}", codes.join(" "));
            }
        }
        Ok(scheme)
    }
}

/// Generate a scheme with the default finish message.
pub fn generate<R: Rng>(
    layer_size: usize,
    records: &[QuestionRecord],
    deadline: &str,
    rng: &mut R,
) -> Result<Scheme, SchemeError> {
    SchemeGenerator::new(layer_size)?.generate(records, deadline, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cards::Card;
    use crate::generator::codes::Code;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn records(n: usize) -> Vec<QuestionRecord> {
        (0..n)
            .map(|i| {
                QuestionRecord::new(
                    &format!("How much is {i} + 1?"),
                    &format!("{}", i + 1),
                    ["0", "-1"],
                )
            })
            .collect()
    }

    /// Verify every structural property of a generated scheme.
    fn check_scheme(scheme: &Scheme, record_count: usize, layer_size: usize) {
        // Card count
        assert_eq!(scheme.card_count(), record_count + 1);

        // Unique codes
        let codes: HashSet<Code> = scheme.cards().map(Card::code).collect();
        assert_eq!(codes.len(), scheme.card_count());

        // Layer sizes
        let sizes = scheme.layer_sizes();
        let last = sizes.len() - 1;
        assert_eq!(sizes[last], 1);
        assert!(scheme.finish().is_some());
        if record_count > 0 {
            let expected_first = match record_count % layer_size {
                0 => layer_size,
                r => r,
            };
            assert_eq!(sizes[0], expected_first);
            assert!(sizes[1..last].iter().all(|s| *s == layer_size));
        }

        // Links
        for (i, layer) in scheme.layers()[..last].iter().enumerate() {
            for card in layer.cards() {
                let out = card.outgoing().expect("question card without links");
                let distinct: HashSet<Code> = out.iter().copied().collect();
                assert_eq!(distinct.len(), 3);
                assert!(!out.contains(&card.code()));
                assert_eq!(scheme.layer_of(out[0]), Some(i + 1));
                assert_eq!(scheme.layer_of(out[1]), Some(i));
                assert_eq!(scheme.layer_of(out[2]), Some(i));
            }
        }
    }

    #[test]
    fn test_properties_over_many_configurations() {
        let mut rng = StdRng::seed_from_u64(2025);

        for layer_size in MIN_LAYER_SIZE..=MAX_LAYER_SIZE {
            for record_count in [0, layer_size, 3 * layer_size, 4 * layer_size + 3] {
                let recs = records(record_count);
                let scheme = generate(layer_size, &recs, "01.01.2100", &mut rng).unwrap();
                check_scheme(&scheme, record_count, layer_size);
            }
        }
    }

    #[test]
    fn test_evenly_divisible_input() {
        let mut rng = StdRng::seed_from_u64(9);
        let scheme = generate(3, &records(9), "", &mut rng).unwrap();
        assert_eq!(scheme.layer_sizes(), [3, 3, 3, 1]);
        check_scheme(&scheme, 9, 3);
    }

    #[test]
    fn test_empty_input_gives_finish_only() {
        let mut rng = StdRng::seed_from_u64(9);
        let scheme = generate(5, &[], "", &mut rng).unwrap();
        assert_eq!(scheme.layer_sizes(), [1]);
        assert_eq!(scheme.finish().unwrap().message, DEFAULT_FINISH_MESSAGE);
    }

    #[test]
    fn test_layer_size_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for size in [0, 1, 2, 21, 100] {
            assert!(matches!(
                generate(size, &records(9), "", &mut rng),
                Err(SchemeError::InvalidConfiguration(_))
            ));
        }
        assert!(SchemeGenerator::new(3).is_ok());
        assert!(SchemeGenerator::new(20).is_ok());
    }

    #[test]
    fn test_small_remainder_is_degenerate() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(
            generate(4, &records(10), "", &mut rng),
            Err(SchemeError::DegenerateLayer { layer: 0, size: 2 })
        );
        assert_eq!(
            generate(5, &records(1), "", &mut rng),
            Err(SchemeError::DegenerateLayer { layer: 0, size: 1 })
        );
    }

    #[test]
    fn test_same_seed_same_scheme() {
        let recs = records(23);
        let a = generate(5, &recs, "x", &mut StdRng::seed_from_u64(77)).unwrap();
        let b = generate(5, &recs, "x", &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_runs_do_not_share_codes_state() {
        // A fresh allocator per run: 40 runs of 30 cards would exhaust a shared code space
        let mut rng = StdRng::seed_from_u64(4);
        let recs = records(30);
        for _ in 0..40 {
            assert!(generate(3, &recs, "", &mut rng).is_ok());
        }
    }

    #[test]
    fn test_custom_finish_message_and_deadline() {
        let mut rng = StdRng::seed_from_u64(4);
        let generator = SchemeGenerator::new(3).unwrap().with_finish_message("Bravo!");
        let scheme = generator.generate(&records(6), "24.12.2025", &mut rng).unwrap();

        assert_eq!(generator.layer_size(), 3);
        assert_eq!(scheme.finish().unwrap().message, "Bravo!");
        for card in scheme.cards() {
            if let Card::Standard(c) = card {
                assert_eq!(c.deadline, "24.12.2025");
            }
        }
    }

    #[test]
    fn test_code_space_limits_card_count() {
        let mut rng = StdRng::seed_from_u64(6);

        // 675 questions and the finish card use every code
        let scheme = generate(3, &records(675), "", &mut rng).unwrap();
        assert_eq!(scheme.card_count(), 676);

        assert_eq!(
            generate(3, &records(676), "", &mut rng),
            Err(SchemeError::CapacityExhausted { capacity: 676 })
        );
    }
}
