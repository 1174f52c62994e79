/*
codes.rs

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

//! Short card codes and their allocator.
//!
//! A [`Code`] is two uppercase letters, printed in large type on the card.
//! Players follow an answer by looking for the card that carries the code printed next to it.

use log::debug;
use rand::Rng;
use serde::ser::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

use super::scheme::SchemeError;
use crate::config::ALPHABET;

/// Number of distinct two-letter codes.
pub const CODE_SPACE: usize = ALPHABET.len() * ALPHABET.len();

/// Two-letter card code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; 2]);

impl Code {
    /// Build the code at the given position in the alphabetical order (`AA` is 0, `ZZ` is 675).
    ///
    /// Return None when the position is outside the code space.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CODE_SPACE {
            return None;
        }
        let n: usize = ALPHABET.len();
        Some(Self([ALPHABET[index / n], ALPHABET[index % n]]))
    }

    /// Parse a code such as `"QX"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.as_bytes() {
            [a, b] if ALPHABET.contains(a) && ALPHABET.contains(b) => Some(Self([*a, *b])),
            _ => None,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

/// Codes are exported as plain strings.
impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Hand out unique codes for the cards of one scheme.
///
/// A new allocator must be created for each scheme: the issued codes are never released.
#[derive(Debug, Default)]
pub struct CodeAllocator {
    /// Codes already returned by [`CodeAllocator::next`].
    issued: HashSet<Code>,
}

impl CodeAllocator {
    /// Create a [`CodeAllocator`] object with no issued codes.
    pub fn new() -> Self {
        Self {
            issued: HashSet::with_capacity(64),
        }
    }

    /// Return a random code that this allocator has never returned before.
    ///
    /// The code is drawn uniformly among the codes still available, so the method never loops.
    ///
    /// # Errors
    ///
    /// The method returns [`SchemeError::CapacityExhausted`] when all the codes have been issued.
    pub fn next<R: Rng>(&mut self, rng: &mut R) -> Result<Code, SchemeError> {
        let available: usize = CODE_SPACE - self.issued.len();
        if available == 0 {
            return Err(SchemeError::CapacityExhausted {
                capacity: CODE_SPACE,
            });
        }

        let rank: usize = rng.random_range(0..available);
        let code: Code = (0..CODE_SPACE)
            .filter_map(Code::from_index)
            .filter(|c| !self.issued.contains(c))
            .nth(rank)
            .ok_or(SchemeError::CapacityExhausted {
                capacity: CODE_SPACE,
            })?;

        self.issued.insert(code);
        debug!("Allocated code {code} ({} issued)", self.issued.len());
        Ok(code)
    }

    /// Number of codes issued so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}
