/*
generator.rs

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

//! Generate treasure hunt schemes.
//!
//! A hunt is a list of layers of question cards.
//! Each card offers three answers, and each answer is printed with the code of another card.
//! The correct answer sends the player to a card in the next layer; the two wrong answers send
//! the player to other cards in the same layer.
//! The last layer holds a single finish card.
//!
//! Generating a scheme is done in two steps, orchestrated by
//! [`scheme::SchemeGenerator::generate`]:
//!
//! * [`layers::assign`] groups the [`cards::QuestionRecord`] objects into [`cards::Layer`]
//!   objects and gives every card a unique code from a [`codes::CodeAllocator`].
//!
//! * [`links::wire`] then sets the three [`cards::Links`] of every question card.
//!
//! All the randomness comes from the random number generator passed to
//! [`scheme::SchemeGenerator::generate`], so that a seeded generator always produces the same
//! scheme.

pub mod cards;
pub mod codes;
pub mod layers;
pub mod links;
pub mod scheme;
