/*
cell.rs

Copyright 2025 Hervé Quatremain

This file is part of Helixcrunch.

Helixcrunch is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Helixcrunch is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Helixcrunch. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Nucleotides: the content of a grid slot or of a sequence slot.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::direction::GridPos;

/// Symbol of a hole.
pub const MISSING_SYMBOL: char = '-';

/// Symbol of an inactive (consumed) cell.
pub const INACTIVE_SYMBOL: char = '.';

/// Symbol of a scissors cell.
pub const SCISSORS_SYMBOL: char = '*';

/// Cell palette.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// Number of colors in the palette.
    pub const COUNT: u8 = 4;

    /// Pick a color at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Color {
        Color::from_repr(rng.random_range(0..Color::COUNT)).unwrap_or(Color::Red)
    }

    /// Letter used in signatures.
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Yellow => 'y',
        }
    }
}

/// Life cycle state of a cell.
///
/// - `Missing` is a hole waiting to be regenerated.
/// - `Present` is a normal playable cell.
/// - `Infected` is playable and scores double.
/// - `Inactive` is frozen; consumed segments of a long sequence are inactive.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Missing,
    #[default]
    Present,
    Infected,
    Inactive,
}

/// Special cell types.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    #[default]
    Normal,
    /// Path delimiter. A crunchable path contains at least one, never at its ends.
    Scissors,
    /// Blasts the star around it when crunched.
    Bonus,
}

/// Where the cell lives.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Placement {
    Grid(GridPos),
    /// Slot `index` of the sequence `id`.
    Sequence { id: usize, index: usize },
}

/// A nucleotide.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub placement: Placement,
    pub state: CellState,
    pub kind: CellType,
    /// `None` for holes and scissors.
    pub color: Option<Color>,
}

impl Cell {
    /// Create a present, normal cell.
    pub fn new(placement: Placement, color: Color) -> Self {
        Self {
            placement,
            state: CellState::Present,
            kind: CellType::Normal,
            color: Some(color),
        }
    }

    /// Create a hole.
    pub fn missing(placement: Placement) -> Self {
        Self {
            placement,
            state: CellState::Missing,
            kind: CellType::Normal,
            color: None,
        }
    }

    /// Grid position, if the cell belongs to the grid.
    pub fn grid_position(&self) -> Option<GridPos> {
        match self.placement {
            Placement::Grid(pos) => Some(pos),
            Placement::Sequence { .. } => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.state == CellState::Missing
    }

    pub fn is_scissors(&self) -> bool {
        self.kind == CellType::Scissors
    }

    /// Whether the cell keeps the game alive.
    pub fn is_present_normal(&self) -> bool {
        self.state == CellState::Present && self.kind == CellType::Normal
    }

    /// Assign a fresh random color and the normal type.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.color = Some(Color::random(rng));
        self.kind = CellType::Normal;
    }

    /// Turn the cell into a scissors cell, which has no color.
    pub fn make_scissors(&mut self) {
        self.kind = CellType::Scissors;
        self.color = None;
    }

    /// Turn the cell into a hole, like [`Cell::missing`].
    pub fn clear(&mut self) {
        self.state = CellState::Missing;
        self.kind = CellType::Normal;
        self.color = None;
    }

    /// Signature symbol of the cell.
    pub fn symbol(&self) -> char {
        match (self.state, self.kind, self.color) {
            (CellState::Missing, _, _) => MISSING_SYMBOL,
            (CellState::Inactive, _, _) => INACTIVE_SYMBOL,
            (_, CellType::Scissors, _) => SCISSORS_SYMBOL,
            (_, _, Some(c)) => c.symbol(),
            (_, _, None) => MISSING_SYMBOL,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
