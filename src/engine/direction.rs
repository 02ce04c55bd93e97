/*
direction.rs

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

//! Directions in the hexagonal grid.
//!
//! The grid is a flat-topped hexagonal tiling addressed with offset coordinates `(col, row)`.
//! Even columns sit half a cell higher than odd columns:
//!
//! ```text
//!  __    __
//! /0 \__/2 \__
//! \__/1 \__/3 \
//! /0 \__/2 \__/
//! \__/1 \__/3 \
//!    \__/  \__/
//! ```
//!
//! Directions are numbered clockwise from the top, and `d` and `d + 3 (mod 6)` are opposites.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

/// Grid position as `(column, row)`.
pub type GridPos = (usize, usize);

/// One of the six neighbor directions of a cell.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[repr(u8)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Top = 0,
    TopRight = 1,
    BottomRight = 2,
    #[default]
    Bottom = 3,
    BottomLeft = 4,
    TopLeft = 5,
}

impl Direction {
    /// All the directions, in index order.
    pub const ALL: [Direction; 6] = [
        Direction::Top,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::TopLeft,
    ];

    /// Return the direction for the given index.
    ///
    /// # Panics
    ///
    /// An index outside `0..=5` is a caller bug.
    pub fn from_index(index: usize) -> Direction {
        u8::try_from(index)
            .ok()
            .and_then(Direction::from_repr)
            .unwrap_or_else(|| panic!("Invalid direction index {index}"))
    }

    /// Return the index of the direction (0 for [`Direction::Top`], clockwise).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite direction.
    pub fn opposite(self) -> Direction {
        Direction::from_index((self.index() + 3) % 6)
    }

    /// Return the `(column, row)` offset to apply to a cell in the given column.
    pub fn delta(self, col: usize) -> (isize, isize) {
        let even: bool = col % 2 == 0;
        match self {
            Direction::Top => (0, -1),
            Direction::Bottom => (0, 1),
            Direction::TopRight => {
                if even {
                    (1, -1)
                } else {
                    (1, 0)
                }
            }
            Direction::BottomRight => {
                if even {
                    (1, 0)
                } else {
                    (1, 1)
                }
            }
            Direction::BottomLeft => {
                if even {
                    (-1, 0)
                } else {
                    (-1, 1)
                }
            }
            Direction::TopLeft => {
                if even {
                    (-1, -1)
                } else {
                    (-1, 0)
                }
            }
        }
    }

    /// Apply the direction to the given position.
    ///
    /// Only the lower bound is checked here. The caller verifies the upper bounds against the
    /// grid size.
    pub fn step(self, pos: GridPos) -> Option<GridPos> {
        let (dc, dr) = self.delta(pos.0);
        Some((pos.0.checked_add_signed(dc)?, pos.1.checked_add_signed(dr)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn index_round_trips() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(Direction::from_index(i), *d);
        }
    }

    #[test]
    #[should_panic(expected = "Invalid direction index 6")]
    fn out_of_range_index_panics() {
        Direction::from_index(6);
    }

    #[test]
    fn stepping_back_returns_to_origin() {
        for col in 1..5 {
            for row in 1..5 {
                for d in Direction::ALL {
                    let next = d.step((col, row)).unwrap();
                    assert_eq!(d.opposite().step(next), Some((col, row)));
                }
            }
        }
    }

    #[test]
    fn parity_offsets() {
        assert_eq!(Direction::TopRight.step((2, 3)), Some((3, 2)));
        assert_eq!(Direction::TopRight.step((1, 3)), Some((2, 3)));
        assert_eq!(Direction::BottomLeft.step((2, 3)), Some((1, 3)));
        assert_eq!(Direction::BottomLeft.step((3, 3)), Some((2, 4)));
        assert_eq!(Direction::TopLeft.step((0, 0)), None);
    }
}
