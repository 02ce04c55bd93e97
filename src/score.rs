/*
score.rs

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

//! Score tally for the session in progress.

use serde::{Deserialize, Serialize};

use crate::engine::cell::CellState;

/// Points for a crunched cell. Infected cells score double.
pub const POINTS_PER_CELL: u32 = 10;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Score {
    /// Total points.
    pub points: u64,

    /// Number of cells removed from the grid.
    pub cells: usize,

    /// Number of sequences fully consumed.
    pub sequences: usize,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points for a cell in the given state.
    pub fn points_for(state: CellState) -> u32 {
        match state {
            CellState::Infected => POINTS_PER_CELL * 2,
            _ => POINTS_PER_CELL,
        }
    }

    /// Record a crunched cell and return the points it scored.
    pub fn add_cell(&mut self, state: CellState) -> u32 {
        let points: u32 = Self::points_for(state);
        self.points += u64::from(points);
        self.cells += 1;
        points
    }

    pub fn add_sequences(&mut self, count: usize) {
        self.sequences += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infected_cells_score_double() {
        let mut score = Score::new();
        assert_eq!(score.add_cell(CellState::Present), POINTS_PER_CELL);
        assert_eq!(score.add_cell(CellState::Infected), POINTS_PER_CELL * 2);
        assert_eq!(score.points, u64::from(POINTS_PER_CELL * 3));
        assert_eq!(score.cells, 2);
    }
}
