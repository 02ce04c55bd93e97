/*
hint.rs

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

//! Find a path in the grid that matches one of the active sequences.
//!
//! The search tries each target (a sequence read forward, then backward, or in segment levels a
//! window of three active symbols) and recursively extends a path from every cell that carries
//! the first symbol of the target.
//! In standard levels, scissors cells can be inserted anywhere between two colored cells.

use log::debug;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::engine::cell::INACTIVE_SYMBOL;
use crate::engine::direction::{Direction, GridPos};
use crate::engine::grid::Grid;
use crate::engine::sequences::SequenceSet;

// Max duration for trying to find a path. Large grids with few matching cells can take long.
const MAX_TIME_MS: u64 = 500;

/// Number of symbols in a segment target.
const SEGMENT_WINDOW: usize = 3;

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum HintError {
    /// No possible path.
    #[error("No matching path in the grid")]
    NoPath,

    /// No path found before the timeout.
    #[error("Hint search timed out")]
    DurationExceeded,
}

/// A symbol string to reproduce on the grid.
#[derive(Debug, Clone, PartialEq)]
struct Target {
    symbols: Vec<char>,
    require_scissors: bool,
}

/// [`HintFinder`] object.
pub struct HintFinder<'a> {
    grid: &'a Grid,

    /// Number of iterations it took to find the last hint.
    pub iteration: usize,

    /// Time when the search started.
    start: Instant,
}

impl<'a> HintFinder<'a> {
    /// Create the object.
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            iteration: 0,
            start: Instant::now(),
        }
    }

    /// Build the list of targets for the active sequences.
    fn targets(sequences: &SequenceSet) -> Vec<Target> {
        let mut targets: Vec<Target> = Vec::new();
        for sequence in sequences.active() {
            let forward: Vec<char> = sequence.symbols().chars().collect();

            let runs: Vec<Vec<char>> = if sequences.is_segment() {
                forward
                    .windows(SEGMENT_WINDOW)
                    .filter(|w| !w.contains(&INACTIVE_SYMBOL))
                    .map(|w| w.to_vec())
                    .collect()
            } else {
                vec![forward]
            };

            for run in runs {
                let reversed: Vec<char> = run.iter().rev().copied().collect();
                let mut candidates: Vec<Vec<char>> = vec![run];
                if candidates[0] != reversed {
                    candidates.push(reversed);
                }
                for symbols in candidates {
                    let target: Target = Target {
                        symbols,
                        require_scissors: !sequences.is_segment(),
                    };
                    if !targets.contains(&target) {
                        targets.push(target);
                    }
                }
            }
        }
        targets
    }

    /// Return a path that can be crunched, as an ordered list of positions.
    ///
    /// # Errors
    ///
    /// The method returns an error if no path exists or if the search takes too long.
    pub fn find(&mut self, sequences: &SequenceSet) -> Result<Vec<GridPos>, HintError> {
        self.iteration = 0;
        self.start = Instant::now();

        for target in Self::targets(sequences) {
            debug!("Looking for {:?}", target.symbols);
            let starts: Vec<GridPos> = self
                .grid
                .positions()
                .into_iter()
                .filter(|p| self.symbol(*p) == Some(target.symbols[0]))
                .collect();

            for start in starts {
                let mut path: Vec<GridPos> = vec![start];
                match self.find_path(&target, 1, false, &mut path) {
                    Ok(()) => {
                        debug!(
                            "Hint found after {} iterations: {path:?}",
                            self.iteration
                        );
                        return Ok(path);
                    }
                    Err(HintError::DurationExceeded) => return Err(HintError::DurationExceeded),
                    Err(HintError::NoPath) => (),
                }
            }
        }
        Err(HintError::NoPath)
    }

    /// Symbol of a playable cell. Holes and scissors have no symbol here.
    fn symbol(&self, pos: GridPos) -> Option<char> {
        self.grid
            .get(pos)
            .filter(|c| !c.is_missing() && !c.is_scissors())
            .map(|c| c.symbol())
    }

    fn is_scissors(&self, pos: GridPos) -> bool {
        self.grid
            .get(pos)
            .is_some_and(|c| !c.is_missing() && c.is_scissors())
    }

    /// Recursively extend the path. `matched` is the number of target symbols already placed.
    fn find_path(
        &mut self,
        target: &Target,
        matched: usize,
        has_scissors: bool,
        path: &mut Vec<GridPos>,
    ) -> Result<(), HintError> {
        if matched == target.symbols.len() {
            return if has_scissors || !target.require_scissors {
                Ok(())
            } else {
                Err(HintError::NoPath)
            };
        }

        self.iteration += 1;
        if self.start.elapsed() >= Duration::from_millis(MAX_TIME_MS) {
            return Err(HintError::DurationExceeded);
        }

        let Some(current) = path.last().copied() else {
            return Err(HintError::NoPath);
        };

        for direction in Direction::ALL {
            let Some(next) = self.grid.neighbor_position(current, direction) else {
                continue;
            };
            if path.contains(&next) {
                continue;
            }

            let next_matched: usize;
            let next_scissors: bool;
            if self.is_scissors(next) {
                // Scissors sit between two colored cells
                if !target.require_scissors {
                    continue;
                }
                next_matched = matched;
                next_scissors = true;
            } else if self.symbol(next) == Some(target.symbols[matched]) {
                next_matched = matched + 1;
                next_scissors = has_scissors;
            } else {
                continue;
            }

            path.push(next);
            match self.find_path(target, next_matched, next_scissors, path) {
                Ok(()) => return Ok(()),
                Err(HintError::DurationExceeded) => return Err(HintError::DurationExceeded),
                Err(HintError::NoPath) => {
                    path.pop();
                }
            }
        }
        Err(HintError::NoPath)
    }
}
