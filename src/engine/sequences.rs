/*
sequences.rs

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

//! Target sequences and the matcher.
//!
//! A path matches a [`Sequence`] when its signature equals the sequence symbols read forward or
//! backward ([`MatchMode::Full`]). In segment ("long") levels, the signature only needs to be a
//! contiguous run of the sequence, forward or backward ([`MatchMode::Partial`]), and the matched
//! run becomes inactive.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::{Cell, CellState, Color, Placement};
use super::grid::Grid;
use super::path::Path;
use crate::config::SequencePolicy;
use crate::notifications::{Notification, Notifications};

/// Shortest path accepted in segment levels.
const MIN_SEGMENT_PATH: usize = 3;

/// Signature comparison mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchMode {
    /// The whole sequence, forward or reversed.
    Full,
    /// A contiguous run of the sequence, forward or reversed.
    Partial,
}

/// Why a path cannot be crunched.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchFailure {
    #[error("NO MATCH")]
    NoMatch,
    #[error("MISSING SCISSORS")]
    MissingScissors,
}

/// Ordered list of colored cells that the player must reproduce.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    id: usize,
    cells: Vec<Cell>,
}

impl Sequence {
    /// Create a [`Sequence`] object from a list of colors.
    pub fn new(id: usize, colors: &[Color]) -> Self {
        Self {
            id,
            cells: colors
                .iter()
                .enumerate()
                .map(|(index, c)| Cell::new(Placement::Sequence { id, index }, *c))
                .collect(),
        }
    }

    /// Create a sequence of random colors.
    pub fn random<R: Rng + ?Sized>(id: usize, length: usize, rng: &mut R) -> Self {
        let colors: Vec<Color> = (0..length).map(|_| Color::random(rng)).collect();
        Self::new(id, &colors)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Symbols of the sequence, in order. Inactive cells show as `.`.
    pub fn symbols(&self) -> String {
        self.cells.iter().map(|c| c.symbol()).collect()
    }

    /// Whether the signature matches the sequence in the given mode.
    pub fn validate(&self, signature: &str, mode: MatchMode) -> bool {
        if signature.is_empty() {
            return false;
        }
        let forward: String = self.symbols();
        let reversed: String = forward.chars().rev().collect();
        match mode {
            MatchMode::Full => forward == signature || reversed == signature,
            MatchMode::Partial => forward.contains(signature) || reversed.contains(signature),
        }
    }

    /// Return the indexes of the sequence cells that the signature matches, in signature order.
    ///
    /// The forward reading is searched first, then the reversed one.
    pub fn get_matching_segment(&self, signature: &str) -> Option<Vec<usize>> {
        if signature.is_empty() {
            return None;
        }
        let forward: String = self.symbols();
        let length: usize = signature.chars().count();

        if let Some(i) = forward.find(signature) {
            return Some((i..i + length).collect());
        }

        let reversed: String = forward.chars().rev().collect();
        let n: usize = self.cells.len();
        reversed
            .find(signature)
            .map(|j| (j..j + length).map(|k| n - 1 - k).collect())
    }

    /// Mark the given cells inactive.
    pub fn deactivate(&mut self, indexes: &[usize], notifications: &mut Notifications) {
        for index in indexes {
            if let Some(cell) = self.cells.get_mut(*index)
                && cell.state != CellState::Inactive
            {
                cell.state = CellState::Inactive;
                notifications.push(Notification::StateChanged {
                    placement: cell.placement,
                    state: CellState::Inactive,
                });
            }
        }
    }

    /// Whether every cell is inactive.
    pub fn is_consumed(&self) -> bool {
        self.cells.iter().all(|c| c.state == CellState::Inactive)
    }
}

/// Active sequences of a level.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SequenceSet {
    sequences: Vec<Sequence>,

    /// Number and length of the sequences.
    policy: SequencePolicy,

    /// Whether the sequences are consumed segment by segment.
    segment: bool,

    /// Identifier for the next sequence.
    next_id: usize,
}

impl SequenceSet {
    /// Create an empty [`SequenceSet`] object.
    pub fn new(policy: SequencePolicy, segment: bool) -> Self {
        Self {
            sequences: Vec::with_capacity(policy.count),
            policy,
            segment,
            next_id: 0,
        }
    }

    pub fn active(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn is_segment(&self) -> bool {
        self.segment
    }

    /// Comparison mode for the level.
    pub fn mode(&self) -> MatchMode {
        if self.segment {
            MatchMode::Partial
        } else {
            MatchMode::Full
        }
    }

    /// Add a sequence with the given colors. Return its identifier, or `None` when the set is
    /// full.
    pub fn add(&mut self, colors: &[Color]) -> Option<usize> {
        if self.sequences.len() >= self.policy.count {
            return None;
        }
        let id: usize = self.next_id;
        self.next_id += 1;
        self.sequences.push(Sequence::new(id, colors));
        Some(id)
    }

    /// Add a random sequence, with a length from the policy.
    pub fn add_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let max: usize = self.policy.max_length.max(self.policy.min_length);
        let length: usize = rng.random_range(self.policy.min_length..=max);
        let colors: Vec<Color> = (0..length).map(|_| Color::random(rng)).collect();
        let id: Option<usize> = self.add(&colors);
        if let Some(s) = self.sequences.last()
            && id.is_some()
        {
            debug!("New sequence {}: {}", s.id(), s.symbols());
        }
        id
    }

    /// Add random sequences until the set is full. Return the number of added sequences.
    pub fn fill<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut added: usize = 0;
        while self.add_random(rng).is_some() {
            added += 1;
        }
        added
    }

    /// Whether any active sequence matches the signature in the level mode.
    pub fn validate(&self, signature: &str) -> bool {
        let mode: MatchMode = self.mode();
        self.sequences.iter().any(|s| s.validate(signature, mode))
    }

    /// Verify whether the path can be crunched.
    pub fn matches_sequence(&self, path: &Path, grid: &Grid) -> Result<(), MatchFailure> {
        let signature: String = path.signature(grid);

        if self.segment {
            return if path.len() >= MIN_SEGMENT_PATH && self.validate(&signature) {
                Ok(())
            } else {
                Err(MatchFailure::NoMatch)
            };
        }

        if !self.validate(&signature) {
            Err(MatchFailure::NoMatch)
        } else if !path.correctly_contains_scissors(grid) {
            Err(MatchFailure::MissingScissors)
        } else {
            Ok(())
        }
    }

    /// Consume the sequences that the path matches and return the ones that are removed from the
    /// set. Nothing happens if the path does not match.
    ///
    /// Every matching sequence is consumed; there is no best match selection.
    pub fn crunch(
        &mut self,
        path: &Path,
        grid: &Grid,
        notifications: &mut Notifications,
    ) -> Vec<Sequence> {
        if self.matches_sequence(path, grid).is_err() {
            return Vec::new();
        }
        let signature: String = path.signature(grid);

        let (removed, kept): (Vec<Sequence>, Vec<Sequence>) = if self.segment {
            for sequence in &mut self.sequences {
                if let Some(segment) = sequence.get_matching_segment(&signature) {
                    debug!("Sequence {}: segment {segment:?} consumed", sequence.id());
                    sequence.deactivate(&segment, notifications);
                }
            }
            std::mem::take(&mut self.sequences)
                .into_iter()
                .partition(|s| s.is_consumed())
        } else {
            std::mem::take(&mut self.sequences)
                .into_iter()
                .partition(|s| s.validate(&signature, MatchMode::Full))
        };
        self.sequences = kept;

        for sequence in &removed {
            info!("Sequence {} crunched: {}", sequence.id(), sequence.symbols());
            notifications.push(Notification::SequenceCrunched(sequence.clone()));
        }
        removed
    }
}
