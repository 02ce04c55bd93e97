/*
path.rs

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

//! Path that the player traces across the grid.
//!
//! The path is built from pointer samples: [`Path::start_at`] when the pointer goes down and
//! [`Path::add`] while it moves. Each accepted change pushes a
//! [`Notification::PathUpdated`] notification. Rejected changes return `false` and leave the
//! path untouched.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::cell::{CellState, CellType};
use super::direction::GridPos;
use super::grid::Grid;
use crate::gui_lock::{GuiLock, LockReason};
use crate::notifications::{Notification, Notifications};
use crate::score::Score;

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of grid positions.
    items: Vec<GridPos>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::items`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<GridPos>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Path {
    /// Create an empty [`Path`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`Path`] object from a list of positions. Adjacency is not verified.
    pub fn from_positions(positions: &[GridPos]) -> Self {
        Self {
            items: positions.to_vec(),
            visited: positions.iter().copied().collect(),
        }
    }

    /// Return the positions in the path, in traversal order.
    pub fn items(&self) -> &[GridPos] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, pos: GridPos) -> bool {
        self.visited.contains(&pos)
    }

    /// Return the index of the given cell in the path.
    pub fn position(&self, pos: GridPos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        self.items.iter().position(|p| *p == pos)
    }

    pub fn get_first(&self) -> Option<GridPos> {
        self.items.first().copied()
    }

    pub fn get_last(&self) -> Option<GridPos> {
        self.items.last().copied()
    }

    fn push(&mut self, pos: GridPos) {
        self.items.push(pos);
        self.visited.insert(pos);
    }

    fn clear(&mut self) {
        self.items.clear();
        self.visited.clear();
    }

    /// Keep the cells up to (and including) the cell at the given index.
    fn truncate(&mut self, index: usize) {
        for pos in self.items.drain(index + 1..) {
            self.visited.remove(&pos);
        }
    }

    fn starts_with_scissors(&self, grid: &Grid) -> bool {
        self.get_first()
            .and_then(|p| grid.get(p))
            .is_some_and(|c| c.is_scissors())
    }

    /// Whether the cell can be part of a path.
    fn is_selectable(grid: &Grid, pos: GridPos) -> bool {
        grid.get(pos).is_some_and(|c| !c.is_missing())
    }

    /// Start, restart, or backtrack the path from the given cell.
    ///
    /// - Selecting the first cell of the path clears the path.
    /// - Selecting another cell of the path truncates the path after that cell.
    /// - Otherwise the cell is appended if it can be, or the path restarts from that cell.
    pub fn start_at(
        &mut self,
        grid: &Grid,
        lock: &GuiLock,
        pos: GridPos,
        notifications: &mut Notifications,
    ) -> bool {
        if lock.is_locked() || !Self::is_selectable(grid, pos) {
            return false;
        }

        if self.get_first() == Some(pos) {
            self.clear();
        } else if let Some(index) = self.position(pos) {
            self.truncate(index);
        } else if !self.starts_with_scissors(grid) && self.add(grid, lock, pos, notifications) {
            return true;
        } else {
            self.clear();
            self.push(pos);
        }
        notifications.push(Notification::PathUpdated);
        true
    }

    /// Append a neighbor of the last cell to the path.
    ///
    /// A path that starts with a scissors cell cannot grow: the path is cleared and the cell is
    /// rejected.
    pub fn add(
        &mut self,
        grid: &Grid,
        lock: &GuiLock,
        pos: GridPos,
        notifications: &mut Notifications,
    ) -> bool {
        if lock.is_locked() {
            return false;
        }
        let Some(last) = self.get_last() else {
            return false;
        };
        if self.starts_with_scissors(grid) {
            debug!("Path starts with scissors, clearing it");
            self.clear();
            notifications.push(Notification::PathUpdated);
            return false;
        }
        if !Self::is_selectable(grid, pos) || self.contains(pos) || !grid.are_neighbors(last, pos)
        {
            return false;
        }
        self.push(pos);
        notifications.push(Notification::PathUpdated);
        true
    }

    /// Remove the last cell when the given cell is the one just before it.
    pub fn step_back(&mut self, pos: GridPos, notifications: &mut Notifications) -> bool {
        let l: usize = self.items.len();
        if l >= 2 && self.items[l - 2] == pos {
            self.truncate(l - 2);
            notifications.push(Notification::PathUpdated);
            true
        } else {
            false
        }
    }

    /// Clear the path.
    pub fn remove(&mut self, notifications: &mut Notifications) {
        self.clear();
        notifications.push(Notification::PathUpdated);
    }

    /// Whether the path contains at least one scissors cell, and neither starts nor ends with one.
    pub fn correctly_contains_scissors(&self, grid: &Grid) -> bool {
        let is_scissors = |pos: Option<GridPos>| -> bool {
            pos.and_then(|p| grid.get(p))
                .is_some_and(|c| c.kind == CellType::Scissors)
        };
        self.items.iter().any(|p| is_scissors(Some(*p)))
            && !is_scissors(self.get_first())
            && !is_scissors(self.get_last())
    }

    /// Symbols of the non-scissors cells, in path order.
    pub fn signature(&self, grid: &Grid) -> String {
        self.items
            .iter()
            .filter_map(|p| grid.get(*p))
            .filter(|c| !c.is_scissors())
            .map(|c| c.symbol())
            .collect()
    }

    /// Remove the cells of the path from the grid and score them, in path order.
    ///
    /// The path must already be validated against the sequences.
    ///
    /// # Panics
    ///
    /// Crunching an empty path is a caller bug.
    pub fn crunch(
        &mut self,
        grid: &mut Grid,
        lock: &mut GuiLock,
        score: &mut Score,
        notifications: &mut Notifications,
    ) -> Vec<GridPos> {
        assert!(!self.items.is_empty(), "Crunching an empty path");

        lock.lock(LockReason::Crunch);
        let crunched: Vec<GridPos> = self.items.clone();
        for pos in &crunched {
            let Some(state) = grid.get(*pos).map(|c| c.state) else {
                continue;
            };
            let points: u32 = score.add_cell(state);
            grid.set_state(*pos, CellState::Missing, notifications);
            notifications.push(Notification::ScoreFade {
                position: *pos,
                points,
            });
        }
        debug!("Crunched {} cells, score {}", crunched.len(), score.points);
        lock.unlock(LockReason::Crunch);
        self.remove(notifications);
        crunched
    }
}
