/*
notifications.rs

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

//! Notifications sent to the renderers.
//!
//! The engine pushes [`Notification`] values into a [`Notifications`] queue in the order the
//! changes happen. The session owner drains the queue once per step and forwards the values to
//! the animation, audio, and scoring layers.

use std::collections::VecDeque;

use crate::engine::cell::{CellState, Placement};
use crate::engine::direction::GridPos;
use crate::engine::sequences::Sequence;

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The path changed.
    PathUpdated,

    /// A sequence was fully consumed and removed from the active set.
    SequenceCrunched(Sequence),

    /// A cell transitioned to a new state.
    StateChanged { placement: Placement, state: CellState },

    /// A slide moved the content of a grid slot to another slot.
    CellMoved { from: GridPos, to: GridPos },

    /// Points scored for a crunched cell, for the score fade effect.
    ScoreFade { position: GridPos, points: u32 },

    /// A turn ended and a new one started.
    TurnEnded { turn: usize },

    /// No playable cell remains.
    GameOver,
}

/// FIFO queue of notifications.
#[derive(Debug, Default, Clone)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    /// Create an empty [`Notifications`] queue.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remove and return all the pending notifications, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    /// Iterate over the pending notifications without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }
}
