/*
gui_lock.rs

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

//! Advisory lock on player input.
//!
//! The lock is not a synchronization primitive. It is a set of reasons that renderers and the
//! path read to ignore input while something is in progress.

use std::collections::BTreeSet;

/// Why the input is locked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockReason {
    /// A path is being crunched.
    Crunch,

    /// A renderer is playing an animation.
    Animation,
}

#[derive(Debug, Default, Clone)]
pub struct GuiLock {
    reasons: BTreeSet<LockReason>,
}

impl GuiLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&mut self, reason: LockReason) {
        self.reasons.insert(reason);
    }

    pub fn unlock(&mut self, reason: LockReason) {
        self.reasons.remove(&reason);
    }

    pub fn is_locked(&self) -> bool {
        !self.reasons.is_empty()
    }

    pub fn is_locked_by(&self, reason: LockReason) -> bool {
        self.reasons.contains(&reason)
    }
}
