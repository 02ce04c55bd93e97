/*
lib.rs

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

//! Helixcrunch game engine.
//!
//! Crunch paths of colored nucleotides on a hexagonal grid to match the active sequences.
//! [`level::Level`] is the entry point: it owns the grid and the sequences, takes the pointer
//! samples, and reports the changes through [`notifications::Notification`] values that the
//! renderers drain after each call.

pub mod cli_options;
pub mod config;
pub mod engine;
pub mod error;
pub mod gui_lock;
pub mod hint;
pub mod level;
pub mod notifications;
pub mod score;
