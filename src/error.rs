/*
error.rs

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

//! Errors raised while building or configuring a level.
//!
//! Expected game conditions (selecting a hole, a non adjacent cell, playing while the GUI is
//! locked) are not errors: the engine reports them with boolean return values.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid grid dimensions {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("Cannot place {target} scissors in a pool of {available} cells")]
    ScissorsTargetTooLarge { target: usize, available: usize },

    #[error("Invalid sequence length range {min}..={max}")]
    InvalidSequenceLength { min: usize, max: usize },

    #[error("Cannot read the level file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Cannot parse the level file: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, GameError>;
