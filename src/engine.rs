/*
engine.rs

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

//! Grid, path, and sequence model.
//!
//! The playing field is a [`grid::Grid`] of hexagonal slots laid out in columns.
//! Odd columns are drawn half a cell lower than even columns, so the six neighbors of a slot
//! depend on the parity of its column.
//! [`direction::Direction`] gives the six directions and their column-dependent offsets.
//!
//! Each slot holds a [`cell::Cell`] (a nucleotide): a colored cell, a scissors cell, a bonus
//! cell, or a hole waiting to be regenerated.
//!
//! The player draws a [`path::Path`] through neighboring cells.
//! The colors of the path, read in order and ignoring the scissors, form its signature.
//! A path can be crunched when its signature matches one of the active sequences of the
//! [`sequences::SequenceSet`]:
//!
//! * In standard levels, the signature must be a whole sequence, read forward or backward, and
//!   the path must hold a scissors cell that is neither its first nor its last cell.
//! * In segment levels, the signature can be any run of the sequence, at least three cells long.
//!   The matched cells of the sequence become inactive, and the sequence is removed once all its
//!   cells are inactive.
//!
//! After a crunch, the holes left in the grid are regenerated in place by
//! [`grid::Grid::fill_holes`], or closed by moving the other cells with [`grid::Grid::slide`].
//! Both keep the number of scissors cells on the grid.

pub mod cell;
pub mod direction;
pub mod grid;
pub mod path;
pub mod sequences;
