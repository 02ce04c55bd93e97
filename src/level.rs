/*
level.rs

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

//! Manage the level in progress.
//!
//! [`Level`] owns the grid, the path, the active sequences, and the score. It turns the pointer
//! samples into path changes and, when the player crunches a path, runs the cascade:
//!
//! 1. the matching sequences are consumed,
//! 2. the path cells are scored and removed (bonus cells also blast their star),
//! 3. the holes are refilled right away, slid toward the gravity direction, or left for the next
//!    tick, depending on the game mode,
//! 4. if no sequence is left, the turn ends: holes are filled, new sequences are drawn, and the
//!    infection escalates.
//!
//! Everything happens synchronously. The renderers read the state through the accessors and
//! drain the notifications after each call.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GameMode, LevelConfig};
use crate::engine::cell::{CellState, CellType};
use crate::engine::direction::GridPos;
use crate::engine::grid::Grid;
use crate::engine::path::Path;
use crate::engine::sequences::{MatchFailure, Sequence, SequenceSet};
use crate::error::Result;
use crate::gui_lock::GuiLock;
use crate::hint::{HintError, HintFinder};
use crate::notifications::{Notification, Notifications};
use crate::score::Score;

/// Outcome of a successful crunch.
#[derive(Debug, Clone, Default)]
pub struct CrunchReport {
    /// Cells removed from the grid, path cells first, in path order.
    pub cells: Vec<GridPos>,

    /// Sequences fully consumed by the crunch.
    pub sequences: Vec<Sequence>,

    /// Cells regenerated after the crunch.
    pub refreshed: Vec<GridPos>,

    /// Whether the crunch ended the turn.
    pub turn_ended: bool,
}

/// Manage the status of the level in progress.
#[derive(Debug)]
pub struct Level {
    config: LevelConfig,
    grid: Grid,
    path: Path,
    sequences: SequenceSet,
    lock: GuiLock,
    score: Score,
    notifications: Notifications,
    rng: StdRng,

    /// Whether the pointer is down.
    pointer_down: bool,

    /// Number of completed turns.
    turn: usize,

    /// Number of cells infected at each escalation.
    infection: usize,

    /// Number of ticks since the level started.
    ticks: usize,

    /// Whether the game over notification was sent.
    game_over: bool,
}

impl Level {
    /// Create a [`Level`] object and draw the grid and the first sequences.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid or the sequence policy is invalid.
    pub fn new(config: LevelConfig) -> Result<Self> {
        let policy = config.sequence_policy();
        policy.validate()?;

        let mut rng: StdRng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid: Grid = Grid::new(&config.grid, &mut rng)?;
        let mut sequences: SequenceSet = SequenceSet::new(policy, config.mode.is_segment());
        sequences.fill(&mut rng);

        info!(
            "New {} level {}x{} with {} sequences",
            config.mode,
            grid.columns(),
            grid.rows(),
            sequences.len()
        );

        Ok(Self {
            config,
            grid,
            path: Path::new(),
            sequences,
            lock: GuiLock::new(),
            score: Score::new(),
            notifications: Notifications::new(),
            rng,
            pointer_down: false,
            turn: 0,
            infection: 0,
            ticks: 0,
            game_over: false,
        })
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sequences(&self) -> &SequenceSet {
        &self.sequences
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Renderers lock the input while they animate.
    pub fn lock_mut(&mut self) -> &mut GuiLock {
        &mut self.lock
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn infection(&self) -> usize {
        self.infection
    }

    pub fn is_game_over(&self) -> bool {
        self.grid.is_game_over()
    }

    /// Remove and return the pending notifications.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    /// The pointer went down over the given cell, or outside the grid.
    pub fn pointer_down(&mut self, pos: Option<GridPos>) -> bool {
        self.pointer_down = true;
        match pos {
            Some(p) => self
                .path
                .start_at(&self.grid, &self.lock, p, &mut self.notifications),
            None => {
                if !self.path.is_empty() {
                    self.path.remove(&mut self.notifications);
                }
                false
            }
        }
    }

    /// The pointer moved over the given cell, or outside the grid.
    ///
    /// Moving back over the cell before the last one removes the last cell.
    pub fn pointer_move(&mut self, pos: Option<GridPos>) -> bool {
        let Some(p) = pos else {
            return false;
        };
        if !self.pointer_down || self.path.get_last() == Some(p) || self.lock.is_locked() {
            return false;
        }
        if self.path.step_back(p, &mut self.notifications) {
            return true;
        }
        self.path
            .add(&self.grid, &self.lock, p, &mut self.notifications)
    }

    /// The pointer was released. When the level crunches automatically and the path matches,
    /// the path is crunched.
    pub fn pointer_up(&mut self) -> Option<CrunchReport> {
        self.pointer_down = false;
        if self.config.auto_crunch && !self.path.is_empty() {
            self.crunch().ok()
        } else {
            None
        }
    }

    /// Verify whether the current path can be crunched.
    pub fn matches_sequence(&self) -> core::result::Result<(), MatchFailure> {
        self.sequences.matches_sequence(&self.path, &self.grid)
    }

    /// Crunch the current path and run the cascade.
    ///
    /// # Errors
    ///
    /// The method returns the reason why the path does not match. In that case nothing changes.
    pub fn crunch(&mut self) -> core::result::Result<CrunchReport, MatchFailure> {
        if self.path.is_empty() {
            return Err(MatchFailure::NoMatch);
        }
        self.matches_sequence()?;

        let sequences: Vec<Sequence> =
            self.sequences
                .crunch(&self.path, &self.grid, &mut self.notifications);
        self.score.add_sequences(sequences.len());

        let bonus: Vec<GridPos> = self
            .path
            .items()
            .iter()
            .filter(|p| self.grid.get(**p).is_some_and(|c| c.kind == CellType::Bonus))
            .copied()
            .collect();

        let mut cells: Vec<GridPos> = self.path.crunch(
            &mut self.grid,
            &mut self.lock,
            &mut self.score,
            &mut self.notifications,
        );
        for center in bonus {
            cells.extend(self.blast(center));
        }

        let turn_ended: bool = self.sequences.is_empty();
        let refreshed: Vec<GridPos> = if turn_ended {
            self.end_turn()
        } else if self.config.mode == GameMode::Continuous {
            Vec::new()
        } else {
            self.refill()
        };
        self.check_game_over();

        debug!(
            "Crunch: {} cells, {} sequences, {} refreshed, score {}",
            cells.len(),
            sequences.len(),
            refreshed.len(),
            self.score.points
        );
        Ok(CrunchReport {
            cells,
            sequences,
            refreshed,
            turn_ended,
        })
    }

    /// Crunch the cells on the six lines around a bonus cell.
    fn blast(&mut self, center: GridPos) -> Vec<GridPos> {
        let mut blasted: Vec<GridPos> = Vec::new();
        for pos in self.grid.star(center) {
            let Some(state) = self
                .grid
                .get(pos)
                .filter(|c| !c.is_missing())
                .map(|c| c.state)
            else {
                continue;
            };
            let points: u32 = self.score.add_cell(state);
            self.grid
                .set_state(pos, CellState::Missing, &mut self.notifications);
            self.notifications.push(Notification::ScoreFade {
                position: pos,
                points,
            });
            blasted.push(pos);
        }
        debug!("Bonus at {center:?} blasted {} cells", blasted.len());
        blasted
    }

    /// Close the holes the way the game mode requires.
    fn refill(&mut self) -> Vec<GridPos> {
        match self.config.mode {
            GameMode::Falling => {
                self.grid
                    .slide(self.config.gravity, &mut self.rng, &mut self.notifications)
            }
            _ => self.grid.fill_holes(&mut self.rng, &mut self.notifications),
        }
    }

    /// Escalate the infection and infect that many cells.
    fn escalate(&mut self) {
        self.infection += 1;
        self.grid
            .infect(self.infection, &mut self.rng, &mut self.notifications);
    }

    /// Fill the holes, draw new sequences, and escalate the infection.
    fn end_turn(&mut self) -> Vec<GridPos> {
        let refreshed: Vec<GridPos> = self.refill();
        self.sequences.fill(&mut self.rng);
        self.turn += 1;
        self.escalate();
        info!(
            "Turn {} ended, infection level {}",
            self.turn, self.infection
        );
        self.notifications
            .push(Notification::TurnEnded { turn: self.turn });
        refreshed
    }

    /// Periodic step of the continuous mode: regenerate the holes and, from time to time,
    /// escalate the infection. Other modes ignore ticks.
    pub fn tick(&mut self) -> Vec<GridPos> {
        if self.config.mode != GameMode::Continuous {
            return Vec::new();
        }
        self.ticks += 1;
        let refreshed: Vec<GridPos> = self.grid.fill_holes(&mut self.rng, &mut self.notifications);
        if self.config.ticks_per_escalation > 0 && self.ticks % self.config.ticks_per_escalation == 0
        {
            self.escalate();
        }
        self.check_game_over();
        refreshed
    }

    fn check_game_over(&mut self) {
        if !self.game_over && self.grid.is_game_over() {
            info!("Game over, score {}", self.score.points);
            self.game_over = true;
            self.notifications.push(Notification::GameOver);
        }
    }

    /// Search a path that would match one of the active sequences.
    pub fn hint(&self) -> core::result::Result<Vec<GridPos>, HintError> {
        HintFinder::new(&self.grid).find(&self.sequences)
    }

    /// Trace the given cells with the pointer, as the player would.
    pub fn trace(&mut self, cells: &[GridPos]) -> bool {
        let Some((first, rest)) = cells.split_first() else {
            return false;
        };
        if !self.path.is_empty() {
            self.path.remove(&mut self.notifications);
        }
        let mut accepted: bool = self.pointer_down(Some(*first));
        for pos in rest {
            accepted &= self.pointer_move(Some(*pos));
        }
        self.pointer_down = false;
        accepted && self.path.items() == cells
    }
}
