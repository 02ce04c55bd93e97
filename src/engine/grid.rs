/*
grid.rs

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

//! Hexagonal grid of nucleotides.
//!
//! The grid owns every cell in a single vector indexed by `row * columns + col`. Neighbor
//! queries are coordinate computations (see [`Direction::delta`]) followed by a lookup in that
//! vector, so cells never reference each other.

use log::{Level, debug, log_enabled};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::fmt;

use super::cell::{Cell, CellState, CellType, Color, Placement};
use super::direction::{Direction, GridPos};
use crate::config::GridConfig;
use crate::error::{GameError, Result};
use crate::notifications::{Notification, Notifications};

/// The grid of nucleotides.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: usize,
    rows: usize,

    /// Number of scissors cells the grid maintains when cells are regenerated.
    scissors_target: usize,

    /// Probability for a regenerated cell to become a bonus cell.
    bonus_probability: f64,

    /// Grid slots. Slots removed by the last-row truncation are `None`.
    slots: Vec<Option<Cell>>,
}

impl Grid {
    /// Build a grid of present cells with random colors and the configured number of scissors.
    ///
    /// # Errors
    ///
    /// The method returns an error if a dimension is zero, or if the grid does not have enough
    /// cells for the scissors.
    pub fn new<R: Rng + ?Sized>(config: &GridConfig, rng: &mut R) -> Result<Grid> {
        if config.columns == 0 || config.rows == 0 {
            return Err(GameError::InvalidDimensions {
                columns: config.columns,
                rows: config.rows,
            });
        }

        let mut slots: Vec<Option<Cell>> = Vec::with_capacity(config.columns * config.rows);
        for row in 0..config.rows {
            for col in 0..config.columns {
                if config.truncate_last_row && row == config.rows - 1 && col % 2 == 1 {
                    slots.push(None);
                } else {
                    slots.push(Some(Cell::new(
                        Placement::Grid((col, row)),
                        Color::random(rng),
                    )));
                }
            }
        }

        let mut grid: Grid = Self {
            columns: config.columns,
            rows: config.rows,
            scissors_target: config.scissors,
            bonus_probability: config.bonus_probability.clamp(0.0, 1.0),
            slots,
        };

        let positions: Vec<GridPos> = grid.positions();
        grid.maintain_scissors_count(&positions, config.scissors, rng)?;
        grid.roll_bonus(&positions, rng);

        if log_enabled!(Level::Debug) {
            debug!(
                "Grid {}x{}: {} cells, {} scissors",
                grid.columns,
                grid.rows,
                positions.len(),
                grid.scissors_count()
            );
            for line in grid.to_string().lines() {
                debug!("{line}");
            }
        }
        Ok(grid)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn scissors_target(&self) -> usize {
        self.scissors_target
    }

    /// Vector index of the given position, if the position is inside the grid.
    fn index(&self, pos: GridPos) -> Option<usize> {
        if pos.0 < self.columns && pos.1 < self.rows {
            Some(pos.1 * self.columns + pos.0)
        } else {
            None
        }
    }

    /// Return the cell at the given position, or `None` outside the grid or for truncated slots.
    pub fn get(&self, pos: GridPos) -> Option<&Cell> {
        self.index(pos).and_then(|i| self.slots[i].as_ref())
    }

    pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut Cell> {
        self.index(pos).and_then(|i| self.slots[i].as_mut())
    }

    /// Whether a cell occupies the given position.
    pub fn contains(&self, pos: GridPos) -> bool {
        self.get(pos).is_some()
    }

    /// Iterate over the occupied slots (holes included).
    pub fn nucleotides(&self) -> impl Iterator<Item = &Cell> {
        self.slots.iter().flatten()
    }

    /// Positions of all the occupied slots, row by row.
    pub fn positions(&self) -> Vec<GridPos> {
        self.nucleotides()
            .filter_map(|c| c.grid_position())
            .collect()
    }

    /// Positions of the holes, row by row.
    pub fn holes(&self) -> Vec<GridPos> {
        self.nucleotides()
            .filter(|c| c.is_missing())
            .filter_map(|c| c.grid_position())
            .collect()
    }

    pub fn scissors_count(&self) -> usize {
        self.nucleotides().filter(|c| c.is_scissors()).count()
    }

    /// Position of the neighbor in the given direction, if that slot is occupied.
    pub fn neighbor_position(&self, pos: GridPos, direction: Direction) -> Option<GridPos> {
        let next: GridPos = direction.step(pos)?;
        if self.contains(next) { Some(next) } else { None }
    }

    /// Return the neighbor of the cell in the given direction.
    pub fn get_neighbor(&self, pos: GridPos, direction: Direction) -> Option<&Cell> {
        self.neighbor_position(pos, direction)
            .and_then(|p| self.get(p))
    }

    /// Return the direction from `a` to `b`, or `None` if the two cells are not neighbors.
    pub fn get_neighbor_index(&self, a: GridPos, b: GridPos) -> Option<Direction> {
        if !self.contains(a) {
            return None;
        }
        Direction::ALL
            .into_iter()
            .find(|d| self.neighbor_position(a, *d) == Some(b))
    }

    /// Whether two cells are neighbors.
    pub fn are_neighbors(&self, a: GridPos, b: GridPos) -> bool {
        self.get_neighbor_index(a, b).is_some()
    }

    /// Walk from the cell in a straight line and return the positions until the edge of the grid.
    /// The starting cell is not included.
    pub fn get_neighbors_in_line(&self, pos: GridPos, direction: Direction) -> Vec<GridPos> {
        let mut line: Vec<GridPos> = Vec::new();
        let mut current: GridPos = pos;
        while let Some(next) = self.neighbor_position(current, direction) {
            line.push(next);
            current = next;
        }
        line
    }

    /// Positions on the six lines that start from the given cell.
    pub fn star(&self, pos: GridPos) -> Vec<GridPos> {
        Direction::ALL
            .into_iter()
            .flat_map(|d| self.get_neighbors_in_line(pos, d))
            .collect()
    }

    /// Give the cell a new random color and the normal type. The state is not changed.
    pub fn regenerate_cell<R: Rng + ?Sized>(&mut self, pos: GridPos, rng: &mut R) {
        if let Some(cell) = self.get_mut(pos) {
            cell.regenerate(rng);
        }
    }

    /// Promote random non-scissors cells of the pool to scissors until the pool contains
    /// `target` scissors cells. Return the number of promoted cells. Positions outside the grid
    /// are ignored.
    ///
    /// # Errors
    ///
    /// The method returns an error if the pool has fewer cells than `target`.
    pub fn maintain_scissors_count<R: Rng + ?Sized>(
        &mut self,
        pool: &[GridPos],
        target: usize,
        rng: &mut R,
    ) -> Result<usize> {
        // Repeated positions count once
        let mut seen: HashSet<GridPos> = HashSet::new();
        let pool: Vec<GridPos> = pool
            .iter()
            .copied()
            .filter(|p| self.contains(*p) && seen.insert(*p))
            .collect();
        if target > pool.len() {
            return Err(GameError::ScissorsTargetTooLarge {
                target,
                available: pool.len(),
            });
        }
        Ok(self.promote_scissors(&pool, target, rng))
    }

    /// Promotion loop. The caller guarantees that `target` does not exceed the pool size.
    fn promote_scissors<R: Rng + ?Sized>(
        &mut self,
        pool: &[GridPos],
        target: usize,
        rng: &mut R,
    ) -> usize {
        let mut count: usize = pool
            .iter()
            .filter(|p| self.get(**p).is_some_and(|c| c.is_scissors()))
            .count();
        let mut promoted: usize = 0;

        while count < target {
            // Only draw among the cells that are not scissors yet
            let candidates: Vec<GridPos> = pool
                .iter()
                .filter(|p| self.get(**p).is_some_and(|c| !c.is_scissors()))
                .copied()
                .collect();
            let Some(pos) = candidates.choose(rng).copied() else {
                break;
            };
            if let Some(cell) = self.get_mut(pos) {
                cell.make_scissors();
                debug!("Scissors at {pos:?}");
            }
            count += 1;
            promoted += 1;
        }
        promoted
    }

    /// Turn some regenerated normal cells into bonus cells.
    fn roll_bonus<R: Rng + ?Sized>(&mut self, pool: &[GridPos], rng: &mut R) {
        if self.bonus_probability <= 0.0 {
            return;
        }
        let p: f64 = self.bonus_probability;
        for pos in pool {
            if let Some(cell) = self.get_mut(*pos)
                && cell.kind == CellType::Normal
                && rng.random_bool(p)
            {
                cell.kind = CellType::Bonus;
            }
        }
    }

    /// Change the state of a cell and notify the renderers. Return `false` if the state did not
    /// change.
    ///
    /// A cell that goes missing also loses its color and its type.
    pub fn set_state(
        &mut self,
        pos: GridPos,
        state: CellState,
        notifications: &mut Notifications,
    ) -> bool {
        match self.get_mut(pos) {
            Some(cell) if cell.state != state => {
                if state == CellState::Missing {
                    cell.clear();
                } else {
                    cell.state = state;
                }
                notifications.push(Notification::StateChanged {
                    placement: Placement::Grid(pos),
                    state,
                });
                true
            }
            _ => false,
        }
    }

    /// Regenerate the given holes, keep the scissors target, and mark them present.
    fn refresh<R: Rng + ?Sized>(
        &mut self,
        positions: &[GridPos],
        rng: &mut R,
        notifications: &mut Notifications,
    ) {
        for pos in positions {
            self.regenerate_cell(*pos, rng);
        }

        // The cells outside the pool already hold some of the scissors
        let deficit: usize = self
            .scissors_target
            .saturating_sub(self.scissors_count())
            .min(positions.len());
        self.promote_scissors(positions, deficit, rng);
        self.roll_bonus(positions, rng);

        for pos in positions {
            self.set_state(*pos, CellState::Present, notifications);
        }
    }

    /// Regenerate every hole in place and return their positions.
    pub fn fill_holes<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        notifications: &mut Notifications,
    ) -> Vec<GridPos> {
        let holes: Vec<GridPos> = self.holes();
        if !holes.is_empty() {
            debug!("Filling {} holes", holes.len());
            self.refresh(&holes, rng, notifications);
        }
        holes
    }

    /// Exchange the content of two slots.
    fn swap(&mut self, a: GridPos, b: GridPos) {
        let (Some(ia), Some(ib)) = (self.index(a), self.index(b)) else {
            return;
        };
        self.slots.swap(ia, ib);
        if let Some(cell) = self.slots[ia].as_mut() {
            cell.placement = Placement::Grid(a);
        }
        if let Some(cell) = self.slots[ib].as_mut() {
            cell.placement = Placement::Grid(b);
        }
    }

    /// Whether a present cell lies further along the line that starts at `pos`.
    fn has_cell_ahead(&self, pos: GridPos, direction: Direction) -> bool {
        self.get_neighbors_in_line(pos, direction)
            .iter()
            .any(|p| self.get(*p).is_some_and(|c| !c.is_missing()))
    }

    /// Move the cells toward `direction` to close the holes, then regenerate the holes that
    /// reached the opposite edge. Return the positions of the regenerated cells.
    ///
    /// Each hole is swapped with its neighbor in the opposite direction until it reaches the
    /// edge of the grid.
    pub fn slide<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
        notifications: &mut Notifications,
    ) -> Vec<GridPos> {
        let pull: Direction = direction.opposite();

        // A hole walk can push another hole back, so look for movable holes until none is left
        loop {
            let Some(hole) = self
                .holes()
                .into_iter()
                .find(|h| self.has_cell_ahead(*h, pull))
            else {
                break;
            };
            let mut current: GridPos = hole;
            while let Some(next) = self.neighbor_position(current, pull) {
                self.swap(current, next);
                if self.get(current).is_some_and(|c| !c.is_missing()) {
                    notifications.push(Notification::CellMoved {
                        from: next,
                        to: current,
                    });
                }
                current = next;
            }
        }

        let holes: Vec<GridPos> = self.holes();
        if !holes.is_empty() {
            debug!("Slide {direction:?}: refreshing {} cells", holes.len());
            self.refresh(&holes, rng, notifications);
        }
        holes
    }

    /// Infect up to `count` random present normal cells. Return the infected positions.
    pub fn infect<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
        notifications: &mut Notifications,
    ) -> Vec<GridPos> {
        let candidates: Vec<GridPos> = self
            .nucleotides()
            .filter(|c| c.is_present_normal())
            .filter_map(|c| c.grid_position())
            .collect();
        let infected: Vec<GridPos> = candidates.choose_multiple(rng, count).copied().collect();
        for pos in &infected {
            self.set_state(*pos, CellState::Infected, notifications);
        }
        debug!("Infected {} cells", infected.len());
        infected
    }

    /// Whether no present normal cell remains.
    pub fn is_game_over(&self) -> bool {
        !self.nucleotides().any(|c| c.is_present_normal())
    }
}

/// ASCII representation of the grid. Each column is two characters wide and the odd columns are
/// drawn half a row lower.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in 0..self.rows * 2 {
            let mut s: String = String::with_capacity(self.columns * 2);
            for col in 0..self.columns {
                let symbol: char = if (line + col) % 2 == 0 {
                    self.get((col, line / 2)).map_or(' ', |c| c.symbol())
                } else {
                    ' '
                };
                s.push(symbol);
                s.push(' ');
            }
            writeln!(f, "{}", s.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(columns: usize, rows: usize, scissors: usize, seed: u64) -> Grid {
        let config = GridConfig {
            columns,
            rows,
            scissors,
            ..GridConfig::default()
        };
        Grid::new(&config, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn construction_places_scissors_target() {
        for seed in 0..20 {
            let g = grid(7, 7, 6, seed);
            assert_eq!(g.scissors_count(), 6);
            assert_eq!(g.nucleotides().count(), 49);
            assert!(g.nucleotides().all(|c| c.state == CellState::Present));
            assert!(
                g.nucleotides()
                    .all(|c| c.is_scissors() == c.color.is_none())
            );
        }
    }

    #[test]
    fn invalid_configurations_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GridConfig {
            columns: 0,
            ..GridConfig::default()
        };
        assert!(matches!(
            Grid::new(&config, &mut rng),
            Err(GameError::InvalidDimensions { columns: 0, rows: 7 })
        ));

        let config = GridConfig {
            columns: 2,
            rows: 2,
            scissors: 5,
            ..GridConfig::default()
        };
        assert!(matches!(
            Grid::new(&config, &mut rng),
            Err(GameError::ScissorsTargetTooLarge {
                target: 5,
                available: 4
            })
        ));
    }

    #[test]
    fn truncation_removes_lower_columns_of_last_row() {
        let config = GridConfig {
            columns: 5,
            rows: 4,
            truncate_last_row: true,
            scissors: 2,
            ..GridConfig::default()
        };
        let g = Grid::new(&config, &mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(g.nucleotides().count(), 18);
        assert!(!g.contains((1, 3)));
        assert!(!g.contains((3, 3)));
        assert!(g.contains((2, 3)));
        assert_eq!(g.get_neighbor((1, 2), Direction::Bottom), None);
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let g = grid(7, 7, 6, 11);
        for a in g.positions() {
            for d in Direction::ALL {
                if let Some(b) = g.neighbor_position(a, d) {
                    assert_eq!(g.neighbor_position(b, d.opposite()), Some(a));
                    assert_eq!(g.get_neighbor_index(a, b), Some(d));
                    assert_eq!(g.get_neighbor_index(b, a), Some(d.opposite()));
                }
            }
        }
    }

    #[test]
    fn neighbor_relation_is_symmetric_on_truncated_grid() {
        let config = GridConfig {
            columns: 6,
            rows: 5,
            truncate_last_row: true,
            scissors: 2,
            ..GridConfig::default()
        };
        let g = Grid::new(&config, &mut StdRng::seed_from_u64(19)).unwrap();
        for a in g.positions() {
            for d in Direction::ALL {
                if let Some(b) = g.neighbor_position(a, d) {
                    assert!(g.contains(b));
                    assert_eq!(g.neighbor_position(b, d.opposite()), Some(a));
                    assert_eq!(g.get_neighbor_index(b, a), Some(d.opposite()));
                }
            }
        }
        // The truncated slots are nobody's neighbor
        assert_eq!(g.neighbor_position((1, 3), Direction::Bottom), None);
        assert_eq!(g.neighbor_position((0, 4), Direction::BottomRight), None);
    }

    #[test]
    fn every_cell_has_at_most_six_neighbors() {
        let g = grid(6, 5, 3, 5);
        for a in g.positions() {
            let n = Direction::ALL
                .into_iter()
                .filter(|d| g.get_neighbor(a, *d).is_some())
                .count();
            assert!(n <= 6);
        }
        // Inner cell
        assert_eq!(
            Direction::ALL
                .into_iter()
                .filter(|d| g.get_neighbor((2, 2), *d).is_some())
                .count(),
            6
        );
    }

    #[test]
    fn neighbor_index_of_non_neighbors() {
        let g = grid(7, 7, 6, 2);
        assert_eq!(g.get_neighbor_index((0, 0), (0, 0)), None);
        assert_eq!(g.get_neighbor_index((0, 0), (3, 3)), None);
        assert_eq!(g.get_neighbor_index((0, 0), (9, 9)), None);
        assert!(g.are_neighbors((0, 0), (1, 0)));
        assert!(g.are_neighbors((1, 0), (0, 1)));
        assert!(!g.are_neighbors((1, 0), (0, 2)));
    }

    #[test]
    fn neighbors_in_line_walks_to_the_edge() {
        let g = grid(7, 7, 6, 4);
        assert_eq!(
            g.get_neighbors_in_line((3, 3), Direction::Top),
            vec![(3, 2), (3, 1), (3, 0)]
        );
        assert_eq!(
            g.get_neighbors_in_line((0, 6), Direction::TopRight),
            vec![(1, 5), (2, 5), (3, 4), (4, 4), (5, 3), (6, 3)]
        );
        assert!(
            g.get_neighbors_in_line((0, 0), Direction::TopLeft)
                .is_empty()
        );
        assert_eq!(g.star((3, 3)).len(), 3 + 3 + 3 + 3 + 3 + 3);
    }

    #[test]
    fn scissors_maintenance_converges_without_flipping_scissors() {
        let mut g = grid(7, 7, 6, 8);
        let mut rng = StdRng::seed_from_u64(99);
        let positions = g.positions();

        let before: Vec<GridPos> = positions
            .iter()
            .filter(|p| g.get(**p).unwrap().is_scissors())
            .copied()
            .collect();

        for target in [6, 10, 20, 49] {
            let existing = g.scissors_count();
            let promoted = g
                .maintain_scissors_count(&positions, target, &mut rng)
                .unwrap();
            assert_eq!(promoted, target - existing);
            assert_eq!(g.scissors_count(), target);
        }
        assert!(before.iter().all(|p| g.get(*p).unwrap().is_scissors()));

        // Asking for fewer scissors than present is a no-op
        assert_eq!(
            g.maintain_scissors_count(&positions, 3, &mut rng).unwrap(),
            0
        );
        assert!(matches!(
            g.maintain_scissors_count(&positions[..4], 5, &mut rng),
            Err(GameError::ScissorsTargetTooLarge { .. })
        ));
    }

    #[test]
    fn scissors_pool_with_repeated_positions() {
        let mut g = grid(4, 4, 0, 12);
        let mut rng = StdRng::seed_from_u64(12);

        assert!(matches!(
            g.maintain_scissors_count(&[(0, 0), (0, 0)], 2, &mut rng),
            Err(GameError::ScissorsTargetTooLarge {
                target: 2,
                available: 1
            })
        ));
        assert_eq!(g.scissors_count(), 0);

        let promoted = g
            .maintain_scissors_count(&[(0, 0), (1, 1), (0, 0)], 2, &mut rng)
            .unwrap();
        assert_eq!(promoted, 2);
        assert_eq!(g.scissors_count(), 2);
        assert!(g.get((0, 0)).unwrap().is_scissors());
        assert!(g.get((1, 1)).unwrap().is_scissors());
    }

    #[test]
    fn missing_cells_lose_color_and_type() {
        let mut g = grid(5, 5, 3, 14);
        let mut n = Notifications::new();
        let scissors: GridPos = g
            .positions()
            .into_iter()
            .find(|p| g.get(*p).unwrap().is_scissors())
            .unwrap();
        let normal: GridPos = g
            .positions()
            .into_iter()
            .find(|p| !g.get(*p).unwrap().is_scissors())
            .unwrap();

        assert!(g.set_state(scissors, CellState::Missing, &mut n));
        assert!(g.set_state(normal, CellState::Missing, &mut n));

        for p in [scissors, normal] {
            let c = g.get(p).unwrap();
            assert_eq!(c.color, None);
            assert_eq!(c.kind, CellType::Normal);
            assert_eq!(c.placement, Placement::Grid(p));
        }
        assert_eq!(g.scissors_count(), 2);
    }

    #[test]
    fn fill_holes_on_stable_grid_is_a_no_op() {
        let mut g = grid(7, 7, 6, 21);
        let snapshot: Vec<Cell> = g.nucleotides().cloned().collect();
        let mut n = Notifications::new();

        let filled = g.fill_holes(&mut StdRng::seed_from_u64(1), &mut n);

        assert!(filled.is_empty());
        assert!(n.is_empty());
        assert_eq!(g.nucleotides().cloned().collect::<Vec<_>>(), snapshot);
    }

    #[test]
    fn fill_holes_regenerates_and_keeps_scissors_target() {
        let mut g = grid(7, 7, 6, 13);
        let mut rng = StdRng::seed_from_u64(2);
        let mut n = Notifications::new();

        // Crunch two scissors and one normal cell
        let scissors: Vec<GridPos> = g
            .positions()
            .into_iter()
            .filter(|p| g.get(*p).unwrap().is_scissors())
            .take(2)
            .collect();
        let normal: GridPos = g
            .positions()
            .into_iter()
            .find(|p| !g.get(*p).unwrap().is_scissors())
            .unwrap();
        for p in scissors.iter().chain([&normal]) {
            g.get_mut(*p).unwrap().state = CellState::Missing;
        }

        let filled = g.fill_holes(&mut rng, &mut n);

        assert_eq!(filled.len(), 3);
        assert!(g.holes().is_empty());
        assert_eq!(g.scissors_count(), 6);
        assert_eq!(n.len(), 3);
        for p in filled {
            let c = g.get(p).unwrap();
            assert_eq!(c.state, CellState::Present);
            assert!(c.is_scissors() || c.color.is_some());
        }
    }

    #[test]
    fn slide_moves_cells_toward_the_direction() {
        let mut g = grid(5, 5, 0, 31);
        let mut rng = StdRng::seed_from_u64(5);
        let mut n = Notifications::new();

        let column_before: Vec<Cell> = (0..5).map(|r| g.get((2, r)).unwrap().clone()).collect();
        g.get_mut((2, 3)).unwrap().state = CellState::Missing;
        g.get_mut((2, 1)).unwrap().state = CellState::Missing;

        let refreshed = g.slide(Direction::Bottom, &mut rng, &mut n);

        assert_eq!(refreshed, vec![(2, 0), (2, 1)]);
        // The surviving cells fell down, keeping their order
        assert_eq!(g.get((2, 4)).unwrap().color, column_before[4].color);
        assert_eq!(g.get((2, 3)).unwrap().color, column_before[2].color);
        assert_eq!(g.get((2, 2)).unwrap().color, column_before[0].color);
        assert_eq!(g.get((2, 2)).unwrap().placement, Placement::Grid((2, 2)));
        assert!(g.holes().is_empty());
        assert!(
            n.iter()
                .any(|e| *e == Notification::CellMoved { from: (2, 0), to: (2, 1) })
        );
    }

    #[test]
    fn slide_with_hole_on_the_pulled_edge_regenerates_in_place() {
        let mut g = grid(5, 5, 0, 17);
        let mut rng = StdRng::seed_from_u64(6);
        let mut n = Notifications::new();
        g.get_mut((2, 0)).unwrap().state = CellState::Missing;
        let others: Vec<Cell> = g
            .nucleotides()
            .filter(|c| c.grid_position() != Some((2, 0)))
            .cloned()
            .collect();

        let refreshed = g.slide(Direction::Bottom, &mut rng, &mut n);

        assert_eq!(refreshed, vec![(2, 0)]);
        assert!(!n.iter().any(|e| matches!(e, Notification::CellMoved { .. })));
        let after: Vec<Cell> = g
            .nucleotides()
            .filter(|c| c.grid_position() != Some((2, 0)))
            .cloned()
            .collect();
        assert_eq!(after, others);
    }

    #[test]
    fn slide_without_holes_is_a_no_op() {
        let mut g = grid(4, 4, 2, 3);
        let mut n = Notifications::new();
        assert!(
            g.slide(Direction::TopRight, &mut StdRng::seed_from_u64(0), &mut n)
                .is_empty()
        );
        assert!(n.is_empty());
    }

    #[test]
    fn diagonal_slide_keeps_scissors_target() {
        let mut g = grid(6, 6, 4, 40);
        let mut rng = StdRng::seed_from_u64(41);
        let mut n = Notifications::new();
        for p in [(0, 5), (1, 4), (3, 3), (4, 0)] {
            g.get_mut(p).unwrap().state = CellState::Missing;
        }

        let refreshed = g.slide(Direction::BottomLeft, &mut rng, &mut n);

        assert_eq!(refreshed.len(), 4);
        assert!(g.holes().is_empty());
        assert_eq!(g.scissors_count(), 4);
        // Holes ended packed against the edge they were pulled to
        for p in &refreshed {
            assert!(
                g.get_neighbors_in_line(*p, Direction::TopRight)
                    .iter()
                    .all(|q| refreshed.contains(q))
            );
        }
    }

    #[test]
    fn game_over_when_no_present_normal_cell_remains() {
        let mut g = grid(3, 3, 2, 9);
        let mut rng = StdRng::seed_from_u64(9);
        let mut n = Notifications::new();
        assert!(!g.is_game_over());

        let infected = g.infect(100, &mut rng, &mut n);
        assert_eq!(infected.len(), 7);
        assert!(g.is_game_over());

        g.set_state(infected[0], CellState::Present, &mut n);
        assert!(!g.is_game_over());
        g.get_mut(infected[0]).unwrap().kind = CellType::Bonus;
        assert!(g.is_game_over());
    }

    #[test]
    fn display_draws_odd_columns_lower() {
        let g = grid(3, 2, 0, 1);
        let lines: Vec<String> = g.to_string().lines().map(String::from).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].chars().nth(2), Some(' '));
        assert_ne!(lines[1].chars().nth(2), Some(' '));
    }
}
