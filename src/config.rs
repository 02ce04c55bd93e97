/*
config.rs

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

//! Level configuration.
//!
//! A level is described by a [`LevelConfig`] object. Levels can be loaded from JSON files such as:
//!
//! ```json
//! {
//!   "grid": { "columns": 9, "rows": 8, "scissors": 8 },
//!   "mode": "falling",
//!   "gravity": "bottom",
//!   "seed": 42
//! }
//! ```
//!
//! Missing fields take their default values.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::engine::direction::Direction;
use crate::error::{GameError, Result};

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// How the level is played.
///
/// - `Turns`: full matches; holes are filled right after each crunch.
/// - `Long`: segment matches against a long sequence; holes are filled right after each crunch.
/// - `Continuous`: full matches; holes stay until the next tick.
/// - `Falling`: full matches; the grid slides toward the gravity direction after each crunch.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Turns,
    Long,
    Continuous,
    Falling,
}

impl GameMode {
    /// Whether sequences are consumed segment by segment.
    pub fn is_segment(self) -> bool {
        self == GameMode::Long
    }

    /// Sequence count and lengths used when the level does not provide them.
    pub fn default_policy(self) -> SequencePolicy {
        match self {
            GameMode::Turns => SequencePolicy {
                count: 3,
                min_length: 3,
                max_length: 4,
            },
            GameMode::Long => SequencePolicy {
                count: 1,
                min_length: 12,
                max_length: 16,
            },
            GameMode::Continuous | GameMode::Falling => SequencePolicy {
                count: 3,
                min_length: 3,
                max_length: 5,
            },
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameMode::Turns => write!(f, "turns"),
            GameMode::Long => write!(f, "long"),
            GameMode::Continuous => write!(f, "continuous"),
            GameMode::Falling => write!(f, "falling"),
        }
    }
}

/// Number and length of the active sequences.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SequencePolicy {
    /// Maximum number of concurrently active sequences.
    pub count: usize,

    /// Shortest sequence.
    pub min_length: usize,

    /// Longest sequence.
    pub max_length: usize,
}

impl Default for SequencePolicy {
    fn default() -> Self {
        GameMode::default().default_policy()
    }
}

impl SequencePolicy {
    /// Verify the length range.
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(GameError::InvalidSequenceLength {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}

/// Grid construction parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,

    /// Drop the last-row slot of the lower (odd) columns so that the bottom edge is flat.
    pub truncate_last_row: bool,

    /// Number of scissors cells kept on the grid.
    pub scissors: usize,

    /// Cell radius in pixels. Only used by the renderers.
    pub cell_radius: f64,

    /// Probability that a regenerated cell becomes a bonus cell.
    pub bonus_probability: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 7,
            rows: 7,
            truncate_last_row: false,
            scissors: 6,
            cell_radius: 32.0,
            bonus_probability: 0.0,
        }
    }
}

/// Level parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LevelConfig {
    pub grid: GridConfig,

    pub mode: GameMode,

    /// Sequence policy. When `None`, the mode's default policy is used.
    pub sequences: Option<SequencePolicy>,

    /// Direction the cells fall to in [`GameMode::Falling`].
    pub gravity: Direction,

    /// In [`GameMode::Continuous`], number of ticks between two infection escalations.
    /// `0` disables escalation on ticks.
    pub ticks_per_escalation: usize,

    /// Crunch automatically when the pointer is released over a matching path.
    pub auto_crunch: bool,

    /// Seed for the random generator. When `None`, a random seed is used.
    pub seed: Option<u64>,
}

impl LevelConfig {
    /// Load a level from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LevelConfig> {
        debug!("Loading level from {}", path.as_ref().display());
        let reader: BufReader<File> = BufReader::new(File::open(path)?);
        let config: LevelConfig = serde_json::from_reader(reader)?;
        config.sequence_policy().validate()?;
        Ok(config)
    }

    /// Effective sequence policy.
    pub fn sequence_policy(&self) -> SequencePolicy {
        self.sequences.unwrap_or_else(|| self.mode.default_policy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config: LevelConfig =
            serde_json::from_str(r#"{"grid": {"columns": 9}, "mode": "long"}"#).unwrap();

        assert_eq!(config.grid.columns, 9);
        assert_eq!(config.grid.rows, 7);
        assert_eq!(config.grid.scissors, 6);
        assert_eq!(config.mode, GameMode::Long);
        assert_eq!(config.gravity, Direction::Bottom);
        assert_eq!(config.sequence_policy(), GameMode::Long.default_policy());
    }

    #[test]
    fn explicit_policy_overrides_mode() {
        let config: LevelConfig = serde_json::from_str(
            r#"{"sequences": {"count": 2, "min_length": 5, "max_length": 5}, "gravity": "top-left"}"#,
        )
        .unwrap();

        assert_eq!(config.sequence_policy().count, 2);
        assert_eq!(config.gravity, Direction::TopLeft);
    }

    #[test]
    fn invalid_length_range_is_rejected() {
        let policy = SequencePolicy {
            count: 1,
            min_length: 4,
            max_length: 3,
        };
        assert!(matches!(
            policy.validate(),
            Err(GameError::InvalidSequenceLength { min: 4, max: 3 })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = LevelConfig::load("/nonexistent/level.json").unwrap_err();
        assert!(matches!(err, GameError::ConfigRead(_)));
    }
}
