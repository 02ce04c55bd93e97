/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning levels.
//! Helixcrunch builds a level, then plays it with the hint finder for the requested number of
//! turns and prints the final score.
//!
//! # Examples
//!
//! Print a seeded 9x7 grid and its sequences:
//!
//! ```text
//! $ helixcrunch --columns 9 --seed 42 --turns 0 --print
//! ```
//!
//! Play five turns of a falling level loaded from a file, with debug messages:
//!
//! ```text
//! $ helixcrunch --config level.json --mode falling --turns 5 --debug
//! ```

use clap::Parser;
use log::{debug, warn};
use std::env;
use std::path::PathBuf;

use crate::config::{COPYRIGHT_NOTICE, GameMode, LevelConfig};
use crate::engine::direction::Direction;
use crate::hint::HintError;
use crate::level::Level;

/// Number of hint attempts without a crunch before the simulation gives up.
const MAX_STALLED: usize = 20;

/// Simulate Helixcrunch levels for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Level file in JSON format
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of columns in the grid
    #[arg(long)]
    columns: Option<usize>,

    /// Number of rows in the grid
    #[arg(long)]
    rows: Option<usize>,

    /// Number of scissors cells kept on the grid
    #[arg(short, long)]
    scissors: Option<usize>,

    /// Game mode
    #[arg(value_enum, short, long)]
    mode: Option<GameMode>,

    /// Direction the cells fall to in the falling mode
    #[arg(value_enum, short, long)]
    gravity: Option<Direction>,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Number of turns to play with the hint finder
    #[arg(short, long, default_value_t = 3)]
    turns: usize,

    /// Print the grid and the sequences after each crunch
    #[arg(short, long, default_value_t = false)]
    print: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Level configuration from the file, if any, and the command-line overrides.
    fn level_config(&self) -> crate::error::Result<LevelConfig> {
        let mut config: LevelConfig = match &self.config {
            Some(path) => LevelConfig::load(path)?,
            None => LevelConfig::default(),
        };
        if let Some(columns) = self.columns {
            config.grid.columns = columns;
        }
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(scissors) = self.scissors {
            config.grid.scissors = scissors;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(gravity) = self.gravity {
            config.gravity = gravity;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn print_level(level: &Level) {
    println!("{}", level.grid());
    for sequence in level.sequences().active() {
        println!("  sequence {}: {}", sequence.id(), sequence.symbols());
    }
}

/// Play the level with the hint finder until `turns` turns are complete or no path is left.
fn play(level: &mut Level, turns: usize, print: bool) {
    let mut stalled: usize = 0;

    while level.turn() < turns && !level.is_game_over() {
        let hint: Vec<_> = match level.hint() {
            Ok(hint) => hint,
            Err(HintError::NoPath) if level.mode() == GameMode::Continuous => {
                level.tick();
                stalled += 1;
                if stalled >= MAX_STALLED {
                    warn!("No path after {stalled} ticks");
                    break;
                }
                continue;
            }
            Err(e) => {
                println!("Turn {}: {e}", level.turn() + 1);
                break;
            }
        };

        if !level.trace(&hint) {
            warn!("Cannot trace the hint {hint:?}");
            break;
        }
        match level.crunch() {
            Ok(report) => {
                stalled = 0;
                println!(
                    "Turn {}: crunched {} cells, {} sequences{}",
                    level.turn() + usize::from(!report.turn_ended),
                    report.cells.len(),
                    report.sequences.len(),
                    if report.turn_ended { ", turn ended" } else { "" }
                );
            }
            Err(e) => {
                warn!("Hint {hint:?} rejected: {e}");
                break;
            }
        }

        for notification in level.drain_notifications() {
            debug!("{notification:?}");
        }
        if level.mode() == GameMode::Continuous {
            level.tick();
        }
        if print {
            print_level(level);
        }
    }
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config: LevelConfig = match args.level_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    let mut level: Level = match Level::new(config) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if args.print {
        print_level(&level);
    }
    play(&mut level, args.turns, args.print);

    let score = level.score();
    println!(
        "
     turns = {}
     score = {}
     cells = {}
 sequences = {}
 game over = {}",
        level.turn(),
        score.points,
        score.cells,
        score.sequences,
        level.is_game_over()
    );
    0
}
