/*
 *  engine/mod.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Reference calculation engine and its owning handle
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

//! Calculation engine
//!
//! The adapter layers in this crate are written against the engine's
//! command-and-callback contract:
//!
//! 1. **Commands** (`command.rs`) - integer codes, forwarded unvalidated
//! 2. **Display sink** (`crate::display`) - synchronous change callbacks
//! 3. **Resources** (`crate::resources`) - number format strings, read once
//!
//! `calc.rs` holds a compact immediate-execution engine honouring that
//! contract; `handle.rs` binds one engine to one display sink.

pub mod command;
pub mod error;
pub mod format;
pub mod calc;
pub mod handle;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use command::{Command, CommandKind};
pub use error::{CalcError, CalcResult};
pub use format::{initial_one_time_setup, number_format, NumberFormat};
pub use calc::{CalcEngine, HistoryItem};
pub use handle::EngineHandle;

/// Calculation mode, mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorMode {
    #[default]
    Standard,
    Scientific,
    Programmer,
}

impl CalculatorMode {
    /// Mode for a boundary mode code (0, 1, 2)
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Standard),
            1 => Some(Self::Scientific),
            2 => Some(Self::Programmer),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Standard => 0,
            Self::Scientific => 1,
            Self::Programmer => 2,
        }
    }

    /// Whether `command` is available in this mode; others are ignored
    pub fn supports(self, command: Command) -> bool {
        use Command::*;
        match command {
            Point | SquareRoot | Square | Reciprocal | Percent => self != Self::Programmer,
            And | Or | Xor | ShiftLeft | ShiftRight => self == Self::Programmer,
            Modulo | OpenParen | CloseParen => self != Self::Standard,
            Power | Pi => self == Self::Scientific,
            _ => true,
        }
    }
}
