/*
 *  engine/handle.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Engine handle - one engine bound to one display sink
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

use log::{debug, trace};

use super::calc::{CalcEngine, HistoryItem};
use super::command::Command;
use super::format::initial_one_time_setup;
use super::CalculatorMode;
use crate::display::CalcDisplay;
use crate::resources::ResourceProvider;

/// Owns one engine instance and the display sink it reports to
///
/// The sink is fixed at construction. The resource provider is only
/// consulted for the process-wide number format setup, which happens at most
/// once no matter how many handles are created.
#[derive(Debug)]
pub struct EngineHandle<D: CalcDisplay> {
    engine: CalcEngine,
    display: D,
}

impl<D: CalcDisplay> EngineHandle<D> {
    /// Create an engine in standard mode; the sink receives nothing until
    /// the first command
    pub fn new(display: D, resources: &dyn ResourceProvider) -> Self {
        let format = initial_one_time_setup(resources);
        let mut engine = CalcEngine::new(format);
        engine.set_mode(CalculatorMode::Standard);

        debug!("Created engine handle");
        Self { engine, display }
    }

    /// Forward a raw command code; unknown codes are dropped here
    pub fn send_command_code(&mut self, code: i32) {
        match Command::from_code(code) {
            Some(command) => self.send_command(command),
            None => trace!("ignoring unknown command code {}", code),
        }
    }

    pub fn send_command(&mut self, command: Command) {
        self.engine.process(command, &mut self.display);
    }

    pub fn set_mode(&mut self, mode: CalculatorMode) {
        self.engine.set_mode(mode);
    }

    pub fn mode(&self) -> CalculatorMode {
        self.engine.mode()
    }

    pub fn set_digit_grouping(&mut self, enabled: bool) {
        self.engine.set_digit_grouping(enabled);
    }

    pub fn history(&self) -> &[HistoryItem] {
        self.engine.history()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
