/*
 *  bridge.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  The bridge - engine handle plus caching display, the one stateful
 *  object exposed to foreign hosts
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

use std::ffi::{c_void, CStr};
use log::debug;

use crate::display::{CachingDisplay, UpdateCallbackFn};
use crate::engine::{CalculatorMode, EngineHandle, HistoryItem};
use crate::resources::{FixedResources, ResourceProvider};

/// Composition of one engine with the caching display sink
///
/// Commands go in as raw integer codes, display changes come back through
/// the cache and an optional change callback. The bridge never fails: engine
/// errors show up as error display text with [`CalcBridge::is_error`] set.
///
/// A bridge is driven from one thread at a time. Separate bridges share
/// nothing and may live on different threads.
#[derive(Debug)]
pub struct CalcBridge {
    engine: EngineHandle<CachingDisplay>,
}

impl Default for CalcBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcBridge {
    /// Standard mode bridge showing `"0"`, using the fixed resource strings
    pub fn new() -> Self {
        Self::with_resources(&FixedResources)
    }

    /// As [`CalcBridge::new`] with a caller supplied resource provider
    ///
    /// The provider only matters if this is the first engine in the process.
    pub fn with_resources(resources: &dyn ResourceProvider) -> Self {
        let engine = EngineHandle::new(CachingDisplay::new(), resources);
        debug!("CalcBridge created");
        Self { engine }
    }

    /// Forward a command code to the engine
    ///
    /// Any change callback fires synchronously before this returns. Codes the
    /// engine does not know are ignored without a callback.
    pub fn send_command(&mut self, code: i32) {
        self.engine.send_command_code(code);
    }

    /// Switch mode for subsequent commands; the display cache is untouched
    pub fn set_mode(&mut self, mode: CalculatorMode) {
        self.engine.set_mode(mode);
    }

    pub fn set_standard_mode(&mut self) {
        self.set_mode(CalculatorMode::Standard);
    }

    pub fn set_scientific_mode(&mut self) {
        self.set_mode(CalculatorMode::Scientific);
    }

    pub fn set_programmer_mode(&mut self) {
        self.set_mode(CalculatorMode::Programmer);
    }

    pub fn mode(&self) -> CalculatorMode {
        self.engine.mode()
    }

    /// Display text in native form
    pub fn display(&self) -> &str {
        self.engine.display().display()
    }

    /// Display text in boundary form
    ///
    /// Borrowed from the cache: the next command may replace it.
    pub fn display_boundary(&self) -> &CStr {
        self.engine.display().display_boundary()
    }

    /// Expression text in boundary form; expression tracking is not wired
    /// through, so this is always empty
    pub fn expression_boundary(&self) -> &CStr {
        self.engine.display().expression_boundary()
    }

    /// Error flag of the latest display report
    pub fn is_error(&self) -> bool {
        self.engine.display().is_error()
    }

    pub fn history(&self) -> &[HistoryItem] {
        self.engine.history()
    }

    pub fn set_digit_grouping(&mut self, enabled: bool) {
        self.engine.set_digit_grouping(enabled);
    }

    /// Replace the change callback; `None` turns notification off
    ///
    /// `context` is handed back to `callback` untouched and never
    /// dereferenced here. The callback must not call back into this bridge.
    pub fn register_update_callback(&mut self, callback: Option<UpdateCallbackFn>, context: *mut c_void) {
        let display = self.engine.display_mut();
        display.register_update_callback(callback, context);
        debug!("Update callback {}", if display.has_update_callback() { "registered" } else { "cleared" });
    }
}
