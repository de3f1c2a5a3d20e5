/*
 *  display/caching.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display sink that caches the latest display for boundary readers
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

use std::ffi::{c_void, CStr, CString};
use log::trace;

use super::narrow::narrow_to_c_string;
use super::traits::{CalcDisplay, ExpressionCommand, ExpressionToken};

/// Signature of the host's change-notification callback
pub type UpdateCallbackFn = extern "C" fn(context: *mut c_void);

/// Display text shown before the engine has reported anything
pub const ZERO_DISPLAY: &str = "0";

/// A registered (function, context) pair
#[derive(Debug, Clone, Copy)]
struct UpdateCallback {
    func: UpdateCallbackFn,
    context: *mut c_void,
}

// SAFETY: the context pointer is never dereferenced on this side of the
// boundary, only handed back to `func`. Whoever registered the pair owns the
// promise that calling `func(context)` from the thread driving the bridge is
// sound; the bridge itself is only ever driven from one thread at a time.
unsafe impl Send for UpdateCallback {}

impl UpdateCallback {
    fn fire(&self) {
        (self.func)(self.context);
    }
}

/// ABI-oriented display sink
///
/// Retains the primary display in native and boundary form plus the error
/// flag of the latest report, and notifies a single registered callback each
/// time the primary display is set. Everything else the engine reports is
/// acknowledged and dropped.
#[derive(Debug)]
pub struct CachingDisplay {
    /// Authoritative native text
    native: String,

    /// `native` narrowed to ASCII, NUL-terminated for C readers
    boundary: CString,

    /// Expression boundary form; never populated, see DESIGN.md
    expression: CString,

    /// Error flag from the latest primary display report
    is_error: bool,

    callback: Option<UpdateCallback>,
}

impl Default for CachingDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl CachingDisplay {
    pub fn new() -> Self {
        Self {
            native: ZERO_DISPLAY.to_string(),
            boundary: narrow_to_c_string(ZERO_DISPLAY),
            expression: CString::default(),
            is_error: false,
            callback: None,
        }
    }

    /// Latest display text in native form
    pub fn display(&self) -> &str {
        &self.native
    }

    /// Latest display text in boundary form
    ///
    /// The returned slice lives inside the cache and is replaced by the next
    /// primary display report.
    pub fn display_boundary(&self) -> &CStr {
        &self.boundary
    }

    /// Expression text in boundary form (always empty)
    pub fn expression_boundary(&self) -> &CStr {
        &self.expression
    }

    /// Error flag as of the latest report
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Replace the change callback; `None` disables notification
    pub fn register_update_callback(&mut self, callback: Option<UpdateCallbackFn>, context: *mut c_void) {
        self.callback = callback.map(|func| UpdateCallback { func, context });
    }

    /// True while a callback is registered
    pub fn has_update_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl CalcDisplay for CachingDisplay {
    fn set_primary_display(&mut self, text: &str, is_error: bool) {
        trace!("primary display -> {:?} (error: {})", text, is_error);

        self.native.clear();
        self.native.push_str(text);
        self.boundary = narrow_to_c_string(&self.native);
        self.is_error = is_error;

        if let Some(callback) = self.callback {
            callback.fire();
        }
    }

    fn set_is_in_error(&mut self, is_in_error: bool) {
        self.is_error = is_in_error;
    }

    fn set_expression_display(&mut self, _tokens: &[ExpressionToken], _commands: &[ExpressionCommand]) {}

    fn set_parenthesis_number(&mut self, _count: u32) {}

    fn on_no_right_paren_added(&mut self) {}

    fn max_digits_reached(&mut self) {}

    fn binary_operator_received(&mut self) {}

    fn on_history_item_added(&mut self, _added_item_index: u32) {}

    fn set_memorized_numbers(&mut self, _memorized_numbers: &[String]) {}

    fn memory_item_changed(&mut self, _index_of_memory: u32) {}

    fn input_changed(&mut self) {}
}
