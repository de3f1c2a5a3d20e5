/*
 *  display/mock.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Recording display sink for testing the engine contract
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

use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{CalcDisplay, ExpressionCommand, ExpressionToken};

/// Recording display sink
///
/// Every callback is recorded into shared state so a test can keep a clone
/// of the state handle after moving the sink into an engine handle.
#[derive(Debug, Clone, Default)]
pub struct MockDisplay {
    state: Arc<Mutex<MockDisplayState>>,
}

/// Internal state for the mock display (shared for inspection in tests)
#[derive(Debug, Default)]
pub struct MockDisplayState {
    /// Every primary display report, in order
    pub primary: Vec<(String, bool)>,

    /// Every set_is_in_error report
    pub error_states: Vec<bool>,

    /// Latest expression tokens, rendered
    pub expression: Vec<String>,

    /// Latest structured expression
    pub commands: Vec<ExpressionCommand>,

    /// Number of expression reports
    pub expression_count: usize,

    pub parenthesis_counts: Vec<u32>,
    pub no_right_paren_count: usize,
    pub max_digits_count: usize,
    pub binary_operator_count: usize,
    pub history_indices: Vec<u32>,
    pub memorized: Vec<String>,
    pub memorized_count: usize,
    pub memory_changes: Vec<u32>,
    pub input_changed_count: usize,
}

impl MockDisplayState {
    /// Total number of callbacks of any kind
    pub fn total_calls(&self) -> usize {
        self.primary.len()
            + self.error_states.len()
            + self.expression_count
            + self.parenthesis_counts.len()
            + self.no_right_paren_count
            + self.max_digits_count
            + self.binary_operator_count
            + self.history_indices.len()
            + self.memorized_count
            + self.memory_changes.len()
            + self.input_changed_count
    }

    /// Text of the latest primary display report
    pub fn last_display(&self) -> Option<&str> {
        self.primary.last().map(|(text, _)| text.as_str())
    }
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared state handle
    pub fn state(&self) -> Arc<Mutex<MockDisplayState>> {
        Arc::clone(&self.state)
    }

    fn lock(&self) -> MutexGuard<'_, MockDisplayState> {
        // a panicking test poisons the lock; keep recording for the others
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CalcDisplay for MockDisplay {
    fn set_primary_display(&mut self, text: &str, is_error: bool) {
        self.lock().primary.push((text.to_string(), is_error));
    }

    fn set_is_in_error(&mut self, is_in_error: bool) {
        self.lock().error_states.push(is_in_error);
    }

    fn set_expression_display(&mut self, tokens: &[ExpressionToken], commands: &[ExpressionCommand]) {
        let mut state = self.lock();
        state.expression = tokens.iter().map(|t| t.text.clone()).collect();
        state.commands = commands.to_vec();
        state.expression_count += 1;
    }

    fn set_parenthesis_number(&mut self, count: u32) {
        self.lock().parenthesis_counts.push(count);
    }

    fn on_no_right_paren_added(&mut self) {
        self.lock().no_right_paren_count += 1;
    }

    fn max_digits_reached(&mut self) {
        self.lock().max_digits_count += 1;
    }

    fn binary_operator_received(&mut self) {
        self.lock().binary_operator_count += 1;
    }

    fn on_history_item_added(&mut self, added_item_index: u32) {
        self.lock().history_indices.push(added_item_index);
    }

    fn set_memorized_numbers(&mut self, memorized_numbers: &[String]) {
        let mut state = self.lock();
        state.memorized = memorized_numbers.to_vec();
        state.memorized_count += 1;
    }

    fn memory_item_changed(&mut self, index_of_memory: u32) {
        self.lock().memory_changes.push(index_of_memory);
    }

    fn input_changed(&mut self) {
        self.lock().input_changed_count += 1;
    }
}
