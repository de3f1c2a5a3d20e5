/*
 *  display/console.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Console-oriented display sink
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

use super::caching::ZERO_DISPLAY;
use super::traits::{CalcDisplay, ExpressionCommand, ExpressionToken};

/// Suffix printed after the display text when the engine reported an error
pub const ERROR_MARKER: &str = " (Error)";

/// Display sink for the line-oriented console harness
///
/// Keeps the text state a terminal can show: the primary display with its
/// error flag and the pending expression. Parenthesis depth and memory have
/// no harness keys and are only logged. Nothing is printed from inside a
/// callback; the harness renders after each token.
#[derive(Debug, Clone)]
pub struct ConsoleDisplay {
    display: String,
    is_error: bool,
    expression: String,
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self {
            display: ZERO_DISPLAY.to_string(),
            is_error: false,
            expression: String::new(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Pending expression, tokens joined by single spaces
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// `Result: <display>` with the error marker when applicable
    pub fn result_line(&self) -> String {
        format!(
            "Result: {}{}",
            self.display,
            if self.is_error { ERROR_MARKER } else { "" }
        )
    }
}

impl CalcDisplay for ConsoleDisplay {
    fn set_primary_display(&mut self, text: &str, is_error: bool) {
        self.display.clear();
        self.display.push_str(text);
        self.is_error = is_error;
    }

    fn set_is_in_error(&mut self, is_in_error: bool) {
        self.is_error = is_in_error;
    }

    fn set_expression_display(&mut self, tokens: &[ExpressionToken], commands: &[ExpressionCommand]) {
        for token in tokens {
            let command = token.command_index.and_then(|i| commands.get(i));
            trace!("expression token {:?} <- {:?}", token.text, command);
        }
        self.expression = tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
    }

    fn set_parenthesis_number(&mut self, count: u32) {
        debug!("{} open parentheses", count);
    }

    fn on_no_right_paren_added(&mut self) {
        debug!("no open parenthesis to close");
    }

    fn max_digits_reached(&mut self) {
        debug!("maximum digits reached");
    }

    fn binary_operator_received(&mut self) {}

    fn on_history_item_added(&mut self, added_item_index: u32) {
        debug!("history item {} added", added_item_index);
    }

    fn set_memorized_numbers(&mut self, memorized_numbers: &[String]) {
        debug!("memory now {:?}", memorized_numbers);
    }

    fn memory_item_changed(&mut self, _index_of_memory: u32) {}

    fn input_changed(&mut self) {}
}
