/*
 *  display/traits.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Core trait definitions for the engine's display sink contract
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

use crate::engine::Command;

/// A single rendered token of the pending expression
///
/// `command_index` points into the structured command list passed alongside
/// the tokens, or is `None` for purely decorative tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionToken {
    /// Text as it should appear (e.g. `"12"`, `"+"`)
    pub text: String,

    /// Index of the command that produced this token
    pub command_index: Option<usize>,
}

impl ExpressionToken {
    pub fn new(text: impl Into<String>, command_index: Option<usize>) -> Self {
        Self { text: text.into(), command_index }
    }
}

/// Structured form of the pending expression, one entry per engine command
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionCommand {
    /// A committed operand value (already formatted for display)
    Operand(String),

    /// A binary operator waiting for its right-hand side
    Binary(Command),

    /// A unary function applied to the current value
    Unary(Command),

    /// An opening or closing parenthesis
    Parentheses(Command),
}

/// Callback capability set the engine requires of its host
///
/// Every entry point is required: a host that does not render a particular
/// piece of state still has to acknowledge it, usually with an empty body.
/// All methods are invoked synchronously from inside the command that caused
/// the change, on the thread that issued the command. Implementations must
/// not call back into the engine.
pub trait CalcDisplay {
    /// Primary display text changed. `is_error` marks engine error text.
    fn set_primary_display(&mut self, text: &str, is_error: bool);

    /// The engine entered or left its error state
    fn set_is_in_error(&mut self, is_in_error: bool);

    /// Pending expression changed; both slices may be empty
    fn set_expression_display(&mut self, tokens: &[ExpressionToken], commands: &[ExpressionCommand]);

    /// Number of currently open parentheses
    fn set_parenthesis_number(&mut self, count: u32);

    /// A closing parenthesis was rejected because none was open
    fn on_no_right_paren_added(&mut self);

    /// Entry hit the maximum number of digits; the keystroke was dropped
    fn max_digits_reached(&mut self);

    /// A binary operator was accepted
    fn binary_operator_received(&mut self);

    /// A calculation was appended to the history at `added_item_index`
    fn on_history_item_added(&mut self, added_item_index: u32);

    /// Full, formatted contents of the memory list (slot 0 first)
    fn set_memorized_numbers(&mut self, memorized_numbers: &[String]);

    /// Memory slot `index_of_memory` was modified in place
    fn memory_item_changed(&mut self, index_of_memory: u32);

    /// The in-progress entry changed (digit, point, backspace, sign)
    fn input_changed(&mut self);
}
