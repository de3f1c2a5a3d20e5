/*
 *  engine/calc.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Reference calculation engine - immediate execution state machine
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

use super::command::{Command, CommandKind};
use super::error::{checked, CalcError, CalcResult};
use super::format::NumberFormat;
use super::CalculatorMode;
use crate::display::{CalcDisplay, ExpressionCommand, ExpressionToken};

/// Maximum digits in a decimal entry
pub const MAX_DECIMAL_DIGITS: usize = 16;

/// Largest programmer entry magnitude; every integer up to here is exact in `f64`
pub const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// Maximum parenthesis nesting
pub const MAX_PAREN_DEPTH: usize = 25;

/// One completed calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub expression: String,
    pub result: String,
}

/// Outer calculation suspended by an open parenthesis
#[derive(Debug, Clone)]
struct Frame {
    accumulator: Option<f64>,
    pending: Option<Command>,
}

/// The calculation state machine
///
/// Operators execute immediately, left to right. Every visible change is
/// pushed to the display sink passed into [`CalcEngine::process`]; the engine
/// itself never holds on to a sink.
#[derive(Debug)]
pub struct CalcEngine {
    mode: CalculatorMode,
    format: &'static NumberFormat,
    digit_grouping: bool,

    /// In-progress entry in engine notation (`-12.5`), `None` when showing a result
    entry: Option<String>,
    /// Value behind the current display
    value: f64,
    /// True when `value` was produced after the last operator was accepted
    fresh_operand: bool,

    accumulator: Option<f64>,
    pending: Option<Command>,
    /// Operator and right-hand side of the last `=`, replayed by a repeated `=`
    last_operation: Option<(Command, f64)>,
    frames: Vec<Frame>,

    tokens: Vec<ExpressionToken>,
    commands: Vec<ExpressionCommand>,

    error: Option<CalcError>,
    memory: Vec<f64>,
    history: Vec<HistoryItem>,
}

impl CalcEngine {
    pub fn new(format: &'static NumberFormat) -> Self {
        Self {
            mode: CalculatorMode::Standard,
            format,
            digit_grouping: false,
            entry: None,
            value: 0.0,
            fresh_operand: false,
            accumulator: None,
            pending: None,
            last_operation: None,
            frames: Vec::new(),
            tokens: Vec::new(),
            commands: Vec::new(),
            error: None,
            memory: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn mode(&self) -> CalculatorMode {
        self.mode
    }

    /// Switch mode for subsequent commands; reports nothing to the display
    pub fn set_mode(&mut self, mode: CalculatorMode) {
        if self.mode != mode {
            debug!("Engine mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Insert thousands separators into subsequently reported numbers
    pub fn set_digit_grouping(&mut self, enabled: bool) {
        self.digit_grouping = enabled;
    }

    pub fn is_in_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    #[cfg(test)]
    pub fn memory(&self) -> &[f64] {
        &self.memory
    }

    /// Process one command, reporting every change to `display`
    pub fn process<D: CalcDisplay + ?Sized>(&mut self, command: Command, display: &mut D) {
        trace!("command {:?} ({}) in {:?} mode", command, command.code(), self.mode);

        if !self.mode.supports(command) {
            trace!("{:?} not available in {:?} mode", command, self.mode);
            return;
        }

        if self.error.is_some() {
            match command.kind() {
                CommandKind::Digit(_) => self.reset(display, false),
                _ if matches!(command, Command::Clear | Command::ClearEntry) => {}
                _ => {
                    trace!("ignoring {:?} while in error", command);
                    return;
                }
            }
        }

        let outcome = match command.kind() {
            CommandKind::Digit(d) => {
                self.append_digit(d, display);
                Ok(())
            }
            CommandKind::Edit => {
                self.edit(command, display);
                Ok(())
            }
            CommandKind::Binary => self.binary_operator(command, display),
            CommandKind::Unary => self.unary(command, display),
            CommandKind::Equals => self.equals(display),
            CommandKind::Memory => self.memory_command(command, display),
            CommandKind::Parenthesis => self.parenthesis(command, display),
        };

        if let Err(err) = outcome {
            self.fail(err, display);
        }
    }

    // --- entry editing ---------------------------------------------------------

    fn append_digit<D: CalcDisplay + ?Sized>(&mut self, digit: u8, display: &mut D) {
        let programmer = self.mode == CalculatorMode::Programmer;
        let entry = self.entry.get_or_insert_with(String::new);
        let is_zero = entry.trim_start_matches('-') == "0";

        let fits = if programmer {
            // the entry must survive the trip through the f64 operand unchanged
            format!("{entry}{digit}")
                .parse::<i64>()
                .is_ok_and(|v| v.unsigned_abs() <= MAX_EXACT_INTEGER)
        } else {
            entry.chars().filter(char::is_ascii_digit).count() < MAX_DECIMAL_DIGITS
        };

        if !fits && !is_zero {
            display.max_digits_reached();
            return;
        }

        if is_zero {
            entry.pop();
        }
        entry.push(char::from(b'0' + digit));

        self.entry_changed(display);
    }

    fn edit<D: CalcDisplay + ?Sized>(&mut self, command: Command, display: &mut D) {
        match command {
            Command::Point => {
                let entry = self.entry.get_or_insert_with(String::new);
                if entry.contains('.') {
                    return;
                }
                if entry.is_empty() || entry == "-" {
                    entry.push('0');
                }
                entry.push('.');
                self.entry_changed(display);
            }
            Command::Backspace => {
                let Some(entry) = self.entry.as_mut() else {
                    return;
                };
                entry.pop();
                if entry.is_empty() || entry == "-" {
                    *entry = "0".to_string();
                }
                self.entry_changed(display);
            }
            Command::ClearEntry => {
                if self.error.is_some() {
                    self.reset(display, true);
                    return;
                }
                self.entry = None;
                self.value = 0.0;
                self.fresh_operand = false;
                self.show_value(display);
            }
            Command::Clear => self.reset(display, true),
            _ => {}
        }
    }

    fn entry_changed<D: CalcDisplay + ?Sized>(&mut self, display: &mut D) {
        let Some(entry) = self.entry.as_deref() else {
            return;
        };
        self.value = entry.parse::<f64>().unwrap_or(0.0);
        self.fresh_operand = true;

        let text = self.format.localize_entry(entry, self.digit_grouping);
        display.input_changed();
        display.set_primary_display(&text, false);
    }

    /// Back to the zero state; memory and history survive
    fn reset<D: CalcDisplay + ?Sized>(&mut self, display: &mut D, announce: bool) {
        let was_in_error = self.error.take().is_some();
        let had_parens = !self.frames.is_empty();

        self.entry = None;
        self.value = 0.0;
        self.fresh_operand = false;
        self.accumulator = None;
        self.pending = None;
        self.last_operation = None;
        self.frames.clear();
        self.tokens.clear();
        self.commands.clear();

        if was_in_error {
            display.set_is_in_error(false);
        }
        if had_parens {
            display.set_parenthesis_number(0);
        }
        if announce {
            display.set_expression_display(&[], &[]);
            display.set_primary_display("0", false);
        }
    }

    // --- operators -------------------------------------------------------------

    fn binary_operator<D: CalcDisplay + ?Sized>(&mut self, op: Command, display: &mut D) -> CalcResult<()> {
        let operand = self.commit_operand();
        display.binary_operator_received();

        match (self.accumulator, self.pending) {
            (Some(lhs), Some(pending)) if self.fresh_operand => {
                self.push_operand_token(operand);
                let result = self.apply(lhs, pending, operand)?;
                self.accumulator = Some(result);
                self.value = result;
                self.push_operator_token(op);
                self.show_value(display);
            }
            (Some(_), Some(_)) => {
                // operator typed twice in a row: replace the pending one
                self.tokens.pop();
                self.commands.pop();
                self.push_operator_token(op);
            }
            _ => {
                self.push_operand_token(operand);
                self.accumulator = Some(operand);
                self.push_operator_token(op);
            }
        }

        self.pending = Some(op);
        self.fresh_operand = false;
        display.set_expression_display(&self.tokens, &self.commands);
        Ok(())
    }

    fn unary<D: CalcDisplay + ?Sized>(&mut self, op: Command, display: &mut D) -> CalcResult<()> {
        if op == Command::Sign {
            if let Some(entry) = self.entry.as_mut() {
                if entry.trim_start_matches('-') == "0" {
                    return Ok(());
                }
                match entry.strip_prefix('-') {
                    Some(rest) => *entry = rest.to_string(),
                    None => entry.insert(0, '-'),
                }
                self.entry_changed(display);
                return Ok(());
            }
        }

        let x = self.commit_operand();
        let result = checked(match op {
            Command::Sign => -x,
            Command::SquareRoot if x < 0.0 => return Err(CalcError::InvalidInput),
            Command::SquareRoot => x.sqrt(),
            Command::Square => x * x,
            Command::Reciprocal if x == 0.0 => return Err(CalcError::DivideByZero),
            Command::Reciprocal => 1.0 / x,
            Command::Percent => match (self.accumulator, self.pending) {
                (Some(lhs), Some(Command::Add | Command::Subtract)) => lhs * x / 100.0,
                _ => x / 100.0,
            },
            Command::Pi => std::f64::consts::PI,
            _ => x,
        })?;

        self.value = result;
        self.fresh_operand = true;
        self.show_value(display);
        Ok(())
    }

    fn equals<D: CalcDisplay + ?Sized>(&mut self, display: &mut D) -> CalcResult<()> {
        while !self.frames.is_empty() {
            self.close_paren(display)?;
        }

        let operand = self.commit_operand();
        let (lhs, op, rhs) = match (self.accumulator, self.pending) {
            (Some(lhs), Some(op)) => (lhs, op, if self.fresh_operand { operand } else { lhs }),
            _ => match self.last_operation {
                Some((op, rhs)) => (operand, op, rhs),
                None => {
                    self.value = operand;
                    self.fresh_operand = true;
                    self.show_value(display);
                    return Ok(());
                }
            },
        };

        let mut expression: Vec<String> = if self.tokens.is_empty() {
            vec![self.render(lhs), op.symbol().to_string()]
        } else {
            self.tokens.iter().map(|t| t.text.clone()).collect()
        };
        if !self.ends_with_group() {
            expression.push(self.render(rhs));
        }
        expression.push(Command::Equals.symbol().to_string());

        let result = self.apply(lhs, op, rhs)?;
        self.last_operation = Some((op, rhs));
        self.accumulator = None;
        self.pending = None;
        self.value = result;
        self.fresh_operand = true;
        self.tokens.clear();
        self.commands.clear();

        self.history.push(HistoryItem { expression: expression.join(" "), result: self.render(result) });
        display.on_history_item_added((self.history.len() - 1) as u32);
        display.set_expression_display(&[], &[]);
        self.show_value(display);
        Ok(())
    }

    // --- parentheses -----------------------------------------------------------

    fn parenthesis<D: CalcDisplay + ?Sized>(&mut self, command: Command, display: &mut D) -> CalcResult<()> {
        match command {
            Command::OpenParen => {
                if self.frames.len() >= MAX_PAREN_DEPTH {
                    return Ok(());
                }
                self.frames.push(Frame { accumulator: self.accumulator.take(), pending: self.pending.take() });
                self.entry = None;
                self.fresh_operand = false;
                self.tokens.push(ExpressionToken::new("(", Some(self.commands.len())));
                self.commands.push(ExpressionCommand::Parentheses(Command::OpenParen));

                display.set_parenthesis_number(self.frames.len() as u32);
                display.set_expression_display(&self.tokens, &self.commands);
                Ok(())
            }
            Command::CloseParen => {
                if self.frames.is_empty() {
                    display.on_no_right_paren_added();
                    return Ok(());
                }
                self.close_paren(display)?;
                display.set_expression_display(&self.tokens, &self.commands);
                self.show_value(display);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn close_paren<D: CalcDisplay + ?Sized>(&mut self, display: &mut D) -> CalcResult<()> {
        let operand = self.commit_operand();
        let inner = match (self.accumulator, self.pending) {
            (Some(lhs), Some(op)) => {
                let rhs = if self.fresh_operand { operand } else { lhs };
                self.push_operand_token(rhs);
                self.apply(lhs, op, rhs)?
            }
            _ => {
                self.push_operand_token(operand);
                operand
            }
        };

        if let Some(frame) = self.frames.pop() {
            self.accumulator = frame.accumulator;
            self.pending = frame.pending;
        }
        self.tokens.push(ExpressionToken::new(")", Some(self.commands.len())));
        self.commands.push(ExpressionCommand::Parentheses(Command::CloseParen));

        self.value = inner;
        self.fresh_operand = true;
        display.set_parenthesis_number(self.frames.len() as u32);
        Ok(())
    }

    // --- memory ----------------------------------------------------------------

    fn memory_command<D: CalcDisplay + ?Sized>(&mut self, command: Command, display: &mut D) -> CalcResult<()> {
        let x = self.commit_operand();
        self.fresh_operand = true;

        match command {
            Command::MemoryStore => self.memory.insert(0, x),
            Command::MemoryRecall => {
                if let Some(&recalled) = self.memory.first() {
                    self.value = recalled;
                    self.show_value(display);
                }
                return Ok(());
            }
            Command::MemoryAdd | Command::MemorySubtract => {
                let delta = if command == Command::MemoryAdd { x } else { -x };
                match self.memory.first_mut() {
                    Some(slot) => *slot = checked(*slot + delta)?,
                    None => self.memory.push(delta),
                }
                display.memory_item_changed(0);
            }
            Command::MemoryClear => self.memory.clear(),
            _ => return Ok(()),
        }

        let rendered: Vec<String> = self.memory.iter().map(|&v| self.render(v)).collect();
        display.set_memorized_numbers(&rendered);
        Ok(())
    }

    // --- helpers ---------------------------------------------------------------

    /// Finish any in-progress entry and return the current operand
    fn commit_operand(&mut self) -> f64 {
        if self.entry.take().is_some() && self.mode == CalculatorMode::Programmer {
            self.value = self.value.trunc();
        }
        self.value
    }

    fn apply(&self, lhs: f64, op: Command, rhs: f64) -> CalcResult<f64> {
        if self.mode == CalculatorMode::Programmer {
            return apply_integer(lhs as i64, op, rhs as i64).map(|v| v as f64);
        }

        let result = match op {
            Command::Add => lhs + rhs,
            Command::Subtract => lhs - rhs,
            Command::Multiply => lhs * rhs,
            Command::Divide | Command::Modulo if rhs == 0.0 => {
                return Err(if lhs == 0.0 { CalcError::Undefined } else { CalcError::DivideByZero });
            }
            Command::Divide => lhs / rhs,
            Command::Modulo => lhs % rhs,
            Command::Power => lhs.powf(rhs),
            _ => return Err(CalcError::InvalidInput),
        };
        checked(result)
    }

    fn render(&self, value: f64) -> String {
        match self.mode {
            CalculatorMode::Programmer => self.format.format_integer(value as i64, self.digit_grouping),
            _ => self.format.format_value(value, self.digit_grouping),
        }
    }

    fn show_value<D: CalcDisplay + ?Sized>(&self, display: &mut D) {
        display.set_primary_display(&self.render(self.value), false);
    }

    /// True when the last token closes a parenthesized group, which already
    /// stands for the current operand
    fn ends_with_group(&self) -> bool {
        matches!(self.commands.last(), Some(ExpressionCommand::Parentheses(Command::CloseParen)))
    }

    fn push_operand_token(&mut self, value: f64) {
        if self.ends_with_group() {
            return;
        }
        let text = self.render(value);
        self.tokens.push(ExpressionToken::new(text.clone(), Some(self.commands.len())));
        self.commands.push(ExpressionCommand::Operand(text));
    }

    fn push_operator_token(&mut self, op: Command) {
        self.tokens.push(ExpressionToken::new(op.symbol(), Some(self.commands.len())));
        self.commands.push(ExpressionCommand::Binary(op));
    }

    fn fail<D: CalcDisplay + ?Sized>(&mut self, err: CalcError, display: &mut D) {
        debug!("Engine error: {}", err);
        self.error = Some(err);
        self.entry = None;
        self.value = 0.0;
        self.fresh_operand = false;
        display.set_is_in_error(true);
        display.set_primary_display(&err.to_string(), true);
    }
}

fn apply_integer(lhs: i64, op: Command, rhs: i64) -> CalcResult<i64> {
    let result = match op {
        Command::Add => lhs.wrapping_add(rhs),
        Command::Subtract => lhs.wrapping_sub(rhs),
        Command::Multiply => lhs.wrapping_mul(rhs),
        Command::Divide | Command::Modulo if rhs == 0 => {
            return Err(if lhs == 0 { CalcError::Undefined } else { CalcError::DivideByZero });
        }
        Command::Divide => lhs.wrapping_div(rhs),
        Command::Modulo => lhs.wrapping_rem(rhs),
        Command::And => lhs & rhs,
        Command::Or => lhs | rhs,
        Command::Xor => lhs ^ rhs,
        Command::ShiftLeft => lhs.wrapping_shl((rhs & 63) as u32),
        Command::ShiftRight => lhs.wrapping_shr((rhs & 63) as u32),
        _ => return Err(CalcError::InvalidInput),
    };
    Ok(result)
}
