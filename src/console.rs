/*
 *  console.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Line-oriented console harness: keys in, result lines out
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

use std::io::{BufRead, Write};
use log::{debug, info};

use crate::display::ConsoleDisplay;
use crate::engine::{CalculatorMode, Command, EngineHandle};
use crate::resources::FixedResources;

pub const BANNER: &[&str] = &[
    "========================================",
    "        calcbridge console harness      ",
    "========================================",
    "Basic commands: 0-9, ., +, -, *, /, =, C(lear), Q(uit)",
];

pub const GOODBYE: &str = "Goodbye!";

/// Harness behaviour picked from the merged configuration
#[derive(Debug, Clone, Default)]
pub struct ConsoleOptions {
    pub mode: CalculatorMode,
    pub digit_grouping: bool,
    pub show_expression: bool,
    pub banner: bool,
}

/// Key character to engine command; `None` for anything the harness ignores
pub fn map_char(c: char) -> Option<Command> {
    match c {
        '0'..='9' => c.to_digit(10).and_then(|d| Command::digit(d as u8)),
        '.' => Some(Command::Point),
        '+' => Some(Command::Add),
        '-' => Some(Command::Subtract),
        '*' => Some(Command::Multiply),
        '/' => Some(Command::Divide),
        '=' => Some(Command::Equals),
        'c' | 'C' => Some(Command::Clear),
        _ => None,
    }
}

/// Whether a token ends the session
pub fn is_quit(token: &str) -> bool {
    token == "q" || token == "Q"
}

/// Send every mapped character of `token`, in order
pub fn send_token(engine: &mut EngineHandle<ConsoleDisplay>, token: &str) {
    for command in token.chars().filter_map(map_char) {
        engine.send_command(command);
    }
}

/// Drive one harness session until `q` or end of input
///
/// Returns the engine so callers can inspect the final state.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    options: &ConsoleOptions,
) -> std::io::Result<EngineHandle<ConsoleDisplay>> {
    let mut engine = EngineHandle::new(ConsoleDisplay::new(), &FixedResources);
    engine.set_mode(options.mode);
    engine.set_digit_grouping(options.digit_grouping);
    info!("Console session started in {:?} mode", options.mode);

    if options.banner {
        for line in BANNER {
            writeln!(output, "{line}")?;
        }
    }

    'session: for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if is_quit(token) {
                debug!("quit requested");
                break 'session;
            }
            send_token(&mut engine, token);

            let display = engine.display();
            if options.show_expression && !display.expression().is_empty() {
                writeln!(output, "Expression: {}", display.expression())?;
            }
            writeln!(output, "{}", display.result_line())?;
        }
    }

    writeln!(output, "{GOODBYE}")?;
    output.flush()?;
    Ok(engine)
}
