/*
 *  engine/command.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Integer command codes understood by the engine
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

/// Engine command codes
///
/// Values match the command enumeration hosts already send across the C
/// boundary, so a host can pass them through untouched.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Sign = 80,
    Clear = 81,
    ClearEntry = 82,
    Backspace = 83,
    Point = 84,
    And = 86,
    Or = 87,
    Xor = 88,
    ShiftLeft = 89,
    ShiftRight = 90,
    Divide = 91,
    Multiply = 92,
    Add = 93,
    Subtract = 94,
    Modulo = 95,
    Power = 97,
    SquareRoot = 110,
    Square = 111,
    Reciprocal = 114,
    Percent = 118,
    Pi = 120,
    Equals = 121,
    MemoryClear = 122,
    MemoryRecall = 123,
    MemoryStore = 124,
    MemoryAdd = 125,
    MemorySubtract = 126,
    OpenParen = 128,
    CloseParen = 129,
    Digit0 = 130,
    Digit1 = 131,
    Digit2 = 132,
    Digit3 = 133,
    Digit4 = 134,
    Digit5 = 135,
    Digit6 = 136,
    Digit7 = 137,
    Digit8 = 138,
    Digit9 = 139,
}

/// Coarse classification used by the engine's dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Digit(u8),
    Binary,
    Unary,
    Memory,
    Parenthesis,
    Edit,
    Equals,
}

const ALL: [Command; 39] = [
    Command::Sign,
    Command::Clear,
    Command::ClearEntry,
    Command::Backspace,
    Command::Point,
    Command::And,
    Command::Or,
    Command::Xor,
    Command::ShiftLeft,
    Command::ShiftRight,
    Command::Divide,
    Command::Multiply,
    Command::Add,
    Command::Subtract,
    Command::Modulo,
    Command::Power,
    Command::SquareRoot,
    Command::Square,
    Command::Reciprocal,
    Command::Percent,
    Command::Pi,
    Command::Equals,
    Command::MemoryClear,
    Command::MemoryRecall,
    Command::MemoryStore,
    Command::MemoryAdd,
    Command::MemorySubtract,
    Command::OpenParen,
    Command::CloseParen,
    Command::Digit0,
    Command::Digit1,
    Command::Digit2,
    Command::Digit3,
    Command::Digit4,
    Command::Digit5,
    Command::Digit6,
    Command::Digit7,
    Command::Digit8,
    Command::Digit9,
];

impl Command {
    /// Look up a raw code; `None` for codes the engine does not know
    pub fn from_code(code: i32) -> Option<Self> {
        ALL.iter().copied().find(|c| c.code() == code)
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Digit command for `value` (0..=9)
    pub fn digit(value: u8) -> Option<Self> {
        if value > 9 {
            return None;
        }
        Self::from_code(Command::Digit0.code() + i32::from(value))
    }

    pub fn kind(self) -> CommandKind {
        use Command::*;
        match self {
            Digit0 | Digit1 | Digit2 | Digit3 | Digit4 | Digit5 | Digit6 | Digit7 | Digit8 | Digit9 => {
                CommandKind::Digit((self.code() - Digit0.code()) as u8)
            }
            And | Or | Xor | ShiftLeft | ShiftRight | Divide | Multiply | Add | Subtract | Modulo | Power => {
                CommandKind::Binary
            }
            SquareRoot | Square | Reciprocal | Percent | Pi | Sign => CommandKind::Unary,
            MemoryClear | MemoryRecall | MemoryStore | MemoryAdd | MemorySubtract => CommandKind::Memory,
            OpenParen | CloseParen => CommandKind::Parenthesis,
            Clear | ClearEntry | Backspace | Point => CommandKind::Edit,
            Equals => CommandKind::Equals,
        }
    }

    /// Operator symbol used in expression tokens
    pub fn symbol(self) -> &'static str {
        use Command::*;
        match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "mod",
            Power => "^",
            And => "AND",
            Or => "OR",
            Xor => "XOR",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            SquareRoot => "sqrt",
            Square => "sqr",
            Reciprocal => "1/",
            Percent => "%",
            Pi => "pi",
            Sign => "negate",
            OpenParen => "(",
            CloseParen => ")",
            Equals => "=",
            _ => "",
        }
    }
}
