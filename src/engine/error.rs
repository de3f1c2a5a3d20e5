/*
 *  engine/error.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Arithmetic failures reported through the error display
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

use thiserror::Error;

/// Engine-side arithmetic failure
///
/// Never returned to a host. The `Display` text is what the engine shows as
/// primary display with the error flag raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("Result is undefined")]
    Undefined,

    #[error("Invalid input")]
    InvalidInput,

    #[error("Overflow")]
    Overflow,
}

pub type CalcResult<T> = Result<T, CalcError>;

/// Reject non-finite results
pub(crate) fn checked(value: f64) -> CalcResult<f64> {
    if value.is_nan() {
        Err(CalcError::InvalidInput)
    } else if value.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(value)
    }
}
