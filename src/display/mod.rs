/*
 *  display/mod.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display sink contract and its host-side implementations
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

// Core trait definitions
pub mod traits;
pub mod narrow;

// Sink implementations
pub mod caching;
pub mod console;

// Recording sink for testing
#[cfg(test)]
pub mod mock;

// Re-exports for convenience
pub use traits::{CalcDisplay, ExpressionCommand, ExpressionToken};
pub use narrow::{narrow_to_ascii, narrow_to_c_string, PLACEHOLDER};
pub use caching::{CachingDisplay, UpdateCallbackFn, ZERO_DISPLAY};
pub use console::{ConsoleDisplay, ERROR_MARKER};
