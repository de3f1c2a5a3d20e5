/*
 *  lib.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Library root
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

//! # calcbridge
//!
//! Adapter between a stateful calculator engine and its hosts:
//!
//! - [`display`] - the display sink contract and its console and caching sinks
//! - [`engine`] - the command-driven engine and the handle owning it
//! - [`resources`] - engine configuration strings
//! - [`bridge`] - engine plus caching sink, the object behind the C ABI
//! - [`console`] - the line-oriented harness
//! - [`config`] - YAML and command line configuration for the harness
//!
//! The C ABI itself lives in the `calcbridge-capi` workspace member.

pub mod display;
pub mod engine;
pub mod resources;
pub mod bridge;
pub mod console;
pub mod config;

pub use bridge::CalcBridge;
pub use display::{CalcDisplay, CachingDisplay, ConsoleDisplay, UpdateCallbackFn};
pub use engine::{CalculatorMode, Command, EngineHandle};
pub use resources::{FixedResources, ResourceProvider};
