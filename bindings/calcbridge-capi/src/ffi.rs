/*
 *  bindings/calcbridge-capi/src/ffi.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  C ABI types shared with the host header
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

//! FFI types for the calcbridge C ABI
//!
//! Everything here has a twin in `include/calcbridge.h`; keep the two in step.

use std::ffi::c_void;
use std::os::raw::c_int;

/// ABI version
pub const CALC_BRIDGE_ABI_VERSION_MAJOR: u32 = 1;
pub const CALC_BRIDGE_ABI_VERSION_MINOR: u32 = 0;
pub const CALC_BRIDGE_ABI_VERSION_PATCH: u32 = 0;

/// Mode codes accepted by `calc_bridge_set_mode`
pub const CALC_BRIDGE_MODE_STANDARD: c_int = 0;
pub const CALC_BRIDGE_MODE_SCIENTIFIC: c_int = 1;
pub const CALC_BRIDGE_MODE_PROGRAMMER: c_int = 2;

/// Opaque handle to a bridge instance
#[repr(C)]
pub struct CalcBridgeHandle {
    _private: [u8; 0],
}

/// Change notification, called with the context given at registration
pub type CalcBridgeUpdateCallback = Option<extern "C" fn(context: *mut c_void)>;
