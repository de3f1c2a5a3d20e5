/*
 *  bindings/calcbridge-capi/src/bridge.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Exported C entry points over CalcBridge
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

// Handles are trusted: the C contract makes null or dangling handles the
// caller's problem, everywhere except calc_bridge_get_expression.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::{c_char, c_void};
use std::os::raw::c_int;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use log::{debug, error, warn};

use calcbridge::{CalcBridge, CalculatorMode};
use crate::ffi::*;

const EMPTY: &std::ffi::CStr = c"";

macro_rules! catch_panic {
    ($default:expr, $code:block) => {
        match catch_unwind(AssertUnwindSafe(|| $code)) {
            Ok(result) => result,
            Err(panic_info) => {
                let message = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    format!("calcbridge panic: {}", s)
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    format!("calcbridge panic: {}", s)
                } else {
                    "calcbridge panic: unknown error".to_string()
                };
                error!("Caught panic in FFI call: {}", message);
                $default
            }
        }
    };
}

fn bridge_mut<'a>(handle: *mut CalcBridgeHandle) -> &'a mut CalcBridge {
    unsafe { &mut *(handle as *mut CalcBridge) }
}

fn bridge_ref<'a>(handle: *const CalcBridgeHandle) -> &'a CalcBridge {
    unsafe { &*(handle as *const CalcBridge) }
}

/// New bridge in standard mode showing "0"; release with `calc_bridge_destroy`
#[no_mangle]
pub extern "C" fn calc_bridge_create() -> *mut CalcBridgeHandle {
    catch_panic!(ptr::null_mut(), {
        let bridge = Box::new(CalcBridge::new());
        let handle = Box::into_raw(bridge) as *mut CalcBridgeHandle;
        debug!("calc_bridge_create -> {:p}", handle);
        handle
    })
}

/// Release a bridge; the handle is invalid afterwards
#[no_mangle]
pub extern "C" fn calc_bridge_destroy(handle: *mut CalcBridgeHandle) {
    catch_panic!((), {
        if !handle.is_null() {
            debug!("calc_bridge_destroy {:p}", handle);
            unsafe { drop(Box::from_raw(handle as *mut CalcBridge)); }
        }
    })
}

#[no_mangle]
pub extern "C" fn calc_bridge_send_command(handle: *mut CalcBridgeHandle, command: c_int) {
    catch_panic!((), {
        bridge_mut(handle).send_command(command);
    })
}

/// Current display text, NUL terminated, owned by the bridge
///
/// Valid until the next mutating call on `handle` or its destruction.
#[no_mangle]
pub extern "C" fn calc_bridge_get_display(handle: *mut CalcBridgeHandle) -> *const c_char {
    catch_panic!(EMPTY.as_ptr(), {
        bridge_ref(handle).display_boundary().as_ptr()
    })
}

/// Expression text; always empty. A null handle also yields ""
#[no_mangle]
pub extern "C" fn calc_bridge_get_expression(handle: *mut CalcBridgeHandle) -> *const c_char {
    catch_panic!(EMPTY.as_ptr(), {
        if handle.is_null() {
            return EMPTY.as_ptr();
        }
        bridge_ref(handle).expression_boundary().as_ptr()
    })
}

/// Replace the change callback; a null callback turns notification off
#[no_mangle]
pub extern "C" fn calc_bridge_register_update_callback(
    handle: *mut CalcBridgeHandle,
    callback: CalcBridgeUpdateCallback,
    context: *mut c_void,
) {
    catch_panic!((), {
        bridge_mut(handle).register_update_callback(callback, context);
    })
}

/// 0 standard, 1 scientific, 2 programmer; anything else is ignored
#[no_mangle]
pub extern "C" fn calc_bridge_set_mode(handle: *mut CalcBridgeHandle, mode: c_int) {
    catch_panic!((), {
        match CalculatorMode::from_code(mode) {
            Some(mode) => bridge_mut(handle).set_mode(mode),
            None => warn!("calc_bridge_set_mode: unknown mode code {}", mode),
        }
    })
}

#[no_mangle]
pub extern "C" fn calc_bridge_set_standard_mode(handle: *mut CalcBridgeHandle) {
    catch_panic!((), {
        bridge_mut(handle).set_standard_mode();
    })
}

#[no_mangle]
pub extern "C" fn calc_bridge_set_scientific_mode(handle: *mut CalcBridgeHandle) {
    catch_panic!((), {
        bridge_mut(handle).set_scientific_mode();
    })
}

#[no_mangle]
pub extern "C" fn calc_bridge_set_programmer_mode(handle: *mut CalcBridgeHandle) {
    catch_panic!((), {
        bridge_mut(handle).set_programmer_mode();
    })
}

/// Error flag reported with the current display text
#[no_mangle]
pub extern "C" fn calc_bridge_is_error(handle: *mut CalcBridgeHandle) -> bool {
    catch_panic!(false, {
        bridge_ref(handle).is_error()
    })
}

#[no_mangle]
pub extern "C" fn calc_bridge_abi_version(major: *mut u32, minor: *mut u32, patch: *mut u32) {
    catch_panic!((), {
        unsafe {
            if !major.is_null() { *major = CALC_BRIDGE_ABI_VERSION_MAJOR; }
            if !minor.is_null() { *minor = CALC_BRIDGE_ABI_VERSION_MINOR; }
            if !patch.is_null() { *patch = CALC_BRIDGE_ABI_VERSION_PATCH; }
        }
    })
}
