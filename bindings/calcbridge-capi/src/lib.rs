/*
 *  calcbridge C ABI
 */

//! # calcbridge C ABI
//!
//! Flat, opaque-handle functions over [`calcbridge::CalcBridge`] for hosts
//! that speak the C calling convention. The matching declarations live in
//! `include/calcbridge.h`.
//!
//! ```c
//! CalcBridgeHandle *calc = calc_bridge_create();
//! calc_bridge_register_update_callback(calc, on_update, self);
//! calc_bridge_send_command(calc, 131);   /* 1 */
//! calc_bridge_send_command(calc, 93);    /* + */
//! calc_bridge_send_command(calc, 132);   /* 2 */
//! calc_bridge_send_command(calc, 121);   /* = */
//! puts(calc_bridge_get_display(calc));   /* 3 */
//! calc_bridge_destroy(calc);
//! ```
//!
//! One thread at a time per handle. Callbacks run synchronously inside
//! `calc_bridge_send_command` and must not call back into the same handle.

mod ffi;
mod bridge;

pub use ffi::*;
pub use bridge::{
    calc_bridge_abi_version, calc_bridge_create, calc_bridge_destroy, calc_bridge_get_display,
    calc_bridge_get_expression, calc_bridge_is_error, calc_bridge_register_update_callback,
    calc_bridge_send_command, calc_bridge_set_mode, calc_bridge_set_programmer_mode,
    calc_bridge_set_scientific_mode, calc_bridge_set_standard_mode,
};
