/*
 *  display/narrow.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Native text to boundary form narrowing
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

use std::ffi::CString;

/// Byte substituted for every character outside 7-bit ASCII
pub const PLACEHOLDER: u8 = b'?';

/// Narrow native display text to its boundary form
///
/// One output byte per input character: the character itself when its code
/// point is below 128, [`PLACEHOLDER`] otherwise. This is not a UTF-8
/// transcoding; `"1\u{00a0}234"` becomes `"1?234"`.
pub fn narrow_to_ascii(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 128 { c as u8 } else { PLACEHOLDER })
        .collect()
}

/// Narrow and NUL-terminate for handing across the C boundary
///
/// A NUL inside the native text ends the C string there, which is what a C
/// reader would see anyway.
pub fn narrow_to_c_string(text: &str) -> CString {
    let mut bytes = narrow_to_ascii(text);
    if let Some(nul) = bytes.iter().position(|&b| b == 0) {
        bytes.truncate(nul);
    }
    CString::new(bytes).unwrap_or_default()
}
