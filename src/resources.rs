/*
 *  resources.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Engine resource strings (number formatting configuration)
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

/// Identifier of the decimal separator string
pub const DECIMAL_SEPARATOR_ID: &str = "sDecimal";

/// Identifier of the thousands separator string
pub const THOUSANDS_SEPARATOR_ID: &str = "sThousand";

/// Identifier of the digit grouping pattern (e.g. `"3;0"`)
pub const GROUPING_PATTERN_ID: &str = "sGrouping";

/// Source of the engine's configuration strings
///
/// Implementations must be pure: the same identifier always yields the same
/// string, and unknown identifiers yield an empty string.
pub trait ResourceProvider {
    fn engine_string(&self, id: &str) -> String;
}

/// The fixed, locale-free resource set used by every host in this crate
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedResources;

impl ResourceProvider for FixedResources {
    fn engine_string(&self, id: &str) -> String {
        match id {
            DECIMAL_SEPARATOR_ID => ".",
            THOUSANDS_SEPARATOR_ID => ",",
            GROUPING_PATTERN_ID => "3;0",
            _ => "",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_strings() {
        let r = FixedResources;
        assert_eq!(r.engine_string("sDecimal"), ".");
        assert_eq!(r.engine_string("sThousand"), ",");
        assert_eq!(r.engine_string("sGrouping"), "3;0");
    }

    #[test]
    fn test_unknown_id_is_empty() {
        let r = FixedResources;
        assert_eq!(r.engine_string("sNegative"), "");
        assert_eq!(r.engine_string(""), "");
        // identifiers are case sensitive
        assert_eq!(r.engine_string("sgrouping"), "");
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let r = FixedResources;
        let first = r.engine_string(GROUPING_PATTERN_ID);
        for _ in 0..3 {
            assert_eq!(r.engine_string(GROUPING_PATTERN_ID), first);
        }
    }
}
