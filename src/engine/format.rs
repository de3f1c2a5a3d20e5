/*
 *  engine/format.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Process-wide number formatting, configured once from resource strings
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

use log::debug;
use once_cell::sync::OnceCell;

use crate::resources::{
    FixedResources, ResourceProvider, DECIMAL_SEPARATOR_ID, GROUPING_PATTERN_ID, THOUSANDS_SEPARATOR_ID,
};

/// Significant digits kept when rendering a result
pub const SIGNIFICANT_DIGITS: usize = 16;

/// Results with a decimal exponent outside this range use exponent notation
const PLAIN_EXPONENT_RANGE: std::ops::Range<i32> = -15..16;

static NUMBER_FORMAT: OnceCell<NumberFormat> = OnceCell::new();

/// Separator and grouping rules applied to every number the engine displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    decimal: String,
    thousands: String,
    /// Group sizes from the right, e.g. `[3]` for `"3;0"`
    groups: Vec<usize>,
    /// Whether the last group size repeats (pattern ends in `;0`)
    repeat_last: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::from_resources(&FixedResources)
    }
}

impl NumberFormat {
    /// Build from the provider's `sDecimal`, `sThousand` and `sGrouping`
    ///
    /// An empty decimal separator falls back to `"."`.
    pub fn from_resources(resources: &dyn ResourceProvider) -> Self {
        let mut decimal = resources.engine_string(DECIMAL_SEPARATOR_ID);
        if decimal.is_empty() {
            decimal = ".".to_string();
        }
        let thousands = resources.engine_string(THOUSANDS_SEPARATOR_ID);
        let (groups, repeat_last) = parse_grouping(&resources.engine_string(GROUPING_PATTERN_ID));

        Self { decimal, thousands, groups, repeat_last }
    }

    pub fn decimal_separator(&self) -> &str {
        &self.decimal
    }

    pub fn thousands_separator(&self) -> &str {
        &self.thousands
    }

    /// Insert thousands separators into a run of ASCII digits
    pub fn group_integer(&self, digits: &str) -> String {
        if self.groups.is_empty() || self.thousands.is_empty() {
            return digits.to_string();
        }

        let mut parts: Vec<&str> = Vec::new();
        let mut end = digits.len();
        let mut index = 0;

        loop {
            let size = match self.groups.get(index) {
                Some(&size) => size,
                None if self.repeat_last => self.groups[self.groups.len() - 1],
                None => break,
            };
            if size == 0 || end <= size {
                break;
            }
            parts.push(&digits[end - size..end]);
            end -= size;
            index += 1;
        }
        parts.push(&digits[..end]);
        parts.reverse();
        parts.join(&self.thousands)
    }

    /// Localize an entry in engine notation (`-12.5`, `3.`) for display
    pub fn localize_entry(&self, entry: &str, grouping: bool) -> String {
        let (sign, unsigned) = match entry.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", entry),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };
        let int_part = if grouping { self.group_integer(int_part) } else { int_part.to_string() };

        match frac_part {
            Some(frac) => format!("{sign}{int_part}{}{frac}", self.decimal),
            None => format!("{sign}{int_part}"),
        }
    }

    /// Render a computed value
    pub fn format_value(&self, value: f64, grouping: bool) -> String {
        if value == 0.0 {
            return "0".to_string();
        }

        let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };

        if PLAIN_EXPONENT_RANGE.contains(&exponent) {
            let rounded: f64 = scientific.parse().unwrap_or(value);
            return self.localize_entry(&format!("{rounded}"), grouping);
        }

        let mantissa = trim_fraction(mantissa);
        format!(
            "{}e{}{}",
            self.localize_entry(mantissa, false),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    }

    /// Render an integer (programmer mode)
    pub fn format_integer(&self, value: i64, grouping: bool) -> String {
        self.localize_entry(&value.to_string(), grouping)
    }
}

/// Parse a `"3;2;0"` style pattern into group sizes and the repeat flag
fn parse_grouping(pattern: &str) -> (Vec<usize>, bool) {
    let mut groups: Vec<usize> = pattern
        .split(';')
        .filter_map(|part| part.trim().parse::<usize>().ok())
        .collect();

    let repeat_last = groups.len() > 1 && groups.last() == Some(&0);
    if repeat_last {
        groups.pop();
    }
    if groups.first() == Some(&0) {
        groups.clear();
    }
    (groups, repeat_last)
}

fn trim_fraction(mantissa: &str) -> &str {
    if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    }
}

/// One-time, process-wide number format setup
///
/// The first caller's provider wins; later calls are no-ops that return the
/// format already in place.
pub fn initial_one_time_setup(resources: &dyn ResourceProvider) -> &'static NumberFormat {
    let mut initialized_here = false;
    let format = NUMBER_FORMAT.get_or_init(|| {
        initialized_here = true;
        NumberFormat::from_resources(resources)
    });

    if initialized_here {
        debug!("Engine number format initialized: {:?}", format);
    }
    format
}

/// The process-wide format, initializing it with the fixed resources if no
/// host has done so yet
pub fn number_format() -> &'static NumberFormat {
    NUMBER_FORMAT.get_or_init(NumberFormat::default)
}

#[cfg(test)]
fn is_initialized() -> bool {
    NUMBER_FORMAT.get().is_some()
}
