//! The fixed set of UTC offsets the map knows how to highlight.
//!
//! Every polygon in the `timezone-fill` layer carries a `UTC_offset` attribute
//! in `±HH:MM` form. Only values from this list are accepted as a selection,
//! whether they come from the dropdown or from a map click.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::Serialize;

/// Real-world UTC offsets, in the order they appear in the selector.
pub static UTC_OFFSETS: [&str; 37] = [
    "+00:00", "+01:00", "+02:00", "+03:00", "+03:30", "+04:00", "+04:30", "+05:00", "+05:30",
    "+05:45", "+06:00", "+06:30", "+07:00", "+08:00", "+08:45", "+09:00", "+09:30", "+10:00",
    "+10:30", "+11:00", "+12:00", "+12:45", "+13:00", "+14:00", "-01:00", "-02:00", "-03:00",
    "-03:30", "-04:00", "-05:00", "-06:00", "-07:00", "-08:00", "-09:00", "-09:30", "-10:00",
    "-11:00",
];

/// A UTC offset that is a member of [`UTC_OFFSETS`].
///
/// Construction goes through [`TimezoneCatalog::lookup`] or `FromStr`, so a
/// `UtcOffset` value is always a catalog member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UtcOffset(&'static str);

impl UtcOffset {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Signed offset from UTC in minutes (`-09:30` is -570).
    pub fn total_minutes(&self) -> i32 {
        let bytes = self.0.as_bytes();
        let digit = |i: usize| i32::from(bytes[i] - b'0');
        let minutes = (digit(1) * 10 + digit(2)) * 60 + digit(4) * 10 + digit(5);
        if bytes[0] == b'-' {
            -minutes
        } else {
            minutes
        }
    }

    /// Text shown for this offset in the selector, e.g. `UTC+05:30`.
    pub fn option_label(&self) -> String {
        format!("UTC{}", self.0)
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for UtcOffset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_offset_shaped(s) {
            bail!("'{s}' is not a UTC offset of the form ±HH:MM");
        }
        match TimezoneCatalog::new().lookup(s) {
            Some(offset) => Ok(offset),
            None => bail!("UTC offset '{s}' is not in the timezone catalog"),
        }
    }
}

fn is_offset_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 6
        && matches!(bytes[0], b'+' | b'-')
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_digit()
        && bytes[3] == b':'
        && bytes[4].is_ascii_digit()
        && bytes[5].is_ascii_digit()
}

/// Ordered, immutable view over [`UTC_OFFSETS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimezoneCatalog;

impl TimezoneCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn entries(&self) -> &'static [&'static str] {
        &UTC_OFFSETS
    }

    pub fn len(&self) -> usize {
        UTC_OFFSETS.len()
    }

    pub fn is_empty(&self) -> bool {
        UTC_OFFSETS.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.lookup(value).is_some()
    }

    /// Returns the catalog entry equal to `value`, if any. Matching is exact:
    /// `+5:30` or `+05:30 ` are not members.
    pub fn lookup(&self, value: &str) -> Option<UtcOffset> {
        UTC_OFFSETS
            .iter()
            .find(|entry| **entry == value)
            .map(|entry| UtcOffset(*entry))
    }

    pub fn iter(&self) -> impl Iterator<Item = UtcOffset> {
        UTC_OFFSETS.iter().map(|entry| UtcOffset(*entry))
    }
}
