//! Parsing and formatting of `MM:SS` durations.
//!
//! Durations are whole seconds. The minutes part is not capped at 59, so
//! `"90:00"` is an hour and a half and `"00:75"` is seventy-five seconds.
//!
//! # Examples
//!
//! ```rust
//! use radial_timer::duration::{format_clock, parse_duration};
//!
//! assert_eq!(parse_duration("01:30").unwrap(), 90);
//! assert!(parse_duration("1:2:3").is_err());
//! assert_eq!(format_clock(90), "01:30");
//! ```

use crate::error::{Error, Result};

/// Parses `MM:SS` text into a number of seconds.
///
/// The text is split on `:` and must yield exactly two parts, each an
/// unsigned integer. Surrounding whitespace is not accepted inside a part.
///
/// # Errors
///
/// * [`Error::EmptyInput`] if the text is blank.
/// * [`Error::InvalidDurationFormat`] for a wrong number of parts, a part that
///   is not an unsigned integer, or a total that does not fit in a `u64`.
pub fn parse_duration(text: &str) -> Result<u64> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let invalid = || Error::InvalidDurationFormat(text.to_string());

    let parts: Vec<&str> = text.split(':').collect();
    let [minutes, seconds] = parts.as_slice() else {
        return Err(invalid());
    };

    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u64 = seconds.parse().map_err(|_| invalid())?;

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(invalid)
}

/// Formats a number of seconds as `MM:SS`.
///
/// Minutes grow past two digits rather than rolling over into hours.
pub fn format_clock(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
