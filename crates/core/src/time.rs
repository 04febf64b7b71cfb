//! Wall-clock time arithmetic for `HH:MM` strings.

use crate::errors::{TimetableError, TimetableResult};

/// Parses a `HH:MM` wall-clock string into minutes since midnight.
///
/// Accepts one- or two-digit hours (0-23) and exactly two minute digits
/// (00-59). Anything else fails with `InvalidTimeFormat`; input is never
/// coerced.
pub fn to_minutes(time: &str) -> TimetableResult<u32> {
    let Some((hours, minutes)) = time.split_once(':') else {
        return Err(TimetableError::InvalidTimeFormat(time.to_string()));
    };

    if hours.is_empty()
        || hours.len() > 2
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(TimetableError::InvalidTimeFormat(time.to_string()));
    }

    // Digit-only input of bounded length cannot fail to parse
    let h: u32 = hours.parse().unwrap_or(u32::MAX);
    let m: u32 = minutes.parse().unwrap_or(u32::MAX);

    if h > 23 || m > 59 {
        return Err(TimetableError::InvalidTimeFormat(time.to_string()));
    }

    Ok(h * 60 + m)
}

/// Strict half-open interval overlap test, in minutes since midnight.
///
/// Intervals that merely touch (`a_end == b_start`) do not overlap.
pub fn overlaps(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && b_start < a_end
}
