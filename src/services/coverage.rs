//! Zip-code coverage check against the serviced area.

use serde::Serialize;

use crate::site::SERVICED_ZIPS;

const ZIP_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "zip", rename_all = "snake_case")]
pub enum Coverage {
    /// Nothing entered yet.
    Idle,
    /// Fewer than five digits.
    Invalid,
    Covered(String),
    NotCovered(String),
}

/// Classify user-typed zip text. Non-digits are ignored and only the first
/// five digits count, so `91344-1234` checks as `91344`.
#[must_use]
pub fn check_zip(raw: &str) -> Coverage {
    if raw.is_empty() {
        return Coverage::Idle;
    }
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < ZIP_LEN {
        return Coverage::Invalid;
    }
    let zip = digits[..ZIP_LEN].to_owned();
    if SERVICED_ZIPS.contains(&zip.as_str()) {
        Coverage::Covered(zip)
    } else {
        Coverage::NotCovered(zip)
    }
}

#[cfg(test)]
#[path = "coverage_test.rs"]
mod tests;
