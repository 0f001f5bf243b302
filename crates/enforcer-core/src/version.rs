//! Numeric dot-segment version ordering.
//!
//! Versions are split on `.` and each segment is read as the number formed
//! by its leading ASCII digits: `"130"` is 130, `"1-jre"` is 1, and
//! `"Final"` or `"SNAPSHOT"` are 0. Missing trailing segments count as 0.
//!
//! This is deliberately not Maven's full ordering: qualifiers are never
//! ranked, so `1.0.Final` and `1.0.SNAPSHOT` compare equal.

use std::cmp::Ordering;

/// Compare two version strings segment by segment.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left: Vec<u64> = a.split('.').map(segment_value).collect();
    let right: Vec<u64> = b.split('.').map(segment_value).collect();

    let max_len = left.len().max(right.len());
    for i in 0..max_len {
        let l = left.get(i).copied().unwrap_or(0);
        let r = right.get(i).copied().unwrap_or(0);
        let ord = l.cmp(&r);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Pick the greatest version, left to right.
///
/// The current winner is only replaced by a later candidate that compares
/// strictly greater, so among equal versions the first one seen wins.
/// Returns `None` for an empty slice.
pub fn find_highest_version<S: AsRef<str>>(versions: &[S]) -> Option<&str> {
    versions
        .iter()
        .map(|v| v.as_ref())
        .reduce(|highest, current| {
            if compare_versions(current, highest) == Ordering::Greater {
                current
            } else {
                highest
            }
        })
}

fn segment_value(segment: &str) -> u64 {
    let digits_end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    let digits = &segment[..digits_end];
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}
