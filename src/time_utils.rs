// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// True when the half-open time ranges `[a_start, a_end)` and
/// `[b_start, b_end)` intersect.
///
/// A zero-length range marks a point-in-time event and intersects any
/// range containing its instant. Ranges that merely touch at a boundary
/// do not overlap, which tolerates back-to-back activities.
pub fn ranges_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    if a_start == a_end {
        return contains_instant(b_start, b_end, a_start);
    }
    if b_start == b_end {
        return contains_instant(a_start, a_end, b_start);
    }
    a_start < b_end && b_start < a_end
}

/// True when `[start, end)` contains the instant `t`. A zero-length
/// range contains only its own instant.
fn contains_instant(start: DateTime<Utc>, end: DateTime<Utc>, t: DateTime<Utc>) -> bool {
    if start == end {
        return t == start;
    }
    start <= t && t < end
}
