// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity records assembled into the aggregated history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Activity type tags as constants.
///
/// The tag drives icon selection and display grouping only; the core
/// treats it as opaque text.
pub mod activity_types {
    pub const BENCH_PRESS: &str = "Bench Press";
    pub const CHINUP: &str = "Chinup";
    pub const CYCLING: &str = "Cycling";
    pub const DUATHLON: &str = "Duathlon";
    pub const HIKING: &str = "Hiking";
    pub const MOUNTAIN_BIKING: &str = "Mountain Biking";
    pub const OPEN_WATER_SWIMMING: &str = "Open Water Swimming";
    pub const POOL_SWIMMING: &str = "Pool Swimming";
    pub const PULLUP: &str = "Pullup";
    pub const PUSHUP: &str = "Pushup";
    pub const RUNNING: &str = "Running";
    pub const SQUAT: &str = "Squat";
    pub const STATIONARY_CYCLING: &str = "Stationary Cycling";
    pub const TREADMILL: &str = "Treadmill";
    pub const TRIATHLON: &str = "Triathlon";
    pub const WALKING: &str = "Walking";
}

/// Which source produced an activity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivitySource {
    /// The on-device activity database
    LocalStore,
    /// The device's health platform
    HealthPlatform,
}

/// One activity in the aggregated history.
///
/// Records are immutable once constructed for display; the source never
/// changes and `start_time <= end_time` holds after end-time repair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Store key for local records, platform key for external ones
    pub id: String,
    /// Activity name/title
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Activity type tag (see [`activity_types`])
    pub activity_type: String,
    /// UTC start of the activity
    pub start_time: DateTime<Utc>,
    /// UTC end of the activity; equals `start_time` for a point-in-time
    /// event whose end could not be recovered
    pub end_time: DateTime<Utc>,
    /// Position within the local store; `None` for platform records
    pub sequence_index: Option<usize>,
    /// Which source produced this record
    pub source: ActivitySource,
}

impl ActivityRecord {
    /// Chronological ordering used by the history list.
    pub fn cmp_by_start(&self, other: &Self) -> Ordering {
        self.start_time.cmp(&other.start_time)
    }
}
