// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer boundaries.
//!
//! The on-device activity and session databases live outside this
//! crate; these traits define exactly what the core consumes:
//! - indexed read/repair access to historical activities,
//! - list/create/delete persistence for interval sessions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;

/// Descriptor row for one locally stored activity.
#[derive(Debug, Clone)]
pub struct StoredActivity {
    /// Store-assigned activity key
    pub id: String,
    /// Activity type tag
    pub activity_type: String,
    pub name: String,
    pub description: String,
}

/// Read and repair access to the local activity database.
///
/// Index 0 is the most recent activity; enumeration runs newest to
/// oldest.
pub trait ActivityStore {
    /// Number of stored activities.
    fn count(&self) -> usize;

    /// Start and end time of the activity at `index`. A `None` end
    /// means the recording never observed a clean stop.
    fn start_and_end_time(&self, index: usize)
        -> Result<(DateTime<Utc>, Option<DateTime<Utc>>)>;

    /// Recompute a missing end time from the activity's sample data.
    fn repair_end_time(&mut self, index: usize) -> Result<()>;

    /// Descriptor row for the activity at `index`.
    fn record_at(&self, index: usize) -> Result<StoredActivity>;
}

/// Persistence for interval sessions.
pub trait SessionStore {
    /// Raw JSON descriptors for every stored session, most recently
    /// updated first.
    fn list_all(&self) -> Result<Vec<String>>;

    /// Persist a new, empty session.
    fn create(&mut self, id: Uuid, name: &str, sport: &str) -> Result<()>;

    /// Remove a session and its segments.
    fn delete(&mut self, id: Uuid) -> Result<()>;
}
