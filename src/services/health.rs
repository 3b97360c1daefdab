// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health platform boundary.
//!
//! The platform bridge (HealthKit, Health Connect, ...) is an external
//! collaborator. The aggregator only needs its candidate workout list;
//! mapping platform workout types onto our activity-type vocabulary is
//! the bridge's job.

use chrono::{DateTime, Utc};

use crate::error::Result;

/// One workout as reported by the health platform.
#[derive(Debug, Clone)]
pub struct PlatformWorkout {
    /// The platform's own key for the workout
    pub key: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Activity type tag, already mapped to our vocabulary
    pub activity_type: String,
}

/// Read access to the external health platform.
pub trait HealthPlatform {
    /// Fetch every candidate workout the platform knows about.
    fn fetch_all(&mut self) -> Result<Vec<PlatformWorkout>>;
}
