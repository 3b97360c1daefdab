// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interval session aggregate: an ordered list of segments plus
//! identity, name, and sport metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use crate::models::activity::activity_types;
use crate::models::segment::IntervalSegment;

/// A structured interval workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalSession {
    pub id: Uuid,
    pub name: String,
    /// Activity type tag the workout is meant for
    pub sport: String,
    /// Segments in workout order
    pub segments: Vec<IntervalSegment>,
    pub last_updated_time: DateTime<Utc>,
}

impl Default for IntervalSession {
    fn default() -> Self {
        Self::new("Untitled", activity_types::RUNNING)
    }
}

// Session identity is the id alone.
impl PartialEq for IntervalSession {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for IntervalSession {}

impl Hash for IntervalSession {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl IntervalSession {
    /// A new, empty session.
    pub fn new(name: &str, sport: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            sport: sport.to_string(),
            segments: Vec::new(),
            last_updated_time: Utc::now(),
        }
    }

    /// One description line per segment, for list display.
    pub fn describe(&self) -> String {
        self.segments
            .iter()
            .map(IntervalSegment::describe)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
