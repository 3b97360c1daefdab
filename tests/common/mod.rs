// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory fakes for the collaborator traits, plus shared builders.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use paceline::db::{ActivityStore, SessionStore, StoredActivity};
use paceline::error::{AppError, Result};
use paceline::models::activity::activity_types;
use paceline::models::IntervalSession;
use paceline::services::{HealthPlatform, PlatformWorkout};

/// Timestamp on a fixed test day.
#[allow(dead_code)]
pub fn ts(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour, min, 0).unwrap()
}

/// One row of the fake activity store.
#[allow(dead_code)]
pub struct FakeRow {
    pub record: StoredActivity,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// End time that `repair_end_time` installs, if any
    pub repaired_end_time: Option<DateTime<Utc>>,
    /// Simulate a malformed descriptor row
    pub unreadable: bool,
}

/// Build a plain readable row.
#[allow(dead_code)]
pub fn local_row(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> FakeRow {
    FakeRow {
        record: StoredActivity {
            id: id.to_string(),
            activity_type: activity_types::RUNNING.to_string(),
            name: format!("Activity {}", id),
            description: String::new(),
        },
        start_time: start,
        end_time: Some(end),
        repaired_end_time: None,
        unreadable: false,
    }
}

/// In-memory activity store. Rows are held newest-first, matching the
/// on-device database's enumeration order.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeActivityStore {
    pub rows: Vec<FakeRow>,
}

impl FakeActivityStore {
    #[allow(dead_code)]
    pub fn new(rows: Vec<FakeRow>) -> Self {
        Self { rows }
    }
}

impl ActivityStore for FakeActivityStore {
    fn count(&self) -> usize {
        self.rows.len()
    }

    fn start_and_end_time(
        &self,
        index: usize,
    ) -> Result<(DateTime<Utc>, Option<DateTime<Utc>>)> {
        let row = self
            .rows
            .get(index)
            .ok_or_else(|| AppError::NotFound(format!("activity index {}", index)))?;
        Ok((row.start_time, row.end_time))
    }

    fn repair_end_time(&mut self, index: usize) -> Result<()> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| AppError::NotFound(format!("activity index {}", index)))?;
        if let Some(repaired) = row.repaired_end_time {
            row.end_time = Some(repaired);
        }
        Ok(())
    }

    fn record_at(&self, index: usize) -> Result<StoredActivity> {
        let row = self
            .rows
            .get(index)
            .ok_or_else(|| AppError::NotFound(format!("activity index {}", index)))?;
        if row.unreadable {
            return Err(AppError::Database(format!(
                "malformed row at index {}",
                index
            )));
        }
        Ok(row.record.clone())
    }
}

/// Build a platform workout candidate.
#[allow(dead_code)]
pub fn platform_workout(key: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> PlatformWorkout {
    PlatformWorkout {
        key: key.to_string(),
        start_time: start,
        end_time: end,
        activity_type: activity_types::RUNNING.to_string(),
    }
}

/// In-memory health platform bridge.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakePlatform {
    pub workouts: Vec<PlatformWorkout>,
    pub fail_fetch: bool,
}

impl FakePlatform {
    #[allow(dead_code)]
    pub fn new(workouts: Vec<PlatformWorkout>) -> Self {
        Self {
            workouts,
            fail_fetch: false,
        }
    }
}

impl HealthPlatform for FakePlatform {
    fn fetch_all(&mut self) -> Result<Vec<PlatformWorkout>> {
        if self.fail_fetch {
            return Err(AppError::Platform("health store unavailable".to_string()));
        }
        Ok(self.workouts.clone())
    }
}

/// In-memory session store serving raw JSON descriptors.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeSessionStore {
    pub sessions: Vec<IntervalSession>,
    /// Extra raw descriptors returned as-is (e.g. corrupt rows)
    pub extra_descriptors: Vec<String>,
    /// Fail the next mutating call
    pub fail_next: bool,
}

impl FakeSessionStore {
    #[allow(dead_code)]
    pub fn new(sessions: Vec<IntervalSession>) -> Self {
        Self {
            sessions,
            extra_descriptors: Vec::new(),
            fail_next: false,
        }
    }

    fn take_failure(&mut self) -> Result<()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(AppError::Database("session store write failed".to_string()));
        }
        Ok(())
    }
}

impl SessionStore for FakeSessionStore {
    fn list_all(&self) -> Result<Vec<String>> {
        let mut descriptors = Vec::with_capacity(self.sessions.len());
        for session in &self.sessions {
            let raw = serde_json::to_string(session)
                .map_err(|e| AppError::Database(e.to_string()))?;
            descriptors.push(raw);
        }
        descriptors.extend(self.extra_descriptors.iter().cloned());
        Ok(descriptors)
    }

    fn create(&mut self, id: Uuid, name: &str, sport: &str) -> Result<()> {
        self.take_failure()?;
        let mut session = IntervalSession::new(name, sport);
        session.id = id;
        // New sessions list first, like the store's updated-time order.
        self.sessions.insert(0, session);
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        self.take_failure()?;
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        if self.sessions.len() == before {
            return Err(AppError::NotFound(format!("session {}", id)));
        }
        Ok(())
    }
}
