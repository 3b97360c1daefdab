// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Historical activity aggregation service.
//!
//! Builds the single, chronologically ordered, de-duplicated history:
//! 1. Load every local record (the store enumerates newest-first),
//!    repairing missing end times on the way.
//! 2. If platform integration is on, fetch the platform's candidate
//!    workouts, drop duplicates, and merge the survivors into the
//!    sorted list by binary-search insertion.
//!
//! A row or candidate that cannot be read is skipped with a warning;
//! the batch never aborts.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::db::ActivityStore;
use crate::error::Result;
use crate::models::{ActivityRecord, ActivitySource};
use crate::services::health::{HealthPlatform, PlatformWorkout};
use crate::time_utils::ranges_overlap;

/// Builds the aggregated activity history from the local store and the
/// health platform.
pub struct HistoryService<S, P> {
    store: S,
    platform: P,
    config: Config,
}

impl<S: ActivityStore, P: HealthPlatform> HistoryService<S, P> {
    pub fn new(store: S, platform: P, config: Config) -> Self {
        Self {
            store,
            platform,
            config,
        }
    }

    /// Build the combined history, sorted ascending by start time.
    ///
    /// When dedup is enabled no two records in the result have
    /// overlapping time ranges; a platform workout that duplicates a
    /// local activity is dropped (local wins).
    pub fn build_history(&mut self) -> Vec<ActivityRecord> {
        let mut history = self.load_local_activities();

        if self.config.integrate_platform_activities {
            self.merge_platform_activities(&mut history);
        }

        tracing::info!(count = history.len(), "Built activity history");
        history
    }

    /// Load the local store's records, oldest first.
    fn load_local_activities(&mut self) -> Vec<ActivityRecord> {
        let count = self.store.count();
        let mut records = Vec::with_capacity(count);

        for index in 0..count {
            let (start_time, end_time) = match self.read_times(index) {
                Ok(times) => times,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping activity with unreadable times");
                    continue;
                }
            };

            let row = match self.store.record_at(index) {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping unreadable activity row");
                    continue;
                }
            };

            records.push(ActivityRecord {
                id: row.id,
                name: row.name,
                description: row.description,
                activity_type: row.activity_type,
                start_time,
                end_time,
                sequence_index: Some(index),
                source: ActivitySource::LocalStore,
            });
        }

        // The store enumerates newest-first, so one reversal yields
        // ascending start times without a sort.
        records.reverse();

        tracing::debug!(count = records.len(), "Loaded local activities");
        records
    }

    /// Read an activity's time range, repairing a missing end time.
    ///
    /// An end time that is still missing after repair marks a
    /// point-in-time event: the record is kept with `end == start`.
    fn read_times(&mut self, index: usize) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let (start, end) = self.store.start_and_end_time(index)?;
        match end {
            Some(end) => Ok((start, end)),
            None => {
                self.store.repair_end_time(index)?;
                let (start, end) = self.store.start_and_end_time(index)?;
                Ok((start, end.unwrap_or(start)))
            }
        }
    }

    /// Merge platform workouts into the sorted local history.
    fn merge_platform_activities(&mut self, history: &mut Vec<ActivityRecord>) {
        let mut candidates = match self.platform.fetch_all() {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(error = %e, "Platform fetch failed, keeping local history only");
                return;
            }
        };
        tracing::debug!(count = candidates.len(), "Fetched platform candidates");

        if self.config.hide_platform_duplicates {
            remove_self_overlaps(&mut candidates);

            // Local activities win: drop any candidate overlapping one.
            for record in history.iter() {
                remove_overlapping(&mut candidates, record.start_time, record.end_time);
            }
            tracing::debug!(count = candidates.len(), "Platform candidates after dedup");
        }

        for workout in candidates {
            let record = ActivityRecord {
                id: workout.key,
                name: String::new(),
                description: String::new(),
                activity_type: workout.activity_type,
                start_time: workout.start_time,
                end_time: workout.end_time,
                sequence_index: None,
                source: ActivitySource::HealthPlatform,
            };
            let index = insertion_index_by_key(history, record.start_time, |r| r.start_time);
            history.insert(index, record);
        }
    }
}

/// Index at which an item with key `key` inserts into `items` (sorted
/// ascending by `key_of`) while keeping equal keys in arrival order.
pub fn insertion_index_by_key<T, K, F>(items: &[T], key: K, key_of: F) -> usize
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.partition_point(|item| key_of(item) <= key)
}

/// Drop candidates whose time range overlaps an earlier-listed
/// candidate's.
pub fn remove_self_overlaps(candidates: &mut Vec<PlatformWorkout>) {
    let mut survivors: Vec<PlatformWorkout> = Vec::with_capacity(candidates.len());

    for candidate in candidates.drain(..) {
        let duplicate = survivors.iter().any(|kept| {
            ranges_overlap(
                kept.start_time,
                kept.end_time,
                candidate.start_time,
                candidate.end_time,
            )
        });
        if duplicate {
            tracing::debug!(key = %candidate.key, "Dropping duplicate platform workout");
        } else {
            survivors.push(candidate);
        }
    }

    *candidates = survivors;
}

/// Drop candidates whose time range overlaps `[start, end)`.
pub fn remove_overlapping(
    candidates: &mut Vec<PlatformWorkout>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) {
    candidates.retain(|c| !ranges_overlap(c.start_time, c.end_time, start, end));
}
