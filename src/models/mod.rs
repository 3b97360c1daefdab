// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod segment;
pub mod session;

pub use activity::{ActivityRecord, ActivitySource};
pub use segment::{IntervalSegment, IntervalUnit, SegmentModifier};
pub use session::IntervalSession;
