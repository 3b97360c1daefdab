// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod health;
pub mod history;
pub mod sessions;

pub use health::{HealthPlatform, PlatformWorkout};
pub use history::HistoryService;
pub use sessions::SessionService;
