// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interval session list management.
//!
//! Keeps an in-memory cache of the persisted sessions. Every successful
//! create/delete rebuilds the whole list from the store rather than
//! patching the cache; session counts are small. When a store call
//! fails, the cache is left at its previous state.

use uuid::Uuid;

use crate::db::SessionStore;
use crate::error::Result;
use crate::models::IntervalSession;

/// Session list service backed by a [`SessionStore`].
pub struct SessionService<S> {
    store: S,
    sessions: Vec<IntervalSession>,
}

impl<S: SessionStore> SessionService<S> {
    /// Create the service and load the current session list.
    pub fn new(store: S) -> Result<Self> {
        let mut service = Self {
            store,
            sessions: Vec::new(),
        };
        service.rebuild()?;
        Ok(service)
    }

    /// The cached session list, most recently updated first.
    pub fn sessions(&self) -> &[IntervalSession] {
        &self.sessions
    }

    /// Reload the session list from the store.
    ///
    /// The cache is replaced only when the listing succeeds; a
    /// descriptor that fails to parse is skipped with a warning.
    pub fn rebuild(&mut self) -> Result<()> {
        let descriptors = self.store.list_all()?;

        let mut sessions = Vec::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            match serde_json::from_str::<IntervalSession>(descriptor) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unparseable session descriptor");
                }
            }
        }

        tracing::debug!(count = sessions.len(), "Rebuilt interval session list");
        self.sessions = sessions;
        Ok(())
    }

    /// Persist a new session, then refresh the cached list.
    pub fn create(&mut self, session: &IntervalSession) -> Result<()> {
        self.store.create(session.id, &session.name, &session.sport)?;
        self.rebuild()
    }

    /// Delete a session by id, then refresh the cached list.
    pub fn delete(&mut self, session_id: Uuid) -> Result<()> {
        self.store.delete(session_id)?;
        self.rebuild()
    }
}
