// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Debounced free-text search with explicit supersession.
//!
//! Every call begins a new generation and waits out a quiet period
//! before hitting the network, so rapid keystrokes coalesce into one
//! request. A round that has been superseded by a newer call returns
//! `None` — at wake-up as well as at response arrival — so a stale
//! response can never overwrite the state of a newer query.

use std::{sync::Arc, time::Duration};

use mneme_core_json::search::SearchResults;

use crate::{
    api::search::search,
    error::Result,
    util::generation::GenerationCounter,
    webapi::ClientEnvironment,
};

#[derive(Debug)]
pub struct LiveSearch<E> {
    env: Arc<E>,
    generation: GenerationCounter,
    quiet_period: Duration,
}

impl<E: ClientEnvironment> LiveSearch<E> {
    pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

    #[must_use]
    pub fn new(env: Arc<E>) -> Self {
        Self::with_quiet_period(env, Self::DEFAULT_QUIET_PERIOD)
    }

    #[must_use]
    pub const fn with_quiet_period(env: Arc<E>, quiet_period: Duration) -> Self {
        Self {
            env,
            generation: GenerationCounter::new(),
            quiet_period,
        }
    }

    /// Dispatch a search for `query`, superseding all earlier dispatches.
    ///
    /// Returns `None` when the dispatch was superseded before or during
    /// the network round, or when `query` is empty (which only clears
    /// pending dispatches, matching a cleared search box).
    pub async fn search(&self, query: &str) -> Option<Result<SearchResults>> {
        let token = self.generation.begin();
        if query.is_empty() {
            return None;
        }
        tokio::time::sleep(self.quiet_period).await;
        if !self.generation.is_current(token) {
            log::debug!("Search for {query:?} superseded before dispatch");
            return None;
        }
        let result = search(self.env.as_ref(), query).await;
        if !self.generation.is_current(token) {
            log::debug!("Search for {query:?} superseded in flight, discarding response");
            return None;
        }
        Some(result)
    }

    /// Discard all outstanding dispatches, e.g. when the search surface
    /// closes.
    pub fn reset(&self) {
        self.generation.supersede();
    }
}
