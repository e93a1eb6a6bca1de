// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Scoped UI preference store.
//!
//! Small pieces of page-local UI state (activity panel layout, selected
//! period) survive navigation, keyed by the current route path. The
//! store is a plain string key-value interface decoupled from any
//! particular storage medium; hosts back it with whatever persistence
//! they have.

use std::{
    collections::HashMap,
    sync::Mutex,
};

use mneme_core_json::period::{ActivityStep, Period};

pub trait PreferenceStore {
    fn get(&self, scope: &str, key: &str) -> Option<String>;
    fn set(&self, scope: &str, key: &str, value: &str);
}

/// Process-lifetime in-memory store.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: Mutex<HashMap<(String, String), String>>,
}

impl MemoryPrefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, scope: &str, key: &str) -> Option<String> {
        let values = self.values.lock().unwrap();
        values.get(&(scope.to_owned(), key.to_owned())).cloned()
    }

    fn set(&self, scope: &str, key: &str, value: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert((scope.to_owned(), key.to_owned()), value.to_owned());
    }
}

pub mod keys {
    pub const ACTIVITY_STEP: &str = "activity_step";
    pub const ACTIVITY_RANGE: &str = "activity_range";
    pub const ACTIVITY_CONFIGURING: &str = "activity_configuring";
    pub const PERIOD_SELECTION: &str = "period_selection";
}

/// Typed access to the activity panel preferences of one route.
///
/// Readers ignore unparseable stored values instead of failing, so a
/// stale or hand-edited store never breaks the panel.
#[derive(Debug)]
pub struct ActivityPrefs<'a, S> {
    store: &'a S,
    scope: &'a str,
}

impl<'a, S: PreferenceStore> ActivityPrefs<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S, scope: &'a str) -> Self {
        Self { store, scope }
    }

    #[must_use]
    pub fn step(&self) -> Option<ActivityStep> {
        self.store
            .get(self.scope, keys::ACTIVITY_STEP)?
            .parse()
            .ok()
    }

    pub fn set_step(&self, step: ActivityStep) {
        self.store.set(self.scope, keys::ACTIVITY_STEP, step.as_str());
    }

    #[must_use]
    pub fn range(&self) -> Option<u32> {
        self.store
            .get(self.scope, keys::ACTIVITY_RANGE)?
            .parse()
            .ok()
    }

    pub fn set_range(&self, range: u32) {
        self.store
            .set(self.scope, keys::ACTIVITY_RANGE, &range.to_string());
    }

    /// Whether the options panel was left open.
    #[must_use]
    pub fn configuring(&self) -> Option<bool> {
        let value = self.store.get(self.scope, keys::ACTIVITY_CONFIGURING)?;
        Some(value == "true")
    }

    pub fn set_configuring(&self, configuring: bool) {
        self.store.set(
            self.scope,
            keys::ACTIVITY_CONFIGURING,
            if configuring { "true" } else { "false" },
        );
    }
}

#[must_use]
pub fn period_selection<S: PreferenceStore>(store: &S, scope: &str) -> Option<Period> {
    store.get(scope, keys::PERIOD_SELECTION)?.parse().ok()
}

pub fn set_period_selection<S: PreferenceStore>(store: &S, scope: &str, period: Period) {
    store.set(scope, keys::PERIOD_SELECTION, period.as_str());
}
