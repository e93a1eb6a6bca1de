// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

/// The uniform envelope of all paginated list endpoints.
///
/// A page beyond the last page is not an error: the backend responds with
/// an empty `items` sequence and `has_next_page: false`.
///
/// Three legacy endpoints (aliases, api keys, listen activity) return a
/// bare array instead of this envelope. Callers must pick the matching
/// decode path; the asymmetry is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_record_count: i64,
    pub has_next_page: bool,
    pub current_page: i64,
    pub items_per_page: i64,
}

impl<T> Paginated<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
