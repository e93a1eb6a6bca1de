// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

/// An API key as returned on creation and listing.
///
/// The secret `key` value is never regenerated in place; only the label is
/// mutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: i64,
    pub key: String,
    pub label: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}
