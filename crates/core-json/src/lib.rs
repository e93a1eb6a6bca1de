// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! JSON wire model of the scrobble statistics web API.
//!
//! All types mirror the shapes the backend returns verbatim. The client
//! never validates them beyond JSON decoding and never mutates them other
//! than for local cache reconciliation after mutations.
//!
//! Unknown fields are tolerated everywhere so the backend may grow
//! additive fields without breaking deployed clients.

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};
}

pub mod album;
pub mod alias;
pub mod api_key;
pub mod artist;
pub mod kind;
pub mod listen;
pub mod pagination;
pub mod period;
pub mod search;
pub mod stats;
pub mod track;
pub mod user;
pub mod wrapped;
