// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Typed client for the scrobble statistics web API.
//!
//! Layered bottom-up: [`webapi`] wraps the HTTP transport and error
//! envelope, [`api`] provides one typed binding per backend operation,
//! and [`query`] is the cache/deduplication boundary UI state reads
//! through. [`session`] and [`prefs`] carry the application context and
//! scoped UI preferences the host environment injects into its tree.

pub mod api;
pub mod error;
pub mod live_search;
pub mod prefs;
pub mod query;
pub mod session;
pub mod util;
pub mod webapi;

pub use self::error::{Error, Result};
