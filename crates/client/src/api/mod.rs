// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Typed endpoint bindings: one function per backend operation.
//!
//! Read operations decode the JSON payload or fail with a typed error.
//! Mutation operations return the raw [`reqwest::Response`] and leave
//! status inspection to the caller; UI code depends on branching on the
//! status before reconciling local state. The asymmetry is part of the
//! contract, not an accident.

use std::fmt;

use serde::Serialize;

use mneme_core_json::period::{ActivityStep, Period};

use crate::query::QueryKey;

pub mod account;
pub mod aliases;
pub mod charts;
pub mod library;
pub mod listens;
pub mod search;

/// Common query of the listens and top-list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemsQuery {
    pub period: Period,
    pub limit: u32,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<i64>,
}

impl ItemsQuery {
    #[must_use]
    pub const fn new(period: Period, limit: u32, page: u32) -> Self {
        Self {
            period,
            limit,
            page,
            artist_id: None,
            album_id: None,
            track_id: None,
        }
    }

    #[must_use]
    pub const fn with_artist(mut self, artist_id: i64) -> Self {
        self.artist_id = Some(artist_id);
        self
    }

    #[must_use]
    pub const fn with_album(mut self, album_id: i64) -> Self {
        self.album_id = Some(album_id);
        self
    }

    #[must_use]
    pub const fn with_track(mut self, track_id: i64) -> Self {
        self.track_id = Some(track_id);
        self
    }
}

/// Query of the listen activity series.
///
/// The entity filters are always sent; `0` means unfiltered. This mirrors
/// the wire contract rather than omitting empty filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityQuery {
    pub step: ActivityStep,
    /// Range of the series in days.
    pub range: u32,
    pub month: u32,
    pub year: u32,
    pub artist_id: i64,
    pub album_id: i64,
    pub track_id: i64,
}

impl ActivityQuery {
    #[must_use]
    pub const fn new(step: ActivityStep, range: u32) -> Self {
        Self {
            step,
            range,
            month: 0,
            year: 0,
            artist_id: 0,
            album_id: 0,
            track_id: 0,
        }
    }
}

/// Origin-relative URL of a stored image in the given size.
///
/// An empty image reference resolves to the server's default artwork.
#[must_use]
pub fn image_path(image: &str, size: ImageSize) -> String {
    let id = if image.is_empty() { "default" } else { image };
    format!("/images/{size}/{id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Small,
    Medium,
    Large,
}

impl ImageSize {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialize query parameters or a form body.
///
/// Infallible for the flat parameter structs used by the bindings.
pub(crate) fn encode_query<T: Serialize>(params: &T) -> String {
    serde_urlencoded::to_string(params).unwrap_or_default()
}

/// Cache key parameters shared by all [`ItemsQuery`] endpoints.
pub(crate) fn items_query_key(op: &'static str, query: &ItemsQuery) -> QueryKey {
    QueryKey::new(op)
        .with("period", query.period)
        .with("limit", query.limit)
        .with("page", query.page)
        .with_opt("artist_id", query.artist_id)
        .with_opt("album_id", query.album_id)
        .with_opt("track_id", query.track_id)
}
