// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{
    album::Album,
    artist::{Artist, ArtistRef},
    prelude::*,
    track::Track,
};

/// Grouped free-text search result. Not paginated; the backend caps the
/// result size per group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub albums: Vec<Album>,
    pub artists: Vec<Artist>,
    pub tracks: Vec<Track>,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.artists.is_empty() && self.tracks.is_empty()
    }
}

/// A recommended track with its listening history digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedTrack {
    pub id: i64,
    pub title: String,
    pub artists: Vec<ArtistRef>,
    pub album_id: i64,
    pub image: String,
    pub past_listen_count: i64,
    /// ISO-8601 timestamp of the most recent listen.
    pub last_listened_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub tracks: Vec<RecommendedTrack>,
}
