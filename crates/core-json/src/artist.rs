// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

/// Minimal artist reference as embedded in tracks and albums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub aliases: Vec<String>,
    pub listen_count: i64,
    pub musicbrainz_id: String,
    /// Total seconds listened.
    pub time_listened: i64,
    /// Unix seconds of the first recorded listen.
    pub first_listen: i64,
    pub is_primary: bool,
}
