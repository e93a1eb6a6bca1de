// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{artist::ArtistRef, prelude::*};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    pub title: String,
    pub artists: Vec<ArtistRef>,
    pub listen_count: i64,
    pub image: String,
    pub album_id: i64,
    pub musicbrainz_id: String,
    /// Total seconds listened.
    pub time_listened: i64,
    /// Unix seconds of the first recorded listen.
    pub first_listen: i64,
}
