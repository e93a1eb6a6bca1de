// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

/// Aggregate library counts over a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub listen_count: i64,
    pub track_count: i64,
    pub album_count: i64,
    pub artist_count: i64,
    pub minutes_listened: i64,
}

/// One named value of the genre statistics, e.g. for a treemap cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreStat {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreStats {
    pub stats: Vec<GenreStat>,
}
