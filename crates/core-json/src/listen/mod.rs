// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::Timestamp;

use crate::{prelude::*, track::Track};

/// A single, immutable playback event.
///
/// Listens have no surrogate id on the wire. Their identity for deletion
/// is the `(track.id, unix seconds of time)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listen {
    /// ISO-8601 timestamp of the playback event.
    pub time: String,
    pub track: Track,
}

impl Listen {
    /// Unix seconds of the playback event, floored to whole seconds.
    pub fn unix_time(&self) -> Result<i64, jiff::Error> {
        let timestamp: Timestamp = self.time.parse()?;
        Ok(timestamp.as_second())
    }
}

/// One bucket of the listen activity series.
///
/// The activity endpoint returns a bare array of these, not the usual
/// pagination envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// ISO-8601 start of the bucket.
    pub start_time: String,
    pub listens: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NowPlaying {
    pub currently_playing: bool,
    pub track: Option<Track>,
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
