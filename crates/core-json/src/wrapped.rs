// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The yearly "wrapped" summary: an aggregate of aggregates, read-only
//! and keyed by year.

use crate::{artist::ArtistRef, prelude::*};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedTrack {
    pub id: i64,
    pub title: String,
    pub artists: Vec<ArtistRef>,
    pub image: String,
    pub listen_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedArtist {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub listen_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedAlbum {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub listen_count: i64,
}

/// The longest consecutive-replay streak of the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackStreak {
    pub track: WrappedTrack,
    pub streak_count: i64,
}

/// Listen count of one hour of the day, 0..=23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourDistribution {
    pub hour: u8,
    pub listen_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekStats {
    /// ISO-8601 date of the week's first day.
    pub week_start: String,
    pub listen_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedStats {
    pub year: i32,
    pub total_listens: i64,
    pub total_seconds_listened: i64,
    pub unique_artists: i64,
    pub unique_tracks: i64,
    pub unique_albums: i64,
    pub top_tracks: Vec<WrappedTrack>,
    pub top_artists: Vec<WrappedArtist>,
    pub top_albums: Vec<WrappedAlbum>,
    /// Artists first listened to during the wrapped year.
    pub top_new_artists: Vec<WrappedArtist>,
    pub most_replayed_track: Option<TrackStreak>,
    /// Hour-of-day histogram.
    pub listening_hours: Vec<HourDistribution>,
    pub busiest_week: Option<WeekStats>,
    /// Share of listens covered by the top artists, in percent.
    pub artist_concentration: f64,
    /// Share of listens covered by the top tracks, in percent.
    pub track_concentration: f64,
}
