// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Aggregate read endpoints: top lists, library stats, genre stats,
//! recommendations, and the yearly wrapped summary.

use mneme_core_json::{
    album::Album,
    artist::Artist,
    pagination::Paginated,
    period::{GenreMetric, Period},
    search::Recommendations,
    stats::{GenreStats, Stats},
    track::Track,
    wrapped::WrappedStats,
};

use crate::{
    api::{ItemsQuery, items_query_key},
    error::Result,
    query::QueryKey,
    webapi::{ClientEnvironment, receive_response_json},
};

/// Top tracks, optionally narrowed to one artist or one album.
///
/// The artist filter takes precedence when both are set.
pub async fn top_tracks<E: ClientEnvironment>(
    env: &E,
    query: &ItemsQuery,
) -> Result<Paginated<Track>> {
    let mut request_url = env.join_api_url(&format!(
        "top-tracks?period={period}&limit={limit}&page={page}",
        period = query.period,
        limit = query.limit,
        page = query.page,
    ))?;
    if let Some(artist_id) = query.artist_id {
        request_url
            .query_pairs_mut()
            .append_pair("artist_id", &artist_id.to_string());
    } else if let Some(album_id) = query.album_id {
        request_url
            .query_pairs_mut()
            .append_pair("album_id", &album_id.to_string());
    }
    let response = env.client().get(request_url).send().await?;
    let tracks: Paginated<Track> = receive_response_json(response).await?;
    log::debug!("Fetched {num} top track(s)", num = tracks.len());
    Ok(tracks)
}

#[must_use]
pub fn top_tracks_query_key(query: &ItemsQuery) -> QueryKey {
    items_query_key("top-tracks", query)
}

/// Top albums, optionally narrowed to one artist. This endpoint accepts
/// no other filter.
pub async fn top_albums<E: ClientEnvironment>(
    env: &E,
    query: &ItemsQuery,
) -> Result<Paginated<Album>> {
    let mut request_url = env.join_api_url(&format!(
        "top-albums?period={period}&limit={limit}&page={page}",
        period = query.period,
        limit = query.limit,
        page = query.page,
    ))?;
    if let Some(artist_id) = query.artist_id {
        request_url
            .query_pairs_mut()
            .append_pair("artist_id", &artist_id.to_string());
    }
    let response = env.client().get(request_url).send().await?;
    let albums: Paginated<Album> = receive_response_json(response).await?;
    log::debug!("Fetched {num} top album(s)", num = albums.len());
    Ok(albums)
}

#[must_use]
pub fn top_albums_query_key(query: &ItemsQuery) -> QueryKey {
    items_query_key("top-albums", query)
}

/// Top artists. This endpoint accepts no entity filter.
pub async fn top_artists<E: ClientEnvironment>(
    env: &E,
    query: &ItemsQuery,
) -> Result<Paginated<Artist>> {
    let request_url = env.join_api_url(&format!(
        "top-artists?period={period}&limit={limit}&page={page}",
        period = query.period,
        limit = query.limit,
        page = query.page,
    ))?;
    let response = env.client().get(request_url).send().await?;
    let artists: Paginated<Artist> = receive_response_json(response).await?;
    log::debug!("Fetched {num} top artist(s)", num = artists.len());
    Ok(artists)
}

#[must_use]
pub fn top_artists_query_key(query: &ItemsQuery) -> QueryKey {
    items_query_key("top-artists", query)
}

pub async fn stats<E: ClientEnvironment>(env: &E, period: Period) -> Result<Stats> {
    let request_url = env.join_api_url(&format!("stats?period={period}"))?;
    let response = env.client().get(request_url).send().await?;
    receive_response_json(response).await
}

#[must_use]
pub fn stats_query_key(period: Period) -> QueryKey {
    QueryKey::new("stats").with("period", period)
}

pub async fn genre_stats<E: ClientEnvironment>(
    env: &E,
    period: Period,
    metric: GenreMetric,
) -> Result<GenreStats> {
    let request_url = env.join_api_url(&format!("genre-stats?period={period}&metric={metric}"))?;
    let response = env.client().get(request_url).send().await?;
    receive_response_json(response).await
}

#[must_use]
pub fn genre_stats_query_key(period: Period, metric: GenreMetric) -> QueryKey {
    QueryKey::new("genre-stats")
        .with("period", period)
        .with("metric", metric)
}

pub async fn recommendations<E: ClientEnvironment>(env: &E) -> Result<Recommendations> {
    let request_url = env.join_api_url("recommendations")?;
    let response = env.client().get(request_url).send().await?;
    let recommendations: Recommendations = receive_response_json(response).await?;
    log::debug!(
        "Fetched {num} recommended track(s)",
        num = recommendations.tracks.len()
    );
    Ok(recommendations)
}

#[must_use]
pub fn recommendations_query_key() -> QueryKey {
    QueryKey::new("recommendations")
}

pub async fn wrapped<E: ClientEnvironment>(env: &E, year: i32) -> Result<WrappedStats> {
    let request_url = env.join_api_url(&format!("wrapped?year={year}"))?;
    let response = env.client().get(request_url).send().await?;
    receive_response_json(response).await
}

#[must_use]
pub fn wrapped_query_key(year: i32) -> QueryKey {
    QueryKey::new("wrapped").with("year", year)
}
