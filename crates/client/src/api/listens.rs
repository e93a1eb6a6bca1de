// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use reqwest::Response;

use mneme_core_json::{
    listen::{ActivityItem, Listen, NowPlaying},
    pagination::Paginated,
};

use crate::{
    api::{ActivityQuery, ItemsQuery, encode_query, items_query_key},
    error::Result,
    query::QueryKey,
    webapi::{ClientEnvironment, receive_response_json},
};

pub async fn last_listens<E: ClientEnvironment>(
    env: &E,
    query: &ItemsQuery,
) -> Result<Paginated<Listen>> {
    let request_url = env.join_api_url(&format!("listens?{}", encode_query(query)))?;
    let response = env.client().get(request_url).send().await?;
    let listens: Paginated<Listen> = receive_response_json(response).await?;
    log::debug!("Fetched {num} listen(s)", num = listens.len());
    Ok(listens)
}

#[must_use]
pub fn last_listens_query_key(query: &ItemsQuery) -> QueryKey {
    items_query_key("listens", query)
}

/// Listen counts bucketed over time. One of the three legacy endpoints
/// returning a bare array instead of the pagination envelope.
pub async fn listen_activity<E: ClientEnvironment>(
    env: &E,
    query: &ActivityQuery,
) -> Result<Vec<ActivityItem>> {
    let request_url = env.join_api_url(&format!("listen-activity?{}", encode_query(query)))?;
    let response = env.client().get(request_url).send().await?;
    let items: Vec<ActivityItem> = receive_response_json(response).await?;
    log::debug!("Fetched {num} activity bucket(s)", num = items.len());
    Ok(items)
}

#[must_use]
pub fn listen_activity_query_key(query: &ActivityQuery) -> QueryKey {
    QueryKey::new("listen-activity")
        .with("step", query.step)
        .with("range", query.range)
        .with("month", query.month)
        .with("year", query.year)
        .with("artist_id", query.artist_id)
        .with("album_id", query.album_id)
        .with("track_id", query.track_id)
}

/// Polled, not pushed.
pub async fn now_playing<E: ClientEnvironment>(env: &E) -> Result<NowPlaying> {
    let request_url = env.join_api_url("now-playing")?;
    let response = env.client().get(request_url).send().await?;
    receive_response_json(response).await
}

#[must_use]
pub fn now_playing_query_key() -> QueryKey {
    QueryKey::new("now-playing")
}

/// Record a playback event of `track_id` at `unix` seconds.
pub async fn submit_listen<E: ClientEnvironment>(
    env: &E,
    track_id: i64,
    unix: i64,
) -> Result<Response> {
    let url = env.join_api_url("listen")?;
    let response = env
        .client()
        .post(url)
        .form(&[
            ("track_id", track_id.to_string()),
            ("unix", unix.to_string()),
        ])
        .send()
        .await?;
    Ok(response)
}

/// Delete a playback event.
///
/// Listens carry no surrogate id; the identity on the wire is the
/// `(track_id, unix seconds)` pair derived from the listen itself.
pub async fn delete_listen<E: ClientEnvironment>(env: &E, listen: &Listen) -> Result<Response> {
    let unix = listen.unix_time()?;
    let url = env.join_api_url(&format!(
        "listen?track_id={track_id}&unix={unix}",
        track_id = listen.track.id
    ))?;
    let response = env.client().delete(url).send().await?;
    Ok(response)
}
