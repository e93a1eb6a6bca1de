// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use mneme_core_json::search::SearchResults;

use crate::{
    api::encode_query,
    error::Result,
    query::QueryKey,
    webapi::{ClientEnvironment, receive_response_json},
};

/// Free-text search across albums, artists, and tracks.
///
/// Not paginated; the backend caps the result size per group.
pub async fn search<E: ClientEnvironment>(env: &E, query: &str) -> Result<SearchResults> {
    let request_url = env.join_api_url(&format!("search?{}", encode_query(&[("q", query)])))?;
    let response = env.client().get(request_url).send().await?;
    let results: SearchResults = receive_response_json(response).await?;
    log::debug!(
        "Search for {query:?} matched {albums}/{artists}/{tracks} album(s)/artist(s)/track(s)",
        albums = results.albums.len(),
        artists = results.artists.len(),
        tracks = results.tracks.len(),
    );
    Ok(results)
}

#[must_use]
pub fn search_query_key(query: &str) -> QueryKey {
    QueryKey::new("search").with("q", query)
}
