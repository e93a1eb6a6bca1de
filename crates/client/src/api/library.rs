// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Library administration: single-item reads, merges, image replacement,
//! and deletion.
//!
//! Merges are destructive: all listens and relations of the `from` entity
//! are reassigned to the `to` entity server-side, then the `from` entity
//! is removed. UI code must confirm before dispatching and reconcile
//! cached lists after a success.

use reqwest::{
    Response,
    multipart::{Form, Part},
};

use mneme_core_json::{album::Album, kind::ItemKind};

use crate::{
    error::Result,
    query::QueryKey,
    webapi::{ClientEnvironment, receive_response_json},
};

pub async fn album<E: ClientEnvironment>(env: &E, id: i64) -> Result<Album> {
    let request_url = env.join_api_url(&format!("album?id={id}"))?;
    let response = env.client().get(request_url).send().await?;
    receive_response_json(response).await
}

#[must_use]
pub fn album_query_key(id: i64) -> QueryKey {
    QueryKey::new("album").with("id", id)
}

pub async fn merge_tracks<E: ClientEnvironment>(
    env: &E,
    from_id: i64,
    to_id: i64,
) -> Result<Response> {
    let url = env.join_api_url(&format!("merge/tracks?from_id={from_id}&to_id={to_id}"))?;
    let response = env.client().post(url).send().await?;
    Ok(response)
}

pub async fn merge_albums<E: ClientEnvironment>(
    env: &E,
    from_id: i64,
    to_id: i64,
    replace_image: bool,
) -> Result<Response> {
    let url = env.join_api_url(&format!(
        "merge/albums?from_id={from_id}&to_id={to_id}&replace_image={replace_image}"
    ))?;
    let response = env.client().post(url).send().await?;
    Ok(response)
}

pub async fn merge_artists<E: ClientEnvironment>(
    env: &E,
    from_id: i64,
    to_id: i64,
    replace_image: bool,
) -> Result<Response> {
    let url = env.join_api_url(&format!(
        "merge/artists?from_id={from_id}&to_id={to_id}&replace_image={replace_image}"
    ))?;
    let response = env.client().post(url).send().await?;
    Ok(response)
}

/// Replacement artwork: either a URL the server fetches itself or an
/// uploaded file.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Url(String),
    File { file_name: String, bytes: Vec<u8> },
}

pub async fn replace_image<E: ClientEnvironment>(
    env: &E,
    kind: ItemKind,
    id: i64,
    source: ImageSource,
) -> Result<Response> {
    let url = env.join_api_url("replace-image")?;
    let form = Form::new().text(kind.id_param(), id.to_string());
    let form = match source {
        ImageSource::Url(image_url) => form.text("image_url", image_url),
        ImageSource::File { file_name, bytes } => {
            form.part("image", Part::bytes(bytes).file_name(file_name))
        }
    };
    let response = env.client().post(url).multipart(form).send().await?;
    Ok(response)
}

/// Remove a track, album, or artist and all of its listens.
pub async fn delete_item<E: ClientEnvironment>(
    env: &E,
    kind: ItemKind,
    id: i64,
) -> Result<Response> {
    let url = env.join_api_url(&format!("{kind}?id={id}"))?;
    let response = env.client().delete(url).send().await?;
    Ok(response)
}
