// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Session, account, and API key endpoints.
//!
//! Login and logout only move the session cookie; the cookie store of
//! the environment carries it on every subsequent request.

use reqwest::Response;

use mneme_core_json::{
    api_key::ApiKey,
    user::{Config, User},
};

use crate::{
    error::Result,
    query::QueryKey,
    webapi::{ClientEnvironment, receive_response_json},
};

pub async fn login<E: ClientEnvironment>(
    env: &E,
    username: &str,
    password: &str,
    remember: bool,
) -> Result<Response> {
    let url = env.join_api_url("login")?;
    let response = env
        .client()
        .post(url)
        .form(&[
            ("username", username.to_owned()),
            ("password", password.to_owned()),
            ("remember_me", remember.to_string()),
        ])
        .send()
        .await?;
    Ok(response)
}

pub async fn logout<E: ClientEnvironment>(env: &E) -> Result<Response> {
    let url = env.join_api_url("logout")?;
    let response = env.client().post(url).send().await?;
    Ok(response)
}

/// The authenticated user of the current session.
///
/// Fails with a decoded API error when the session is anonymous; callers
/// map that to their anonymous state instead of surfacing it.
pub async fn current_user<E: ClientEnvironment>(env: &E) -> Result<User> {
    let request_url = env.join_api_url("user/me")?;
    let response = env.client().get(request_url).send().await?;
    receive_response_json(response).await
}

#[must_use]
pub fn current_user_query_key() -> QueryKey {
    QueryKey::new("user/me")
}

/// Change username and/or password of the current user.
pub async fn update_user<E: ClientEnvironment>(
    env: &E,
    username: &str,
    password: &str,
) -> Result<Response> {
    let url = env.join_api_url("user")?;
    let response = env
        .client()
        .patch(url)
        .form(&[
            ("username", username.to_owned()),
            ("password", password.to_owned()),
        ])
        .send()
        .await?;
    Ok(response)
}

/// Server-supplied client configuration; drives the initial theme before
/// first paint.
pub async fn config<E: ClientEnvironment>(env: &E) -> Result<Config> {
    let request_url = env.join_api_url("config")?;
    let response = env.client().get(request_url).send().await?;
    receive_response_json(response).await
}

#[must_use]
pub fn config_query_key() -> QueryKey {
    QueryKey::new("config")
}

/// All API keys of the current user, secrets included. One of the three
/// legacy endpoints returning a bare array instead of the pagination
/// envelope.
pub async fn api_keys<E: ClientEnvironment>(env: &E) -> Result<Vec<ApiKey>> {
    let request_url = env.join_api_url("user/apikeys")?;
    let response = env.client().get(request_url).send().await?;
    let keys: Vec<ApiKey> = receive_response_json(response).await?;
    log::debug!("Fetched {num} api key(s)", num = keys.len());
    Ok(keys)
}

#[must_use]
pub fn api_keys_query_key() -> QueryKey {
    QueryKey::new("user/apikeys")
}

/// Create an API key. The secret key value is only ever returned here
/// and on listing; it is never regenerated in place.
pub async fn create_api_key<E: ClientEnvironment>(env: &E, label: &str) -> Result<ApiKey> {
    let url = env.join_api_url("user/apikeys")?;
    let response = env
        .client()
        .post(url)
        .form(&[("label", label)])
        .send()
        .await?;
    receive_response_json(response).await
}

pub async fn update_api_key_label<E: ClientEnvironment>(
    env: &E,
    id: i64,
    label: &str,
) -> Result<Response> {
    let url = env.join_api_url("user/apikeys")?;
    let response = env
        .client()
        .patch(url)
        .form(&[("id", id.to_string()), ("label", label.to_owned())])
        .send()
        .await?;
    Ok(response)
}

pub async fn delete_api_key<E: ClientEnvironment>(env: &E, id: i64) -> Result<Response> {
    let url = env.join_api_url(&format!("user/apikeys?id={id}"))?;
    let response = env.client().delete(url).send().await?;
    Ok(response)
}
