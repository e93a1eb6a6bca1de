// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Alias management for artists and albums.
//!
//! Deletion and set-primary address an alias by its text, not by the
//! `Alias::id` the entity carries: alias texts are unique within an
//! entity's alias set, and the backend keys these mutations by text.

use reqwest::Response;

use mneme_core_json::{alias::Alias, kind::AliasKind};

use crate::{
    error::Result,
    query::QueryKey,
    webapi::{ClientEnvironment, receive_response_json},
};

/// All aliases of one entity. One of the three legacy endpoints returning
/// a bare array instead of the pagination envelope.
pub async fn aliases<E: ClientEnvironment>(env: &E, kind: AliasKind, id: i64) -> Result<Vec<Alias>> {
    let request_url = env.join_api_url(&format!(
        "aliases?{id_param}={id}",
        id_param = kind.id_param()
    ))?;
    let response = env.client().get(request_url).send().await?;
    let aliases: Vec<Alias> = receive_response_json(response).await?;
    log::debug!("Fetched {num} alias(es)", num = aliases.len());
    Ok(aliases)
}

#[must_use]
pub fn aliases_query_key(kind: AliasKind, id: i64) -> QueryKey {
    QueryKey::new("aliases").with(kind.id_param(), id)
}

pub async fn create_alias<E: ClientEnvironment>(
    env: &E,
    kind: AliasKind,
    id: i64,
    alias: &str,
) -> Result<Response> {
    let url = env.join_api_url("aliases")?;
    let response = env
        .client()
        .post(url)
        .form(&[(kind.id_param(), id.to_string()), ("alias", alias.to_owned())])
        .send()
        .await?;
    Ok(response)
}

pub async fn delete_alias<E: ClientEnvironment>(
    env: &E,
    kind: AliasKind,
    id: i64,
    alias: &str,
) -> Result<Response> {
    let url = env.join_api_url("aliases/delete")?;
    let response = env
        .client()
        .post(url)
        .form(&[(kind.id_param(), id.to_string()), ("alias", alias.to_owned())])
        .send()
        .await?;
    Ok(response)
}

pub async fn set_primary_alias<E: ClientEnvironment>(
    env: &E,
    kind: AliasKind,
    id: i64,
    alias: &str,
) -> Result<Response> {
    let url = env.join_api_url("aliases/primary")?;
    let response = env
        .client()
        .post(url)
        .form(&[(kind.id_param(), id.to_string()), ("alias", alias.to_owned())])
        .send()
        .await?;
    Ok(response)
}

/// Optimistic reconciliation after a successful set-primary call: clear
/// the flag on all siblings, then set it on the target, without waiting
/// for server confirmation. Idempotent.
pub fn mark_primary(aliases: &mut [Alias], alias: &str) {
    for entry in aliases {
        entry.is_primary = entry.alias == alias;
    }
}
