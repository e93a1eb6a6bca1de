// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Transport layer: a thin wrapper over [`reqwest`] that normalizes
//! non-2xx responses into [`Error::Api`] by decoding the backend's
//! `{"error": ...}` envelope.
//!
//! Successful response bodies are decoded into the statically expected
//! shape of the call site. No runtime schema validation is performed;
//! the bindings trust the server. No retries, no timeouts: network-level
//! failures propagate unchanged to the caller.

use bytes::Bytes;
use reqwest::{Client, Response, StatusCode, Url};
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Prefix of all web API paths, joined by [`WebEnv::join_api_url`].
pub const API_BASE_PATH: &str = "/apis/web/v1/";

pub trait ClientEnvironment {
    fn client(&self) -> &Client;
    fn join_api_url(&self, path_and_query: &str) -> Result<Url>;
}

/// The production environment: a cookie-aware HTTP client bound to the
/// service origin.
///
/// The session is carried by an opaque cookie set by the login endpoint;
/// the cookie store forwards it on all subsequent same-origin requests.
/// No token is ever placed in headers.
#[derive(Debug, Clone)]
pub struct WebEnv {
    client: Client,
    base_url: Url,
}

impl WebEnv {
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(client, base_url))
    }

    #[must_use]
    pub const fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl ClientEnvironment for WebEnv {
    fn client(&self) -> &Client {
        &self.client
    }

    fn join_api_url(&self, path_and_query: &str) -> Result<Url> {
        let api_url = self.base_url.join(API_BASE_PATH)?;
        Ok(api_url.join(path_and_query)?)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

/// Decode the error message of a non-2xx response body.
///
/// Falls back to a status-embedded message when the envelope is absent,
/// empty, or not JSON at all. The result is always human-readable.
#[must_use]
pub fn decode_error_message(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error: Some(message) }) if !message.is_empty() => message,
        _ => format!("request failed ({status})", status = status.as_u16()),
    }
}

/// Decode the error message of an already-failed mutation response.
///
/// Mutation bindings return the raw response; callers that need the
/// error envelope after checking the status use this.
pub async fn response_error_message(response: Response) -> String {
    let status = response.status();
    match response.bytes().await {
        Ok(bytes) => decode_error_message(status, &bytes),
        Err(_) => decode_error_message(status, &[]),
    }
}

pub async fn receive_response_body(response: Response) -> Result<Bytes> {
    let status = response.status();
    let bytes = response.bytes().await?;
    if !status.is_success() {
        return Err(Error::Api {
            status,
            message: decode_error_message(status, &bytes),
        });
    }
    Ok(bytes)
}

pub async fn receive_response_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = receive_response_body(response).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
