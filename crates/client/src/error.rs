// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy of the client.
///
/// `Transport` failures propagate unchanged and are never retried by the
/// client. `Api` failures always carry a human-readable message, either
/// decoded from the backend's error envelope or synthesized from the
/// status code. `Decode` covers 2xx responses with undecodable bodies.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] jiff::Error),
}

impl Error {
    /// HTTP status of a decoded API failure, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
