// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Process-wide application context, loaded once at startup.
//!
//! The session is a three-state value: admin UI must not render while
//! the state is still [`SessionState::Loading`], and must only render
//! for an authenticated admin.

use mneme_core_json::user::User;

use crate::{
    api::account::{config, current_user},
    webapi::ClientEnvironment,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Session status has not been determined yet.
    #[default]
    Loading,
    /// The backend reported no authenticated session.
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Loading | Self::Anonymous => None,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppContext {
    pub session: SessionState,
    pub default_theme: String,
    pub configurable_home_activity: bool,
    pub home_items: u32,
}

impl AppContext {
    /// Theme applied when the server config is unavailable or blank.
    pub const FALLBACK_THEME: &'static str = "yuu";

    #[must_use]
    pub fn new() -> Self {
        Self {
            session: SessionState::Loading,
            default_theme: Self::FALLBACK_THEME.to_owned(),
            configurable_home_activity: true,
            home_items: 12,
        }
    }

    /// Determine session and configuration, tolerating failures.
    ///
    /// A failed or unauthenticated `user/me` probe yields an anonymous
    /// session; a failed or blank config yields the fallback theme. The
    /// context never ends up in [`SessionState::Loading`] after this
    /// returns, so the UI can gate its first paint on it.
    pub async fn load<E: ClientEnvironment>(env: &E) -> Self {
        let session = match current_user(env).await {
            Ok(user) => SessionState::Authenticated(user),
            Err(err) => {
                log::debug!("No authenticated session: {err}");
                SessionState::Anonymous
            }
        };
        let default_theme = match config(env).await {
            Ok(config) if !config.default_theme.is_empty() => config.default_theme,
            Ok(_) => Self::FALLBACK_THEME.to_owned(),
            Err(err) => {
                log::debug!("Falling back to default theme: {err}");
                Self::FALLBACK_THEME.to_owned()
            }
        };
        Self {
            session,
            default_theme,
            ..Self::new()
        }
    }

    /// Reconcile the displayed name after a successful account rename.
    pub fn set_username(&mut self, username: impl Into<String>) {
        if let SessionState::Authenticated(user) = &mut self.session {
            user.username = username.into();
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
