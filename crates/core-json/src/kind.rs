// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

/// The three mergeable/deletable library item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Track,
    Album,
    Artist,
}

impl ItemKind {
    /// Path segment of the item's endpoints, e.g. `DELETE /track`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Album => "album",
            Self::Artist => "artist",
        }
    }

    /// Name of the id parameter addressing an item of this kind in query
    /// strings and form bodies.
    #[must_use]
    pub const fn id_param(self) -> &'static str {
        match self {
            Self::Track => "track_id",
            Self::Album => "album_id",
            Self::Artist => "artist_id",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two item kinds that carry aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AliasKind {
    Artist,
    Album,
}

impl AliasKind {
    #[must_use]
    pub const fn id_param(self) -> &'static str {
        match self {
            Self::Artist => "artist_id",
            Self::Album => "album_id",
        }
    }
}
