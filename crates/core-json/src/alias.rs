// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

/// Alternative display name of an artist or album.
///
/// At most one alias per entity is primary at a time. Mutations address an
/// alias by its text, not by `id`: alias texts are unique within the alias
/// set of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub id: i64,
    pub alias: String,
    /// Where the alias came from, e.g. "Manual" or an importer name.
    pub source: String,
    pub is_primary: bool,
}
