// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{collections::BTreeMap, fmt};

/// Cache identity of a read operation: the operation name plus its
/// parameters.
///
/// Two keys are equal iff the operation name and every parameter value
/// match. Parameters live in an ordered map, so equality and hashing are
/// independent of the order in which parameters were added.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    op: &'static str,
    params: BTreeMap<String, String>,
}

impl QueryKey {
    #[must_use]
    pub const fn new(op: &'static str) -> Self {
        Self {
            op,
            params: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.params.insert(name.to_owned(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_opt(self, name: &str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    #[must_use]
    pub const fn op(&self) -> &'static str {
        self.op
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.op)?;
        for (name, value) in &self.params {
            write!(f, " {name}={value}")?;
        }
        Ok(())
    }
}
