// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use crate::Movie;

/// Opaque identifier of a persisted movie
///
/// Assigned by the server when a movie is created and never
/// modified afterwards. Numeric identifiers are kept in their
/// decimal text representation. The empty string is not a valid
/// identifier, i.e. movies that have not been persisted yet don't
/// have an identifier at all.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(String);

impl MovieId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return None;
        }
        Some(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<u64> for MovieId {
    fn from(from: u64) -> Self {
        Self(from.to_string())
    }
}

/// A movie that has been persisted by the server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub id: MovieId,
    pub body: Movie,
}

impl Entity {
    #[must_use]
    pub const fn new(id: MovieId, body: Movie) -> Self {
        Self { id, body }
    }
}

#[cfg(test)]
mod tests;
