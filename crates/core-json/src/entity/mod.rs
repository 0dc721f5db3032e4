// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use serde::{
    Deserializer, Serializer,
    de::{self, Visitor as SerdeDeserializeVisitor},
};

use crate::{Movie, prelude::*};

mod _core {
    pub(super) use filmoteca_core::{Entity, MovieId};
}

///////////////////////////////////////////////////////////////////////
// MovieId
///////////////////////////////////////////////////////////////////////

/// Identifier as received from the server
///
/// Servers assign either numbers or strings. Both are accepted
/// and kept as text.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct MovieId(String);

impl Serialize for MovieId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

struct MovieIdDeserializeVisitor;

impl SerdeDeserializeVisitor<'_> for MovieIdDeserializeVisitor {
    type Value = MovieId;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("string or integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(MovieId(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(MovieId(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(MovieId(value.to_string()))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(MovieId(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D>(deserializer: D) -> Result<MovieId, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MovieIdDeserializeVisitor)
    }
}

impl From<_core::MovieId> for MovieId {
    fn from(from: _core::MovieId) -> Self {
        Self(from.into_string())
    }
}

///////////////////////////////////////////////////////////////////////
// Entity
///////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum InvalidEntity {
    #[error("missing or empty id")]
    MissingId,
}

/// A persisted movie as received from the server
#[derive(Debug, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<MovieId>,

    #[serde(flatten)]
    body: Movie,
}

impl TryFrom<Entity> for _core::Entity {
    type Error = InvalidEntity;

    fn try_from(from: Entity) -> Result<Self, Self::Error> {
        let Entity { id, body } = from;
        let id = id
            .and_then(|MovieId(id)| _core::MovieId::new(id))
            .ok_or(InvalidEntity::MissingId)?;
        Ok(Self::new(id, body.into()))
    }
}

impl From<_core::Entity> for Entity {
    fn from(from: _core::Entity) -> Self {
        let _core::Entity { id, body } = from;
        Self {
            id: Some(id.into()),
            body: body.into(),
        }
    }
}
