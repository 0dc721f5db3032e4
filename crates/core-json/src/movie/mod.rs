// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use serde::{
    Deserializer,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor as SerdeDeserializeVisitor},
};

use crate::prelude::*;

mod _core {
    pub(super) use filmoteca_core::movie::*;
}

/// Property values are displayed as text
///
/// Numbers and booleans are converted into their textual representation.
/// Null values as well as nested arrays or objects are treated as empty.
struct TextDeserializeVisitor;

impl<'de> SerdeDeserializeVisitor<'de> for TextDeserializeVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("text")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_owned())
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(String::new())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(String::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(String::new())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(String::new())
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextDeserializeVisitor)
}

/// The seven editable properties of a movie
///
/// Used both as the request body for creating and updating movies
/// and as the flattened body of entities received from the server.
/// Missing properties are treated as empty and unknown properties
/// are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(default)]
pub struct Movie {
    #[serde(deserialize_with = "deserialize_text")]
    titulo: String,
    #[serde(deserialize_with = "deserialize_text")]
    director: String,
    #[serde(deserialize_with = "deserialize_text")]
    sipnosis: String,
    #[serde(deserialize_with = "deserialize_text")]
    idioma: String,
    #[serde(deserialize_with = "deserialize_text")]
    clasificacion: String,
    #[serde(deserialize_with = "deserialize_text")]
    genero: String,
    #[serde(deserialize_with = "deserialize_text")]
    fecha: String,
}

impl From<Movie> for _core::Movie {
    fn from(from: Movie) -> Self {
        let Movie {
            titulo,
            director,
            sipnosis,
            idioma,
            clasificacion,
            genero,
            fecha,
        } = from;
        Self {
            title: titulo,
            director,
            synopsis: sipnosis,
            language: idioma,
            classification: clasificacion,
            genre: genero,
            release_date: fecha,
        }
    }
}

impl From<_core::Movie> for Movie {
    fn from(from: _core::Movie) -> Self {
        let _core::Movie {
            title,
            director,
            synopsis,
            language,
            classification,
            genre,
            release_date,
        } = from;
        Self {
            titulo: title,
            director,
            sipnosis: synopsis,
            idioma: language,
            clasificacion: classification,
            genero: genre,
            fecha: release_date,
        }
    }
}
