// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Projection of entities into table rows
//!
//! Each row carries the data of its entity on the action controls,
//! i.e. event handlers recover the acted-upon movie without fetching
//! it again.

use filmoteca_core::{Entity, MovieField, MovieId};

/// Key of the identifier in a [`Dataset`]
pub const ID_KEY: &str = "id";

/// Class of the edit control
pub const EDIT_CONTROL: &str = "edit";

/// Class of the delete control
pub const DELETE_CONTROL: &str = "delete";

/// Key/value pairs attached to an action control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<(&'static str, String)>,
}

impl Dataset {
    /// All editable fields and the identifier
    #[must_use]
    pub fn edit(entity: &Entity) -> Self {
        let entries = entity
            .body
            .iter()
            .map(|(field, value)| (field.name(), value.to_owned()))
            .chain(std::iter::once((ID_KEY, entity.id.to_string())))
            .collect();
        Self { entries }
    }

    /// Only the identifier
    #[must_use]
    pub fn delete(entity: &Entity) -> Self {
        Self {
            entries: vec![(ID_KEY, entity.id.to_string())],
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(v.as_str()))
    }

    #[must_use]
    pub fn field(&self, field: MovieField) -> Option<&str> {
        self.get(field.name())
    }

    #[must_use]
    pub fn id(&self) -> Option<MovieId> {
        self.get(ID_KEY).and_then(MovieId::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// The HTML attributes, i.e. `data-<key>="<value>"`
    pub fn attributes(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.iter().map(|(k, v)| (format!("data-{k}"), v))
    }
}

/// One row of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// Cell contents in canonical order, each cell is classified
    /// by the name of its field
    pub cells: Vec<(MovieField, &'a str)>,
    pub edit: Dataset,
    pub delete: Dataset,
}

impl<'a> Row<'a> {
    #[must_use]
    pub fn new(entity: &'a Entity) -> Self {
        Self {
            cells: entity.body.iter().collect(),
            edit: Dataset::edit(entity),
            delete: Dataset::delete(entity),
        }
    }
}

/// One row per entity in the given order
///
/// Neither sorted nor filtered.
pub fn rows(entities: &[Entity]) -> impl Iterator<Item = Row<'_>> {
    entities.iter().map(Row::new)
}
