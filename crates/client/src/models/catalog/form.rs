// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use filmoteca_core::{Movie, MovieField, MovieId, movie::missing_fields};

use super::view::{Dataset, ID_KEY};

/// Displayed next to every required input that is empty
pub const REQUIRED_FIELD_MESSAGE: &str = "Este campo es obligatorio";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    #[must_use]
    pub const fn header_text(self) -> &'static str {
        match self {
            Self::Create => "Agregar Pelicula",
            Self::Edit => "Editar Pelicula",
        }
    }

    #[must_use]
    pub const fn submit_text(self) -> &'static str {
        match self {
            Self::Create => "Guardar Pelicula",
            Self::Edit => "Actualizar Pelicula",
        }
    }
}

/// Names the inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputName {
    Id,
    Field(MovieField),
}

impl InputName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => ID_KEY,
            Self::Field(field) => field.name(),
        }
    }
}

impl From<MovieField> for InputName {
    fn from(from: MovieField) -> Self {
        Self::Field(from)
    }
}

/// What a valid form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create { new_movie: Movie },
    Update { id: MovieId, modified_movie: Movie },
}

/// The single, reusable form
///
/// Mirrors the values of all inputs. The identifier input decides
/// between creating and updating, while the mode only affects the
/// captions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    mode: FormMode,
    id: String,
    values: Movie,
    invalid_fields: Vec<MovieField>,
}

impl Form {
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn header_text(&self) -> &'static str {
        self.mode.header_text()
    }

    #[must_use]
    pub fn submit_text(&self) -> &'static str {
        self.mode.submit_text()
    }

    #[must_use]
    pub fn input(&self, name: InputName) -> &str {
        match name {
            InputName::Id => &self.id,
            InputName::Field(field) => self.values.get(field),
        }
    }

    pub fn set_input(&mut self, name: InputName, value: impl Into<String>) {
        match name {
            InputName::Id => self.id = value.into(),
            InputName::Field(field) => self.values.set(field, value),
        }
    }

    /// Fields that have been found empty by the last validation
    #[must_use]
    pub fn invalid_fields(&self) -> &[MovieField] {
        &self.invalid_fields
    }

    #[must_use]
    pub fn is_invalid(&self, field: MovieField) -> bool {
        self.invalid_fields.contains(&field)
    }

    /// Copy the data of an edit control into the inputs
    ///
    /// Keys that are missing from the dataset clear the corresponding
    /// input.
    pub fn populate_from(&mut self, dataset: &Dataset) {
        for field in MovieField::iter_all() {
            self.values
                .set(field, dataset.field(field).unwrap_or_default());
        }
        dataset
            .get(ID_KEY)
            .unwrap_or_default()
            .clone_into(&mut self.id);
        self.mode = FormMode::Edit;
    }

    /// Fields with a blank value in canonical order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<MovieField> {
        missing_fields(&self.values)
    }

    /// Replace the results of the previous validation
    pub(super) fn set_invalid_fields(&mut self, invalid_fields: Vec<MovieField>) {
        self.invalid_fields = invalid_fields;
    }

    #[must_use]
    pub fn submission(&self) -> Submission {
        let movie = self.values.clone();
        match MovieId::new(self.id.as_str()) {
            Some(id) => Submission::Update {
                id,
                modified_movie: movie,
            },
            None => Submission::Create { new_movie: movie },
        }
    }
}
