// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::prelude::*;
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator as _, IntoStaticStr};

/// The editable attributes of a movie
///
/// The variants are declared in canonical order, i.e. the order
/// of both the table columns and the form inputs. The serialized
/// names are shared by the JSON properties, the CSS classes of the
/// table cells, the names of the form inputs, and the keys of the
/// `data-*` attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
pub enum MovieField {
    #[strum(serialize = "titulo")]
    Title,
    #[strum(serialize = "director")]
    Director,
    #[strum(serialize = "sipnosis")]
    Synopsis,
    #[strum(serialize = "idioma")]
    Language,
    #[strum(serialize = "clasificacion")]
    Classification,
    #[strum(serialize = "genero")]
    Genre,
    #[strum(serialize = "fecha")]
    ReleaseDate,
}

impl MovieField {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// All fields in canonical order
    pub fn iter_all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// A movie as edited by users
///
/// All values are plain text. Neither the release date nor the
/// classification are parsed or normalized by the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub synopsis: String,
    pub language: String,
    pub classification: String,
    pub genre: String,
    pub release_date: String,
}

impl Movie {
    #[must_use]
    pub fn get(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::Director => &self.director,
            MovieField::Synopsis => &self.synopsis,
            MovieField::Language => &self.language,
            MovieField::Classification => &self.classification,
            MovieField::Genre => &self.genre,
            MovieField::ReleaseDate => &self.release_date,
        }
    }

    pub fn get_mut(&mut self, field: MovieField) -> &mut String {
        match field {
            MovieField::Title => &mut self.title,
            MovieField::Director => &mut self.director,
            MovieField::Synopsis => &mut self.synopsis,
            MovieField::Language => &mut self.language,
            MovieField::Classification => &mut self.classification,
            MovieField::Genre => &mut self.genre,
            MovieField::ReleaseDate => &mut self.release_date,
        }
    }

    pub fn set(&mut self, field: MovieField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Field values in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (MovieField, &str)> + '_ {
        MovieField::iter().map(|field| (field, self.get(field)))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovieInvalidity {
    /// The trimmed value is empty
    Missing(MovieField),
}

impl Validate for Movie {
    type Invalidity = MovieInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        self.iter()
            .fold(ValidationContext::new(), |context, (field, value)| {
                context.invalidate_if(value.trim().is_empty(), Self::Invalidity::Missing(field))
            })
            .into()
    }
}

/// Collect the missing fields in canonical order
#[must_use]
pub fn missing_fields(movie: &Movie) -> Vec<MovieField> {
    movie.validate().err().map_or_else(Vec::new, |err| {
        err.into_iter()
            .map(|invalidity| match invalidity {
                MovieInvalidity::Missing(field) => field,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests;
