// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::str::FromStr as _;

use semval::IsValid as _;
use test_log::test;

use super::*;

fn complete_movie() -> Movie {
    Movie {
        title: "El laberinto del fauno".into(),
        director: "Guillermo del Toro".into(),
        synopsis: "Una niña descubre un laberinto".into(),
        language: "Español".into(),
        classification: "R".into(),
        genre: "Fantasía".into(),
        release_date: "2006-10-11".into(),
    }
}

#[test]
fn field_names_in_canonical_order() {
    let names: Vec<_> = MovieField::iter_all().map(MovieField::name).collect();
    assert_eq!(
        vec![
            "titulo",
            "director",
            "sipnosis",
            "idioma",
            "clasificacion",
            "genero",
            "fecha"
        ],
        names
    );
    assert_eq!(7, MovieField::COUNT);
}

#[test]
fn parse_field_from_name() {
    assert_eq!(Ok(MovieField::Synopsis), MovieField::from_str("sipnosis"));
    assert!(MovieField::from_str("id").is_err());
}

#[test]
fn get_and_set_fields() {
    let mut movie = Movie::default();
    for field in MovieField::iter_all() {
        movie.set(field, field.name().to_uppercase());
    }
    for (field, value) in movie.iter() {
        assert_eq!(field.name().to_uppercase(), value);
    }
}

#[test]
fn complete_movie_is_valid() {
    let movie = complete_movie();
    assert!(movie.is_valid());
    assert!(missing_fields(&movie).is_empty());
}

#[test]
fn blank_fields_are_missing() {
    let mut movie = complete_movie();
    movie.director = " \t".into();
    movie.release_date = String::new();
    assert!(!movie.is_valid());
    assert_eq!(
        vec![MovieField::Director, MovieField::ReleaseDate],
        missing_fields(&movie)
    );
}

#[test]
fn default_movie_misses_all_fields() {
    let missing = missing_fields(&Movie::default());
    assert_eq!(MovieField::iter_all().collect::<Vec<_>>(), missing);
}

#[test]
fn values_are_not_trimmed() {
    let mut movie = complete_movie();
    movie.title = "  Roma ".into();
    assert!(movie.is_valid());
    assert_eq!("  Roma ", movie.get(MovieField::Title));
}
