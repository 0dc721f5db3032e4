// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use filmoteca_client::{
    error::RemoteError,
    models::catalog::{Effect, Message},
    state::update_until_task,
};
use filmoteca_core::{Entity, Movie, MovieId};
use test_log::test;

use super::*;

fn entity() -> Entity {
    Entity::new(
        MovieId::from(1),
        Movie {
            title: "Roma".into(),
            director: "Alfonso Cuarón".into(),
            synopsis: "Una empleada doméstica".into(),
            language: "Español".into(),
            classification: "B".into(),
            genre: "Drama".into(),
            release_date: "2018-08-30".into(),
        },
    )
}

fn handle(state: &mut State, message: impl Into<Message>) {
    let _ = update_until_task(state, message.into());
}

fn render(state: &State) -> String {
    view(state).to_string()
}

fn position(html: &str, pattern: &str) -> usize {
    html.find(pattern)
        .unwrap_or_else(|| panic!("{pattern} not found in {html}"))
}

#[test]
fn rows_have_classified_cells_and_controls_with_datasets() {
    let mut state = State::default();
    handle(&mut state, Effect::FetchAllEntitiesFinished(Ok(vec![entity()])));

    let html = render(&state);

    assert!(html.contains(r#"<table id="tablaPeliculas">"#));
    let tbody = &html[position(&html, "<tbody>")..];
    assert!(tbody.contains(r#"<td class="titulo">Roma</td>"#));
    assert!(tbody.contains(r#"<td class="sipnosis">Una empleada doméstica</td>"#));
    assert!(tbody.contains(r#"<td class="fecha">2018-08-30</td>"#));

    let edit = &tbody[position(tbody, r#"class="edit""#)..];
    let edit = &edit[..position(edit, "</button>")];
    assert!(edit.contains(r#"data-id="1""#));
    assert!(edit.contains(r#"data-titulo="Roma""#));
    assert!(edit.contains(r#"data-clasificacion="B""#));

    let delete = &tbody[position(tbody, r#"class="delete""#)..];
    let delete = &delete[..position(delete, "</button>")];
    assert!(delete.contains(r#"data-id="1""#));
    assert!(!delete.contains("data-titulo"));
}

#[test]
fn form_inputs_are_named_after_fields() {
    let html = render(&State::default());

    let form = &html[position(&html, r#"<form id="formulario">"#)..];
    assert!(form.contains(r#"name="id""#));
    assert!(form.contains(r#"type="hidden""#));
    for field in MovieField::iter_all() {
        assert!(form.contains(&format!(r#"name="{}""#, field.name())));
    }
    assert!(!html.contains("error-message"));
}

#[test]
fn header_and_button_follow_form_mode() {
    let mut state = State::default();
    let html = render(&state);
    assert!(html.contains(r#"<h2 id="titulo">Agregar Pelicula</h2>"#));
    assert!(html.contains(r#"<button id="boton" type="submit">Guardar Pelicula</button>"#));

    handle(&mut state, Intent::EditEntity(Dataset::edit(&entity())));

    let html = render(&state);
    assert!(html.contains(r#"<h2 id="titulo">Editar Pelicula</h2>"#));
    assert!(html.contains(r#"<button id="boton" type="submit">Actualizar Pelicula</button>"#));
    assert!(html.contains(r#"value="Roma""#));
}

#[test]
fn error_message_follows_each_blank_input() {
    let mut state = State::default();
    handle(
        &mut state,
        Intent::UpdateInput {
            name: MovieField::Title.into(),
            value: "Roma".into(),
        },
    );
    handle(&mut state, Intent::SubmitForm);

    let html = render(&state);

    let message = format!(r#"<div class="error-message">{REQUIRED_FIELD_MESSAGE}</div>"#);
    assert_eq!(6, html.matches(&message).count());
    let title = position(&html, r#"name="titulo""#);
    let director = position(&html, r#"name="director""#);
    let first_message = position(&html, &message);
    assert!(director < first_message);
    assert!(!html[title..director].contains("error-message"));
}

#[test]
fn inline_errors_follow_the_table() {
    let mut state = State::default();
    handle(
        &mut state,
        Effect::FetchAllEntitiesFinished(Err(RemoteError::Status {
            code: 503,
            text: "Service Unavailable".into(),
        })),
    );

    let html = render(&state);

    let table_end = position(&html, "</table>");
    let error = position(&html, "<p><b>Error: 503 Service Unavailable</b></p>");
    assert!(table_end < error);
}
