// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bytes::Bytes;
use test_log::test;

use crate::{error::error_message, webapi::CONTENT_TYPE_JSON};

use super::*;

fn collection_url() -> Url {
    "http://localhost:3000/peliculas".parse().unwrap()
}

fn response(status_code: u16, status_text: &str, body: &'static str) -> Response {
    Response {
        status_code,
        status_text: status_text.to_owned(),
        body: Bytes::from_static(body.as_bytes()),
    }
}

#[test]
fn fetch_all_entities_requests_collection_without_content_type() {
    let request = Task::FetchAllEntities.request(&collection_url()).unwrap();
    assert_eq!(Request::get(collection_url()), request);
}

#[test]
fn modifying_requests_carry_json_content_type() {
    let id = MovieId::from(5);
    let tasks = [
        Task::CreateEntity {
            new_movie: Movie::default(),
        },
        Task::UpdateEntity {
            id: id.clone(),
            modified_movie: Movie::default(),
        },
        Task::DeleteEntity { id },
    ];
    let requests: Vec<_> = tasks
        .iter()
        .map(|task| task.request(&collection_url()).unwrap())
        .collect();
    let methods: Vec<_> = requests.iter().map(|request| request.method).collect();
    assert_eq!(vec![Method::Post, Method::Put, Method::Delete], methods);
    let urls: Vec<_> = requests.iter().map(|request| request.url.as_str()).collect();
    assert_eq!(
        vec![
            "http://localhost:3000/peliculas",
            "http://localhost:3000/peliculas/5",
            "http://localhost:3000/peliculas/5",
        ],
        urls
    );
    assert!(
        requests
            .iter()
            .all(|request| request.content_type == Some(CONTENT_TYPE_JSON))
    );
    assert!(requests[2].body.is_none());
}

#[test]
fn failed_response_reports_status_text_as_received() {
    let effect = Task::FetchAllEntities.finish(Ok(response(404, "Pelicula no encontrada", "")));
    let Effect::FetchAllEntitiesFinished(Err(err)) = effect else {
        panic!("unexpected effect");
    };
    assert_eq!("Error: 404 Pelicula no encontrada", error_message(&err));
}

#[test]
fn failed_response_without_status_text() {
    let effect = Task::UpdateEntity {
        id: MovieId::from(1),
        modified_movie: Movie::default(),
    }
    .finish(Ok(response(500, "", "{}")));
    let Effect::UpdateEntityFinished(Err(err)) = effect else {
        panic!("unexpected effect");
    };
    assert_eq!("Error: 500 Ocurrió un error", error_message(&err));
}

#[test]
fn delete_finishes_with_id() {
    let id = MovieId::from(9);
    let effect = Task::DeleteEntity { id: id.clone() }.finish(Ok(response(200, "OK", "{}")));
    assert_eq!(Effect::DeleteEntityFinished(Ok(id)), effect);
}

#[test]
fn delete_rejects_malformed_confirmation() {
    let effect = Task::DeleteEntity {
        id: MovieId::from(9),
    }
    .finish(Ok(response(200, "OK", "gone")));
    assert!(matches!(
        effect,
        Effect::DeleteEntityFinished(Err(RemoteError::DataShape(_)))
    ));
}

#[test]
fn entities_without_id_are_skipped() {
    let body = r#"[
        { "id": 1, "titulo": "A", "fecha": null },
        { "titulo": "Sin id" },
        { "id": "", "titulo": "Vacío" },
        { "id": "b", "titulo": "B", "clasificacion": 7 }
    ]"#;
    let effect = Task::FetchAllEntities.finish(Ok(response(200, "OK", body)));
    let Effect::FetchAllEntitiesFinished(Ok(entities)) = effect else {
        panic!("unexpected effect");
    };
    let ids: Vec<_> = entities.iter().map(|entity| entity.id.as_str()).collect();
    assert_eq!(vec!["1", "b"], ids);
    assert_eq!("", entities[0].body.release_date);
    assert_eq!("7", entities[1].body.classification);
}
