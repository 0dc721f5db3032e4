// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use filmoteca_core::{Entity, Movie, MovieId};

use crate::{
    error::{RemoteError, RemoteResult},
    webapi::{Method, Request, Response, Url, item_url},
};

use super::Effect;

/// Requests against the remote collection
///
/// Each task is executed exactly once, without retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    FetchAllEntities,
    CreateEntity { new_movie: Movie },
    UpdateEntity { id: MovieId, modified_movie: Movie },
    DeleteEntity { id: MovieId },
}

impl Task {
    /// The request that needs to be sent for executing the task
    pub fn request(&self, collection_url: &Url) -> RemoteResult<Request> {
        let request = match self {
            Self::FetchAllEntities => Request::get(collection_url.clone()),
            Self::CreateEntity { new_movie } => Request::json(
                Method::Post,
                collection_url.clone(),
                Some(encode_movie(new_movie)?),
            ),
            Self::UpdateEntity { id, modified_movie } => Request::json(
                Method::Put,
                item_url(collection_url, id)?,
                Some(encode_movie(modified_movie)?),
            ),
            Self::DeleteEntity { id } => {
                Request::json(Method::Delete, item_url(collection_url, id)?, None)
            }
        };
        log::debug!("Request for task {self:?}: {:?} {}", request.method, request.url);
        Ok(request)
    }

    /// Finish the task with the received response
    #[must_use]
    pub fn finish(self, response: RemoteResult<Response>) -> Effect {
        let response_body = response.and_then(Response::into_success_body);
        match self {
            Self::FetchAllEntities => {
                let result = response_body.and_then(|body| decode_entities(&body));
                Effect::FetchAllEntitiesFinished(result)
            }
            Self::CreateEntity { .. } => {
                let result = response_body.and_then(|body| decode_entity(&body));
                Effect::CreateEntityFinished(result)
            }
            Self::UpdateEntity { .. } => {
                let result = response_body.and_then(|body| decode_entity(&body));
                Effect::UpdateEntityFinished(result)
            }
            Self::DeleteEntity { id } => {
                let result = response_body
                    .and_then(|body| validate_confirmation(&body))
                    .map(|()| id);
                Effect::DeleteEntityFinished(result)
            }
        }
    }

    /// Finish the task without executing it
    #[must_use]
    pub fn fail(self, err: RemoteError) -> Effect {
        log::debug!("Task {self:?} failed: {err}");
        self.finish(Err(err))
    }
}

fn data_shape<E: ToString>(err: E) -> RemoteError {
    RemoteError::DataShape(err.to_string())
}

fn encode_movie(movie: &Movie) -> RemoteResult<Vec<u8>> {
    serde_json::to_vec(&filmoteca_core_json::Movie::from(movie.clone())).map_err(data_shape)
}

fn decode_entity(response_body: &[u8]) -> RemoteResult<Entity> {
    serde_json::from_slice::<filmoteca_core_json::Entity>(response_body)
        .map_err(data_shape)
        .and_then(|entity| Entity::try_from(entity).map_err(data_shape))
}

/// Entities without an identifier can neither be edited nor deleted
/// and are skipped.
fn decode_entities(response_body: &[u8]) -> RemoteResult<Vec<Entity>> {
    let entities: Vec<_> =
        serde_json::from_slice::<Vec<filmoteca_core_json::Entity>>(response_body)
            .map_err(data_shape)?
            .into_iter()
            .filter_map(|entity| match Entity::try_from(entity) {
                Ok(entity) => Some(entity),
                Err(err) => {
                    log::warn!("Skipping received entity: {err}");
                    None
                }
            })
            .collect();
    log::debug!("Received {} entities", entities.len());
    Ok(entities)
}

// The confirmation payload is not used, but it must be valid JSON if present
fn validate_confirmation(response_body: &[u8]) -> RemoteResult<()> {
    if !response_body.is_empty() {
        serde_json::from_slice::<serde_json::Value>(response_body).map_err(data_shape)?;
    }
    Ok(())
}

#[cfg(feature = "webapi-backend")]
mod webapi;

#[cfg(test)]
mod tests;
