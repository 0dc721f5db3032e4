// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use filmoteca_core::{Entity, MovieField, MovieId};

use crate::error::{RemoteResult, error_message};

use super::{Action, State, StateUpdated, Submission, Task};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replaces the results of the previous validation
    FormValidated {
        invalid_fields: Vec<MovieField>,
    },
    DeletionRequested {
        id: MovieId,
    },
    FetchAllEntitiesFinished(RemoteResult<Vec<Entity>>),
    CreateEntityFinished(RemoteResult<Entity>),
    UpdateEntityFinished(RemoteResult<Entity>),
    DeleteEntityFinished(RemoteResult<MovieId>),
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::FormValidated { invalid_fields } => {
                let is_valid = invalid_fields.is_empty();
                state.form.set_invalid_fields(invalid_fields);
                if !is_valid {
                    log::debug!(
                        "Submission blocked by missing fields: {:?}",
                        state.form.invalid_fields()
                    );
                    return StateUpdated::maybe_changed(None);
                }
                let task = match state.form.submission() {
                    Submission::Create { new_movie } => Task::CreateEntity { new_movie },
                    Submission::Update { id, modified_movie } => Task::UpdateEntity {
                        id,
                        modified_movie,
                    },
                };
                log::debug!("Dispatching task {task:?}");
                StateUpdated::maybe_changed(Action::dispatch_task(task))
            }
            Self::DeletionRequested { id } => {
                if let Some(pending) = &state.pending_deletion {
                    log::warn!("Replacing pending deletion of {pending} with {id}");
                }
                state.pending_deletion = Some(id);
                StateUpdated::maybe_changed(None)
            }
            Self::FetchAllEntitiesFinished(result) => {
                match result {
                    Ok(entities) => {
                        log::debug!("Appending {} row(s)", entities.len());
                        state.rows.extend(entities);
                    }
                    Err(err) => {
                        log::warn!("Failed to fetch all entities: {err}");
                        state.inline_errors.push(error_message(&err));
                    }
                }
                StateUpdated::maybe_changed(None)
            }
            Self::CreateEntityFinished(result) | Self::UpdateEntityFinished(result) => {
                match result {
                    Ok(entity) => {
                        log::debug!("Saved entity {}", entity.id);
                        state.after_entity_modified()
                    }
                    Err(err) => on_modification_failed(state, &err),
                }
            }
            Self::DeleteEntityFinished(result) => match result {
                Ok(id) => {
                    log::debug!("Deleted entity {id}");
                    state.after_entity_modified()
                }
                Err(err) => on_modification_failed(state, &err),
            },
        }
    }
}

fn on_modification_failed(state: &mut State, err: &crate::error::RemoteError) -> StateUpdated {
    log::warn!("Failed to modify entity: {err}");
    state.pending_alert = Some(error_message(err));
    StateUpdated::maybe_changed(None)
}
