// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{Action, Dataset, Effect, InputName, State, StateUpdated, Task};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    FetchAllEntities,
    UpdateInput { name: InputName, value: String },
    /// The edit control of a row has been clicked
    EditEntity(Dataset),
    SubmitForm,
    /// The delete control of a row has been clicked
    RequestDeletion(Dataset),
    /// The user has answered the confirmation prompt
    ConfirmDeletion { confirmed: bool },
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::FetchAllEntities => {
                let task = Task::FetchAllEntities;
                log::debug!("Dispatching task {task:?}");
                StateUpdated::unchanged(Action::dispatch_task(task))
            }
            Self::UpdateInput { name, value } => {
                state.form.set_input(name, value);
                StateUpdated::maybe_changed(None)
            }
            Self::EditEntity(dataset) => {
                state.form.populate_from(&dataset);
                StateUpdated::maybe_changed(None)
            }
            Self::SubmitForm => {
                let invalid_fields = state.form.missing_fields();
                StateUpdated::unchanged(Action::apply_effect(Effect::FormValidated {
                    invalid_fields,
                }))
            }
            Self::RequestDeletion(dataset) => {
                let Some(id) = dataset.id() else {
                    let self_reconstructed = Self::RequestDeletion(dataset);
                    log::warn!("Discarding intent without id: {self_reconstructed:?}");
                    return StateUpdated::unchanged(None);
                };
                StateUpdated::unchanged(Action::apply_effect(Effect::DeletionRequested { id }))
            }
            Self::ConfirmDeletion { confirmed } => {
                let Some(id) = state.pending_deletion.take() else {
                    log::warn!("Discarding confirmation while no deletion is pending");
                    return StateUpdated::unchanged(None);
                };
                if !confirmed {
                    log::debug!("Deletion of {id} has been cancelled");
                    return StateUpdated::maybe_changed(None);
                }
                let task = Task::DeleteEntity { id };
                log::debug!("Dispatching task {task:?}");
                StateUpdated::maybe_changed(Action::dispatch_task(task))
            }
        }
    }
}
