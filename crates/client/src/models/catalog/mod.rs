// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Synchronization of the remote movie collection with the table
//! and the form

use filmoteca_core::{Entity, MovieId};

pub mod form;
pub use self::form::{Form, FormMode, InputName, Submission};

pub mod intent;
pub use self::intent::Intent;

pub mod effect;
pub use self::effect::Effect;

pub mod task;
pub use self::task::Task;

pub mod view;
pub use self::view::{Dataset, Row};

pub type Action = crate::action::Action<Effect, Task>;

pub type Message = crate::message::Message<Intent, Effect>;

pub type StateUpdated = crate::state::StateUpdated<Effect, Task>;

/// Asked before deleting a movie
pub const DELETE_CONFIRMATION_PROMPT: &str = "¿Estás seguro de eliminar esta pelicula?";

/// How the client catches up with the server after a successful
/// modification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resync {
    /// Reload the whole page, discarding all client state
    #[default]
    ReloadPage,

    /// Reset the form and fetch all rows again
    Refetch,
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub resync: Resync,
}

#[derive(Debug, Default)]
pub struct State {
    settings: Settings,
    rows: Vec<Entity>,
    form: Form,
    inline_errors: Vec<String>,
    pending_alert: Option<String>,
    pending_deletion: Option<MovieId>,
    reload_requested: bool,
}

impl State {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// All entities received so far in order of arrival
    #[must_use]
    pub fn rows(&self) -> &[Entity] {
        &self.rows
    }

    pub fn view_rows(&self) -> impl Iterator<Item = Row<'_>> {
        view::rows(&self.rows)
    }

    #[must_use]
    pub const fn form(&self) -> &Form {
        &self.form
    }

    /// Messages of failed list requests, displayed after the table
    #[must_use]
    pub fn inline_errors(&self) -> &[String] {
        &self.inline_errors
    }

    /// Message of a failed modification that needs to be alerted
    #[must_use]
    pub fn pending_alert(&self) -> Option<&str> {
        self.pending_alert.as_deref()
    }

    pub fn take_pending_alert(&mut self) -> Option<String> {
        self.pending_alert.take()
    }

    /// A deletion that awaits confirmation by the user
    #[must_use]
    pub const fn pending_deletion(&self) -> Option<&MovieId> {
        self.pending_deletion.as_ref()
    }

    #[must_use]
    pub const fn is_reload_requested(&self) -> bool {
        self.reload_requested
    }

    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    fn after_entity_modified(&mut self) -> StateUpdated {
        match self.settings.resync {
            Resync::ReloadPage => {
                self.reload_requested = true;
                StateUpdated::maybe_changed(None)
            }
            Resync::Refetch => {
                self.rows.clear();
                self.form = Form::default();
                StateUpdated::maybe_changed(Action::dispatch_task(Task::FetchAllEntities))
            }
        }
    }
}

impl crate::state::State for State {
    type Intent = Intent;
    type Effect = Effect;
    type Task = Task;

    fn update(&mut self, message: Message) -> StateUpdated {
        match message {
            Message::Intent(intent) => intent.apply_on(self),
            Message::Effect(effect) => effect.apply_on(self),
        }
    }
}

impl From<Intent> for Message {
    fn from(intent: Intent) -> Self {
        Self::Intent(intent)
    }
}

impl From<Effect> for Message {
    fn from(effect: Effect) -> Self {
        Self::Effect(effect)
    }
}
