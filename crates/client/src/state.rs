// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::ops::{Add, AddAssign};

use crate::{action::Action, message::Message};

/// Tells the renderer if it needs to render the state again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateMutation {
    Unchanged,
    MaybeChanged,
}

impl Add<StateMutation> for StateMutation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self == Self::Unchanged && rhs == Self::Unchanged {
            Self::Unchanged
        } else {
            Self::MaybeChanged
        }
    }
}

impl AddAssign for StateMutation {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct StateUpdated<Effect, Task> {
    pub state_mutation: StateMutation,
    pub next_action: Option<Action<Effect, Task>>,
}

impl<Effect, Task> StateUpdated<Effect, Task> {
    pub fn unchanged(next_action: impl Into<Option<Action<Effect, Task>>>) -> Self {
        Self {
            state_mutation: StateMutation::Unchanged,
            next_action: next_action.into(),
        }
    }

    pub fn maybe_changed(next_action: impl Into<Option<Action<Effect, Task>>>) -> Self {
        Self {
            state_mutation: StateMutation::MaybeChanged,
            next_action: next_action.into(),
        }
    }
}

pub trait State {
    type Intent;
    type Effect;
    type Task;

    fn update(
        &mut self,
        message: Message<Self::Intent, Self::Effect>,
    ) -> StateUpdated<Self::Effect, Self::Task>;
}

/// Handle a message and all subsequent effects
///
/// Effects are applied immediately until either no action is left
/// or a task needs to be dispatched. The accumulated mutation and
/// the optional task are returned.
pub fn update_until_task<S: State>(
    state: &mut S,
    message: Message<S::Intent, S::Effect>,
) -> (StateMutation, Option<S::Task>) {
    let mut next_message = Some(message);
    let mut state_mutation = StateMutation::Unchanged;
    while let Some(message) = next_message.take() {
        let StateUpdated {
            state_mutation: next_mutation,
            next_action,
        } = state.update(message);
        state_mutation += next_mutation;
        match next_action {
            None => (),
            Some(Action::ApplyEffect(effect)) => {
                next_message = Some(Message::Effect(effect));
            }
            Some(Action::DispatchTask(task)) => {
                return (state_mutation, Some(task));
            }
        }
    }
    (state_mutation, None)
}
