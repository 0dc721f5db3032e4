// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// The next step after a message has been handled
///
/// Effects are applied synchronously on the state while tasks
/// are executed asynchronously and finish with an effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<Effect, Task> {
    DispatchTask(Task),
    ApplyEffect(Effect),
}

impl<Effect, Task> Action<Effect, Task> {
    pub fn apply_effect(effect: Effect) -> Self {
        Self::ApplyEffect(effect)
    }

    pub fn dispatch_task(task: Task) -> Self {
        Self::DispatchTask(task)
    }
}
