// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::webapi::{ClientEnvironment, send_request};

use super::{super::Effect, Task};

impl Task {
    pub async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::trace!("Executing task: {self:?}");
        let response = match self.request(env.collection_url()) {
            Ok(request) => send_request(env.client(), request).await,
            Err(err) => Err(err),
        };
        self.finish(response)
    }
}
