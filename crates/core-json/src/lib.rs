// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};
}

pub mod entity;
pub use self::entity::{Entity, InvalidEntity, MovieId};

pub mod movie;
pub use self::movie::Movie;
