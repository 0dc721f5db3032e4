// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Movie catalog client
//!
//! Re-exports the sub-crates according to the enabled features.

pub use filmoteca_core as core;

#[cfg(feature = "json")]
pub use filmoteca_core_json as core_json;

#[cfg(feature = "client")]
pub use filmoteca_client as client;

pub mod prelude {
    pub use filmoteca_core::prelude::*;

    #[cfg(feature = "client")]
    pub use filmoteca_client::prelude::*;
}
