// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// A message is either an intent or an effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<Intent, Effect> {
    /// Originates from user interaction
    Intent(Intent),
    /// Originates from a finished task or a preceding message
    Effect(Effect),
}
