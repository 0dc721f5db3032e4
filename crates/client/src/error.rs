// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Shown instead of an empty status text
pub const FALLBACK_ERROR_TEXT: &str = "Ocurrió un error";

/// Status code reported for failures without an HTTP response
///
/// Same as the status of a network error in the Fetch standard.
pub const NO_RESPONSE_STATUS_CODE: u16 = 0;

/// Failure of a request against the remote collection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("{code} {text}")]
    Status { code: u16, text: String },

    #[error("network failure: {0}")]
    Network(String),

    #[error("unexpected response data: {0}")]
    DataShape(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl RemoteError {
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Status { code, .. } => *code,
            Self::Network(_) | Self::DataShape(_) | Self::InvalidUrl(_) => NO_RESPONSE_STATUS_CODE,
        }
    }

    #[must_use]
    pub fn status_text(&self) -> &str {
        match self {
            Self::Status { text, .. } => text,
            Self::Network(_) | Self::DataShape(_) | Self::InvalidUrl(_) => "",
        }
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// The text presented to users, either inline or in an alert
#[must_use]
pub fn error_message(err: &RemoteError) -> String {
    let text = err.status_text();
    let text = if text.is_empty() {
        FALLBACK_ERROR_TEXT
    } else {
        text
    };
    format!("Error: {code} {text}", code = err.status_code())
}
