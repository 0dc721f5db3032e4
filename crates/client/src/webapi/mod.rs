// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Requests and responses independent of the HTTP client

use bytes::Bytes;
use filmoteca_core::MovieId;
pub use url::Url;

use crate::error::{RemoteError, RemoteResult};

#[cfg(feature = "webapi-backend")]
mod backend;
#[cfg(feature = "webapi-backend")]
pub use self::backend::{ClientEnvironment, Environment, send_request};

/// Sent with every request that carries or expects JSON
pub const CONTENT_TYPE_JSON: &str = "application/json;charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub content_type: Option<&'static str>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
            content_type: None,
            body: None,
        }
    }

    #[must_use]
    pub fn json(method: Method, url: Url, body: Option<Vec<u8>>) -> Self {
        Self {
            method,
            url,
            content_type: Some(CONTENT_TYPE_JSON),
            body,
        }
    }
}

/// A received response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status_code: u16,

    /// The reason phrase as sent by the server, might be empty
    pub status_text: String,

    pub body: Bytes,
}

impl Response {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status_code, 200..=299)
    }

    /// The body of a successful response
    ///
    /// The body of an unsuccessful response is parsed as JSON for
    /// diagnostic purposes only. A malformed error body never hides
    /// the status of the response.
    pub fn into_success_body(self) -> RemoteResult<Bytes> {
        if self.is_success() {
            return Ok(self.body);
        }
        let Self {
            status_code,
            status_text,
            body,
        } = self;
        let json = serde_json::from_slice::<serde_json::Value>(&body).unwrap_or_default();
        log::debug!("Request failed with status {status_code} {status_text}: {json}");
        Err(RemoteError::Status {
            code: status_code,
            text: status_text,
        })
    }
}

/// The resource of a single movie: `<base>/<id>`
pub fn item_url(collection_url: &Url, id: &MovieId) -> RemoteResult<Url> {
    let mut url = collection_url.clone();
    url.path_segments_mut()
        .map_err(|()| RemoteError::InvalidUrl(collection_url.to_string()))?
        .pop_if_empty()
        .push(id.as_str());
    log::debug!("Item URL: {url}");
    Ok(url)
}
