// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use reqwest::{Client, header::CONTENT_TYPE};

use crate::error::{RemoteError, RemoteResult};

use super::{Method, Request, Response, Url};

pub trait ClientEnvironment {
    fn client(&self) -> &Client;

    /// The base resource, i.e. the collection of all movies
    fn collection_url(&self) -> &Url;
}

/// Immutable environment
///
/// Created once on startup and shared by all tasks.
#[derive(Debug, Clone)]
pub struct Environment {
    collection_url: Url,
    client: Client,
}

impl Environment {
    #[must_use]
    pub fn new(collection_url: Url) -> Self {
        Self {
            collection_url,
            client: Client::new(),
        }
    }
}

impl ClientEnvironment for Environment {
    fn client(&self) -> &Client {
        &self.client
    }

    fn collection_url(&self) -> &Url {
        &self.collection_url
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::DataShape(err.to_string())
        } else if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// The reason phrase as received
///
/// HTTP/1 responses with the canonical reason phrase don't carry it
/// as an extension. HTTP/2 has no reason phrase at all.
#[cfg(not(target_arch = "wasm32"))]
fn status_text(response: &reqwest::Response) -> String {
    if let Some(reason) = response.extensions().get::<hyper::ext::ReasonPhrase>() {
        return String::from_utf8_lossy(reason.as_bytes()).into_owned();
    }
    if matches!(
        response.version(),
        reqwest::Version::HTTP_09 | reqwest::Version::HTTP_10 | reqwest::Version::HTTP_11
    ) {
        return response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_owned();
    }
    String::new()
}

// The fetch response of the browser is not accessible through reqwest.
#[cfg(target_arch = "wasm32")]
fn status_text(_response: &reqwest::Response) -> String {
    String::new()
}

/// Send a request and receive the whole response
///
/// Unsuccessful responses are received like successful ones.
pub async fn send_request(client: &Client, request: Request) -> RemoteResult<Response> {
    let Request {
        method,
        url,
        content_type,
        body,
    } = request;
    let mut request = client.request(method.into(), url);
    if let Some(content_type) = content_type {
        request = request.header(CONTENT_TYPE, content_type);
    }
    if let Some(body) = body {
        request = request.body(body);
    }
    let response = request.send().await?;
    let status_code = response.status().as_u16();
    let status_text = status_text(&response);
    let body = response.bytes().await?;
    Ok(Response {
        status_code,
        status_text,
        body,
    })
}
