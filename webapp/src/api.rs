// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use seed::{
    fetch::{self, FetchError, Header, Status},
    window,
};
use url::Url;

use filmoteca_client::{
    error::{RemoteError, RemoteResult},
    models::catalog::{Effect, Task},
    webapi::{Method, Request, Response},
};

/// The collection resource, relative to the origin of the page
const DEFAULT_BASE_URL: &str = "/api/peliculas";

/// Overridable at build time
fn base_url() -> &'static str {
    option_env!("FILMOTECA_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

fn page_origin() -> RemoteResult<Url> {
    let origin = window()
        .location()
        .origin()
        .map_err(|err| RemoteError::InvalidUrl(format!("{err:?}")))?;
    Url::parse(&origin).map_err(|err| RemoteError::InvalidUrl(err.to_string()))
}

pub(crate) fn collection_url() -> RemoteResult<Url> {
    let base_url = base_url();
    let collection_url = match Url::parse(base_url) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => page_origin()?
            .join(base_url)
            .map_err(|err| RemoteError::InvalidUrl(err.to_string()))?,
        Err(err) => return Err(RemoteError::InvalidUrl(err.to_string())),
    };
    seed::log!("Collection URL", collection_url.as_str());
    Ok(collection_url)
}

pub(crate) async fn execute_task(task: Task, collection_url: Url) -> Effect {
    let response = match task.request(&collection_url) {
        Ok(request) => send_request(request).await,
        Err(err) => Err(err),
    };
    task.finish(response)
}

const fn fetch_method(method: Method) -> fetch::Method {
    match method {
        Method::Get => fetch::Method::Get,
        Method::Post => fetch::Method::Post,
        Method::Put => fetch::Method::Put,
        Method::Delete => fetch::Method::Delete,
    }
}

/// Send a request through the Fetch API of the browser
///
/// Unlike other clients the browser reports the status text that
/// has actually been received.
async fn send_request(request: Request) -> RemoteResult<Response> {
    let Request {
        method,
        url,
        content_type,
        body,
    } = request;
    let mut request = fetch::Request::new(url.to_string()).method(fetch_method(method));
    if let Some(body) = body {
        request = request.bytes(body);
    }
    // Replaces the content type that has been set implicitly with the body
    if let Some(content_type) = content_type {
        request = request.header(Header::content_type(content_type));
    }
    let response = request.fetch().await.map_err(remote_error)?;
    let Status { code, text, .. } = response.status();
    let body = response.bytes().await.map_err(remote_error)?;
    Ok(Response {
        status_code: code,
        status_text: text,
        body: body.into(),
    })
}

fn remote_error(err: FetchError) -> RemoteError {
    match err {
        FetchError::JsonError(err) => RemoteError::DataShape(format!("{err:?}")),
        FetchError::RequestError(err) => RemoteError::InvalidUrl(format!("{err:?}")),
        FetchError::StatusError(Status { code, text, .. }) => RemoteError::Status { code, text },
        err @ (FetchError::DomException(_)
        | FetchError::PromiseError(_)
        | FetchError::NetworkError(_)) => RemoteError::Network(format!("{err:?}")),
    }
}
