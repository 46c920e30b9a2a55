//! JSON requests against the `/api` routes.
//!
//! Requests are sent with the session cookie. Failed requests resolve to the server's
//! `ErrorDto` message when it sent one. Outside the browser every request fails, so
//! components can call these helpers unconditionally.

use serde::{de::DeserializeOwned, Serialize};

/// Fetch and decode a JSON resource
pub async fn get<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    request::json(request::Method::Get, url, None).await
}

/// Send a JSON body with POST and decode the JSON response
pub async fn post<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let body = encode(body)?;
    request::json(request::Method::Post, url, Some(body)).await
}

/// POST without a body, for actions like sending a quote
pub async fn post_action<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    request::json(request::Method::Post, url, None).await
}

/// Send a JSON body with PUT and decode the JSON response
pub async fn put<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let body = encode(body)?;
    request::json(request::Method::Put, url, Some(body)).await
}

/// DELETE a resource, expecting an empty response
pub async fn delete(url: &str) -> Result<(), String> {
    request::empty(request::Method::Delete, url).await
}

/// POST without a body, expecting an empty response
pub async fn post_empty(url: &str) -> Result<(), String> {
    request::empty(request::Method::Post, url).await
}

fn encode<B: Serialize>(body: &B) -> Result<String, String> {
    serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))
}

#[cfg(feature = "web")]
mod request {
    use reqwasm::http::{Request, RequestCredentials, Response};
    use serde::de::DeserializeOwned;

    use crate::model::api::ErrorDto;

    pub enum Method {
        Get,
        Post,
        Put,
        Delete,
    }

    async fn send(method: Method, url: &str, body: Option<String>) -> Result<Response, String> {
        let request = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };

        let request = match body {
            Some(body) => request.header("Content-Type", "application/json").body(body),
            None => request,
        };

        request
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))
    }

    pub async fn json<T: DeserializeOwned>(
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<T, String> {
        let response = send(method, url, body).await?;

        match response.status() {
            200 | 201 => response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e)),
            _ => Err(error_message(response).await),
        }
    }

    pub async fn empty(method: Method, url: &str) -> Result<(), String> {
        let response = send(method, url, None).await?;

        match response.status() {
            200..=299 => Ok(()),
            _ => Err(error_message(response).await),
        }
    }

    async fn error_message(response: Response) -> String {
        let status = response.status();

        if let Ok(error_dto) = response.json::<ErrorDto>().await {
            error_dto.error
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            format!("Request failed with status {}: {}", status, error_text)
        }
    }
}

#[cfg(not(feature = "web"))]
mod request {
    use serde::de::DeserializeOwned;

    pub enum Method {
        Get,
        Post,
        Put,
        Delete,
    }

    const UNAVAILABLE: &str = "Requests can only be sent from the browser";

    pub async fn json<T: DeserializeOwned>(
        _method: Method,
        _url: &str,
        _body: Option<String>,
    ) -> Result<T, String> {
        Err(UNAVAILABLE.to_string())
    }

    pub async fn empty(_method: Method, _url: &str) -> Result<(), String> {
        Err(UNAVAILABLE.to_string())
    }
}
