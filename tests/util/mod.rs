//! Helpers for building the application state and requests in controller tests.

use std::time::Duration;

use allevapp::server::{
    model::{app::AppState, session::user::SessionUserId},
    service::retry::RetryContext,
    util::{functions::FunctionsClient, storage::FsBlobStore},
};
use allevapp_test_utils::prelude::*;
use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, Multipart},
    http::Request,
    response::Response,
};
use serde::de::DeserializeOwned;

const BOUNDARY: &str = "allevapp-test-boundary";

/// Extension trait building an [`AppState`] on top of a [`TestContext`]
#[allow(async_fn_in_trait)]
pub trait TestContextExt {
    /// State sharing the test's database, mock functions server and storage directory
    async fn app_state(&self) -> AppState;

    /// Insert a user with the given role and store its ID in the test session
    async fn login_as(&self, username: &str, role: &str) -> Result<i32, TestError>;
}

impl TestContextExt for TestContext {
    async fn app_state(&self) -> AppState {
        let functions = FunctionsClient::builder(&self.functions_url(), TEST_FUNCTIONS_API_KEY)
            .retry(
                RetryContext::new()
                    .with_max_attempts(1)
                    .with_initial_backoff(Duration::from_millis(1)),
            )
            .build()
            .expect("Failed to build functions client");
        let storage = FsBlobStore::open(self.storage_path())
            .await
            .expect("Failed to open blob store");

        AppState {
            db: self.db.clone(),
            functions,
            storage,
        }
    }

    async fn login_as(&self, username: &str, role: &str) -> Result<i32, TestError> {
        let user = self.user().insert_user(username, role).await?;
        SessionUserId::insert(&self.session, user.id)
            .await
            .expect("Failed to store user in session");

        Ok(user.id)
    }
}

/// A file part of a multipart upload
pub struct FilePart<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub body: &'a [u8],
}

/// Build the `Multipart` extractor for a form with the given text fields and files
pub async fn multipart(fields: &[(&str, &str)], files: &[FilePart<'_>]) -> Multipart {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    for file in files {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                BOUNDARY, file.file_name, file.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.body);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    let request = Request::builder()
        .method("POST")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .expect("Failed to build multipart request");

    Multipart::from_request(request, &())
        .await
        .expect("Failed to extract multipart form")
}

/// Decode a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to decode response body")
}

/// Read a raw response body
pub async fn bytes_body(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec()
}
