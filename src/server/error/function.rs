use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure invoking one of the serverless functions.
#[derive(Error, Debug)]
pub enum FunctionError {
    /// The function answered with a non-success status.
    #[error("Function {name} failed with status {status}: {message}")]
    Failed {
        name: String,
        status: u16,
        message: String,
    },
    /// The request never produced a response (connection, timeout, body decoding).
    #[error("Failed to call function {name}: {source}")]
    Request {
        name: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FunctionError {
    pub fn name(&self) -> &str {
        match self {
            Self::Failed { name, .. } | Self::Request { name, .. } => name,
        }
    }
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: format!("The {} service is unavailable, please try again", self.name()),
            }),
        )
            .into_response()
    }
}
