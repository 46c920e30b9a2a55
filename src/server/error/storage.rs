use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Blob {0:?} not found in storage")]
    NotFound(String),
    #[error("Storage key {0:?} is not a valid relative key")]
    InvalidKey(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "File not found".to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
