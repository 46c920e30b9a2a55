//! Error types for the AllevApp server.
//!
//! Domain-specific error enums (authentication, configuration, domain validation, storage and
//! serverless function calls) are aggregated into [`Error`]. Every error implements
//! `IntoResponse` so controllers can return `Result<impl IntoResponse, Error>` and let `?`
//! produce the HTTP status and JSON [`ErrorDto`] body.

pub mod auth;
pub mod config;
pub mod domain;
pub mod function;
pub mod retry;
pub mod storage;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, UnknownVariant},
    server::error::{
        auth::AuthError, config::ConfigError, domain::DomainError, function::FunctionError,
        storage::StorageError,
    },
};

/// Main error type for the AllevApp server.
///
/// Uses `thiserror`'s `#[from]` so the underlying errors convert with `?`.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (login, session, permissions)
/// - Domain errors (missing records, invalid input)
/// - Storage and serverless function errors
/// - External library errors (database, sessions, scheduler, multipart parsing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (login failure, missing session, insufficient role).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Domain error (record not found, validation failure).
    #[error(transparent)]
    DomainError(#[from] DomainError),
    /// Blob storage error (file system, missing blob).
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Serverless function invocation error.
    #[error(transparent)]
    FunctionError(#[from] FunctionError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Stored status value no longer matches any known variant.
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),
    /// Internal error indicating a bug in AllevApp's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Malformed multipart upload.
    #[error(transparent)]
    MultipartError(#[from] MultipartError),
}

impl Error {
    /// Shorthand for a [`DomainError::NotFound`].
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::DomainError(DomainError::NotFound { entity, id })
    }

    /// Shorthand for a [`DomainError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::DomainError(DomainError::Validation(message.into()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and malformed uploads
/// - 401 Unauthorized - Failed login or no user in session
/// - 403 Forbidden - Admin route accessed by a member
/// - 404 Not Found - Missing records or blobs
/// - 409 Conflict - Unique or foreign key constraint violations
/// - 502 Bad Gateway - A serverless function failed
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DomainError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            Self::FunctionError(err) => err.into_response(),
            Self::MultipartError(err) => {
                tracing::debug!("Rejected multipart upload: {}", err);

                err.into_response()
            }
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);

                    conflict("A record with the same unique value already exists")
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!("Foreign key constraint violation: {}", detail);

                    conflict("The record is still referenced or references a missing record")
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

fn conflict(message: &str) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details don't leak to the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use sea_orm::{DbErr, RuntimeErr};

    use super::*;

    /// Expect domain shorthands to map to 404 and 400
    #[test]
    fn domain_errors_map_to_client_statuses() {
        let resp = Error::not_found("Farm", 1).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = Error::validation("Name is required").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    /// Expect an unclassified database error to be a 500
    #[test]
    fn plain_db_error_is_internal() {
        let err = Error::DbErr(DbErr::Query(RuntimeErr::Internal("boom".to_string())));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
