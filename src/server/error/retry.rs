use sea_orm::DbErr;

use super::{function::FunctionError, storage::StorageError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently (bad request, programming error)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Serverless functions - retry when the function itself is unavailable
            Self::FunctionError(FunctionError::Failed { status, .. }) => {
                if *status >= 500 {
                    ErrorRetryStrategy::Retry
                } else {
                    // 4xx means the payload or credentials are wrong, retrying won't help
                    ErrorRetryStrategy::Fail
                }
            }
            Self::FunctionError(FunctionError::Request { source, .. }) => {
                if source.is_decode() || source.is_builder() {
                    ErrorRetryStrategy::Fail
                } else {
                    // Network error or connection issue
                    ErrorRetryStrategy::Retry
                }
            }

            Self::DbErr(db_err) => match db_err {
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                // Constraint violations, type conversion, missing records are permanent
                _ => ErrorRetryStrategy::Fail,
            },

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            Self::StorageError(StorageError::Io(_)) => ErrorRetryStrategy::Retry,
            Self::StorageError(_) => ErrorRetryStrategy::Fail,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::DomainError(_) => ErrorRetryStrategy::Fail,
            Self::ParseError(_) => ErrorRetryStrategy::Fail,
            Self::UnknownVariant(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
            Self::MultipartError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
