//! Client for the serverless functions handling email and calendar integration.
//!
//! Functions are invoked by name with `POST {FUNCTIONS_URL}/{name}`, a JSON body and the
//! API key as bearer token. Server errors and network failures are retried with exponential
//! backoff; any other non-success status fails immediately.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{function::FunctionError, Error},
    service::retry::RetryContext,
};

pub const CREATE_CALENDAR_EVENT: &str = "create-calendar-event";
pub const SEND_QUOTE_EMAIL: &str = "send-quote-email";
pub const SEND_PASSWORD_EMAIL: &str = "send-password-email";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// All-day event placed in the shared farm calendar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Quote request sent to a supplier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteEmail {
    pub to: String,
    pub supplier_name: String,
    pub farm_name: String,
    pub subject: String,
    pub body: String,
}

/// Temporary password sent to a user after a reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PasswordEmail {
    pub to: String,
    pub username: String,
    pub temporary_password: String,
}

#[derive(Deserialize)]
struct FunctionErrorBody {
    error: String,
}

#[derive(Clone, Debug)]
pub struct FunctionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    retry: RetryContext,
}

pub struct FunctionsClientBuilder {
    base_url: String,
    api_key: String,
    user_agent: Option<String>,
    retry: RetryContext,
}

impl FunctionsClientBuilder {
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Override the retry behaviour, mostly to keep tests fast.
    pub fn retry(mut self, retry: RetryContext) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<FunctionsClient, Error> {
        let mut http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT);
        if let Some(user_agent) = &self.user_agent {
            http = http.user_agent(user_agent);
        }

        let http = http.build().map_err(|e| {
            Error::InternalError(format!("Failed to build functions HTTP client: {}", e))
        })?;

        Ok(FunctionsClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
            retry: self.retry,
        })
    }
}

impl FunctionsClient {
    pub fn builder(base_url: &str, api_key: &str) -> FunctionsClientBuilder {
        FunctionsClientBuilder {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            user_agent: None,
            retry: RetryContext::new(),
        }
    }

    pub async fn create_calendar_event(&self, event: &CalendarEvent) -> Result<(), Error> {
        self.invoke(CREATE_CALENDAR_EVENT, event).await
    }

    pub async fn send_quote_email(&self, email: &QuoteEmail) -> Result<(), Error> {
        self.invoke(SEND_QUOTE_EMAIL, email).await
    }

    pub async fn send_password_email(&self, email: &PasswordEmail) -> Result<(), Error> {
        self.invoke(SEND_PASSWORD_EMAIL, email).await
    }

    /// Invoke a function by name, retrying transient failures.
    pub async fn invoke<T>(&self, name: &str, payload: &T) -> Result<(), Error>
    where
        T: Serialize + Sync,
    {
        self.retry
            .execute_with_retry(name, move || self.invoke_once(name, payload))
            .await
    }

    async fn invoke_once<T>(&self, name: &str, payload: &T) -> Result<(), Error>
    where
        T: Serialize + Sync,
    {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, name))
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|source| FunctionError::Request {
                name: name.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Functions answer `{ "error": "..." }`; fall back to the raw body otherwise
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<FunctionErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);

        Err(FunctionError::Failed {
            name: name.to_string(),
            status: status.as_u16(),
            message,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;

    use super::*;

    const API_KEY: &str = "secret";

    fn client(url: &str) -> FunctionsClient {
        FunctionsClient::builder(url, API_KEY)
            .retry(RetryContext::new().with_initial_backoff(Duration::from_millis(1)))
            .build()
            .unwrap()
    }

    fn event() -> CalendarEvent {
        CalendarEvent {
            title: "Maintenance: Milking Robot".to_string(),
            description: "Due".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    /// Expect the payload to be posted as JSON with the bearer token
    #[tokio::test]
    async fn posts_payload_with_bearer_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/create-calendar-event")
            .match_header("authorization", "Bearer secret")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "title": "Maintenance: Milking Robot",
                "date": "2025-06-01"
            })))
            .with_status(200)
            .create_async()
            .await;

        let result = client(&server.url()).create_calendar_event(&event()).await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    /// Expect a server error to be retried and the error message to be surfaced
    #[tokio::test]
    async fn retries_server_errors() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/create-calendar-event")
            .with_status(503)
            .with_body(r#"{"error":"calendar unavailable"}"#)
            .expect(3)
            .create_async()
            .await;

        let result = client(&server.url()).create_calendar_event(&event()).await;

        match result {
            Err(Error::FunctionError(FunctionError::Failed {
                status, message, ..
            })) => {
                assert_eq!(status, 503);
                assert_eq!(message, "calendar unavailable");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        mock.assert_async().await;
    }

    /// Expect a client error to fail on the first attempt
    #[tokio::test]
    async fn does_not_retry_client_errors() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/send-password-email")
            .with_status(422)
            .with_body("missing recipient")
            .expect(1)
            .create_async()
            .await;

        let result = client(&server.url())
            .send_password_email(&PasswordEmail {
                to: String::new(),
                username: "ola".to_string(),
                temporary_password: "x".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::FunctionError(FunctionError::Failed { status: 422, .. }))
        ));
        mock.assert_async().await;
    }
}
