//! Mock endpoints for the serverless functions.

use mockito::{Matcher, Mock};

use crate::{constant::TEST_FUNCTIONS_API_KEY, TestContext};

impl TestContext {
    pub fn functions(&mut self) -> FunctionsFixtures<'_> {
        FunctionsFixtures { test: self }
    }
}

pub struct FunctionsFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> FunctionsFixtures<'a> {
    /// Create a `POST /{name}` endpoint requiring the test bearer token.
    pub fn create_endpoint(&mut self, name: &str, status: usize, expected_requests: usize) -> Mock {
        let body = if (200..300).contains(&status) {
            serde_json::json!({ "ok": true })
        } else {
            serde_json::json!({ "error": format!("{} failed", name) })
        };

        self.test
            .server
            .mock("POST", format!("/{}", name).as_str())
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_FUNCTIONS_API_KEY).as_str(),
            )
            .match_header("content-type", Matcher::Regex("application/json".to_string()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
