/// Bearer token the mock functions server expects.
pub const TEST_FUNCTIONS_API_KEY: &str = "test-functions-key";

/// Password given to every user fixture.
pub const TEST_PASSWORD: &str = "correct horse battery staple";
