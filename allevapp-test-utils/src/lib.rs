//! Test harness for the AllevApp server.
//!
//! Tests declare what they need with [`TestBuilder`] and receive a [`TestContext`] holding an
//! in-memory SQLite database, an in-memory session, a mock functions server and a temporary
//! storage directory.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_FUNCTIONS_API_KEY, TEST_PASSWORD},
        TestBuilder, TestContext, TestError,
    };
}
