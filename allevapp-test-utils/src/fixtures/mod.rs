//! Fixture helpers for inserting rows and creating mock endpoints during a test.
//!
//! Each accessor on [`TestContext`](crate::TestContext) groups the fixtures of one area of
//! the application, e.g. `test.farm().insert_farm("North Farm")`.

pub mod asset;
pub mod document;
pub mod farm;
pub mod functions;
pub mod purchasing;
pub mod report;
pub mod user;
