//! Utility functions for controller request handling.
//!
//! Session user retrieval and role checks for protected endpoints, list query parsing, and
//! reading multipart uploads and building file download responses.

pub mod get_user;
pub mod query;
pub mod upload;
