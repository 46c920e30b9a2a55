//! Utility functions and helpers for server operations.
//!
//! Password hashing, the blob store for uploaded files, the HTTP client for the serverless
//! functions and date helpers shared by services and the scheduler.

pub mod functions;
pub mod password;
pub mod storage;
pub mod time;
