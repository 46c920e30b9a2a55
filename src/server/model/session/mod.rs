//! Session data models and utilities.
//!
//! Type-safe wrappers for data stored in the tower-sessions session (Redis-backed in
//! production, in memory in tests).

pub mod user;
