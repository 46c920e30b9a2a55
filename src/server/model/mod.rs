//! Server application models and type definitions.
//!
//! Application state shared by handlers, database model type aliases and typed session
//! data.

pub mod app;
pub mod db;
pub mod session;
