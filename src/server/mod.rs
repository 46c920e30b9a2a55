//! Server application core modules.
//!
//! Contains everything behind the `/api` routes of AllevApp: HTTP routing, session-based
//! authentication, database access, attachment storage, calls to the serverless functions
//! and the scheduled maintenance reminders.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
