//! HTTP controller endpoints for the AllevApp web API.
//!
//! Axum handlers for login, the CRUD screens, file uploads and downloads, the maintenance
//! calendar and the dashboard. Handlers resolve the logged in user from the tower-sessions
//! session, call into the services and return JSON responses; errors convert to responses
//! through [`crate::server::error::Error`]. Every handler carries a utoipa path for the
//! OpenAPI document.

pub mod auth;
pub mod dashboard;
pub mod document;
pub mod document_category;
pub mod equipment;
pub mod facility;
pub mod farm;
pub mod maintenance;
pub mod order;
pub mod project;
pub mod quote;
pub mod report;
pub mod supplier;
pub mod user;
pub mod util;
