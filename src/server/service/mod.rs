//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories (inside transactions where several rows
//! change together), map `entity` models to the shared DTOs and call out to blob storage and
//! the serverless functions. Controllers stay thin and only translate HTTP to service calls.

pub mod auth;
pub mod dashboard;
pub mod document;
pub mod equipment;
pub mod facility;
pub mod farm;
pub mod maintenance;
pub mod order;
pub mod order_document;
pub mod project;
pub mod quote;
pub mod report;
pub mod retry;
pub mod supplier;
pub mod user;
pub mod validate;
