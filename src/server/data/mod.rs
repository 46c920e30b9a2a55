//! Data access layer for database operations.
//!
//! One repository per table, each generic over `ConnectionTrait` so the same repository
//! works on a plain connection or inside a transaction. Repositories take already validated
//! input and return `entity` models; mapping to DTOs happens in the service layer.

pub mod attachment;
pub mod document;
pub mod document_category;
pub mod equipment;
pub mod facility;
pub mod farm;
pub mod order;
pub mod project;
pub mod quote;
pub mod report;
pub mod supplier;
pub mod user;
