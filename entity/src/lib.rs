//! SeaORM entities for the AllevApp database schema.

pub mod prelude;

pub mod app_user;
pub mod attachment;
pub mod document;
pub mod document_category;
pub mod equipment;
pub mod facility;
pub mod farm;
pub mod order_confirmation;
pub mod project;
pub mod quote;
pub mod report;
pub mod supplier;
