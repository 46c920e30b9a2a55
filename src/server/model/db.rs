//! Database model type aliases.
//!
//! Short names for the `entity` crate models used throughout services and repositories.

pub type FarmModel = entity::farm::Model;
pub type EquipmentModel = entity::equipment::Model;
pub type FacilityModel = entity::facility::Model;
pub type SupplierModel = entity::supplier::Model;
pub type ReportModel = entity::report::Model;
pub type AttachmentModel = entity::attachment::Model;
pub type ProjectModel = entity::project::Model;
pub type QuoteModel = entity::quote::Model;
pub type OrderModel = entity::order_confirmation::Model;
pub type DocumentCategoryModel = entity::document_category::Model;
pub type DocumentModel = entity::document::Model;

/// Application user; `password_hash` holds an Argon2id PHC string.
pub type UserModel = entity::app_user::Model;
