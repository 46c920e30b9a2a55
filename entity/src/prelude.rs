pub use super::app_user::Entity as AppUser;
pub use super::attachment::Entity as Attachment;
pub use super::document::Entity as Document;
pub use super::document_category::Entity as DocumentCategory;
pub use super::equipment::Entity as Equipment;
pub use super::facility::Entity as Facility;
pub use super::farm::Entity as Farm;
pub use super::order_confirmation::Entity as OrderConfirmation;
pub use super::project::Entity as Project;
pub use super::quote::Entity as Quote;
pub use super::report::Entity as Report;
pub use super::supplier::Entity as Supplier;
