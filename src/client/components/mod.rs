pub mod alert;
pub mod badge;
pub mod field;
pub mod filter_bar;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod upload;

pub use alert::ErrorAlert;
pub use badge::{MaintenanceBadge, StatusBadge};
pub use field::{DateField, SelectField, TextArea, TextField};
pub use filter_bar::{FacetChecks, FacetSelect, SearchInput};
pub use layout::AppLayout;
pub use navbar::Navbar;
pub use page::Page;
pub use upload::UploadForm;
