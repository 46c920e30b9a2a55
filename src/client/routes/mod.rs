pub mod dashboard;
pub mod documents;
pub mod equipment;
pub mod facilities;
pub mod farms;
pub mod login;
pub mod maintenance;
pub mod not_found;
pub mod orders;
pub mod projects;
pub mod quotes;
pub mod reports;
pub mod settings;

pub use dashboard::Dashboard;
pub use documents::Documents;
pub use equipment::Equipment;
pub use facilities::Facilities;
pub use farms::Farms;
pub use login::Login;
pub use maintenance::Maintenance;
pub use not_found::NotFound;
pub use orders::Orders;
pub use projects::Projects;
pub use quotes::Quotes;
pub use reports::Reports;
pub use settings::Settings;
