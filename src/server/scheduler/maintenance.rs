//! Daily maintenance reminders.
//!
//! Equipment and facilities that are overdue or due soon get a calendar event through the
//! `create-calendar-event` function. Each asset's reminded due date is recorded, so an asset
//! is reminded once per due date no matter how often the job runs.

use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error,
    service::maintenance::MaintenanceService,
    util::{functions::FunctionsClient, time::today},
};

/// Creates calendar reminders for assets that need maintenance and haven't been reminded yet
///
/// # Returns
/// - `Ok(usize)` - Number of reminders created; failed reminders are logged and retried on
///   the next run
/// - `Err(Error)` - Failed to load assets or record a reminder
pub async fn send_maintenance_reminders(
    db: DatabaseConnection,
    functions: FunctionsClient,
) -> Result<usize, Error> {
    MaintenanceService::new(&db)
        .send_due_reminders(&functions, today())
        .await
}
