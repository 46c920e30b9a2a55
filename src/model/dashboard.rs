use serde::{Deserialize, Serialize};

/// Summary counts shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardDto {
    pub farms: u64,
    pub equipment: u64,
    pub facilities: u64,
    /// Reports that are open or in progress
    pub open_reports: u64,
    pub overdue_maintenance: u64,
    pub due_soon_maintenance: u64,
    /// Quotes in draft, sent or received state
    pub pending_quotes: u64,
}
