use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{filter::Filterable, maintenance::MaintenanceStatus};

string_enum! {
    /// Operational state of a physical asset.
    pub enum AssetStatus {
        Operational => "operational",
        NeedsService => "needs_service",
        OutOfService => "out_of_service",
        Retired => "retired",
    }
}

impl AssetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::NeedsService => "Needs service",
            Self::OutOfService => "Out of service",
            Self::Retired => "Retired",
        }
    }
}

/// Facet keys accepted by the equipment list.
pub const EQUIPMENT_FACETS: &[&str] = &["farm_id", "category", "status", "maintenance_status"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EquipmentDto {
    pub id: i32,
    pub farm_id: i32,
    pub farm_name: Option<String>,
    pub name: String,
    pub category: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub last_maintenance: Option<NaiveDate>,
    pub maintenance_interval_days: Option<i32>,
    /// Computed from the last maintenance date and interval
    pub next_maintenance: Option<NaiveDate>,
    pub maintenance_status: MaintenanceStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Filterable for EquipmentDto {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.category.as_str()];
        fields.extend(
            [
                &self.manufacturer,
                &self.model,
                &self.serial_number,
                &self.farm_name,
            ]
            .into_iter()
            .flatten()
            .map(String::as_str),
        );
        fields
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "farm_id" => Some(self.farm_id.to_string()),
            "category" => Some(self.category.clone()),
            "status" => Some(self.status.to_string()),
            "maintenance_status" => Some(self.maintenance_status.to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EquipmentRequest {
    pub farm_id: i32,
    pub name: String,
    pub category: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub last_maintenance: Option<NaiveDate>,
    pub maintenance_interval_days: Option<i32>,
    pub notes: Option<String>,
}
