use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{equipment::AssetStatus, filter::Filterable, maintenance::MaintenanceStatus};

pub const FACILITY_FACETS: &[&str] = &["farm_id", "facility_type", "status", "maintenance_status"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FacilityDto {
    pub id: i32,
    pub farm_id: i32,
    pub farm_name: Option<String>,
    pub name: String,
    /// Free-form type such as barn, silo or milking parlour
    pub facility_type: String,
    pub status: AssetStatus,
    pub last_maintenance: Option<NaiveDate>,
    pub maintenance_interval_days: Option<i32>,
    pub next_maintenance: Option<NaiveDate>,
    pub maintenance_status: MaintenanceStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Filterable for FacilityDto {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.facility_type.as_str()];
        if let Some(farm_name) = &self.farm_name {
            fields.push(farm_name);
        }
        if let Some(notes) = &self.notes {
            fields.push(notes);
        }
        fields
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "farm_id" => Some(self.farm_id.to_string()),
            "facility_type" => Some(self.facility_type.clone()),
            "status" => Some(self.status.to_string()),
            "maintenance_status" => Some(self.maintenance_status.to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FacilityRequest {
    pub farm_id: i32,
    pub name: String,
    pub facility_type: String,
    pub status: AssetStatus,
    pub last_maintenance: Option<NaiveDate>,
    pub maintenance_interval_days: Option<i32>,
    pub notes: Option<String>,
}
