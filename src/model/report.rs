use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::filter::Filterable;

string_enum! {
    pub enum ReportUrgency {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

string_enum! {
    pub enum ReportStatus {
        Open => "open",
        InProgress => "in_progress",
        Resolved => "resolved",
        Closed => "closed",
    }
}

impl ReportStatus {
    /// Open and in-progress reports still need work.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }
}

pub const REPORT_FACETS: &[&str] = &["farm_id", "equipment_id", "urgency", "status"];

/// A file uploaded alongside a report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AttachmentDto {
    pub id: i32,
    pub report_id: i32,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReportDto {
    pub id: i32,
    pub farm_id: i32,
    pub farm_name: Option<String>,
    pub equipment_id: Option<i32>,
    pub equipment_name: Option<String>,
    pub supplier_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub urgency: ReportUrgency,
    pub status: ReportStatus,
    pub reported_by: Option<i32>,
    pub attachments: Vec<AttachmentDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Filterable for ReportDto {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(
            [&self.farm_name, &self.equipment_name]
                .into_iter()
                .flatten()
                .map(String::as_str),
        );
        fields
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "farm_id" => Some(self.farm_id.to_string()),
            "equipment_id" => self.equipment_id.map(|id| id.to_string()),
            "urgency" => Some(self.urgency.to_string()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReportRequest {
    pub farm_id: i32,
    pub equipment_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub urgency: ReportUrgency,
    pub status: ReportStatus,
}
