use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::filter::Filterable;

string_enum! {
    pub enum ProjectStatus {
        Planned => "planned",
        Active => "active",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

pub const PROJECT_FACETS: &[&str] = &["farm_id", "status"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProjectDto {
    pub id: i32,
    pub farm_id: i32,
    pub farm_name: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Budget in minor currency units
    pub budget_minor: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Filterable for ProjectDto {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(
            [&self.description, &self.farm_name]
                .into_iter()
                .flatten()
                .map(String::as_str),
        );
        fields
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "farm_id" => Some(self.farm_id.to_string()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProjectRequest {
    pub farm_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget_minor: Option<i64>,
}
