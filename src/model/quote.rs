use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::filter::Filterable;

string_enum! {
    pub enum QuoteStatus {
        Draft => "draft",
        Sent => "sent",
        Received => "received",
        Accepted => "accepted",
        Rejected => "rejected",
    }
}

impl QuoteStatus {
    /// Quotes still awaiting a decision.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Draft | Self::Sent | Self::Received)
    }
}

pub const QUOTE_FACETS: &[&str] = &["farm_id", "supplier_id", "project_id", "status"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct QuoteDto {
    pub id: i32,
    pub supplier_id: i32,
    pub supplier_name: Option<String>,
    pub farm_id: i32,
    pub farm_name: Option<String>,
    pub project_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub amount_minor: Option<i64>,
    pub currency: String,
    pub status: QuoteStatus,
    pub valid_until: Option<NaiveDate>,
    pub sent_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Filterable for QuoteDto {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(
            [&self.description, &self.supplier_name, &self.farm_name]
                .into_iter()
                .flatten()
                .map(String::as_str),
        );
        fields
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "farm_id" => Some(self.farm_id.to_string()),
            "supplier_id" => Some(self.supplier_id.to_string()),
            "project_id" => self.project_id.map(|id| id.to_string()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct QuoteRequest {
    pub supplier_id: i32,
    pub farm_id: i32,
    pub project_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub amount_minor: Option<i64>,
    pub currency: String,
    pub status: QuoteStatus,
    pub valid_until: Option<NaiveDate>,
}
