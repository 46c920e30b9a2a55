use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::filter::Filterable;

pub const DOCUMENT_FACETS: &[&str] = &["farm_id", "category_id"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DocumentCategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DocumentCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DocumentDto {
    pub id: i32,
    pub farm_id: Option<i32>,
    pub farm_name: Option<String>,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub title: String,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub uploaded_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Filterable for DocumentDto {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.file_name.as_str()];
        fields.extend(
            [&self.farm_name, &self.category_name]
                .into_iter()
                .flatten()
                .map(String::as_str),
        );
        fields
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "farm_id" => self.farm_id.map(|id| id.to_string()),
            "category_id" => self.category_id.map(|id| id.to_string()),
            _ => None,
        }
    }
}

/// Metadata update for an uploaded document; the file itself is immutable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DocumentUpdateRequest {
    pub title: String,
    pub farm_id: Option<i32>,
    pub category_id: Option<i32>,
}
