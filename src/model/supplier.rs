use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::filter::Filterable;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SupplierDto {
    pub id: i32,
    pub name: String,
    pub contact_person: Option<String>,
    /// Address quote requests are sent to
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Filterable for SupplierDto {
    fn search_text(&self) -> Vec<&str> {
        [Some(&self.name), self.contact_person.as_ref(), self.email.as_ref()]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    fn facet(&self, _key: &str) -> Option<String> {
        None
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SupplierRequest {
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}
