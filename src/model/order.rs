use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::filter::Filterable;

pub const ORDER_FACETS: &[&str] = &["farm_id", "supplier_id"];

/// An order confirmation issued against an accepted quote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OrderDto {
    pub id: i32,
    pub quote_id: i32,
    pub quote_title: Option<String>,
    pub farm_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub supplier_name: Option<String>,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub delivery_address: Option<String>,
    pub total_amount_minor: i64,
    pub currency: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Filterable for OrderDto {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.order_number.as_str()];
        fields.extend(
            [&self.quote_title, &self.supplier_name, &self.notes]
                .into_iter()
                .flatten()
                .map(String::as_str),
        );
        fields
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "farm_id" => self.farm_id.map(|id| id.to_string()),
            "supplier_id" => self.supplier_id.map(|id| id.to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OrderRequest {
    pub quote_id: i32,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub delivery_address: Option<String>,
    pub total_amount_minor: i64,
    pub currency: String,
    pub notes: Option<String>,
}

/// Formats an amount in minor units as `1 234.50 NOK`.
pub fn format_amount(amount_minor: i64, currency: &str) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();
    let major = (abs / 100).to_string();
    let minor = abs % 100;

    let mut grouped = String::with_capacity(major.len() + major.len() / 3);
    for (i, digit) in major.chars().enumerate() {
        if i > 0 && (major.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    format!("{}{}.{:02} {}", sign, grouped, minor, currency)
}
