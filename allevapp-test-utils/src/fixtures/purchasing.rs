//! Suppliers, projects, quotes and order confirmations.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn purchasing(&self) -> PurchasingFixtures<'_> {
        PurchasingFixtures { test: self }
    }
}

pub struct PurchasingFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> PurchasingFixtures<'a> {
    pub async fn insert_supplier(
        &self,
        name: &str,
        email: Option<&str>,
    ) -> Result<entity::supplier::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Supplier::insert(entity::supplier::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                contact_person: ActiveValue::Set(Some("Kari Nordmann".to_string())),
                email: ActiveValue::Set(email.map(str::to_string)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_project(
        &self,
        farm_id: i32,
        name: &str,
    ) -> Result<entity::project::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Project::insert(entity::project::ActiveModel {
                farm_id: ActiveValue::Set(farm_id),
                name: ActiveValue::Set(name.to_string()),
                status: ActiveValue::Set("planned".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a 12 500.00 NOK quote with the given status.
    pub async fn insert_quote(
        &self,
        supplier_id: i32,
        farm_id: i32,
        status: &str,
    ) -> Result<entity::quote::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Quote::insert(entity::quote::ActiveModel {
            supplier_id: ActiveValue::Set(supplier_id),
            farm_id: ActiveValue::Set(farm_id),
            title: ActiveValue::Set("Replacement milking cups".to_string()),
            description: ActiveValue::Set(Some("Set of 4 liners".to_string())),
            amount_minor: ActiveValue::Set(Some(1_250_000)),
            currency: ActiveValue::Set("NOK".to_string()),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_order(
        &self,
        quote_id: i32,
        order_number: &str,
    ) -> Result<entity::order_confirmation::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::OrderConfirmation::insert(
            entity::order_confirmation::ActiveModel {
                quote_id: ActiveValue::Set(quote_id),
                order_number: ActiveValue::Set(order_number.to_string()),
                order_date: ActiveValue::Set(
                    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap_or_default(),
                ),
                total_amount_minor: ActiveValue::Set(1_250_000),
                currency: ActiveValue::Set("NOK".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }
}
