use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn asset(&self) -> AssetFixtures<'_> {
        AssetFixtures { test: self }
    }
}

pub struct AssetFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> AssetFixtures<'a> {
    /// Insert operational equipment with an optional maintenance schedule.
    pub async fn insert_equipment(
        &self,
        farm_id: i32,
        name: &str,
        last_maintenance: Option<NaiveDate>,
        interval_days: Option<i32>,
    ) -> Result<entity::equipment::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Equipment::insert(entity::equipment::ActiveModel {
                farm_id: ActiveValue::Set(farm_id),
                name: ActiveValue::Set(name.to_string()),
                category: ActiveValue::Set("milking".to_string()),
                status: ActiveValue::Set("operational".to_string()),
                last_maintenance: ActiveValue::Set(last_maintenance),
                maintenance_interval_days: ActiveValue::Set(interval_days),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert an operational facility with an optional maintenance schedule.
    pub async fn insert_facility(
        &self,
        farm_id: i32,
        name: &str,
        last_maintenance: Option<NaiveDate>,
        interval_days: Option<i32>,
    ) -> Result<entity::facility::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Facility::insert(entity::facility::ActiveModel {
                farm_id: ActiveValue::Set(farm_id),
                name: ActiveValue::Set(name.to_string()),
                facility_type: ActiveValue::Set("barn".to_string()),
                status: ActiveValue::Set("operational".to_string()),
                last_maintenance: ActiveValue::Set(last_maintenance),
                maintenance_interval_days: ActiveValue::Set(interval_days),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
