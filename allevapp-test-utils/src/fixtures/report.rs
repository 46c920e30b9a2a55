use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn report(&self) -> ReportFixtures<'_> {
        ReportFixtures { test: self }
    }
}

pub struct ReportFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ReportFixtures<'a> {
    /// Insert an open report of medium urgency.
    pub async fn insert_report(
        &self,
        farm_id: i32,
        equipment_id: Option<i32>,
    ) -> Result<entity::report::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Report::insert(entity::report::ActiveModel {
            farm_id: ActiveValue::Set(farm_id),
            equipment_id: ActiveValue::Set(equipment_id),
            title: ActiveValue::Set("Leaking valve".to_string()),
            description: ActiveValue::Set("Water pooling below the feeder".to_string()),
            urgency: ActiveValue::Set("medium".to_string()),
            status: ActiveValue::Set("open".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Insert an attachment row; the blob itself is not written.
    pub async fn insert_attachment(
        &self,
        report_id: i32,
        storage_key: &str,
    ) -> Result<entity::attachment::Model, TestError> {
        Ok(
            entity::prelude::Attachment::insert(entity::attachment::ActiveModel {
                report_id: ActiveValue::Set(report_id),
                file_name: ActiveValue::Set("photo.jpg".to_string()),
                content_type: ActiveValue::Set("image/jpeg".to_string()),
                size_bytes: ActiveValue::Set(4),
                storage_key: ActiveValue::Set(storage_key.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
