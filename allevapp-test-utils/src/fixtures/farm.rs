use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn farm(&self) -> FarmFixtures<'_> {
        FarmFixtures { test: self }
    }
}

pub struct FarmFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> FarmFixtures<'a> {
    pub async fn insert_farm(&self, name: &str) -> Result<entity::farm::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Farm::insert(entity::farm::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Insert a farm with full letterhead details.
    pub async fn insert_company_farm(
        &self,
        name: &str,
        company_name: &str,
    ) -> Result<entity::farm::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Farm::insert(entity::farm::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            location: ActiveValue::Set(Some("Jæren".to_string())),
            company_name: ActiveValue::Set(Some(company_name.to_string())),
            address: ActiveValue::Set(Some("Gardsvegen 1, 4340 Bryne".to_string())),
            phone: ActiveValue::Set(Some("+47 51 00 00 00".to_string())),
            email: ActiveValue::Set(Some("post@example.no".to_string())),
            org_number: ActiveValue::Set(Some("912 345 678".to_string())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }
}
