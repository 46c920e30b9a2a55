use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn document(&self) -> DocumentFixtures<'_> {
        DocumentFixtures { test: self }
    }
}

pub struct DocumentFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> DocumentFixtures<'a> {
    pub async fn insert_category(
        &self,
        name: &str,
    ) -> Result<entity::document_category::Model, TestError> {
        Ok(entity::prelude::DocumentCategory::insert(
            entity::document_category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Insert a document row; the blob itself is not written.
    pub async fn insert_document(
        &self,
        farm_id: Option<i32>,
        category_id: Option<i32>,
        storage_key: &str,
    ) -> Result<entity::document::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Document::insert(entity::document::ActiveModel {
                farm_id: ActiveValue::Set(farm_id),
                category_id: ActiveValue::Set(category_id),
                title: ActiveValue::Set("Feed certificate".to_string()),
                file_name: ActiveValue::Set("certificate.pdf".to_string()),
                content_type: ActiveValue::Set("application/pdf".to_string()),
                size_bytes: ActiveValue::Set(4),
                storage_key: ActiveValue::Set(storage_key.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
