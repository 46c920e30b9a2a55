use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::util::time::now;

/// Metadata for a blob already written to storage
pub struct NewAttachment {
    pub report_id: i32,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub storage_key: String,
}

pub struct AttachmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttachmentRepository<'a, C> {
    /// Creates a new instance of [`AttachmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        attachment: NewAttachment,
    ) -> Result<entity::attachment::Model, DbErr> {
        entity::attachment::ActiveModel {
            report_id: ActiveValue::Set(attachment.report_id),
            file_name: ActiveValue::Set(attachment.file_name),
            content_type: ActiveValue::Set(attachment.content_type),
            size_bytes: ActiveValue::Set(attachment.size_bytes),
            storage_key: ActiveValue::Set(attachment.storage_key),
            created_at: ActiveValue::Set(now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::attachment::Model>, DbErr> {
        entity::prelude::Attachment::find_by_id(id).one(self.db).await
    }

    pub async fn list_for_report(
        &self,
        report_id: i32,
    ) -> Result<Vec<entity::attachment::Model>, DbErr> {
        self.list_for_reports(&[report_id]).await
    }

    /// Attachments of several reports in upload order
    pub async fn list_for_reports(
        &self,
        report_ids: &[i32],
    ) -> Result<Vec<entity::attachment::Model>, DbErr> {
        entity::prelude::Attachment::find()
            .filter(entity::attachment::Column::ReportId.is_in(report_ids.iter().copied()))
            .order_by_asc(entity::attachment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete_for_report(&self, report_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Attachment::delete_many()
            .filter(entity::attachment::Column::ReportId.eq(report_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use allevapp_test_utils::prelude::*;
    use entity::prelude::*;

    use super::*;

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(Farm)
            .with_table(Supplier)
            .with_table(AppUser)
            .with_table(Equipment)
            .with_table(Report)
            .with_table(Attachment)
            .with_farm("North Farm")
            .build()
            .await
    }

    /// Expect attachments to be grouped per report
    #[tokio::test]
    async fn lists_attachments_per_report() -> Result<(), TestError> {
        let test = setup().await?;
        let first = test.report().insert_report(1, None).await?;
        let second = test.report().insert_report(1, None).await?;
        test.report().insert_attachment(first.id, "a/photo.jpg").await?;
        test.report().insert_attachment(first.id, "b/photo.jpg").await?;
        test.report().insert_attachment(second.id, "c/photo.jpg").await?;
        let repo = AttachmentRepository::new(&test.db);

        let attachments = repo.list_for_report(first.id).await?;
        let both = repo.list_for_reports(&[first.id, second.id]).await?;

        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0].storage_key, "a/photo.jpg");
        assert_eq!(both.len(), 3);

        Ok(())
    }

    /// Expect Error when attaching to a report that doesn't exist
    #[tokio::test]
    async fn create_fails_for_missing_report() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = AttachmentRepository::new(&test.db);

        let result = repo
            .create(NewAttachment {
                report_id: 7,
                file_name: "photo.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                size_bytes: 4,
                storage_key: "x/photo.jpg".to_string(),
            })
            .await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect only the report's attachments to be deleted
    #[tokio::test]
    async fn deletes_attachments_of_report() -> Result<(), TestError> {
        let test = setup().await?;
        let first = test.report().insert_report(1, None).await?;
        let second = test.report().insert_report(1, None).await?;
        test.report().insert_attachment(first.id, "a/photo.jpg").await?;
        test.report().insert_attachment(second.id, "b/photo.jpg").await?;
        let repo = AttachmentRepository::new(&test.db);

        let result = repo.delete_for_report(first.id).await?;

        assert_eq!(result.rows_affected, 1);
        assert_eq!(repo.list_for_report(second.id).await?.len(), 1);

        Ok(())
    }
}
