use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::report::{ReportRequest, ReportStatus},
    server::util::time::now,
};

pub struct ReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReportRepository<'a, C> {
    /// Creates a new instance of [`ReportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a report filed by the given user
    pub async fn create(
        &self,
        report: ReportRequest,
        reported_by: Option<i32>,
    ) -> Result<entity::report::Model, DbErr> {
        let now = now();

        entity::report::ActiveModel {
            farm_id: ActiveValue::Set(report.farm_id),
            equipment_id: ActiveValue::Set(report.equipment_id),
            supplier_id: ActiveValue::Set(report.supplier_id),
            title: ActiveValue::Set(report.title),
            description: ActiveValue::Set(report.description),
            urgency: ActiveValue::Set(report.urgency.as_str().to_string()),
            status: ActiveValue::Set(report.status.as_str().to_string()),
            reported_by: ActiveValue::Set(reported_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::report::Model>, DbErr> {
        entity::prelude::Report::find_by_id(id).one(self.db).await
    }

    /// Reports, newest first
    pub async fn list(&self) -> Result<Vec<entity::report::Model>, DbErr> {
        entity::prelude::Report::find()
            .order_by_desc(entity::report::Column::CreatedAt)
            .order_by_desc(entity::report::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of reports in one of the given statuses
    pub async fn count_with_status(&self, statuses: &[ReportStatus]) -> Result<u64, DbErr> {
        entity::prelude::Report::find()
            .filter(
                entity::report::Column::Status
                    .is_in(statuses.iter().map(|status| status.as_str())),
            )
            .count(self.db)
            .await
    }

    /// Updates a report, keeping who filed it. Returns `None` when it doesn't exist
    pub async fn update(
        &self,
        id: i32,
        report: ReportRequest,
    ) -> Result<Option<entity::report::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.farm_id = ActiveValue::Set(report.farm_id);
        active.equipment_id = ActiveValue::Set(report.equipment_id);
        active.supplier_id = ActiveValue::Set(report.supplier_id);
        active.title = ActiveValue::Set(report.title);
        active.description = ActiveValue::Set(report.description);
        active.urgency = ActiveValue::Set(report.urgency.as_str().to_string());
        active.status = ActiveValue::Set(report.status.as_str().to_string());
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Report::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use allevapp_test_utils::prelude::*;
    use entity::prelude::*;

    use super::*;
    use crate::model::report::ReportUrgency;

    fn request(status: ReportStatus) -> ReportRequest {
        ReportRequest {
            farm_id: 1,
            equipment_id: None,
            supplier_id: None,
            title: "Broken gate".to_string(),
            description: "The east gate hinge snapped".to_string(),
            urgency: ReportUrgency::High,
            status,
        }
    }

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(Farm)
            .with_table(Supplier)
            .with_table(AppUser)
            .with_table(Equipment)
            .with_table(Report)
            .with_farm("North Farm")
            .build()
            .await
    }

    /// Expect only open and in-progress reports to be counted as open
    #[tokio::test]
    async fn counts_reports_by_status() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = ReportRepository::new(&test.db);
        repo.create(request(ReportStatus::Open), None).await?;
        repo.create(request(ReportStatus::InProgress), None).await?;
        repo.create(request(ReportStatus::Closed), None).await?;

        let open = repo
            .count_with_status(&[ReportStatus::Open, ReportStatus::InProgress])
            .await?;

        assert_eq!(open, 2);

        Ok(())
    }

    /// Expect the reporter to be preserved across updates
    #[tokio::test]
    async fn update_keeps_reporter() -> Result<(), TestError> {
        let test = setup().await?;
        let user = test.user().insert_user("kari", "member").await?;
        let repo = ReportRepository::new(&test.db);
        let report = repo.create(request(ReportStatus::Open), Some(user.id)).await?;

        let updated = repo
            .update(report.id, request(ReportStatus::Resolved))
            .await?
            .unwrap();

        assert_eq!(updated.status, "resolved");
        assert_eq!(updated.reported_by, Some(user.id));

        Ok(())
    }

    /// Expect None when updating a report that doesn't exist
    #[tokio::test]
    async fn update_returns_none_for_missing() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = ReportRepository::new(&test.db);

        let result = repo.update(42, request(ReportStatus::Open)).await?;

        assert!(result.is_none());

        Ok(())
    }
}
