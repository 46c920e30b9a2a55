use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::facility::FacilityRequest, server::util::time::now};

pub struct FacilityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FacilityRepository<'a, C> {
    /// Creates a new instance of [`FacilityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        facility: FacilityRequest,
    ) -> Result<entity::facility::Model, DbErr> {
        let now = now();

        entity::facility::ActiveModel {
            farm_id: ActiveValue::Set(facility.farm_id),
            name: ActiveValue::Set(facility.name),
            facility_type: ActiveValue::Set(facility.facility_type),
            status: ActiveValue::Set(facility.status.as_str().to_string()),
            last_maintenance: ActiveValue::Set(facility.last_maintenance),
            maintenance_interval_days: ActiveValue::Set(facility.maintenance_interval_days),
            reminder_due_date: ActiveValue::Set(None),
            notes: ActiveValue::Set(facility.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::facility::Model>, DbErr> {
        entity::prelude::Facility::find_by_id(id).one(self.db).await
    }

    pub async fn list(&self, farm_id: Option<i32>) -> Result<Vec<entity::facility::Model>, DbErr> {
        let mut query = entity::prelude::Facility::find();
        if let Some(farm_id) = farm_id {
            query = query.filter(entity::facility::Column::FarmId.eq(farm_id));
        }

        query
            .order_by_asc(entity::facility::Column::Name)
            .all(self.db)
            .await
    }

    /// Facilities with both a last maintenance date and an interval
    pub async fn list_scheduled(&self) -> Result<Vec<entity::facility::Model>, DbErr> {
        entity::prelude::Facility::find()
            .filter(entity::facility::Column::LastMaintenance.is_not_null())
            .filter(entity::facility::Column::MaintenanceIntervalDays.is_not_null())
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Facility::find().count(self.db).await
    }

    /// Updates a facility, returning `None` when it doesn't exist
    ///
    /// A changed schedule clears the recorded reminder so a new one is sent.
    pub async fn update(
        &self,
        id: i32,
        facility: FacilityRequest,
    ) -> Result<Option<entity::facility::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let schedule_changed = existing.last_maintenance != facility.last_maintenance
            || existing.maintenance_interval_days != facility.maintenance_interval_days;

        let mut active = existing.into_active_model();
        active.farm_id = ActiveValue::Set(facility.farm_id);
        active.name = ActiveValue::Set(facility.name);
        active.facility_type = ActiveValue::Set(facility.facility_type);
        active.status = ActiveValue::Set(facility.status.as_str().to_string());
        active.last_maintenance = ActiveValue::Set(facility.last_maintenance);
        active.maintenance_interval_days = ActiveValue::Set(facility.maintenance_interval_days);
        active.notes = ActiveValue::Set(facility.notes);
        if schedule_changed {
            active.reminder_due_date = ActiveValue::Set(None);
        }
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Records the due date a maintenance reminder was sent for
    pub async fn set_reminder_due_date(&self, id: i32, due: NaiveDate) -> Result<(), DbErr> {
        entity::prelude::Facility::update_many()
            .col_expr(
                entity::facility::Column::ReminderDueDate,
                sea_orm::sea_query::Expr::value(due),
            )
            .filter(entity::facility::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Facility::delete_by_id(id).exec(self.db).await
    }
}
