use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::equipment::EquipmentRequest, server::util::time::now};

pub struct EquipmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentRepository<'a, C> {
    /// Creates a new instance of [`EquipmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        equipment: EquipmentRequest,
    ) -> Result<entity::equipment::Model, DbErr> {
        let now = now();

        entity::equipment::ActiveModel {
            farm_id: ActiveValue::Set(equipment.farm_id),
            name: ActiveValue::Set(equipment.name),
            category: ActiveValue::Set(equipment.category),
            manufacturer: ActiveValue::Set(equipment.manufacturer),
            model: ActiveValue::Set(equipment.model),
            serial_number: ActiveValue::Set(equipment.serial_number),
            status: ActiveValue::Set(equipment.status.as_str().to_string()),
            last_maintenance: ActiveValue::Set(equipment.last_maintenance),
            maintenance_interval_days: ActiveValue::Set(equipment.maintenance_interval_days),
            reminder_due_date: ActiveValue::Set(None),
            notes: ActiveValue::Set(equipment.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::equipment::Model>, DbErr> {
        entity::prelude::Equipment::find_by_id(id).one(self.db).await
    }

    /// Equipment ordered by name, optionally limited to one farm
    pub async fn list(&self, farm_id: Option<i32>) -> Result<Vec<entity::equipment::Model>, DbErr> {
        let mut query = entity::prelude::Equipment::find();
        if let Some(farm_id) = farm_id {
            query = query.filter(entity::equipment::Column::FarmId.eq(farm_id));
        }

        query
            .order_by_asc(entity::equipment::Column::Name)
            .all(self.db)
            .await
    }

    /// Equipment with both a last maintenance date and an interval
    pub async fn list_scheduled(&self) -> Result<Vec<entity::equipment::Model>, DbErr> {
        entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::LastMaintenance.is_not_null())
            .filter(entity::equipment::Column::MaintenanceIntervalDays.is_not_null())
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Equipment::find().count(self.db).await
    }

    /// Updates equipment, returning `None` when it doesn't exist
    ///
    /// A changed schedule clears the recorded reminder so a new one is sent.
    pub async fn update(
        &self,
        id: i32,
        equipment: EquipmentRequest,
    ) -> Result<Option<entity::equipment::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let schedule_changed = existing.last_maintenance != equipment.last_maintenance
            || existing.maintenance_interval_days != equipment.maintenance_interval_days;

        let mut active = existing.into_active_model();
        active.farm_id = ActiveValue::Set(equipment.farm_id);
        active.name = ActiveValue::Set(equipment.name);
        active.category = ActiveValue::Set(equipment.category);
        active.manufacturer = ActiveValue::Set(equipment.manufacturer);
        active.model = ActiveValue::Set(equipment.model);
        active.serial_number = ActiveValue::Set(equipment.serial_number);
        active.status = ActiveValue::Set(equipment.status.as_str().to_string());
        active.last_maintenance = ActiveValue::Set(equipment.last_maintenance);
        active.maintenance_interval_days = ActiveValue::Set(equipment.maintenance_interval_days);
        active.notes = ActiveValue::Set(equipment.notes);
        if schedule_changed {
            active.reminder_due_date = ActiveValue::Set(None);
        }
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Records the due date a maintenance reminder was sent for
    pub async fn set_reminder_due_date(&self, id: i32, due: NaiveDate) -> Result<(), DbErr> {
        entity::prelude::Equipment::update_many()
            .col_expr(
                entity::equipment::Column::ReminderDueDate,
                sea_orm::sea_query::Expr::value(due),
            )
            .filter(entity::equipment::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes equipment
    ///
    /// Returns OK regardless of the equipment existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Equipment::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
