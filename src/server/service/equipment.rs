use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        equipment::{EquipmentDto, EquipmentRequest},
        maintenance::{scheduled_next_due, MaintenanceStatus},
    },
    server::{
        data::{equipment::EquipmentRepository, farm::FarmRepository},
        error::Error,
        model::db::EquipmentModel,
        service::validate,
        util::time::today,
    },
};

/// Maps a stored row to its DTO, computing the maintenance schedule relative to `today`
pub fn equipment_dto(
    equipment: EquipmentModel,
    farm_names: &HashMap<i32, String>,
    today: NaiveDate,
) -> Result<EquipmentDto, Error> {
    Ok(EquipmentDto {
        id: equipment.id,
        farm_id: equipment.farm_id,
        farm_name: farm_names.get(&equipment.farm_id).cloned(),
        status: equipment.status.parse()?,
        next_maintenance: scheduled_next_due(
            equipment.last_maintenance,
            equipment.maintenance_interval_days,
        ),
        maintenance_status: MaintenanceStatus::evaluate(
            equipment.last_maintenance,
            equipment.maintenance_interval_days,
            today,
        ),
        name: equipment.name,
        category: equipment.category,
        manufacturer: equipment.manufacturer,
        model: equipment.model,
        serial_number: equipment.serial_number,
        last_maintenance: equipment.last_maintenance,
        maintenance_interval_days: equipment.maintenance_interval_days,
        notes: equipment.notes,
        created_at: equipment.created_at,
        updated_at: equipment.updated_at,
    })
}

pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists equipment, optionally limited to one farm
    pub async fn list(&self, farm_id: Option<i32>) -> Result<Vec<EquipmentDto>, Error> {
        let farm_names = FarmRepository::new(self.db).name_map().await?;
        let today = today();

        EquipmentRepository::new(self.db)
            .list(farm_id)
            .await?
            .into_iter()
            .map(|equipment| equipment_dto(equipment, &farm_names, today))
            .collect()
    }

    pub async fn get(&self, id: i32) -> Result<EquipmentDto, Error> {
        let equipment = EquipmentRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Equipment", id))?;

        self.to_dto(equipment).await
    }

    pub async fn create(&self, equipment: EquipmentRequest) -> Result<EquipmentDto, Error> {
        let equipment = Self::validate(equipment)?;
        let created = EquipmentRepository::new(self.db).create(equipment).await?;

        self.to_dto(created).await
    }

    pub async fn update(
        &self,
        id: i32,
        equipment: EquipmentRequest,
    ) -> Result<EquipmentDto, Error> {
        let equipment = Self::validate(equipment)?;
        let updated = EquipmentRepository::new(self.db)
            .update(id, equipment)
            .await?
            .ok_or_else(|| Error::not_found("Equipment", id))?;

        self.to_dto(updated).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = EquipmentRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Equipment", id));
        }

        Ok(())
    }

    async fn to_dto(&self, equipment: EquipmentModel) -> Result<EquipmentDto, Error> {
        let farm_names = FarmRepository::new(self.db).name_map().await?;

        equipment_dto(equipment, &farm_names, today())
    }

    fn validate(equipment: EquipmentRequest) -> Result<EquipmentRequest, Error> {
        validate::interval(equipment.maintenance_interval_days)?;

        Ok(EquipmentRequest {
            name: validate::required("Equipment name", &equipment.name)?,
            category: validate::required("Category", &equipment.category)?,
            manufacturer: validate::optional(equipment.manufacturer),
            model: validate::optional(equipment.model),
            serial_number: validate::optional(equipment.serial_number),
            notes: validate::optional(equipment.notes),
            ..equipment
        })
    }
}

#[cfg(test)]
mod tests {
    use allevapp_test_utils::prelude::*;
    use chrono::Days;
    use entity::prelude::*;

    use super::*;
    use crate::{
        model::equipment::AssetStatus,
        server::error::domain::DomainError,
    };

    fn request(last_maintenance: Option<NaiveDate>, interval: Option<i32>) -> EquipmentRequest {
        EquipmentRequest {
            farm_id: 1,
            name: "Milking Robot".to_string(),
            category: "milking".to_string(),
            manufacturer: Some("Lely".to_string()),
            model: None,
            serial_number: None,
            status: AssetStatus::Operational,
            last_maintenance,
            maintenance_interval_days: interval,
            notes: None,
        }
    }

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(Farm)
            .with_table(Equipment)
            .with_farm("North Farm")
            .build()
            .await
    }

    /// Expect the DTO to carry the farm name and the computed schedule
    #[tokio::test]
    async fn create_computes_maintenance() -> Result<(), TestError> {
        let test = setup().await?;
        let service = EquipmentService::new(&test.db);
        let last = today().checked_sub_days(Days::new(28)).unwrap();

        let equipment = service.create(request(Some(last), Some(30))).await.unwrap();

        assert_eq!(equipment.farm_name.as_deref(), Some("North Farm"));
        assert_eq!(
            equipment.next_maintenance,
            last.checked_add_days(Days::new(30))
        );
        assert_eq!(equipment.maintenance_status, MaintenanceStatus::DueSoon);

        Ok(())
    }

    /// Expect equipment without a schedule to be unscheduled
    #[tokio::test]
    async fn unscheduled_without_interval() -> Result<(), TestError> {
        let test = setup().await?;
        let service = EquipmentService::new(&test.db);

        let equipment = service.create(request(Some(today()), None)).await.unwrap();

        assert_eq!(equipment.next_maintenance, None);
        assert_eq!(
            equipment.maintenance_status,
            MaintenanceStatus::Unscheduled
        );

        Ok(())
    }

    /// Expect a zero-day interval to be rejected
    #[tokio::test]
    async fn rejects_zero_interval() -> Result<(), TestError> {
        let test = setup().await?;
        let service = EquipmentService::new(&test.db);

        let result = service.create(request(Some(today()), Some(0))).await;

        assert!(matches!(
            result,
            Err(Error::DomainError(DomainError::Validation(_)))
        ));

        Ok(())
    }

    /// Expect NotFound when updating missing equipment
    #[tokio::test]
    async fn update_missing_is_not_found() -> Result<(), TestError> {
        let test = setup().await?;
        let service = EquipmentService::new(&test.db);

        let result = service.update(9, request(None, None)).await;

        assert!(matches!(
            result,
            Err(Error::DomainError(DomainError::NotFound { .. }))
        ));

        Ok(())
    }
}
