use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        facility::{FacilityDto, FacilityRequest},
        maintenance::{scheduled_next_due, MaintenanceStatus},
    },
    server::{
        data::{facility::FacilityRepository, farm::FarmRepository},
        error::Error,
        model::db::FacilityModel,
        service::validate,
        util::time::today,
    },
};

pub fn facility_dto(
    facility: FacilityModel,
    farm_names: &HashMap<i32, String>,
    today: NaiveDate,
) -> Result<FacilityDto, Error> {
    Ok(FacilityDto {
        id: facility.id,
        farm_id: facility.farm_id,
        farm_name: farm_names.get(&facility.farm_id).cloned(),
        status: facility.status.parse()?,
        next_maintenance: scheduled_next_due(
            facility.last_maintenance,
            facility.maintenance_interval_days,
        ),
        maintenance_status: MaintenanceStatus::evaluate(
            facility.last_maintenance,
            facility.maintenance_interval_days,
            today,
        ),
        name: facility.name,
        facility_type: facility.facility_type,
        last_maintenance: facility.last_maintenance,
        maintenance_interval_days: facility.maintenance_interval_days,
        notes: facility.notes,
        created_at: facility.created_at,
        updated_at: facility.updated_at,
    })
}

pub struct FacilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FacilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, farm_id: Option<i32>) -> Result<Vec<FacilityDto>, Error> {
        let farm_names = FarmRepository::new(self.db).name_map().await?;
        let today = today();

        FacilityRepository::new(self.db)
            .list(farm_id)
            .await?
            .into_iter()
            .map(|facility| facility_dto(facility, &farm_names, today))
            .collect()
    }

    pub async fn get(&self, id: i32) -> Result<FacilityDto, Error> {
        let facility = FacilityRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Facility", id))?;

        self.to_dto(facility).await
    }

    pub async fn create(&self, facility: FacilityRequest) -> Result<FacilityDto, Error> {
        let facility = Self::validate(facility)?;
        let created = FacilityRepository::new(self.db).create(facility).await?;

        self.to_dto(created).await
    }

    pub async fn update(&self, id: i32, facility: FacilityRequest) -> Result<FacilityDto, Error> {
        let facility = Self::validate(facility)?;
        let updated = FacilityRepository::new(self.db)
            .update(id, facility)
            .await?
            .ok_or_else(|| Error::not_found("Facility", id))?;

        self.to_dto(updated).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = FacilityRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Facility", id));
        }

        Ok(())
    }

    async fn to_dto(&self, facility: FacilityModel) -> Result<FacilityDto, Error> {
        let farm_names = FarmRepository::new(self.db).name_map().await?;

        facility_dto(facility, &farm_names, today())
    }

    fn validate(facility: FacilityRequest) -> Result<FacilityRequest, Error> {
        validate::interval(facility.maintenance_interval_days)?;

        Ok(FacilityRequest {
            name: validate::required("Facility name", &facility.name)?,
            facility_type: validate::required("Facility type", &facility.facility_type)?,
            notes: validate::optional(facility.notes),
            ..facility
        })
    }
}

#[cfg(test)]
mod tests {
    use allevapp_test_utils::prelude::*;
    use chrono::Days;
    use entity::prelude::*;

    use super::*;
    use crate::model::equipment::AssetStatus;

    fn request(name: &str, last_maintenance: Option<NaiveDate>) -> FacilityRequest {
        FacilityRequest {
            farm_id: 1,
            name: name.to_string(),
            facility_type: "barn".to_string(),
            status: AssetStatus::Operational,
            last_maintenance,
            maintenance_interval_days: Some(90),
            notes: None,
        }
    }

    /// Expect each facility's status to be evaluated against today
    #[tokio::test]
    async fn list_evaluates_status() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(Farm)
            .with_table(Facility)
            .with_farm("North Farm")
            .build()
            .await?;
        let service = FacilityService::new(&test.db);
        let long_ago = today().checked_sub_days(Days::new(120)).unwrap();
        service.create(request("Old Barn", Some(long_ago))).await.unwrap();
        service.create(request("New Barn", Some(today()))).await.unwrap();

        let facilities = service.list(None).await.unwrap();

        let status = |name: &str| {
            facilities
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.maintenance_status)
        };
        assert_eq!(status("Old Barn"), Some(MaintenanceStatus::Overdue));
        assert_eq!(status("New Barn"), Some(MaintenanceStatus::Ok));

        Ok(())
    }

    /// Expect an unknown stored status to surface as an error instead of a default
    #[tokio::test]
    async fn unknown_status_is_an_error() -> Result<(), TestError> {
        use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

        let test = TestBuilder::new()
            .with_table(Farm)
            .with_table(Facility)
            .with_farm("North Farm")
            .build()
            .await?;
        let facility = test
            .asset()
            .insert_facility(1, "Silo", None, None)
            .await?;
        let mut active = facility.into_active_model();
        active.status = ActiveValue::Set("demolished".to_string());
        active.update(&test.db).await?;

        let result = FacilityService::new(&test.db).list(None).await;

        assert!(matches!(result, Err(Error::UnknownVariant(_))));

        Ok(())
    }
}
