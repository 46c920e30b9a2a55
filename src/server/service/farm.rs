use sea_orm::DatabaseConnection;

use crate::{
    model::farm::{FarmDto, FarmRequest},
    server::{
        data::farm::FarmRepository, error::Error, model::db::FarmModel, service::validate,
    },
};

impl From<FarmModel> for FarmDto {
    fn from(farm: FarmModel) -> Self {
        Self {
            id: farm.id,
            name: farm.name,
            location: farm.location,
            company_name: farm.company_name,
            address: farm.address,
            phone: farm.phone,
            email: farm.email,
            org_number: farm.org_number,
            notes: farm.notes,
            created_at: farm.created_at,
            updated_at: farm.updated_at,
        }
    }
}

pub struct FarmService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FarmService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<FarmDto>, Error> {
        let farms = FarmRepository::new(self.db).list().await?;

        Ok(farms.into_iter().map(FarmDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<FarmDto, Error> {
        FarmRepository::new(self.db)
            .get(id)
            .await?
            .map(FarmDto::from)
            .ok_or_else(|| Error::not_found("Farm", id))
    }

    pub async fn create(&self, farm: FarmRequest) -> Result<FarmDto, Error> {
        let farm = Self::validate(farm)?;

        Ok(FarmRepository::new(self.db).create(farm).await?.into())
    }

    pub async fn update(&self, id: i32, farm: FarmRequest) -> Result<FarmDto, Error> {
        let farm = Self::validate(farm)?;

        FarmRepository::new(self.db)
            .update(id, farm)
            .await?
            .map(FarmDto::from)
            .ok_or_else(|| Error::not_found("Farm", id))
    }

    /// Deletes a farm; fails with a conflict while assets or records still reference it
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = FarmRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Farm", id));
        }

        Ok(())
    }

    fn validate(farm: FarmRequest) -> Result<FarmRequest, Error> {
        Ok(FarmRequest {
            name: validate::required("Farm name", &farm.name)?,
            location: validate::optional(farm.location),
            company_name: validate::optional(farm.company_name),
            address: validate::optional(farm.address),
            phone: validate::optional(farm.phone),
            email: validate::optional(farm.email),
            org_number: validate::optional(farm.org_number),
            notes: validate::optional(farm.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use allevapp_test_utils::prelude::*;
    use entity::prelude::*;

    use super::*;
    use crate::server::error::domain::DomainError;

    /// Expect names to be trimmed and blank optional fields dropped
    #[tokio::test]
    async fn create_normalises_input() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(Farm).build().await?;
        let service = FarmService::new(&test.db);

        let farm = service
            .create(FarmRequest {
                name: "  North Farm ".to_string(),
                company_name: Some("  ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(farm.name, "North Farm");
        assert_eq!(farm.company_name, None);

        Ok(())
    }

    /// Expect a validation error for a blank name
    #[tokio::test]
    async fn create_rejects_blank_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(Farm).build().await?;
        let service = FarmService::new(&test.db);

        let result = service.create(FarmRequest::default()).await;

        assert!(matches!(
            result,
            Err(Error::DomainError(DomainError::Validation(_)))
        ));

        Ok(())
    }

    /// Expect NotFound when getting or deleting a missing farm
    #[tokio::test]
    async fn missing_farm_is_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(Farm).build().await?;
        let service = FarmService::new(&test.db);

        assert!(matches!(
            service.get(5).await,
            Err(Error::DomainError(DomainError::NotFound { .. }))
        ));
        assert!(matches!(
            service.delete(5).await,
            Err(Error::DomainError(DomainError::NotFound { .. }))
        ));

        Ok(())
    }

    /// Expect deleting a farm that still owns equipment to fail on the foreign key
    #[tokio::test]
    async fn delete_fails_while_referenced() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(Farm)
            .with_table(Equipment)
            .with_farm("North Farm")
            .build()
            .await?;
        test.asset()
            .insert_equipment(1, "Tractor", None, None)
            .await?;
        let service = FarmService::new(&test.db);

        let result = service.delete(1).await;

        assert!(matches!(result, Err(Error::DbErr(_))));

        Ok(())
    }
}
