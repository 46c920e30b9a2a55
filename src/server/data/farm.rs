use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryOrder,
};

use crate::{model::farm::FarmRequest, server::util::time::now};

pub struct FarmRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FarmRepository<'a, C> {
    /// Creates a new instance of [`FarmRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, farm: FarmRequest) -> Result<entity::farm::Model, DbErr> {
        let now = now();

        entity::farm::ActiveModel {
            name: ActiveValue::Set(farm.name),
            location: ActiveValue::Set(farm.location),
            company_name: ActiveValue::Set(farm.company_name),
            address: ActiveValue::Set(farm.address),
            phone: ActiveValue::Set(farm.phone),
            email: ActiveValue::Set(farm.email),
            org_number: ActiveValue::Set(farm.org_number),
            notes: ActiveValue::Set(farm.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::farm::Model>, DbErr> {
        entity::prelude::Farm::find_by_id(id).one(self.db).await
    }

    /// All farms ordered by name
    pub async fn list(&self) -> Result<Vec<entity::farm::Model>, DbErr> {
        entity::prelude::Farm::find()
            .order_by_asc(entity::farm::Column::Name)
            .all(self.db)
            .await
    }

    /// Map of farm ID to farm name, used to decorate DTOs of child records
    pub async fn name_map(&self) -> Result<HashMap<i32, String>, DbErr> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|farm| (farm.id, farm.name))
            .collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Farm::find().count(self.db).await
    }

    /// Updates a farm, returning `None` when it doesn't exist
    pub async fn update(
        &self,
        id: i32,
        farm: FarmRequest,
    ) -> Result<Option<entity::farm::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(farm.name);
        active.location = ActiveValue::Set(farm.location);
        active.company_name = ActiveValue::Set(farm.company_name);
        active.address = ActiveValue::Set(farm.address);
        active.phone = ActiveValue::Set(farm.phone);
        active.email = ActiveValue::Set(farm.email);
        active.org_number = ActiveValue::Set(farm.org_number);
        active.notes = ActiveValue::Set(farm.notes);
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a farm
    ///
    /// Returns OK regardless of the farm existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Farm::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use allevapp_test_utils::prelude::*;
    use entity::prelude::*;

    use super::*;

    fn request(name: &str) -> FarmRequest {
        FarmRequest {
            name: name.to_string(),
            ..Default::default()
        }
    }

    mod create {
        use super::*;

        /// Expect success when creating a farm
        #[tokio::test]
        async fn creates_farm() -> Result<(), TestError> {
            let test = TestBuilder::new().with_table(Farm).build().await?;
            let repo = FarmRepository::new(&test.db);

            let farm = repo.create(request("North Farm")).await?;

            assert_eq!(farm.name, "North Farm");
            assert_eq!(repo.count().await?, 1);

            Ok(())
        }

        /// Expect Error when creating a second farm with the same name
        #[tokio::test]
        async fn fails_for_duplicate_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_table(Farm).build().await?;
            let repo = FarmRepository::new(&test.db);
            repo.create(request("North Farm")).await?;

            let result = repo.create(request("North Farm")).await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when required tables don't exist
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            let repo = FarmRepository::new(&test.db);

            let result = repo.create(request("North Farm")).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod update {
        use super::*;

        /// Expect fields to be replaced on update
        #[tokio::test]
        async fn updates_existing_farm() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(Farm)
                .with_farm("North Farm")
                .build()
                .await?;
            let repo = FarmRepository::new(&test.db);

            let updated = repo
                .update(
                    1,
                    FarmRequest {
                        company_name: Some("Nordgard AS".to_string()),
                        ..request("North Farm")
                    },
                )
                .await?;

            assert_eq!(
                updated.and_then(|f| f.company_name),
                Some("Nordgard AS".to_string())
            );

            Ok(())
        }

        /// Expect None when updating a farm that doesn't exist
        #[tokio::test]
        async fn returns_none_for_missing_farm() -> Result<(), TestError> {
            let test = TestBuilder::new().with_table(Farm).build().await?;
            let repo = FarmRepository::new(&test.db);

            let updated = repo.update(1, request("Ghost Farm")).await?;

            assert!(updated.is_none());

            Ok(())
        }
    }

    mod delete {
        use super::*;

        /// Expect no rows to be affected when deleting a farm that does not exist
        #[tokio::test]
        async fn deletes_nothing_for_missing_farm() -> Result<(), TestError> {
            let test = TestBuilder::new().with_table(Farm).build().await?;
            let repo = FarmRepository::new(&test.db);

            let result = repo.delete(1).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }

        /// Expect Error when deleting a farm that still has equipment
        #[tokio::test]
        async fn fails_when_farm_has_equipment() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(Farm)
                .with_table(Equipment)
                .with_farm("North Farm")
                .build()
                .await?;
            test.asset().insert_equipment(1, "Milking Robot", None, None).await?;
            let repo = FarmRepository::new(&test.db);

            let result = repo.delete(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
