use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::supplier::SupplierRequest, server::util::time::now};

pub struct SupplierRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SupplierRepository<'a, C> {
    /// Creates a new instance of [`SupplierRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        supplier: SupplierRequest,
    ) -> Result<entity::supplier::Model, DbErr> {
        let now = now();

        entity::supplier::ActiveModel {
            name: ActiveValue::Set(supplier.name),
            contact_person: ActiveValue::Set(supplier.contact_person),
            email: ActiveValue::Set(supplier.email),
            phone: ActiveValue::Set(supplier.phone),
            address: ActiveValue::Set(supplier.address),
            notes: ActiveValue::Set(supplier.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::supplier::Model>, DbErr> {
        entity::prelude::Supplier::find_by_id(id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::supplier::Model>, DbErr> {
        entity::prelude::Supplier::find()
            .order_by_asc(entity::supplier::Column::Name)
            .all(self.db)
            .await
    }

    /// Map of supplier ID to supplier name
    pub async fn name_map(&self) -> Result<HashMap<i32, String>, DbErr> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|supplier| (supplier.id, supplier.name))
            .collect())
    }

    pub async fn update(
        &self,
        id: i32,
        supplier: SupplierRequest,
    ) -> Result<Option<entity::supplier::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(supplier.name);
        active.contact_person = ActiveValue::Set(supplier.contact_person);
        active.email = ActiveValue::Set(supplier.email);
        active.phone = ActiveValue::Set(supplier.phone);
        active.address = ActiveValue::Set(supplier.address);
        active.notes = ActiveValue::Set(supplier.notes);
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Supplier::delete_by_id(id).exec(self.db).await
    }
}
