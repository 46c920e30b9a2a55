use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::order::OrderRequest, server::util::time::now};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        order: OrderRequest,
    ) -> Result<entity::order_confirmation::Model, DbErr> {
        let now = now();

        entity::order_confirmation::ActiveModel {
            quote_id: ActiveValue::Set(order.quote_id),
            order_number: ActiveValue::Set(order.order_number),
            order_date: ActiveValue::Set(order.order_date),
            delivery_date: ActiveValue::Set(order.delivery_date),
            delivery_address: ActiveValue::Set(order.delivery_address),
            total_amount_minor: ActiveValue::Set(order.total_amount_minor),
            currency: ActiveValue::Set(order.currency),
            notes: ActiveValue::Set(order.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::order_confirmation::Model>, DbErr> {
        entity::prelude::OrderConfirmation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Orders, most recent order date first
    pub async fn list(&self) -> Result<Vec<entity::order_confirmation::Model>, DbErr> {
        entity::prelude::OrderConfirmation::find()
            .order_by_desc(entity::order_confirmation::Column::OrderDate)
            .order_by_desc(entity::order_confirmation::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        order: OrderRequest,
    ) -> Result<Option<entity::order_confirmation::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.quote_id = ActiveValue::Set(order.quote_id);
        active.order_number = ActiveValue::Set(order.order_number);
        active.order_date = ActiveValue::Set(order.order_date);
        active.delivery_date = ActiveValue::Set(order.delivery_date);
        active.delivery_address = ActiveValue::Set(order.delivery_address);
        active.total_amount_minor = ActiveValue::Set(order.total_amount_minor);
        active.currency = ActiveValue::Set(order.currency);
        active.notes = ActiveValue::Set(order.notes);
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::OrderConfirmation::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
