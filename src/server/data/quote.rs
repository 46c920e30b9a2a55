use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::quote::{QuoteRequest, QuoteStatus},
    server::util::time::now,
};

pub struct QuoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuoteRepository<'a, C> {
    /// Creates a new instance of [`QuoteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, quote: QuoteRequest) -> Result<entity::quote::Model, DbErr> {
        let now = now();

        entity::quote::ActiveModel {
            supplier_id: ActiveValue::Set(quote.supplier_id),
            farm_id: ActiveValue::Set(quote.farm_id),
            project_id: ActiveValue::Set(quote.project_id),
            title: ActiveValue::Set(quote.title),
            description: ActiveValue::Set(quote.description),
            amount_minor: ActiveValue::Set(quote.amount_minor),
            currency: ActiveValue::Set(quote.currency),
            status: ActiveValue::Set(quote.status.as_str().to_string()),
            valid_until: ActiveValue::Set(quote.valid_until),
            sent_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::quote::Model>, DbErr> {
        entity::prelude::Quote::find_by_id(id).one(self.db).await
    }

    /// Quotes, newest first
    pub async fn list(&self) -> Result<Vec<entity::quote::Model>, DbErr> {
        entity::prelude::Quote::find()
            .order_by_desc(entity::quote::Column::CreatedAt)
            .order_by_desc(entity::quote::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of quotes in one of the given statuses
    pub async fn count_with_status(&self, statuses: &[QuoteStatus]) -> Result<u64, DbErr> {
        entity::prelude::Quote::find()
            .filter(
                entity::quote::Column::Status.is_in(statuses.iter().map(|status| status.as_str())),
            )
            .count(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        quote: QuoteRequest,
    ) -> Result<Option<entity::quote::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.supplier_id = ActiveValue::Set(quote.supplier_id);
        active.farm_id = ActiveValue::Set(quote.farm_id);
        active.project_id = ActiveValue::Set(quote.project_id);
        active.title = ActiveValue::Set(quote.title);
        active.description = ActiveValue::Set(quote.description);
        active.amount_minor = ActiveValue::Set(quote.amount_minor);
        active.currency = ActiveValue::Set(quote.currency);
        active.status = ActiveValue::Set(quote.status.as_str().to_string());
        active.valid_until = ActiveValue::Set(quote.valid_until);
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: QuoteStatus,
    ) -> Result<Option<entity::quote::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Marks a quote as sent to the supplier, recording when
    pub async fn mark_sent(&self, id: i32) -> Result<Option<entity::quote::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let now = now();
        let mut active = existing.into_active_model();
        active.status = ActiveValue::Set(QuoteStatus::Sent.as_str().to_string());
        active.sent_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Quote::delete_by_id(id).exec(self.db).await
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
            .with_table(Project)
            .with_table(Quote)
            .with_farm("North Farm")
            .build()
            .await
    }

    /// Expect a sent quote to record the time it was sent
    #[tokio::test]
    async fn mark_sent_records_time() -> Result<(), TestError> {
        let test = setup().await?;
        let supplier = test.purchasing().insert_supplier("Agri AS", None).await?;
        let quote = test
            .purchasing()
            .insert_quote(supplier.id, 1, "draft")
            .await?;
        let repo = QuoteRepository::new(&test.db);

        let sent = repo.mark_sent(quote.id).await?.unwrap();

        assert_eq!(sent.status, "sent");
        assert!(sent.sent_at.is_some());

        Ok(())
    }

    /// Expect pending quotes to be counted by status
    #[tokio::test]
    async fn counts_pending_quotes() -> Result<(), TestError> {
        let test = setup().await?;
        let supplier = test.purchasing().insert_supplier("Agri AS", None).await?;
        for status in ["draft", "sent", "accepted", "rejected"] {
            test.purchasing()
                .insert_quote(supplier.id, 1, status)
                .await?;
        }
        let repo = QuoteRepository::new(&test.db);

        let pending = repo
            .count_with_status(&[QuoteStatus::Draft, QuoteStatus::Sent, QuoteStatus::Received])
            .await?;

        assert_eq!(pending, 2);

        Ok(())
    }

    /// Expect None when changing the status of a missing quote
    #[tokio::test]
    async fn set_status_returns_none_for_missing() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = QuoteRepository::new(&test.db);

        let result = repo.set_status(3, QuoteStatus::Accepted).await?;

        assert!(result.is_none());

        Ok(())
    }
}
