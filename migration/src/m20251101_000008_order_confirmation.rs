use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000007_quote::Quote;

static FK_ORDER_CONFIRMATION_QUOTE_ID: &str = "fk_order_confirmation_quote_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderConfirmation::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderConfirmation::Id))
                    .col(integer(OrderConfirmation::QuoteId))
                    .col(string_uniq(OrderConfirmation::OrderNumber))
                    .col(date(OrderConfirmation::OrderDate))
                    .col(date_null(OrderConfirmation::DeliveryDate))
                    .col(string_null(OrderConfirmation::DeliveryAddress))
                    .col(big_integer(OrderConfirmation::TotalAmountMinor))
                    .col(string(OrderConfirmation::Currency))
                    .col(text_null(OrderConfirmation::Notes))
                    .col(timestamp(OrderConfirmation::CreatedAt))
                    .col(timestamp(OrderConfirmation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ORDER_CONFIRMATION_QUOTE_ID)
                            .from(OrderConfirmation::Table, OrderConfirmation::QuoteId)
                            .to(Quote::Table, Quote::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderConfirmation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OrderConfirmation {
    Table,
    Id,
    QuoteId,
    OrderNumber,
    OrderDate,
    DeliveryDate,
    DeliveryAddress,
    TotalAmountMinor,
    Currency,
    Notes,
    CreatedAt,
    UpdatedAt,
}
