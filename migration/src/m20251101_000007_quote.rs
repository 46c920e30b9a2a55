use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_farm::Farm, m20251101_000002_supplier::Supplier,
    m20251101_000006_project::Project,
};

static IDX_QUOTE_SUPPLIER_ID: &str = "idx_quote_supplier_id";
static FK_QUOTE_SUPPLIER_ID: &str = "fk_quote_supplier_id";
static FK_QUOTE_FARM_ID: &str = "fk_quote_farm_id";
static FK_QUOTE_PROJECT_ID: &str = "fk_quote_project_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quote::Table)
                    .if_not_exists()
                    .col(pk_auto(Quote::Id))
                    .col(integer(Quote::SupplierId))
                    .col(integer(Quote::FarmId))
                    .col(integer_null(Quote::ProjectId))
                    .col(string(Quote::Title))
                    .col(text_null(Quote::Description))
                    .col(big_integer_null(Quote::AmountMinor))
                    .col(string(Quote::Currency))
                    .col(string(Quote::Status))
                    .col(date_null(Quote::ValidUntil))
                    .col(timestamp_null(Quote::SentAt))
                    .col(timestamp(Quote::CreatedAt))
                    .col(timestamp(Quote::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUOTE_SUPPLIER_ID)
                            .from(Quote::Table, Quote::SupplierId)
                            .to(Supplier::Table, Supplier::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUOTE_FARM_ID)
                            .from(Quote::Table, Quote::FarmId)
                            .to(Farm::Table, Farm::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUOTE_PROJECT_ID)
                            .from(Quote::Table, Quote::ProjectId)
                            .to(Project::Table, Project::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_QUOTE_SUPPLIER_ID)
                    .table(Quote::Table)
                    .col(Quote::SupplierId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_QUOTE_SUPPLIER_ID)
                    .table(Quote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Quote::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Quote {
    Table,
    Id,
    SupplierId,
    FarmId,
    ProjectId,
    Title,
    Description,
    AmountMinor,
    Currency,
    Status,
    ValidUntil,
    SentAt,
    CreatedAt,
    UpdatedAt,
}
