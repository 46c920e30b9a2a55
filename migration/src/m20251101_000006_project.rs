use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_farm::Farm;

static FK_PROJECT_FARM_ID: &str = "fk_project_farm_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(integer(Project::FarmId))
                    .col(string(Project::Name))
                    .col(text_null(Project::Description))
                    .col(string(Project::Status))
                    .col(date_null(Project::StartDate))
                    .col(date_null(Project::EndDate))
                    .col(big_integer_null(Project::BudgetMinor))
                    .col(timestamp(Project::CreatedAt))
                    .col(timestamp(Project::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROJECT_FARM_ID)
                            .from(Project::Table, Project::FarmId)
                            .to(Farm::Table, Farm::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Project {
    Table,
    Id,
    FarmId,
    Name,
    Description,
    Status,
    StartDate,
    EndDate,
    BudgetMinor,
    CreatedAt,
    UpdatedAt,
}
