use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_farm::Farm;

static IDX_EQUIPMENT_FARM_ID: &str = "idx_equipment_farm_id";
static FK_EQUIPMENT_FARM_ID: &str = "fk_equipment_farm_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(integer(Equipment::FarmId))
                    .col(string(Equipment::Name))
                    .col(string(Equipment::Category))
                    .col(string_null(Equipment::Manufacturer))
                    .col(string_null(Equipment::Model))
                    .col(string_null(Equipment::SerialNumber))
                    .col(string(Equipment::Status))
                    .col(date_null(Equipment::LastMaintenance))
                    .col(integer_null(Equipment::MaintenanceIntervalDays))
                    .col(date_null(Equipment::ReminderDueDate))
                    .col(text_null(Equipment::Notes))
                    .col(timestamp(Equipment::CreatedAt))
                    .col(timestamp(Equipment::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EQUIPMENT_FARM_ID)
                            .from(Equipment::Table, Equipment::FarmId)
                            .to(Farm::Table, Farm::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EQUIPMENT_FARM_ID)
                    .table(Equipment::Table)
                    .col(Equipment::FarmId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EQUIPMENT_FARM_ID)
                    .table(Equipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Equipment {
    Table,
    Id,
    FarmId,
    Name,
    Category,
    Manufacturer,
    Model,
    SerialNumber,
    Status,
    LastMaintenance,
    MaintenanceIntervalDays,
    ReminderDueDate,
    Notes,
    CreatedAt,
    UpdatedAt,
}
