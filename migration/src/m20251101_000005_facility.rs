use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_farm::Farm;

static FK_FACILITY_FARM_ID: &str = "fk_facility_farm_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Facility::Table)
                    .if_not_exists()
                    .col(pk_auto(Facility::Id))
                    .col(integer(Facility::FarmId))
                    .col(string(Facility::Name))
                    .col(string(Facility::FacilityType))
                    .col(string(Facility::Status))
                    .col(date_null(Facility::LastMaintenance))
                    .col(integer_null(Facility::MaintenanceIntervalDays))
                    .col(date_null(Facility::ReminderDueDate))
                    .col(text_null(Facility::Notes))
                    .col(timestamp(Facility::CreatedAt))
                    .col(timestamp(Facility::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FACILITY_FARM_ID)
                            .from(Facility::Table, Facility::FarmId)
                            .to(Farm::Table, Farm::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Facility::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Facility {
    Table,
    Id,
    FarmId,
    Name,
    FacilityType,
    Status,
    LastMaintenance,
    MaintenanceIntervalDays,
    ReminderDueDate,
    Notes,
    CreatedAt,
    UpdatedAt,
}
