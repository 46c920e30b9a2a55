use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_farm::Farm, m20251101_000002_supplier::Supplier,
    m20251101_000003_app_user::AppUser, m20251101_000004_equipment::Equipment,
};

static IDX_REPORT_FARM_ID: &str = "idx_report_farm_id";
static FK_REPORT_FARM_ID: &str = "fk_report_farm_id";
static FK_REPORT_EQUIPMENT_ID: &str = "fk_report_equipment_id";
static FK_REPORT_SUPPLIER_ID: &str = "fk_report_supplier_id";
static FK_REPORT_REPORTED_BY: &str = "fk_report_reported_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Report::Table)
                    .if_not_exists()
                    .col(pk_auto(Report::Id))
                    .col(integer(Report::FarmId))
                    .col(integer_null(Report::EquipmentId))
                    .col(integer_null(Report::SupplierId))
                    .col(string(Report::Title))
                    .col(text(Report::Description))
                    .col(string(Report::Urgency))
                    .col(string(Report::Status))
                    .col(integer_null(Report::ReportedBy))
                    .col(timestamp(Report::CreatedAt))
                    .col(timestamp(Report::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REPORT_FARM_ID)
                            .from(Report::Table, Report::FarmId)
                            .to(Farm::Table, Farm::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REPORT_EQUIPMENT_ID)
                            .from(Report::Table, Report::EquipmentId)
                            .to(Equipment::Table, Equipment::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REPORT_SUPPLIER_ID)
                            .from(Report::Table, Report::SupplierId)
                            .to(Supplier::Table, Supplier::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REPORT_REPORTED_BY)
                            .from(Report::Table, Report::ReportedBy)
                            .to(AppUser::Table, AppUser::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REPORT_FARM_ID)
                    .table(Report::Table)
                    .col(Report::FarmId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REPORT_FARM_ID)
                    .table(Report::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Report {
    Table,
    Id,
    FarmId,
    EquipmentId,
    SupplierId,
    Title,
    Description,
    Urgency,
    Status,
    ReportedBy,
    CreatedAt,
    UpdatedAt,
}
