use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000009_report::Report;

static IDX_ATTACHMENT_REPORT_ID: &str = "idx_attachment_report_id";
static FK_ATTACHMENT_REPORT_ID: &str = "fk_attachment_report_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attachment::Table)
                    .if_not_exists()
                    .col(pk_auto(Attachment::Id))
                    .col(integer(Attachment::ReportId))
                    .col(string(Attachment::FileName))
                    .col(string(Attachment::ContentType))
                    .col(big_integer(Attachment::SizeBytes))
                    .col(string_uniq(Attachment::StorageKey))
                    .col(timestamp(Attachment::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATTACHMENT_REPORT_ID)
                            .from(Attachment::Table, Attachment::ReportId)
                            .to(Report::Table, Report::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATTACHMENT_REPORT_ID)
                    .table(Attachment::Table)
                    .col(Attachment::ReportId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATTACHMENT_REPORT_ID)
                    .table(Attachment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Attachment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Attachment {
    Table,
    Id,
    ReportId,
    FileName,
    ContentType,
    SizeBytes,
    StorageKey,
    CreatedAt,
}
