use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_farm::Farm, m20251101_000003_app_user::AppUser,
    m20251101_000011_document_category::DocumentCategory,
};

static FK_DOCUMENT_FARM_ID: &str = "fk_document_farm_id";
static FK_DOCUMENT_CATEGORY_ID: &str = "fk_document_category_id";
static FK_DOCUMENT_UPLOADED_BY: &str = "fk_document_uploaded_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(integer_null(Document::FarmId))
                    .col(integer_null(Document::CategoryId))
                    .col(string(Document::Title))
                    .col(string(Document::FileName))
                    .col(string(Document::ContentType))
                    .col(big_integer(Document::SizeBytes))
                    .col(string_uniq(Document::StorageKey))
                    .col(integer_null(Document::UploadedBy))
                    .col(timestamp(Document::CreatedAt))
                    .col(timestamp(Document::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DOCUMENT_FARM_ID)
                            .from(Document::Table, Document::FarmId)
                            .to(Farm::Table, Farm::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DOCUMENT_CATEGORY_ID)
                            .from(Document::Table, Document::CategoryId)
                            .to(DocumentCategory::Table, DocumentCategory::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DOCUMENT_UPLOADED_BY)
                            .from(Document::Table, Document::UploadedBy)
                            .to(AppUser::Table, AppUser::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Document {
    Table,
    Id,
    FarmId,
    CategoryId,
    Title,
    FileName,
    ContentType,
    SizeBytes,
    StorageKey,
    UploadedBy,
    CreatedAt,
    UpdatedAt,
}
