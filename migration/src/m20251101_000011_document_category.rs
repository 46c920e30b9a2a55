use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(DocumentCategory::Id))
                    .col(string_uniq(DocumentCategory::Name))
                    .col(string_null(DocumentCategory::Description))
                    .col(timestamp(DocumentCategory::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocumentCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocumentCategory {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
}
