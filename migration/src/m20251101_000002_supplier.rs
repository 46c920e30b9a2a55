use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supplier::Table)
                    .if_not_exists()
                    .col(pk_auto(Supplier::Id))
                    .col(string(Supplier::Name))
                    .col(string_null(Supplier::ContactPerson))
                    .col(string_null(Supplier::Email))
                    .col(string_null(Supplier::Phone))
                    .col(string_null(Supplier::Address))
                    .col(text_null(Supplier::Notes))
                    .col(timestamp(Supplier::CreatedAt))
                    .col(timestamp(Supplier::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Supplier::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Supplier {
    Table,
    Id,
    Name,
    ContactPerson,
    Email,
    Phone,
    Address,
    Notes,
    CreatedAt,
    UpdatedAt,
}
