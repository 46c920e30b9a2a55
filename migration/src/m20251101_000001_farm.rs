use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Farm::Table)
                    .if_not_exists()
                    .col(pk_auto(Farm::Id))
                    .col(string_uniq(Farm::Name))
                    .col(string_null(Farm::Location))
                    .col(string_null(Farm::CompanyName))
                    .col(string_null(Farm::Address))
                    .col(string_null(Farm::Phone))
                    .col(string_null(Farm::Email))
                    .col(string_null(Farm::OrgNumber))
                    .col(text_null(Farm::Notes))
                    .col(timestamp(Farm::CreatedAt))
                    .col(timestamp(Farm::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Farm::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Farm {
    Table,
    Id,
    Name,
    Location,
    CompanyName,
    Address,
    Phone,
    Email,
    OrgNumber,
    Notes,
    CreatedAt,
    UpdatedAt,
}
