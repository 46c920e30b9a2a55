pub use sea_orm_migration::prelude::*;

mod m20251101_000001_farm;
mod m20251101_000002_supplier;
mod m20251101_000003_app_user;
mod m20251101_000004_equipment;
mod m20251101_000005_facility;
mod m20251101_000006_project;
mod m20251101_000007_quote;
mod m20251101_000008_order_confirmation;
mod m20251101_000009_report;
mod m20251101_000010_attachment;
mod m20251101_000011_document_category;
mod m20251101_000012_document;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_farm::Migration),
            Box::new(m20251101_000002_supplier::Migration),
            Box::new(m20251101_000003_app_user::Migration),
            Box::new(m20251101_000004_equipment::Migration),
            Box::new(m20251101_000005_facility::Migration),
            Box::new(m20251101_000006_project::Migration),
            Box::new(m20251101_000007_quote::Migration),
            Box::new(m20251101_000008_order_confirmation::Migration),
            Box::new(m20251101_000009_report::Migration),
            Box::new(m20251101_000010_attachment::Migration),
            Box::new(m20251101_000011_document_category::Migration),
            Box::new(m20251101_000012_document::Migration),
        ]
    }
}
