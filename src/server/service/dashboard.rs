use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        dashboard::DashboardDto, maintenance::MaintenanceStatus, quote::QuoteStatus,
        report::ReportStatus,
    },
    server::{
        data::{
            equipment::EquipmentRepository, facility::FacilityRepository, farm::FarmRepository,
            quote::QuoteRepository, report::ReportRepository,
        },
        error::Error,
        service::maintenance::MaintenanceService,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn summary(&self, today: NaiveDate) -> Result<DashboardDto, Error> {
        let open_statuses: Vec<ReportStatus> = ReportStatus::ALL
            .iter()
            .copied()
            .filter(ReportStatus::is_open)
            .collect();
        let pending_statuses: Vec<QuoteStatus> = QuoteStatus::ALL
            .iter()
            .copied()
            .filter(QuoteStatus::is_pending)
            .collect();

        let maintenance = MaintenanceService::new(self.db).items(today).await?;
        let count_status = |status: MaintenanceStatus| {
            maintenance.iter().filter(|item| item.status == status).count() as u64
        };

        Ok(DashboardDto {
            farms: FarmRepository::new(self.db).count().await?,
            equipment: EquipmentRepository::new(self.db).count().await?,
            facilities: FacilityRepository::new(self.db).count().await?,
            open_reports: ReportRepository::new(self.db)
                .count_with_status(&open_statuses)
                .await?,
            overdue_maintenance: count_status(MaintenanceStatus::Overdue),
            due_soon_maintenance: count_status(MaintenanceStatus::DueSoon),
            pending_quotes: QuoteRepository::new(self.db)
                .count_with_status(&pending_statuses)
                .await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use allevapp_test_utils::prelude::*;
    use chrono::Days;

    use super::*;
    use crate::server::util::time::today;

    /// Expect each counter to reflect the seeded rows
    #[tokio::test]
    async fn counts_everything() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_farm("North Farm")
            .with_farm("South Farm")
            .build()
            .await?;
        let long_ago = today().checked_sub_days(Days::new(100));
        test.asset()
            .insert_equipment(1, "Milking Robot", long_ago, Some(30))
            .await?;
        test.asset()
            .insert_equipment(2, "Tractor", Some(today()), Some(3))
            .await?;
        test.asset()
            .insert_facility(1, "Calf Barn", None, None)
            .await?;
        test.report().insert_report(1, None).await?;
        let supplier = test.purchasing().insert_supplier("Agri AS", None).await?;
        test.purchasing()
            .insert_quote(supplier.id, 1, "sent")
            .await?;
        test.purchasing()
            .insert_quote(supplier.id, 1, "rejected")
            .await?;

        let summary = DashboardService::new(&test.db)
            .summary(today())
            .await
            .unwrap();

        assert_eq!(
            summary,
            DashboardDto {
                farms: 2,
                equipment: 2,
                facilities: 1,
                open_reports: 1,
                overdue_maintenance: 1,
                due_soon_maintenance: 1,
                pending_quotes: 1,
            }
        );

        Ok(())
    }
}
