//! Maintenance calendar and reminders across equipment and facilities.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::maintenance::{
        days_until, scheduled_next_due, AssetKind, CalendarEventDto, CalendarEventRequest,
        MaintenanceItemDto, MaintenanceStatus,
    },
    server::{
        data::{equipment::EquipmentRepository, facility::FacilityRepository, farm::FarmRepository},
        error::Error,
        model::db::{EquipmentModel, FacilityModel},
        util::{
            functions::{CalendarEvent, FunctionsClient},
            time::now,
        },
    },
};

/// An equipment or facility row with a complete maintenance schedule
struct ScheduledAsset {
    kind: AssetKind,
    id: i32,
    name: String,
    farm_id: i32,
    last_maintenance: NaiveDate,
    interval_days: i32,
    next_due: NaiveDate,
    reminder_due_date: Option<NaiveDate>,
}

impl ScheduledAsset {
    fn from_equipment(equipment: EquipmentModel) -> Option<Self> {
        let next_due = scheduled_next_due(
            equipment.last_maintenance,
            equipment.maintenance_interval_days,
        )?;

        Some(Self {
            kind: AssetKind::Equipment,
            id: equipment.id,
            name: equipment.name,
            farm_id: equipment.farm_id,
            last_maintenance: equipment.last_maintenance?,
            interval_days: equipment.maintenance_interval_days?,
            next_due,
            reminder_due_date: equipment.reminder_due_date,
        })
    }

    fn from_facility(facility: FacilityModel) -> Option<Self> {
        let next_due = scheduled_next_due(
            facility.last_maintenance,
            facility.maintenance_interval_days,
        )?;

        Some(Self {
            kind: AssetKind::Facility,
            id: facility.id,
            name: facility.name,
            farm_id: facility.farm_id,
            last_maintenance: facility.last_maintenance?,
            interval_days: facility.maintenance_interval_days?,
            next_due,
            reminder_due_date: facility.reminder_due_date,
        })
    }

    fn status(&self, today: NaiveDate) -> MaintenanceStatus {
        MaintenanceStatus::evaluate(
            Some(self.last_maintenance),
            Some(self.interval_days),
            today,
        )
    }

    fn to_item(&self, farm_names: &HashMap<i32, String>, today: NaiveDate) -> MaintenanceItemDto {
        MaintenanceItemDto {
            asset_kind: self.kind,
            asset_id: self.id,
            name: self.name.clone(),
            farm_id: self.farm_id,
            farm_name: farm_names.get(&self.farm_id).cloned(),
            last_maintenance: self.last_maintenance,
            interval_days: self.interval_days,
            next_due: self.next_due,
            days_until_due: days_until(self.next_due, today),
            status: self.status(today),
        }
    }

    fn calendar_event(&self, farm_name: Option<&str>) -> CalendarEvent {
        let kind = match self.kind {
            AssetKind::Equipment => "equipment",
            AssetKind::Facility => "facility",
        };
        let mut description = format!(
            "Scheduled maintenance of {} {} (every {} days, last done {}).",
            kind, self.name, self.interval_days, self.last_maintenance
        );
        if let Some(farm_name) = farm_name {
            description.push_str(&format!(" Farm: {}.", farm_name));
        }

        CalendarEvent {
            title: format!("Maintenance: {}", self.name),
            description,
            date: self.next_due,
        }
    }
}

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every scheduled asset, soonest due first
    pub async fn items(&self, today: NaiveDate) -> Result<Vec<MaintenanceItemDto>, Error> {
        let farm_names = FarmRepository::new(self.db).name_map().await?;

        Ok(self
            .scheduled_assets()
            .await?
            .iter()
            .map(|asset| asset.to_item(&farm_names, today))
            .collect())
    }

    /// Scheduled assets due within `days` from today, including overdue ones
    pub async fn calendar(
        &self,
        days: i64,
        today: NaiveDate,
    ) -> Result<Vec<MaintenanceItemDto>, Error> {
        let window = u64::try_from(days)
            .map_err(|_| Error::validation("The calendar window must not be negative"))?;
        let horizon = today
            .checked_add_days(Days::new(window))
            .unwrap_or(NaiveDate::MAX);

        Ok(self
            .items(today)
            .await?
            .into_iter()
            .filter(|item| item.next_due <= horizon)
            .collect())
    }

    /// Puts an asset's next maintenance into the shared calendar
    pub async fn create_calendar_event(
        &self,
        request: CalendarEventRequest,
        functions: &FunctionsClient,
    ) -> Result<CalendarEventDto, Error> {
        let asset = self.scheduled_asset(request.asset_kind, request.asset_id).await?;
        let farm_name = FarmRepository::new(self.db)
            .get(asset.farm_id)
            .await?
            .map(|farm| farm.name);

        functions
            .create_calendar_event(&asset.calendar_event(farm_name.as_deref()))
            .await?;

        Ok(CalendarEventDto {
            asset_kind: asset.kind,
            asset_id: asset.id,
            due_date: asset.next_due,
            created_at: now(),
        })
    }

    /// Creates calendar reminders for overdue and due-soon assets
    ///
    /// An asset gets one reminder per due date: the due date is recorded after a reminder
    /// was created and assets whose recorded date matches are skipped. A failed reminder is
    /// logged and retried on the next run. Returns the number of reminders created.
    pub async fn send_due_reminders(
        &self,
        functions: &FunctionsClient,
        today: NaiveDate,
    ) -> Result<usize, Error> {
        let farm_names = FarmRepository::new(self.db).name_map().await?;
        let mut sent = 0;

        for asset in self.scheduled_assets().await? {
            if !asset.status(today).needs_attention()
                || asset.reminder_due_date == Some(asset.next_due)
            {
                continue;
            }

            let event = asset.calendar_event(farm_names.get(&asset.farm_id).map(String::as_str));
            if let Err(e) = functions.create_calendar_event(&event).await {
                tracing::error!(
                    "Failed to create maintenance reminder for {} {}: {}",
                    asset.kind,
                    asset.id,
                    e
                );
                continue;
            }

            match asset.kind {
                AssetKind::Equipment => {
                    EquipmentRepository::new(self.db)
                        .set_reminder_due_date(asset.id, asset.next_due)
                        .await?
                }
                AssetKind::Facility => {
                    FacilityRepository::new(self.db)
                        .set_reminder_due_date(asset.id, asset.next_due)
                        .await?
                }
            }
            sent += 1;
        }

        Ok(sent)
    }

    async fn scheduled_assets(&self) -> Result<Vec<ScheduledAsset>, Error> {
        let equipment = EquipmentRepository::new(self.db).list_scheduled().await?;
        let facilities = FacilityRepository::new(self.db).list_scheduled().await?;

        let mut assets: Vec<ScheduledAsset> = equipment
            .into_iter()
            .filter_map(ScheduledAsset::from_equipment)
            .chain(facilities.into_iter().filter_map(ScheduledAsset::from_facility))
            .collect();
        assets.sort_by(|a, b| a.next_due.cmp(&b.next_due).then_with(|| a.name.cmp(&b.name)));

        Ok(assets)
    }

    async fn scheduled_asset(&self, kind: AssetKind, id: i32) -> Result<ScheduledAsset, Error> {
        let asset = match kind {
            AssetKind::Equipment => EquipmentRepository::new(self.db)
                .get(id)
                .await?
                .ok_or_else(|| Error::not_found("Equipment", id))
                .map(ScheduledAsset::from_equipment)?,
            AssetKind::Facility => FacilityRepository::new(self.db)
                .get(id)
                .await?
                .ok_or_else(|| Error::not_found("Facility", id))
                .map(ScheduledAsset::from_facility)?,
        };

        asset.ok_or_else(|| {
            Error::validation(format!("{} {} has no maintenance schedule", kind, id))
        })
    }
}
