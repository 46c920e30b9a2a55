//! Maintenance scheduling arithmetic shared by equipment, facilities and the maintenance calendar.
//!
//! A schedule is a last-maintenance date plus an interval in days. All arithmetic works on
//! calendar dates (`NaiveDate`) so there is no timezone drift between the stored date and
//! the computed due date.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::filter::Filterable;

/// Number of days ahead of the due date in which maintenance counts as due soon.
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Default look-ahead for the maintenance calendar.
pub const DEFAULT_CALENDAR_WINDOW_DAYS: i64 = 30;

/// Computes the next due date: exactly `last_maintenance + interval_days` days.
///
/// Saturates at [`NaiveDate::MAX`] instead of panicking for absurd intervals.
pub fn next_due(last_maintenance: NaiveDate, interval_days: u32) -> NaiveDate {
    last_maintenance
        .checked_add_days(Days::new(u64::from(interval_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Signed number of days from `today` until `next_due` (negative when overdue).
pub fn days_until(next_due: NaiveDate, today: NaiveDate) -> i64 {
    (next_due - today).num_days()
}

/// Maintenance is overdue when its due date lies before today.
pub fn is_overdue(next_due: NaiveDate, today: NaiveDate) -> bool {
    next_due < today
}

/// Maintenance is due soon when its due date lies within `0..=7` days from today.
pub fn is_due_soon(next_due: NaiveDate, today: NaiveDate) -> bool {
    let days = days_until(next_due, today);
    (0..=DUE_SOON_WINDOW_DAYS).contains(&days)
}

/// Next due date for an optional stored schedule.
///
/// Returns `None` when either part of the schedule is missing or the stored interval is
/// negative.
pub fn scheduled_next_due(
    last_maintenance: Option<NaiveDate>,
    interval_days: Option<i32>,
) -> Option<NaiveDate> {
    let last_maintenance = last_maintenance?;
    let interval_days = u32::try_from(interval_days?).ok()?;

    Some(next_due(last_maintenance, interval_days))
}

string_enum! {
    /// Where an asset stands relative to its maintenance schedule.
    pub enum MaintenanceStatus {
        Unscheduled => "unscheduled",
        Ok => "ok",
        DueSoon => "due_soon",
        Overdue => "overdue",
    }
}

impl MaintenanceStatus {
    /// Classifies a stored schedule relative to `today`.
    ///
    /// Overdue and due soon never overlap: a due date equal to today is due soon.
    pub fn evaluate(
        last_maintenance: Option<NaiveDate>,
        interval_days: Option<i32>,
        today: NaiveDate,
    ) -> Self {
        match scheduled_next_due(last_maintenance, interval_days) {
            None => Self::Unscheduled,
            Some(due) if is_overdue(due, today) => Self::Overdue,
            Some(due) if is_due_soon(due, today) => Self::DueSoon,
            Some(_) => Self::Ok,
        }
    }

    /// Whether the status needs attention (overdue or due soon).
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Overdue | Self::DueSoon)
    }
}

string_enum! {
    /// The kind of asset a maintenance entry refers to.
    pub enum AssetKind {
        Equipment => "equipment",
        Facility => "facility",
    }
}

/// Facet groups the maintenance calendar can be filtered by.
pub const MAINTENANCE_FACETS: &[&str] = &["asset_kind", "farm_id", "status"];

/// One row of the maintenance calendar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MaintenanceItemDto {
    pub asset_kind: AssetKind,
    pub asset_id: i32,
    pub name: String,
    pub farm_id: i32,
    pub farm_name: Option<String>,
    pub last_maintenance: NaiveDate,
    pub interval_days: i32,
    pub next_due: NaiveDate,
    pub days_until_due: i64,
    pub status: MaintenanceStatus,
}

impl Filterable for MaintenanceItemDto {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(farm_name) = &self.farm_name {
            fields.push(farm_name);
        }
        fields
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "asset_kind" => Some(self.asset_kind.to_string()),
            "farm_id" => Some(self.farm_id.to_string()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

/// Request to put an asset's next maintenance into the shared calendar.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CalendarEventRequest {
    pub asset_kind: AssetKind,
    pub asset_id: i32,
}

/// Result of creating a calendar event for an asset.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CalendarEventDto {
    pub asset_kind: AssetKind,
    pub asset_id: i32,
    pub due_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod next_due {
        use super::*;

        /// Expect the due date to be exactly the interval in days after the last maintenance
        #[test]
        fn adds_interval_in_days() {
            assert_eq!(next_due(date(2025, 3, 1), 30), date(2025, 3, 31));
            assert_eq!(next_due(date(2025, 1, 31), 1), date(2025, 2, 1));
        }

        /// Expect leap days and year boundaries to be counted like any other day
        #[test]
        fn crosses_leap_day_and_year_end() {
            assert_eq!(next_due(date(2024, 2, 28), 1), date(2024, 2, 29));
            assert_eq!(next_due(date(2024, 2, 28), 2), date(2024, 3, 1));
            assert_eq!(next_due(date(2025, 12, 25), 10), date(2026, 1, 4));
            assert_eq!(next_due(date(2024, 1, 1), 366), date(2025, 1, 1));
        }

        /// Expect a zero interval to return the last maintenance date itself
        #[test]
        fn zero_interval_is_identity() {
            assert_eq!(next_due(date(2025, 6, 15), 0), date(2025, 6, 15));
        }

        /// Expect saturation instead of a panic for intervals beyond the calendar range
        #[test]
        fn saturates_for_huge_interval() {
            assert_eq!(next_due(date(2025, 6, 15), u32::MAX), NaiveDate::MAX);
        }
    }

    mod windows {
        use super::*;

        /// Expect a due date of today to be due soon and not overdue
        #[test]
        fn today_is_due_soon_not_overdue() {
            let today = date(2025, 5, 10);

            assert!(is_due_soon(today, today));
            assert!(!is_overdue(today, today));
        }

        /// Expect yesterday to be overdue and not due soon
        #[test]
        fn yesterday_is_overdue_not_due_soon() {
            let today = date(2025, 5, 10);
            let yesterday = date(2025, 5, 9);

            assert!(is_overdue(yesterday, today));
            assert!(!is_due_soon(yesterday, today));
        }

        /// Expect the due-soon window to include day 7 and exclude day 8
        #[test]
        fn due_soon_window_is_inclusive_of_seventh_day() {
            let today = date(2025, 5, 10);

            assert!(is_due_soon(date(2025, 5, 17), today));
            assert!(!is_due_soon(date(2025, 5, 18), today));
        }

        /// Expect the two predicates to never hold at the same time around the boundary
        #[test]
        fn predicates_are_mutually_exclusive() {
            let today = date(2025, 5, 10);

            for offset in -10..=10_i64 {
                let due = today + chrono::Duration::days(offset);
                assert!(
                    !(is_overdue(due, today) && is_due_soon(due, today)),
                    "offset {} classified as both overdue and due soon",
                    offset
                );
            }
        }
    }

    mod status {
        use super::*;

        /// Expect unscheduled when either part of the schedule is missing or negative
        #[test]
        fn unscheduled_without_complete_schedule() {
            let today = date(2025, 5, 10);

            assert_eq!(
                MaintenanceStatus::evaluate(None, Some(30), today),
                MaintenanceStatus::Unscheduled
            );
            assert_eq!(
                MaintenanceStatus::evaluate(Some(today), None, today),
                MaintenanceStatus::Unscheduled
            );
            assert_eq!(
                MaintenanceStatus::evaluate(Some(today), Some(-1), today),
                MaintenanceStatus::Unscheduled
            );
        }

        /// Expect each window to map to its status
        #[test]
        fn classifies_schedule() {
            let today = date(2025, 5, 10);

            assert_eq!(
                MaintenanceStatus::evaluate(Some(date(2025, 4, 1)), Some(30), today),
                MaintenanceStatus::Overdue
            );
            assert_eq!(
                MaintenanceStatus::evaluate(Some(date(2025, 4, 10)), Some(30), today),
                MaintenanceStatus::DueSoon
            );
            assert_eq!(
                MaintenanceStatus::evaluate(Some(date(2025, 5, 1)), Some(90), today),
                MaintenanceStatus::Ok
            );
        }

        /// Expect the status to round-trip through its stored string form
        #[test]
        fn parses_stored_value() {
            assert_eq!(
                "due_soon".parse::<MaintenanceStatus>(),
                Ok(MaintenanceStatus::DueSoon)
            );
            assert!("later".parse::<MaintenanceStatus>().is_err());
        }
    }
}
