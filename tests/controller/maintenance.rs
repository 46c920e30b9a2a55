use std::collections::HashMap;

use allevapp::{
    model::maintenance::{
        AssetKind, CalendarEventDto, CalendarEventRequest, MaintenanceItemDto, MaintenanceStatus,
    },
    server::{
        controller::maintenance::{create_calendar_event, get_maintenance_calendar},
        util::{functions::CREATE_CALENDAR_EVENT, time::today},
    },
};
use chrono::Days;

use super::*;
use crate::util::json_body;

fn days(value: Option<&str>) -> Query<HashMap<String, String>> {
    Query(
        value
            .map(|value| HashMap::from([("days".to_string(), value.to_string())]))
            .unwrap_or_default(),
    )
}

mod get_maintenance_calendar {
    use super::*;

    /// Expect overdue items and items inside the window, soonest first, and nothing beyond it
    #[tokio::test]
    async fn lists_items_within_window() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;
        let farm = test.farm().insert_farm("North").await?;
        let long_ago = today().checked_sub_days(Days::new(100)).unwrap();
        test.asset()
            .insert_equipment(farm.id, "Milking robot", Some(long_ago), Some(30))
            .await?;
        test.asset()
            .insert_facility(farm.id, "Barn roof", Some(today()), Some(5))
            .await?;
        test.asset()
            .insert_equipment(farm.id, "Tractor", Some(today()), Some(365))
            .await?;
        test.asset().insert_equipment(farm.id, "Trailer", None, None).await?;
        let state = test.app_state().await;

        let result =
            get_maintenance_calendar(State(state), test.session.clone(), days(None)).await;

        assert!(result.is_ok());
        let items: Vec<MaintenanceItemDto> = json_body(result.unwrap().into_response()).await;
        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Milking robot", "Barn roof"]);
        assert_eq!(items[0].status, MaintenanceStatus::Overdue);
        assert_eq!(items[1].asset_kind, AssetKind::Facility);
        assert_eq!(items[1].days_until_due, 5);
        assert_eq!(items[1].status, MaintenanceStatus::DueSoon);

        Ok(())
    }

    /// Expect a wider window to include later maintenance
    #[tokio::test]
    async fn honours_days_parameter() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;
        let farm = test.farm().insert_farm("North").await?;
        test.asset()
            .insert_equipment(farm.id, "Tractor", Some(today()), Some(365))
            .await?;
        let state = test.app_state().await;

        let result =
            get_maintenance_calendar(State(state), test.session.clone(), days(Some("365"))).await;

        let items: Vec<MaintenanceItemDto> = json_body(result.unwrap().into_response()).await;
        assert_eq!(items.len(), 1);

        Ok(())
    }

    /// Expect 400 for a negative or non-numeric window
    #[tokio::test]
    async fn rejects_invalid_window() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;
        let state = test.app_state().await;

        for value in ["-1", "soon"] {
            let result = get_maintenance_calendar(
                State(state.clone()),
                test.session.clone(),
                days(Some(value)),
            )
            .await;

            assert!(result.is_err());
            let resp = result.err().unwrap().into_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        Ok(())
    }
}

mod create_calendar_event {
    use super::*;

    /// Expect 201 with the asset's next due date once the calendar function succeeded
    #[tokio::test]
    async fn creates_event_for_scheduled_asset() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_function_endpoint(CREATE_CALENDAR_EVENT, 200, 1)
            .build()
            .await?;
        test.login_as("kari", "member").await?;
        let farm = test.farm().insert_farm("North").await?;
        let item = test.asset()
            .insert_equipment(farm.id, "Milking robot", Some(today()), Some(30))
            .await?;
        let state = test.app_state().await;

        let request = CalendarEventRequest {
            asset_kind: AssetKind::Equipment,
            asset_id: item.id,
        };
        let result = create_calendar_event(State(state), test.session.clone(), Json(request)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let event: CalendarEventDto = json_body(resp).await;
        assert_eq!(event.due_date, today().checked_add_days(Days::new(30)).unwrap());
        test.assert_mocks();

        Ok(())
    }

    /// Expect 502 when the calendar function fails
    #[tokio::test]
    async fn bad_gateway_when_function_fails() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_function_endpoint(CREATE_CALENDAR_EVENT, 400, 1)
            .build()
            .await?;
        test.login_as("kari", "member").await?;
        let farm = test.farm().insert_farm("North").await?;
        let item = test.asset()
            .insert_facility(farm.id, "Barn roof", Some(today()), Some(30))
            .await?;
        let state = test.app_state().await;

        let request = CalendarEventRequest {
            asset_kind: AssetKind::Facility,
            asset_id: item.id,
        };
        let result = create_calendar_event(State(state), test.session.clone(), Json(request)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        test.assert_mocks();

        Ok(())
    }

    /// Expect 400 without calling the function for an asset without a schedule
    #[tokio::test]
    async fn rejects_unscheduled_asset() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_function_endpoint(CREATE_CALENDAR_EVENT, 200, 0)
            .build()
            .await?;
        test.login_as("kari", "member").await?;
        let farm = test.farm().insert_farm("North").await?;
        let item = test.asset().insert_equipment(farm.id, "Trailer", None, None).await?;
        let state = test.app_state().await;

        let request = CalendarEventRequest {
            asset_kind: AssetKind::Equipment,
            asset_id: item.id,
        };
        let result = create_calendar_event(State(state), test.session.clone(), Json(request)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        test.assert_mocks();

        Ok(())
    }
}
