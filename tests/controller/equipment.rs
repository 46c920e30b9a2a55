use std::collections::HashMap;

use allevapp::{
    model::{
        equipment::{AssetStatus, EquipmentDto, EquipmentRequest},
        maintenance::MaintenanceStatus,
    },
    server::{
        controller::equipment::{create_equipment, delete_equipment, get_equipment, list_equipment},
        util::time::today,
    },
};
use chrono::Days;

use super::*;
use crate::util::json_body;

fn request(farm_id: i32, name: &str) -> EquipmentRequest {
    EquipmentRequest {
        farm_id,
        name: name.to_string(),
        category: "feeding".to_string(),
        manufacturer: Some("Lely".to_string()),
        model: None,
        serial_number: None,
        status: AssetStatus::Operational,
        last_maintenance: None,
        maintenance_interval_days: None,
        notes: None,
    }
}

fn params(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
    )
}

mod list_equipment {
    use super::*;

    /// Expect only the requested farm's equipment when `farm_id` is given
    #[tokio::test]
    async fn narrows_to_farm() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;
        let north = test.farm().insert_farm("North").await?;
        let south = test.farm().insert_farm("South").await?;
        test.asset().insert_equipment(north.id, "Feed mixer", None, None).await?;
        test.asset().insert_equipment(south.id, "Tractor", None, None).await?;
        let state = test.app_state().await;

        let result = list_equipment(
            State(state),
            test.session.clone(),
            params(&[("farm_id", &north.id.to_string())]),
        )
        .await;

        assert!(result.is_ok());
        let items: Vec<EquipmentDto> = json_body(result.unwrap().into_response()).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Feed mixer");
        assert_eq!(items[0].farm_name.as_deref(), Some("North"));

        Ok(())
    }

    /// Expect search and maintenance facets to combine
    #[tokio::test]
    async fn applies_search_and_facets() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;
        let farm = test.farm().insert_farm("North").await?;
        let overdue_since = today().checked_sub_days(Days::new(40)).unwrap();
        test.asset()
            .insert_equipment(farm.id, "Milking robot A", Some(overdue_since), Some(30))
            .await?;
        test.asset()
            .insert_equipment(farm.id, "Milking robot B", Some(today()), Some(30))
            .await?;
        test.asset().insert_equipment(farm.id, "Tractor", Some(overdue_since), Some(30)).await?;
        let state = test.app_state().await;

        let result = list_equipment(
            State(state),
            test.session.clone(),
            params(&[("q", "ROBOT"), ("maintenance_status", "overdue")]),
        )
        .await;

        let items: Vec<EquipmentDto> = json_body(result.unwrap().into_response()).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milking robot A");
        assert_eq!(items[0].maintenance_status, MaintenanceStatus::Overdue);

        Ok(())
    }

    /// Expect 401 without a logged in user
    #[tokio::test]
    async fn requires_login() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let state = test.app_state().await;

        let result = list_equipment(State(state), test.session.clone(), params(&[])).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod create_equipment {
    use super::*;

    /// Expect 201 with the computed next maintenance date
    #[tokio::test]
    async fn creates_with_schedule() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;
        let farm = test.farm().insert_farm("North").await?;
        let state = test.app_state().await;

        let mut equipment = request(farm.id, "Feed mixer");
        equipment.last_maintenance = Some(today());
        equipment.maintenance_interval_days = Some(90);

        let result = create_equipment(State(state), test.session.clone(), Json(equipment)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: EquipmentDto = json_body(resp).await;
        assert_eq!(
            created.next_maintenance,
            today().checked_add_days(Days::new(90))
        );
        assert_eq!(created.maintenance_status, MaintenanceStatus::Ok);

        Ok(())
    }

    /// Expect 400 for a blank name
    #[tokio::test]
    async fn rejects_blank_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;
        let farm = test.farm().insert_farm("North").await?;
        let state = test.app_state().await;

        let result = create_equipment(
            State(state),
            test.session.clone(),
            Json(request(farm.id, "  ")),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 409 when the farm does not exist
    #[tokio::test]
    async fn conflicts_for_missing_farm() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;
        let state = test.app_state().await;

        let result =
            create_equipment(State(state), test.session.clone(), Json(request(99, "Mixer"))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }
}

mod get_and_delete {
    use super::*;

    /// Expect 404 for equipment that does not exist
    #[tokio::test]
    async fn get_returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;
        let state = test.app_state().await;

        let result = get_equipment(State(state), test.session.clone(), Path(1)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 204 on delete and 404 on the second delete
    #[tokio::test]
    async fn delete_then_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;
        let farm = test.farm().insert_farm("North").await?;
        let item = test.asset().insert_equipment(farm.id, "Mixer", None, None).await?;
        let state = test.app_state().await;

        let result =
            delete_equipment(State(state.clone()), test.session.clone(), Path(item.id)).await;
        assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

        let result = delete_equipment(State(state), test.session.clone(), Path(item.id)).await;
        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
