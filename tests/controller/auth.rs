use allevapp::{
    model::user::{LoginRequest, UserDto},
    server::{
        controller::auth::{get_user, login, logout},
        model::session::user::SessionUserId,
    },
};

use super::*;
use crate::util::json_body;

fn credentials(username: &str, password: &str) -> Json<LoginRequest> {
    Json(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}

mod login {
    use super::*;

    /// Expect 200 with the user and the user ID stored in session for valid credentials
    #[tokio::test]
    async fn logs_in_with_valid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let user = test.user().insert_user("kari", "member").await?;
        let state = test.app_state().await;

        let result = login(
            State(state),
            test.session.clone(),
            credentials("kari", TEST_PASSWORD),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: UserDto = json_body(resp).await;
        assert_eq!(body.id, user.id);

        let session_user_id = SessionUserId::get(&test.session).await.unwrap();
        assert_eq!(session_user_id, Some(user.id));

        Ok(())
    }

    /// Expect the username to be matched regardless of case
    #[tokio::test]
    async fn matches_username_case_insensitively() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.user().insert_user("kari", "member").await?;
        let state = test.app_state().await;

        let result = login(
            State(state),
            test.session.clone(),
            credentials("  KARI ", TEST_PASSWORD),
        )
        .await;

        assert!(result.is_ok());

        Ok(())
    }

    /// Expect 401 for a wrong password and nothing stored in session
    #[tokio::test]
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.user().insert_user("kari", "member").await?;
        let state = test.app_state().await;

        let result = login(
            State(state),
            test.session.clone(),
            credentials("kari", "not the password"),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }

    /// Expect 401 for a deactivated user even with the right password
    #[tokio::test]
    async fn rejects_inactive_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.user().insert_inactive_user("ola").await?;
        let state = test.app_state().await;

        let result = login(
            State(state),
            test.session.clone(),
            credentials("ola", TEST_PASSWORD),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 500 when the user table does not exist
    #[tokio::test]
    async fn fails_when_tables_missing() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let state = test.app_state().await;

        let result = login(
            State(state),
            test.session.clone(),
            credentials("kari", TEST_PASSWORD),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod logout {
    use super::*;

    /// Expect 204 and the user ID removed from session after logout
    #[tokio::test]
    async fn clears_logged_in_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_as("kari", "member").await?;

        let result = logout(test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }

    /// Expect 204 when logging out without a user in session
    #[tokio::test]
    async fn succeeds_without_session_data() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = logout(test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        Ok(())
    }
}

mod user {
    use super::*;

    /// Expect 200 with the logged in user
    #[tokio::test]
    async fn returns_logged_in_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let user_id = test.login_as("kari", "admin").await?;
        let state = test.app_state().await;

        let result = get_user(State(state), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: UserDto = json_body(resp).await;
        assert_eq!(body.id, user_id);
        assert!(body.is_admin());

        Ok(())
    }

    /// Expect 401 when no user is in session
    #[tokio::test]
    async fn unauthorized_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let state = test.app_state().await;

        let result = get_user(State(state), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 401 and a cleared session when the session's user no longer exists
    #[tokio::test]
    async fn unauthorized_for_deleted_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        SessionUserId::insert(&test.session, 42).await.unwrap();
        let state = test.app_state().await;

        let result = get_user(State(state), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}
