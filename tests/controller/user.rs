use allevapp::{
    model::user::{CreateUserRequest, PasswordResetDto, UserDto, UserRole},
    server::{
        controller::user::{create_user, delete_user, list_users, reset_password},
        util::functions::SEND_PASSWORD_EMAIL,
    },
};

use super::*;
use crate::util::json_body;

/// Expect 403 when a member lists users
#[tokio::test]
async fn list_users_forbidden_for_member() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("ola", "member").await?;
    let state = test.app_state().await;

    let result = list_users(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect an administrator to create a user with a normalized username
#[tokio::test]
async fn admin_creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("admin", "admin").await?;
    let state = test.app_state().await;

    let request = CreateUserRequest {
        username: " Ingrid ".to_string(),
        password: "long-enough-password".to_string(),
        email: Some("ingrid@example.no".to_string()),
        full_name: Some("Ingrid Berg".to_string()),
        role: UserRole::Member,
    };
    let result = create_user(State(state), test.session.clone(), Json(request)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.username, "ingrid");
    assert_eq!(user.role, UserRole::Member);
    assert!(user.is_active);

    Ok(())
}

/// Expect 409 when the username is taken
#[tokio::test]
async fn create_user_duplicate_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("admin", "admin").await?;
    test.user().insert_user("ingrid", "member").await?;
    let state = test.app_state().await;

    let request = CreateUserRequest {
        username: "INGRID".to_string(),
        password: "long-enough-password".to_string(),
        email: None,
        full_name: None,
        role: UserRole::Member,
    };
    let result = create_user(State(state), test.session.clone(), Json(request)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 when an administrator deletes their own account
#[tokio::test]
async fn delete_own_account_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let admin_id = test.login_as("admin", "admin").await?;
    let state = test.app_state().await;

    let result = delete_user(State(state), test.session.clone(), Path(admin_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 204 when an administrator deletes another user
#[tokio::test]
async fn delete_other_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("admin", "admin").await?;
    let member = test.user().insert_user("ola", "member").await?;
    let state = test.app_state().await;

    let result = delete_user(State(state), test.session.clone(), Path(member.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect a password reset to email the user and report the address used
#[tokio::test]
async fn reset_password_sends_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_function_endpoint(SEND_PASSWORD_EMAIL, 200, 1)
        .build()
        .await?;
    test.login_as("admin", "admin").await?;
    let member = test.user().insert_user("ola", "member").await?;
    let state = test.app_state().await;

    let result = reset_password(State(state), test.session.clone(), Path(member.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let reset: PasswordResetDto = json_body(resp).await;
    assert_eq!(reset.user_id, member.id);
    assert_eq!(reset.email, "ola@example.no");
    test.assert_mocks();

    Ok(())
}
