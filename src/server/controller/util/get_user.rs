use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::user_dto,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: Active user found for the session's user ID
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but the
///   user is missing or deactivated (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let user = UserRepository::new(&state.db)
        .get(user_id)
        .await?
        .filter(|user| user.is_active);

    let Some(user) = user else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but no active user in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    user_dto(user)
}

/// Like [`get_user_from_session`] but additionally requires the admin role
///
/// # Returns
/// - `Err(Error::AuthError(AuthError::Forbidden))`: Logged in user is not an administrator
pub async fn require_admin(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let user = get_user_from_session(state, session).await?;

    if !user.is_admin() {
        return Err(Error::AuthError(AuthError::Forbidden(user.id)));
    }

    Ok(user)
}
