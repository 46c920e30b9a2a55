use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::db::UserModel,
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Authenticates a user by username and password
    ///
    /// Usernames match case-insensitively and inactive users are ignored. Fails with
    /// [`AuthError::WrongPassword`] when an active user has the username but none of them
    /// accepts the password, and with [`AuthError::UserNotFound`] otherwise.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        let candidates: Vec<UserModel> = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .into_iter()
            .filter(|user| user.is_active)
            .collect();

        if candidates.is_empty() {
            return Err(AuthError::UserNotFound.into());
        }

        candidates
            .into_iter()
            .find(|user| verify_password(password, &user.password_hash))
            .ok_or_else(|| AuthError::WrongPassword.into())
    }
}
