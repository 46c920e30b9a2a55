use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a TestContext,
}

/// Hash a password the way the server stores it.
pub fn hash_password(password: &str) -> Result<String, TestError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| TestError::PasswordHash(e.to_string()))
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user whose password is [`TEST_PASSWORD`].
    pub async fn insert_user(
        &self,
        username: &str,
        role: &str,
    ) -> Result<entity::app_user::Model, TestError> {
        self.insert(username, role, TEST_PASSWORD, true).await
    }

    pub async fn insert_inactive_user(
        &self,
        username: &str,
    ) -> Result<entity::app_user::Model, TestError> {
        self.insert(username, "member", TEST_PASSWORD, false).await
    }

    pub async fn insert_user_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::app_user::Model, TestError> {
        self.insert(username, "member", password, true).await
    }

    async fn insert(
        &self,
        username: &str,
        role: &str,
        password: &str,
        is_active: bool,
    ) -> Result<entity::app_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                username: ActiveValue::Set(username.to_lowercase()),
                email: ActiveValue::Set(Some(format!("{}@example.no", username.to_lowercase()))),
                password_hash: ActiveValue::Set(hash_password(password)?),
                role: ActiveValue::Set(role.to_string()),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
