use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserRequest, PasswordResetDto, UpdateUserRequest, UserDto, UserRole},
    server::{
        data::user::{NewUser, UserChanges, UserRepository},
        error::Error,
        model::db::UserModel,
        service::validate,
        util::{
            functions::{FunctionsClient, PasswordEmail},
            password::{generate_temporary_password, hash_password},
        },
    },
};

/// Minimum length of a chosen password
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn user_dto(user: UserModel) -> Result<UserDto, Error> {
    Ok(UserDto {
        id: user.id,
        role: user.role.parse()?,
        username: user.username,
        email: user.email,
        full_name: user.full_name,
        is_active: user.is_active,
        created_at: user.created_at,
    })
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        UserRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(user_dto)
            .collect()
    }

    pub async fn get(&self, id: i32) -> Result<UserDto, Error> {
        user_dto(self.find(id).await?)
    }

    pub async fn create(&self, user: CreateUserRequest) -> Result<UserDto, Error> {
        let username = validate::required("Username", &user.username)?;
        if username.chars().any(char::is_whitespace) {
            return Err(Error::validation("Username must not contain whitespace"));
        }
        let password_hash = hash_password(Self::check_password(&user.password)?)?;

        let created = UserRepository::new(self.db)
            .create(NewUser {
                username,
                password_hash,
                email: validate::optional(user.email),
                full_name: validate::optional(user.full_name),
                role: user.role,
            })
            .await?;

        tracing::info!("Created user {} ({})", created.username, created.role);

        user_dto(created)
    }

    /// Updates a user's profile; the password only changes when a new one is given
    pub async fn update(&self, id: i32, user: UpdateUserRequest) -> Result<UserDto, Error> {
        let password_hash = match validate::optional(user.password) {
            Some(password) => Some(hash_password(Self::check_password(&password)?)?),
            None => None,
        };

        let updated = UserRepository::new(self.db)
            .update(
                id,
                UserChanges {
                    email: validate::optional(user.email),
                    full_name: validate::optional(user.full_name),
                    role: user.role,
                    is_active: user.is_active,
                    password_hash,
                },
            )
            .await?
            .ok_or_else(|| Error::not_found("User", id))?;

        user_dto(updated)
    }

    /// Deletes a user; administrators can't delete their own account
    pub async fn delete(&self, id: i32, acting_user_id: i32) -> Result<(), Error> {
        if id == acting_user_id {
            return Err(Error::validation("You can't delete your own account"));
        }

        let result = UserRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("User", id));
        }

        Ok(())
    }

    /// Emails the user a fresh temporary password, then stores its hash
    ///
    /// The stored password only changes once the email went out, so a failed email never
    /// locks the user out.
    pub async fn reset_password(
        &self,
        id: i32,
        functions: &FunctionsClient,
    ) -> Result<PasswordResetDto, Error> {
        let user = self.find(id).await?;
        let Some(email) = user.email.clone() else {
            return Err(Error::validation(format!(
                "User {} has no email address",
                user.username
            )));
        };

        let temporary_password = generate_temporary_password();
        let password_hash = hash_password(&temporary_password)?;

        functions
            .send_password_email(&PasswordEmail {
                to: email.clone(),
                username: user.username.clone(),
                temporary_password,
            })
            .await?;

        UserRepository::new(self.db)
            .set_password_hash(id, password_hash)
            .await?
            .ok_or_else(|| Error::not_found("User", id))?;

        tracing::info!("Password reset for user {}", user.username);

        Ok(PasswordResetDto { user_id: id, email })
    }

    /// Creates the first administrator when no user exists yet
    ///
    /// Returns `None` when users already exist.
    pub async fn bootstrap_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserModel>, Error> {
        let repo = UserRepository::new(self.db);
        if repo.count().await? > 0 {
            return Ok(None);
        }

        let admin = repo
            .create(NewUser {
                username: validate::required("Username", username)?,
                password_hash: hash_password(Self::check_password(password)?)?,
                email: None,
                full_name: None,
                role: UserRole::Admin,
            })
            .await?;

        Ok(Some(admin))
    }

    async fn find(&self, id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("User", id))
    }

    fn check_password(password: &str) -> Result<&str, Error> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(Error::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use allevapp_test_utils::prelude::*;
    use entity::prelude::*;

    use super::*;
    use crate::server::{
        error::domain::DomainError,
        service::{auth::AuthService, retry::RetryContext},
        util::functions::SEND_PASSWORD_EMAIL,
    };

    fn functions(test: &TestContext) -> FunctionsClient {
        FunctionsClient::builder(&test.functions_url(), TEST_FUNCTIONS_API_KEY)
            .retry(RetryContext::new().with_initial_backoff(Duration::from_millis(1)))
            .build()
            .unwrap()
    }

    fn create_request(username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: Some(format!("{}@example.no", username.to_lowercase())),
            full_name: None,
            role: UserRole::Member,
        }
    }

    mod create {
        use super::*;

        /// Expect the stored password to be a hash the login accepts
        #[tokio::test]
        async fn stores_hashed_password() -> Result<(), TestError> {
            let test = TestBuilder::new().with_table(AppUser).build().await?;
            let service = UserService::new(&test.db);

            let user = service
                .create(create_request("Kari", "longenough"))
                .await
                .unwrap();
            let stored = UserRepository::new(&test.db).get(user.id).await?.unwrap();

            assert_eq!(user.username, "kari");
            assert_ne!(stored.password_hash, "longenough");
            assert!(AuthService::new(&test.db)
                .authenticate("KARI", "longenough")
                .await
                .is_ok());

            Ok(())
        }

        /// Expect short passwords to be rejected
        #[tokio::test]
        async fn rejects_short_password() -> Result<(), TestError> {
            let test = TestBuilder::new().with_table(AppUser).build().await?;
            let service = UserService::new(&test.db);

            let result = service.create(create_request("kari", "short")).await;

            assert!(matches!(
                result,
                Err(Error::DomainError(DomainError::Validation(_)))
            ));

            Ok(())
        }
    }

    mod reset_password {
        use super::*;

        /// Expect the old password to stop working once the email was sent
        #[tokio::test]
        async fn replaces_password() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(AppUser)
                .with_user("kari", "member")
                .with_function_endpoint(SEND_PASSWORD_EMAIL, 200, 1)
                .build()
                .await?;

            let reset = UserService::new(&test.db)
                .reset_password(1, &functions(&test))
                .await
                .unwrap();
            let login = AuthService::new(&test.db)
                .authenticate("kari", TEST_PASSWORD)
                .await;

            assert_eq!(reset.email, "kari@example.no");
            assert!(login.is_err());
            test.assert_mocks();

            Ok(())
        }

        /// Expect the password to stay unchanged when the email is rejected
        #[tokio::test]
        async fn keeps_password_when_email_fails() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(AppUser)
                .with_user("kari", "member")
                .with_function_endpoint(SEND_PASSWORD_EMAIL, 400, 1)
                .build()
                .await?;

            let result = UserService::new(&test.db)
                .reset_password(1, &functions(&test))
                .await;
            let login = AuthService::new(&test.db)
                .authenticate("kari", TEST_PASSWORD)
                .await;

            assert!(matches!(result, Err(Error::FunctionError(_))));
            assert!(login.is_ok());
            test.assert_mocks();

            Ok(())
        }
    }

    mod bootstrap_admin {
        use super::*;

        /// Expect an admin to be created only while no users exist
        #[tokio::test]
        async fn only_when_empty() -> Result<(), TestError> {
            let test = TestBuilder::new().with_table(AppUser).build().await?;
            let service = UserService::new(&test.db);

            let first = service.bootstrap_admin("admin", "changeme123").await.unwrap();
            let second = service.bootstrap_admin("root", "changeme123").await.unwrap();

            assert_eq!(first.map(|user| user.role), Some("admin".to_string()));
            assert!(second.is_none());

            Ok(())
        }
    }

    /// Expect an administrator to be unable to delete their own account
    #[tokio::test]
    async fn cannot_delete_self() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(AppUser)
            .with_user("admin", "admin")
            .build()
            .await?;

        let result = UserService::new(&test.db).delete(1, 1).await;

        assert!(matches!(
            result,
            Err(Error::DomainError(DomainError::Validation(_)))
        ));

        Ok(())
    }
}
