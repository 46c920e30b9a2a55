use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::user::UserRole, server::util::time::now};

/// A user with an already hashed password
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: UserRole,
}

/// Profile fields an administrator can change
pub struct UserChanges {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub password_hash: Option<String>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active user, storing the username lower-cased
    pub async fn create(&self, user: NewUser) -> Result<entity::app_user::Model, DbErr> {
        let now = now();

        entity::app_user::ActiveModel {
            username: ActiveValue::Set(user.username.to_lowercase()),
            email: ActiveValue::Set(user.email),
            full_name: ActiveValue::Set(user.full_name),
            password_hash: ActiveValue::Set(user.password_hash),
            role: ActiveValue::Set(user.role.as_str().to_string()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(id).one(self.db).await
    }

    /// Case-insensitive lookup by username
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Username.eq(username.trim().to_lowercase()))
            .order_by_asc(entity::app_user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .order_by_asc(entity::app_user::Column::Username)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::AppUser::find().count(self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        changes: UserChanges,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.email = ActiveValue::Set(changes.email);
        active.full_name = ActiveValue::Set(changes.full_name);
        active.role = ActiveValue::Set(changes.role.as_str().to_string());
        active.is_active = ActiveValue::Set(changes.is_active);
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn set_password_hash(
        &self,
        id: i32,
        password_hash: String,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.password_hash = ActiveValue::Set(password_hash);
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AppUser::delete_by_id(id).exec(self.db).await
    }
}
