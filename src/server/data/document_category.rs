use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::document::DocumentCategoryRequest, server::util::time::now};

pub struct DocumentCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentCategoryRepository<'a, C> {
    /// Creates a new instance of [`DocumentCategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        category: DocumentCategoryRequest,
    ) -> Result<entity::document_category::Model, DbErr> {
        entity::document_category::ActiveModel {
            name: ActiveValue::Set(category.name),
            description: ActiveValue::Set(category.description),
            created_at: ActiveValue::Set(now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::document_category::Model>, DbErr> {
        entity::prelude::DocumentCategory::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::document_category::Model>, DbErr> {
        entity::prelude::DocumentCategory::find()
            .order_by_asc(entity::document_category::Column::Name)
            .all(self.db)
            .await
    }

    /// Map of category ID to category name
    pub async fn name_map(&self) -> Result<HashMap<i32, String>, DbErr> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect())
    }

    pub async fn update(
        &self,
        id: i32,
        category: DocumentCategoryRequest,
    ) -> Result<Option<entity::document_category::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(category.name);
        active.description = ActiveValue::Set(category.description);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DocumentCategory::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
