use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::document::DocumentUpdateRequest, server::util::time::now};

/// Metadata for a document blob already written to storage
pub struct NewDocument {
    pub title: String,
    pub farm_id: Option<i32>,
    pub category_id: Option<i32>,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub storage_key: String,
    pub uploaded_by: Option<i32>,
}

pub struct DocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentRepository<'a, C> {
    /// Creates a new instance of [`DocumentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, document: NewDocument) -> Result<entity::document::Model, DbErr> {
        let now = now();

        entity::document::ActiveModel {
            farm_id: ActiveValue::Set(document.farm_id),
            category_id: ActiveValue::Set(document.category_id),
            title: ActiveValue::Set(document.title),
            file_name: ActiveValue::Set(document.file_name),
            content_type: ActiveValue::Set(document.content_type),
            size_bytes: ActiveValue::Set(document.size_bytes),
            storage_key: ActiveValue::Set(document.storage_key),
            uploaded_by: ActiveValue::Set(document.uploaded_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::document::Model>, DbErr> {
        entity::prelude::Document::find_by_id(id).one(self.db).await
    }

    /// Documents, most recently uploaded first
    pub async fn list(&self) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates title, farm and category; the stored file never changes
    pub async fn update(
        &self,
        id: i32,
        document: DocumentUpdateRequest,
    ) -> Result<Option<entity::document::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.title = ActiveValue::Set(document.title);
        active.farm_id = ActiveValue::Set(document.farm_id);
        active.category_id = ActiveValue::Set(document.category_id);
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Document::delete_by_id(id).exec(self.db).await
    }
}
