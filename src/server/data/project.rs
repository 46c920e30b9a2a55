use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::project::ProjectRequest, server::util::time::now};

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, project: ProjectRequest) -> Result<entity::project::Model, DbErr> {
        let now = now();

        entity::project::ActiveModel {
            farm_id: ActiveValue::Set(project.farm_id),
            name: ActiveValue::Set(project.name),
            description: ActiveValue::Set(project.description),
            status: ActiveValue::Set(project.status.as_str().to_string()),
            start_date: ActiveValue::Set(project.start_date),
            end_date: ActiveValue::Set(project.end_date),
            budget_minor: ActiveValue::Set(project.budget_minor),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(id).one(self.db).await
    }

    /// Projects, most recently created first
    pub async fn list(&self) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .order_by_desc(entity::project::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        project: ProjectRequest,
    ) -> Result<Option<entity::project::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.farm_id = ActiveValue::Set(project.farm_id);
        active.name = ActiveValue::Set(project.name);
        active.description = ActiveValue::Set(project.description);
        active.status = ActiveValue::Set(project.status.as_str().to_string());
        active.start_date = ActiveValue::Set(project.start_date);
        active.end_date = ActiveValue::Set(project.end_date);
        active.budget_minor = ActiveValue::Set(project.budget_minor);
        active.updated_at = ActiveValue::Set(now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Project::delete_by_id(id).exec(self.db).await
    }
}
