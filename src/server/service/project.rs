use sea_orm::DatabaseConnection;

use crate::{
    model::project::{ProjectDto, ProjectRequest},
    server::{
        data::{farm::FarmRepository, project::ProjectRepository},
        error::Error,
        model::db::ProjectModel,
        service::validate,
    },
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ProjectDto>, Error> {
        let farm_names = FarmRepository::new(self.db).name_map().await?;

        ProjectRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(|project| {
                let farm_name = farm_names.get(&project.farm_id).cloned();
                Self::dto(project, farm_name)
            })
            .collect()
    }

    pub async fn get(&self, id: i32) -> Result<ProjectDto, Error> {
        let project = ProjectRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Project", id))?;

        self.to_dto(project).await
    }

    pub async fn create(&self, project: ProjectRequest) -> Result<ProjectDto, Error> {
        let project = Self::validate(project)?;
        let created = ProjectRepository::new(self.db).create(project).await?;

        self.to_dto(created).await
    }

    pub async fn update(&self, id: i32, project: ProjectRequest) -> Result<ProjectDto, Error> {
        let project = Self::validate(project)?;
        let updated = ProjectRepository::new(self.db)
            .update(id, project)
            .await?
            .ok_or_else(|| Error::not_found("Project", id))?;

        self.to_dto(updated).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = ProjectRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Project", id));
        }

        Ok(())
    }

    async fn to_dto(&self, project: ProjectModel) -> Result<ProjectDto, Error> {
        let farm_name = FarmRepository::new(self.db)
            .get(project.farm_id)
            .await?
            .map(|farm| farm.name);

        Self::dto(project, farm_name)
    }

    fn dto(project: ProjectModel, farm_name: Option<String>) -> Result<ProjectDto, Error> {
        Ok(ProjectDto {
            id: project.id,
            farm_id: project.farm_id,
            farm_name,
            status: project.status.parse()?,
            name: project.name,
            description: project.description,
            start_date: project.start_date,
            end_date: project.end_date,
            budget_minor: project.budget_minor,
            created_at: project.created_at,
            updated_at: project.updated_at,
        })
    }

    fn validate(project: ProjectRequest) -> Result<ProjectRequest, Error> {
        validate::date_range(project.start_date, project.end_date)?;
        validate::non_negative("Budget", project.budget_minor)?;

        Ok(ProjectRequest {
            name: validate::required("Project name", &project.name)?,
            description: validate::optional(project.description),
            ..project
        })
    }
}
