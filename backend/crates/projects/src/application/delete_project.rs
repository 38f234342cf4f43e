//! Delete Project Use Case

use std::sync::Arc;

use auth::Principal;

use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_object::project_id::ProjectId;
use crate::error::{ProjectError, ProjectResult};

/// Delete project use case. Owner-or-admin; soft-delete only.
pub struct DeleteProjectUseCase<P>
where
    P: ProjectRepository,
{
    project_repo: Arc<P>,
}

impl<P> DeleteProjectUseCase<P>
where
    P: ProjectRepository,
{
    pub fn new(project_repo: Arc<P>) -> Self {
        Self { project_repo }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        project_id: &ProjectId,
    ) -> ProjectResult<()> {
        let project = self
            .project_repo
            .find_by_id(project_id)
            .await?
            .filter(Project::is_active)
            .ok_or(ProjectError::ProjectNotFound)?;

        if !principal.is_admin() && project.owner_id != *principal.user_id() {
            return Err(ProjectError::Forbidden);
        }

        self.project_repo.soft_delete(project_id).await?;

        tracing::info!(project_id = %project.project_id, "Project soft-deleted");

        Ok(())
    }
}
