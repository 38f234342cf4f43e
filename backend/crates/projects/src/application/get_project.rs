//! Get Project Use Case

use std::sync::Arc;

use auth::Principal;

use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_object::project_id::ProjectId;
use crate::error::{ProjectError, ProjectResult};

/// Get project use case. Owner-or-admin; soft-deleted projects read
/// as missing.
pub struct GetProjectUseCase<P>
where
    P: ProjectRepository,
{
    project_repo: Arc<P>,
}

impl<P> GetProjectUseCase<P>
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
    ) -> ProjectResult<Project> {
        let project = self
            .project_repo
            .find_by_id(project_id)
            .await?
            .filter(Project::is_active)
            .ok_or(ProjectError::ProjectNotFound)?;

        if !principal.is_admin() && project.owner_id != *principal.user_id() {
            return Err(ProjectError::Forbidden);
        }

        Ok(project)
    }
}
