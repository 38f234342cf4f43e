//! Update Project Use Case

use std::sync::Arc;

use auth::Principal;
use auth::domain::entity::user::User;
use auth::domain::repository::UserRepository;
use kernel::id::UserId;

use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_object::{project_id::ProjectId, project_name::ProjectName};
use crate::error::{ProjectError, ProjectResult};

/// Update project input; `None` leaves a field unchanged
#[derive(Default)]
pub struct UpdateProjectInput {
    pub name: Option<String>,
    pub data: Option<String>,
    pub owner_id: Option<UserId>,
}

/// Update project use case
pub struct UpdateProjectUseCase<P, U>
where
    P: ProjectRepository,
    U: UserRepository,
{
    project_repo: Arc<P>,
    user_repo: Arc<U>,
}

impl<P, U> UpdateProjectUseCase<P, U>
where
    P: ProjectRepository,
    U: UserRepository,
{
    pub fn new(project_repo: Arc<P>, user_repo: Arc<U>) -> Self {
        Self {
            project_repo,
            user_repo,
        }
    }

    /// Partial update. Name and data follow the owner-or-admin rule;
    /// ownership transfer is admin-only and requires a live target.
    pub async fn execute(
        &self,
        principal: &Principal,
        project_id: &ProjectId,
        input: UpdateProjectInput,
    ) -> ProjectResult<Project> {
        let mut project = self
            .project_repo
            .find_by_id(project_id)
            .await?
            .filter(Project::is_active)
            .ok_or(ProjectError::ProjectNotFound)?;

        if !principal.is_admin() && project.owner_id != *principal.user_id() {
            return Err(ProjectError::Forbidden);
        }

        if let Some(name) = input.name {
            project.rename(ProjectName::new(&name)?);
        }

        if let Some(data) = input.data {
            project.set_data(data);
        }

        if let Some(owner_id) = input.owner_id {
            if !principal.is_admin() {
                return Err(ProjectError::OwnerAssignmentForbidden);
            }
            let owner = self.find_live_owner(&owner_id).await?;
            project.transfer_to(owner.user_id);
        }

        self.project_repo.update(&project).await?;

        tracing::info!(project_id = %project.project_id, "Project updated");

        Ok(project)
    }

    async fn find_live_owner(&self, owner_id: &UserId) -> ProjectResult<User> {
        self.user_repo
            .find_by_id(owner_id)
            .await?
            .filter(User::is_active)
            .ok_or(ProjectError::OwnerNotFound)
    }
}
