//! Create Project Use Case

use std::sync::Arc;

use auth::Principal;
use auth::domain::entity::user::User;
use auth::domain::repository::UserRepository;
use kernel::id::UserId;

use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_object::project_name::ProjectName;
use crate::error::{ProjectError, ProjectResult};

/// Create project input
pub struct CreateProjectInput {
    pub name: String,
    pub data: String,
    /// Explicit owner; omitted means the caller owns the project
    pub owner_id: Option<UserId>,
}

/// Create project use case
pub struct CreateProjectUseCase<P, U>
where
    P: ProjectRepository,
    U: UserRepository,
{
    project_repo: Arc<P>,
    user_repo: Arc<U>,
}

impl<P, U> CreateProjectUseCase<P, U>
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

    /// Create a project for the caller, or (admins only) for an
    /// explicit owner. A non-admin naming themselves as owner is
    /// equivalent to omitting the field; naming anyone else is
    /// forbidden.
    pub async fn execute(
        &self,
        principal: &Principal,
        input: CreateProjectInput,
    ) -> ProjectResult<Project> {
        let name = ProjectName::new(&input.name)?;

        let owner_id = match input.owner_id {
            Some(owner_id) => {
                if !principal.is_admin() && owner_id != *principal.user_id() {
                    return Err(ProjectError::OwnerAssignmentForbidden);
                }
                owner_id
            }
            None => *principal.user_id(),
        };

        // The owner must exist and not be soft-deleted
        let owner = self
            .user_repo
            .find_by_id(&owner_id)
            .await?
            .filter(User::is_active)
            .ok_or(ProjectError::OwnerNotFound)?;

        let project = Project::new(name, input.data, owner.user_id);

        self.project_repo.create(&project).await?;

        tracing::info!(
            project_id = %project.project_id,
            owner_id = %project.owner_id,
            "Project created"
        );

        Ok(project)
    }
}
