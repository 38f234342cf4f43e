//! List Projects Use Case

use std::sync::Arc;

use auth::Principal;

use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::error::ProjectResult;

/// List projects use case.
///
/// Listing filters rather than rejects: admins see every non-deleted
/// project, everyone else sees only their own.
pub struct ListProjectsUseCase<P>
where
    P: ProjectRepository,
{
    project_repo: Arc<P>,
}

impl<P> ListProjectsUseCase<P>
where
    P: ProjectRepository,
{
    pub fn new(project_repo: Arc<P>) -> Self {
        Self { project_repo }
    }

    pub async fn execute(&self, principal: &Principal) -> ProjectResult<Vec<Project>> {
        let owner = if principal.is_admin() {
            None
        } else {
            Some(principal.user_id())
        };

        self.project_repo.list_active(owner).await
    }
}
