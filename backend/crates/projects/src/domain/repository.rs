//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::project::Project;
use crate::domain::value_object::project_id::ProjectId;
use crate::error::ProjectResult;
use kernel::id::UserId;

/// Project repository trait
#[trait_variant::make(ProjectRepository: Send)]
pub trait LocalProjectRepository {
    /// Create a new project
    async fn create(&self, project: &Project) -> ProjectResult<()>;

    /// Find project by ID, whether soft-deleted or not
    async fn find_by_id(&self, project_id: &ProjectId) -> ProjectResult<Option<Project>>;

    /// List non-deleted projects, optionally restricted to one owner
    async fn list_active(&self, owner: Option<&UserId>) -> ProjectResult<Vec<Project>>;

    /// Update project
    async fn update(&self, project: &Project) -> ProjectResult<()>;

    /// Soft-delete a project
    async fn soft_delete(&self, project_id: &ProjectId) -> ProjectResult<()>;
}
