//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::project::Project;

/// Public project record
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub name: String,
    pub data: String,
    pub user_id: Uuid,
    pub is_deleted: bool,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: *project.project_id.as_uuid(),
            name: project.name.as_str().to_string(),
            data: project.data.clone(),
            user_id: *project.owner_id.as_uuid(),
            is_deleted: project.is_deleted,
        }
    }
}

/// Create project request
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub data: String,
    /// Explicit owner; admin-only unless it names the caller
    pub user_id: Option<Uuid>,
}

/// Partial project update request
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub data: Option<String>,
    /// Ownership transfer target; admin-only
    pub user_id: Option<Uuid>,
}
