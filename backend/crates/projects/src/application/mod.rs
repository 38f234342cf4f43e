//! Application Layer
//!
//! Use cases enforcing the owner-or-admin access model.

pub mod create_project;
pub mod delete_project;
pub mod get_project;
pub mod list_projects;
pub mod update_project;

// Re-exports
pub use create_project::{CreateProjectInput, CreateProjectUseCase};
pub use delete_project::DeleteProjectUseCase;
pub use get_project::GetProjectUseCase;
pub use list_projects::ListProjectsUseCase;
pub use update_project::{UpdateProjectInput, UpdateProjectUseCase};
