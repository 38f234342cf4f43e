//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use auth::Principal;
use auth::domain::repository::UserRepository;
use kernel::id::UserId;

use crate::application::{
    CreateProjectInput, CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase,
    ListProjectsUseCase, UpdateProjectInput, UpdateProjectUseCase,
};
use crate::domain::repository::ProjectRepository;
use crate::domain::value_object::project_id::ProjectId;
use crate::error::ProjectResult;
use crate::presentation::dto::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};

/// Shared state for project handlers
#[derive(Clone)]
pub struct ProjectAppState<P, U>
where
    P: ProjectRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub projects: Arc<P>,
    pub users: Arc<U>,
}

/// GET /projects
pub async fn list_projects<P, U>(
    State(state): State<ProjectAppState<P, U>>,
    Extension(principal): Extension<Principal>,
) -> ProjectResult<Json<Vec<ProjectResponse>>>
where
    P: ProjectRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let projects = ListProjectsUseCase::new(state.projects.clone())
        .execute(&principal)
        .await?;

    Ok(Json(projects.iter().map(ProjectResponse::from).collect()))
}

/// GET /projects/{project_id}
pub async fn get_project<P, U>(
    State(state): State<ProjectAppState<P, U>>,
    Extension(principal): Extension<Principal>,
    Path(project_id): Path<Uuid>,
) -> ProjectResult<Json<ProjectResponse>>
where
    P: ProjectRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let project = GetProjectUseCase::new(state.projects.clone())
        .execute(&principal, &ProjectId::from_uuid(project_id))
        .await?;

    Ok(Json(ProjectResponse::from(&project)))
}

/// POST /projects
pub async fn create_project<P, U>(
    State(state): State<ProjectAppState<P, U>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<CreateProjectRequest>,
) -> ProjectResult<(StatusCode, Json<ProjectResponse>)>
where
    P: ProjectRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateProjectUseCase::new(state.projects.clone(), state.users.clone());

    let project = use_case
        .execute(
            &principal,
            CreateProjectInput {
                name: req.name,
                data: req.data,
                owner_id: req.user_id.map(UserId::from_uuid),
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(&project))))
}

/// PATCH /projects/{project_id}
pub async fn update_project<P, U>(
    State(state): State<ProjectAppState<P, U>>,
    Extension(principal): Extension<Principal>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> ProjectResult<Json<ProjectResponse>>
where
    P: ProjectRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProjectUseCase::new(state.projects.clone(), state.users.clone());

    let project = use_case
        .execute(
            &principal,
            &ProjectId::from_uuid(project_id),
            UpdateProjectInput {
                name: req.name,
                data: req.data,
                owner_id: req.user_id.map(UserId::from_uuid),
            },
        )
        .await?;

    Ok(Json(ProjectResponse::from(&project)))
}

/// DELETE /projects/{project_id}
pub async fn delete_project<P, U>(
    State(state): State<ProjectAppState<P, U>>,
    Extension(principal): Extension<Principal>,
    Path(project_id): Path<Uuid>,
) -> ProjectResult<StatusCode>
where
    P: ProjectRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    DeleteProjectUseCase::new(state.projects.clone())
        .execute(&principal, &ProjectId::from_uuid(project_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
