//! PostgreSQL Repository Implementation

use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::UserId;

use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_object::{project_id::ProjectId, project_name::ProjectName};
use crate::error::ProjectResult;

/// PostgreSQL-backed project repository
#[derive(Clone)]
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProjectRepository for PgProjectRepository {
    async fn create(&self, project: &Project) -> ProjectResult<()> {
        sqlx::query(
            r#"
            INSERT INTO projects (
                project_id,
                name,
                data,
                user_id,
                is_deleted
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(project.project_id.as_uuid())
        .bind(project.name.as_str())
        .bind(&project.data)
        .bind(project.owner_id.as_uuid())
        .bind(project.is_deleted)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, project_id: &ProjectId) -> ProjectResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT
                project_id,
                name,
                data,
                user_id,
                is_deleted
            FROM projects
            WHERE project_id = $1
            "#,
        )
        .bind(project_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProjectRow::into_project))
    }

    async fn list_active(&self, owner: Option<&UserId>) -> ProjectResult<Vec<Project>> {
        let rows = match owner {
            Some(owner_id) => {
                sqlx::query_as::<_, ProjectRow>(
                    r#"
                    SELECT
                        project_id,
                        name,
                        data,
                        user_id,
                        is_deleted
                    FROM projects
                    WHERE is_deleted = FALSE AND user_id = $1
                    ORDER BY name
                    "#,
                )
                .bind(owner_id.as_uuid())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProjectRow>(
                    r#"
                    SELECT
                        project_id,
                        name,
                        data,
                        user_id,
                        is_deleted
                    FROM projects
                    WHERE is_deleted = FALSE
                    ORDER BY name
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(ProjectRow::into_project).collect())
    }

    async fn update(&self, project: &Project) -> ProjectResult<()> {
        sqlx::query(
            r#"
            UPDATE projects SET
                name = $2,
                data = $3,
                user_id = $4,
                is_deleted = $5
            WHERE project_id = $1
            "#,
        )
        .bind(project.project_id.as_uuid())
        .bind(project.name.as_str())
        .bind(&project.data)
        .bind(project.owner_id.as_uuid())
        .bind(project.is_deleted)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn soft_delete(&self, project_id: &ProjectId) -> ProjectResult<()> {
        sqlx::query("UPDATE projects SET is_deleted = TRUE WHERE project_id = $1")
            .bind(project_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProjectRow {
    project_id: Uuid,
    name: String,
    data: String,
    user_id: Uuid,
    is_deleted: bool,
}

impl ProjectRow {
    fn into_project(self) -> Project {
        Project {
            project_id: ProjectId::from_uuid(self.project_id),
            name: ProjectName::from_db(self.name),
            data: self.data,
            owner_id: UserId::from_uuid(self.user_id),
            is_deleted: self.is_deleted,
        }
    }
}
