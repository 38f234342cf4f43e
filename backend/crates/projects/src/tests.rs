//! Unit tests for the projects crate
//!
//! Use cases run against in-memory repositories; the auth crate's
//! `Principal` is built directly, since authorization decisions only
//! depend on the resolved user.

use std::sync::{Arc, Mutex};

use auth::Principal;
use auth::domain::entity::user::User;
use auth::domain::repository::UserRepository;
use auth::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use auth::{AuthResult, models::UserId};

use crate::application::{
    CreateProjectInput, CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase,
    ListProjectsUseCase, UpdateProjectInput, UpdateProjectUseCase,
};
use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_object::project_id::ProjectId;
use crate::error::{ProjectError, ProjectResult};

// ============================================================================
// In-memory repositories
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryProjectRepository {
    projects: Arc<Mutex<Vec<Project>>>,
}

impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, project: &Project) -> ProjectResult<()> {
        self.projects.lock().unwrap().push(project.clone());
        Ok(())
    }

    async fn find_by_id(&self, project_id: &ProjectId) -> ProjectResult<Option<Project>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.project_id == *project_id)
            .cloned())
    }

    async fn list_active(&self, owner: Option<&UserId>) -> ProjectResult<Vec<Project>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !p.is_deleted)
            .filter(|p| owner.is_none_or(|owner_id| p.owner_id == *owner_id))
            .cloned()
            .collect())
    }

    async fn update(&self, project: &Project) -> ProjectResult<()> {
        let mut projects = self.projects.lock().unwrap();
        if let Some(slot) = projects
            .iter_mut()
            .find(|p| p.project_id == project.project_id)
        {
            *slot = project.clone();
        }
        Ok(())
    }

    async fn soft_delete(&self, project_id: &ProjectId) -> ProjectResult<()> {
        let mut projects = self.projects.lock().unwrap();
        if let Some(project) = projects.iter_mut().find(|p| p.project_id == *project_id) {
            project.is_deleted = true;
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == *user_id)
            .cloned())
    }

    async fn find_active_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_name == *user_name && !u.is_deleted)
            .cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_name == *user_name)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn find_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_name == *user_name || u.email == *email)
            .cloned())
    }

    async fn find_protected_admin(&self) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.protected_admin)
            .cloned())
    }

    async fn list_active(&self) -> AuthResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| !u.is_deleted)
            .cloned()
            .collect())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(slot) = users.iter_mut().find(|u| u.user_id == user.user_id) {
            *slot = user.clone();
        }
        Ok(())
    }

    async fn soft_delete(&self, user_id: &UserId) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.user_id == *user_id) {
            user.is_deleted = true;
        }
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

struct Fixture {
    projects: Arc<InMemoryProjectRepository>,
    users: Arc<InMemoryUserRepository>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            projects: Arc::new(InMemoryProjectRepository::default()),
            users: Arc::new(InMemoryUserRepository::default()),
        }
    }

    async fn seed_user(&self, username: &str, admin: bool) -> User {
        let user = User::new(
            UserName::new(username).unwrap(),
            Email::new(format!("{username}@x.com")).unwrap(),
            UserPassword::from_raw(&RawPassword::unchecked("longenough1".to_string())).unwrap(),
            admin,
        );
        self.users.create(&user).await.unwrap();
        user
    }

    async fn seed_project(&self, principal: &Principal, name: &str) -> Project {
        CreateProjectUseCase::new(self.projects.clone(), self.users.clone())
            .execute(
                principal,
                CreateProjectInput {
                    name: name.to_string(),
                    data: String::new(),
                    owner_id: None,
                },
            )
            .await
            .unwrap()
    }
}

fn principal(user: &User) -> Principal {
    Principal { user: user.clone() }
}

// ============================================================================
// Listing
// ============================================================================

mod listing_tests {
    use super::*;

    #[tokio::test]
    async fn non_admin_never_sees_foreign_projects() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let bob = fx.seed_user("bob", false).await;
        let p1 = fx.seed_project(&principal(&alice), "p1").await;

        let use_case = ListProjectsUseCase::new(fx.projects.clone());

        // p1 exists and is not deleted, yet bob sees nothing
        let bobs_view = use_case.execute(&principal(&bob)).await.unwrap();
        assert!(bobs_view.is_empty());

        let alices_view = use_case.execute(&principal(&alice)).await.unwrap();
        assert_eq!(alices_view.len(), 1);
        assert_eq!(alices_view[0].project_id, p1.project_id);
    }

    #[tokio::test]
    async fn admin_sees_all_non_deleted_projects() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let bob = fx.seed_user("bob", false).await;
        let root = fx.seed_user("root", true).await;
        fx.seed_project(&principal(&alice), "p1").await;
        let p2 = fx.seed_project(&principal(&bob), "p2").await;

        DeleteProjectUseCase::new(fx.projects.clone())
            .execute(&principal(&bob), &p2.project_id)
            .await
            .unwrap();

        let all = ListProjectsUseCase::new(fx.projects.clone())
            .execute(&principal(&root))
            .await
            .unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name.as_str(), "p1");
    }
}

// ============================================================================
// Owner-or-admin access
// ============================================================================

mod access_tests {
    use super::*;

    #[tokio::test]
    async fn cross_tenant_get_is_forbidden() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let bob = fx.seed_user("bob", false).await;
        let root = fx.seed_user("root", true).await;
        let p1 = fx.seed_project(&principal(&alice), "p1").await;

        let use_case = GetProjectUseCase::new(fx.projects.clone());

        let err = use_case
            .execute(&principal(&bob), &p1.project_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Forbidden));

        // Owner and admin both succeed
        use_case
            .execute(&principal(&alice), &p1.project_id)
            .await
            .unwrap();
        use_case
            .execute(&principal(&root), &p1.project_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn cross_tenant_update_and_delete_are_forbidden() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let bob = fx.seed_user("bob", false).await;
        let p1 = fx.seed_project(&principal(&alice), "p1").await;

        let err = UpdateProjectUseCase::new(fx.projects.clone(), fx.users.clone())
            .execute(
                &principal(&bob),
                &p1.project_id,
                UpdateProjectInput {
                    name: Some("stolen".to_string()),
                    ..UpdateProjectInput::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Forbidden));

        let err = DeleteProjectUseCase::new(fx.projects.clone())
            .execute(&principal(&bob), &p1.project_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Forbidden));
    }

    #[tokio::test]
    async fn soft_deleted_project_reads_as_missing() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let p1 = fx.seed_project(&principal(&alice), "p1").await;

        DeleteProjectUseCase::new(fx.projects.clone())
            .execute(&principal(&alice), &p1.project_id)
            .await
            .unwrap();

        let err = GetProjectUseCase::new(fx.projects.clone())
            .execute(&principal(&alice), &p1.project_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::ProjectNotFound));

        // Deleting again also reads as missing
        let err = DeleteProjectUseCase::new(fx.projects.clone())
            .execute(&principal(&alice), &p1.project_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::ProjectNotFound));
    }
}

// ============================================================================
// Ownership assignment and transfer
// ============================================================================

mod ownership_tests {
    use super::*;

    #[tokio::test]
    async fn non_admin_cannot_create_for_someone_else() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let bob = fx.seed_user("bob", false).await;

        let err = CreateProjectUseCase::new(fx.projects.clone(), fx.users.clone())
            .execute(
                &principal(&alice),
                CreateProjectInput {
                    name: "p1".to_string(),
                    data: String::new(),
                    owner_id: Some(bob.user_id),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::OwnerAssignmentForbidden));
    }

    #[tokio::test]
    async fn non_admin_naming_themselves_is_allowed() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;

        let project = CreateProjectUseCase::new(fx.projects.clone(), fx.users.clone())
            .execute(
                &principal(&alice),
                CreateProjectInput {
                    name: "p1".to_string(),
                    data: String::new(),
                    owner_id: Some(alice.user_id),
                },
            )
            .await
            .unwrap();

        assert_eq!(project.owner_id, alice.user_id);
    }

    #[tokio::test]
    async fn admin_creates_for_another_user() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let root = fx.seed_user("root", true).await;

        let project = CreateProjectUseCase::new(fx.projects.clone(), fx.users.clone())
            .execute(
                &principal(&root),
                CreateProjectInput {
                    name: "p1".to_string(),
                    data: "payload".to_string(),
                    owner_id: Some(alice.user_id),
                },
            )
            .await
            .unwrap();

        assert_eq!(project.owner_id, alice.user_id);
    }

    #[tokio::test]
    async fn create_for_deleted_owner_is_not_found() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let root = fx.seed_user("root", true).await;
        fx.users.soft_delete(&alice.user_id).await.unwrap();

        let err = CreateProjectUseCase::new(fx.projects.clone(), fx.users.clone())
            .execute(
                &principal(&root),
                CreateProjectInput {
                    name: "p1".to_string(),
                    data: String::new(),
                    owner_id: Some(alice.user_id),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::OwnerNotFound));
    }

    #[tokio::test]
    async fn transfer_is_admin_only() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let bob = fx.seed_user("bob", false).await;
        let p1 = fx.seed_project(&principal(&alice), "p1").await;

        // Even the owner cannot transfer their own project
        let err = UpdateProjectUseCase::new(fx.projects.clone(), fx.users.clone())
            .execute(
                &principal(&alice),
                &p1.project_id,
                UpdateProjectInput {
                    owner_id: Some(bob.user_id),
                    ..UpdateProjectInput::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::OwnerAssignmentForbidden));
    }

    #[tokio::test]
    async fn admin_transfer_requires_live_target() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let bob = fx.seed_user("bob", false).await;
        let root = fx.seed_user("root", true).await;
        let p1 = fx.seed_project(&principal(&alice), "p1").await;

        let use_case = UpdateProjectUseCase::new(fx.projects.clone(), fx.users.clone());

        let transferred = use_case
            .execute(
                &principal(&root),
                &p1.project_id,
                UpdateProjectInput {
                    owner_id: Some(bob.user_id),
                    ..UpdateProjectInput::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(transferred.owner_id, bob.user_id);

        fx.users.soft_delete(&alice.user_id).await.unwrap();

        let err = use_case
            .execute(
                &principal(&root),
                &p1.project_id,
                UpdateProjectInput {
                    owner_id: Some(alice.user_id),
                    ..UpdateProjectInput::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::OwnerNotFound));
    }

    #[tokio::test]
    async fn owner_updates_name_and_data() {
        let fx = Fixture::new();
        let alice = fx.seed_user("alice", false).await;
        let p1 = fx.seed_project(&principal(&alice), "p1").await;

        let updated = UpdateProjectUseCase::new(fx.projects.clone(), fx.users.clone())
            .execute(
                &principal(&alice),
                &p1.project_id,
                UpdateProjectInput {
                    name: Some("renamed".to_string()),
                    data: Some("fresh payload".to_string()),
                    ..UpdateProjectInput::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name.as_str(), "renamed");
        assert_eq!(updated.data, "fresh payload");
        assert_eq!(updated.owner_id, alice.user_id);
    }
}
