//! Project Entity

use crate::domain::value_object::{project_id::ProjectId, project_name::ProjectName};
use kernel::id::UserId;

/// Project entity: a named opaque text blob owned by exactly one user.
///
/// The `data` payload is never parsed by this system. Deletion is a
/// soft-delete flag; rows are never physically removed.
#[derive(Debug, Clone)]
pub struct Project {
    /// Internal UUID identifier, immutable
    pub project_id: ProjectId,
    /// Display name, 1-255 characters
    pub name: ProjectName,
    /// Opaque payload
    pub data: String,
    /// Owning user; must reference a non-deleted user at creation and
    /// at every reassignment
    pub owner_id: UserId,
    /// Soft-delete visibility flag
    pub is_deleted: bool,
}

impl Project {
    /// Create a new project
    pub fn new(name: ProjectName, data: String, owner_id: UserId) -> Self {
        Self {
            project_id: ProjectId::new(),
            name,
            data,
            owner_id,
            is_deleted: false,
        }
    }

    /// Whether this project is visible through the public contract
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    pub fn rename(&mut self, name: ProjectName) {
        self.name = name;
    }

    pub fn set_data(&mut self, data: String) {
        self.data = data;
    }

    /// Reassign ownership. Callers must have verified the target user
    /// exists and is not soft-deleted.
    pub fn transfer_to(&mut self, owner_id: UserId) {
        self.owner_id = owner_id;
    }
}
