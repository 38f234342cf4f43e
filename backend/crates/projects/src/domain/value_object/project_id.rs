pub use kernel::id::ProjectId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_new() {
        let project_id = ProjectId::new();
        assert_eq!(project_id.as_uuid().get_version_num(), 4); // UUIDv4
    }
}
