//! The three independent record collections served by the API.

use std::fmt;

/// A record type with its own collection and CRUD endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Project,
    Task,
    Report,
}

impl RecordKind {
    /// Human-readable singular name, e.g. `"Project"`.
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Project => "Project",
            RecordKind::Task => "Task",
            RecordKind::Report => "Report",
        }
    }

    /// Collection (table) name, also the URL segment under `/api`.
    pub fn collection(self) -> &'static str {
        match self {
            RecordKind::Project => "projects",
            RecordKind::Task => "tasks",
            RecordKind::Report => "reports",
        }
    }

    /// Path the collection is nested under, e.g. `"/projects"`.
    pub fn route_prefix(self) -> String {
        format!("/{}", self.collection())
    }

    /// Acknowledgement returned by the delete endpoint.
    pub fn deleted_message(self) -> String {
        format!("{} deleted", self.label())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleted_messages() {
        assert_eq!(RecordKind::Project.deleted_message(), "Project deleted");
        assert_eq!(RecordKind::Task.deleted_message(), "Task deleted");
        assert_eq!(RecordKind::Report.deleted_message(), "Report deleted");
    }

    #[test]
    fn collection_names() {
        assert_eq!(RecordKind::Project.collection(), "projects");
        assert_eq!(RecordKind::Task.collection(), "tasks");
        assert_eq!(RecordKind::Report.collection(), "reports");
    }

    #[test]
    fn route_prefix_is_collection() {
        assert_eq!(RecordKind::Report.route_prefix(), "/reports");
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(RecordKind::Task.to_string(), "Task");
    }
}
