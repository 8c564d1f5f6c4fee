use serde::Deserialize;

/// A project as returned by the tracker's REST API.
///
/// Immutable snapshot; the service sends more fields than these, which
/// serde ignores.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// A task belonging to a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub content: String,
}

/// The client's local copy of synced data.
#[derive(Debug, Default)]
pub struct Store {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_project_deserializes_and_ignores_extra_fields() {
        let body = r#"[
            {"id": "220474322", "name": "Inbox", "color": "grey", "is_favorite": false},
            {"id": "220474323", "name": "Work", "order": 2}
        ]"#;
        let projects: Vec<Project> = serde_json::from_str(body).unwrap();
        assert_eq!(
            projects,
            vec![
                Project {
                    id: "220474322".to_string(),
                    name: "Inbox".to_string(),
                },
                Project {
                    id: "220474323".to_string(),
                    name: "Work".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_task_deserializes() {
        let body = r#"{"id": "1", "project_id": "220474322", "content": "Buy milk", "priority": 4}"#;
        let task: Task = serde_json::from_str(body).unwrap();
        assert_eq!(task.project_id, "220474322");
        assert_eq!(task.content, "Buy milk");
    }
}
