#[cfg(test)]
mod tests {
    use serde_json::json;
    use tablero::libs::task::{truncate_to_date, PriorityTag, Task, TaskId, TaskPayload, TaskPriority, TaskStatus};

    #[test]
    fn test_decode_full_record() {
        let task: Task = serde_json::from_value(json!({
            "id": 12,
            "title": "Fix bug",
            "description": "Crash on empty input",
            "status": "in_progress",
            "priority": "high",
            "due_date": "2024-03-15T10:00:00",
            "created_at": "2024-03-01T09:00:00",
            "updated_at": "2024-03-02T09:00:00",
            "user_id": 1
        }))
        .unwrap();

        assert_eq!(task.id, TaskId(12));
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.description(), Some("Crash on empty input"));
        assert_eq!(task.user_id, Some(1));
    }

    #[test]
    fn test_decode_minimal_record_uses_defaults() {
        let task: Task = serde_json::from_value(json!({"id": 3, "title": "Bare"})).unwrap();

        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.description(), None);
        assert_eq!(task.due_date(), None);
    }

    #[test]
    fn test_decode_null_optionals() {
        let task: Task =
            serde_json::from_value(json!({"id": 3, "title": "Nulls", "description": null, "due_date": null})).unwrap();
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_null_status_and_priority_use_defaults() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "current", "status": "review", "priority": "high"},
                {"id": 2, "title": "legacy", "status": null, "priority": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].status, TaskStatus::Review);
        assert_eq!(tasks[0].priority, TaskPriority::High);
        assert_eq!(tasks[1].status, TaskStatus::Todo);
        assert_eq!(tasks[1].priority, TaskPriority::Medium);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_value::<Task>(json!({"id": 1, "title": "x", "status": "blocked"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_optionals_read_as_absent() {
        let task = Task {
            description: Some("   ".to_string()),
            due_date: Some(String::new()),
            ..Task::new(TaskId(1), "Blank")
        };
        assert_eq!(task.description(), None);
        assert_eq!(task.due_date(), None);
    }

    #[test]
    fn test_task_id_parsing() {
        assert_eq!("42".parse::<TaskId>().unwrap(), TaskId(42));
        assert_eq!("#7".parse::<TaskId>().unwrap(), TaskId(7));
        assert!("seven".parse::<TaskId>().is_err());
        assert_eq!(TaskId(9).to_string(), "9");
    }

    #[test]
    fn test_status_order_and_titles() {
        let keys: Vec<&str> = TaskStatus::ALL.iter().map(|status| status.as_str()).collect();
        assert_eq!(keys, ["todo", "in_progress", "review", "done"]);

        let titles: Vec<&str> = TaskStatus::ALL.iter().map(|status| status.title()).collect();
        assert_eq!(titles, ["Por Hacer", "En Progreso", "Revisión", "Completado"]);
    }

    #[test]
    fn test_priority_tags() {
        assert_eq!(TaskPriority::Low.tag(), PriorityTag::Success);
        assert_eq!(TaskPriority::Medium.tag(), PriorityTag::Warning);
        assert_eq!(TaskPriority::High.tag(), PriorityTag::Danger);
        assert_eq!(TaskPriority::Urgent.tag(), PriorityTag::Dark);
    }

    #[test]
    fn test_payload_serializes_absent_fields_as_null() {
        let payload = TaskPayload {
            title: "New".to_string(),
            description: None,
            status: TaskStatus::Review,
            priority: TaskPriority::Urgent,
            due_date: None,
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "title": "New",
                "description": null,
                "status": "review",
                "priority": "urgent",
                "due_date": null
            })
        );
    }

    #[test]
    fn test_payload_from_task_keeps_writable_fields() {
        let task = Task {
            description: Some("desc".to_string()),
            due_date: Some("2024-03-15T10:00:00".to_string()),
            created_at: Some("2024-03-01".to_string()),
            ..Task::new(TaskId(5), "Keep")
        };

        let payload = TaskPayload::from(&task).with_status(TaskStatus::Done);
        assert_eq!(payload.title, "Keep");
        assert_eq!(payload.description.as_deref(), Some("desc"));
        assert_eq!(payload.due_date.as_deref(), Some("2024-03-15T10:00:00"));
        assert_eq!(payload.priority, TaskPriority::Medium);
        assert_eq!(payload.status, TaskStatus::Done);
    }

    #[test]
    fn test_truncate_to_date() {
        assert_eq!(truncate_to_date("2024-03-15T10:00:00Z"), "2024-03-15");
        assert_eq!(truncate_to_date("2024-03-15"), "2024-03-15");
        assert_eq!(truncate_to_date(""), "");
    }
}
