use crate::{Task, TaskPriority};

use uuid::Uuid;

#[test]
fn test_task_new_defaults() {
    let column_id = Uuid::new_v4();
    let creator = Uuid::new_v4();
    let task = Task::new(column_id, "Write docs".to_string(), creator, 3);

    assert_eq!(task.column_id, column_id);
    assert_eq!(task.position, 3);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert!(task.description.is_empty());
    assert!(task.due_date.is_none());
    assert!(!task.is_assigned());
}
