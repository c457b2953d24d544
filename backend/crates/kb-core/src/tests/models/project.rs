use crate::Project;

use uuid::Uuid;

#[test]
fn test_project_new_defaults() {
    let creator = Uuid::new_v4();
    let project = Project::new("Launch".to_string(), String::new(), creator);

    assert_eq!(project.created_by, creator);
    assert!(!project.is_archived);
    assert_eq!(project.created_at, project.updated_at);
    assert!(project.is_creator(creator));
    assert!(!project.is_creator(Uuid::new_v4()));
}
