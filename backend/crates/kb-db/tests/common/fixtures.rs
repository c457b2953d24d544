use kb_core::{Board, Column, Project, ProjectMember, Task};
use kb_db::{BoardRepository, ColumnRepository, ProjectMemberRepository, ProjectRepository, TaskRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

pub async fn seed_project(pool: &SqlitePool, owner: Uuid) -> Project {
    let project = Project::new("Test Project".to_string(), String::new(), owner);
    ProjectRepository::create(pool, &project)
        .await
        .expect("Failed to create project");
    project
}

pub async fn seed_member(pool: &SqlitePool, project_id: Uuid, user_id: Uuid) {
    ProjectMemberRepository::add(pool, &ProjectMember::new(project_id, user_id))
        .await
        .expect("Failed to add member");
}

pub async fn seed_board(pool: &SqlitePool, project_id: Uuid) -> Board {
    let board = Board::new(project_id, "Test Board".to_string(), String::new());
    BoardRepository::create(pool, &board)
        .await
        .expect("Failed to create board");
    board
}

/// `count` columns at positions `0..count`
pub async fn seed_columns(pool: &SqlitePool, board_id: Uuid, count: usize) -> Vec<Column> {
    let mut columns = Vec::with_capacity(count);
    for position in 0..count {
        let column = Column::new(board_id, format!("Column {position}"), position as i64);
        ColumnRepository::create(pool, &column)
            .await
            .expect("Failed to create column");
        columns.push(column);
    }
    columns
}

/// `count` tasks at positions `0..count`
pub async fn seed_tasks(pool: &SqlitePool, column_id: Uuid, owner: Uuid, count: usize) -> Vec<Task> {
    let mut tasks = Vec::with_capacity(count);
    for position in 0..count {
        let task = Task::new(column_id, format!("Task {position}"), owner, position as i64);
        TaskRepository::create(pool, &task)
            .await
            .expect("Failed to create task");
        tasks.push(task);
    }
    tasks
}

/// Column ids in display order with their positions
pub async fn column_positions(pool: &SqlitePool, board_id: Uuid) -> Vec<(Uuid, i64)> {
    ColumnRepository::find_by_board(pool, board_id)
        .await
        .expect("Failed to load columns")
        .into_iter()
        .map(|c| (c.id, c.position))
        .collect()
}

/// Task ids in display order with their positions
pub async fn task_positions(pool: &SqlitePool, column_id: Uuid) -> Vec<(Uuid, i64)> {
    TaskRepository::find_by_column(pool, column_id)
        .await
        .expect("Failed to load tasks")
        .into_iter()
        .map(|t| (t.id, t.position))
        .collect()
}

pub fn positions(rows: &[(Uuid, i64)]) -> Vec<i64> {
    rows.iter().map(|(_, p)| *p).collect()
}
