pub mod access_repository;
pub mod attachment_repository;
pub mod board_repository;
pub mod column_repository;
pub mod comment_repository;
pub mod project_member_repository;
pub mod project_repository;
pub mod subtask_repository;
pub mod tag_repository;
pub mod task_repository;
pub mod task_tag_repository;
pub mod user_repository;

mod row;
