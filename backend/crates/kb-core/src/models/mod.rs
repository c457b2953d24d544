pub mod attachment;
pub mod board;
pub mod column;
pub mod comment;
pub mod project;
pub mod project_member;
pub mod subtask;
pub mod tag;
pub mod task;
pub mod task_priority;
pub mod task_tag;
pub mod user;
