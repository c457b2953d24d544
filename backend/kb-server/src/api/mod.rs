pub mod attachments;
pub mod boards;
pub mod columns;
pub mod comments;
pub mod delete_response;
pub mod detail_response;
pub mod error;
pub mod extractors;
pub mod guard;
pub mod hierarchy;
pub mod nullable;
pub mod params;
pub mod projects;
pub mod subtasks;
pub mod tags;
pub mod task_id_query;
pub mod tasks;
pub mod user_dto;
