pub mod access;
pub mod error;
pub mod models;
pub mod position;
pub mod templates;
pub mod validation;

pub use access::{AccessPolicy, EntityRef, ProjectAccess};
pub use error::{CoreError, Result};
pub use models::attachment::Attachment;
pub use models::board::Board;
pub use models::column::Column;
pub use models::comment::Comment;
pub use models::project::Project;
pub use models::project_member::ProjectMember;
pub use models::subtask::SubTask;
pub use models::tag::Tag;
pub use models::task::Task;
pub use models::task_priority::TaskPriority;
pub use models::task_tag::TaskTag;
pub use models::user::User;
pub use templates::{BoardTemplate, TemplateColumn};
pub use validation::MAX_ATTACHMENT_BYTES;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
