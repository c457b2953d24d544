pub mod cascade;
pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{begin_write, open_in_memory, open_pool};
pub use error::{DbError, Result};
pub use repositories::access_repository::AccessRepository;
pub use repositories::attachment_repository::AttachmentRepository;
pub use repositories::board_repository::BoardRepository;
pub use repositories::column_repository::ColumnRepository;
pub use repositories::comment_repository::CommentRepository;
pub use repositories::project_member_repository::ProjectMemberRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::subtask_repository::SubTaskRepository;
pub use repositories::tag_repository::TagRepository;
pub use repositories::task_repository::{TaskFilter, TaskRepository};
pub use repositories::task_tag_repository::TaskTagRepository;
pub use repositories::user_repository::UserRepository;
