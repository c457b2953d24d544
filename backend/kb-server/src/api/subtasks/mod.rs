pub mod create_subtask_request;
pub mod subtask_dto;
pub mod subtask_list_response;
pub mod subtask_response;
#[allow(clippy::module_inception)]
pub mod subtasks;
pub mod update_subtask_request;
