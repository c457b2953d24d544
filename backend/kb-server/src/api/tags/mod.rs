pub mod create_tag_request;
pub mod tag_dto;
pub mod tag_list_response;
pub mod tag_response;
pub mod tag_task_request;
#[allow(clippy::module_inception)]
pub mod tags;
pub mod update_tag_request;
