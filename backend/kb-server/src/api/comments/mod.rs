pub mod comment_dto;
pub mod comment_list_response;
pub mod comment_response;
#[allow(clippy::module_inception)]
pub mod comments;
pub mod create_comment_request;
pub mod update_comment_request;
