pub mod attachment_dto;
pub mod attachment_list_response;
pub mod attachment_response;
#[allow(clippy::module_inception)]
pub mod attachments;
pub mod create_attachment_request;
pub mod update_attachment_request;
