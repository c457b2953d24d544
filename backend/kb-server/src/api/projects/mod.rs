pub mod create_board_from_template_request;
pub mod create_from_template_request;
pub mod create_project_request;
pub mod member_request;
pub mod project_dto;
pub mod project_light_dto;
pub mod project_list_response;
pub mod project_response;
#[allow(clippy::module_inception)]
pub mod projects;
pub mod update_project_request;
