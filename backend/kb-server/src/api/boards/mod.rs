pub mod board_dto;
pub mod board_light_dto;
pub mod board_list_response;
pub mod board_response;
#[allow(clippy::module_inception)]
pub mod boards;
pub mod create_board_request;
pub mod project_id_query;
pub mod update_board_request;
