pub mod assign_task_request;
pub mod column_detail_dto;
pub mod column_id_query;
pub mod create_task_request;
pub mod date_filter_query;
pub mod reorder_tasks_request;
pub mod tag_filter_query;
pub mod task_dto;
pub mod task_light_dto;
pub mod task_list_response;
pub mod task_response;
#[allow(clippy::module_inception)]
pub mod tasks;
pub mod update_task_request;
