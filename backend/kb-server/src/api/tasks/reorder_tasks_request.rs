use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReorderTasksRequest {
    #[serde(default)]
    pub source_column_id: Option<String>,
    #[serde(default)]
    pub destination_column_id: Option<String>,
    #[serde(default)]
    pub task_order: Option<Vec<String>>,
}
