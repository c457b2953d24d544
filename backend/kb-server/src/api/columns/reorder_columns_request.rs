use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReorderColumnsRequest {
    #[serde(default)]
    pub board_id: Option<String>,
    #[serde(default)]
    pub column_order: Option<Vec<String>>,
}
