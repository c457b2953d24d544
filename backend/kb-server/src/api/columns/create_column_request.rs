use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateColumnRequest {
    #[serde(default)]
    pub board_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub wip_limit: Option<i64>,
    /// Insert index within the board; appended when absent
    #[serde(default)]
    pub position: Option<i64>,
}
