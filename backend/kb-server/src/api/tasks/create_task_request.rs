use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub column_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// "low", "medium" or "high"; medium when absent
    #[serde(default)]
    pub priority: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339
    #[serde(default)]
    pub due_date: Option<String>,
    /// Insert index within the column; appended when absent
    #[serde(default)]
    pub position: Option<i64>,
}
