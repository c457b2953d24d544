use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ColumnIdQuery {
    pub column_id: Option<String>,
}
