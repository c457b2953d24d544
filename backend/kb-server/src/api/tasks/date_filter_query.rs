use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DateFilterQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
