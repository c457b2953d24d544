use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TagFilterQuery {
    /// Comma-separated tag ids; a task must carry all of them
    pub tag_ids: Option<String>,
}
