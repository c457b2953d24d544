use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BoardIdQuery {
    pub board_id: Option<String>,
}
