use crate::ColumnDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ColumnResponse {
    pub column: ColumnDto,
}
