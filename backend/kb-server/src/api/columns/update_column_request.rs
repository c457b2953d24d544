use crate::api::nullable;

use serde::Deserialize;

/// Partial update. `wip_limit: null` removes the limit. Position changes go
/// through reorder.
#[derive(Debug, Deserialize)]
pub struct UpdateColumnRequest {
    pub name: Option<String>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub wip_limit: Option<Option<i64>>,
}
