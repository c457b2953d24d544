use serde::Deserialize;

/// Body of add_member / remove_member.
#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}
