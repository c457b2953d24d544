//! Handler-level authorization gate.

use crate::{ApiError, ApiResult};

use kb_core::{AccessPolicy, EntityRef, ProjectAccess};
use kb_db::AccessRepository;

use uuid::Uuid;

/// Resolve `entity` to its project and check `policy` for `principal`.
///
/// An unknown entity is `NotFound`; a refused policy is `Forbidden` with a
/// message built from `action` (e.g. "create boards in this project").
/// Nothing is written.
pub async fn authorize<'e, E>(
    executor: E,
    principal: Uuid,
    entity: EntityRef,
    policy: AccessPolicy,
    action: &str,
) -> ApiResult<ProjectAccess>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let access = AccessRepository::project_access(executor, entity, principal)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!("{} not found for id {}.", entity.kind(), entity.id()))
        })?;

    if policy.permits(&access) {
        return Ok(access);
    }

    log::warn!(
        "Principal {} refused ({:?}) on {}",
        principal,
        policy,
        entity
    );
    Err(ApiError::forbidden(denied_message(policy, action)))
}

pub fn denied_message(policy: AccessPolicy, action: &str) -> String {
    match policy {
        AccessPolicy::CreatorOnly => format!("Only the project creator can {action}."),
        _ => format!("You do not have permission to {action}."),
    }
}
