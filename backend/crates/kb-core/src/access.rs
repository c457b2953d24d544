//! Project-scoped access policies.
//!
//! Every entity below a project resolves to a [`ProjectAccess`] snapshot for
//! the requesting principal; the handler's [`AccessPolicy`] then decides.

use std::fmt;

use uuid::Uuid;

/// Permission requirement attached to an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessPolicy {
    /// No principal required.
    Public,
    /// Any verified principal.
    AuthenticatedAny,
    /// Project creator or an explicit member.
    MemberOrCreator,
    /// Project creator only.
    CreatorOnly,
}

impl AccessPolicy {
    pub fn permits(&self, access: &ProjectAccess) -> bool {
        match self {
            Self::Public | Self::AuthenticatedAny => true,
            Self::MemberOrCreator => access.can_write(),
            Self::CreatorOnly => access.is_creator(),
        }
    }
}

/// A reference to any entity in the ownership hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Project(Uuid),
    Board(Uuid),
    Column(Uuid),
    Task(Uuid),
    SubTask(Uuid),
    Comment(Uuid),
    Attachment(Uuid),
}

impl EntityRef {
    pub fn id(&self) -> Uuid {
        match *self {
            Self::Project(id)
            | Self::Board(id)
            | Self::Column(id)
            | Self::Task(id)
            | Self::SubTask(id)
            | Self::Comment(id)
            | Self::Attachment(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Project(_) => "Project",
            Self::Board(_) => "Board",
            Self::Column(_) => "Column",
            Self::Task(_) => "Task",
            Self::SubTask(_) => "SubTask",
            Self::Comment(_) => "Comment",
            Self::Attachment(_) => "Attachment",
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// Ownership facts about the project an entity belongs to, evaluated for one
/// principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectAccess {
    pub project_id: Uuid,
    pub created_by: Uuid,
    pub principal: Uuid,
    pub is_member: bool,
}

impl ProjectAccess {
    pub fn is_creator(&self) -> bool {
        self.created_by == self.principal
    }

    pub fn can_read(&self) -> bool {
        self.is_creator() || self.is_member
    }

    pub fn can_write(&self) -> bool {
        self.is_creator() || self.is_member
    }
}
