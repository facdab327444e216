use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{collaboration_activity_log, collaboration_invites, collaborators};

// At most one pending invite per (invited user, upload).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = collaboration_invites)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CollaborationInvite {
    pub id: i32,
    pub invited_by: i32,
    pub invited_user: i32,
    pub music_upload_id: i32,
    pub role: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub responded_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = collaboration_invites)]
pub struct NewCollaborationInvite {
    pub invited_by: i32,
    pub invited_user: i32,
    pub music_upload_id: i32,
    pub role: String,
    pub status: String,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = collaboration_invites)]
pub struct UpdateCollaborationInvite {
    pub status: Option<String>,
    pub responded_at: Option<NaiveDateTime>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InviteStatus {
    Pending,
    Accepted,
    Rejected,
    Revoked,
}

impl InviteStatus {
    pub fn from_status_str(status: &str) -> Option<Self> {
        match status {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            "revoked" => Some(Self::Revoked),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Revoked => "revoked",
        }
    }
}

impl std::fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = collaborators)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Collaborator {
    pub id: i32,
    pub user_id: i32,
    pub music_upload_id: i32,
    pub role: String,
    pub joined_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = collaborators)]
pub struct NewCollaborator {
    pub user_id: i32,
    pub music_upload_id: i32,
    pub role: String,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CollaborationRole {
    Viewer,
    Editor,
    Admin,
}

impl CollaborationRole {
    pub fn from_role_str(role: &str) -> Option<Self> {
        match role {
            "viewer" => Some(Self::Viewer),
            "editor" => Some(Self::Editor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }

    pub fn can_edit(&self) -> bool {
        matches!(self, Self::Editor | Self::Admin)
    }

    pub fn can_manage_collaborators(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for CollaborationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = collaboration_activity_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CollaborationActivity {
    pub id: i32,
    pub user_id: i32,
    pub music_upload_id: i32,
    pub action: String,
    pub details: Option<String>,
    pub occurred_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = collaboration_activity_log)]
pub struct NewCollaborationActivity {
    pub user_id: i32,
    pub music_upload_id: i32,
    pub action: String,
    pub details: Option<String>,
}
