use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
    badge_criteria_tracking, listener_badges, review_moderation, user_badge_assignments,
};

// A moderation flag raised against a review. Status transitions are always
// explicit moderator actions, never automatic.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = review_moderation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReviewModerationFlag {
    pub id: i32,
    pub review_id: i32,
    pub flagged_by: i32,
    pub reason: String,
    pub description: Option<String>,
    pub status: String,
    pub moderator_notes: Option<String>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = review_moderation)]
pub struct NewReviewModerationFlag {
    pub review_id: i32,
    pub flagged_by: i32,
    pub reason: String,
    pub description: Option<String>,
    pub status: String,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = review_moderation)]
pub struct UpdateReviewModerationFlag {
    pub status: Option<String>,
    pub moderator_notes: Option<String>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
    Resolved,
}

impl ModerationStatus {
    pub fn from_status_str(status: &str) -> Option<Self> {
        match status {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Resolved => "resolved",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = listener_badges)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ListenerBadge {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub criteria: String,
    pub color: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = listener_badges)]
pub struct NewListenerBadge {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub criteria: String,
    pub color: Option<String>,
}

// Awarded at most once per (user, badge).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_badge_assignments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserBadgeAssignment {
    pub id: i32,
    pub user_id: i32,
    pub badge_id: i32,
    pub earned_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_badge_assignments)]
pub struct NewUserBadgeAssignment {
    pub user_id: i32,
    pub badge_id: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = badge_criteria_tracking)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BadgeCriteriaProgress {
    pub id: i32,
    pub user_id: i32,
    pub badge_id: i32,
    pub progress: i32,
    pub target: i32,
    pub last_updated: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = badge_criteria_tracking)]
pub struct NewBadgeCriteriaProgress {
    pub user_id: i32,
    pub badge_id: i32,
    pub progress: i32,
    pub target: i32,
}

impl BadgeCriteriaProgress {
    pub fn is_complete(&self) -> bool {
        self.progress >= self.target
    }
}
