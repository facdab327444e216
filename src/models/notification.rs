use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{email_notifications, notification_preferences, notifications, push_tokens};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub related_id: Option<i32>,
    pub related_type: Option<String>,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
    pub read_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = notifications)]
pub struct NewNotification {
    pub user_id: i32,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub related_id: Option<i32>,
    pub related_type: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NotificationType {
    ReviewResponse,
    BadgeEarned,
    NewRelease,
    CollaborationInvite,
    CommentReply,
    Follow,
    Mention,
    Message,
}

impl NotificationType {
    pub fn from_type_str(value: &str) -> Option<Self> {
        match value {
            "review_response" => Some(Self::ReviewResponse),
            "badge_earned" => Some(Self::BadgeEarned),
            "new_release" => Some(Self::NewRelease),
            "collaboration_invite" => Some(Self::CollaborationInvite),
            "comment_reply" => Some(Self::CommentReply),
            "follow" => Some(Self::Follow),
            "mention" => Some(Self::Mention),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReviewResponse => "review_response",
            Self::BadgeEarned => "badge_earned",
            Self::NewRelease => "new_release",
            Self::CollaborationInvite => "collaboration_invite",
            Self::CommentReply => "comment_reply",
            Self::Follow => "follow",
            Self::Mention => "mention",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Per-user delivery switches, one row per user. All channels default to on
// except email.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = notification_preferences)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NotificationPreferences {
    pub id: i32,
    pub user_id: i32,
    pub review_responses: bool,
    pub badges_earned: bool,
    pub new_releases: bool,
    pub collaboration_invites: bool,
    pub comment_replies: bool,
    pub follows: bool,
    pub mentions: bool,
    pub messages: bool,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = notification_preferences)]
pub struct NewNotificationPreferences {
    pub user_id: i32,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = notification_preferences)]
pub struct UpdateNotificationPreferences {
    pub review_responses: Option<bool>,
    pub badges_earned: Option<bool>,
    pub new_releases: Option<bool>,
    pub collaboration_invites: Option<bool>,
    pub comment_replies: Option<bool>,
    pub follows: Option<bool>,
    pub mentions: Option<bool>,
    pub messages: Option<bool>,
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = email_notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmailNotification {
    pub id: i32,
    pub user_id: i32,
    pub notification_type: String,
    pub subject: String,
    pub content: String,
    pub related_id: Option<i32>,
    pub sent: bool,
    pub sent_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = email_notifications)]
pub struct NewEmailNotification {
    pub user_id: i32,
    pub notification_type: String,
    pub subject: String,
    pub content: String,
    pub related_id: Option<i32>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = push_tokens)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PushToken {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub platform: String,
    pub created_at: NaiveDateTime,
    pub last_used_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = push_tokens)]
pub struct NewPushToken {
    pub user_id: i32,
    pub token: String,
    pub platform: String,
}
