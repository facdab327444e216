use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{activity_feed, share_analytics, share_events, shares, user_follows};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = shares)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Share {
    pub id: i32,
    pub user_id: i32,
    pub track_id: Option<i32>,
    pub playlist_id: Option<i32>,
    pub platform: String,
    pub shared_url: Option<String>,
    pub shared_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = shares)]
pub struct NewShare {
    pub user_id: i32,
    pub track_id: Option<i32>,
    pub playlist_id: Option<i32>,
    pub platform: String,
    pub shared_url: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = share_analytics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ShareAnalytics {
    pub id: i32,
    pub share_id: i32,
    pub clicks: i32,
    pub impressions: i32,
    pub conversions: i32,
    pub engagement_rate: i32,
    pub platform: String,
    pub tracking_code: Option<String>,
    pub updated_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = share_analytics)]
pub struct NewShareAnalytics {
    pub share_id: i32,
    pub platform: String,
    pub tracking_code: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = share_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ShareEvent {
    pub id: i32,
    pub user_id: i32,
    pub track_id: i32,
    pub platform: String,
    pub shared_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = share_events)]
pub struct NewShareEvent {
    pub user_id: i32,
    pub track_id: i32,
    pub platform: String,
}

// Follower edge. A user can follow another user at most once.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_follows)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserFollow {
    pub id: i32,
    pub follower_id: i32,
    pub following_id: i32,
    pub followed_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_follows)]
pub struct NewUserFollow {
    pub follower_id: i32,
    pub following_id: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = activity_feed)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ActivityFeedEntry {
    pub id: i32,
    pub user_id: i32,
    pub activity_type: String,
    pub related_user_id: Option<i32>,
    pub related_track_id: Option<i32>,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = activity_feed)]
pub struct NewActivityFeedEntry {
    pub user_id: i32,
    pub activity_type: String,
    pub related_user_id: Option<i32>,
    pub related_track_id: Option<i32>,
    pub message: String,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ActivityType {
    Follow,
    Like,
    Comment,
    Share,
    Upload,
}

impl ActivityType {
    pub fn from_type_str(value: &str) -> Option<Self> {
        match value {
            "follow" => Some(Self::Follow),
            "like" => Some(Self::Like),
            "comment" => Some(Self::Comment),
            "share" => Some(Self::Share),
            "upload" => Some(Self::Upload),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Follow => "follow",
            Self::Like => "like",
            Self::Comment => "comment",
            Self::Share => "share",
            Self::Upload => "upload",
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
