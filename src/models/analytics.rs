use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
    daily_analytics_summary, listener_demographics, revenue_tracking, track_downloads, track_plays,
};

// Raw play fact. user_id is nulled rather than deleted when the listener
// account goes away, so aggregate counts survive account removal.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = track_plays)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrackPlay {
    pub id: i32,
    pub music_upload_id: i32,
    pub user_id: Option<i32>,
    pub played_at: NaiveDateTime,
    pub duration: Option<i32>,
    pub device_type: Option<String>,
    pub country: Option<String>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = track_plays)]
pub struct NewTrackPlay {
    pub music_upload_id: i32,
    pub user_id: Option<i32>,
    pub duration: Option<i32>,
    pub device_type: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DeviceType {
    Mobile,
    Desktop,
    Tablet,
}

impl DeviceType {
    pub fn from_type_str(value: &str) -> Option<Self> {
        match value {
            "mobile" => Some(Self::Mobile),
            "desktop" => Some(Self::Desktop),
            "tablet" => Some(Self::Tablet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = track_downloads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrackDownload {
    pub id: i32,
    pub music_upload_id: i32,
    pub user_id: Option<i32>,
    pub downloaded_at: NaiveDateTime,
    pub format: Option<String>,
    pub country: Option<String>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = track_downloads)]
pub struct NewTrackDownload {
    pub music_upload_id: i32,
    pub user_id: Option<i32>,
    pub format: Option<String>,
    pub country: Option<String>,
}

// Derived rollup, one row per (upload, day).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = daily_analytics_summary)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailyAnalyticsSummary {
    pub id: i32,
    pub music_upload_id: i32,
    pub date: NaiveDate,
    pub plays: i32,
    pub downloads: i32,
    pub unique_listeners: i32,
    pub total_duration: i32,
    pub avg_duration: Option<f32>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = daily_analytics_summary)]
pub struct NewDailyAnalyticsSummary {
    pub music_upload_id: i32,
    pub date: NaiveDate,
    pub plays: i32,
    pub downloads: i32,
    pub unique_listeners: i32,
    pub total_duration: i32,
    pub avg_duration: Option<f32>,
}

// Derived rollup, one row per (upload, country).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = listener_demographics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ListenerDemographic {
    pub id: i32,
    pub music_upload_id: i32,
    pub country: String,
    pub plays: i32,
    pub downloads: i32,
    pub unique_listeners: i32,
    pub last_updated: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = listener_demographics)]
pub struct NewListenerDemographic {
    pub music_upload_id: i32,
    pub country: String,
    pub plays: i32,
    pub downloads: i32,
    pub unique_listeners: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = revenue_tracking)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RevenueEntry {
    pub id: i32,
    pub music_upload_id: i32,
    pub source: String,
    pub amount_cents: i32,
    pub currency: String,
    pub date: NaiveDate,
    pub transaction_id: Option<String>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = revenue_tracking)]
pub struct NewRevenueEntry {
    pub music_upload_id: i32,
    pub source: String,
    pub amount_cents: i32,
    pub currency: String,
    pub date: NaiveDate,
    pub transaction_id: Option<String>,
}
