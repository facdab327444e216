use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
    artist_engagement_metrics, artist_listener_demographics, artist_review_trends,
    most_helpful_comments_leaderboard, most_helpful_reviews, top_reviewers_leaderboard,
    trending_artists_leaderboard, trending_tracks_leaderboard,
};

// Leaderboard snapshots are denormalized on purpose: display names and
// avatars are copied in at computation time so reading a board is one query.
// Each board keeps one row per (entity, period, week_start_date).

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LeaderboardPeriod {
    Weekly,
    Monthly,
    AllTime,
}

impl LeaderboardPeriod {
    pub fn from_period_str(period: &str) -> Option<Self> {
        match period {
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "alltime" => Some(Self::AllTime),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::AllTime => "alltime",
        }
    }
}

impl std::fmt::Display for LeaderboardPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = top_reviewers_leaderboard)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TopReviewerEntry {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub review_count: i32,
    pub helpful_count: i32,
    pub average_rating: f32,
    pub rank: i32,
    pub period: String,
    pub week_start_date: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = top_reviewers_leaderboard)]
pub struct NewTopReviewerEntry {
    pub user_id: i32,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub review_count: i32,
    pub helpful_count: i32,
    pub average_rating: f32,
    pub rank: i32,
    pub period: String,
    pub week_start_date: Option<NaiveDate>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = most_helpful_comments_leaderboard)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HelpfulCommenterEntry {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub comment_count: i32,
    pub total_helpful: i32,
    pub helpful_rate: f32,
    pub rank: i32,
    pub period: String,
    pub week_start_date: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = most_helpful_comments_leaderboard)]
pub struct NewHelpfulCommenterEntry {
    pub user_id: i32,
    pub user_name: String,
    pub comment_count: i32,
    pub total_helpful: i32,
    pub helpful_rate: f32,
    pub rank: i32,
    pub period: String,
    pub week_start_date: Option<NaiveDate>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = trending_tracks_leaderboard)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrendingTrackEntry {
    pub id: i32,
    pub music_upload_id: i32,
    pub track_title: String,
    pub artist_name: String,
    pub plays: i32,
    pub new_plays: i32,
    pub downloads: i32,
    pub shares: i32,
    pub saves: i32,
    pub trending_score: f32,
    pub rank: i32,
    pub period: String,
    pub week_start_date: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = trending_tracks_leaderboard)]
pub struct NewTrendingTrackEntry {
    pub music_upload_id: i32,
    pub track_title: String,
    pub artist_name: String,
    pub plays: i32,
    pub new_plays: i32,
    pub downloads: i32,
    pub shares: i32,
    pub saves: i32,
    pub trending_score: f32,
    pub rank: i32,
    pub period: String,
    pub week_start_date: Option<NaiveDate>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = trending_artists_leaderboard)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrendingArtistEntry {
    pub id: i32,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_avatar: Option<String>,
    pub followers: i32,
    pub new_followers: i32,
    pub total_plays: i32,
    pub new_plays: i32,
    pub trending_score: f32,
    pub rank: i32,
    pub period: String,
    pub week_start_date: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = trending_artists_leaderboard)]
pub struct NewTrendingArtistEntry {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_avatar: Option<String>,
    pub followers: i32,
    pub new_followers: i32,
    pub total_plays: i32,
    pub new_plays: i32,
    pub trending_score: f32,
    pub rank: i32,
    pub period: String,
    pub week_start_date: Option<NaiveDate>,
}

// Artist dashboard rollups, one row per (artist, date) or demographic key.

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = artist_review_trends)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArtistReviewTrend {
    pub id: i32,
    pub artist_id: i32,
    pub date: NaiveDate,
    pub total_reviews: i32,
    pub average_rating: f32,
    pub positive_reviews: i32,
    pub negative_reviews: i32,
    pub neutral_reviews: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = artist_review_trends)]
pub struct NewArtistReviewTrend {
    pub artist_id: i32,
    pub date: NaiveDate,
    pub total_reviews: i32,
    pub average_rating: f32,
    pub positive_reviews: i32,
    pub negative_reviews: i32,
    pub neutral_reviews: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = artist_listener_demographics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArtistListenerDemographic {
    pub id: i32,
    pub artist_id: i32,
    pub age_group: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub listener_count: i32,
    pub play_count: i32,
    pub last_updated: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = artist_listener_demographics)]
pub struct NewArtistListenerDemographic {
    pub artist_id: i32,
    pub age_group: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub listener_count: i32,
    pub play_count: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = artist_engagement_metrics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArtistEngagementMetric {
    pub id: i32,
    pub artist_id: i32,
    pub date: NaiveDate,
    pub followers: i32,
    pub new_followers: i32,
    pub shares: i32,
    pub saves: i32,
    pub comments: i32,
    pub engagement_rate: f32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = artist_engagement_metrics)]
pub struct NewArtistEngagementMetric {
    pub artist_id: i32,
    pub date: NaiveDate,
    pub followers: i32,
    pub new_followers: i32,
    pub shares: i32,
    pub saves: i32,
    pub comments: i32,
    pub engagement_rate: f32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = most_helpful_reviews)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MostHelpfulReview {
    pub id: i32,
    pub artist_id: i32,
    pub review_id: Option<i32>,
    pub reviewer_name: Option<String>,
    pub review_text: Option<String>,
    pub rating: Option<i32>,
    pub helpful_count: i32,
    pub unhelpful_count: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = most_helpful_reviews)]
pub struct NewMostHelpfulReview {
    pub artist_id: i32,
    pub review_id: Option<i32>,
    pub reviewer_name: Option<String>,
    pub review_text: Option<String>,
    pub rating: Option<i32>,
    pub helpful_count: i32,
    pub unhelpful_count: i32,
}
