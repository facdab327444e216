use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
    achievements, leaderboards, social_challenges, user_achievements, user_challenge_progress,
    user_gamification_profile, user_listening_history, user_listening_stats, user_milestones,
    user_preferences,
};

// Points, level and streak state, one row per user.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_gamification_profile)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GamificationProfile {
    pub id: i32,
    pub user_id: i32,
    pub total_points: i32,
    pub current_level: i32,
    pub current_level_progress: i32,
    pub total_achievements: i32,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_activity_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_gamification_profile)]
pub struct NewGamificationProfile {
    pub user_id: i32,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = user_gamification_profile)]
pub struct UpdateGamificationProfile {
    pub total_points: Option<i32>,
    pub current_level: Option<i32>,
    pub current_level_progress: Option<i32>,
    pub total_achievements: Option<i32>,
    pub current_streak: Option<i32>,
    pub longest_streak: Option<i32>,
    pub last_activity_date: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = achievements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Achievement {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: String,
    pub points_reward: i32,
    pub condition: String,
    pub is_hidden: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = achievements)]
pub struct NewAchievement {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: String,
    pub points_reward: i32,
    pub condition: String,
    pub is_hidden: bool,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AchievementCategory {
    Listening,
    Social,
    Discovery,
    Engagement,
}

impl AchievementCategory {
    pub fn from_category_str(value: &str) -> Option<Self> {
        match value {
            "listening" => Some(Self::Listening),
            "social" => Some(Self::Social),
            "discovery" => Some(Self::Discovery),
            "engagement" => Some(Self::Engagement),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Listening => "listening",
            Self::Social => "social",
            Self::Discovery => "discovery",
            Self::Engagement => "engagement",
        }
    }
}

impl std::fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Unlocked at most once per (user, achievement).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_achievements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserAchievement {
    pub id: i32,
    pub user_id: i32,
    pub achievement_id: i32,
    pub unlocked_at: NaiveDateTime,
    pub progress: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_achievements)]
pub struct NewUserAchievement {
    pub user_id: i32,
    pub achievement_id: i32,
    pub unlocked_at: NaiveDateTime,
    pub progress: Option<i32>,
}

// Points leaderboard. period is 'YYYY-MM' for monthly, 'YYYY-WXX' for weekly
// and 'all' for all_time.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = leaderboards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LeaderboardEntry {
    pub id: i32,
    pub user_id: i32,
    pub rank: i32,
    pub score: i32,
    pub leaderboard_type: String,
    pub period: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = leaderboards)]
pub struct NewLeaderboardEntry {
    pub user_id: i32,
    pub rank: i32,
    pub score: i32,
    pub leaderboard_type: String,
    pub period: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_milestones)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserMilestone {
    pub id: i32,
    pub user_id: i32,
    pub milestone_type: String,
    pub milestone_value: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub reached_at: NaiveDateTime,
    pub celebration_sent: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_milestones)]
pub struct NewUserMilestone {
    pub user_id: i32,
    pub milestone_type: String,
    pub milestone_value: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub reached_at: NaiveDateTime,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = social_challenges)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SocialChallenge {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub challenge_type: String,
    pub target: i32,
    pub reward: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = social_challenges)]
pub struct NewSocialChallenge {
    pub name: String,
    pub description: Option<String>,
    pub challenge_type: String,
    pub target: i32,
    pub reward: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_active: bool,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ChallengeType {
    Listen,
    Share,
    Invite,
    CreatePlaylist,
}

impl ChallengeType {
    pub fn from_type_str(value: &str) -> Option<Self> {
        match value {
            "listen" => Some(Self::Listen),
            "share" => Some(Self::Share),
            "invite" => Some(Self::Invite),
            "create_playlist" => Some(Self::CreatePlaylist),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Listen => "listen",
            Self::Share => "share",
            Self::Invite => "invite",
            Self::CreatePlaylist => "create_playlist",
        }
    }
}

impl std::fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_challenge_progress)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ChallengeProgress {
    pub id: i32,
    pub user_id: i32,
    pub challenge_id: i32,
    pub progress: i32,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub reward_claimed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_challenge_progress)]
pub struct NewChallengeProgress {
    pub user_id: i32,
    pub challenge_id: i32,
    pub progress: i32,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = user_challenge_progress)]
pub struct UpdateChallengeProgress {
    pub progress: Option<i32>,
    pub completed: Option<bool>,
    pub completed_at: Option<NaiveDateTime>,
    pub reward_claimed: Option<bool>,
    pub updated_at: Option<NaiveDateTime>,
}

// Year-in-review material, one row per (user, year).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_listening_stats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ListeningStats {
    pub id: i32,
    pub user_id: i32,
    pub year: i32,
    pub total_listening_minutes: i32,
    pub total_tracks_played: i32,
    pub unique_tracks_played: i32,
    pub unique_artists_played: i32,
    pub top_genre: Option<String>,
    pub top_artist: Option<String>,
    pub top_track: Option<String>,
    pub average_listening_time: Option<String>,
    pub most_active_day: Option<String>,
    pub wrapped_generated: bool,
    pub wrapped_generated_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_listening_stats)]
pub struct NewListeningStats {
    pub user_id: i32,
    pub year: i32,
    pub total_listening_minutes: i32,
    pub total_tracks_played: i32,
    pub unique_tracks_played: i32,
    pub unique_artists_played: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_listening_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ListeningHistoryEntry {
    pub id: i32,
    pub user_id: i32,
    pub track_id: i32,
    pub artist_id: Option<i32>,
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub played_at: NaiveDateTime,
    pub listen_duration: Option<i32>,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_listening_history)]
pub struct NewListeningHistoryEntry {
    pub user_id: i32,
    pub track_id: i32,
    pub artist_id: Option<i32>,
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub played_at: NaiveDateTime,
    pub listen_duration: Option<i32>,
    pub completed: bool,
}

// Recommendation inputs, one row per user. List-valued fields are opaque
// JSON payloads owned by the application layer.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_preferences)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserPreferences {
    pub id: i32,
    pub user_id: i32,
    pub preferred_genres: Option<String>,
    pub preferred_moods: Option<String>,
    pub preferred_artists: Option<String>,
    pub disliked_genres: Option<String>,
    pub notification_frequency: Option<String>,
    pub recommendation_style: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Default)]
#[diesel(table_name = user_preferences)]
pub struct NewUserPreferences {
    pub user_id: i32,
    pub preferred_genres: Option<String>,
    pub preferred_moods: Option<String>,
    pub preferred_artists: Option<String>,
    pub disliked_genres: Option<String>,
}
