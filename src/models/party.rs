use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
    listening_parties, party_chat_messages, party_participants, party_playlist_queue,
    party_reactions, party_sync_events, party_user_votes, party_voting,
};

// Live listening room. party_id is the caller-visible handle; all of the
// per-party tables reference it rather than the surrogate id.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = listening_parties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ListeningParty {
    pub id: i32,
    pub party_id: String,
    pub host_user_id: i32,
    pub party_name: String,
    pub description: Option<String>,
    pub status: String,
    pub current_track_id: Option<i32>,
    pub current_track_position: i32,
    pub playlist_id: Option<i32>,
    pub is_public: bool,
    pub max_participants: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub ended_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = listening_parties)]
pub struct NewListeningParty {
    pub party_id: String,
    pub host_user_id: i32,
    pub party_name: String,
    pub description: Option<String>,
    pub status: String,
    pub is_public: bool,
    pub max_participants: i32,
}

impl NewListeningParty {
    pub fn new(host_user_id: i32, party_name: String, description: Option<String>) -> Self {
        Self {
            party_id: uuid::Uuid::new_v4().to_string(),
            host_user_id,
            party_name,
            description,
            status: PartyStatus::Active.to_string(),
            is_public: true,
            max_participants: 50,
        }
    }
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = listening_parties)]
pub struct UpdateListeningParty {
    pub status: Option<String>,
    pub current_track_id: Option<Option<i32>>,
    pub current_track_position: Option<i32>,
    pub updated_at: Option<NaiveDateTime>,
    pub ended_at: Option<NaiveDateTime>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PartyStatus {
    Active,
    Paused,
    Ended,
}

impl PartyStatus {
    pub fn from_status_str(status: &str) -> Option<Self> {
        match status {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "ended" => Some(Self::Ended),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Ended => "ended",
        }
    }
}

impl std::fmt::Display for PartyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = party_participants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PartyParticipant {
    pub id: i32,
    pub party_id: String,
    pub user_id: i32,
    pub role: String,
    pub joined_at: NaiveDateTime,
    pub left_at: Option<NaiveDateTime>,
    pub is_active: bool,
    pub last_heartbeat: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = party_participants)]
pub struct NewPartyParticipant {
    pub party_id: String,
    pub user_id: i32,
    pub role: String,
    pub last_heartbeat: NaiveDateTime,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ParticipantRole {
    Host,
    Participant,
    Moderator,
}

impl ParticipantRole {
    pub fn from_role_str(role: &str) -> Option<Self> {
        match role {
            "host" => Some(Self::Host),
            "participant" => Some(Self::Participant),
            "moderator" => Some(Self::Moderator),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Participant => "participant",
            Self::Moderator => "moderator",
        }
    }

    pub fn can_control_playback(&self) -> bool {
        matches!(self, Self::Host | Self::Moderator)
    }
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = party_chat_messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PartyChatMessage {
    pub id: i32,
    pub party_id: String,
    pub user_id: i32,
    pub message: String,
    pub message_type: String,
    pub reaction: Option<String>,
    pub is_edited: bool,
    pub edited_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = party_chat_messages)]
pub struct NewPartyChatMessage {
    pub party_id: String,
    pub user_id: i32,
    pub message: String,
    pub message_type: String,
    pub reaction: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = party_playlist_queue)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PartyQueueEntry {
    pub id: i32,
    pub party_id: String,
    pub track_id: i32,
    pub added_by_user_id: i32,
    pub position: i32,
    pub status: String,
    pub upvotes: i32,
    pub downvotes: i32,
    pub added_at: NaiveDateTime,
    pub played_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = party_playlist_queue)]
pub struct NewPartyQueueEntry {
    pub party_id: String,
    pub track_id: i32,
    pub added_by_user_id: i32,
    pub position: i32,
    pub status: String,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = party_playlist_queue)]
pub struct UpdatePartyQueueEntry {
    pub position: Option<i32>,
    pub status: Option<String>,
    pub upvotes: Option<i32>,
    pub downvotes: Option<i32>,
    pub played_at: Option<NaiveDateTime>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum QueueStatus {
    Queued,
    Playing,
    Played,
    Skipped,
}

impl QueueStatus {
    pub fn from_status_str(status: &str) -> Option<Self> {
        match status {
            "queued" => Some(Self::Queued),
            "playing" => Some(Self::Playing),
            "played" => Some(Self::Played),
            "skipped" => Some(Self::Skipped),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Playing => "playing",
            Self::Played => "played",
            Self::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// A group decision in flight (skip the track, pause, resume).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = party_voting)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PartyVote {
    pub id: i32,
    pub party_id: String,
    pub vote_type: String,
    pub target_track_id: Option<i32>,
    pub initiated_by_user_id: i32,
    pub votes_for: i32,
    pub votes_against: i32,
    pub status: String,
    pub required_votes: i32,
    pub created_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = party_voting)]
pub struct NewPartyVote {
    pub party_id: String,
    pub vote_type: String,
    pub target_track_id: Option<i32>,
    pub initiated_by_user_id: i32,
    pub required_votes: i32,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = party_voting)]
pub struct UpdatePartyVote {
    pub votes_for: Option<i32>,
    pub votes_against: Option<i32>,
    pub status: Option<String>,
    pub resolved_at: Option<NaiveDateTime>,
}

// One ballot per user per vote, enforced by vote_user_unique.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = party_user_votes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PartyUserVote {
    pub id: i32,
    pub vote_id: i32,
    pub user_id: i32,
    pub vote: String,
    pub voted_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = party_user_votes)]
pub struct NewPartyUserVote {
    pub vote_id: i32,
    pub user_id: i32,
    pub vote: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = party_reactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PartyReaction {
    pub id: i32,
    pub party_id: String,
    pub track_id: i32,
    pub user_id: i32,
    pub emoji: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = party_reactions)]
pub struct NewPartyReaction {
    pub party_id: String,
    pub track_id: i32,
    pub user_id: i32,
    pub emoji: String,
}

// Playback timeline event used to resynchronize late joiners.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = party_sync_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PartySyncEvent {
    pub id: i32,
    pub party_id: String,
    pub event_type: String,
    pub track_id: Option<i32>,
    pub position: Option<i32>,
    pub user_id: Option<i32>,
    pub occurred_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = party_sync_events)]
pub struct NewPartySyncEvent {
    pub party_id: String,
    pub event_type: String,
    pub track_id: Option<i32>,
    pub position: Option<i32>,
    pub user_id: Option<i32>,
    pub occurred_at: NaiveDateTime,
}
