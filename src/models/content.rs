use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
    albums, favorites, playlist_tracks, playlists, posts, stream_history, tracks, uploaded_files,
};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = albums)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Album {
    pub id: i32,
    pub title: String,
    pub artist_id: i32,
    pub description: Option<String>,
    pub cover_art_url: Option<String>,
    pub release_date: Option<NaiveDateTime>,
    pub genre: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = albums)]
pub struct NewAlbum {
    pub title: String,
    pub artist_id: i32,
    pub description: Option<String>,
    pub cover_art_url: Option<String>,
    pub release_date: Option<NaiveDateTime>,
    pub genre: Option<String>,
}

// Canonical catalog track. audio_key identifies the stored audio object and
// falls back to 'default-key' when the upload pipeline has not assigned one.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = tracks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Track {
    pub id: i32,
    pub title: String,
    pub artist_id: i32,
    pub album_id: Option<i32>,
    pub duration: i32,
    pub genre: Option<String>,
    pub isrc: Option<String>,
    pub audio_url: String,
    pub audio_key: String,
    pub cover_art_url: Option<String>,
    pub lyrics: Option<String>,
    pub is_published: bool,
    pub play_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tracks)]
pub struct NewTrack {
    pub title: String,
    pub artist_id: i32,
    pub album_id: Option<i32>,
    pub duration: i32,
    pub genre: Option<String>,
    pub audio_url: String,
    pub cover_art_url: Option<String>,
    pub is_published: bool,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = tracks)]
pub struct UpdateTrack {
    pub title: Option<String>,
    pub album_id: Option<Option<i32>>,
    pub genre: Option<String>,
    pub cover_art_url: Option<String>,
    pub lyrics: Option<String>,
    pub is_published: Option<bool>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = playlists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Playlist {
    pub id: i32,
    pub title: String,
    pub user_id: i32,
    pub description: Option<String>,
    pub is_public: bool,
    pub cover_art_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = playlists)]
pub struct NewPlaylist {
    pub title: String,
    pub user_id: i32,
    pub description: Option<String>,
    pub is_public: bool,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = playlist_tracks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlaylistTrack {
    pub id: i32,
    pub playlist_id: i32,
    pub track_id: i32,
    pub position: i32,
    pub added_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = playlist_tracks)]
pub struct NewPlaylistTrack {
    pub playlist_id: i32,
    pub track_id: i32,
    pub position: i32,
}

// One row per (user, track) pair, enforced by user_track_favorite_unique.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = favorites)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub track_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = favorites)]
pub struct NewFavorite {
    pub user_id: i32,
    pub track_id: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = stream_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StreamHistoryEntry {
    pub id: i32,
    pub user_id: i32,
    pub track_id: i32,
    pub seconds_played: i32,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = stream_history)]
pub struct NewStreamHistoryEntry {
    pub user_id: i32,
    pub track_id: i32,
    pub seconds_played: i32,
    pub completed: bool,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub post_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = posts)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub post_type: String,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PostType {
    Post,
    Testimonial,
    Artwork,
}

impl PostType {
    pub fn from_type_str(value: &str) -> Option<Self> {
        match value {
            "post" => Some(Self::Post),
            "testimonial" => Some(Self::Testimonial),
            "artwork" => Some(Self::Artwork),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Testimonial => "testimonial",
            Self::Artwork => "artwork",
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Generic stored object registry; file_key is globally unique.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = uploaded_files)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UploadedFile {
    pub id: i32,
    pub user_id: i32,
    pub file_name: String,
    pub file_key: String,
    pub file_url: String,
    pub file_type: String,
    pub mime_type: String,
    pub file_size: i32,
    pub metadata: Option<String>,
    pub uploaded_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = uploaded_files)]
pub struct NewUploadedFile {
    pub user_id: i32,
    pub file_name: String,
    pub file_key: String,
    pub file_url: String,
    pub file_type: String,
    pub mime_type: String,
    pub file_size: i32,
    pub metadata: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FileType {
    Audio,
    Image,
    Video,
}

impl FileType {
    pub fn from_type_str(value: &str) -> Option<Self> {
        match value {
            "audio" => Some(Self::Audio),
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
