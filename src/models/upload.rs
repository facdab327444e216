use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{album_artwork, music_metadata, music_uploads, upload_sessions};

// Uploaded master recording moving through the draft -> processing ->
// published lifecycle. archived is terminal but reversible.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = music_uploads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MusicUpload {
    pub id: i32,
    pub uploaded_by: i32,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub file_key: String,
    pub file_url: String,
    pub mime_type: String,
    pub file_size: Option<i32>,
    pub status: String,
    pub release_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = music_uploads)]
pub struct NewMusicUpload {
    pub uploaded_by: i32,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub file_key: String,
    pub file_url: String,
    pub mime_type: String,
    pub file_size: Option<i32>,
    pub status: String,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = music_uploads)]
pub struct UpdateMusicUpload {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub release_date: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum UploadStatus {
    Draft,
    Processing,
    Published,
    Archived,
}

impl UploadStatus {
    pub fn from_status_str(status: &str) -> Option<Self> {
        match status {
            "draft" => Some(Self::Draft),
            "processing" => Some(Self::Processing),
            "published" => Some(Self::Published),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Processing => "processing",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    pub fn is_publicly_visible(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl std::fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = album_artwork)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AlbumArtwork {
    pub id: i32,
    pub uploaded_by: i32,
    pub album_name: String,
    pub artwork_key: String,
    pub artwork_url: String,
    pub mime_type: String,
    pub file_size: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = album_artwork)]
pub struct NewAlbumArtwork {
    pub uploaded_by: i32,
    pub album_name: String,
    pub artwork_key: String,
    pub artwork_url: String,
    pub mime_type: String,
    pub file_size: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

// Resumable upload bookkeeping. session_id is a caller-visible opaque token.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = upload_sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UploadSession {
    pub id: i32,
    pub uploaded_by: i32,
    pub session_id: String,
    pub file_name: String,
    pub file_type: String,
    pub total_size: i32,
    pub uploaded_size: i32,
    pub status: String,
    pub error_message: Option<String>,
    pub created_at: NaiveDateTime,
    pub expires_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = upload_sessions)]
pub struct NewUploadSession {
    pub uploaded_by: i32,
    pub session_id: String,
    pub file_name: String,
    pub file_type: String,
    pub total_size: i32,
    pub expires_at: Option<NaiveDateTime>,
}

impl NewUploadSession {
    pub fn new(uploaded_by: i32, file_name: String, file_type: String, total_size: i32) -> Self {
        let session_id = uuid::Uuid::new_v4().to_string();
        let expires_at = chrono::Utc::now().naive_utc() + chrono::Duration::hours(24);

        Self {
            uploaded_by,
            session_id,
            file_name,
            file_type,
            total_size,
            expires_at: Some(expires_at),
        }
    }
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = upload_sessions)]
pub struct UpdateUploadSession {
    pub uploaded_size: Option<i32>,
    pub status: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SessionStatus {
    Pending,
    Uploading,
    Completed,
    Failed,
}

impl SessionStatus {
    pub fn from_status_str(status: &str) -> Option<Self> {
        match status {
            "pending" => Some(Self::Pending),
            "uploading" => Some(Self::Uploading),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Uploading => "uploading",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Extended credits and identifiers, one row per upload.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = music_metadata)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MusicMetadata {
    pub id: i32,
    pub music_upload_id: i32,
    pub composer: Option<String>,
    pub lyricist: Option<String>,
    pub producer: Option<String>,
    pub record_label: Option<String>,
    pub isrc: Option<String>,
    pub iswc: Option<String>,
    pub bpm: Option<i32>,
    pub key: Option<String>,
    pub language: Option<String>,
    pub lyrics: Option<String>,
    pub tags: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Default)]
#[diesel(table_name = music_metadata)]
pub struct NewMusicMetadata {
    pub music_upload_id: i32,
    pub composer: Option<String>,
    pub lyricist: Option<String>,
    pub producer: Option<String>,
    pub record_label: Option<String>,
    pub isrc: Option<String>,
    pub iswc: Option<String>,
    pub bpm: Option<i32>,
    pub key: Option<String>,
    pub language: Option<String>,
    pub lyrics: Option<String>,
    pub tags: Option<String>,
}
