use chrono::Utc;
use diesel::prelude::*;
use log::debug;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::upload::*;
use crate::schema::{album_artwork, music_metadata, music_uploads, upload_sessions};

/// Music upload pipeline operations
pub struct UploadOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> UploadOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn create_upload(&self, new_upload: &NewMusicUpload) -> Result<MusicUpload, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let upload = diesel::insert_into(music_uploads::table)
            .values(new_upload)
            .get_result::<MusicUpload>(&mut conn)?;

        debug!("Created music upload {} ({})", upload.id, upload.title);
        Ok(upload)
    }

    pub fn get_upload_by_id(&self, id: i32) -> Result<Option<MusicUpload>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let upload = music_uploads::table
            .find(id)
            .first::<MusicUpload>(&mut conn)
            .optional()?;
        Ok(upload)
    }

    pub fn list_uploads_for_user(&self, uploaded_by: i32) -> Result<Vec<MusicUpload>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let uploads = music_uploads::table
            .filter(music_uploads::uploaded_by.eq(uploaded_by))
            .order(music_uploads::created_at.desc())
            .load::<MusicUpload>(&mut conn)?;
        Ok(uploads)
    }

    pub fn update_upload(
        &self,
        id: i32,
        mut changes: UpdateMusicUpload,
    ) -> Result<MusicUpload, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        changes.updated_at = Some(Utc::now().naive_utc());
        let upload = diesel::update(music_uploads::table.find(id))
            .set(&changes)
            .get_result::<MusicUpload>(&mut conn)?;
        Ok(upload)
    }

    pub fn set_upload_status(&self, id: i32, status: UploadStatus) -> Result<MusicUpload, DataError> {
        self.update_upload(
            id,
            UpdateMusicUpload {
                status: Some(status.to_string()),
                ..Default::default()
            },
        )
    }

    pub fn create_artwork(&self, new_artwork: &NewAlbumArtwork) -> Result<AlbumArtwork, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let artwork = diesel::insert_into(album_artwork::table)
            .values(new_artwork)
            .get_result::<AlbumArtwork>(&mut conn)?;
        Ok(artwork)
    }

    pub fn artwork_for_album(&self, album_name: &str) -> Result<Vec<AlbumArtwork>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let artwork = album_artwork::table
            .filter(album_artwork::album_name.eq(album_name))
            .order(album_artwork::created_at.desc())
            .load::<AlbumArtwork>(&mut conn)?;
        Ok(artwork)
    }

    pub fn open_session(&self, new_session: NewUploadSession) -> Result<UploadSession, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let session = diesel::insert_into(upload_sessions::table)
            .values(&new_session)
            .get_result::<UploadSession>(&mut conn)?;

        debug!("Opened upload session {}", session.session_id);
        Ok(session)
    }

    pub fn get_session(&self, session_id: &str) -> Result<Option<UploadSession>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let session = upload_sessions::table
            .filter(upload_sessions::session_id.eq(session_id))
            .first::<UploadSession>(&mut conn)
            .optional()?;
        Ok(session)
    }

    pub fn record_session_progress(
        &self,
        session_id: &str,
        uploaded_size: i32,
    ) -> Result<UploadSession, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let session = diesel::update(
            upload_sessions::table.filter(upload_sessions::session_id.eq(session_id)),
        )
        .set(&UpdateUploadSession {
            uploaded_size: Some(uploaded_size),
            status: Some(SessionStatus::Uploading.to_string()),
            error_message: None,
        })
        .get_result::<UploadSession>(&mut conn)?;
        Ok(session)
    }

    pub fn close_session(
        &self,
        session_id: &str,
        status: SessionStatus,
        error_message: Option<String>,
    ) -> Result<UploadSession, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let session = diesel::update(
            upload_sessions::table.filter(upload_sessions::session_id.eq(session_id)),
        )
        .set(&UpdateUploadSession {
            uploaded_size: None,
            status: Some(status.to_string()),
            error_message,
        })
        .get_result::<UploadSession>(&mut conn)?;
        Ok(session)
    }

    /// Attaches extended metadata to an upload. At most one row per upload.
    pub fn attach_metadata(&self, new_metadata: &NewMusicMetadata) -> Result<MusicMetadata, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let metadata = diesel::insert_into(music_metadata::table)
            .values(new_metadata)
            .get_result::<MusicMetadata>(&mut conn)?;
        Ok(metadata)
    }

    pub fn metadata_for_upload(&self, music_upload_id: i32) -> Result<Option<MusicMetadata>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let metadata = music_metadata::table
            .filter(music_metadata::music_upload_id.eq(music_upload_id))
            .first::<MusicMetadata>(&mut conn)
            .optional()?;
        Ok(metadata)
    }
}
