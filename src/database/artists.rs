use chrono::Utc;
use diesel::prelude::*;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::artist::*;
use crate::schema::{
    artist_profiles, artist_uploads, playlist_followers, playlist_shares, user_playlists,
};

/// Artist profile and self-serve upload operations
pub struct ArtistOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> ArtistOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn create_profile(&self, new_profile: &NewArtistProfile) -> Result<ArtistProfile, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let profile = diesel::insert_into(artist_profiles::table)
            .values(new_profile)
            .get_result::<ArtistProfile>(&mut conn)?;
        Ok(profile)
    }

    pub fn get_profile_by_user(&self, user_id: i32) -> Result<Option<ArtistProfile>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let profile = artist_profiles::table
            .filter(artist_profiles::user_id.eq(user_id))
            .first::<ArtistProfile>(&mut conn)
            .optional()?;
        Ok(profile)
    }

    pub fn update_profile(
        &self,
        id: i32,
        mut changes: UpdateArtistProfile,
    ) -> Result<ArtistProfile, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        changes.updated_at = Some(Utc::now().naive_utc());
        let profile = diesel::update(artist_profiles::table.find(id))
            .set(&changes)
            .get_result::<ArtistProfile>(&mut conn)?;
        Ok(profile)
    }

    pub fn adjust_follower_count(&self, id: i32, delta: i32) -> Result<ArtistProfile, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let profile = diesel::update(artist_profiles::table.find(id))
            .set(artist_profiles::followers.eq(artist_profiles::followers + delta))
            .get_result::<ArtistProfile>(&mut conn)?;
        Ok(profile)
    }

    pub fn create_upload(&self, new_upload: &NewArtistUpload) -> Result<ArtistUpload, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let upload = diesel::insert_into(artist_uploads::table)
            .values(new_upload)
            .get_result::<ArtistUpload>(&mut conn)?;
        Ok(upload)
    }

    pub fn get_upload_by_id(&self, id: i32) -> Result<Option<ArtistUpload>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let upload = artist_uploads::table
            .find(id)
            .first::<ArtistUpload>(&mut conn)
            .optional()?;
        Ok(upload)
    }

    pub fn list_uploads_for_artist(&self, artist_id: i32) -> Result<Vec<ArtistUpload>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let uploads = artist_uploads::table
            .filter(artist_uploads::artist_id.eq(artist_id))
            .order(artist_uploads::created_at.desc())
            .load::<ArtistUpload>(&mut conn)?;
        Ok(uploads)
    }

    pub fn record_upload_play(&self, id: i32) -> Result<ArtistUpload, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let upload = diesel::update(artist_uploads::table.find(id))
            .set(artist_uploads::plays.eq(artist_uploads::plays + 1))
            .get_result::<ArtistUpload>(&mut conn)?;
        Ok(upload)
    }

    pub fn record_upload_download(&self, id: i32) -> Result<ArtistUpload, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let upload = diesel::update(artist_uploads::table.find(id))
            .set(artist_uploads::downloads.eq(artist_uploads::downloads + 1))
            .get_result::<ArtistUpload>(&mut conn)?;
        Ok(upload)
    }

    pub fn create_user_playlist(
        &self,
        new_playlist: &NewUserPlaylist,
    ) -> Result<UserPlaylist, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let playlist = diesel::insert_into(user_playlists::table)
            .values(new_playlist)
            .get_result::<UserPlaylist>(&mut conn)?;
        Ok(playlist)
    }

    /// Follows a playlist and bumps its denormalized follower counter in the
    /// same transaction.
    pub fn follow_playlist(
        &self,
        playlist_id: i32,
        user_id: i32,
    ) -> Result<PlaylistFollower, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let follower = diesel::insert_into(playlist_followers::table)
                .values(&NewPlaylistFollower {
                    playlist_id,
                    user_id,
                })
                .get_result::<PlaylistFollower>(conn)?;

            diesel::update(user_playlists::table.find(playlist_id))
                .set(user_playlists::followers.eq(user_playlists::followers + 1))
                .execute(conn)?;

            Ok(follower)
        })
        .map_err(DataError::from)
    }

    pub fn unfollow_playlist(&self, playlist_id: i32, user_id: i32) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let deleted = diesel::delete(
                playlist_followers::table
                    .filter(playlist_followers::playlist_id.eq(playlist_id))
                    .filter(playlist_followers::user_id.eq(user_id)),
            )
            .execute(conn)?;

            if deleted > 0 {
                diesel::update(user_playlists::table.find(playlist_id))
                    .set(user_playlists::followers.eq(user_playlists::followers - 1))
                    .execute(conn)?;
            }

            Ok(deleted)
        })
        .map_err(DataError::from)
    }

    pub fn record_playlist_share(
        &self,
        new_share: &NewPlaylistShare,
    ) -> Result<PlaylistShare, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let share = diesel::insert_into(playlist_shares::table)
                .values(new_share)
                .get_result::<PlaylistShare>(conn)?;

            diesel::update(user_playlists::table.find(new_share.playlist_id))
                .set(user_playlists::shares.eq(user_playlists::shares + 1))
                .execute(conn)?;

            Ok(share)
        })
        .map_err(DataError::from)
    }
}
