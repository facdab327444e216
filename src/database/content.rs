use chrono::Utc;
use diesel::prelude::*;
use log::debug;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::content::*;
use crate::schema::{
    albums, favorites, playlist_tracks, playlists, posts, stream_history, tracks, uploaded_files,
};

/// Catalog operations: albums, tracks, playlists, favorites and play history
pub struct ContentOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> ContentOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn create_album(&self, new_album: &NewAlbum) -> Result<Album, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let album = diesel::insert_into(albums::table)
            .values(new_album)
            .get_result::<Album>(&mut conn)?;
        Ok(album)
    }

    pub fn get_album_by_id(&self, id: i32) -> Result<Option<Album>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let album = albums::table
            .find(id)
            .first::<Album>(&mut conn)
            .optional()?;
        Ok(album)
    }

    /// Deletes an album. Tracks on the album survive with album_id nulled.
    pub fn delete_album(&self, id: i32) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let deleted = diesel::delete(albums::table.find(id)).execute(&mut conn)?;
        Ok(deleted)
    }

    pub fn create_track(&self, new_track: &NewTrack) -> Result<Track, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let track = diesel::insert_into(tracks::table)
            .values(new_track)
            .get_result::<Track>(&mut conn)?;

        debug!("Created track {} ({})", track.id, track.title);
        Ok(track)
    }

    pub fn get_track_by_id(&self, id: i32) -> Result<Option<Track>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let track = tracks::table
            .find(id)
            .first::<Track>(&mut conn)
            .optional()?;
        Ok(track)
    }

    pub fn update_track(&self, id: i32, mut changes: UpdateTrack) -> Result<Track, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        changes.updated_at = Some(Utc::now().naive_utc());
        let track = diesel::update(tracks::table.find(id))
            .set(&changes)
            .get_result::<Track>(&mut conn)?;
        Ok(track)
    }

    pub fn increment_play_count(&self, id: i32) -> Result<Track, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let track = diesel::update(tracks::table.find(id))
            .set(tracks::play_count.eq(tracks::play_count + 1))
            .get_result::<Track>(&mut conn)?;
        Ok(track)
    }

    pub fn list_tracks_by_artist(&self, artist_id: i32) -> Result<Vec<Track>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let result = tracks::table
            .filter(tracks::artist_id.eq(artist_id))
            .order(tracks::created_at.desc())
            .load::<Track>(&mut conn)?;
        Ok(result)
    }

    pub fn list_published_tracks(&self, limit: i64) -> Result<Vec<Track>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let result = tracks::table
            .filter(tracks::is_published.eq(true))
            .order(tracks::created_at.desc())
            .limit(limit)
            .load::<Track>(&mut conn)?;
        Ok(result)
    }

    pub fn count_tracks(&self) -> Result<i64, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let count = tracks::table.count().get_result::<i64>(&mut conn)?;
        Ok(count)
    }

    pub fn create_playlist(&self, new_playlist: &NewPlaylist) -> Result<Playlist, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let playlist = diesel::insert_into(playlists::table)
            .values(new_playlist)
            .get_result::<Playlist>(&mut conn)?;
        Ok(playlist)
    }

    /// Appends a track at the end of a playlist. Position is one past the
    /// current maximum, so concurrent appends on the same playlist may race;
    /// the (playlist, track) unique constraint still holds.
    pub fn add_track_to_playlist(
        &self,
        playlist_id: i32,
        track_id: i32,
    ) -> Result<PlaylistTrack, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let max_position: Option<i32> = playlist_tracks::table
                .filter(playlist_tracks::playlist_id.eq(playlist_id))
                .select(diesel::dsl::max(playlist_tracks::position))
                .first(conn)?;

            let entry = diesel::insert_into(playlist_tracks::table)
                .values(&NewPlaylistTrack {
                    playlist_id,
                    track_id,
                    position: max_position.unwrap_or(-1) + 1,
                })
                .get_result::<PlaylistTrack>(conn)?;
            Ok(entry)
        })
        .map_err(DataError::from)
    }

    pub fn tracks_for_playlist(&self, playlist_id: i32) -> Result<Vec<Track>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let result = playlist_tracks::table
            .inner_join(tracks::table)
            .filter(playlist_tracks::playlist_id.eq(playlist_id))
            .order(playlist_tracks::position.asc())
            .select(Track::as_select())
            .load::<Track>(&mut conn)?;
        Ok(result)
    }

    pub fn favorite_track(&self, user_id: i32, track_id: i32) -> Result<Favorite, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let favorite = diesel::insert_into(favorites::table)
            .values(&NewFavorite { user_id, track_id })
            .get_result::<Favorite>(&mut conn)?;
        Ok(favorite)
    }

    pub fn unfavorite_track(&self, user_id: i32, track_id: i32) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let deleted = diesel::delete(
            favorites::table
                .filter(favorites::user_id.eq(user_id))
                .filter(favorites::track_id.eq(track_id)),
        )
        .execute(&mut conn)?;
        Ok(deleted)
    }

    pub fn favorites_for_user(&self, user_id: i32) -> Result<Vec<Favorite>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let result = favorites::table
            .filter(favorites::user_id.eq(user_id))
            .order(favorites::created_at.desc())
            .load::<Favorite>(&mut conn)?;
        Ok(result)
    }

    pub fn record_stream(
        &self,
        entry: &NewStreamHistoryEntry,
    ) -> Result<StreamHistoryEntry, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let record = diesel::insert_into(stream_history::table)
            .values(entry)
            .get_result::<StreamHistoryEntry>(&mut conn)?;
        Ok(record)
    }

    pub fn create_post(&self, new_post: &NewPost) -> Result<Post, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let post = diesel::insert_into(posts::table)
            .values(new_post)
            .get_result::<Post>(&mut conn)?;
        Ok(post)
    }

    pub fn list_posts_by_type(&self, post_type: PostType) -> Result<Vec<Post>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let result = posts::table
            .filter(posts::post_type.eq(post_type.as_str()))
            .order(posts::created_at.desc())
            .load::<Post>(&mut conn)?;
        Ok(result)
    }

    pub fn register_uploaded_file(
        &self,
        new_file: &NewUploadedFile,
    ) -> Result<UploadedFile, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let file = diesel::insert_into(uploaded_files::table)
            .values(new_file)
            .get_result::<UploadedFile>(&mut conn)?;
        Ok(file)
    }

    pub fn get_uploaded_file_by_key(&self, file_key: &str) -> Result<Option<UploadedFile>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let file = uploaded_files::table
            .filter(uploaded_files::file_key.eq(file_key))
            .first::<UploadedFile>(&mut conn)
            .optional()?;
        Ok(file)
    }
}
