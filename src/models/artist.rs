use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
    artist_profiles, artist_uploads, playlist_followers, playlist_shares, user_playlists,
};

// Public artist page. One profile per user account.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = artist_profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArtistProfile {
    pub id: i32,
    pub user_id: i32,
    pub artist_name: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub banner_image: Option<String>,
    pub genre: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub social_links: Option<String>,
    pub followers: i32,
    pub total_plays: i32,
    pub verified_badge: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = artist_profiles)]
pub struct NewArtistProfile {
    pub user_id: i32,
    pub artist_name: String,
    pub bio: Option<String>,
    pub genre: Option<String>,
    pub location: Option<String>,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = artist_profiles)]
pub struct UpdateArtistProfile {
    pub artist_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub banner_image: Option<String>,
    pub genre: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub social_links: Option<String>,
    pub verified_badge: Option<bool>,
    pub updated_at: Option<NaiveDateTime>,
}

// Self-serve artist catalog entries, distinct from the curated tracks table.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = artist_uploads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArtistUpload {
    pub id: i32,
    pub artist_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub genre: String,
    pub audio_url: String,
    pub audio_key: String,
    pub cover_art_url: Option<String>,
    pub duration: Option<i32>,
    pub bpm: Option<i32>,
    pub key: Option<String>,
    pub release_date: Option<NaiveDateTime>,
    pub is_published: bool,
    pub is_explicit: bool,
    pub downloadable: bool,
    pub download_price_cents: Option<i32>,
    pub plays: i32,
    pub downloads: i32,
    pub likes: i32,
    pub comments: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = artist_uploads)]
pub struct NewArtistUpload {
    pub artist_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub genre: String,
    pub audio_url: String,
    pub audio_key: String,
    pub cover_art_url: Option<String>,
    pub duration: Option<i32>,
    pub is_published: bool,
    pub downloadable: bool,
    pub download_price_cents: Option<i32>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_playlists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserPlaylist {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_public: bool,
    pub plays: i32,
    pub shares: i32,
    pub followers: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_playlists)]
pub struct NewUserPlaylist {
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = playlist_followers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlaylistFollower {
    pub id: i32,
    pub playlist_id: i32,
    pub user_id: i32,
    pub followed_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = playlist_followers)]
pub struct NewPlaylistFollower {
    pub playlist_id: i32,
    pub user_id: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = playlist_shares)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlaylistShare {
    pub id: i32,
    pub playlist_id: i32,
    pub shared_by: i32,
    pub platform: Option<String>,
    pub shared_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = playlist_shares)]
pub struct NewPlaylistShare {
    pub playlist_id: i32,
    pub shared_by: i32,
    pub platform: Option<String>,
}
