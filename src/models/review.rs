use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
    album_reviews, artist_responses, review_helpfulness_votes, track_ratings, track_reviews,
};

// One review per listener per track, enforced by user_track_unique.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = track_reviews)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrackReview {
    pub id: i32,
    pub user_id: i32,
    pub track_id: i32,
    pub rating: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub helpful: i32,
    pub unhelpful: i32,
    pub is_verified_purchase: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = track_reviews)]
pub struct NewTrackReview {
    pub user_id: i32,
    pub track_id: i32,
    pub rating: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_verified_purchase: bool,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = track_reviews)]
pub struct UpdateTrackReview {
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}

// Aggregate rating row, one per track, recomputed from track_reviews.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = track_ratings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrackRating {
    pub id: i32,
    pub track_id: i32,
    pub average_rating: f32,
    pub total_reviews: i32,
    pub five_star_count: i32,
    pub four_star_count: i32,
    pub three_star_count: i32,
    pub two_star_count: i32,
    pub one_star_count: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = track_ratings)]
pub struct NewTrackRating {
    pub track_id: i32,
    pub average_rating: f32,
    pub total_reviews: i32,
    pub five_star_count: i32,
    pub four_star_count: i32,
    pub three_star_count: i32,
    pub two_star_count: i32,
    pub one_star_count: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = review_helpfulness_votes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReviewHelpfulnessVote {
    pub id: i32,
    pub review_id: i32,
    pub user_id: i32,
    pub is_helpful: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = review_helpfulness_votes)]
pub struct NewReviewHelpfulnessVote {
    pub review_id: i32,
    pub user_id: i32,
    pub is_helpful: bool,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = album_reviews)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AlbumReview {
    pub id: i32,
    pub user_id: i32,
    pub album_id: i32,
    pub rating: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub helpful: i32,
    pub unhelpful: i32,
    pub is_verified_purchase: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = album_reviews)]
pub struct NewAlbumReview {
    pub user_id: i32,
    pub album_id: i32,
    pub rating: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_verified_purchase: bool,
}

// One artist reply per review.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = artist_responses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArtistResponse {
    pub id: i32,
    pub review_id: i32,
    pub artist_id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = artist_responses)]
pub struct NewArtistResponse {
    pub review_id: i32,
    pub artist_id: i32,
    pub content: String,
}

pub fn validate_rating(rating: i32) -> Result<(), String> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(format!("rating must be between 1 and 5, got {rating}"))
    }
}
