use chrono::Utc;
use diesel::prelude::*;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::review::*;
use crate::schema::{
    album_reviews, artist_responses, review_helpfulness_votes, track_ratings, track_reviews,
};

/// Review and rating operations. Every write that touches track_reviews
/// recomputes the aggregate track_ratings row in the same transaction.
pub struct ReviewOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> ReviewOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn create_track_review(&self, new_review: &NewTrackReview) -> Result<TrackReview, DataError> {
        validate_rating(new_review.rating).map_err(DataError::CheckViolation)?;

        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let review = diesel::insert_into(track_reviews::table)
                .values(new_review)
                .get_result::<TrackReview>(conn)?;

            recompute_track_rating(conn, review.track_id)?;
            Ok(review)
        })
        .map_err(DataError::from)
    }

    pub fn get_track_review(&self, id: i32) -> Result<Option<TrackReview>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let review = track_reviews::table
            .find(id)
            .first::<TrackReview>(&mut conn)
            .optional()?;
        Ok(review)
    }

    pub fn reviews_for_track(&self, track_id: i32) -> Result<Vec<TrackReview>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let reviews = track_reviews::table
            .filter(track_reviews::track_id.eq(track_id))
            .order(track_reviews::created_at.desc())
            .load::<TrackReview>(&mut conn)?;
        Ok(reviews)
    }

    pub fn update_track_review(
        &self,
        id: i32,
        mut changes: UpdateTrackReview,
    ) -> Result<TrackReview, DataError> {
        if let Some(rating) = changes.rating {
            validate_rating(rating).map_err(DataError::CheckViolation)?;
        }

        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            changes.updated_at = Some(Utc::now().naive_utc());
            let review = diesel::update(track_reviews::table.find(id))
                .set(&changes)
                .get_result::<TrackReview>(conn)?;

            recompute_track_rating(conn, review.track_id)?;
            Ok(review)
        })
        .map_err(DataError::from)
    }

    pub fn delete_track_review(&self, id: i32) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let review = track_reviews::table
                .find(id)
                .first::<TrackReview>(conn)
                .optional()?;

            let Some(review) = review else { return Ok(0) };

            let deleted = diesel::delete(track_reviews::table.find(id)).execute(conn)?;
            recompute_track_rating(conn, review.track_id)?;
            Ok(deleted)
        })
        .map_err(DataError::from)
    }

    pub fn get_rating_for_track(&self, track_id: i32) -> Result<Option<TrackRating>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let rating = track_ratings::table
            .filter(track_ratings::track_id.eq(track_id))
            .first::<TrackRating>(&mut conn)
            .optional()?;
        Ok(rating)
    }

    /// Records a helpfulness vote and bumps the matching counter on the
    /// review. One vote per (user, review).
    pub fn vote_on_review(
        &self,
        review_id: i32,
        user_id: i32,
        is_helpful: bool,
    ) -> Result<ReviewHelpfulnessVote, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let vote = diesel::insert_into(review_helpfulness_votes::table)
                .values(&NewReviewHelpfulnessVote {
                    review_id,
                    user_id,
                    is_helpful,
                })
                .get_result::<ReviewHelpfulnessVote>(conn)?;

            if is_helpful {
                diesel::update(track_reviews::table.find(review_id))
                    .set(track_reviews::helpful.eq(track_reviews::helpful + 1))
                    .execute(conn)?;
            } else {
                diesel::update(track_reviews::table.find(review_id))
                    .set(track_reviews::unhelpful.eq(track_reviews::unhelpful + 1))
                    .execute(conn)?;
            }

            Ok(vote)
        })
        .map_err(DataError::from)
    }

    pub fn create_album_review(&self, new_review: &NewAlbumReview) -> Result<AlbumReview, DataError> {
        validate_rating(new_review.rating).map_err(DataError::CheckViolation)?;

        let mut conn = get_connection_with_retry(self.pool)?;

        let review = diesel::insert_into(album_reviews::table)
            .values(new_review)
            .get_result::<AlbumReview>(&mut conn)?;
        Ok(review)
    }

    pub fn reviews_for_album(&self, album_id: i32) -> Result<Vec<AlbumReview>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let reviews = album_reviews::table
            .filter(album_reviews::album_id.eq(album_id))
            .order(album_reviews::created_at.desc())
            .load::<AlbumReview>(&mut conn)?;
        Ok(reviews)
    }

    /// Posts the artist's reply to a review. The unique constraint on
    /// review_id keeps it to one reply per review.
    pub fn respond_to_review(
        &self,
        new_response: &NewArtistResponse,
    ) -> Result<ArtistResponse, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let response = diesel::insert_into(artist_responses::table)
            .values(new_response)
            .get_result::<ArtistResponse>(&mut conn)?;
        Ok(response)
    }

    pub fn response_for_review(&self, review_id: i32) -> Result<Option<ArtistResponse>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let response = artist_responses::table
            .filter(artist_responses::review_id.eq(review_id))
            .first::<ArtistResponse>(&mut conn)
            .optional()?;
        Ok(response)
    }
}

/// Rebuilds the per-track aggregate from the review rows.
fn recompute_track_rating(
    conn: &mut SqliteConnection,
    track_id: i32,
) -> Result<(), diesel::result::Error> {
    let ratings: Vec<i32> = track_reviews::table
        .filter(track_reviews::track_id.eq(track_id))
        .select(track_reviews::rating)
        .load(conn)?;

    if ratings.is_empty() {
        diesel::delete(track_ratings::table.filter(track_ratings::track_id.eq(track_id)))
            .execute(conn)?;
        return Ok(());
    }

    let total = ratings.len() as i32;
    let average = ratings.iter().sum::<i32>() as f32 / total as f32;
    let count_of = |star: i32| ratings.iter().filter(|r| **r == star).count() as i32;

    let aggregate = NewTrackRating {
        track_id,
        average_rating: average,
        total_reviews: total,
        five_star_count: count_of(5),
        four_star_count: count_of(4),
        three_star_count: count_of(3),
        two_star_count: count_of(2),
        one_star_count: count_of(1),
    };

    diesel::insert_into(track_ratings::table)
        .values(&aggregate)
        .on_conflict(track_ratings::track_id)
        .do_update()
        .set((
            track_ratings::average_rating.eq(aggregate.average_rating),
            track_ratings::total_reviews.eq(aggregate.total_reviews),
            track_ratings::five_star_count.eq(aggregate.five_star_count),
            track_ratings::four_star_count.eq(aggregate.four_star_count),
            track_ratings::three_star_count.eq(aggregate.three_star_count),
            track_ratings::two_star_count.eq(aggregate.two_star_count),
            track_ratings::one_star_count.eq(aggregate.one_star_count),
            track_ratings::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(conn)?;

    Ok(())
}
