use chrono::Utc;
use diesel::prelude::*;
use log::debug;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::leaderboard::*;
use crate::schema::{
    artist_engagement_metrics, artist_listener_demographics, artist_review_trends,
    most_helpful_comments_leaderboard, most_helpful_reviews, top_reviewers_leaderboard,
    trending_artists_leaderboard, trending_tracks_leaderboard,
};

/// Leaderboard snapshot operations. Boards are recomputed wholesale: each
/// publish replaces every row for the given period in one transaction.
pub struct LeaderboardOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> LeaderboardOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn publish_top_reviewers(
        &self,
        period: LeaderboardPeriod,
        entries: &[NewTopReviewerEntry],
    ) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(
                top_reviewers_leaderboard::table
                    .filter(top_reviewers_leaderboard::period.eq(period.as_str())),
            )
            .execute(conn)?;

            let inserted = diesel::insert_into(top_reviewers_leaderboard::table)
                .values(entries)
                .execute(conn)?;

            debug!("Published {inserted} top reviewer entries for {period}");
            Ok(inserted)
        })
        .map_err(DataError::from)
    }

    pub fn top_reviewers(
        &self,
        period: LeaderboardPeriod,
        limit: i64,
    ) -> Result<Vec<TopReviewerEntry>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entries = top_reviewers_leaderboard::table
            .filter(top_reviewers_leaderboard::period.eq(period.as_str()))
            .order(top_reviewers_leaderboard::rank.asc())
            .limit(limit)
            .load::<TopReviewerEntry>(&mut conn)?;
        Ok(entries)
    }

    pub fn publish_helpful_commenters(
        &self,
        period: LeaderboardPeriod,
        entries: &[NewHelpfulCommenterEntry],
    ) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(
                most_helpful_comments_leaderboard::table
                    .filter(most_helpful_comments_leaderboard::period.eq(period.as_str())),
            )
            .execute(conn)?;

            let inserted = diesel::insert_into(most_helpful_comments_leaderboard::table)
                .values(entries)
                .execute(conn)?;
            Ok(inserted)
        })
        .map_err(DataError::from)
    }

    pub fn helpful_commenters(
        &self,
        period: LeaderboardPeriod,
        limit: i64,
    ) -> Result<Vec<HelpfulCommenterEntry>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entries = most_helpful_comments_leaderboard::table
            .filter(most_helpful_comments_leaderboard::period.eq(period.as_str()))
            .order(most_helpful_comments_leaderboard::rank.asc())
            .limit(limit)
            .load::<HelpfulCommenterEntry>(&mut conn)?;
        Ok(entries)
    }

    pub fn publish_trending_tracks(
        &self,
        period: LeaderboardPeriod,
        entries: &[NewTrendingTrackEntry],
    ) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(
                trending_tracks_leaderboard::table
                    .filter(trending_tracks_leaderboard::period.eq(period.as_str())),
            )
            .execute(conn)?;

            let inserted = diesel::insert_into(trending_tracks_leaderboard::table)
                .values(entries)
                .execute(conn)?;
            Ok(inserted)
        })
        .map_err(DataError::from)
    }

    pub fn trending_tracks(
        &self,
        period: LeaderboardPeriod,
        limit: i64,
    ) -> Result<Vec<TrendingTrackEntry>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entries = trending_tracks_leaderboard::table
            .filter(trending_tracks_leaderboard::period.eq(period.as_str()))
            .order(trending_tracks_leaderboard::rank.asc())
            .limit(limit)
            .load::<TrendingTrackEntry>(&mut conn)?;
        Ok(entries)
    }

    pub fn publish_trending_artists(
        &self,
        period: LeaderboardPeriod,
        entries: &[NewTrendingArtistEntry],
    ) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(
                trending_artists_leaderboard::table
                    .filter(trending_artists_leaderboard::period.eq(period.as_str())),
            )
            .execute(conn)?;

            let inserted = diesel::insert_into(trending_artists_leaderboard::table)
                .values(entries)
                .execute(conn)?;
            Ok(inserted)
        })
        .map_err(DataError::from)
    }

    pub fn trending_artists(
        &self,
        period: LeaderboardPeriod,
        limit: i64,
    ) -> Result<Vec<TrendingArtistEntry>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entries = trending_artists_leaderboard::table
            .filter(trending_artists_leaderboard::period.eq(period.as_str()))
            .order(trending_artists_leaderboard::rank.asc())
            .limit(limit)
            .load::<TrendingArtistEntry>(&mut conn)?;
        Ok(entries)
    }

    pub fn upsert_review_trend(
        &self,
        trend: &NewArtistReviewTrend,
    ) -> Result<ArtistReviewTrend, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let row = diesel::insert_into(artist_review_trends::table)
            .values(trend)
            .on_conflict((
                artist_review_trends::artist_id,
                artist_review_trends::date,
            ))
            .do_update()
            .set((
                artist_review_trends::total_reviews.eq(trend.total_reviews),
                artist_review_trends::average_rating.eq(trend.average_rating),
                artist_review_trends::positive_reviews.eq(trend.positive_reviews),
                artist_review_trends::negative_reviews.eq(trend.negative_reviews),
                artist_review_trends::neutral_reviews.eq(trend.neutral_reviews),
            ))
            .get_result::<ArtistReviewTrend>(&mut conn)?;
        Ok(row)
    }

    pub fn upsert_artist_demographic(
        &self,
        demographic: &NewArtistListenerDemographic,
    ) -> Result<ArtistListenerDemographic, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let row = diesel::insert_into(artist_listener_demographics::table)
            .values(demographic)
            .on_conflict((
                artist_listener_demographics::artist_id,
                artist_listener_demographics::age_group,
                artist_listener_demographics::gender,
                artist_listener_demographics::country,
            ))
            .do_update()
            .set((
                artist_listener_demographics::listener_count.eq(demographic.listener_count),
                artist_listener_demographics::play_count.eq(demographic.play_count),
                artist_listener_demographics::last_updated.eq(Utc::now().naive_utc()),
            ))
            .get_result::<ArtistListenerDemographic>(&mut conn)?;
        Ok(row)
    }

    pub fn upsert_engagement_metric(
        &self,
        metric: &NewArtistEngagementMetric,
    ) -> Result<ArtistEngagementMetric, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let row = diesel::insert_into(artist_engagement_metrics::table)
            .values(metric)
            .on_conflict((
                artist_engagement_metrics::artist_id,
                artist_engagement_metrics::date,
            ))
            .do_update()
            .set((
                artist_engagement_metrics::followers.eq(metric.followers),
                artist_engagement_metrics::new_followers.eq(metric.new_followers),
                artist_engagement_metrics::shares.eq(metric.shares),
                artist_engagement_metrics::saves.eq(metric.saves),
                artist_engagement_metrics::comments.eq(metric.comments),
                artist_engagement_metrics::engagement_rate.eq(metric.engagement_rate),
            ))
            .get_result::<ArtistEngagementMetric>(&mut conn)?;
        Ok(row)
    }

    /// Replaces the highlighted review snapshots for an artist's dashboard.
    pub fn publish_helpful_reviews(
        &self,
        artist_id: i32,
        entries: &[NewMostHelpfulReview],
    ) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(
                most_helpful_reviews::table
                    .filter(most_helpful_reviews::artist_id.eq(artist_id)),
            )
            .execute(conn)?;

            let inserted = diesel::insert_into(most_helpful_reviews::table)
                .values(entries)
                .execute(conn)?;
            Ok(inserted)
        })
        .map_err(DataError::from)
    }

    pub fn helpful_reviews_for_artist(
        &self,
        artist_id: i32,
    ) -> Result<Vec<MostHelpfulReview>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let rows = most_helpful_reviews::table
            .filter(most_helpful_reviews::artist_id.eq(artist_id))
            .order(most_helpful_reviews::helpful_count.desc())
            .load::<MostHelpfulReview>(&mut conn)?;
        Ok(rows)
    }
}
