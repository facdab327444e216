use diesel::prelude::*;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::social::*;
use crate::schema::{activity_feed, share_analytics, share_events, shares, user_follows};

/// Social graph and sharing operations
pub struct SocialOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> SocialOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn record_share(&self, new_share: &NewShare) -> Result<Share, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let share = diesel::insert_into(shares::table)
            .values(new_share)
            .get_result::<Share>(&mut conn)?;
        Ok(share)
    }

    pub fn create_share_analytics(
        &self,
        new_analytics: &NewShareAnalytics,
    ) -> Result<ShareAnalytics, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let analytics = diesel::insert_into(share_analytics::table)
            .values(new_analytics)
            .get_result::<ShareAnalytics>(&mut conn)?;
        Ok(analytics)
    }

    pub fn record_share_click(&self, share_id: i32) -> Result<ShareAnalytics, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let analytics = diesel::update(
            share_analytics::table.filter(share_analytics::share_id.eq(share_id)),
        )
        .set((
            share_analytics::clicks.eq(share_analytics::clicks + 1),
            share_analytics::updated_at.eq(chrono::Utc::now().naive_utc()),
        ))
        .get_result::<ShareAnalytics>(&mut conn)?;
        Ok(analytics)
    }

    pub fn record_share_event(&self, new_event: &NewShareEvent) -> Result<ShareEvent, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let event = diesel::insert_into(share_events::table)
            .values(new_event)
            .get_result::<ShareEvent>(&mut conn)?;
        Ok(event)
    }

    pub fn follow_user(&self, follower_id: i32, following_id: i32) -> Result<UserFollow, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let follow = diesel::insert_into(user_follows::table)
            .values(&NewUserFollow {
                follower_id,
                following_id,
            })
            .get_result::<UserFollow>(&mut conn)?;
        Ok(follow)
    }

    pub fn unfollow_user(&self, follower_id: i32, following_id: i32) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let deleted = diesel::delete(
            user_follows::table
                .filter(user_follows::follower_id.eq(follower_id))
                .filter(user_follows::following_id.eq(following_id)),
        )
        .execute(&mut conn)?;
        Ok(deleted)
    }

    pub fn followers_of(&self, user_id: i32) -> Result<Vec<UserFollow>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let follows = user_follows::table
            .filter(user_follows::following_id.eq(user_id))
            .order(user_follows::followed_at.desc())
            .load::<UserFollow>(&mut conn)?;
        Ok(follows)
    }

    pub fn following_of(&self, user_id: i32) -> Result<Vec<UserFollow>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let follows = user_follows::table
            .filter(user_follows::follower_id.eq(user_id))
            .order(user_follows::followed_at.desc())
            .load::<UserFollow>(&mut conn)?;
        Ok(follows)
    }

    pub fn record_activity(
        &self,
        new_entry: &NewActivityFeedEntry,
    ) -> Result<ActivityFeedEntry, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entry = diesel::insert_into(activity_feed::table)
            .values(new_entry)
            .get_result::<ActivityFeedEntry>(&mut conn)?;
        Ok(entry)
    }

    pub fn activity_for_user(
        &self,
        user_id: i32,
        limit: i64,
    ) -> Result<Vec<ActivityFeedEntry>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entries = activity_feed::table
            .filter(activity_feed::user_id.eq(user_id))
            .order(activity_feed::created_at.desc())
            .limit(limit)
            .load::<ActivityFeedEntry>(&mut conn)?;
        Ok(entries)
    }
}
