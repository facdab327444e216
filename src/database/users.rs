use chrono::Utc;
use diesel::prelude::*;
use log::debug;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::user::*;
use crate::schema::{genre_access, subscription_tiers, user_subscriptions, users};

/// Account and subscription database operations
pub struct UserOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> UserOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn create_user(&self, new_user: &NewUser) -> Result<User, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let user = diesel::insert_into(users::table)
            .values(new_user)
            .get_result::<User>(&mut conn)?;

        debug!("Created user {} ({})", user.id, user.open_id);
        Ok(user)
    }

    /// Looks up a user by external identity handle, creating the row if it
    /// does not exist yet.
    pub fn get_or_create_user(
        &self,
        open_id: &str,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let existing = users::table
            .filter(users::open_id.eq(open_id))
            .first::<User>(&mut conn)
            .optional()?;

        if let Some(user) = existing {
            return Ok(user);
        }

        let new_user = NewUser::new(open_id.to_string(), name, email);
        let user = diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(&mut conn)?;

        debug!("Created user {} ({})", user.id, user.open_id);
        Ok(user)
    }

    pub fn get_user_by_id(&self, id: i32) -> Result<Option<User>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let user = users::table.find(id).first::<User>(&mut conn).optional()?;
        Ok(user)
    }

    pub fn get_user_by_open_id(&self, open_id: &str) -> Result<Option<User>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let user = users::table
            .filter(users::open_id.eq(open_id))
            .first::<User>(&mut conn)
            .optional()?;
        Ok(user)
    }

    pub fn update_user(&self, id: i32, mut changes: UpdateUser) -> Result<User, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        changes.updated_at = Some(Utc::now().naive_utc());
        let user = diesel::update(users::table.find(id))
            .set(&changes)
            .get_result::<User>(&mut conn)?;
        Ok(user)
    }

    pub fn record_sign_in(&self, id: i32) -> Result<User, DataError> {
        let now = Utc::now().naive_utc();
        self.update_user(
            id,
            UpdateUser {
                last_signed_in: Some(now),
                ..Default::default()
            },
        )
    }

    /// Deletes a user row. Owned content cascades; engagement events keep
    /// their rows with the user reference nulled where the schema says so.
    pub fn delete_user(&self, id: i32) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let deleted = diesel::delete(users::table.find(id)).execute(&mut conn)?;
        Ok(deleted)
    }

    pub fn create_subscription_tier(
        &self,
        new_tier: &NewSubscriptionTier,
    ) -> Result<SubscriptionTier, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let tier = diesel::insert_into(subscription_tiers::table)
            .values(new_tier)
            .get_result::<SubscriptionTier>(&mut conn)?;
        Ok(tier)
    }

    pub fn get_tier_by_name(&self, name: &str) -> Result<Option<SubscriptionTier>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let tier = subscription_tiers::table
            .filter(subscription_tiers::name.eq(name))
            .first::<SubscriptionTier>(&mut conn)
            .optional()?;
        Ok(tier)
    }

    pub fn list_tiers(&self) -> Result<Vec<SubscriptionTier>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let tiers = subscription_tiers::table
            .order(subscription_tiers::monthly_price_cents.asc())
            .load::<SubscriptionTier>(&mut conn)?;
        Ok(tiers)
    }

    pub fn create_subscription(
        &self,
        new_subscription: &NewUserSubscription,
    ) -> Result<UserSubscription, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let subscription = diesel::insert_into(user_subscriptions::table)
            .values(new_subscription)
            .get_result::<UserSubscription>(&mut conn)?;
        Ok(subscription)
    }

    pub fn get_active_subscription(
        &self,
        user_id: i32,
    ) -> Result<Option<UserSubscription>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let subscription = user_subscriptions::table
            .filter(user_subscriptions::user_id.eq(user_id))
            .filter(user_subscriptions::status.eq(SubscriptionStatus::Active.as_str()))
            .order(user_subscriptions::created_at.desc())
            .first::<UserSubscription>(&mut conn)
            .optional()?;
        Ok(subscription)
    }

    pub fn update_subscription(
        &self,
        id: i32,
        mut changes: UpdateUserSubscription,
    ) -> Result<UserSubscription, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        changes.updated_at = Some(Utc::now().naive_utc());
        let subscription = diesel::update(user_subscriptions::table.find(id))
            .set(&changes)
            .get_result::<UserSubscription>(&mut conn)?;
        Ok(subscription)
    }

    pub fn cancel_subscription(&self, id: i32) -> Result<UserSubscription, DataError> {
        let now = Utc::now().naive_utc();
        self.update_subscription(
            id,
            UpdateUserSubscription {
                status: Some(SubscriptionStatus::Canceled.to_string()),
                canceled_at: Some(now),
                ..Default::default()
            },
        )
    }

    pub fn grant_genre_access(&self, tier_id: i32, genre: &str) -> Result<GenreAccess, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let access = diesel::insert_into(genre_access::table)
            .values(&NewGenreAccess {
                tier_id,
                genre: genre.to_string(),
            })
            .get_result::<GenreAccess>(&mut conn)?;
        Ok(access)
    }

    pub fn genres_for_tier(&self, tier_id: i32) -> Result<Vec<String>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let genres = genre_access::table
            .filter(genre_access::tier_id.eq(tier_id))
            .select(genre_access::genre)
            .order(genre_access::genre.asc())
            .load::<String>(&mut conn)?;
        Ok(genres)
    }
}
