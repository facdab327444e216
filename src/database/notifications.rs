use chrono::Utc;
use diesel::prelude::*;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::notification::*;
use crate::schema::{email_notifications, notification_preferences, notifications, push_tokens};

/// Notification storage and delivery preference operations
pub struct NotificationOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> NotificationOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn create_notification(
        &self,
        new_notification: &NewNotification,
    ) -> Result<Notification, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let notification = diesel::insert_into(notifications::table)
            .values(new_notification)
            .get_result::<Notification>(&mut conn)?;
        Ok(notification)
    }

    pub fn unread_for_user(&self, user_id: i32) -> Result<Vec<Notification>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let result = notifications::table
            .filter(notifications::user_id.eq(user_id))
            .filter(notifications::is_read.eq(false))
            .order(notifications::created_at.desc())
            .load::<Notification>(&mut conn)?;
        Ok(result)
    }

    pub fn mark_read(&self, id: i32) -> Result<Notification, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let notification = diesel::update(notifications::table.find(id))
            .set((
                notifications::is_read.eq(true),
                notifications::read_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<Notification>(&mut conn)?;
        Ok(notification)
    }

    pub fn mark_all_read(&self, user_id: i32) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let updated = diesel::update(
            notifications::table
                .filter(notifications::user_id.eq(user_id))
                .filter(notifications::is_read.eq(false)),
        )
        .set((
            notifications::is_read.eq(true),
            notifications::read_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;
        Ok(updated)
    }

    /// Returns the user's preference row, creating the defaults row on first
    /// access.
    pub fn preferences_for_user(&self, user_id: i32) -> Result<NotificationPreferences, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let existing = notification_preferences::table
            .filter(notification_preferences::user_id.eq(user_id))
            .first::<NotificationPreferences>(&mut conn)
            .optional()?;

        if let Some(preferences) = existing {
            return Ok(preferences);
        }

        let preferences = diesel::insert_into(notification_preferences::table)
            .values(&NewNotificationPreferences { user_id })
            .get_result::<NotificationPreferences>(&mut conn)?;
        Ok(preferences)
    }

    pub fn update_preferences(
        &self,
        user_id: i32,
        mut changes: UpdateNotificationPreferences,
    ) -> Result<NotificationPreferences, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        changes.updated_at = Some(Utc::now().naive_utc());
        let preferences = diesel::update(
            notification_preferences::table
                .filter(notification_preferences::user_id.eq(user_id)),
        )
        .set(&changes)
        .get_result::<NotificationPreferences>(&mut conn)?;
        Ok(preferences)
    }

    pub fn queue_email(
        &self,
        new_email: &NewEmailNotification,
    ) -> Result<EmailNotification, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let email = diesel::insert_into(email_notifications::table)
            .values(new_email)
            .get_result::<EmailNotification>(&mut conn)?;
        Ok(email)
    }

    pub fn pending_emails(&self, limit: i64) -> Result<Vec<EmailNotification>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let emails = email_notifications::table
            .filter(email_notifications::sent.eq(false))
            .order(email_notifications::created_at.asc())
            .limit(limit)
            .load::<EmailNotification>(&mut conn)?;
        Ok(emails)
    }

    pub fn mark_email_sent(&self, id: i32) -> Result<EmailNotification, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let email = diesel::update(email_notifications::table.find(id))
            .set((
                email_notifications::sent.eq(true),
                email_notifications::sent_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<EmailNotification>(&mut conn)?;
        Ok(email)
    }

    pub fn register_push_token(&self, new_token: &NewPushToken) -> Result<PushToken, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let token = diesel::insert_into(push_tokens::table)
            .values(new_token)
            .get_result::<PushToken>(&mut conn)?;
        Ok(token)
    }

    pub fn push_tokens_for_user(&self, user_id: i32) -> Result<Vec<PushToken>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let tokens = push_tokens::table
            .filter(push_tokens::user_id.eq(user_id))
            .load::<PushToken>(&mut conn)?;
        Ok(tokens)
    }

    pub fn remove_push_token(&self, token: &str) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let deleted = diesel::delete(push_tokens::table.filter(push_tokens::token.eq(token)))
            .execute(&mut conn)?;
        Ok(deleted)
    }
}
