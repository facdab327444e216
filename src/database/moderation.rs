use chrono::Utc;
use diesel::prelude::*;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::moderation::*;
use crate::schema::{
    badge_criteria_tracking, listener_badges, review_moderation, user_badge_assignments,
};

/// Review moderation queue and listener badge operations
pub struct ModerationOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> ModerationOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn flag_review(
        &self,
        review_id: i32,
        flagged_by: i32,
        reason: &str,
        description: Option<String>,
    ) -> Result<ReviewModerationFlag, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let flag = diesel::insert_into(review_moderation::table)
            .values(&NewReviewModerationFlag {
                review_id,
                flagged_by,
                reason: reason.to_string(),
                description,
                status: ModerationStatus::Pending.to_string(),
            })
            .get_result::<ReviewModerationFlag>(&mut conn)?;
        Ok(flag)
    }

    pub fn open_flags(&self) -> Result<Vec<ReviewModerationFlag>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let flags = review_moderation::table
            .filter(review_moderation::status.eq(ModerationStatus::Pending.as_str()))
            .order(review_moderation::created_at.asc())
            .load::<ReviewModerationFlag>(&mut conn)?;
        Ok(flags)
    }

    /// Moves a flag out of the pending state, recording who decided and when.
    pub fn resolve_flag(
        &self,
        id: i32,
        status: ModerationStatus,
        reviewed_by: i32,
        moderator_notes: Option<String>,
    ) -> Result<ReviewModerationFlag, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let now = Utc::now().naive_utc();
        let flag = diesel::update(review_moderation::table.find(id))
            .set(&UpdateReviewModerationFlag {
                status: Some(status.to_string()),
                moderator_notes,
                reviewed_by: Some(reviewed_by),
                reviewed_at: Some(now),
                updated_at: Some(now),
            })
            .get_result::<ReviewModerationFlag>(&mut conn)?;
        Ok(flag)
    }

    pub fn create_badge(&self, new_badge: &NewListenerBadge) -> Result<ListenerBadge, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let badge = diesel::insert_into(listener_badges::table)
            .values(new_badge)
            .get_result::<ListenerBadge>(&mut conn)?;
        Ok(badge)
    }

    pub fn get_badge_by_name(&self, name: &str) -> Result<Option<ListenerBadge>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let badge = listener_badges::table
            .filter(listener_badges::name.eq(name))
            .first::<ListenerBadge>(&mut conn)
            .optional()?;
        Ok(badge)
    }

    pub fn award_badge(&self, user_id: i32, badge_id: i32) -> Result<UserBadgeAssignment, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let assignment = diesel::insert_into(user_badge_assignments::table)
            .values(&NewUserBadgeAssignment { user_id, badge_id })
            .get_result::<UserBadgeAssignment>(&mut conn)?;
        Ok(assignment)
    }

    pub fn badges_for_user(&self, user_id: i32) -> Result<Vec<ListenerBadge>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let badges = user_badge_assignments::table
            .inner_join(listener_badges::table)
            .filter(user_badge_assignments::user_id.eq(user_id))
            .select(ListenerBadge::as_select())
            .load::<ListenerBadge>(&mut conn)?;
        Ok(badges)
    }

    /// Upserts the progress counter for a (user, badge) pair.
    pub fn track_badge_progress(
        &self,
        user_id: i32,
        badge_id: i32,
        progress: i32,
        target: i32,
    ) -> Result<BadgeCriteriaProgress, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let record = diesel::insert_into(badge_criteria_tracking::table)
            .values(&NewBadgeCriteriaProgress {
                user_id,
                badge_id,
                progress,
                target,
            })
            .on_conflict((
                badge_criteria_tracking::user_id,
                badge_criteria_tracking::badge_id,
            ))
            .do_update()
            .set((
                badge_criteria_tracking::progress.eq(progress),
                badge_criteria_tracking::target.eq(target),
                badge_criteria_tracking::last_updated.eq(Utc::now().naive_utc()),
            ))
            .get_result::<BadgeCriteriaProgress>(&mut conn)?;
        Ok(record)
    }

    pub fn badge_progress(
        &self,
        user_id: i32,
        badge_id: i32,
    ) -> Result<Option<BadgeCriteriaProgress>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let record = badge_criteria_tracking::table
            .filter(badge_criteria_tracking::user_id.eq(user_id))
            .filter(badge_criteria_tracking::badge_id.eq(badge_id))
            .first::<BadgeCriteriaProgress>(&mut conn)
            .optional()?;
        Ok(record)
    }
}
