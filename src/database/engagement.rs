use chrono::Utc;
use diesel::prelude::*;
use log::debug;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::engagement::*;
use crate::schema::{
    achievements, leaderboards, social_challenges, user_achievements, user_challenge_progress,
    user_gamification_profile, user_listening_history, user_listening_stats, user_milestones,
    user_preferences,
};

/// Gamification operations: points, achievements, challenges and listening
/// stats
pub struct EngagementOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> EngagementOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Returns the user's gamification profile, creating the zeroed row on
    /// first access.
    pub fn profile_for_user(&self, user_id: i32) -> Result<GamificationProfile, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let existing = user_gamification_profile::table
            .filter(user_gamification_profile::user_id.eq(user_id))
            .first::<GamificationProfile>(&mut conn)
            .optional()?;

        if let Some(profile) = existing {
            return Ok(profile);
        }

        let profile = diesel::insert_into(user_gamification_profile::table)
            .values(&NewGamificationProfile { user_id })
            .get_result::<GamificationProfile>(&mut conn)?;
        Ok(profile)
    }

    pub fn update_profile(
        &self,
        user_id: i32,
        mut changes: UpdateGamificationProfile,
    ) -> Result<GamificationProfile, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        changes.updated_at = Some(Utc::now().naive_utc());
        let profile = diesel::update(
            user_gamification_profile::table
                .filter(user_gamification_profile::user_id.eq(user_id)),
        )
        .set(&changes)
        .get_result::<GamificationProfile>(&mut conn)?;
        Ok(profile)
    }

    pub fn add_points(&self, user_id: i32, points: i32) -> Result<GamificationProfile, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let profile = diesel::update(
            user_gamification_profile::table
                .filter(user_gamification_profile::user_id.eq(user_id)),
        )
        .set((
            user_gamification_profile::total_points
                .eq(user_gamification_profile::total_points + points),
            user_gamification_profile::updated_at.eq(Utc::now().naive_utc()),
        ))
        .get_result::<GamificationProfile>(&mut conn)?;
        Ok(profile)
    }

    pub fn create_achievement(&self, new_achievement: &NewAchievement) -> Result<Achievement, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let achievement = diesel::insert_into(achievements::table)
            .values(new_achievement)
            .get_result::<Achievement>(&mut conn)?;
        Ok(achievement)
    }

    pub fn list_achievements(&self, include_hidden: bool) -> Result<Vec<Achievement>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let mut query = achievements::table.into_boxed();
        if !include_hidden {
            query = query.filter(achievements::is_hidden.eq(false));
        }

        let result = query
            .order(achievements::name.asc())
            .load::<Achievement>(&mut conn)?;
        Ok(result)
    }

    /// Unlocks an achievement for a user and credits its point reward in one
    /// transaction. A second unlock of the same achievement is a
    /// UniqueViolation.
    pub fn unlock_achievement(
        &self,
        user_id: i32,
        achievement_id: i32,
    ) -> Result<UserAchievement, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let achievement = achievements::table
                .find(achievement_id)
                .first::<Achievement>(conn)?;

            let unlocked = diesel::insert_into(user_achievements::table)
                .values(&NewUserAchievement {
                    user_id,
                    achievement_id,
                    unlocked_at: Utc::now().naive_utc(),
                    progress: None,
                })
                .get_result::<UserAchievement>(conn)?;

            diesel::update(
                user_gamification_profile::table
                    .filter(user_gamification_profile::user_id.eq(user_id)),
            )
            .set((
                user_gamification_profile::total_points
                    .eq(user_gamification_profile::total_points + achievement.points_reward),
                user_gamification_profile::total_achievements
                    .eq(user_gamification_profile::total_achievements + 1),
                user_gamification_profile::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(conn)?;

            debug!("User {user_id} unlocked achievement {achievement_id}");
            Ok(unlocked)
        })
        .map_err(DataError::from)
    }

    pub fn achievements_for_user(&self, user_id: i32) -> Result<Vec<UserAchievement>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let result = user_achievements::table
            .filter(user_achievements::user_id.eq(user_id))
            .order(user_achievements::unlocked_at.desc())
            .load::<UserAchievement>(&mut conn)?;
        Ok(result)
    }

    /// Replaces the points leaderboard rows for a (type, period) pair.
    pub fn publish_leaderboard(
        &self,
        leaderboard_type: &str,
        period: &str,
        entries: &[NewLeaderboardEntry],
    ) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(
                leaderboards::table
                    .filter(leaderboards::leaderboard_type.eq(leaderboard_type))
                    .filter(leaderboards::period.eq(period)),
            )
            .execute(conn)?;

            let inserted = diesel::insert_into(leaderboards::table)
                .values(entries)
                .execute(conn)?;
            Ok(inserted)
        })
        .map_err(DataError::from)
    }

    pub fn leaderboard(
        &self,
        leaderboard_type: &str,
        period: &str,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entries = leaderboards::table
            .filter(leaderboards::leaderboard_type.eq(leaderboard_type))
            .filter(leaderboards::period.eq(period))
            .order(leaderboards::rank.asc())
            .limit(limit)
            .load::<LeaderboardEntry>(&mut conn)?;
        Ok(entries)
    }

    pub fn record_milestone(&self, new_milestone: &NewUserMilestone) -> Result<UserMilestone, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let milestone = diesel::insert_into(user_milestones::table)
            .values(new_milestone)
            .get_result::<UserMilestone>(&mut conn)?;
        Ok(milestone)
    }

    pub fn mark_milestone_celebrated(&self, id: i32) -> Result<UserMilestone, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let milestone = diesel::update(user_milestones::table.find(id))
            .set(user_milestones::celebration_sent.eq(true))
            .get_result::<UserMilestone>(&mut conn)?;
        Ok(milestone)
    }

    pub fn create_challenge(&self, new_challenge: &NewSocialChallenge) -> Result<SocialChallenge, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let challenge = diesel::insert_into(social_challenges::table)
            .values(new_challenge)
            .get_result::<SocialChallenge>(&mut conn)?;
        Ok(challenge)
    }

    pub fn active_challenges(&self) -> Result<Vec<SocialChallenge>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let now = Utc::now().naive_utc();
        let challenges = social_challenges::table
            .filter(social_challenges::is_active.eq(true))
            .filter(social_challenges::start_date.le(now))
            .filter(social_challenges::end_date.ge(now))
            .order(social_challenges::end_date.asc())
            .load::<SocialChallenge>(&mut conn)?;
        Ok(challenges)
    }

    pub fn join_challenge(&self, user_id: i32, challenge_id: i32) -> Result<ChallengeProgress, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let progress = diesel::insert_into(user_challenge_progress::table)
            .values(&NewChallengeProgress {
                user_id,
                challenge_id,
                progress: 0,
            })
            .get_result::<ChallengeProgress>(&mut conn)?;
        Ok(progress)
    }

    /// Advances challenge progress and flips completed when the target is
    /// reached.
    pub fn advance_challenge(
        &self,
        user_id: i32,
        challenge_id: i32,
        amount: i32,
    ) -> Result<ChallengeProgress, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let challenge = social_challenges::table
                .find(challenge_id)
                .first::<SocialChallenge>(conn)?;

            let current = user_challenge_progress::table
                .filter(user_challenge_progress::user_id.eq(user_id))
                .filter(user_challenge_progress::challenge_id.eq(challenge_id))
                .first::<ChallengeProgress>(conn)?;

            let new_progress = current.progress + amount;
            let now = Utc::now().naive_utc();
            let completed = !current.completed && new_progress >= challenge.target;

            let updated = diesel::update(user_challenge_progress::table.find(current.id))
                .set(&UpdateChallengeProgress {
                    progress: Some(new_progress),
                    completed: if completed { Some(true) } else { None },
                    completed_at: if completed { Some(now) } else { None },
                    reward_claimed: None,
                    updated_at: Some(now),
                })
                .get_result::<ChallengeProgress>(conn)?;

            Ok(updated)
        })
        .map_err(DataError::from)
    }

    pub fn claim_challenge_reward(&self, id: i32) -> Result<ChallengeProgress, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let progress = diesel::update(user_challenge_progress::table.find(id))
            .set(&UpdateChallengeProgress {
                reward_claimed: Some(true),
                updated_at: Some(Utc::now().naive_utc()),
                ..Default::default()
            })
            .get_result::<ChallengeProgress>(&mut conn)?;
        Ok(progress)
    }

    pub fn record_listening(
        &self,
        entry: &NewListeningHistoryEntry,
    ) -> Result<ListeningHistoryEntry, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let record = diesel::insert_into(user_listening_history::table)
            .values(entry)
            .get_result::<ListeningHistoryEntry>(&mut conn)?;
        Ok(record)
    }

    pub fn listening_history(
        &self,
        user_id: i32,
        limit: i64,
    ) -> Result<Vec<ListeningHistoryEntry>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entries = user_listening_history::table
            .filter(user_listening_history::user_id.eq(user_id))
            .order(user_listening_history::played_at.desc())
            .limit(limit)
            .load::<ListeningHistoryEntry>(&mut conn)?;
        Ok(entries)
    }

    pub fn stats_for_year(&self, user_id: i32, year: i32) -> Result<Option<ListeningStats>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let stats = user_listening_stats::table
            .filter(user_listening_stats::user_id.eq(user_id))
            .filter(user_listening_stats::year.eq(year))
            .first::<ListeningStats>(&mut conn)
            .optional()?;
        Ok(stats)
    }

    pub fn create_stats(&self, new_stats: &NewListeningStats) -> Result<ListeningStats, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let stats = diesel::insert_into(user_listening_stats::table)
            .values(new_stats)
            .get_result::<ListeningStats>(&mut conn)?;
        Ok(stats)
    }

    pub fn mark_wrapped_generated(&self, id: i32) -> Result<ListeningStats, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let now = Utc::now().naive_utc();
        let stats = diesel::update(user_listening_stats::table.find(id))
            .set((
                user_listening_stats::wrapped_generated.eq(true),
                user_listening_stats::wrapped_generated_at.eq(now),
                user_listening_stats::updated_at.eq(now),
            ))
            .get_result::<ListeningStats>(&mut conn)?;
        Ok(stats)
    }

    pub fn save_preferences(
        &self,
        new_preferences: &NewUserPreferences,
    ) -> Result<UserPreferences, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let preferences = diesel::insert_into(user_preferences::table)
            .values(new_preferences)
            .get_result::<UserPreferences>(&mut conn)?;
        Ok(preferences)
    }

    pub fn preferences_for_user(&self, user_id: i32) -> Result<Option<UserPreferences>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let preferences = user_preferences::table
            .filter(user_preferences::user_id.eq(user_id))
            .first::<UserPreferences>(&mut conn)
            .optional()?;
        Ok(preferences)
    }
}
