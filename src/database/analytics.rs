use chrono::{NaiveDate, Utc};
use diesel::prelude::*;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::analytics::*;
use crate::schema::{
    daily_analytics_summary, listener_demographics, revenue_tracking, track_downloads, track_plays,
};

/// Play, download and revenue analytics operations
pub struct AnalyticsOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> AnalyticsOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn record_play(&self, new_play: &NewTrackPlay) -> Result<TrackPlay, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let play = diesel::insert_into(track_plays::table)
            .values(new_play)
            .get_result::<TrackPlay>(&mut conn)?;
        Ok(play)
    }

    pub fn plays_for_upload(&self, music_upload_id: i32) -> Result<Vec<TrackPlay>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let plays = track_plays::table
            .filter(track_plays::music_upload_id.eq(music_upload_id))
            .order(track_plays::played_at.desc())
            .load::<TrackPlay>(&mut conn)?;
        Ok(plays)
    }

    pub fn count_plays(&self, music_upload_id: i32) -> Result<i64, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let count = track_plays::table
            .filter(track_plays::music_upload_id.eq(music_upload_id))
            .count()
            .get_result::<i64>(&mut conn)?;
        Ok(count)
    }

    pub fn record_download(&self, new_download: &NewTrackDownload) -> Result<TrackDownload, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let download = diesel::insert_into(track_downloads::table)
            .values(new_download)
            .get_result::<TrackDownload>(&mut conn)?;
        Ok(download)
    }

    /// Writes the daily rollup for an upload, replacing any existing row for
    /// the same (upload, day).
    pub fn upsert_daily_summary(
        &self,
        summary: &NewDailyAnalyticsSummary,
    ) -> Result<DailyAnalyticsSummary, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let row = diesel::insert_into(daily_analytics_summary::table)
            .values(summary)
            .on_conflict((
                daily_analytics_summary::music_upload_id,
                daily_analytics_summary::date,
            ))
            .do_update()
            .set((
                daily_analytics_summary::plays.eq(summary.plays),
                daily_analytics_summary::downloads.eq(summary.downloads),
                daily_analytics_summary::unique_listeners.eq(summary.unique_listeners),
                daily_analytics_summary::total_duration.eq(summary.total_duration),
                daily_analytics_summary::avg_duration.eq(summary.avg_duration),
            ))
            .get_result::<DailyAnalyticsSummary>(&mut conn)?;
        Ok(row)
    }

    pub fn daily_summaries(
        &self,
        music_upload_id: i32,
        since: NaiveDate,
    ) -> Result<Vec<DailyAnalyticsSummary>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let rows = daily_analytics_summary::table
            .filter(daily_analytics_summary::music_upload_id.eq(music_upload_id))
            .filter(daily_analytics_summary::date.ge(since))
            .order(daily_analytics_summary::date.asc())
            .load::<DailyAnalyticsSummary>(&mut conn)?;
        Ok(rows)
    }

    pub fn upsert_demographic(
        &self,
        demographic: &NewListenerDemographic,
    ) -> Result<ListenerDemographic, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let row = diesel::insert_into(listener_demographics::table)
            .values(demographic)
            .on_conflict((
                listener_demographics::music_upload_id,
                listener_demographics::country,
            ))
            .do_update()
            .set((
                listener_demographics::plays.eq(demographic.plays),
                listener_demographics::downloads.eq(demographic.downloads),
                listener_demographics::unique_listeners.eq(demographic.unique_listeners),
                listener_demographics::last_updated.eq(Utc::now().naive_utc()),
            ))
            .get_result::<ListenerDemographic>(&mut conn)?;
        Ok(row)
    }

    pub fn demographics_for_upload(
        &self,
        music_upload_id: i32,
    ) -> Result<Vec<ListenerDemographic>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let rows = listener_demographics::table
            .filter(listener_demographics::music_upload_id.eq(music_upload_id))
            .order(listener_demographics::plays.desc())
            .load::<ListenerDemographic>(&mut conn)?;
        Ok(rows)
    }

    pub fn record_revenue(&self, new_entry: &NewRevenueEntry) -> Result<RevenueEntry, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entry = diesel::insert_into(revenue_tracking::table)
            .values(new_entry)
            .get_result::<RevenueEntry>(&mut conn)?;
        Ok(entry)
    }

    pub fn revenue_for_upload(&self, music_upload_id: i32) -> Result<i64, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let total: Option<i64> = revenue_tracking::table
            .filter(revenue_tracking::music_upload_id.eq(music_upload_id))
            .select(diesel::dsl::sum(revenue_tracking::amount_cents))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0))
    }
}
