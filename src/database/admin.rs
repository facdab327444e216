use chrono::Utc;
use diesel::prelude::*;
use log::debug;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::admin::*;
use crate::schema::{
    admin_activity_log, admin_permissions, admin_sessions, admin_settings, admin_users,
};

/// Back-office operator account and session operations
pub struct AdminOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> AdminOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn create_admin(
        &self,
        user_id: i32,
        email: String,
        passcode: &str,
    ) -> Result<AdminUser, DataError> {
        let new_admin = NewAdminUser::new(user_id, email, passcode)
            .map_err(|e| DataError::Query(format!("passcode hashing failed: {e}")))?;

        let mut conn = get_connection_with_retry(self.pool)?;

        let admin = diesel::insert_into(admin_users::table)
            .values(&new_admin)
            .get_result::<AdminUser>(&mut conn)?;

        debug!("Created admin {} ({})", admin.id, admin.email);
        Ok(admin)
    }

    pub fn get_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let admin = admin_users::table
            .filter(admin_users::email.eq(email))
            .first::<AdminUser>(&mut conn)
            .optional()?;
        Ok(admin)
    }

    pub fn get_admin_by_user(&self, user_id: i32) -> Result<Option<AdminUser>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let admin = admin_users::table
            .filter(admin_users::user_id.eq(user_id))
            .first::<AdminUser>(&mut conn)
            .optional()?;
        Ok(admin)
    }

    pub fn update_admin(&self, id: i32, mut changes: UpdateAdminUser) -> Result<AdminUser, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        changes.updated_at = Some(Utc::now().naive_utc());
        let admin = diesel::update(admin_users::table.find(id))
            .set(&changes)
            .get_result::<AdminUser>(&mut conn)?;
        Ok(admin)
    }

    /// Verifies the passcode and opens a session on success.
    pub fn authenticate(
        &self,
        email: &str,
        passcode: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Option<AdminSession>, DataError> {
        let Some(admin) = self.get_admin_by_email(email)? else {
            return Ok(None);
        };

        if !admin.is_active {
            return Ok(None);
        }

        let verified = admin
            .verify_passcode(passcode)
            .map_err(|e| DataError::Query(format!("passcode verification failed: {e}")))?;
        if !verified {
            return Ok(None);
        }

        let mut conn = get_connection_with_retry(self.pool)?;

        let session = diesel::insert_into(admin_sessions::table)
            .values(&NewAdminSession::new(admin.id, ip_address, user_agent))
            .get_result::<AdminSession>(&mut conn)?;

        diesel::update(admin_users::table.find(admin.id))
            .set(admin_users::last_login.eq(Utc::now().naive_utc()))
            .execute(&mut conn)?;

        Ok(Some(session))
    }

    /// Resolves a session token to its admin, rejecting expired sessions.
    pub fn validate_session(&self, session_token: &str) -> Result<Option<AdminUser>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let session = admin_sessions::table
            .filter(admin_sessions::session_token.eq(session_token))
            .first::<AdminSession>(&mut conn)
            .optional()?;

        let Some(session) = session else {
            return Ok(None);
        };

        if session.is_expired(Utc::now().naive_utc()) {
            return Ok(None);
        }

        let admin = admin_users::table
            .find(session.admin_id)
            .first::<AdminUser>(&mut conn)
            .optional()?;
        Ok(admin.filter(|a| a.is_active))
    }

    pub fn revoke_session(&self, session_token: &str) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let deleted = diesel::delete(
            admin_sessions::table.filter(admin_sessions::session_token.eq(session_token)),
        )
        .execute(&mut conn)?;
        Ok(deleted)
    }

    pub fn purge_expired_sessions(&self) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let deleted = diesel::delete(
            admin_sessions::table.filter(admin_sessions::expires_at.le(Utc::now().naive_utc())),
        )
        .execute(&mut conn)?;
        Ok(deleted)
    }

    pub fn log_action(&self, new_entry: &NewAdminActivityEntry) -> Result<AdminActivityEntry, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entry = diesel::insert_into(admin_activity_log::table)
            .values(new_entry)
            .get_result::<AdminActivityEntry>(&mut conn)?;
        Ok(entry)
    }

    pub fn recent_activity(&self, admin_id: i32, limit: i64) -> Result<Vec<AdminActivityEntry>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entries = admin_activity_log::table
            .filter(admin_activity_log::admin_id.eq(admin_id))
            .order(admin_activity_log::occurred_at.desc())
            .limit(limit)
            .load::<AdminActivityEntry>(&mut conn)?;
        Ok(entries)
    }

    pub fn grant_permission(&self, admin_id: i32, permission: &str) -> Result<AdminPermission, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let granted = diesel::insert_into(admin_permissions::table)
            .values(&NewAdminPermission {
                admin_id,
                permission: permission.to_string(),
            })
            .get_result::<AdminPermission>(&mut conn)?;
        Ok(granted)
    }

    pub fn has_permission(&self, admin_id: i32, permission: &str) -> Result<bool, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let count: i64 = admin_permissions::table
            .filter(admin_permissions::admin_id.eq(admin_id))
            .filter(admin_permissions::permission.eq(permission))
            .count()
            .get_result(&mut conn)?;
        Ok(count > 0)
    }

    pub fn revoke_permission(&self, admin_id: i32, permission: &str) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let deleted = diesel::delete(
            admin_permissions::table
                .filter(admin_permissions::admin_id.eq(admin_id))
                .filter(admin_permissions::permission.eq(permission)),
        )
        .execute(&mut conn)?;
        Ok(deleted)
    }

    /// Writes a per-admin setting, replacing any existing value for the key.
    pub fn put_setting(
        &self,
        admin_id: i32,
        setting_key: &str,
        setting_value: Option<String>,
    ) -> Result<AdminSetting, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let setting = diesel::insert_into(admin_settings::table)
            .values(&NewAdminSetting {
                admin_id,
                setting_key: setting_key.to_string(),
                setting_value: setting_value.clone(),
            })
            .on_conflict((admin_settings::admin_id, admin_settings::setting_key))
            .do_update()
            .set((
                admin_settings::setting_value.eq(setting_value),
                admin_settings::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<AdminSetting>(&mut conn)?;
        Ok(setting)
    }

    pub fn get_setting(&self, admin_id: i32, setting_key: &str) -> Result<Option<AdminSetting>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let setting = admin_settings::table
            .filter(admin_settings::admin_id.eq(admin_id))
            .filter(admin_settings::setting_key.eq(setting_key))
            .first::<AdminSetting>(&mut conn)
            .optional()?;
        Ok(setting)
    }
}
