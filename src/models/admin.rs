use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
    admin_activity_log, admin_permissions, admin_sessions, admin_settings, admin_users,
};

// Back-office operator account layered on top of a regular user row.
// The passcode is a second factor and is stored as a bcrypt hash.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = admin_users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AdminUser {
    pub id: i32,
    pub user_id: i32,
    pub email: String,
    pub gmail_id: Option<String>,
    #[serde(skip_serializing)]
    pub passcode_hash: Option<String>,
    pub passcode_verified: bool,
    #[serde(skip_serializing)]
    pub verification_code: Option<String>,
    pub verification_code_expiry: Option<NaiveDateTime>,
    pub last_login: Option<NaiveDateTime>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = admin_users)]
pub struct NewAdminUser {
    pub user_id: i32,
    pub email: String,
    pub gmail_id: Option<String>,
    pub passcode_hash: Option<String>,
}

impl NewAdminUser {
    pub fn new(user_id: i32, email: String, passcode: &str) -> Result<Self, bcrypt::BcryptError> {
        let passcode_hash = bcrypt::hash(passcode, bcrypt::DEFAULT_COST)?;
        Ok(Self {
            user_id,
            email,
            gmail_id: None,
            passcode_hash: Some(passcode_hash),
        })
    }
}

impl AdminUser {
    pub fn verify_passcode(&self, passcode: &str) -> Result<bool, bcrypt::BcryptError> {
        match &self.passcode_hash {
            Some(hash) => bcrypt::verify(passcode, hash),
            None => Ok(false),
        }
    }
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = admin_users)]
pub struct UpdateAdminUser {
    pub gmail_id: Option<String>,
    pub passcode_hash: Option<String>,
    pub passcode_verified: Option<bool>,
    pub verification_code: Option<Option<String>>,
    pub verification_code_expiry: Option<Option<NaiveDateTime>>,
    pub last_login: Option<NaiveDateTime>,
    pub is_active: Option<bool>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = admin_sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AdminSession {
    pub id: i32,
    pub admin_id: i32,
    pub session_token: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = admin_sessions)]
pub struct NewAdminSession {
    pub admin_id: i32,
    pub session_token: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub expires_at: NaiveDateTime,
}

impl NewAdminSession {
    pub fn new(admin_id: i32, ip_address: Option<String>, user_agent: Option<String>) -> Self {
        let session_token = uuid::Uuid::new_v4().to_string();
        let expires_at = chrono::Utc::now().naive_utc() + chrono::Duration::hours(8);

        Self {
            admin_id,
            session_token,
            ip_address,
            user_agent,
            expires_at,
        }
    }
}

impl AdminSession {
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.expires_at <= now
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = admin_activity_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AdminActivityEntry {
    pub id: i32,
    pub admin_id: i32,
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<i32>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub occurred_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = admin_activity_log)]
pub struct NewAdminActivityEntry {
    pub admin_id: i32,
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<i32>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
}

// Granted at most once per (admin, permission).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = admin_permissions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AdminPermission {
    pub id: i32,
    pub admin_id: i32,
    pub permission: String,
    pub granted_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = admin_permissions)]
pub struct NewAdminPermission {
    pub admin_id: i32,
    pub permission: String,
}

// Key/value settings scoped per admin, one row per (admin, key).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = admin_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AdminSetting {
    pub id: i32,
    pub admin_id: i32,
    pub setting_key: String,
    pub setting_value: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = admin_settings)]
pub struct NewAdminSetting {
    pub admin_id: i32,
    pub setting_key: String,
    pub setting_value: Option<String>,
}
