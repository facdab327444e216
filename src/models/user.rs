use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{genre_access, subscription_tiers, user_subscriptions, users};

// Platform account. open_id is the external identity provider handle and is
// the only natural key on this table.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub role: String,
    pub email_verified: bool,
    pub two_factor_enabled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub last_signed_in: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub role: String,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = users)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub two_factor_enabled: Option<bool>,
    pub updated_at: Option<NaiveDateTime>,
    pub last_signed_in: Option<NaiveDateTime>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn from_role_str(role: &str) -> Option<Self> {
        match role {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl NewUser {
    pub fn new(open_id: String, name: Option<String>, email: Option<String>) -> Self {
        Self {
            open_id,
            name,
            email,
            login_method: None,
            role: UserRole::User.to_string(),
        }
    }
}

impl User {
    pub fn is_admin(&self) -> bool {
        UserRole::from_role_str(&self.role) == Some(UserRole::Admin)
    }
}

// Subscription plan catalog. All prices are integer cents.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = subscription_tiers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubscriptionTier {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub monthly_price_cents: i32,
    pub yearly_price_cents: Option<i32>,
    pub features: Option<String>,
    pub stripe_price_id: Option<String>,
    pub created_at: NaiveDateTime,
}

impl SubscriptionTier {
    /// Decodes the opaque features payload. The application layer writes it
    /// as a JSON array of feature names; a NULL column is an empty list.
    pub fn feature_list(&self) -> Result<Vec<String>, serde_json::Error> {
        match &self.features {
            Some(raw) => serde_json::from_str(raw),
            None => Ok(Vec::new()),
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = subscription_tiers)]
pub struct NewSubscriptionTier {
    pub name: String,
    pub description: Option<String>,
    pub monthly_price_cents: i32,
    pub yearly_price_cents: Option<i32>,
    pub features: Option<String>,
    pub stripe_price_id: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_subscriptions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserSubscription {
    pub id: i32,
    pub user_id: i32,
    pub tier_id: i32,
    pub stripe_subscription_id: Option<String>,
    pub status: String,
    pub current_period_start: Option<NaiveDateTime>,
    pub current_period_end: Option<NaiveDateTime>,
    pub canceled_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_subscriptions)]
pub struct NewUserSubscription {
    pub user_id: i32,
    pub tier_id: i32,
    pub stripe_subscription_id: Option<String>,
    pub status: String,
    pub current_period_start: Option<NaiveDateTime>,
    pub current_period_end: Option<NaiveDateTime>,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = user_subscriptions)]
pub struct UpdateUserSubscription {
    pub status: Option<String>,
    pub current_period_start: Option<NaiveDateTime>,
    pub current_period_end: Option<NaiveDateTime>,
    pub canceled_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    PastDue,
    Trialing,
}

impl SubscriptionStatus {
    pub fn from_status_str(status: &str) -> Option<Self> {
        match status {
            "active" => Some(Self::Active),
            "canceled" => Some(Self::Canceled),
            "past_due" => Some(Self::PastDue),
            "trialing" => Some(Self::Trialing),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Canceled => "canceled",
            Self::PastDue => "past_due",
            Self::Trialing => "trialing",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Maps a tier to a genre it unlocks.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = genre_access)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GenreAccess {
    pub id: i32,
    pub tier_id: i32,
    pub genre: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = genre_access)]
pub struct NewGenreAccess {
    pub tier_id: i32,
    pub genre: String,
}
