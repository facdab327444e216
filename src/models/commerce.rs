use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
    ad_metrics, album_purchases, billing_cycles, creator_earnings, creator_payouts, payment_events,
    payments, paypal_accounts, paypal_payouts, paypal_subscriptions, song_purchases,
    stripe_customers, stripe_invoices, stripe_subscriptions, tips, transaction_history,
};

// Every amount in this module is integer minor units (cents).

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Payment {
    pub id: i32,
    pub user_id: i32,
    pub paypal_transaction_id: Option<String>,
    pub amount_cents: i32,
    pub currency: String,
    pub status: String,
    pub tier_id: Option<i32>,
    pub payment_method: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = payments)]
pub struct NewPayment {
    pub user_id: i32,
    pub paypal_transaction_id: Option<String>,
    pub amount_cents: i32,
    pub currency: String,
    pub status: String,
    pub tier_id: Option<i32>,
    pub payment_method: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn from_status_str(status: &str) -> Option<Self> {
        match status {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            "refunded" => Some(Self::Refunded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = paypal_subscriptions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaypalSubscription {
    pub id: i32,
    pub user_id: i32,
    pub paypal_subscription_id: String,
    pub plan_id: String,
    pub tier_id: i32,
    pub status: String,
    pub current_period_start: Option<NaiveDateTime>,
    pub current_period_end: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = paypal_subscriptions)]
pub struct NewPaypalSubscription {
    pub user_id: i32,
    pub paypal_subscription_id: String,
    pub plan_id: String,
    pub tier_id: i32,
    pub status: String,
    pub current_period_start: Option<NaiveDateTime>,
    pub current_period_end: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = song_purchases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SongPurchase {
    pub id: i32,
    pub user_id: i32,
    pub track_id: i32,
    pub price_cents: i32,
    pub purchased_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = song_purchases)]
pub struct NewSongPurchase {
    pub user_id: i32,
    pub track_id: i32,
    pub price_cents: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = album_purchases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AlbumPurchase {
    pub id: i32,
    pub user_id: i32,
    pub album_id: i32,
    pub price_cents: i32,
    pub purchased_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = album_purchases)]
pub struct NewAlbumPurchase {
    pub user_id: i32,
    pub album_id: i32,
    pub price_cents: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = tips)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Tip {
    pub id: i32,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub amount_cents: i32,
    pub message: Option<String>,
    pub track_id: Option<i32>,
    pub payment_status: String,
    pub stripe_payment_id: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = tips)]
pub struct NewTip {
    pub sender_id: i32,
    pub recipient_id: i32,
    pub amount_cents: i32,
    pub message: Option<String>,
    pub track_id: Option<i32>,
    pub payment_status: String,
    pub stripe_payment_id: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = creator_earnings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CreatorEarning {
    pub id: i32,
    pub artist_id: i32,
    pub track_id: Option<i32>,
    pub playlist_id: Option<i32>,
    pub earning_type: String,
    pub amount_cents: i32,
    pub currency: String,
    pub period: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = creator_earnings)]
pub struct NewCreatorEarning {
    pub artist_id: i32,
    pub track_id: Option<i32>,
    pub playlist_id: Option<i32>,
    pub earning_type: String,
    pub amount_cents: i32,
    pub currency: String,
    pub period: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = creator_payouts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CreatorPayout {
    pub id: i32,
    pub artist_id: i32,
    pub amount_cents: i32,
    pub status: String,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub requested_at: NaiveDateTime,
    pub processed_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = creator_payouts)]
pub struct NewCreatorPayout {
    pub artist_id: i32,
    pub amount_cents: i32,
    pub status: String,
    pub payment_method: Option<String>,
}

// Per-user ad counters, one row per (user, ad).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = ad_metrics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AdMetric {
    pub id: i32,
    pub user_id: i32,
    pub ad_id: String,
    pub impressions: i32,
    pub clicks: i32,
    pub last_interaction: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = ad_metrics)]
pub struct NewAdMetric {
    pub user_id: i32,
    pub ad_id: String,
    pub impressions: i32,
    pub clicks: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = stripe_customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StripeCustomer {
    pub id: i32,
    pub user_id: i32,
    pub stripe_customer_id: String,
    pub email: String,
    pub payment_method_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = stripe_customers)]
pub struct NewStripeCustomer {
    pub user_id: i32,
    pub stripe_customer_id: String,
    pub email: String,
    pub payment_method_id: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = stripe_subscriptions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StripeSubscription {
    pub id: i32,
    pub user_id: i32,
    pub stripe_subscription_id: String,
    pub stripe_customer_id: String,
    pub price_id: String,
    pub status: String,
    pub current_period_start: NaiveDateTime,
    pub current_period_end: NaiveDateTime,
    pub canceled_at: Option<NaiveDateTime>,
    pub cancel_at_period_end: bool,
    pub trial_start: Option<NaiveDateTime>,
    pub trial_end: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = stripe_subscriptions)]
pub struct NewStripeSubscription {
    pub user_id: i32,
    pub stripe_subscription_id: String,
    pub stripe_customer_id: String,
    pub price_id: String,
    pub status: String,
    pub current_period_start: NaiveDateTime,
    pub current_period_end: NaiveDateTime,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = stripe_subscriptions)]
pub struct UpdateStripeSubscription {
    pub status: Option<String>,
    pub current_period_start: Option<NaiveDateTime>,
    pub current_period_end: Option<NaiveDateTime>,
    pub canceled_at: Option<NaiveDateTime>,
    pub cancel_at_period_end: Option<bool>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = stripe_invoices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StripeInvoice {
    pub id: i32,
    pub user_id: i32,
    pub stripe_invoice_id: String,
    pub stripe_subscription_id: Option<String>,
    pub amount_cents: i32,
    pub currency: String,
    pub status: String,
    pub paid_at: Option<NaiveDateTime>,
    pub due_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = stripe_invoices)]
pub struct NewStripeInvoice {
    pub user_id: i32,
    pub stripe_invoice_id: String,
    pub stripe_subscription_id: Option<String>,
    pub amount_cents: i32,
    pub currency: String,
    pub status: String,
    pub due_date: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = paypal_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaypalAccount {
    pub id: i32,
    pub user_id: i32,
    pub paypal_email: String,
    pub paypal_merchant_id: Option<String>,
    pub status: String,
    pub verified_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = paypal_accounts)]
pub struct NewPaypalAccount {
    pub user_id: i32,
    pub paypal_email: String,
    pub paypal_merchant_id: Option<String>,
    pub status: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = paypal_payouts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaypalPayout {
    pub id: i32,
    pub user_id: i32,
    pub payout_batch_id: String,
    pub amount_cents: i32,
    pub currency: String,
    pub status: String,
    pub recipient_email: String,
    pub note: Option<String>,
    pub failure_reason: Option<String>,
    pub initiated_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = paypal_payouts)]
pub struct NewPaypalPayout {
    pub user_id: i32,
    pub payout_batch_id: String,
    pub amount_cents: i32,
    pub currency: String,
    pub status: String,
    pub recipient_email: String,
    pub note: Option<String>,
    pub initiated_at: NaiveDateTime,
}

// Inbound webhook ledger. external_event_id is unique so a redelivered
// provider event is rejected at the database rather than double-applied.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = payment_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentEvent {
    pub id: i32,
    pub event_type: String,
    pub provider: String,
    pub external_event_id: String,
    pub user_id: Option<i32>,
    pub related_id: Option<String>,
    pub data: Option<String>,
    pub processed: bool,
    pub processed_at: Option<NaiveDateTime>,
    pub error: Option<String>,
    pub created_at: NaiveDateTime,
}

impl PaymentEvent {
    /// Decodes the raw provider payload. The column stores whatever JSON the
    /// provider delivered; its shape is owned by the webhook layer.
    pub fn payload(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        self.data.as_deref().map(serde_json::from_str).transpose()
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = payment_events)]
pub struct NewPaymentEvent {
    pub event_type: String,
    pub provider: String,
    pub external_event_id: String,
    pub user_id: Option<i32>,
    pub related_id: Option<String>,
    pub data: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PaymentProvider {
    Stripe,
    Paypal,
}

impl PaymentProvider {
    pub fn from_provider_str(provider: &str) -> Option<Self> {
        match provider {
            "stripe" => Some(Self::Stripe),
            "paypal" => Some(Self::Paypal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stripe => "stripe",
            Self::Paypal => "paypal",
        }
    }
}

impl std::fmt::Display for PaymentProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = transaction_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionRecord {
    pub id: i32,
    pub user_id: i32,
    pub transaction_type: String,
    pub amount_cents: i32,
    pub currency: String,
    pub description: Option<String>,
    pub status: String,
    pub provider: Option<String>,
    pub external_transaction_id: Option<String>,
    pub related_entity_id: Option<i32>,
    pub related_entity_type: Option<String>,
    pub created_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = transaction_history)]
pub struct NewTransactionRecord {
    pub user_id: i32,
    pub transaction_type: String,
    pub amount_cents: i32,
    pub currency: String,
    pub description: Option<String>,
    pub status: String,
    pub provider: Option<String>,
    pub external_transaction_id: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransactionType {
    SubscriptionCharge,
    RoyaltyPayout,
    Refund,
    Adjustment,
}

impl TransactionType {
    pub fn from_type_str(value: &str) -> Option<Self> {
        match value {
            "subscription_charge" => Some(Self::SubscriptionCharge),
            "royalty_payout" => Some(Self::RoyaltyPayout),
            "refund" => Some(Self::Refund),
            "adjustment" => Some(Self::Adjustment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubscriptionCharge => "subscription_charge",
            Self::RoyaltyPayout => "royalty_payout",
            Self::Refund => "refund",
            Self::Adjustment => "adjustment",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = billing_cycles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BillingCycle {
    pub id: i32,
    pub user_id: i32,
    pub subscription_id: Option<i32>,
    pub cycle_start: NaiveDateTime,
    pub cycle_end: NaiveDateTime,
    pub amount_cents: i32,
    pub status: String,
    pub charged_at: Option<NaiveDateTime>,
    pub failure_count: i32,
    pub last_failure_reason: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = billing_cycles)]
pub struct NewBillingCycle {
    pub user_id: i32,
    pub subscription_id: Option<i32>,
    pub cycle_start: NaiveDateTime,
    pub cycle_end: NaiveDateTime,
    pub amount_cents: i32,
    pub status: String,
}
