use chrono::Utc;
use diesel::prelude::*;
use log::debug;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::commerce::*;
use crate::schema::{
    ad_metrics, album_purchases, billing_cycles, creator_earnings, creator_payouts, payment_events,
    payments, paypal_accounts, paypal_payouts, paypal_subscriptions, song_purchases,
    stripe_customers, stripe_invoices, stripe_subscriptions, tips, transaction_history,
};

/// Payment, purchase and payout operations. Amounts are integer cents
/// throughout.
pub struct CommerceOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> CommerceOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn record_payment(&self, new_payment: &NewPayment) -> Result<Payment, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let payment = diesel::insert_into(payments::table)
            .values(new_payment)
            .get_result::<Payment>(&mut conn)?;
        Ok(payment)
    }

    pub fn set_payment_status(&self, id: i32, status: PaymentStatus) -> Result<Payment, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let payment = diesel::update(payments::table.find(id))
            .set((
                payments::status.eq(status.as_str()),
                payments::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<Payment>(&mut conn)?;
        Ok(payment)
    }

    pub fn payments_for_user(&self, user_id: i32) -> Result<Vec<Payment>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let result = payments::table
            .filter(payments::user_id.eq(user_id))
            .order(payments::created_at.desc())
            .load::<Payment>(&mut conn)?;
        Ok(result)
    }

    pub fn upsert_paypal_subscription(
        &self,
        new_subscription: &NewPaypalSubscription,
    ) -> Result<PaypalSubscription, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let subscription = diesel::insert_into(paypal_subscriptions::table)
            .values(new_subscription)
            .on_conflict(paypal_subscriptions::user_id)
            .do_update()
            .set((
                paypal_subscriptions::paypal_subscription_id
                    .eq(&new_subscription.paypal_subscription_id),
                paypal_subscriptions::plan_id.eq(&new_subscription.plan_id),
                paypal_subscriptions::tier_id.eq(new_subscription.tier_id),
                paypal_subscriptions::status.eq(&new_subscription.status),
                paypal_subscriptions::current_period_start
                    .eq(new_subscription.current_period_start),
                paypal_subscriptions::current_period_end.eq(new_subscription.current_period_end),
                paypal_subscriptions::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<PaypalSubscription>(&mut conn)?;
        Ok(subscription)
    }

    pub fn record_song_purchase(
        &self,
        new_purchase: &NewSongPurchase,
    ) -> Result<SongPurchase, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let purchase = diesel::insert_into(song_purchases::table)
            .values(new_purchase)
            .get_result::<SongPurchase>(&mut conn)?;
        Ok(purchase)
    }

    pub fn record_album_purchase(
        &self,
        new_purchase: &NewAlbumPurchase,
    ) -> Result<AlbumPurchase, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let purchase = diesel::insert_into(album_purchases::table)
            .values(new_purchase)
            .get_result::<AlbumPurchase>(&mut conn)?;
        Ok(purchase)
    }

    pub fn send_tip(&self, new_tip: &NewTip) -> Result<Tip, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let tip = diesel::insert_into(tips::table)
            .values(new_tip)
            .get_result::<Tip>(&mut conn)?;
        Ok(tip)
    }

    pub fn tips_received(&self, recipient_id: i32) -> Result<Vec<Tip>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let result = tips::table
            .filter(tips::recipient_id.eq(recipient_id))
            .order(tips::created_at.desc())
            .load::<Tip>(&mut conn)?;
        Ok(result)
    }

    pub fn record_earning(&self, new_earning: &NewCreatorEarning) -> Result<CreatorEarning, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let earning = diesel::insert_into(creator_earnings::table)
            .values(new_earning)
            .get_result::<CreatorEarning>(&mut conn)?;
        Ok(earning)
    }

    pub fn total_earnings_cents(&self, artist_id: i32) -> Result<i64, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let total: Option<i64> = creator_earnings::table
            .filter(creator_earnings::artist_id.eq(artist_id))
            .select(diesel::dsl::sum(creator_earnings::amount_cents))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0))
    }

    pub fn request_payout(&self, new_payout: &NewCreatorPayout) -> Result<CreatorPayout, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let payout = diesel::insert_into(creator_payouts::table)
            .values(new_payout)
            .get_result::<CreatorPayout>(&mut conn)?;
        Ok(payout)
    }

    pub fn mark_payout_processed(
        &self,
        id: i32,
        status: &str,
        transaction_id: Option<String>,
    ) -> Result<CreatorPayout, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let payout = diesel::update(creator_payouts::table.find(id))
            .set((
                creator_payouts::status.eq(status),
                creator_payouts::transaction_id.eq(transaction_id),
                creator_payouts::processed_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<CreatorPayout>(&mut conn)?;
        Ok(payout)
    }

    /// Bumps the per-(user, ad) counters, inserting the row on first sight.
    pub fn record_ad_interaction(
        &self,
        user_id: i32,
        ad_id: &str,
        impressions: i32,
        clicks: i32,
    ) -> Result<AdMetric, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let metric = diesel::insert_into(ad_metrics::table)
            .values(&NewAdMetric {
                user_id,
                ad_id: ad_id.to_string(),
                impressions,
                clicks,
            })
            .on_conflict((ad_metrics::user_id, ad_metrics::ad_id))
            .do_update()
            .set((
                ad_metrics::impressions.eq(ad_metrics::impressions + impressions),
                ad_metrics::clicks.eq(ad_metrics::clicks + clicks),
                ad_metrics::last_interaction.eq(Utc::now().naive_utc()),
            ))
            .get_result::<AdMetric>(&mut conn)?;
        Ok(metric)
    }

    pub fn link_stripe_customer(
        &self,
        new_customer: &NewStripeCustomer,
    ) -> Result<StripeCustomer, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let customer = diesel::insert_into(stripe_customers::table)
            .values(new_customer)
            .get_result::<StripeCustomer>(&mut conn)?;
        Ok(customer)
    }

    pub fn get_stripe_customer(&self, user_id: i32) -> Result<Option<StripeCustomer>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let customer = stripe_customers::table
            .filter(stripe_customers::user_id.eq(user_id))
            .first::<StripeCustomer>(&mut conn)
            .optional()?;
        Ok(customer)
    }

    pub fn create_stripe_subscription(
        &self,
        new_subscription: &NewStripeSubscription,
    ) -> Result<StripeSubscription, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let subscription = diesel::insert_into(stripe_subscriptions::table)
            .values(new_subscription)
            .get_result::<StripeSubscription>(&mut conn)?;
        Ok(subscription)
    }

    pub fn update_stripe_subscription(
        &self,
        stripe_subscription_id: &str,
        mut changes: UpdateStripeSubscription,
    ) -> Result<StripeSubscription, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        changes.updated_at = Some(Utc::now().naive_utc());
        let subscription = diesel::update(
            stripe_subscriptions::table
                .filter(stripe_subscriptions::stripe_subscription_id.eq(stripe_subscription_id)),
        )
        .set(&changes)
        .get_result::<StripeSubscription>(&mut conn)?;
        Ok(subscription)
    }

    pub fn record_stripe_invoice(
        &self,
        new_invoice: &NewStripeInvoice,
    ) -> Result<StripeInvoice, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let invoice = diesel::insert_into(stripe_invoices::table)
            .values(new_invoice)
            .get_result::<StripeInvoice>(&mut conn)?;
        Ok(invoice)
    }

    pub fn mark_invoice_paid(&self, stripe_invoice_id: &str) -> Result<StripeInvoice, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let now = Utc::now().naive_utc();
        let invoice = diesel::update(
            stripe_invoices::table
                .filter(stripe_invoices::stripe_invoice_id.eq(stripe_invoice_id)),
        )
        .set((
            stripe_invoices::status.eq("paid"),
            stripe_invoices::paid_at.eq(now),
            stripe_invoices::updated_at.eq(now),
        ))
        .get_result::<StripeInvoice>(&mut conn)?;
        Ok(invoice)
    }

    pub fn link_paypal_account(
        &self,
        new_account: &NewPaypalAccount,
    ) -> Result<PaypalAccount, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let account = diesel::insert_into(paypal_accounts::table)
            .values(new_account)
            .get_result::<PaypalAccount>(&mut conn)?;
        Ok(account)
    }

    pub fn record_paypal_payout(
        &self,
        new_payout: &NewPaypalPayout,
    ) -> Result<PaypalPayout, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let payout = diesel::insert_into(paypal_payouts::table)
            .values(new_payout)
            .get_result::<PaypalPayout>(&mut conn)?;
        Ok(payout)
    }

    /// Stores an inbound provider webhook event. A redelivered event id hits
    /// the unique constraint and surfaces as UniqueViolation.
    pub fn ingest_payment_event(
        &self,
        new_event: &NewPaymentEvent,
    ) -> Result<PaymentEvent, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let event = diesel::insert_into(payment_events::table)
            .values(new_event)
            .get_result::<PaymentEvent>(&mut conn)?;

        debug!(
            "Ingested {} event {}",
            event.provider, event.external_event_id
        );
        Ok(event)
    }

    pub fn mark_event_processed(&self, id: i32, error: Option<String>) -> Result<PaymentEvent, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let event = diesel::update(payment_events::table.find(id))
            .set((
                payment_events::processed.eq(true),
                payment_events::processed_at.eq(Utc::now().naive_utc()),
                payment_events::error.eq(error),
            ))
            .get_result::<PaymentEvent>(&mut conn)?;
        Ok(event)
    }

    pub fn record_transaction(
        &self,
        new_record: &NewTransactionRecord,
    ) -> Result<TransactionRecord, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let record = diesel::insert_into(transaction_history::table)
            .values(new_record)
            .get_result::<TransactionRecord>(&mut conn)?;
        Ok(record)
    }

    pub fn transactions_for_user(&self, user_id: i32) -> Result<Vec<TransactionRecord>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let result = transaction_history::table
            .filter(transaction_history::user_id.eq(user_id))
            .order(transaction_history::created_at.desc())
            .load::<TransactionRecord>(&mut conn)?;
        Ok(result)
    }

    pub fn open_billing_cycle(&self, new_cycle: &NewBillingCycle) -> Result<BillingCycle, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let cycle = diesel::insert_into(billing_cycles::table)
            .values(new_cycle)
            .get_result::<BillingCycle>(&mut conn)?;
        Ok(cycle)
    }

    pub fn mark_cycle_charged(&self, id: i32) -> Result<BillingCycle, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let now = Utc::now().naive_utc();
        let cycle = diesel::update(billing_cycles::table.find(id))
            .set((
                billing_cycles::status.eq("charged"),
                billing_cycles::charged_at.eq(now),
                billing_cycles::updated_at.eq(now),
            ))
            .get_result::<BillingCycle>(&mut conn)?;
        Ok(cycle)
    }

    pub fn record_cycle_failure(&self, id: i32, reason: &str) -> Result<BillingCycle, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let cycle = diesel::update(billing_cycles::table.find(id))
            .set((
                billing_cycles::failure_count.eq(billing_cycles::failure_count + 1),
                billing_cycles::last_failure_reason.eq(reason),
                billing_cycles::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<BillingCycle>(&mut conn)?;
        Ok(cycle)
    }
}
