use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::oneshot;

use super::{RequestHandler, Service, ServiceError};
use crate::repositories::affiliates::AffiliateRepository;
use crate::repositories::subscriptions::SubscriptionRepository;

/// Revenue share credited to the referrer on every payment, in percent.
const COMMISSION_RATE_PERCENT: i64 = 30;

pub enum BillingRequest {
    PaymentSucceeded {
        user_id: i64,
        amount_paid: i64,
        plan_type: String,
        response: oneshot::Sender<Result<(), ServiceError>>,
    },
    GetWalletBalance {
        user_id: i64,
        response: oneshot::Sender<Result<Option<i64>, ServiceError>>,
    },
}

#[derive(Clone)]
pub struct BillingRequestHandler {
    subscriptions: SubscriptionRepository,
    affiliates: AffiliateRepository,
}

impl BillingRequestHandler {
    pub fn new(sql_conn: SqlitePool) -> Self {
        let subscriptions = SubscriptionRepository::new(sql_conn.clone());
        let affiliates = AffiliateRepository::new(sql_conn);

        BillingRequestHandler {
            subscriptions,
            affiliates,
        }
    }

    /// Settles a successful payment: renews the payer's subscription, then
    /// credits the referrer's wallet when a referral edge exists.
    ///
    /// The three statements are not wrapped in a transaction and there is no
    /// duplicate-event detection, so redelivery of the same event credits the
    /// referrer again.
    async fn process_payment(
        &self,
        user_id: i64,
        amount_paid: i64,
        plan_type: &str,
    ) -> Result<(), ServiceError> {
        log::info!("Processing payment for user {}: {} JPY", user_id, amount_paid);

        self.subscriptions
            .activate(user_id, plan_type)
            .await
            .map_err(|e| ServiceError::Repository("Subscription".to_string(), e.to_string()))?;

        let referral = self
            .affiliates
            .find_referrer(user_id)
            .await
            .map_err(|e| ServiceError::Repository("Affiliate".to_string(), e.to_string()))?;

        if let Some(referrer_id) = referral {
            let commission = amount_paid * COMMISSION_RATE_PERCENT / 100;

            let balance = self
                .affiliates
                .credit_wallet(referrer_id, commission)
                .await
                .map_err(|e| ServiceError::Repository("Affiliate".to_string(), e.to_string()))?;

            log::info!(
                "Affiliate {} credited with {} JPY commission (balance: {} JPY).",
                referrer_id,
                commission,
                balance
            );
        }

        Ok(())
    }

    async fn wallet_balance(&self, user_id: i64) -> Result<Option<i64>, ServiceError> {
        self.affiliates
            .wallet_balance(user_id)
            .await
            .map_err(|e| ServiceError::Database(e.to_string()))
    }
}

#[async_trait]
impl RequestHandler<BillingRequest> for BillingRequestHandler {
    async fn handle_request(&self, request: BillingRequest) {
        match request {
            BillingRequest::PaymentSucceeded {
                user_id,
                amount_paid,
                plan_type,
                response,
            } => {
                let result = self.process_payment(user_id, amount_paid, &plan_type).await;
                if let Err(ref e) = result {
                    log::error!("Webhook processing error: {}", e);
                }
                let _ = response.send(result);
            }
            BillingRequest::GetWalletBalance { user_id, response } => {
                let balance = self.wallet_balance(user_id).await;
                let _ = response.send(balance);
            }
        }
    }
}

pub struct BillingService;

impl BillingService {
    pub fn new() -> Self {
        BillingService {}
    }
}

#[async_trait]
impl Service<BillingRequest, BillingRequestHandler> for BillingService {}
