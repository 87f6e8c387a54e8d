use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tokio::sync::oneshot;

use crate::models::stripe::{InvoiceObject, StripeEvent};
use crate::services::billing::BillingRequest;

/// Payment-provider webhook. Activates the payer's subscription and credits
/// the referrer's wallet when a referral edge exists.
// TODO: verify the Stripe signature header before trusting the payload.
pub async fn stripe_webhook(
    State(state): State<super::AppState>,
    Json(event): Json<StripeEvent>,
) -> impl IntoResponse {
    if event.event_type != "invoice.payment_succeeded" {
        return (StatusCode::OK, Json(json!({"received": true})));
    }

    let invoice: InvoiceObject = match serde_json::from_value(event.data.object) {
        Ok(invoice) => invoice,
        Err(e) => {
            log::error!("Malformed invoice payload: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal processing error"})),
            );
        }
    };
    let (billing_tx, billing_rx) = oneshot::channel();

    let send_result = state
        .billing_channel
        .send(BillingRequest::PaymentSucceeded {
            user_id: invoice.metadata.user_id,
            amount_paid: invoice.amount_paid,
            plan_type: invoice.metadata.plan_type,
            response: billing_tx,
        })
        .await;

    if let Err(e) = send_result {
        log::error!("Failed to dispatch payment event: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal processing error"})),
        );
    }

    match billing_rx.await {
        Ok(Ok(())) => (
            StatusCode::OK,
            Json(json!({"received": true, "processed": true})),
        ),
        Ok(Err(_service_error)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal processing error"})),
        ),
        Err(e) => {
            log::error!("Failed to receive billing response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal processing error"})),
            )
        }
    }
}
