use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tokio::sync::oneshot;

use crate::services::billing::BillingRequest;

/// Affiliate dashboard balance. A wallet row only appears on the first
/// credit, so an absent row reads as zero lifetime earnings.
pub async fn get_wallet(
    State(state): State<super::AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    let (balance_tx, balance_rx) = oneshot::channel();

    let send_result = state
        .billing_channel
        .send(BillingRequest::GetWalletBalance {
            user_id,
            response: balance_tx,
        })
        .await;
    if let Err(e) = send_result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error",
                "details": e.to_string()
            })),
        );
    }

    match balance_rx.await {
        Ok(Ok(balance)) => (
            StatusCode::OK,
            Json(json!({
                "user_id": user_id,
                "balance_jpy": balance.unwrap_or(0)
            })),
        ),
        Ok(Err(service_error)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Database error",
                "details": service_error.to_string()
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error",
                "details": e.to_string()
            })),
        ),
    }
}
