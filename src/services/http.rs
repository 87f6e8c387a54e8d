use axum::{
    routing::{get, post},
    Json, Router,
};
use tokio::sync::mpsc;
use tower_http::trace::TraceLayer;

use super::billing::BillingRequest;
use super::users::UserRequest;
use crate::models::jobs;

mod affiliates;
mod users;
mod webhooks;

#[derive(Clone)]
pub struct AppState {
    pub billing_channel: mpsc::Sender<BillingRequest>,
    pub user_channel: mpsc::Sender<UserRequest>,
}

/// Mock job-board listings, the same four records on every request.
async fn get_jobs() -> Json<Vec<jobs::Job>> {
    Json(jobs::listings())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/webhooks/stripe", post(webhooks::stripe_webhook))
        .route("/api/jobs", get(get_jobs))
        .route("/api/users", post(users::create_user))
        .route("/api/users/{id}", get(users::get_user_details))
        .route("/api/affiliates/{id}/wallet", get(affiliates::get_wallet))
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn start_http_server(
    listen: &str,
    billing_channel: mpsc::Sender<BillingRequest>,
    user_channel: mpsc::Sender<UserRequest>,
) -> Result<(), anyhow::Error> {
    let app_state = AppState {
        billing_channel,
        user_channel,
    };

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    println!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
