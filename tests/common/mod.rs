//! Shared test harness: an in-memory SQLite pool with the production schema
//! and the real router wired to live billing/user services.

#![allow(dead_code)]

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tokio::sync::mpsc;

use kyujin_board::services::{billing, database, http, users, Service};

pub async fn spawn_app() -> (Router, SqlitePool) {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory database");

    database::init_schema(&pool).await.expect("init schema");

    let (billing_tx, mut billing_rx) = mpsc::channel(16);
    let (user_tx, mut user_rx) = mpsc::channel(16);

    let billing_pool = pool.clone();
    tokio::spawn(async move {
        let mut service = billing::BillingService::new();
        service
            .run(
                billing::BillingRequestHandler::new(billing_pool),
                &mut billing_rx,
            )
            .await;
    });

    let user_pool = pool.clone();
    tokio::spawn(async move {
        let mut service = users::UserService::new();
        service
            .run(users::UserRequestHandler::new(user_pool), &mut user_rx)
            .await;
    });

    let router = http::router(http::AppState {
        billing_channel: billing_tx,
        user_channel: user_tx,
    });

    (router, pool)
}

pub async fn insert_user(pool: &SqlitePool, email: &str, role: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (email, role) VALUES ($1, $2) RETURNING id")
        .bind(email)
        .bind(role)
        .fetch_one(pool)
        .await
        .expect("insert user")
}

pub async fn insert_referral(pool: &SqlitePool, referrer_id: i64, referred_user_id: i64) {
    sqlx::query("INSERT INTO affiliate_referrals (referrer_id, referred_user_id) VALUES ($1, $2)")
        .bind(referrer_id)
        .bind(referred_user_id)
        .execute(pool)
        .await
        .expect("insert referral");
}

pub fn payment_event(user_id: i64, amount_paid: i64, plan_type: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "invoice.payment_succeeded",
        "data": {
            "object": {
                "customer_email": "payer@example.com",
                "amount_paid": amount_paid,
                "metadata": { "userId": user_id, "planType": plan_type }
            }
        }
    })
}
