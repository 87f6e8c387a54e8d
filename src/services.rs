use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::mpsc;

use crate::settings::Settings;

pub mod billing;
pub mod database;
pub mod http;
pub mod users;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Repository error: {0} - {1}")]
    Repository(String, String),
}

#[async_trait]
pub trait RequestHandler<T>: Send + Sync + 'static
where
    T: Send + 'static,
{
    async fn handle_request(&self, request: T);
}

#[async_trait]
pub trait Service<T, H>: Send + Sync + 'static
where
    T: Send + 'static,
    H: RequestHandler<T> + Clone + Send,
{
    async fn run(&mut self, handler: H, receiver: &mut mpsc::Receiver<T>) {
        while let Some(request) = receiver.recv().await {
            let handler = handler.clone();

            tokio::spawn(async move {
                handler.handle_request(request).await;
            });
        }
    }
}

pub async fn start_services(pool: SqlitePool, settings: Settings) -> Result<(), anyhow::Error> {
    println!("[*] Initializing database schema.");
    database::init_schema(&pool).await?;

    let (billing_tx, mut billing_rx) = mpsc::channel(512);
    let (user_tx, mut user_rx) = mpsc::channel(512);

    let mut billing_service = billing::BillingService::new();
    let mut user_service = users::UserService::new();

    println!("[*] Starting billing service.");
    let billing_pool_clone = pool.clone();
    tokio::spawn(async move {
        billing_service
            .run(
                billing::BillingRequestHandler::new(billing_pool_clone),
                &mut billing_rx,
            )
            .await;
    });

    println!("[*] Starting user service.");
    let user_pool_clone = pool.clone();
    tokio::spawn(async move {
        user_service
            .run(
                users::UserRequestHandler::new(user_pool_clone),
                &mut user_rx,
            )
            .await;
    });

    println!("[*] Starting HTTP server.");
    http::start_http_server(&settings.server.listen, billing_tx, user_tx).await?;

    Ok(())
}
