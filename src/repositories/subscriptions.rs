use crate::models::subscriptions;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SubscriptionRepository {
    conn: SqlitePool,
}

impl SubscriptionRepository {
    pub fn new(conn: SqlitePool) -> Self {
        Self { conn }
    }

    /// Creates or replaces the user's subscription wholesale. No history is
    /// kept, the latest successful payment wins.
    pub async fn activate(
        &self,
        user_id: i64,
        plan_type: &str,
    ) -> Result<subscriptions::Subscription, anyhow::Error> {
        let subscription = sqlx::query_as::<_, subscriptions::Subscription>(
            r#"
                INSERT OR REPLACE INTO subscriptions (user_id, status, plan_type)
                VALUES ($1, 'active', $2)
                RETURNING user_id, status, plan_type
            "#,
        )
        .bind(user_id)
        .bind(plan_type)
        .fetch_one(&self.conn)
        .await?;

        Ok(subscription)
    }
}
