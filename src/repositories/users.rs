use crate::models::users;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct UserRepository {
    conn: SqlitePool,
}

impl UserRepository {
    pub fn new(conn: SqlitePool) -> Self {
        Self { conn }
    }

    pub async fn insert_user(
        &self,
        email: &str,
        role: &str,
        referred_by: Option<i64>,
    ) -> Result<users::User, anyhow::Error> {
        let user = sqlx::query_as::<_, users::User>(
            r#"
                INSERT INTO users (email, role)
                VALUES ($1, $2)
                RETURNING id, email, role, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(role)
        .fetch_one(&self.conn)
        .await?;

        if let Some(referrer_id) = referred_by {
            sqlx::query(
                "INSERT INTO affiliate_referrals (referrer_id, referred_user_id) VALUES ($1, $2)",
            )
            .bind(referrer_id)
            .bind(user.id)
            .execute(&self.conn)
            .await?;
        }

        Ok(user)
    }

    pub async fn get_user_by_id(&self, user_id: i64) -> Result<Option<users::User>, anyhow::Error> {
        let user = sqlx::query_as::<_, users::User>(
            "SELECT id, email, role, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.conn)
        .await?;

        Ok(user)
    }
}
