use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AffiliateRepository {
    conn: SqlitePool,
}

impl AffiliateRepository {
    pub fn new(conn: SqlitePool) -> Self {
        Self { conn }
    }

    /// Lifetime referral tracking: returns the referrer of the given user,
    /// if an edge was recorded at registration time.
    pub async fn find_referrer(&self, referred_user_id: i64) -> Result<Option<i64>, anyhow::Error> {
        let referrer_id: Option<i64> = sqlx::query_scalar(
            "SELECT referrer_id FROM affiliate_referrals WHERE referred_user_id = $1",
        )
        .bind(referred_user_id)
        .fetch_optional(&self.conn)
        .await?;

        Ok(referrer_id)
    }

    /// Adds a commission to the referrer's wallet, creating the row on the
    /// first credit. Returns the balance after the credit.
    pub async fn credit_wallet(&self, user_id: i64, amount_jpy: i64) -> Result<i64, anyhow::Error> {
        let balance: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO affiliate_wallets (user_id, balance_jpy)
                VALUES ($1, $2)
                ON CONFLICT(user_id) DO UPDATE SET balance_jpy = balance_jpy + $2
                RETURNING balance_jpy
            "#,
        )
        .bind(user_id)
        .bind(amount_jpy)
        .fetch_one(&self.conn)
        .await?;

        Ok(balance)
    }

    pub async fn wallet_balance(&self, user_id: i64) -> Result<Option<i64>, anyhow::Error> {
        let balance: Option<i64> = sqlx::query_scalar(
            "SELECT balance_jpy FROM affiliate_wallets WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.conn)
        .await?;

        Ok(balance)
    }
}
