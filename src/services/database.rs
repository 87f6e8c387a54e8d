use sqlx::SqlitePool;

/// Create-if-absent schema. There is no migration story beyond this: the
/// tables are created on startup and never altered.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), anyhow::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT UNIQUE,
            role TEXT CHECK(role IN ('candidate', 'recruiter', 'affiliate')),
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS affiliate_referrals (referrer_id INTEGER, referred_user_id INTEGER)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS affiliate_wallets (user_id INTEGER PRIMARY KEY, balance_jpy INTEGER DEFAULT 0)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS subscriptions (user_id INTEGER PRIMARY KEY, status TEXT, plan_type TEXT)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
