use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Referral {
    pub referrer_id: i64,
    pub referred_user_id: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Wallet {
    pub user_id: i64,
    pub balance_jpy: i64,
}
