use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Subscription {
    pub user_id: i64,
    pub status: String,
    pub plan_type: String,
}
