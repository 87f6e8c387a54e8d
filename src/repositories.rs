pub mod affiliates;
pub mod subscriptions;
pub mod users;
