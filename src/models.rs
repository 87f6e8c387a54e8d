pub mod affiliates;
pub mod jobs;
pub mod stripe;
pub mod subscriptions;
pub mod users;
