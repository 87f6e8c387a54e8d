use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::oneshot;

use super::{RequestHandler, Service, ServiceError};
use crate::{models::users, repositories::users::UserRepository};

pub enum UserRequest {
    CreateUser {
        email: String,
        role: String,
        referred_by: Option<i64>,
        response: oneshot::Sender<Result<users::User, ServiceError>>,
    },
    GetUser {
        id: i64,
        response: oneshot::Sender<Result<Option<users::User>, ServiceError>>,
    },
}

#[derive(Clone)]
pub struct UserRequestHandler {
    repository: UserRepository,
}

impl UserRequestHandler {
    pub fn new(sql_conn: SqlitePool) -> Self {
        let repository = UserRepository::new(sql_conn);

        UserRequestHandler { repository }
    }

    async fn create_user(
        &self,
        email: &str,
        role: &str,
        referred_by: Option<i64>,
    ) -> Result<users::User, ServiceError> {
        self.repository
            .insert_user(email, role, referred_by)
            .await
            .map_err(|e| ServiceError::Database(e.to_string()))
    }

    async fn get_user(&self, id: i64) -> Result<Option<users::User>, ServiceError> {
        self.repository
            .get_user_by_id(id)
            .await
            .map_err(|e| ServiceError::Database(e.to_string()))
    }
}

#[async_trait]
impl RequestHandler<UserRequest> for UserRequestHandler {
    async fn handle_request(&self, request: UserRequest) {
        match request {
            UserRequest::CreateUser {
                email,
                role,
                referred_by,
                response,
            } => {
                let user = self.create_user(&email, &role, referred_by).await;
                let _ = response.send(user);
            }
            UserRequest::GetUser { id, response } => {
                let user = self.get_user(id).await;
                let _ = response.send(user);
            }
        }
    }
}

pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        UserService {}
    }
}

#[async_trait]
impl Service<UserRequest, UserRequestHandler> for UserService {}
