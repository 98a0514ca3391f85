//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::CreateUser;
use crate::application::error::ApplicationError;
use crate::application::ports::{UserRecord, UserRepositoryPort};
use crate::domain::UserName;

/// 创建用户响应
#[derive(Debug, Clone)]
pub struct CreateUserResponse {
    pub id: i64,
    pub name: String,
}

impl From<UserRecord> for CreateUserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.value(),
            name: record.name,
        }
    }
}

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    /// 校验名称后写入仓储，ID 由仓储分配
    pub async fn handle(&self, command: CreateUser) -> Result<CreateUserResponse, ApplicationError> {
        let name = UserName::new(command.name).map_err(ApplicationError::validation)?;

        let user = self.user_repo.create(name.into_string()).await?;

        tracing::info!(user_id = %user.id, name = %user.name, "User created");

        Ok(CreateUserResponse::from(user))
    }
}
