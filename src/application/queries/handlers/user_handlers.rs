//! User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{UserRecord, UserRepositoryPort};
use crate::application::queries::{GetUser, ListUsers};

// ============================================================================
// Response DTOs
// ============================================================================

/// 用户详情响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub id: i64,
    pub name: String,
}

impl From<UserRecord> for UserView {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.value(),
            name: record.name,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListUsers Handler
pub struct ListUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    /// 无过滤器时返回全部用户，空匹配返回空列表而非错误
    pub async fn handle(&self, query: ListUsers) -> Result<Vec<UserView>, ApplicationError> {
        let users = self.user_repo.find_all(query.name.as_deref()).await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }
}

/// GetUser Handler
pub struct GetUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetUser) -> Result<UserView, ApplicationError> {
        let user = self
            .user_repo
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", query.user_id.value()))?;

        Ok(UserView::from(user))
    }
}
