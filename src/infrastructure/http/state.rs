//! Application State
//!
//! 持有注入的仓储端口与 Command/Query Handlers
//! 仓储在构造时显式传入，测试可用独立的新仓储

use std::sync::Arc;

use crate::application::{
    CreateUserHandler, GetUserHandler, ListUsersHandler, UserRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_user_handler: CreateUserHandler,

    // ========== Query Handlers ==========
    pub list_users_handler: ListUsersHandler,
    pub get_user_handler: GetUserHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self {
            create_user_handler: CreateUserHandler::new(user_repo.clone()),
            list_users_handler: ListUsersHandler::new(user_repo.clone()),
            get_user_handler: GetUserHandler::new(user_repo),
        }
    }
}
