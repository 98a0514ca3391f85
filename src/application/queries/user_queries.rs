//! User Queries

use crate::domain::UserId;

/// 列出用户查询
///
/// `name` 为可选过滤器，精确匹配（区分大小写）
#[derive(Debug, Clone, Default)]
pub struct ListUsers {
    pub name: Option<String>,
}

/// 获取用户详情查询
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: UserId,
}
