//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{CreateUserResponse, UserView};

/// 用户响应: {id, name}
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
}

impl From<UserView> for UserResponse {
    fn from(view: UserView) -> Self {
        Self {
            id: view.id,
            name: view.name,
        }
    }
}

impl From<CreateUserResponse> for UserResponse {
    fn from(response: CreateUserResponse) -> Self {
        Self {
            id: response.id,
            name: response.name,
        }
    }
}

/// 创建用户请求体
///
/// `name` 必填；缺失或类型错误由 JSON 拒绝分支映射为 400
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// 列表查询参数
#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    /// 可选名称过滤器，精确匹配
    pub name: Option<String>,
}
