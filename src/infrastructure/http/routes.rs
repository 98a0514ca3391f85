//! HTTP Routes
//!
//! 显式路由表，路由逻辑与端点文档在此解耦维护
//!
//! API Endpoints:
//! - /ping           GET   健康检查
//! - /users          GET   列出用户（可选 ?name= 精确过滤）-> 200 [{id, name}]
//! - /users/{id}     GET   按 ID 获取用户 -> 200 {id, name} | 400 非整数 id | 404 缺失
//! - /users          POST  创建用户 {name} -> 201 {id, name} | 400 非法请求体

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/users", user_routes())
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route("/:id", get(handlers::get_user))
}
