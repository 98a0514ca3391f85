//! User HTTP Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::application::{CreateUser, GetUser, ListUsers};
use crate::domain::UserId;
use crate::infrastructure::http::dto::{CreateUserRequest, ListUsersParams, UserResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出用户，可选 `?name=` 精确过滤
///
/// 无匹配返回空数组而非错误
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListUsersParams>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let query = ListUsers { name: params.name };

    let users = state.list_users_handler.handle(query).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// 按 ID 获取用户
///
/// 路径参数按十进制整数解析；非数字输入在触达仓储之前拒绝为 400
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = id
        .parse::<i64>()
        .map(UserId::new)
        .map_err(|_| ApiError::BadRequest(format!("Invalid user id: {}", id)))?;

    let user = state.get_user_handler.handle(GetUser { user_id }).await?;

    Ok(Json(UserResponse::from(user)))
}

/// 创建用户
///
/// 请求体校验失败（缺失/类型错误/空名称）返回 400，成功返回 201
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let command = CreateUser { name: request.name };

    let user = state.create_user_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::create_routes;
    use crate::infrastructure::memory::InMemoryUserRepository;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn test_app() -> Router {
        let repo = InMemoryUserRepository::with_seed_users().arc();
        create_routes().with_state(Arc::new(AppState::new(repo)))
    }

    async fn get(app: &Router, uri: &str) -> Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_users_returns_seed_state() {
        let app = test_app();

        let response = get(&app, "/users").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([{"id": 0, "name": "John"}, {"id": 1, "name": "Mary"}])
        );
    }

    #[tokio::test]
    async fn test_list_users_with_name_filter() {
        let app = test_app();

        let response = get(&app, "/users?name=Mary").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([{"id": 1, "name": "Mary"}])
        );

        let response = get(&app, "/users?name=Nobody").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let app = test_app();

        let response = get(&app, "/users/1").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"id": 1, "name": "Mary"}));
    }

    #[tokio::test]
    async fn test_get_missing_user_returns_404() {
        let app = test_app();

        let response = get(&app, "/users/99").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() {
        let app = test_app();

        let response = get(&app, "/users/abc").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let app = test_app();

        let response = post_json(&app, "/users", json!({"name": "Alice"})).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"id": 2, "name": "Alice"}));

        let response = get(&app, "/users/2").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"id": 2, "name": "Alice"}));
    }

    #[tokio::test]
    async fn test_create_without_name_returns_400() {
        let app = test_app();

        let response = post_json(&app, "/users", json!({})).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_empty_name_returns_400() {
        let app = test_app();

        let response = post_json(&app, "/users", json!({"name": ""})).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_wrong_typed_name_returns_400() {
        let app = test_app();

        let response = post_json(&app, "/users", json!({"name": 5})).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_returns_400() {
        let app = test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
