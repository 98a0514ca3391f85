//! HTTP Layer - RESTful API
//!
//! 请求处理器：解析/校验参数，调用应用层，映射结果到 HTTP 响应

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
