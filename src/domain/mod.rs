//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - User Context: 用户目录管理

pub mod user;

pub use user::{UserId, UserName};
