//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户标识与用户名的值对象
//! - 边界校验（名称非空）

mod value_objects;

pub use value_objects::{UserId, UserName};
