//! Roster - 进程内用户目录 REST 服务
//!
//! 架构设计: Hexagonal Architecture + CQRS
//!
//! 领域层 (domain/):
//! - User Context: 用户标识与名称的值对象
//!
//! 应用层 (application/):
//! - Ports: 端口定义（UserRepository）
//! - Commands: CQRS 命令处理器（创建用户）
//! - Queries: CQRS 查询处理器（列表、按 ID 查询）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（参数解析/校验、错误映射）
//! - Memory: UserRepository 内存实现（进程生命周期内有效）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
