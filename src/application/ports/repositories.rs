//! Repository Ports - 出站端口
//!
//! 定义用户存储的抽象接口
//! 具体实现在 infrastructure 层（内存仓储）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::UserId;

/// Repository 错误
///
/// 内存实现不会失败，错误分支保留给端口契约
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// 用户实体（用于存储）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
}

/// User Repository Port
///
/// 存储的不变量:
/// - 记录按插入顺序保存
/// - id 由仓储分配，唯一且严格递增
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 获取所有用户（插入顺序）
    ///
    /// 给定过滤器时只返回名称精确匹配（区分大小写）的用户
    async fn find_all(&self, name_filter: Option<&str>) -> Result<Vec<UserRecord>, RepositoryError>;

    /// 根据 ID 查找用户
    ///
    /// 缺失不是错误，返回 `Ok(None)`
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, RepositoryError>;

    /// 创建用户并分配下一个 ID
    async fn create(&self, name: String) -> Result<UserRecord, RepositoryError>;
}
