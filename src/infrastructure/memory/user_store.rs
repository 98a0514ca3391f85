//! In-Memory User Repository Implementation

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::application::ports::{RepositoryError, UserRecord, UserRepositoryPort};
use crate::domain::UserId;

/// 内存用户仓储
///
/// 不变量:
/// - `users` 保持插入顺序
/// - `next_id` 单调递增，与序列内容解耦（空仓储也有定义）
/// - 分配 ID 与追加在同一把写锁下完成，并发 create 不会产生重复 ID
pub struct InMemoryUserRepository {
    users: RwLock<Vec<UserRecord>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// 创建空仓储，ID 从 0 开始分配
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(0),
        }
    }

    /// 创建带种子数据的仓储: {0, John}, {1, Mary}
    pub fn with_seed_users() -> Self {
        Self {
            users: RwLock::new(vec![
                UserRecord {
                    id: UserId::new(0),
                    name: "John".to_string(),
                },
                UserRecord {
                    id: UserId::new(1),
                    name: "Mary".to_string(),
                },
            ]),
            next_id: AtomicI64::new(2),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn poisoned() -> RepositoryError {
        RepositoryError::StorageError("user store lock poisoned".to_string())
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn find_all(
        &self,
        name_filter: Option<&str>,
    ) -> Result<Vec<UserRecord>, RepositoryError> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;

        let result = match name_filter {
            // 精确匹配，区分大小写
            Some(name) => users.iter().filter(|u| u.name == name).cloned().collect(),
            None => users.clone(),
        };

        Ok(result)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, RepositoryError> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, name: String) -> Result<UserRecord, RepositoryError> {
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;

        // 在写锁内取号，保证 ID 顺序与插入顺序一致
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let user = UserRecord { id, name };
        users.push(user.clone());

        tracing::debug!(user_id = %id, "User record appended");

        Ok(user)
    }
}
