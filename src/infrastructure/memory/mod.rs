//! Memory Layer - In-Memory State Management
//!
//! 实现 UserRepository 端口，用户序列只存活于进程内

mod user_store;

pub use user_store::InMemoryUserRepository;
