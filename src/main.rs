//! Roster - 进程内用户目录 REST 服务
//!
//! 启动流程:
//! - 加载配置，初始化日志
//! - 构建内存仓储（可选种子数据）并注入应用状态
//! - 启动 HTTP 服务器（带优雅关闭）

use std::sync::Arc;

use roster::application::UserRepositoryPort;
use roster::config::{load_config, print_config};
use roster::infrastructure::http::{AppState, HttpServer, ServerConfig};
use roster::infrastructure::memory::InMemoryUserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},roster={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Roster - in-memory user directory service");
    print_config(&config);

    // 创建内存仓储（显式注入，不使用全局状态）
    let user_repo: Arc<dyn UserRepositoryPort> = if config.seed.enabled {
        InMemoryUserRepository::with_seed_users().arc()
    } else {
        InMemoryUserRepository::new().arc()
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(user_repo);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
