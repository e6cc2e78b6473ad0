//! Site Server - 旅行社网站服务端
//!
//! # 架构概述
//!
//! - **内容加载** (`content`): 页面文案 + 记录集合, 缺失时回退默认值
//! - **后台保存** (`admin`): 临时 id 分配、外键改写、单事务批量提交
//! - **联系表单** (`contact`): 校验后追加留言
//! - **页面渲染** (`render`): 服务端 HTML
//! - **数据库** (`db`): SQLite JSON 文档存储
//! - **HTTP API** (`api`): 页面与 JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! site-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── admin/         # 快照与批量保存
//! ├── contact/       # 联系表单
//! ├── content/       # 页面 props 加载
//! ├── render/        # HTML 渲染
//! ├── utils/         # 日志、校验
//! └── db/            # 文档存储
//! ```

pub mod admin;
pub mod api;
pub mod contact;
pub mod content;
pub mod core;
pub mod db;
pub mod render;
pub mod utils;

// Re-export 公共类型
pub use content::ContentLoader;
pub use core::{Config, Server, ServerState};
pub use db::{DbService, DocumentStore};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env`, read [`Config`] and start logging
///
/// Old log files are pruned when a log directory is configured.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        config.log_level.as_deref(),
        config.log_json,
        config.log_dir.as_deref(),
    )?;

    if let Some(dir) = config.log_dir.as_deref()
        && let Err(e) = cleanup_old_logs(std::path::Path::new(dir))
    {
        tracing::warn!(dir = %dir, error = %e, "Failed to clean up old logs");
    }

    Ok(config)
}
