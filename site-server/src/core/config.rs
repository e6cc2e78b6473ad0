/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_URL | sqlite:data/site.db | SQLite 数据库 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | (unset) | 日志过滤, 未设置时用 `site_server=info,tower_http=info` |
/// | LOG_JSON | production 时为 true | JSON 日志 |
/// | LOG_DIR | (unset) | 日志文件目录 |
/// | SITE_NAME | Aurelia Voyages | 站点名称 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | MAX_BODY_BYTES | 1048576 | 请求体上限 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 DATABASE_URL=sqlite:/tmp/site.db cargo run -p site-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// sqlx SQLite URL
    pub database_url: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: Option<String>,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Shown in the page header and `<title>`
    pub site_name: String,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    pub max_body_bytes: usize,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let production = environment == "production";
        Self {
            http_port: env_parse("HTTP_PORT").unwrap_or(3000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:data/site.db".into()),
            log_level: std::env::var("LOG_LEVEL").ok().filter(|s| !s.is_empty()),
            log_json: env_parse("LOG_JSON").unwrap_or(production),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| "Aurelia Voyages".into()),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS").unwrap_or(30_000),
            max_body_bytes: env_parse("MAX_BODY_BYTES").unwrap_or(1024 * 1024),
            environment,
        }
    }

    /// Configuration backed by an in-memory database, for tests
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            database_url: "sqlite::memory:".into(),
            environment: "test".into(),
            log_level: None,
            log_json: false,
            log_dir: None,
            site_name: "Aurelia Voyages".into(),
            request_timeout_ms: 30_000,
            max_body_bytes: 1024 * 1024,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
