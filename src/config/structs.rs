use serde::{Deserialize, Serialize};

use crate::errors::{KmlQueryError, Result};
use crate::utils::url_validator::validate_url;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "kmlquery.toml";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "KMLQ";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - endpoint: CGI 端点地址、脚本名、动作名
/// - http: 超时与代理
/// - render: 响应写入的页面元素
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从默认路径和环境变量加载配置，失败时回退到默认值
    pub fn load() -> Self {
        match Self::load_from(None) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：KMLQ，分隔符：__
    /// 示例：KMLQ__ENDPOINT__BASE_URL=http://localhost/cgi-bin
    ///
    /// 显式指定的路径必须存在；默认路径缺失时直接使用默认值。
    pub fn load_from(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;

        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }

        Ok(config)
    }

    /// 校验端点地址
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.endpoint.base_url)
            .map_err(|e| KmlQueryError::config(format!("endpoint.base_url: {}", e)))?;

        if self.endpoint.script.trim().is_empty() {
            return Err(KmlQueryError::config("endpoint.script cannot be empty"));
        }
        let max = self.endpoint.cache_buster_max;
        if !max.is_finite() || max <= 0.0 {
            return Err(KmlQueryError::config(format!(
                "endpoint.cache_buster_max must be a finite number greater than 0, got {}",
                max
            )));
        }
        if self.render.element_id.is_empty() {
            return Err(KmlQueryError::config("render.element_id cannot be empty"));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// CGI 端点配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_script")]
    pub script: String,
    #[serde(default = "default_action")]
    pub action: String,
    /// 防缓存随机数上限
    #[serde(default = "default_cache_buster_max")]
    pub cache_buster_max: f64,
}

/// HTTP 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 显式代理，例如 http://proxy.local:3128
    #[serde(default)]
    pub proxy: Option<String>,
    /// 是否尝试读取 HTTP_PROXY / ALL_PROXY 等环境变量
    #[serde(default = "default_use_env_proxy")]
    pub use_env_proxy: bool,
}

/// 渲染目标配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_element_id")]
    pub element_id: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://localhost/cgi-bin".to_string()
}

fn default_script() -> String {
    "google_earth.cgi".to_string()
}

fn default_action() -> String {
    "createKML".to_string()
}

fn default_cache_buster_max() -> f64 {
    5000.0
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_use_env_proxy() -> bool {
    true
}

fn default_element_id() -> String {
    "kml".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

// ============================================================
// Default implementations
// ============================================================

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            script: default_script(),
            action: default_action(),
            cache_buster_max: default_cache_buster_max(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            proxy: None,
            use_env_proxy: default_use_env_proxy(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            element_id: default_element_id(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
