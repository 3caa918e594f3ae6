use std::fmt;

#[derive(Debug, Clone)]
pub enum KmlQueryError {
    Config(String),
    FileOperation(String),
    Validation(String),
    Serialization(String),
    TransportUnavailable(String),
    Request(String),
    ElementNotFound(String),
    Worker(String),
}

impl KmlQueryError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            KmlQueryError::Config(_) => "E001",
            KmlQueryError::FileOperation(_) => "E002",
            KmlQueryError::Validation(_) => "E003",
            KmlQueryError::Serialization(_) => "E004",
            KmlQueryError::TransportUnavailable(_) => "E005",
            KmlQueryError::Request(_) => "E006",
            KmlQueryError::ElementNotFound(_) => "E007",
            KmlQueryError::Worker(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            KmlQueryError::Config(_) => "Configuration Error",
            KmlQueryError::FileOperation(_) => "File Operation Error",
            KmlQueryError::Validation(_) => "Validation Error",
            KmlQueryError::Serialization(_) => "Serialization Error",
            KmlQueryError::TransportUnavailable(_) => "HTTP Transport Unavailable",
            KmlQueryError::Request(_) => "Request Error",
            KmlQueryError::ElementNotFound(_) => "Element Not Found",
            KmlQueryError::Worker(_) => "Worker Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            KmlQueryError::Config(msg) => msg,
            KmlQueryError::FileOperation(msg) => msg,
            KmlQueryError::Validation(msg) => msg,
            KmlQueryError::Serialization(msg) => msg,
            KmlQueryError::TransportUnavailable(msg) => msg,
            KmlQueryError::Request(msg) => msg,
            KmlQueryError::ElementNotFound(msg) => msg,
            KmlQueryError::Worker(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端）
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for KmlQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for KmlQueryError {}

// 便捷的构造函数
impl KmlQueryError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        KmlQueryError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        KmlQueryError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        KmlQueryError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        KmlQueryError::Serialization(msg.into())
    }

    pub fn transport_unavailable<T: Into<String>>(msg: T) -> Self {
        KmlQueryError::TransportUnavailable(msg.into())
    }

    pub fn request<T: Into<String>>(msg: T) -> Self {
        KmlQueryError::Request(msg.into())
    }

    pub fn element_not_found<T: Into<String>>(msg: T) -> Self {
        KmlQueryError::ElementNotFound(msg.into())
    }

    pub fn worker<T: Into<String>>(msg: T) -> Self {
        KmlQueryError::Worker(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for KmlQueryError {
    fn from(err: std::io::Error) -> Self {
        KmlQueryError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for KmlQueryError {
    fn from(err: serde_json::Error) -> Self {
        KmlQueryError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for KmlQueryError {
    fn from(err: toml::ser::Error) -> Self {
        KmlQueryError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for KmlQueryError {
    fn from(err: config::ConfigError) -> Self {
        KmlQueryError::Config(err.to_string())
    }
}

impl From<ureq::Error> for KmlQueryError {
    fn from(err: ureq::Error) -> Self {
        KmlQueryError::Request(err.to_string())
    }
}

impl From<tokio::task::JoinError> for KmlQueryError {
    fn from(err: tokio::task::JoinError) -> Self {
        KmlQueryError::Worker(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KmlQueryError>;
