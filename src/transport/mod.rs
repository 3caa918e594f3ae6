//! HTTP transport 抽象层
//!
//! 请求对象按顺序尝试三种构造方式：
//! 1. 配置文件中指定的代理
//! 2. 环境变量中的代理（HTTP_PROXY / ALL_PROXY 等）
//! 3. 直连
//!
//! 全部失败时返回 `TransportUnavailable`，本次操作终止。

mod chain;
mod ureq_agent;

pub use chain::TransportChain;
pub use ureq_agent::{ConfiguredProxyFactory, DirectFactory, EnvironmentProxyFactory, UreqTransport};

use crate::errors::Result;

/// 一次 GET 的结果
///
/// 非 2xx 状态不视为错误，状态码和响应体原样保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 已构造好的请求对象
pub trait HttpTransport: Send + Sync {
    /// 发送一次 GET，阻塞直到响应体读取完毕
    fn get(&self, url: &str) -> Result<HttpResponse>;

    /// 名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 请求对象的构造方式
pub trait TransportFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn HttpTransport>>;

    fn name(&self) -> &'static str;
}
