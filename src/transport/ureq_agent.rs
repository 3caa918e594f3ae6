//! ureq 实现
//!
//! 三个 factory 对应三种 Agent 构造方式，构造出的 transport 都是 `UreqTransport`。

use std::time::Duration;

use tracing::trace;
use ureq::{Agent, Proxy};

use super::{HttpResponse, HttpTransport, TransportFactory};
use crate::config::HttpConfig;
use crate::errors::{KmlQueryError, Result};

/// 基于 ureq Agent 的 transport
pub struct UreqTransport {
    agent: Agent,
    name: &'static str,
}

impl UreqTransport {
    fn build(name: &'static str, timeout_secs: u64, proxy: Option<Proxy>) -> Self {
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));
        let agent: Agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .proxy(proxy)
            .build()
            .into();

        Self { agent, name }
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let resp = self.agent.get(url).call()?;
        let status = resp.status().as_u16();
        let body = resp.into_body().read_to_string()?;

        trace!(
            "{} transport: GET {} -> {} ({} bytes)",
            self.name,
            url,
            status,
            body.len()
        );

        Ok(HttpResponse { status, body })
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// 使用配置文件中 `http.proxy` 的 Agent
pub struct ConfiguredProxyFactory {
    proxy: Option<String>,
    timeout_secs: u64,
}

impl ConfiguredProxyFactory {
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            proxy: config.proxy.clone().filter(|p| !p.trim().is_empty()),
            timeout_secs: config.timeout_secs,
        }
    }
}

impl TransportFactory for ConfiguredProxyFactory {
    fn create(&self) -> Result<Box<dyn HttpTransport>> {
        let proxy_url = self
            .proxy
            .as_deref()
            .ok_or_else(|| KmlQueryError::transport_unavailable("no proxy configured"))?;

        let proxy = Proxy::new(proxy_url).map_err(|e| {
            KmlQueryError::transport_unavailable(format!("invalid proxy '{}': {}", proxy_url, e))
        })?;

        Ok(Box::new(UreqTransport::build(
            self.name(),
            self.timeout_secs,
            Some(proxy),
        )))
    }

    fn name(&self) -> &'static str {
        "configured-proxy"
    }
}

/// 使用环境变量代理的 Agent
pub struct EnvironmentProxyFactory {
    enabled: bool,
    timeout_secs: u64,
}

impl EnvironmentProxyFactory {
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            enabled: config.use_env_proxy,
            timeout_secs: config.timeout_secs,
        }
    }
}

impl TransportFactory for EnvironmentProxyFactory {
    fn create(&self) -> Result<Box<dyn HttpTransport>> {
        if !self.enabled {
            return Err(KmlQueryError::transport_unavailable(
                "environment proxy disabled",
            ));
        }

        let proxy = Proxy::try_from_env().ok_or_else(|| {
            KmlQueryError::transport_unavailable("no proxy set in environment")
        })?;

        Ok(Box::new(UreqTransport::build(
            self.name(),
            self.timeout_secs,
            Some(proxy),
        )))
    }

    fn name(&self) -> &'static str {
        "environment-proxy"
    }
}

/// 直连 Agent，显式关闭代理
pub struct DirectFactory {
    timeout_secs: u64,
}

impl DirectFactory {
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            timeout_secs: config.timeout_secs,
        }
    }
}

impl TransportFactory for DirectFactory {
    fn create(&self) -> Result<Box<dyn HttpTransport>> {
        Ok(Box::new(UreqTransport::build(
            self.name(),
            self.timeout_secs,
            None,
        )))
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}
