use tracing::{debug, error, info};

use super::{
    ConfiguredProxyFactory, DirectFactory, EnvironmentProxyFactory, HttpTransport,
    TransportFactory,
};
use crate::config::HttpConfig;
use crate::errors::{KmlQueryError, Result};

/// 按顺序尝试的 transport 构造链
pub struct TransportChain {
    factories: Vec<Box<dyn TransportFactory>>,
}

impl TransportChain {
    pub fn new(factories: Vec<Box<dyn TransportFactory>>) -> Self {
        Self { factories }
    }

    /// 默认链：配置代理 → 环境代理 → 直连
    pub fn from_config(config: &HttpConfig) -> Self {
        Self::new(vec![
            Box::new(ConfiguredProxyFactory::new(config)),
            Box::new(EnvironmentProxyFactory::new(config)),
            Box::new(DirectFactory::new(config)),
        ])
    }

    /// 构造第一个可用的 transport
    ///
    /// 每次失败只记录 debug 日志；全部失败返回 `TransportUnavailable`。
    pub fn open(&self) -> Result<Box<dyn HttpTransport>> {
        let mut tried = Vec::with_capacity(self.factories.len());

        for factory in &self.factories {
            match factory.create() {
                Ok(transport) => {
                    info!("HTTP transport: using {}", transport.name());
                    return Ok(transport);
                }
                Err(e) => {
                    debug!("HTTP transport {} unavailable: {}", factory.name(), e.message());
                    tried.push(factory.name());
                }
            }
        }

        error!("No HTTP transport available (tried: {:?})", tried);
        Err(KmlQueryError::transport_unavailable(format!(
            "this environment does not support HTTP requests (tried: {})",
            tried.join(", ")
        )))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.factories.iter().map(|f| f.name()).collect()
    }
}
