//! KML 请求服务
//!
//! 收集表单 → 构造查询串 → 发送一次 GET → 把响应文本写入页面元素并显示。
//! 没有重试、取消或并发协调；每次调用只有一个请求在途。

use tracing::{debug, info, warn};

use crate::config::{EndpointConfig, StaticConfig};
use crate::errors::Result;
use crate::query::{KmlForm, RequestKind, build_request_url, random_cache_buster};
use crate::render::{RenderTarget, Visibility, show_hide};
use crate::transport::TransportChain;

/// 一次调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 请求类型未知，没有发送请求
    Skipped { code: u32 },
    /// 响应已写入页面元素
    Rendered {
        url: String,
        status: u16,
        bytes: usize,
    },
}

/// KML 客户端
pub struct KmlClient {
    endpoint: EndpointConfig,
    element_id: String,
    transports: TransportChain,
}

impl KmlClient {
    pub fn new(endpoint: EndpointConfig, element_id: String, transports: TransportChain) -> Self {
        Self {
            endpoint,
            element_id,
            transports,
        }
    }

    /// 按配置构造，使用默认 transport 链
    pub fn from_config(config: &StaticConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.render.element_id.clone(),
            TransportChain::from_config(&config.http),
        )
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// 返回将要发送的 URL（每次生成新的防缓存随机数）
    ///
    /// 未知请求类型返回 `None`。
    pub fn request_url(&self, code: u32, form: &KmlForm) -> Option<String> {
        match RequestKind::from_code(code)? {
            RequestKind::Kml => Some(build_request_url(
                &self.endpoint,
                form,
                random_cache_buster(self.endpoint.cache_buster_max),
            )),
        }
    }

    /// 发送请求并渲染响应
    ///
    /// 1. 通过 transport 链构造请求对象，全部失败则终止
    /// 2. 按请求类型构造 URL，未知类型直接返回 `Skipped`
    /// 3. 在阻塞线程池中发送 GET，等待完成
    /// 4. 响应文本写入元素并设置为 `block`
    ///
    /// 非 2xx 状态和成功一样渲染，只记录 warn 日志。
    pub async fn fetch_and_render<T: RenderTarget + ?Sized>(
        &self,
        code: u32,
        form: &KmlForm,
        target: &T,
    ) -> Result<FetchOutcome> {
        let transport = self.transports.open()?;

        let Some(url) = self.request_url(code, form) else {
            debug!("Request kind {} builds no URL, nothing sent", code);
            return Ok(FetchOutcome::Skipped { code });
        };

        info!("GET {}", url);

        let request_url = url.clone();
        let response = tokio::task::spawn_blocking(move || transport.get(&request_url)).await??;

        if !response.is_success() {
            warn!(
                "Endpoint answered with status {}, rendering body anyway",
                response.status
            );
        }

        target.set_inner_html(&self.element_id, &response.body)?;
        show_hide(target, &self.element_id, Some(Visibility::Block))?;

        debug!(
            "Rendered {} bytes into #{}",
            response.body.len(),
            self.element_id
        );

        Ok(FetchOutcome::Rendered {
            url,
            status: response.status,
            bytes: response.body.len(),
        })
    }

    /// `fetch_and_render` 的 KML 快捷方式
    pub async fn fetch_kml<T: RenderTarget + ?Sized>(
        &self,
        form: &KmlForm,
        target: &T,
    ) -> Result<FetchOutcome> {
        self.fetch_and_render(RequestKind::Kml.code(), form, target)
            .await
    }
}
