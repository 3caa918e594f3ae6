use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::trace;

use super::{RenderTarget, Visibility};
use crate::errors::{KmlQueryError, Result};

/// 页面元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub content: String,
    pub display: Visibility,
}

impl Default for Element {
    /// 新元素为空且隐藏
    fn default() -> Self {
        Self {
            content: String::new(),
            display: Visibility::None,
        }
    }
}

/// 内存中的页面，按 id 保存元素
#[derive(Debug, Default)]
pub struct Document {
    elements: RwLock<HashMap<String, Element>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个空的隐藏元素
    pub fn with_element(self, id: &str) -> Self {
        self.insert_element(id, Element::default());
        self
    }

    pub fn insert_element(&self, id: &str, element: Element) {
        self.elements.write().insert(id.to_string(), element);
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.elements.read().get(id).cloned()
    }

    /// 元素存在且可见时返回其内容
    pub fn visible_content(&self, id: &str) -> Option<String> {
        self.elements
            .read()
            .get(id)
            .filter(|e| e.display.is_visible())
            .map(|e| e.content.clone())
    }

    fn update_element<F>(&self, id: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Element),
    {
        let mut elements = self.elements.write();
        let element = elements
            .get_mut(id)
            .ok_or_else(|| KmlQueryError::element_not_found(format!("no element with id '{}'", id)))?;
        f(element);
        Ok(())
    }
}

impl RenderTarget for Document {
    fn set_inner_html(&self, id: &str, html: &str) -> Result<()> {
        trace!("Document: set content of #{} ({} bytes)", id, html.len());
        self.update_element(id, |e| e.content = html.to_string())
    }

    fn set_display(&self, id: &str, state: Visibility) -> Result<()> {
        trace!("Document: #{} display={}", id, state);
        self.update_element(id, |e| e.display = state)
    }
}
