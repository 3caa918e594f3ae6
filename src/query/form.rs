//! 表单参数
//!
//! 七个字段全部按原样保存为文本，不做数值校验，直接拼进查询串。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{KmlQueryError, Result};

/// 字段名，顺序即查询串中的顺序
pub const FORM_FIELDS: [&str; 7] = ["layer", "region", "west", "south", "east", "north", "time"];

/// KML 请求表单
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KmlForm {
    pub layer: String,
    pub region: String,
    pub west: String,
    pub south: String,
    pub east: String,
    pub north: String,
    pub time: String,
}

impl KmlForm {
    /// 从字段名 → 值的映射构建表单
    ///
    /// 缺少任何一个字段都会返回 `Validation` 错误，错误信息包含字段名。
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self> {
        let get = |name: &str| -> Result<String> {
            fields
                .get(name)
                .cloned()
                .ok_or_else(|| KmlQueryError::validation(format!("missing form field: {}", name)))
        };

        Ok(Self {
            layer: get("layer")?,
            region: get("region")?,
            west: get("west")?,
            south: get("south")?,
            east: get("east")?,
            north: get("north")?,
            time: get("time")?,
        })
    }

    /// 按固定顺序返回 (字段名, 值)
    pub fn pairs(&self) -> [(&'static str, &str); 7] {
        [
            ("layer", self.layer.as_str()),
            ("region", self.region.as_str()),
            ("west", self.west.as_str()),
            ("south", self.south.as_str()),
            ("east", self.east.as_str()),
            ("north", self.north.as_str()),
            ("time", self.time.as_str()),
        ]
    }
}

/// 请求类型
///
/// 数字编码沿用页面脚本的约定：`1` 表示 KML，其余编码不发请求。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Kml,
}

impl RequestKind {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Kml),
            _ => None,
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::Kml => 1,
        }
    }
}
