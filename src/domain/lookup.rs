// ==========================================
// 短路电流计算器 - 母线名查询表
// ==========================================
// 职责: 逗号分隔参数的解析与显示名解析
// 规则: 按位置配对；子串包含匹配；先配对者优先
// ==========================================

use crate::engine::error::EngineError;
use serde::{Deserialize, Serialize};

/// 查询对
///
/// `key` 为母线名子串，`display_name` 为匹配后替换的显示名称。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupPair {
    pub key: String,
    pub display_name: String,
}

/// 查询表
///
/// 调用方提供的有序查询对序列；顺序即优先级。
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    pairs: Vec<LookupPair>,
}

impl LookupTable {
    /// 从两个逗号分隔字符串解析查询表
    ///
    /// 各条目去除首尾空白后丢弃空条目；两侧条目数必须相同且非空。
    ///
    /// # 错误
    /// - `EngineError::EmptyParameter`: 任一侧为空
    /// - `EngineError::ParameterLengthMismatch`: 条目数不一致
    pub fn parse(keys_input: &str, names_input: &str) -> Result<Self, EngineError> {
        let keys = split_entries(keys_input);
        let names = split_entries(names_input);

        if keys.is_empty() {
            return Err(EngineError::EmptyParameter("母线名 (DS)"));
        }
        if names.is_empty() {
            return Err(EngineError::EmptyParameter("显示名称 (DS1)"));
        }
        if keys.len() != names.len() {
            return Err(EngineError::ParameterLengthMismatch {
                keys: keys.len(),
                names: names.len(),
            });
        }

        let pairs = keys
            .into_iter()
            .zip(names)
            .map(|(key, display_name)| LookupPair { key, display_name })
            .collect();

        Ok(Self { pairs })
    }

    /// 查询对列表（调用方顺序）
    pub fn pairs(&self) -> &[LookupPair] {
        &self.pairs
    }

    /// 解析母线名对应的显示名称
    ///
    /// 第一个 key 为 `substation` 子串的查询对决定显示名称；
    /// 无任何匹配时返回 `None`（调用方回落到原始母线名）。
    pub fn resolve(&self, substation: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| substation.contains(pair.key.as_str()))
            .map(|pair| pair.display_name.as_str())
    }

    /// key 是否匹配到任一母线名
    pub fn key_matches_any<'a, I>(key: &str, mut names: I) -> bool
    where
        I: Iterator<Item = &'a str>,
    {
        names.any(|name| name.contains(key))
    }
}

/// 拆分逗号分隔条目（去空白、丢弃空条目）
fn split_entries(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
