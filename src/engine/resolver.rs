// ==========================================
// 短路电流计算器 - 匹配与合并引擎
// ==========================================
// 职责: 显示名解析(子串匹配,先配对者优先) + 三相/单相按名合并
// 规则: 未匹配条目按原始母线名透传; 三相序列决定行序
// ==========================================

use crate::domain::{parse_current, LookupTable, MergedRow};
use crate::engine::classifier::ClassifiedEntries;
use crate::engine::error::{EngineError, EngineResult};

/// 合并结果
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// 合并行（三相序列决定行序，单相独有的母线追加在后）
    pub rows: Vec<MergedRow>,

    /// 两类条目中均无子串匹配的查询 key（警告级别）
    pub unmatched_keys: Vec<String>,
}

// 合并中间行: 单相槽位需要区分 "未填充" 与 "已填充但解析失败"，
// 两者对外都是 None，但后者不能再被后续同名条目覆盖。
struct PendingRow {
    sub_name: String,
    sc2: Option<f64>,
    sc1: Option<f64>,
    sc1_filled: bool,
}

// ==========================================
// ResolverMerger - 匹配合并引擎
// ==========================================
pub struct ResolverMerger {
    // 无状态引擎,不需要注入依赖
}

impl ResolverMerger {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 解析显示名并合并两类故障序列
    ///
    /// 每个分类条目先按查询表解析显示名（第一个 key 为其母线名子串的
    /// 查询对优先；无匹配则保留原始母线名），再按显示名做键连接：
    /// 三相序列按原顺序生成行，单相条目填充第一个同名且单相槽位
    /// 未填充的行，无同名行则追加。重复母线名产生重复行。
    ///
    /// # 错误
    /// - `EngineError::NoMatchedData`: 两类条目均为空
    /// - `EngineError::NoKeyMatched`: 所有查询 key 均未匹配到任何条目
    pub fn resolve_and_merge(
        &self,
        classified: &ClassifiedEntries,
        lookup: &LookupTable,
    ) -> EngineResult<MergeOutcome> {
        if classified.is_empty() {
            return Err(EngineError::NoMatchedData);
        }

        // 逐 key 检查是否匹配到任一条目；单个 key 未匹配仅是警告，
        // 全部未匹配则该记录集致命。
        let mut unmatched_keys = Vec::new();
        for pair in lookup.pairs() {
            if !LookupTable::key_matches_any(&pair.key, classified.substation_names()) {
                unmatched_keys.push(pair.key.clone());
            }
        }
        if unmatched_keys.len() == lookup.pairs().len() {
            return Err(EngineError::NoKeyMatched);
        }

        // 三相序列决定行序
        let mut pending: Vec<PendingRow> = classified
            .three_phase
            .iter()
            .map(|entry| PendingRow {
                sub_name: self.display_name(lookup, &entry.substation),
                sc2: parse_current(&entry.current),
                sc1: None,
                sc1_filled: false,
            })
            .collect();

        // 单相条目按显示名填充，无同名行则追加
        for entry in &classified.single_phase {
            let sub_name = self.display_name(lookup, &entry.substation);
            let value = parse_current(&entry.current);

            match pending
                .iter_mut()
                .find(|row| row.sub_name == sub_name && !row.sc1_filled)
            {
                Some(row) => {
                    row.sc1 = value;
                    row.sc1_filled = true;
                }
                None => pending.push(PendingRow {
                    sub_name,
                    sc2: None,
                    sc1: value,
                    sc1_filled: true,
                }),
            }
        }

        let rows = pending
            .into_iter()
            .map(|row| MergedRow {
                sub_name: row.sub_name,
                sc2: row.sc2,
                sc1: row.sc1,
            })
            .collect();

        Ok(MergeOutcome {
            rows,
            unmatched_keys,
        })
    }

    /// 解析条目的显示名（未匹配回落到原始母线名）
    fn display_name(&self, lookup: &LookupTable, substation: &str) -> String {
        lookup
            .resolve(substation)
            .unwrap_or(substation)
            .to_string()
    }
}

impl Default for ResolverMerger {
    fn default() -> Self {
        Self::new()
    }
}
