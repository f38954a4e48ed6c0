// ==========================================
// 短路电流计算器 - 计算结果实体
// ==========================================
// 职责: 分类条目 / 合并行 / 结果表
// ==========================================

use serde::{Deserialize, Serialize};

/// 分类条目
///
/// 分类阶段产生的单条记录；电流保留原始文本，合并阶段再做数值规整。
/// 生命周期限于单个记录集的一次计算。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    /// 母线名（原始）
    pub substation: String,

    /// 电流单元格原始文本
    pub current: String,
}

impl ClassifiedEntry {
    pub fn new(substation: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            substation: substation.into(),
            current: current.into(),
        }
    }
}

/// 合并行
///
/// 一个已解析母线标识的两类故障电流。`None` 表示该类故障缺失
/// 或电流无法解析（显式缺失标记，与 0 区分）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    /// 显示名称（查询表匹配结果，未匹配时为原始母线名）
    pub sub_name: String,

    /// 三相短路电流（kA，一位小数）
    pub sc2: Option<f64>,

    /// 单相短路电流（kA，一位小数）
    pub sc1: Option<f64>,
}

/// 结果表
///
/// 一个记录集的全部合并行；归结果存储独占持有。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// 记录集标识
    pub record_set_id: String,

    /// 合并行（三相序列决定行序）
    pub rows: Vec<MergedRow>,
}

impl ResultTable {
    pub fn new(record_set_id: impl Into<String>, rows: Vec<MergedRow>) -> Self {
        Self {
            record_set_id: record_set_id.into(),
            rows,
        }
    }
}
